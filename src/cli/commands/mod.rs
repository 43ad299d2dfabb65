pub mod add;
pub mod config;
pub mod day;
pub mod export;
pub mod init;
pub mod list;
pub mod week;

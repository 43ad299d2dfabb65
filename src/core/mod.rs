pub mod classify;
pub mod day;
pub mod merge;
pub mod pairs;
pub mod policy;
pub mod week;

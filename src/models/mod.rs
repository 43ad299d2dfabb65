pub mod action;
pub mod event;
pub mod post;
pub mod report;
pub mod shift;

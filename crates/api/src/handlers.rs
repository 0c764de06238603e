pub mod availability;
pub mod comment;
pub mod schedule;

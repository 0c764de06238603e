pub mod availability;
pub mod candidate;
pub mod comment;
pub mod schedule;
pub mod user;

pub mod availability;
pub mod comment;
pub mod health;
pub mod schedule;

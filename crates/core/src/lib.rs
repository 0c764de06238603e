//! # Rollcall Core
//!
//! Domain types and logic for tri-state availability voting: the models,
//! the error taxonomy, the storage ports implemented by `rollcall-db`, the
//! availability matrix builder and the toggle protocol.

pub mod errors;
pub mod matrix;
pub mod models;
pub mod store;
pub mod toggle;

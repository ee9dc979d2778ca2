//! Treemark — a bookmark tree transformation engine over a SQLite-backed store.
//!
//! This library crate exposes all modules for use by integration tests and
//! embedding applications.

pub mod database;
pub mod engine;
pub mod store;
pub mod types;

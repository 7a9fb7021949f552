//! Repository layer for persisting entities to SQLite

pub mod hydration;
pub mod persistent;
pub mod sqlite_repo;

pub use persistent::Persistent;
pub use sqlite_repo::{Persisted, SqliteRepo};

//! MonoModel Store - SQLite persistence for monomodel entities
//!
//! Provides:
//! - Connection helpers and the [`Db`] connection holder
//! - Parameter binding for generated statements
//! - The [`Persistent`] operations (finders, save, soft delete, touch)

pub mod bind;
pub mod db;
pub mod errors;
pub mod repo;

// Re-export key types
pub use db::Db;
pub use errors::Result;
pub use repo::Persistent;

//! MonoModel Core - entity model and persistence rules
//!
//! This crate holds everything about persistence that does not need a live
//! connection:
//! - The entity contract ([`Entity`]) with static field descriptors
//! - Table-name derivation from type names
//! - Equality filters and SELECT/INSERT/UPDATE statement text
//! - Content fingerprints for dirty checking
//! - Audit timestamps and the soft-delete state machine
//! - The error and logging facilities shared with `monomodel-store`

pub mod errors;
pub mod fingerprint;
pub mod lifecycle;
pub mod logging_facility;
pub mod model;
pub mod naming;
pub mod sql;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, ModelError, Result};
pub use lifecycle::EntityState;
pub use model::{Entity, Field, Record, Row, Value};
pub use sql::{Filters, Statement};

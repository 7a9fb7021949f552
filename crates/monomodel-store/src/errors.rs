//! Error handling for monomodel-store
//!
//! Wraps monomodel-core ExError with store-specific helpers

use monomodel_core::errors::{ExError, ExErrorKind, ModelError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create the error for an operation attempted before `connect`
pub fn missing_connection() -> ExError {
    ModelError::MissingConnection.into()
}

/// Create a database error from rusqlite::Error
///
/// The driver's message is kept verbatim; only the operation and table are
/// added.
pub fn from_rusqlite(op: &str, table: &str, err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op(op.to_string())
        .with_table(table.to_string())
        .with_message(err.to_string())
}

/// Attach operation and entity context to a model error
pub fn from_model(op: &str, entity: &str, err: ModelError) -> ExError {
    let ex: ExError = err.into();
    ex.with_op(op.to_string()).with_entity(entity.to_string())
}

/// Create a connection setup error
pub fn connection_error(op: &str, err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op(op.to_string())
        .with_message(err.to_string())
}

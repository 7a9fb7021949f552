//! Base record state shared by every entity
//!
//! Holds the audit columns, the soft-delete flag and the transient
//! fingerprint. Concrete entities embed one `Record` and expose it through
//! [`Entity::record`](crate::model::Entity::record).

use crate::errors::Result;
use crate::model::Value;

pub const COL_ID: &str = "id";
pub const COL_CREATED_AT: &str = "created_at";
pub const COL_CREATED_BY: &str = "created_by";
pub const COL_UPDATED_AT: &str = "updated_at";
pub const COL_UPDATED_BY: &str = "updated_by";
pub const COL_IS_DELETED: &str = "is_deleted";

/// Audit columns in persistence order (after `id`, before domain fields)
pub const AUDIT_COLUMNS: [&str; 5] = [
    COL_CREATED_AT,
    COL_CREATED_BY,
    COL_UPDATED_AT,
    COL_UPDATED_BY,
    COL_IS_DELETED,
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    created_at: Option<String>,
    created_by: Option<i64>,
    updated_at: Option<String>,
    updated_by: Option<i64>,
    is_deleted: bool,
    hash: Option<String>,
}

impl Record {
    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    pub fn created_by(&self) -> Option<i64> {
        self.created_by
    }

    pub fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }

    pub fn updated_by(&self) -> Option<i64> {
        self.updated_by
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Fingerprint taken at the last read from or write to the store
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    pub fn set_created_at(&mut self, value: Option<String>) {
        self.created_at = value;
    }

    pub fn set_created_by(&mut self, value: Option<i64>) {
        self.created_by = value;
    }

    pub fn set_updated_at(&mut self, value: Option<String>) {
        self.updated_at = value;
    }

    pub fn set_updated_by(&mut self, value: Option<i64>) {
        self.updated_by = value;
    }

    pub fn set_deleted(&mut self, value: bool) {
        self.is_deleted = value;
    }

    pub(crate) fn set_hash(&mut self, value: Option<String>) {
        self.hash = value;
    }

    /// Audit column values, in [`AUDIT_COLUMNS`] order
    pub fn audit_values(&self) -> [(&'static str, Value); 5] {
        [
            (COL_CREATED_AT, Value::from(self.created_at.clone())),
            (COL_CREATED_BY, Value::from(self.created_by)),
            (COL_UPDATED_AT, Value::from(self.updated_at.clone())),
            (COL_UPDATED_BY, Value::from(self.updated_by)),
            (COL_IS_DELETED, Value::from(self.is_deleted)),
        ]
    }

    /// Assign an audit column; returns `false` when `column` is not one
    pub fn assign(&mut self, column: &str, value: Value) -> Result<bool> {
        match column {
            COL_CREATED_AT => self.created_at = value.into_opt_string(column)?,
            COL_CREATED_BY => self.created_by = value.into_opt_i64(column)?,
            COL_UPDATED_AT => self.updated_at = value.into_opt_string(column)?,
            COL_UPDATED_BY => self.updated_by = value.into_opt_i64(column)?,
            COL_IS_DELETED => self.is_deleted = value.into_bool(column)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

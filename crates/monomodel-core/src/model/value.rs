//! Column values
//!
//! `Value` is the only currency between entities and SQL: field getters
//! produce one, field setters consume one, rows are made of them.

use crate::errors::{ModelError, Result};
use serde::Serialize;

/// A single column value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Text(_) => "text",
            Value::Blob(_) => "blob",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Read as an optional integer
    ///
    /// Text holding a decimal integer is accepted, since drivers hand back
    /// whatever the column affinity produced.
    pub fn into_opt_i64(self, field: &str) -> Result<Option<i64>> {
        match self {
            Value::Null => Ok(None),
            Value::Integer(i) => Ok(Some(i)),
            Value::Text(ref s) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| mismatch(field, "integer", &self)),
            other => Err(mismatch(field, "integer", &other)),
        }
    }

    /// Read as an optional string; numbers are rendered as text
    pub fn into_opt_string(self, field: &str) -> Result<Option<String>> {
        match self {
            Value::Null => Ok(None),
            Value::Text(s) => Ok(Some(s)),
            Value::Integer(i) => Ok(Some(i.to_string())),
            Value::Real(r) => Ok(Some(r.to_string())),
            other => Err(mismatch(field, "text", &other)),
        }
    }

    /// Read as a boolean flag (`NULL` and `0` are false)
    pub fn into_bool(self, field: &str) -> Result<bool> {
        match self {
            Value::Null => Ok(false),
            Value::Integer(i) => Ok(i != 0),
            Value::Text(ref s) => match s.trim() {
                "" | "0" => Ok(false),
                "1" => Ok(true),
                _ => Err(mismatch(field, "boolean", &self)),
            },
            other => Err(mismatch(field, "boolean", &other)),
        }
    }

    pub fn into_opt_f64(self, field: &str) -> Result<Option<f64>> {
        match self {
            Value::Null => Ok(None),
            Value::Real(r) => Ok(Some(r)),
            Value::Integer(i) => Ok(Some(i as f64)),
            other => Err(mismatch(field, "real", &other)),
        }
    }
}

fn mismatch(field: &str, expected: &'static str, found: &Value) -> ModelError {
    ModelError::FieldType {
        field: field.to_string(),
        expected,
        found: found.type_name(),
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Integer(if v { 1 } else { 0 })
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

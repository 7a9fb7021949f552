//! Hydration layer - turns SQLite result rows into entities
//!
//! Column names come from the prepared statement, so `SELECT *` works for
//! any table whose columns line up with an entity's fields.

#![allow(clippy::result_large_err)]

use crate::errors::{from_model, Result};
use monomodel_core::fingerprint::rehash;
use monomodel_core::model::{Entity, Row, Value};
use rusqlite::types::ValueRef;

/// Convert one SQLite value into a model value
pub fn to_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(r) => Value::Real(r),
        ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
    }
}

/// Copy a driver row into a name-keyed [`Row`]
pub fn to_row(row: &rusqlite::Row<'_>, columns: &[String]) -> rusqlite::Result<Row> {
    let mut out = Row::new();
    for (idx, name) in columns.iter().enumerate() {
        out.push(name.clone(), to_value(row.get_ref(idx)?));
    }
    Ok(out)
}

/// Materialise an entity and take its fingerprint
///
/// Every entity handed out by a finder starts clean: saving it without
/// changes issues no statement.
pub fn hydrate<E: Entity>(op: &str, row: Row) -> Result<E> {
    let mut entity = E::from_row(row).map_err(|e| from_model(op, E::NAME, e))?;
    rehash(&mut entity).map_err(|e| from_model(op, E::NAME, e))?;
    Ok(entity)
}

//! Parameter binding for generated statements

use monomodel_core::model::Value;
use rusqlite::types::{ToSql, ToSqlOutput, ValueRef};
use rusqlite::ParamsFromIter;

/// Borrowing adapter that lets rusqlite bind a model [`Value`]
pub struct SqlParam<'a>(pub &'a Value);

impl ToSql for SqlParam<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let value = match self.0 {
            Value::Null => ValueRef::Null,
            Value::Integer(i) => ValueRef::Integer(*i),
            Value::Real(r) => ValueRef::Real(*r),
            Value::Text(s) => ValueRef::Text(s.as_bytes()),
            Value::Blob(b) => ValueRef::Blob(b),
        };
        Ok(ToSqlOutput::Borrowed(value))
    }
}

/// Positional params for a statement's `?` placeholders
pub fn params(values: &[Value]) -> ParamsFromIter<impl Iterator<Item = SqlParam<'_>>> {
    rusqlite::params_from_iter(values.iter().map(SqlParam))
}

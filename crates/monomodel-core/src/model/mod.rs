//! Entity model: values, rows, the base record and the entity contract

pub mod entity;
pub mod record;
pub mod row;
pub mod value;

pub use entity::{Entity, Field};
pub use record::Record;
pub use row::Row;
pub use value::Value;

#[cfg(test)]
pub(crate) mod fixtures;

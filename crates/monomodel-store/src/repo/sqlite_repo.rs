//! SQLite repository implementation
//!
//! Builds statements for any [`Entity`] from its descriptors and runs them on
//! the connection held by [`Db`], binding every value as a parameter. Logging
//! here is debug-level only and shows placeholders, never values; the
//! [`Persistent`](crate::repo::Persistent) operations own the lifecycle events.

#![allow(clippy::result_large_err)]

use crate::bind::params;
use crate::db::Db;
use crate::errors::{from_model, from_rusqlite, Result};
use crate::repo::hydration::{hydrate, to_row};
use monomodel_core::fingerprint::rehash;
use monomodel_core::lifecycle::{fill_timestamps, needs_persist};
use monomodel_core::model::record::COL_ID;
use monomodel_core::model::{Entity, Value};
use monomodel_core::sql::{self, Filters};
use rusqlite::Connection;

/// Outcome of [`SqliteRepo::persist`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persisted {
    Inserted,
    Updated,
    /// Fingerprint unchanged on a stored entity; no statement issued
    Unchanged,
}

/// SQLite repository for entity tables
pub struct SqliteRepo;

impl SqliteRepo {
    /// First entity matching `filters`, if any
    pub fn find_one<E: Entity>(db: &Db, op: &str, filters: &Filters) -> Result<Option<E>> {
        let conn = db.connection()?;
        let table = E::table_name();
        let select = sql::select(&table, filters, None);
        tracing::debug!(table = %table, sql = %select.sql, "Selecting one row");

        let mut stmt = conn
            .prepare(&select.sql)
            .map_err(|e| from_rusqlite(op, &table, e))?;
        let columns = column_names(&stmt);
        let mut rows = stmt
            .query(params(&select.params))
            .map_err(|e| from_rusqlite(op, &table, e))?;

        match rows.next().map_err(|e| from_rusqlite(op, &table, e))? {
            Some(row) => {
                let row = to_row(row, &columns).map_err(|e| from_rusqlite(op, &table, e))?;
                hydrate(op, row).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Every entity matching `filters`, at most `limit` when it is positive
    pub fn find_all<E: Entity>(
        db: &Db,
        op: &str,
        filters: &Filters,
        limit: Option<u32>,
    ) -> Result<Vec<E>> {
        let conn = db.connection()?;
        let table = E::table_name();
        let select = sql::select(&table, filters, limit);
        tracing::debug!(table = %table, sql = %select.sql, "Selecting rows");

        let mut stmt = conn
            .prepare(&select.sql)
            .map_err(|e| from_rusqlite(op, &table, e))?;
        let columns = column_names(&stmt);
        let rows = stmt
            .query_map(params(&select.params), |row| to_row(row, &columns))
            .map_err(|e| from_rusqlite(op, &table, e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite(op, &table, e))?;

        tracing::debug!(table = %table, row_count = rows.len(), "Selected rows");
        rows.into_iter().map(|row| hydrate(op, row)).collect()
    }

    /// Write the entity if it is new or its fingerprint changed
    ///
    /// New entities are inserted and receive the generated identifier;
    /// stored ones are updated by `id`. Timestamps are filled before the
    /// statement is built and the fingerprint is retaken afterwards.
    pub fn persist<E: Entity>(db: &Db, op: &str, entity: &mut E) -> Result<Persisted> {
        let conn = db.connection()?;

        if !needs_persist(entity).map_err(|e| from_model(op, E::NAME, e))? {
            tracing::debug!(entity = E::NAME, id = ?entity.id(), "Unchanged; skipping write");
            return Ok(Persisted::Unchanged);
        }

        fill_timestamps(entity);

        let outcome = if entity.is_new() {
            Self::insert(conn, op, entity)?;
            Persisted::Inserted
        } else {
            Self::update(conn, op, entity)?;
            Persisted::Updated
        };

        rehash(entity).map_err(|e| from_model(op, E::NAME, e))?;
        Ok(outcome)
    }

    /// `INSERT` the persisted columns and adopt the generated identifier
    ///
    /// On failure the identifier is left untouched.
    fn insert<E: Entity>(conn: &Connection, op: &str, entity: &mut E) -> Result<()> {
        let table = E::table_name();
        let values: Vec<(&str, Value)> = entity
            .persisted_values()
            .into_iter()
            .map(|(column, value)| {
                // A new entity's id is zero or absent; let the store pick one
                if column == COL_ID {
                    (column, Value::Null)
                } else {
                    (column, value)
                }
            })
            .collect();

        let insert = sql::insert(&table, &values);
        tracing::debug!(table = %table, sql = %insert.sql, "Inserting row");

        conn.execute(&insert.sql, params(&insert.params))
            .map_err(|e| from_rusqlite(op, &table, e))?;
        let id = conn.last_insert_rowid();
        entity.set_id(Some(id));

        tracing::debug!(table = %table, entity_id = id, "Inserted row");
        Ok(())
    }

    /// `UPDATE` every persisted column of the row with the entity's id
    fn update<E: Entity>(conn: &Connection, op: &str, entity: &E) -> Result<()> {
        let table = E::table_name();
        let values = entity.persisted_values();
        let update = sql::update(&table, &values, &Value::from(entity.id()));
        tracing::debug!(table = %table, sql = %update.sql, "Updating row");

        let changed = conn
            .execute(&update.sql, params(&update.params))
            .map_err(|e| from_rusqlite(op, &table, e))?;
        tracing::debug!(table = %table, row_count = changed, "Updated row");
        Ok(())
    }
}

fn column_names(stmt: &rusqlite::Statement<'_>) -> Vec<String> {
    stmt.column_names().into_iter().map(String::from).collect()
}

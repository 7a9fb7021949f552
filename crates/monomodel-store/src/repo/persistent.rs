//! Persistence operations available on every entity
//!
//! `Persistent` is implemented for all [`Entity`] types, so a model only
//! declares its fields and gets finders, save and soft-delete for free:
//!
//! ```no_run
//! # use monomodel_store::{Db, Persistent};
//! # fn demo<E: monomodel_core::Entity>(db: &Db) -> monomodel_store::Result<()> {
//! if let Some(mut entity) = E::find(db, 1)? {
//!     entity.delete(db)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! These are the boundary operations: each one logs start, end and error
//! events. Lower layers only emit debug events.

#![allow(clippy::result_large_err)]

use crate::db::Db;
use crate::errors::Result;
use crate::repo::sqlite_repo::{Persisted, SqliteRepo};
use monomodel_core::lifecycle::{mark_deleted, mark_restored, prepare_touch};
use monomodel_core::model::record::{COL_ID, COL_IS_DELETED};
use monomodel_core::model::Entity;
use monomodel_core::sql::Filters;
use monomodel_core::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

pub trait Persistent: Entity {
    /// Live (not soft-deleted) entity with this id
    fn find(db: &Db, id: i64) -> Result<Option<Self>> {
        let filters = Filters::new().eq(COL_ID, id).eq(COL_IS_DELETED, false);
        boundary::<Self, _>("find", || SqliteRepo::find_one(db, "find", &filters))
    }

    /// Soft-deleted entity with this id
    fn find_trashed(db: &Db, id: i64) -> Result<Option<Self>> {
        let filters = Filters::new().eq(COL_ID, id).eq(COL_IS_DELETED, true);
        boundary::<Self, _>("find_trashed", || {
            SqliteRepo::find_one(db, "find_trashed", &filters)
        })
    }

    /// Entity with this id regardless of its deletion flag
    fn find_any(db: &Db, id: i64) -> Result<Option<Self>> {
        let filters = Filters::new().eq(COL_ID, id);
        boundary::<Self, _>("find_any", || SqliteRepo::find_one(db, "find_any", &filters))
    }

    /// First entity whose columns equal every filter value
    ///
    /// Soft-deleted rows are not excluded unless the filters say so.
    fn find_by(db: &Db, filters: &Filters) -> Result<Option<Self>> {
        boundary::<Self, _>("find_by", || SqliteRepo::find_one(db, "find_by", filters))
    }

    /// All matching entities; `limit` of `None` or zero means unbounded
    fn find_all_by(db: &Db, filters: &Filters, limit: Option<u32>) -> Result<Vec<Self>> {
        boundary::<Self, _>("find_all_by", || {
            SqliteRepo::find_all(db, "find_all_by", filters, limit)
        })
    }

    /// Insert or update, skipping the write when nothing changed
    fn save(&mut self, db: &Db) -> Result<&mut Self> {
        boundary::<Self, _>("save", || SqliteRepo::persist(db, "save", self))?;
        Ok(self)
    }

    /// Flag as deleted and save; the row stays in the table
    fn delete(&mut self, db: &Db) -> Result<&mut Self> {
        boundary::<Self, _>("delete", || {
            mark_deleted(self);
            SqliteRepo::persist(db, "delete", self)
        })?;
        Ok(self)
    }

    /// Clear the deletion flag and save
    fn restore(&mut self, db: &Db) -> Result<&mut Self> {
        boundary::<Self, _>("restore", || {
            mark_restored(self);
            SqliteRepo::persist(db, "restore", self)
        })?;
        Ok(self)
    }

    /// Refresh `updated_at` on a stored entity; new entities are left alone
    fn touch(&mut self, db: &Db) -> Result<&mut Self> {
        boundary::<Self, _>("touch", || {
            db.connection()?;
            if prepare_touch(self) {
                SqliteRepo::persist(db, "touch", self)
            } else {
                Ok(Persisted::Unchanged)
            }
        })?;
        Ok(self)
    }
}

impl<E: Entity> Persistent for E {}

/// Wrap one public operation in start/end/error events
fn boundary<E: Entity, T>(op: &'static str, run: impl FnOnce() -> Result<T>) -> Result<T> {
    let table = E::table_name();
    let started = Instant::now();
    log_op_start!(op, entity = E::NAME, table = %table);

    match run() {
        Ok(value) => {
            log_op_end!(op, started = started, entity = E::NAME, table = %table);
            Ok(value)
        }
        Err(err) => {
            log_op_error!(op, err.clone(), started = started, entity = E::NAME, table = %table);
            Err(err)
        }
    }
}

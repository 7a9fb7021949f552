//! Timestamps and the soft-delete state machine
//!
//! ```text
//! New ──insert──▶ Persisted ──delete──▶ Trashed
//!                     ▲                    │
//!                     └──────restore───────┘
//! ```
//!
//! Rows are never removed; `is_deleted` is the only difference between a
//! live and a trashed row.

use crate::errors::Result;
use crate::fingerprint::is_dirty;
use crate::model::Entity;
use chrono::{DateTime, Utc};

/// Format of `created_at`/`updated_at`, always UTC
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityState {
    /// No identifier assigned yet
    New,
    Persisted,
    /// Persisted and soft-deleted
    Trashed,
}

impl EntityState {
    pub fn of(is_new: bool, is_deleted: bool) -> Self {
        match (is_new, is_deleted) {
            (true, _) => EntityState::New,
            (false, false) => EntityState::Persisted,
            (false, true) => EntityState::Trashed,
        }
    }
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Stamp `updated_at`, and `created_at` too when the entity is new
pub fn fill_timestamps<E: Entity>(entity: &mut E) {
    fill_timestamps_at(entity, Utc::now());
}

pub fn fill_timestamps_at<E: Entity>(entity: &mut E, at: DateTime<Utc>) {
    let stamp = format_timestamp(at);
    if entity.is_new() {
        entity.set_created_at(Some(stamp.clone()));
    }
    entity.set_updated_at(Some(stamp));
}

/// Whether `save` has anything to write
pub fn needs_persist<E: Entity>(entity: &E) -> Result<bool> {
    Ok(is_dirty(entity)? || entity.is_new())
}

pub fn mark_deleted<E: Entity>(entity: &mut E) {
    entity.record_mut().set_deleted(true);
}

pub fn mark_restored<E: Entity>(entity: &mut E) {
    entity.record_mut().set_deleted(false);
}

/// Prepare a forced update by clearing `updated_at`.
///
/// Returns `false`, leaving the entity untouched, when it was never
/// persisted: a new entity cannot be touched.
pub fn prepare_touch<E: Entity>(entity: &mut E) -> bool {
    if entity.is_new() {
        return false;
    }
    entity.set_updated_at(None);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::rehash;
    use crate::model::fixtures::Note;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2015, 10, 25, h, m, s).unwrap()
    }

    #[test]
    fn test_state_transitions() {
        let mut note = Note::titled("x");
        assert_eq!(note.state(), EntityState::New);

        note.set_id(Some(1));
        assert_eq!(note.state(), EntityState::Persisted);

        mark_deleted(&mut note);
        assert_eq!(note.state(), EntityState::Trashed);

        mark_restored(&mut note);
        assert_eq!(note.state(), EntityState::Persisted);
    }

    #[test]
    fn test_zero_or_negative_id_is_new() {
        let mut note = Note::titled("x");
        note.set_id(Some(0));
        assert_eq!(note.state(), EntityState::New);
        note.set_id(Some(-4));
        assert!(note.is_new());
    }

    #[test]
    fn test_fill_timestamps_on_new_entity() {
        let mut note = Note::titled("x");
        fill_timestamps_at(&mut note, at(12, 0, 0));
        assert_eq!(note.created_at(), Some("2015-10-25 12:00:00"));
        assert_eq!(note.updated_at(), Some("2015-10-25 12:00:00"));
    }

    #[test]
    fn test_fill_timestamps_keeps_created_at_on_existing_entity() {
        let mut note = Note::titled("x");
        fill_timestamps_at(&mut note, at(12, 0, 0));
        note.set_id(Some(5));
        fill_timestamps_at(&mut note, at(13, 30, 15));
        assert_eq!(note.created_at(), Some("2015-10-25 12:00:00"));
        assert_eq!(note.updated_at(), Some("2015-10-25 13:30:15"));
    }

    #[test]
    fn test_needs_persist() {
        let mut note = Note::titled("x");
        assert!(needs_persist(&note).unwrap());

        note.set_id(Some(1));
        rehash(&mut note).unwrap();
        assert!(!needs_persist(&note).unwrap());

        note.set_title("y");
        assert!(needs_persist(&note).unwrap());
    }

    #[test]
    fn test_new_entity_needs_persist_even_when_clean() {
        let mut note = Note::titled("x");
        rehash(&mut note).unwrap();
        assert!(needs_persist(&note).unwrap());
    }

    #[test]
    fn test_touch_clears_updated_at_on_persisted_entity() {
        let mut note = Note::titled("x");
        note.set_id(Some(2));
        fill_timestamps_at(&mut note, at(9, 0, 0));
        rehash(&mut note).unwrap();

        assert!(prepare_touch(&mut note));
        assert!(note.updated_at().is_none());
        assert!(needs_persist(&note).unwrap());
    }

    #[test]
    fn test_touch_is_a_noop_on_new_entity() {
        let mut note = Note::titled("x");
        fill_timestamps_at(&mut note, at(9, 0, 0));
        assert!(!prepare_touch(&mut note));
        assert_eq!(note.updated_at(), Some("2015-10-25 09:00:00"));
    }
}

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use chrono::NaiveDateTime;
use common::{conn, count_rows, setup_test_db, UserAccount};
use monomodel_core::lifecycle::TIMESTAMP_FORMAT;
use monomodel_core::{Entity, EntityState, ExErrorKind};
use monomodel_store::Persistent;

#[test]
fn test_insert_assigns_id_and_timestamps() {
    let db = setup_test_db();
    let mut user = UserAccount::new("neun", "neun@example.com");
    assert_eq!(user.state(), EntityState::New);

    user.save(&db).unwrap();

    assert!(user.id().unwrap() > 0);
    assert_eq!(user.state(), EntityState::Persisted);
    let created = user.created_at().expect("created_at stamped");
    assert!(NaiveDateTime::parse_from_str(created, TIMESTAMP_FORMAT).is_ok());
    assert_eq!(user.updated_at(), Some(created));
    assert!(user.hash().is_some());
    assert_eq!(count_rows(&db), 1);
}

#[test]
fn test_saved_entity_round_trips() {
    let db = setup_test_db();
    let mut user = UserAccount::new("neun", "neun@example.com");
    user.save(&db).unwrap();

    let loaded = UserAccount::find(&db, user.id().unwrap()).unwrap().unwrap();

    assert_eq!(loaded.id(), user.id());
    assert_eq!(loaded.alias(), Some("neun"));
    assert_eq!(loaded.email(), Some("neun@example.com"));
    assert_eq!(loaded.created_at(), user.created_at());
    assert!(!loaded.is_deleted());
    assert_eq!(loaded.hash(), user.hash());
}

#[test]
fn test_save_without_changes_issues_no_statement() {
    let db = setup_test_db();
    let mut user = UserAccount::new("neun", "neun@example.com");
    user.save(&db).unwrap();
    let id = user.id().unwrap();

    // Change the row behind the entity's back; an unchanged save must not undo it
    conn(&db)
        .execute("UPDATE user_account SET alias = 'outside' WHERE id = ?1", [id])
        .unwrap();
    user.save(&db).unwrap();

    let alias: String = conn(&db)
        .query_row("SELECT alias FROM user_account WHERE id = ?1", [id], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(alias, "outside");
}

#[test]
fn test_save_after_change_updates_row() {
    let db = setup_test_db();
    let mut user = UserAccount::new("neun", "neun@example.com");
    user.save(&db).unwrap();
    let id = user.id();

    user.set_alias("zehn");
    user.save(&db).unwrap();

    assert_eq!(user.id(), id, "update keeps the identifier");
    assert_eq!(count_rows(&db), 1);
    let loaded = UserAccount::find(&db, id.unwrap()).unwrap().unwrap();
    assert_eq!(loaded.alias(), Some("zehn"));
}

#[test]
fn test_loaded_entity_is_clean() {
    let db = setup_test_db();
    UserAccount::new("neun", "neun@example.com").save(&db).unwrap();

    let loaded = UserAccount::find(&db, 1).unwrap().unwrap();
    assert!(!monomodel_core::fingerprint::is_dirty(&loaded).unwrap());
}

#[test]
fn test_ignored_field_is_not_written() {
    let db = setup_test_db();
    let mut user = UserAccount::new("neun", "neun@example.com");
    user.display_name = Some("Neun".to_string());

    // The table has no display_name column, so writing it would fail
    user.save(&db).unwrap();

    let loaded = UserAccount::find(&db, user.id().unwrap()).unwrap().unwrap();
    assert_eq!(loaded.display_name, None);
}

#[test]
fn test_not_null_violation_is_persistence_error() {
    let db = setup_test_db();
    let mut user = UserAccount::new("neun", "neun@example.com");
    user.clear_alias();

    let err = user.save(&db).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert!(err.message().contains("NOT NULL"), "got: {}", err);
    assert_eq!(err.table(), Some("user_account"));
    assert_eq!(user.id(), None, "failed insert leaves the id unset");
    assert_eq!(count_rows(&db), 0);
}

#[test]
fn test_unique_violation_keeps_driver_message() {
    let db = setup_test_db();
    UserAccount::new("a", "same@example.com").save(&db).unwrap();

    let mut dup = UserAccount::new("b", "same@example.com");
    let err = dup.save(&db).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert!(
        err.message().contains("UNIQUE constraint failed"),
        "got: {}",
        err
    );
    assert!(dup.is_new());
}

#[test]
fn test_quotes_in_values_are_stored_literally() {
    let db = setup_test_db();
    let alias = "o'brien\"; DROP TABLE user_account; --";
    let mut user = UserAccount::new(alias, "ob@example.com");
    user.save(&db).unwrap();

    let loaded = UserAccount::find(&db, user.id().unwrap()).unwrap().unwrap();
    assert_eq!(loaded.alias(), Some(alias));
    assert_eq!(count_rows(&db), 1);
}

#[test]
fn test_save_returns_entity_for_chaining() {
    let db = setup_test_db();
    let mut user = UserAccount::new("neun", "neun@example.com");

    let id = user.save(&db).unwrap().set_alias("zehn").save(&db).unwrap().id();

    assert_eq!(id, Some(1));
    assert_eq!(
        UserAccount::find(&db, 1).unwrap().unwrap().alias(),
        Some("zehn")
    );
}

#[test]
fn test_text_with_nul_byte_round_trips() {
    let db = setup_test_db();
    let alias = "a\0b";
    let mut user = UserAccount::new(alias, "nul@example.com");
    user.save(&db).unwrap();

    let by_id = UserAccount::find(&db, user.id().unwrap()).unwrap().unwrap();
    assert_eq!(by_id.alias(), Some(alias));

    let by_alias = UserAccount::find_by(&db, &monomodel_core::Filters::new().eq("alias", alias))
        .unwrap()
        .expect("NUL-containing filter value matches");
    assert_eq!(by_alias.id(), user.id());
    assert!(!monomodel_core::fingerprint::is_dirty(&by_alias).unwrap());
}

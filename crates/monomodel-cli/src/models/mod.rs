//! Concrete entities used by the demo commands

pub mod customer;
pub mod user;

pub use customer::Customer;
pub use user::User;

/// Tables for the demo entities, shaped the way `SELECT *` hydration expects
pub const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS `user` (
        id INTEGER PRIMARY KEY,
        created_at TEXT,
        created_by INTEGER,
        updated_at TEXT,
        updated_by INTEGER,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        alias TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password TEXT
    );
    CREATE TABLE IF NOT EXISTS `customer` (
        id INTEGER PRIMARY KEY,
        created_at TEXT,
        created_by INTEGER,
        updated_at TEXT,
        updated_by INTEGER,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        first_name TEXT,
        last_name TEXT,
        email TEXT
    );
";

use monomodel_core::model::{Entity, Field, Record, Value};
use monomodel_store::{db, Db};
use rusqlite::Connection;

pub const USER_ACCOUNT_DDL: &str = "
    CREATE TABLE user_account (
        id INTEGER PRIMARY KEY,
        created_at TEXT,
        created_by INTEGER,
        updated_at TEXT,
        updated_by INTEGER,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        alias TEXT NOT NULL,
        email TEXT UNIQUE
    );
";

/// Holder over a fresh in-memory database with the `user_account` table
pub fn setup_test_db() -> Db {
    let conn = db::open_in_memory().unwrap();
    conn.execute_batch(USER_ACCOUNT_DDL).unwrap();
    Db::with_connection(conn)
}

#[allow(dead_code)]
pub fn conn(db: &Db) -> &Connection {
    db.connection().unwrap()
}

#[allow(dead_code)]
pub fn count_rows(db: &Db) -> i64 {
    conn(db)
        .query_row("SELECT COUNT(*) FROM user_account", [], |row| row.get(0))
        .unwrap()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserAccount {
    id: Option<i64>,
    record: Record,
    alias: Option<String>,
    email: Option<String>,
    /// Not a column
    pub display_name: Option<String>,
}

const USER_ACCOUNT_FIELDS: &[Field<UserAccount>] = &[
    Field::new(
        "alias",
        |u: &UserAccount| Value::from(u.alias.clone()),
        |u: &mut UserAccount, v: Value| -> monomodel_core::Result<()> {
            u.alias = v.into_opt_string("alias")?;
            Ok(())
        },
    ),
    Field::new(
        "email",
        |u: &UserAccount| Value::from(u.email.clone()),
        |u: &mut UserAccount, v: Value| -> monomodel_core::Result<()> {
            u.email = v.into_opt_string("email")?;
            Ok(())
        },
    ),
    Field::new(
        "display_name",
        |u: &UserAccount| Value::from(u.display_name.clone()),
        |u: &mut UserAccount, v: Value| -> monomodel_core::Result<()> {
            u.display_name = v.into_opt_string("display_name")?;
            Ok(())
        },
    ),
];

#[allow(dead_code)]
impl UserAccount {
    pub fn new(alias: &str, email: &str) -> Self {
        Self {
            alias: Some(alias.to_string()),
            email: Some(email.to_string()),
            ..Self::default()
        }
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn set_alias(&mut self, alias: &str) -> &mut Self {
        self.alias = Some(alias.to_string());
        self
    }

    pub fn clear_alias(&mut self) -> &mut Self {
        self.alias = None;
        self
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl Entity for UserAccount {
    const NAME: &'static str = "UserAccount";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) -> &mut Self {
        self.id = id;
        self
    }

    fn record(&self) -> &Record {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    fn fields() -> &'static [Field<Self>] {
        USER_ACCOUNT_FIELDS
    }

    fn ignored() -> &'static [&'static str] {
        &["display_name"]
    }
}

/// Insert `n` accounts named `user-0` .. `user-{n-1}`
#[allow(dead_code)]
pub fn seed_accounts(db: &Db, n: usize) {
    use monomodel_store::Persistent;

    for i in 0..n {
        UserAccount::new(&format!("user-{}", i), &format!("user-{}@example.com", i))
            .save(db)
            .unwrap();
    }
}

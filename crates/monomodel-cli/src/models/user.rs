use monomodel_core::model::{Entity, Field, Record, Value};
use monomodel_core::{Filters, Result};
use monomodel_core_types::Sensitive;
use monomodel_store::{Db, Persistent};
use sha2::{Digest, Sha256};

/// An account that signs in with its email address
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    id: Option<i64>,
    record: Record,
    alias: Option<String>,
    email: Option<String>,
    /// SHA-256 hex digest, never the plaintext
    password: Option<Sensitive<String>>,
}

const USER_FIELDS: &[Field<User>] = &[
    Field::new(
        "alias",
        |u: &User| Value::from(u.alias.clone()),
        |u: &mut User, v: Value| -> Result<()> {
            u.alias = v.into_opt_string("alias")?;
            Ok(())
        },
    ),
    Field::new(
        "email",
        |u: &User| Value::from(u.email.clone()),
        |u: &mut User, v: Value| -> Result<()> {
            u.email = v.into_opt_string("email")?;
            Ok(())
        },
    ),
    Field::new(
        "password",
        |u: &User| Value::from(u.password.as_ref().map(|p| p.expose().clone())),
        |u: &mut User, v: Value| -> Result<()> {
            u.password = v.into_opt_string("password")?.map(Sensitive::new);
            Ok(())
        },
    ),
];

impl User {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) -> &mut Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> &mut Self {
        self.email = Some(email.into());
        self
    }

    /// Store the SHA-256 hex digest of `plain`
    pub fn set_password(&mut self, plain: &str) -> &mut Self {
        self.password = Some(Sensitive::new(hash_password(plain)));
        self
    }

    /// Whether `plain` hashes to the stored digest
    pub fn verify_password(&self, plain: &str) -> bool {
        self.password
            .as_ref()
            .is_some_and(|stored| *stored.expose() == hash_password(plain))
    }

    /// First user with this email address, deleted or not
    pub fn find_by_email(db: &Db, email: &str) -> monomodel_store::Result<Option<Self>> {
        Self::find_by(db, &Filters::new().eq("email", email))
    }
}

fn hash_password(plain: &str) -> String {
    hex::encode(Sha256::digest(plain.as_bytes()))
}

impl Entity for User {
    const NAME: &'static str = "User";

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
        USER_FIELDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_name() {
        assert_eq!(User::table_name(), "user");
    }

    #[test]
    fn test_password_is_stored_hashed() {
        let mut user = User::default();
        user.set_password("password");

        assert_eq!(
            hash_password("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
        assert!(user.verify_password("password"));
        assert!(!user.verify_password("Password"));
    }

    #[test]
    fn test_password_is_redacted_in_debug() {
        let mut user = User::default();
        user.set_alias("neun").set_password("hunter2");

        let debug = format!("{:?}", user);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains(&hash_password("hunter2")));
    }

    #[test]
    fn test_password_column_holds_digest() {
        let mut user = User::default();
        user.set_password("hunter2");

        let values = user.persisted_values();
        let (_, password) = values.iter().find(|(c, _)| *c == "password").unwrap();
        assert_eq!(password, &Value::from(hash_password("hunter2")));
    }

    #[test]
    fn test_saving_never_logs_the_password_digest() {
        use monomodel_core::logging_facility::test_capture::init_test_capture;

        let capture = init_test_capture();
        let conn = monomodel_store::db::open_in_memory().unwrap();
        conn.execute_batch(crate::models::SCHEMA).unwrap();
        let db = Db::with_connection(conn);

        let mut user = User::default();
        user.set_alias("neun")
            .set_email("neun@example.com")
            .set_password("hunter2");
        user.save(&db).unwrap();
        user.set_password("hunter3").save(&db).unwrap();

        let found = User::find_by_email(&db, "neun@example.com").unwrap().unwrap();
        assert!(found.verify_password("hunter3"));

        capture.assert_event_exists("save", "end");
        capture.assert_never_logged(&hash_password("hunter2"));
        capture.assert_never_logged(&hash_password("hunter3"));
    }
}

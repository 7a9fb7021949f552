use monomodel_core::model::{Entity, Field, Record, Value};
use monomodel_core::Result;

/// Two-word entity so table naming is exercised
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
        |u: &mut UserAccount, v: Value| -> Result<()> {
            u.alias = v.into_opt_string("alias")?;
            Ok(())
        },
    ),
    Field::new(
        "email",
        |u: &UserAccount| Value::from(u.email.clone()),
        |u: &mut UserAccount, v: Value| -> Result<()> {
            u.email = v.into_opt_string("email")?;
            Ok(())
        },
    ),
    Field::new(
        "display_name",
        |u: &UserAccount| Value::from(u.display_name.clone()),
        |u: &mut UserAccount, v: Value| -> Result<()> {
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

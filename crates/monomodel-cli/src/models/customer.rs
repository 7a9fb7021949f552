use monomodel_core::model::{Entity, Field, Record, Value};
use monomodel_core::Result;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Customer {
    id: Option<i64>,
    record: Record,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
}

const CUSTOMER_FIELDS: &[Field<Customer>] = &[
    Field::new(
        "first_name",
        |c: &Customer| Value::from(c.first_name.clone()),
        |c: &mut Customer, v: Value| -> Result<()> {
            c.first_name = v.into_opt_string("first_name")?;
            Ok(())
        },
    ),
    Field::new(
        "last_name",
        |c: &Customer| Value::from(c.last_name.clone()),
        |c: &mut Customer, v: Value| -> Result<()> {
            c.last_name = v.into_opt_string("last_name")?;
            Ok(())
        },
    ),
    Field::new(
        "email",
        |c: &Customer| Value::from(c.email.clone()),
        |c: &mut Customer, v: Value| -> Result<()> {
            c.email = v.into_opt_string("email")?;
            Ok(())
        },
    ),
];

impl Customer {
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email(&mut self, value: impl Into<String>) -> &mut Self {
        self.email = Some(value.into());
        self
    }
}

impl Entity for Customer {
    const NAME: &'static str = "Customer";

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
        CUSTOMER_FIELDS
    }
}

//! Entity used by unit tests

use crate::errors::Result;
use crate::model::{Entity, Field, Record, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Note {
    id: Option<i64>,
    record: Record,
    title: Option<String>,
    body: Option<String>,
    /// Computed, not backed by a column
    pub word_count: Option<i64>,
}

const NOTE_FIELDS: &[Field<Note>] = &[
    Field::new(
        "title",
        |n: &Note| Value::from(n.title.clone()),
        |n: &mut Note, v: Value| -> Result<()> {
            n.title = v.into_opt_string("title")?;
            Ok(())
        },
    ),
    Field::new(
        "body",
        |n: &Note| Value::from(n.body.clone()),
        |n: &mut Note, v: Value| -> Result<()> {
            n.body = v.into_opt_string("body")?;
            Ok(())
        },
    ),
    Field::new(
        "word_count",
        |n: &Note| Value::from(n.word_count),
        |n: &mut Note, v: Value| -> Result<()> {
            n.word_count = v.into_opt_i64("word_count")?;
            Ok(())
        },
    ),
];

impl Note {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Self::default()
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }
}

impl Entity for Note {
    const NAME: &'static str = "Note";

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
        NOTE_FIELDS
    }

    fn ignored() -> &'static [&'static str] {
        &["word_count"]
    }
}

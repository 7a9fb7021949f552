//! The entity contract
//!
//! A concrete record type implements [`Entity`] once: a type name, an
//! identity getter/setter, access to its embedded [`Record`], and a static
//! ordered list of [`Field`] descriptors for its domain columns. Everything
//! else (table name, column lists, hydration, serialisation) is provided.

use crate::errors::Result;
use crate::lifecycle::EntityState;
use crate::model::record::{Record, AUDIT_COLUMNS, COL_ID};
use crate::model::{Row, Value};
use crate::naming::tabelize;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Static descriptor for one domain column
///
/// `get` and `set` are plain function pointers so descriptor tables can
/// live in `const` items.
pub struct Field<E> {
    name: &'static str,
    get: fn(&E) -> Value,
    set: fn(&mut E, Value) -> Result<()>,
}

impl<E> Field<E> {
    pub const fn new(
        name: &'static str,
        get: fn(&E) -> Value,
        set: fn(&mut E, Value) -> Result<()>,
    ) -> Self {
        Self { name, get, set }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, entity: &E) -> Value {
        (self.get)(entity)
    }

    pub fn set(&self, entity: &mut E, value: Value) -> Result<()> {
        (self.set)(entity, value)
    }
}

/// A persistable record type bound to one table
///
/// `Default` is the factory used to materialise rows.
pub trait Entity: Clone + Default + 'static {
    /// Simple, unqualified type name, e.g. `"UserAccount"`
    const NAME: &'static str;

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: Option<i64>) -> &mut Self;

    fn record(&self) -> &Record;

    fn record_mut(&mut self) -> &mut Record;

    /// Domain fields in declaration order
    fn fields() -> &'static [Field<Self>];

    /// Fields that exist on the type but are not backed by a column
    fn ignored() -> &'static [&'static str] {
        &[]
    }

    fn table_name() -> String {
        tabelize(Self::NAME)
    }

    /// True until the store has assigned an identifier
    fn is_new(&self) -> bool {
        self.id().map_or(true, |id| id <= 0)
    }

    fn state(&self) -> EntityState {
        EntityState::of(self.is_new(), self.is_deleted())
    }

    fn created_at(&self) -> Option<&str> {
        self.record().created_at()
    }

    fn set_created_at(&mut self, value: Option<String>) -> &mut Self {
        self.record_mut().set_created_at(value);
        self
    }

    fn created_by(&self) -> Option<i64> {
        self.record().created_by()
    }

    fn set_created_by(&mut self, value: Option<i64>) -> &mut Self {
        self.record_mut().set_created_by(value);
        self
    }

    fn updated_at(&self) -> Option<&str> {
        self.record().updated_at()
    }

    fn set_updated_at(&mut self, value: Option<String>) -> &mut Self {
        self.record_mut().set_updated_at(value);
        self
    }

    fn updated_by(&self) -> Option<i64> {
        self.record().updated_by()
    }

    fn set_updated_by(&mut self, value: Option<i64>) -> &mut Self {
        self.record_mut().set_updated_by(value);
        self
    }

    fn is_deleted(&self) -> bool {
        self.record().is_deleted()
    }

    fn hash(&self) -> Option<&str> {
        self.record().hash()
    }

    /// Every declared field with its current value
    ///
    /// Order: `id`, audit columns, then domain fields as declared. Ignored
    /// fields are included; the fingerprint is not.
    fn to_map(&self) -> Vec<(&'static str, Value)> {
        let mut map = Vec::with_capacity(1 + AUDIT_COLUMNS.len() + Self::fields().len());
        map.push((COL_ID, Value::from(self.id())));
        map.extend(self.record().audit_values());
        map.extend(Self::fields().iter().map(|f| (f.name(), f.get(self))));
        map
    }

    /// Columns written by insert/update, index-aligned with their values
    fn persisted_values(&self) -> Vec<(&'static str, Value)> {
        let ignored = Self::ignored();
        self.to_map()
            .into_iter()
            .filter(|(name, _)| !ignored.contains(name))
            .collect()
    }

    /// JSON object of [`to_map`](Entity::to_map), keys in declaration order
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&OrderedFields(&self.to_map()))?)
    }

    /// Assign one column by name; returns `false` for unknown columns
    fn assign(&mut self, column: &str, value: Value) -> Result<bool> {
        if column == COL_ID {
            let id = value.into_opt_i64(column)?;
            self.set_id(id);
            return Ok(true);
        }
        if AUDIT_COLUMNS.contains(&column) {
            return self.record_mut().assign(column, value);
        }
        match Self::fields().iter().find(|f| f.name() == column) {
            Some(field) => field.set(self, value).map(|_| true),
            None => Ok(false),
        }
    }

    /// Materialise a fresh instance from a result row
    ///
    /// Columns without a matching field are skipped. The fingerprint is left
    /// empty; callers that just read from the store rehash afterwards.
    fn from_row(row: Row) -> Result<Self> {
        let mut entity = Self::default();
        for (column, value) in row {
            if !entity.assign(&column, value)? {
                tracing::debug!(
                    entity = Self::NAME,
                    column = %column,
                    "Skipping column without a matching field"
                );
            }
        }
        Ok(entity)
    }
}

/// Serialises field pairs as a JSON object without reordering keys
struct OrderedFields<'a>(&'a [(&'static str, Value)]);

impl Serialize for OrderedFields<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

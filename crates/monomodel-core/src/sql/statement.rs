//! Statement builders
//!
//! ```text
//! SELECT * FROM `t` WHERE `c1` = ? AND `c2` = ? [LIMIT n]
//! INSERT INTO `t` (`c1`,`c2`) VALUES (?,?)
//! UPDATE `t` SET `c1`=?,`c2`=? WHERE `id`=?
//! ```

use super::{quote_identifier, Filters};
use crate::model::record::COL_ID;
use crate::model::Value;

/// SQL text plus the values for its placeholders, in order
///
/// `Debug` shows the param count only; params may hold secrets.
#[derive(Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl std::fmt::Debug for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Statement")
            .field("sql", &self.sql)
            .field("params", &self.params.len())
            .finish()
    }
}

/// `WHERE` body for `filters`; `1` when there are none
pub fn where_clause(filters: &Filters) -> Statement {
    if filters.is_empty() {
        return Statement {
            sql: "1".to_string(),
            params: Vec::new(),
        };
    }

    let (conditions, params): (Vec<String>, Vec<Value>) = filters
        .iter()
        .map(|(column, value)| (format!("{} = ?", quote_identifier(column)), value.clone()))
        .unzip();

    Statement {
        sql: conditions.join(" AND "),
        params,
    }
}

/// `SELECT *` with equality filters and an optional row cap
///
/// A cap of zero means no cap.
pub fn select(table: &str, filters: &Filters, limit: Option<u32>) -> Statement {
    let condition = where_clause(filters);
    let mut sql = format!(
        "SELECT * FROM {} WHERE {}",
        quote_identifier(table),
        condition.sql
    );
    if let Some(limit) = limit.filter(|n| *n > 0) {
        sql.push_str(&format!(" LIMIT {}", limit));
    }
    Statement {
        sql,
        params: condition.params,
    }
}

/// `INSERT` of the given columns, values index-aligned with columns
pub fn insert(table: &str, values: &[(&str, Value)]) -> Statement {
    if values.is_empty() {
        return Statement {
            sql: format!("INSERT INTO {} DEFAULT VALUES", quote_identifier(table)),
            params: Vec::new(),
        };
    }

    let columns: Vec<String> = values.iter().map(|(c, _)| quote_identifier(c)).collect();
    let placeholders = vec!["?"; values.len()].join(",");

    Statement {
        sql: format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote_identifier(table),
            columns.join(","),
            placeholders
        ),
        params: values.iter().map(|(_, v)| v.clone()).collect(),
    }
}

/// `UPDATE` of the given columns for the row with `id`
///
/// With nothing to set the statement degrades to `SET `id`=`id``.
pub fn update(table: &str, values: &[(&str, Value)], id: &Value) -> Statement {
    let id_column = quote_identifier(COL_ID);
    let assignments = if values.is_empty() {
        format!("{}={}", id_column, id_column)
    } else {
        values
            .iter()
            .map(|(column, _)| format!("{}=?", quote_identifier(column)))
            .collect::<Vec<_>>()
            .join(",")
    };

    let mut params: Vec<Value> = values.iter().map(|(_, v)| v.clone()).collect();
    params.push(id.clone());

    Statement {
        sql: format!(
            "UPDATE {} SET {} WHERE {}=?",
            quote_identifier(table),
            assignments,
            id_column
        ),
        params,
    }
}

//! SQL generation
//!
//! Statements are assembled with `?` placeholders; values travel alongside
//! in [`Statement::params`] and are bound by the store. Only equality
//! filters exist.

pub mod filters;
pub mod statement;

pub use filters::Filters;
pub use statement::{insert, select, update, where_clause, Statement};

/// Backtick-quote an identifier, doubling embedded backticks
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("email"), "`email`");
        assert_eq!(quote_identifier("we`ird"), "`we``ird`");
    }
}

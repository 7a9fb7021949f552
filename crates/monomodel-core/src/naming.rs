//! Table-name derivation
//!
//! The table name is the only binding between a type and its storage, so
//! the mapping must stay exactly as it is: `UserAccount` → `user_account`.

/// Turn a (possibly path-qualified) type name into its table name.
///
/// Takes the last `::` segment, puts an underscore before every ASCII
/// uppercase letter, lowercases ASCII letters and drops leading underscores.
///
/// ```
/// use monomodel_core::naming::tabelize;
///
/// assert_eq!(tabelize("UserAccount"), "user_account");
/// assert_eq!(tabelize("crate::models::User"), "user");
/// ```
pub fn tabelize(type_name: &str) -> String {
    let short = type_name.rsplit("::").next().unwrap_or(type_name);

    let mut table = String::with_capacity(short.len() + 4);
    for ch in short.chars() {
        if ch.is_ascii_uppercase() {
            table.push('_');
        }
        table.push(ch.to_ascii_lowercase());
    }

    table.trim_start_matches('_').to_string()
}

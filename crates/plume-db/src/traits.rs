//! Traits for mapping query results into Rust types.

use rusqlite::Row;

/// A trait for types that can be constructed from a SQLite row.
///
/// Used by [`crate::Select::fetch`] and [`crate::Database::query_as`] to map
/// query results.
///
/// # Example
///
/// ```rust
/// use plume_db::FromRow;
///
/// struct User {
///     id: i64,
///     name: String,
/// }
///
/// impl FromRow for User {
///     fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
///         Ok(User {
///             id: row.get("id")?,
///             name: row.get("name")?,
///         })
///     }
/// }
/// ```
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}

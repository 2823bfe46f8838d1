//! Statement builders.
//!
//! Each builder accumulates clauses through a fluent, by-value API and
//! renders them into parameterized SQL. Rendering is pure: [`to_sql`] and
//! [`parameters`] can be called any number of times without changing the
//! builder, and the Nth `?` in the text always binds the Nth parameter.
//!
//! [`to_sql`]: select::Select::to_sql
//! [`parameters`]: select::Select::parameters

use std::fmt;

pub mod delete;
pub mod insert;
pub mod select;
pub mod update;

pub use delete::Delete;
pub use insert::Insert;
pub use select::Select;
pub use update::Update;

/// Which kind of statement an execution error came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    Raw,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            StatementKind::Select => "select",
            StatementKind::Insert => "insert",
            StatementKind::Update => "update",
            StatementKind::Delete => "delete",
            StatementKind::Raw => "raw",
        };
        write!(f, "{}", kind)
    }
}

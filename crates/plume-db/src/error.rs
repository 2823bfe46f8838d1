//! Error types for plume-db.

use miette::Diagnostic;
use thiserror::Error;

use crate::statement::StatementKind;

/// Database error type for plume-db operations.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] plume_config::ConfigError),

    #[error("Cannot apply `{method}` before a base condition exists")]
    #[diagnostic(
        code(plume_db::missing_base_condition),
        help("OR needs a left-hand operand; add a plain condition (where_, between, in_, like, null) first")
    )]
    MissingBaseCondition { method: &'static str },

    #[error("IN condition on '{column}' received no values")]
    #[diagnostic(
        code(plume_db::empty_value_list),
        help("Provide at least one value, or drop the condition")
    )]
    EmptyValueList { column: String },

    #[error("Failed to open database at {path}")]
    #[diagnostic(
        code(plume_db::connection),
        help("Check if the database file exists and is accessible")
    )]
    Connection {
        path: String,
        source: rusqlite::Error,
    },

    #[error("Execution of {kind} statement failed")]
    #[diagnostic(
        code(plume_db::execution),
        help("The statement was rejected by SQLite; inspect the source error for the cause")
    )]
    Execution {
        kind: StatementKind,
        source: rusqlite::Error,
    },

    #[error(transparent)]
    #[diagnostic(code(plume_db::sqlite))]
    Sqlite(#[from] rusqlite::Error),

    #[error("Thread lock poison error")]
    #[diagnostic(
        code(plume_db::poison),
        help("This is an internal error, please report it")
    )]
    Poisoned,
}

impl<T> From<std::sync::PoisonError<T>> for DbError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Self::Poisoned
    }
}

/// Result type alias for plume-db operations.
pub type DbResult<T> = std::result::Result<T, DbError>;

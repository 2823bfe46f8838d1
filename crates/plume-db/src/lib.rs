//! Fluent SQL statement builders over a shared SQLite connection.
//!
//! Statements render to SQL text with positional `?` placeholders plus a
//! parameter list in matching order, then execute through [`Database`].

pub mod clause;
pub mod connection;
pub mod error;
pub mod executor;
pub mod helpers;
pub mod row;
pub mod statement;
pub mod traits;

pub use clause::Direction;
pub use connection::Database;
pub use error::{DbError, DbResult};
pub use executor::MutationResult;
pub use helpers::*;
pub use row::{Row, Rows};
pub use statement::{Delete, Insert, Select, StatementKind, Update};
pub use traits::FromRow;

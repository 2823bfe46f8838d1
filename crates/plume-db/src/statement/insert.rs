//! INSERT statement builder.

use std::sync::{Arc, Mutex};

use rusqlite::{types::Value, Connection};

use crate::{
    error::DbResult,
    executor::{self, MutationResult},
    statement::StatementKind,
};

/// A fluent INSERT builder. Columns render in the order `set` was called.
#[derive(Debug)]
pub struct Insert {
    db: Arc<Mutex<Connection>>,
    table: String,
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Insert {
    pub fn into(db: Arc<Mutex<Connection>>, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
            columns: vec![],
            values: vec![],
        }
    }

    /// Stages one column/value pair.
    pub fn set<T: Into<String>, V: Into<Value>>(mut self, column: T, value: V) -> Self {
        self.columns.push(column.into());
        self.values.push(value.into());
        self
    }

    pub fn to_sql(&self) -> String {
        let columns = self.columns.join(", ");
        let placeholders = vec!["?"; self.values.len()].join(", ");
        format!(
            "INSERT INTO {} ( {} ) VALUES ( {} )",
            self.table, columns, placeholders
        )
    }

    pub fn parameters(&self) -> Vec<Value> {
        self.values.clone()
    }

    /// Runs the statement. On success `generated_id` carries the rowid of
    /// the inserted row.
    pub fn execute(&self) -> DbResult<MutationResult> {
        executor::run_mutation(
            &self.db,
            &self.to_sql(),
            &self.parameters(),
            StatementKind::Insert,
        )
    }
}

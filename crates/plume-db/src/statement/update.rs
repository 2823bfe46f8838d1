//! UPDATE statement builder.

use std::sync::{Arc, Mutex};

use rusqlite::{types::Value, Connection};

use crate::{
    error::DbResult,
    executor::{self, MutationResult},
    statement::StatementKind,
};

/// A fluent UPDATE builder. Conditions are equality checks joined with
/// `AND`; the richer condition chain belongs to [`crate::Select`].
#[derive(Debug)]
pub struct Update {
    db: Arc<Mutex<Connection>>,
    table: String,
    updates: Vec<(String, Value)>,
    conditions: Vec<(String, Value)>,
}

impl Update {
    pub fn table(db: Arc<Mutex<Connection>>, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
            updates: vec![],
            conditions: vec![],
        }
    }

    /// Stages one `column = ?` assignment.
    pub fn set<T: Into<String>, V: Into<Value>>(mut self, column: T, value: V) -> Self {
        self.updates.push((column.into(), value.into()));
        self
    }

    /// Restricts the update to rows where `column = ?`.
    pub fn where_eq<T: Into<String>, V: Into<Value>>(mut self, column: T, value: V) -> Self {
        self.conditions.push((column.into(), value.into()));
        self
    }

    pub fn to_sql(&self) -> String {
        let sets: Vec<String> = self
            .updates
            .iter()
            .map(|(column, _)| format!("{} = ?", column))
            .collect();

        let mut sql = format!("UPDATE {} SET {}", self.table, sets.join(", "));

        if !self.conditions.is_empty() {
            let conditions: Vec<String> = self
                .conditions
                .iter()
                .map(|(column, _)| format!("{} = ?", column))
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }

        sql
    }

    /// Assignment values first, then condition values.
    pub fn parameters(&self) -> Vec<Value> {
        self.updates
            .iter()
            .map(|(_, value)| value.clone())
            .chain(self.conditions.iter().map(|(_, value)| value.clone()))
            .collect()
    }

    pub fn execute(&self) -> DbResult<MutationResult> {
        executor::run_mutation(
            &self.db,
            &self.to_sql(),
            &self.parameters(),
            StatementKind::Update,
        )
    }
}

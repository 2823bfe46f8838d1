//! DELETE statement builder.

use std::sync::{Arc, Mutex};

use rusqlite::{types::Value, Connection};

use crate::{
    error::DbResult,
    executor::{self, MutationResult},
    statement::StatementKind,
};

/// A fluent DELETE builder. Without conditions it removes every row.
#[derive(Debug)]
pub struct Delete {
    db: Arc<Mutex<Connection>>,
    table: String,
    conditions: Vec<(String, Value)>,
}

impl Delete {
    pub fn from(db: Arc<Mutex<Connection>>, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
            conditions: vec![],
        }
    }

    /// Restricts the delete to rows where `column = ?`.
    pub fn where_eq<T: Into<String>, V: Into<Value>>(mut self, column: T, value: V) -> Self {
        self.conditions.push((column.into(), value.into()));
        self
    }

    pub fn to_sql(&self) -> String {
        let mut sql = format!("DELETE FROM {}", self.table);

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

    pub fn parameters(&self) -> Vec<Value> {
        self.conditions
            .iter()
            .map(|(_, value)| value.clone())
            .collect()
    }

    pub fn execute(&self) -> DbResult<MutationResult> {
        executor::run_mutation(
            &self.db,
            &self.to_sql(),
            &self.parameters(),
            StatementKind::Delete,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;

    fn setup_db() -> Arc<Mutex<Connection>> {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE employees (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                salary INTEGER NOT NULL DEFAULT 0
            );
            INSERT INTO employees (id, name, salary) VALUES
                (1, 'Ada', 9000),
                (2, 'Grace', 8000),
                (3, 'Linus', 7000);",
        )
        .unwrap();
        Arc::new(Mutex::new(conn))
    }

    #[test]
    fn test_delete_renders_where() {
        let delete = Delete::from(setup_db(), "employees").where_eq("id", 25);
        assert_eq!(delete.to_sql(), "DELETE FROM employees WHERE id = ?");
        assert_eq!(delete.parameters(), vec![Value::Integer(25)]);
    }

    #[test]
    fn test_conditions_join_with_and() {
        let delete = Delete::from(setup_db(), "employees")
            .where_eq("name", "Ada".to_string())
            .where_eq("salary", 9000);
        assert_eq!(
            delete.to_sql(),
            "DELETE FROM employees WHERE name = ? AND salary = ?"
        );
    }

    #[test]
    fn test_execute_removes_matching_rows() {
        let db = setup_db();
        let result = Delete::from(db.clone(), "employees")
            .where_eq("id", 2)
            .execute()
            .unwrap();
        assert_eq!(result.rows_affected, 1);
        assert_eq!(result.generated_id, None);

        let conn = db.lock().unwrap();
        let remaining: i64 = conn
            .query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))
            .unwrap();
        assert_eq!(remaining, 2);
    }

    #[test]
    fn test_delete_without_conditions_clears_table() {
        let result = Delete::from(setup_db(), "employees").execute().unwrap();
        assert_eq!(result.rows_affected, 3);
    }

    #[test]
    fn test_unknown_table_is_execution_error() {
        let err = Delete::from(setup_db(), "missing").execute().unwrap_err();
        assert!(matches!(
            err,
            DbError::Execution {
                kind: StatementKind::Delete,
                ..
            }
        ));
    }
}

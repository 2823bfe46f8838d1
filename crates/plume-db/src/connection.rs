//! Shared SQLite connection handling.

use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use plume_config::Settings;
use rusqlite::{types::Value, Connection};
use tracing::debug;

use crate::{
    error::{DbError, DbResult},
    executor,
    row::Rows,
    statement::{Delete, Insert, Select, StatementKind, Update},
    traits::FromRow,
};

/// A SQLite database handle shared across statement builders.
///
/// Cloning is cheap; clones share the same underlying connection.
#[derive(Clone, Debug)]
pub struct Database {
    pub conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Opens (or creates) the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| DbError::Connection {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "opened database");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory().map_err(|source| DbError::Connection {
            path: ":memory:".to_string(),
            source,
        })?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Opens the database described by `settings` and applies its pragmas.
    pub fn from_settings(settings: &Settings) -> DbResult<Self> {
        let db = Self::open(&settings.path)?;
        db.apply_settings(settings)?;
        Ok(db)
    }

    fn apply_settings(&self, settings: &Settings) -> DbResult<()> {
        let conn = self.conn.lock()?;
        if let Some(mode) = settings.journal_mode {
            let _: String = conn.query_row(
                &format!("PRAGMA journal_mode = {}", mode.as_pragma_value()),
                [],
                |row| row.get(0),
            )?;
        }
        if let Some(timeout) = settings.busy_timeout_ms {
            let _: i64 =
                conn.query_row(&format!("PRAGMA busy_timeout = {}", timeout), [], |row| {
                    row.get(0)
                })?;
        }
        if let Some(enabled) = settings.case_sensitive_like {
            let flag = if enabled { "ON" } else { "OFF" };
            conn.execute(&format!("PRAGMA case_sensitive_like = {}", flag), [])?;
        }
        Ok(())
    }

    /// Starts a SELECT builder on `table`.
    pub fn select(&self, table: &str) -> Select {
        Select::from(self.conn.clone(), table)
    }

    /// Starts an INSERT builder on `table`.
    pub fn insert(&self, table: &str) -> Insert {
        Insert::into(self.conn.clone(), table)
    }

    /// Starts an UPDATE builder on `table`.
    pub fn update(&self, table: &str) -> Update {
        Update::table(self.conn.clone(), table)
    }

    /// Starts a DELETE builder on `table`.
    pub fn delete(&self, table: &str) -> Delete {
        Delete::from(self.conn.clone(), table)
    }

    /// Runs a raw parameterized query.
    pub fn query(&self, sql: &str, params: Vec<Value>) -> DbResult<Rows> {
        executor::run_query(&self.conn, sql, &params, StatementKind::Raw)
    }

    /// Runs a raw parameterized query and maps each row into `E`.
    pub fn query_as<E: FromRow>(&self, sql: &str, params: Vec<Value>) -> DbResult<Vec<E>> {
        executor::run_query_as(&self.conn, sql, &params, StatementKind::Raw)
    }

    /// Runs a raw statement, returning the number of affected rows.
    pub fn exec(&self, sql: &str, params: Vec<Value>) -> DbResult<usize> {
        executor::run_mutation(&self.conn, sql, &params, StatementKind::Raw)
            .map(|result| result.rows_affected)
    }

    /// Begins a transaction. Statements executed through any builder sharing
    /// this connection join it until `commit` or `rollback`.
    pub fn begin_transaction(&self) -> DbResult<()> {
        let conn = self.conn.lock()?;
        conn.execute_batch("BEGIN")?;
        Ok(())
    }

    pub fn commit(&self) -> DbResult<()> {
        let conn = self.conn.lock()?;
        conn.execute_batch("COMMIT")?;
        Ok(())
    }

    pub fn rollback(&self) -> DbResult<()> {
        let conn = self.conn.lock()?;
        conn.execute_batch("ROLLBACK")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_config::JournalMode;

    fn setup_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.exec(
            "CREATE TABLE projects (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL
            )",
            vec![],
        )
        .unwrap();
        db
    }

    #[derive(Debug, PartialEq)]
    struct ProjectTitle {
        title: String,
    }

    impl FromRow for ProjectTitle {
        fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
            Ok(Self {
                title: row.get("title")?,
            })
        }
    }

    #[test]
    fn test_open_creates_file_and_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.db");

        {
            let db = Database::open(&path).unwrap();
            db.exec("CREATE TABLE projects (id INTEGER PRIMARY KEY)", vec![])
                .unwrap();
            db.exec("INSERT INTO projects (id) VALUES (?)", vec![Value::Integer(7)])
                .unwrap();
        }

        let db = Database::open(&path).unwrap();
        let rows = db.query("SELECT id FROM projects", vec![]).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.column("id"), vec![&Value::Integer(7)]);
    }

    #[test]
    fn test_open_rejects_unreachable_path() {
        let err = Database::open("/plume-missing-dir/app.db").unwrap_err();
        match err {
            DbError::Connection { path, .. } => assert!(path.contains("plume-missing-dir")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_settings_applies_pragmas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.db");

        let mut settings = Settings::new(path.to_string_lossy());
        settings.journal_mode = Some(JournalMode::Wal);
        settings.busy_timeout_ms = Some(5000);
        settings.case_sensitive_like = Some(true);

        let db = Database::from_settings(&settings).unwrap();
        let conn = db.conn.lock().unwrap();

        let mode: String = conn
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(mode, "wal");

        let timeout: i64 = conn
            .query_row("PRAGMA busy_timeout", [], |row| row.get(0))
            .unwrap();
        assert_eq!(timeout, 5000);

        let case_sensitive: i64 = conn
            .query_row("SELECT 'ABC' LIKE 'abc'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(case_sensitive, 0);
    }

    #[test]
    fn test_transactions_commit_and_rollback() {
        let db = setup_db();

        db.begin_transaction().unwrap();
        db.insert("projects")
            .set("title", "discarded".to_string())
            .execute()
            .unwrap();
        db.rollback().unwrap();

        let rows = db.query("SELECT COUNT(*) AS total FROM projects", vec![]).unwrap();
        assert_eq!(rows.column("total"), vec![&Value::Integer(0)]);

        db.begin_transaction().unwrap();
        db.insert("projects")
            .set("title", "kept".to_string())
            .execute()
            .unwrap();
        db.commit().unwrap();

        let rows = db.query("SELECT COUNT(*) AS total FROM projects", vec![]).unwrap();
        assert_eq!(rows.column("total"), vec![&Value::Integer(1)]);
    }

    #[test]
    fn test_raw_query_helpers() {
        let db = setup_db();
        db.exec(
            "INSERT INTO projects (title) VALUES (?), (?)",
            vec![
                Value::Text("alpha".to_string()),
                Value::Text("beta".to_string()),
            ],
        )
        .unwrap();

        let rows = db
            .query("SELECT title FROM projects ORDER BY title", vec![])
            .unwrap();
        assert_eq!(rows.len(), 2);

        let titles = db
            .query_as::<ProjectTitle>(
                "SELECT title FROM projects WHERE title != ? ORDER BY title",
                vec![Value::Text("beta".to_string())],
            )
            .unwrap();
        assert_eq!(
            titles,
            vec![ProjectTitle {
                title: "alpha".to_string()
            }]
        );
    }
}

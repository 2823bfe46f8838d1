//! Statement execution against the shared connection.
//!
//! The builders render text and parameters; everything that touches
//! rusqlite lives here. Queries materialize into [`Rows`] or typed
//! entities, mutations report affected rows and, for inserts, the
//! generated rowid.

use std::sync::{Arc, Mutex};

use rusqlite::{types::Value, Connection, ToSql};
use tracing::debug;

use crate::{
    error::{DbError, DbResult},
    row::{Row, Rows},
    statement::StatementKind,
    traits::FromRow,
};

/// Outcome of an INSERT/UPDATE/DELETE.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MutationResult {
    pub rows_affected: usize,
    /// Rowid generated by an INSERT; `None` for other statement kinds.
    pub generated_id: Option<i64>,
}

pub(crate) fn run_query(
    db: &Arc<Mutex<Connection>>,
    sql: &str,
    params: &[Value],
    kind: StatementKind,
) -> DbResult<Rows> {
    debug!(kind = %kind, sql = sql, params = params.len(), "executing query");
    let wrap = |source| DbError::Execution { kind, source };

    let conn = db.lock()?;
    let mut stmt = conn.prepare(sql).map_err(wrap)?;
    let columns: Arc<Vec<String>> =
        Arc::new(stmt.column_names().iter().map(|c| c.to_string()).collect());

    let params_ref: Vec<&dyn ToSql> = params.iter().map(|v| v as &dyn ToSql).collect();
    let mut rows = stmt.query(params_ref.as_slice()).map_err(wrap)?;

    let mut items = Vec::new();
    while let Some(row) = rows.next().map_err(wrap)? {
        let mut values = Vec::with_capacity(columns.len());
        for idx in 0..columns.len() {
            values.push(row.get::<_, Value>(idx).map_err(wrap)?);
        }
        items.push(Row::new(columns.clone(), values));
    }
    Ok(Rows::new(items))
}

pub(crate) fn run_query_as<E: FromRow>(
    db: &Arc<Mutex<Connection>>,
    sql: &str,
    params: &[Value],
    kind: StatementKind,
) -> DbResult<Vec<E>> {
    debug!(kind = %kind, sql = sql, params = params.len(), "executing typed query");
    let wrap = |source| DbError::Execution { kind, source };

    let conn = db.lock()?;
    let mut stmt = conn.prepare(sql).map_err(wrap)?;

    let params_ref: Vec<&dyn ToSql> = params.iter().map(|v| v as &dyn ToSql).collect();
    let rows = stmt
        .query_map(params_ref.as_slice(), E::from_row)
        .map_err(wrap)?;
    rows.collect::<rusqlite::Result<Vec<E>>>().map_err(wrap)
}

pub(crate) fn run_mutation(
    db: &Arc<Mutex<Connection>>,
    sql: &str,
    params: &[Value],
    kind: StatementKind,
) -> DbResult<MutationResult> {
    debug!(kind = %kind, sql = sql, params = params.len(), "executing mutation");

    let conn = db.lock()?;
    let params_ref: Vec<&dyn ToSql> = params.iter().map(|v| v as &dyn ToSql).collect();
    let rows_affected = conn
        .execute(sql, params_ref.as_slice())
        .map_err(|source| DbError::Execution { kind, source })?;

    let generated_id = match kind {
        StatementKind::Insert => Some(conn.last_insert_rowid()),
        _ => None,
    };
    Ok(MutationResult {
        rows_affected,
        generated_id,
    })
}

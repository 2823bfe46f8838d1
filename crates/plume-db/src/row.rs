//! Loosely typed result rows.

use std::sync::Arc;

use rusqlite::types::Value;

/// One result row. Column names are shared across the whole result set;
/// values are owned copies detached from the connection.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    columns: Arc<Vec<String>>,
    values: Vec<Value>,
}

impl Row {
    pub(crate) fn new(columns: Arc<Vec<String>>, values: Vec<Value>) -> Self {
        Self { columns, values }
    }

    /// Looks up a value by column name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|idx| self.values.get(idx))
    }

    /// Looks up a value by column name, falling back to `default` when the
    /// column is absent.
    pub fn get_or(&self, column: &str, default: Value) -> Value {
        self.get(column).cloned().unwrap_or(default)
    }

    /// Column names in select order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values in select order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

/// An owned, fully materialized result set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rows {
    items: Vec<Row>,
}

impl Rows {
    pub(crate) fn new(items: Vec<Row>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&Row> {
        self.items.first()
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.items.iter()
    }

    /// All values of one column, in row order. Rows without the column are
    /// skipped.
    pub fn column(&self, name: &str) -> Vec<&Value> {
        self.items.iter().filter_map(|row| row.get(name)).collect()
    }
}

impl IntoIterator for Rows {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Rows {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

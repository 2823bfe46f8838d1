//! LIMIT/OFFSET clause.
//!
//! Unlike the other clauses, `LIMIT` carries its own bind parameters: the
//! quantity and offset render as `?` placeholders and their values append
//! after every condition parameter in the final statement.

use rusqlite::types::Value;

/// A parameterized `LIMIT ?` or `LIMIT ? OFFSET ?` clause.
#[derive(Clone, Debug, PartialEq)]
pub struct Limit {
    quantity: i64,
    offset: i64,
}

impl Limit {
    /// Builds a limit clause, or `None` when `quantity` is zero or negative.
    /// A non-positive quantity means "no limit", so callers keep whatever
    /// clause was already set.
    pub fn new(quantity: i64, offset: i64) -> Option<Self> {
        if quantity <= 0 {
            return None;
        }
        Some(Self { quantity, offset })
    }

    /// The offset renders only when positive.
    pub fn render(&self) -> String {
        if self.offset > 0 {
            String::from("LIMIT ? OFFSET ?")
        } else {
            String::from("LIMIT ?")
        }
    }

    /// Bind values in render order.
    pub fn params(&self) -> Vec<Value> {
        if self.offset > 0 {
            vec![Value::Integer(self.quantity), Value::Integer(self.offset)]
        } else {
            vec![Value::Integer(self.quantity)]
        }
    }
}

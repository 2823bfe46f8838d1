//! SELECT statement builder.

use std::sync::{Arc, Mutex};

use rusqlite::{types::Value, Connection};

use crate::{
    clause::{
        ConditionChain, ConditionFragment, Connector, Direction, Grouping, JoinType, Limit,
        Ordering, RelationChain, RelationFragment,
    },
    error::{DbError, DbResult},
    executor,
    row::Rows,
    statement::StatementKind,
    traits::FromRow,
};

/// A fluent SELECT builder.
///
/// Constructed via [`Select::from`] (or [`crate::Database::select`]), then
/// chained with projections, joins, conditions, grouping, ordering and a
/// limit. [`Select::to_sql`] and [`Select::parameters`] render the
/// accumulated state without touching the connection; [`Select::execute`]
/// and [`Select::fetch`] run it.
///
/// # Example
///
/// ```rust
/// use plume_db::{Database, Direction};
///
/// let db = Database::open_in_memory().unwrap();
/// db.exec(
///     "CREATE TABLE employees (
///         id INTEGER PRIMARY KEY,
///         name TEXT NOT NULL,
///         salary INTEGER NOT NULL
///     )",
///     vec![],
/// )
/// .unwrap();
///
/// let select = db
///     .select("employees")
///     .columns(&["id", "name"])
///     .where_("salary", ">", 50_000)
///     .or_where("name", "=", "Ada".to_string())
///     .unwrap()
///     .order_by(&["name"], Direction::Asc)
///     .limit(10);
///
/// assert_eq!(
///     select.to_sql(),
///     "SELECT id, name FROM employees WHERE salary > ? OR name = ? ORDER BY name ASC LIMIT ?"
/// );
///
/// let rows = select.execute().unwrap();
/// assert!(rows.is_empty());
/// ```
#[derive(Debug)]
pub struct Select {
    db: Arc<Mutex<Connection>>,
    table: String,
    columns: Vec<String>,
    relations: RelationChain,
    conditions: ConditionChain,
    grouping: Option<Grouping>,
    ordering: Option<Ordering>,
    limit: Option<Limit>,
    params: Vec<Value>,
}

impl Select {
    /// Starts a new select on the given table.
    ///
    /// # Parameters
    ///
    /// - `db`: shared database connection
    /// - `table`: table name (e.g., `"employees"`)
    pub fn from(db: Arc<Mutex<Connection>>, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
            columns: vec![],
            relations: RelationChain::new(),
            conditions: ConditionChain::new(),
            grouping: None,
            ordering: None,
            limit: None,
            params: vec![],
        }
    }

    /// Restricts the projection to the given columns. An empty list selects `*`.
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Adds an INNER JOIN against `child_table`.
    pub fn join(
        self,
        child_table: &str,
        foreign_key: &str,
        operator: &str,
        primary_key: &str,
    ) -> Self {
        self.add_relation(JoinType::Inner, child_table, foreign_key, operator, primary_key)
    }

    /// Adds a LEFT OUTER JOIN against `child_table`.
    pub fn left_join(
        self,
        child_table: &str,
        foreign_key: &str,
        operator: &str,
        primary_key: &str,
    ) -> Self {
        self.add_relation(
            JoinType::LeftOuter,
            child_table,
            foreign_key,
            operator,
            primary_key,
        )
    }

    /// Adds a RIGHT OUTER JOIN against `child_table`.
    pub fn right_join(
        self,
        child_table: &str,
        foreign_key: &str,
        operator: &str,
        primary_key: &str,
    ) -> Self {
        self.add_relation(
            JoinType::RightOuter,
            child_table,
            foreign_key,
            operator,
            primary_key,
        )
    }

    /// Adds a FULL OUTER JOIN against `child_table`.
    pub fn full_join(
        self,
        child_table: &str,
        foreign_key: &str,
        operator: &str,
        primary_key: &str,
    ) -> Self {
        self.add_relation(
            JoinType::FullOuter,
            child_table,
            foreign_key,
            operator,
            primary_key,
        )
    }

    /// Appends an AND-connected comparison, `column operator ?`.
    pub fn where_<V: Into<Value>>(mut self, column: &str, operator: &str, value: V) -> Self {
        self.conditions
            .push(ConditionFragment::comparison(column, operator, Connector::And));
        self.params.push(value.into());
        self
    }

    /// Appends an OR-connected comparison. Fails unless a base condition exists.
    pub fn or_where<V: Into<Value>>(
        mut self,
        column: &str,
        operator: &str,
        value: V,
    ) -> DbResult<Self> {
        self.require_base("or_where")?;
        self.conditions
            .push(ConditionFragment::comparison(column, operator, Connector::Or));
        self.params.push(value.into());
        Ok(self)
    }

    /// Appends an AND-connected `BETWEEN ? AND ?` range check.
    pub fn between<V: Into<Value>>(mut self, column: &str, min: V, max: V) -> Self {
        self.conditions
            .push(ConditionFragment::between(column, Connector::And, false));
        self.params.push(min.into());
        self.params.push(max.into());
        self
    }

    /// Appends an OR-connected range check. Fails unless a base condition exists.
    pub fn or_between<V: Into<Value>>(mut self, column: &str, min: V, max: V) -> DbResult<Self> {
        self.require_base("or_between")?;
        self.conditions
            .push(ConditionFragment::between(column, Connector::Or, false));
        self.params.push(min.into());
        self.params.push(max.into());
        Ok(self)
    }

    /// Appends an AND-connected `NOT BETWEEN ? AND ?` range check.
    pub fn not_between<V: Into<Value>>(mut self, column: &str, min: V, max: V) -> Self {
        self.conditions
            .push(ConditionFragment::between(column, Connector::And, true));
        self.params.push(min.into());
        self.params.push(max.into());
        self
    }

    /// Appends an OR-connected negated range check. Fails unless a base condition exists.
    pub fn or_not_between<V: Into<Value>>(
        mut self,
        column: &str,
        min: V,
        max: V,
    ) -> DbResult<Self> {
        self.require_base("or_not_between")?;
        self.conditions
            .push(ConditionFragment::between(column, Connector::Or, true));
        self.params.push(min.into());
        self.params.push(max.into());
        Ok(self)
    }

    /// Appends an AND-connected `IN ( … )` membership check.
    ///
    /// Fails when `values` is empty, since `IN ()` is not valid SQL.
    pub fn in_<V, I>(mut self, column: &str, values: I) -> DbResult<Self>
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        let values = self.collect_in_values(column, values)?;
        self.conditions.push(ConditionFragment::in_list(
            column,
            values.len(),
            Connector::And,
            false,
        ));
        self.params.extend(values);
        Ok(self)
    }

    /// Appends an OR-connected membership check. Fails unless a base
    /// condition exists, or when `values` is empty.
    pub fn or_in<V, I>(mut self, column: &str, values: I) -> DbResult<Self>
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        self.require_base("or_in")?;
        let values = self.collect_in_values(column, values)?;
        self.conditions.push(ConditionFragment::in_list(
            column,
            values.len(),
            Connector::Or,
            false,
        ));
        self.params.extend(values);
        Ok(self)
    }

    /// Appends an AND-connected `NOT IN ( … )` membership check.
    ///
    /// Fails when `values` is empty.
    pub fn not_in<V, I>(mut self, column: &str, values: I) -> DbResult<Self>
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        let values = self.collect_in_values(column, values)?;
        self.conditions.push(ConditionFragment::in_list(
            column,
            values.len(),
            Connector::And,
            true,
        ));
        self.params.extend(values);
        Ok(self)
    }

    /// Appends an OR-connected negated membership check. Fails unless a base
    /// condition exists, or when `values` is empty.
    pub fn or_not_in<V, I>(mut self, column: &str, values: I) -> DbResult<Self>
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        self.require_base("or_not_in")?;
        let values = self.collect_in_values(column, values)?;
        self.conditions.push(ConditionFragment::in_list(
            column,
            values.len(),
            Connector::Or,
            true,
        ));
        self.params.extend(values);
        Ok(self)
    }

    /// Appends an AND-connected `LIKE ?` pattern match. The pattern is bound
    /// as given; wildcards are the caller's business.
    pub fn like(mut self, column: &str, pattern: impl Into<String>) -> Self {
        self.conditions
            .push(ConditionFragment::like(column, Connector::And, false));
        self.params.push(Value::Text(pattern.into()));
        self
    }

    /// Appends an OR-connected pattern match. Fails unless a base condition exists.
    pub fn or_like(mut self, column: &str, pattern: impl Into<String>) -> DbResult<Self> {
        self.require_base("or_like")?;
        self.conditions
            .push(ConditionFragment::like(column, Connector::Or, false));
        self.params.push(Value::Text(pattern.into()));
        Ok(self)
    }

    /// Appends an AND-connected `NOT LIKE ?` pattern match.
    pub fn not_like(mut self, column: &str, pattern: impl Into<String>) -> Self {
        self.conditions
            .push(ConditionFragment::like(column, Connector::And, true));
        self.params.push(Value::Text(pattern.into()));
        self
    }

    /// Appends an OR-connected negated pattern match. Fails unless a base condition exists.
    pub fn or_not_like(mut self, column: &str, pattern: impl Into<String>) -> DbResult<Self> {
        self.require_base("or_not_like")?;
        self.conditions
            .push(ConditionFragment::like(column, Connector::Or, true));
        self.params.push(Value::Text(pattern.into()));
        Ok(self)
    }

    /// Appends an AND-connected `IS NULL` check. Binds nothing.
    pub fn null(mut self, column: &str) -> Self {
        self.conditions
            .push(ConditionFragment::is_null(column, Connector::And, false));
        self
    }

    /// Appends an OR-connected `IS NULL` check. Fails unless a base condition exists.
    pub fn or_null(mut self, column: &str) -> DbResult<Self> {
        self.require_base("or_null")?;
        self.conditions
            .push(ConditionFragment::is_null(column, Connector::Or, false));
        Ok(self)
    }

    /// Appends an AND-connected `IS NOT NULL` check. Binds nothing.
    pub fn not_null(mut self, column: &str) -> Self {
        self.conditions
            .push(ConditionFragment::is_null(column, Connector::And, true));
        self
    }

    /// Appends an OR-connected `IS NOT NULL` check. Fails unless a base condition exists.
    pub fn or_not_null(mut self, column: &str) -> DbResult<Self> {
        self.require_base("or_not_null")?;
        self.conditions
            .push(ConditionFragment::is_null(column, Connector::Or, true));
        Ok(self)
    }

    /// Sets the GROUP BY columns, replacing any previous grouping. An empty
    /// list leaves the clause unchanged.
    pub fn group_by(mut self, columns: &[&str]) -> Self {
        if !columns.is_empty() {
            self.grouping = Some(Grouping::new(columns));
        }
        self
    }

    /// Sets the ORDER BY columns and direction, replacing any previous
    /// ordering. An empty list leaves the clause unchanged.
    pub fn order_by(mut self, columns: &[&str], direction: Direction) -> Self {
        if !columns.is_empty() {
            self.ordering = Some(Ordering::new(columns, direction));
        }
        self
    }

    /// Limits the result set to `quantity` rows.
    ///
    /// The quantity is bound as a `?` parameter. A zero or negative quantity
    /// leaves any previously set limit in place.
    pub fn limit(self, quantity: i64) -> Self {
        self.limit_offset(quantity, 0)
    }

    /// Limits the result set to `quantity` rows starting at `offset`.
    ///
    /// Quantity and offset replace any previous limit clause together with
    /// its bound values. A zero or negative quantity leaves the previous
    /// clause in place; a non-positive offset renders a plain `LIMIT ?`.
    pub fn limit_offset(mut self, quantity: i64, offset: i64) -> Self {
        if let Some(limit) = Limit::new(quantity, offset) {
            self.limit = Some(limit);
        }
        self
    }

    /// Renders the statement text. Pure; calling it repeatedly gives the
    /// same string.
    pub fn to_sql(&self) -> String {
        let columns = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(", ")
        };

        let mut sql = format!("SELECT {} FROM {}", columns, self.table);

        if !self.relations.is_empty() {
            sql.push(' ');
            sql.push_str(&self.relations.render());
        }
        if !self.conditions.is_empty() {
            sql.push(' ');
            sql.push_str(&self.conditions.render());
        }
        if let Some(grouping) = &self.grouping {
            sql.push(' ');
            sql.push_str(&grouping.render());
        }
        if let Some(ordering) = &self.ordering {
            sql.push(' ');
            sql.push_str(&ordering.render());
        }
        if let Some(limit) = &self.limit {
            sql.push(' ');
            sql.push_str(&limit.render());
        }

        sql
    }

    /// Bound values in placeholder order: condition values first, then the
    /// limit quantity and offset.
    pub fn parameters(&self) -> Vec<Value> {
        let mut params = self.params.clone();
        if let Some(limit) = &self.limit {
            params.extend(limit.params());
        }
        params
    }

    /// Runs the statement and returns the result set as loosely typed rows.
    pub fn execute(&self) -> DbResult<Rows> {
        executor::run_query(
            &self.db,
            &self.to_sql(),
            &self.parameters(),
            StatementKind::Select,
        )
    }

    /// Runs the statement and maps each row into `E`.
    pub fn fetch<E: FromRow>(&self) -> DbResult<Vec<E>> {
        executor::run_query_as(
            &self.db,
            &self.to_sql(),
            &self.parameters(),
            StatementKind::Select,
        )
    }

    fn add_relation(
        mut self,
        join_type: JoinType,
        child_table: &str,
        foreign_key: &str,
        operator: &str,
        primary_key: &str,
    ) -> Self {
        self.relations.push(RelationFragment::new(
            join_type,
            child_table,
            foreign_key,
            operator,
            primary_key,
        ));
        self
    }

    fn require_base(&self, method: &'static str) -> DbResult<()> {
        if self.conditions.is_empty() {
            return Err(DbError::MissingBaseCondition { method });
        }
        Ok(())
    }

    fn collect_in_values<V, I>(&self, column: &str, values: I) -> DbResult<Vec<Value>>
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(DbError::EmptyValueList {
                column: column.to_string(),
            });
        }
        Ok(values)
    }
}

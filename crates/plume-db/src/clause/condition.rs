//! Condition fragments and the WHERE chain.
//!
//! A [`ConditionFragment`] is one predicate plus the connector joining it to
//! the fragment before it. The [`ConditionChain`] renders all fragments, in
//! append order, as a single `WHERE …` body; the first fragment's connector
//! is never rendered.

/// Logical keyword joining two condition fragments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    pub fn as_keyword(&self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

/// The predicate forms a fragment can take.
#[derive(Clone, Debug, PartialEq)]
enum Predicate {
    Comparison { column: String, operator: String },
    Between { column: String, negated: bool },
    In { column: String, count: usize, negated: bool },
    Like { column: String, negated: bool },
    IsNull { column: String, negated: bool },
}

/// One predicate plus the connector that joins it to the previous fragment.
#[derive(Clone, Debug, PartialEq)]
pub struct ConditionFragment {
    connector: Connector,
    predicate: Predicate,
}

impl ConditionFragment {
    /// A binary comparison, `<column> <operator> ?`. One placeholder.
    pub fn comparison(
        column: impl Into<String>,
        operator: impl Into<String>,
        connector: Connector,
    ) -> Self {
        Self {
            connector,
            predicate: Predicate::Comparison {
                column: column.into(),
                operator: operator.into(),
            },
        }
    }

    /// A range check, `<column> [NOT] BETWEEN ? AND ?`. Two placeholders.
    pub fn between(column: impl Into<String>, connector: Connector, negated: bool) -> Self {
        Self {
            connector,
            predicate: Predicate::Between {
                column: column.into(),
                negated,
            },
        }
    }

    /// A membership check, `<column> [NOT] IN ( ?, … )` with `count`
    /// placeholders. `count` of zero renders an empty placeholder list,
    /// which is not valid SQL; callers reject it before building a
    /// fragment.
    pub fn in_list(
        column: impl Into<String>,
        count: usize,
        connector: Connector,
        negated: bool,
    ) -> Self {
        Self {
            connector,
            predicate: Predicate::In {
                column: column.into(),
                count,
                negated,
            },
        }
    }

    /// A pattern match, `<column> [NOT] LIKE ?`. One placeholder.
    pub fn like(column: impl Into<String>, connector: Connector, negated: bool) -> Self {
        Self {
            connector,
            predicate: Predicate::Like {
                column: column.into(),
                negated,
            },
        }
    }

    /// A null check, `<column> IS [NOT] NULL`. No placeholders.
    pub fn is_null(column: impl Into<String>, connector: Connector, negated: bool) -> Self {
        Self {
            connector,
            predicate: Predicate::IsNull {
                column: column.into(),
                negated,
            },
        }
    }

    pub fn connector(&self) -> Connector {
        self.connector
    }

    /// Number of `?` placeholders this fragment renders.
    pub fn arity(&self) -> usize {
        match &self.predicate {
            Predicate::Comparison { .. } | Predicate::Like { .. } => 1,
            Predicate::Between { .. } => 2,
            Predicate::In { count, .. } => *count,
            Predicate::IsNull { .. } => 0,
        }
    }

    /// The predicate text, without the leading connector.
    fn render(&self) -> String {
        match &self.predicate {
            Predicate::Comparison { column, operator } => {
                format!("{} {} ?", column, operator)
            }
            Predicate::Between { column, negated } => {
                let op = if *negated { "NOT BETWEEN" } else { "BETWEEN" };
                format!("{} {} ? AND ?", column, op)
            }
            Predicate::In {
                column,
                count,
                negated,
            } => {
                let op = if *negated { "NOT IN" } else { "IN" };
                let placeholders = vec!["?"; *count].join(", ");
                format!("{} {} ( {} )", column, op, placeholders)
            }
            Predicate::Like { column, negated } => {
                let op = if *negated { "NOT LIKE" } else { "LIKE" };
                format!("{} {} ?", column, op)
            }
            Predicate::IsNull { column, negated } => {
                let op = if *negated { "IS NOT NULL" } else { "IS NULL" };
                format!("{} {}", column, op)
            }
        }
    }
}

/// Ordered sequence of condition fragments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConditionChain {
    fragments: Vec<ConditionFragment>,
}

impl ConditionChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: ConditionFragment) {
        self.fragments.push(fragment);
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Sum of placeholder counts across all fragments.
    pub fn placeholder_count(&self) -> usize {
        self.fragments.iter().map(ConditionFragment::arity).sum()
    }

    /// Renders `WHERE …`, or an empty string when no fragments exist.
    ///
    /// Fragments after the first are prefixed with their connector keyword;
    /// the first fragment renders bare, so the body never starts with
    /// `AND`/`OR`.
    pub fn render(&self) -> String {
        if self.fragments.is_empty() {
            return String::new();
        }
        let mut sql = String::from("WHERE ");
        for (idx, fragment) in self.fragments.iter().enumerate() {
            if idx > 0 {
                sql.push(' ');
                sql.push_str(fragment.connector().as_keyword());
                sql.push(' ');
            }
            sql.push_str(&fragment.render());
        }
        sql
    }
}

//! JOIN fragments.

/// The join flavors SQLite accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    LeftOuter,
    RightOuter,
    FullOuter,
}

impl JoinType {
    pub fn as_sql(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER",
            JoinType::LeftOuter => "LEFT OUTER",
            JoinType::RightOuter => "RIGHT OUTER",
            JoinType::FullOuter => "FULL OUTER",
        }
    }
}

/// One `… JOIN <table> ON (<left> <op> <right>)` clause.
#[derive(Clone, Debug, PartialEq)]
pub struct RelationFragment {
    join_type: JoinType,
    child_table: String,
    foreign_key: String,
    operator: String,
    primary_key: String,
}

impl RelationFragment {
    pub fn new(
        join_type: JoinType,
        child_table: impl Into<String>,
        foreign_key: impl Into<String>,
        operator: impl Into<String>,
        primary_key: impl Into<String>,
    ) -> Self {
        Self {
            join_type,
            child_table: child_table.into(),
            foreign_key: foreign_key.into(),
            operator: operator.into(),
            primary_key: primary_key.into(),
        }
    }

    fn render(&self) -> String {
        format!(
            "{} JOIN {} ON ({} {} {})",
            self.join_type.as_sql(),
            self.child_table,
            self.foreign_key,
            self.operator,
            self.primary_key
        )
    }
}

/// Ordered sequence of join fragments, rendered space separated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelationChain {
    fragments: Vec<RelationFragment>,
}

impl RelationChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: RelationFragment) {
        self.fragments.push(fragment);
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn render(&self) -> String {
        self.fragments
            .iter()
            .map(RelationFragment::render)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

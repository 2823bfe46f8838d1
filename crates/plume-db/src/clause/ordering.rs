//! ORDER BY clause.

/// Sort direction for an `ORDER BY` clause.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// An `ORDER BY <columns> <direction>` clause. The direction applies to the
/// column list as a whole, once, at the end.
#[derive(Clone, Debug, PartialEq)]
pub struct Ordering {
    columns: Vec<String>,
    direction: Direction,
}

impl Ordering {
    pub fn new(columns: &[&str], direction: Direction) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            direction,
        }
    }

    pub fn render(&self) -> String {
        format!(
            "ORDER BY {} {}",
            self.columns.join(", "),
            self.direction.as_sql()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_column_ascending() {
        let ordering = Ordering::new(&["name"], Direction::Asc);
        assert_eq!(ordering.render(), "ORDER BY name ASC");
    }

    #[test]
    fn test_direction_applies_once_after_all_columns() {
        let ordering = Ordering::new(&["surname", "name"], Direction::Desc);
        assert_eq!(ordering.render(), "ORDER BY surname, name DESC");
    }
}

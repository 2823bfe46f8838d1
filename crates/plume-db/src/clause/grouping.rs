//! GROUP BY clause.

/// A `GROUP BY <columns>` clause.
#[derive(Clone, Debug, PartialEq)]
pub struct Grouping {
    columns: Vec<String>,
}

impl Grouping {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn render(&self) -> String {
        format!("GROUP BY {}", self.columns.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_column_list() {
        assert_eq!(Grouping::new(&["dept"]).render(), "GROUP BY dept");
        assert_eq!(
            Grouping::new(&["dept", "role"]).render(),
            "GROUP BY dept, role"
        );
    }
}

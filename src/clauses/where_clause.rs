use crate::dialect::PlaceholderFormat;
use crate::traits::{Column, ColumnRef};
use crate::types::SqlValue;

/// Represents a WHERE clause condition.
/// Supports basic comparison operations and logical combinations.
#[derive(Debug, Clone)]
pub enum WhereClause {
    /// column = value
    Eq(ColumnRef, SqlValue),
    /// clause AND clause
    And(Box<WhereClause>, Box<WhereClause>),
    /// clause OR clause
    Or(Box<WhereClause>, Box<WhereClause>),
}

impl WhereClause {
    /// Creates an equality condition: column = value
    pub fn eq<C: Column, V: Into<SqlValue>>(column: &C, value: V) -> Self {
        WhereClause::Eq(ColumnRef::from_column(column), value.into())
    }

    /// Combines this clause with another using AND
    pub fn and(self, other: WhereClause) -> Self {
        WhereClause::And(Box::new(self), Box::new(other))
    }

    /// Combines this clause with another using OR
    pub fn or(self, other: WhereClause) -> Self {
        WhereClause::Or(Box::new(self), Box::new(other))
    }

    /// Builds the SQL string and collects parameters.
    ///
    /// Markers are rendered through `placeholder`; for numbered formats the
    /// position is the parameter's 1-based index across the whole clause
    /// tree, in left-to-right order.
    pub fn build_sql(
        &self,
        placeholder: PlaceholderFormat,
        params: &mut Vec<SqlValue>,
    ) -> String {
        match self {
            WhereClause::Eq(col, value) => {
                params.push(value.clone());
                format!(
                    "{} = {}",
                    col.qualified_name(),
                    placeholder.marker(params.len())
                )
            }
            WhereClause::And(left, right) => {
                let left_sql = left.build_sql(placeholder, params);
                let right_sql = right.build_sql(placeholder, params);
                format!("({}) AND ({})", left_sql, right_sql)
            }
            WhereClause::Or(left, right) => {
                let left_sql = left.build_sql(placeholder, params);
                let right_sql = right.build_sql(placeholder, params);
                format!("({}) OR ({})", left_sql, right_sql)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test column implementation
    struct TestColumn {
        table: &'static str,
        column: &'static str,
    }

    impl Column for TestColumn {
        fn column_name(&self) -> &'static str {
            self.column
        }
        fn table_name(&self) -> &'static str {
            self.table
        }
    }

    #[test]
    fn test_eq_clause_dollar() {
        let col = TestColumn {
            table: "users",
            column: "name",
        };
        let clause = WhereClause::eq(&col, "John");
        let mut params = Vec::new();
        let sql = clause.build_sql(PlaceholderFormat::Dollar, &mut params);

        assert_eq!(sql, "users.name = $1");
        assert_eq!(params.len(), 1);
        assert_eq!(params[0], SqlValue::Text("John".to_string()));
    }

    #[test]
    fn test_eq_clause_question() {
        let col = TestColumn {
            table: "users",
            column: "name",
        };
        let clause = WhereClause::eq(&col, "John");
        let mut params = Vec::new();
        let sql = clause.build_sql(PlaceholderFormat::Question, &mut params);

        assert_eq!(sql, "users.name = ?");
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_and_clause_numbers_sequentially() {
        let name_col = TestColumn {
            table: "users",
            column: "name",
        };
        let age_col = TestColumn {
            table: "users",
            column: "age",
        };

        let clause = WhereClause::eq(&name_col, "John").and(WhereClause::eq(&age_col, 30));

        let mut params = Vec::new();
        let sql = clause.build_sql(PlaceholderFormat::Dollar, &mut params);

        assert_eq!(sql, "(users.name = $1) AND (users.age = $2)");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_and_clause_question_repeats_marker() {
        let name_col = TestColumn {
            table: "users",
            column: "name",
        };
        let age_col = TestColumn {
            table: "users",
            column: "age",
        };

        let clause = WhereClause::eq(&name_col, "John").and(WhereClause::eq(&age_col, 30));

        let mut params = Vec::new();
        let sql = clause.build_sql(PlaceholderFormat::Question, &mut params);

        assert_eq!(sql, "(users.name = ?) AND (users.age = ?)");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_or_clause() {
        let name_col = TestColumn {
            table: "users",
            column: "name",
        };

        let clause = WhereClause::eq(&name_col, "John").or(WhereClause::eq(&name_col, "Jane"));

        let mut params = Vec::new();
        let sql = clause.build_sql(PlaceholderFormat::Dollar, &mut params);

        assert_eq!(sql, "(users.name = $1) OR (users.name = $2)");
        assert_eq!(params.len(), 2);
    }
}

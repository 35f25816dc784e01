//! Interfaces to the external data layer.
//!
//! Widgets never own data. They hold references to [`Column`]s (for value
//! bindings and grid headers), [`Record`]s (rows of structured data) and
//! [`RecordSource`]s (queryable record collections). The data layer behind
//! these traits is an external collaborator; the widget crate ships in-memory
//! implementations for tests and simple applications.

use std::fmt;
use std::sync::Arc;

use crate::value::{Value, ValueType};

/// A named, typed data column.
pub trait Column: Send + Sync {
    /// Column title, also used as the grid header and record field name.
    fn title(&self) -> &str;

    /// The value type this column holds.
    fn value_type(&self) -> ValueType;

    /// The column's value for the record it belongs to.
    fn current_value(&self) -> Value;

    /// Human-readable description of where the column comes from.
    ///
    /// Used in diagnostics only.
    fn source_expression(&self) -> String {
        self.title().to_string()
    }
}

impl fmt::Debug for dyn Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("title", &self.title())
            .field("value_type", &self.value_type().name())
            .finish()
    }
}

/// One row of structured data.
pub trait Record: Send + Sync {
    /// The record's columns, in order.
    fn columns(&self) -> Vec<Arc<dyn Column>>;

    /// Look up a column by title.
    fn column(&self, title: &str) -> Option<Arc<dyn Column>> {
        self.columns().into_iter().find(|c| c.title() == title)
    }
}

/// A queryable collection of records.
pub trait RecordSource: Send + Sync {
    /// Records matching `filter`, in source order.
    fn filtered_by(&self, filter: &Filter) -> Vec<Arc<dyn Record>>;

    /// Every record in the source.
    fn records(&self) -> Vec<Arc<dyn Record>> {
        self.filtered_by(&Filter::all())
    }
}

/// A conjunction of column equality predicates.
///
/// The empty filter matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    predicates: Vec<(String, Value)>,
}

impl Filter {
    /// The filter that matches everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Add the predicate `column == value`.
    pub fn where_eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.predicates.push((column.into(), value.into()));
        self
    }

    /// Whether no predicates are set.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// The predicates, in insertion order.
    pub fn predicates(&self) -> &[(String, Value)] {
        &self.predicates
    }

    /// Whether `record` satisfies every predicate.
    ///
    /// A record missing a filtered column does not match.
    pub fn matches(&self, record: &dyn Record) -> bool {
        self.predicates.iter().all(|(title, expected)| {
            record
                .column(title)
                .is_some_and(|column| column.current_value() == *expected)
        })
    }

    /// The filter as a printable expression, e.g. `Status == Open AND Owner == kim`.
    pub fn expression(&self) -> String {
        if self.predicates.is_empty() {
            return "TRUE".to_string();
        }
        self.predicates
            .iter()
            .map(|(title, value)| format!("{title} == {value}"))
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        title: &'static str,
        value: Value,
    }

    impl Column for Fixed {
        fn title(&self) -> &str {
            self.title
        }

        fn value_type(&self) -> ValueType {
            ValueType::of::<String>()
        }

        fn current_value(&self) -> Value {
            self.value.clone()
        }
    }

    struct Row(Vec<Arc<dyn Column>>);

    impl Record for Row {
        fn columns(&self) -> Vec<Arc<dyn Column>> {
            self.0.clone()
        }
    }

    fn row(status: &str) -> Row {
        Row(vec![Arc::new(Fixed {
            title: "Status",
            value: Value::from(status),
        })])
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(Filter::all().matches(&row("Open")));
        assert_eq!(Filter::all().expression(), "TRUE");
    }

    #[test]
    fn test_filter_conjunction() {
        let filter = Filter::all().where_eq("Status", "Open");
        assert!(filter.matches(&row("Open")));
        assert!(!filter.matches(&row("Closed")));

        let stricter = filter.where_eq("Owner", "kim");
        assert!(!stricter.matches(&row("Open")));
        assert_eq!(stricter.expression(), "Status == Open AND Owner == kim");
    }

    #[test]
    fn test_default_column_lookup() {
        let record = row("Open");
        assert!(record.column("Status").is_some());
        assert!(record.column("Owner").is_none());
        assert_eq!(record.columns()[0].source_expression(), "Status");
    }
}

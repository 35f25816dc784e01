//! In-memory data layer.
//!
//! [`MemoryColumn`], [`MemoryRecord`] and [`RecordList`] implement the
//! data-layer traits over plain values held in memory. They are enough to
//! drive bindings, record grids and record dropdowns without an external
//! store.
//!
//! # Example
//!
//! ```
//! use horizon_trellis::data::{MemoryRecord, RecordList};
//! use horizon_trellis_core::{Filter, RecordSource};
//!
//! let people = RecordList::new();
//! people.push(MemoryRecord::new().with("Name", "Ada").with("Team", "core"));
//! people.push(MemoryRecord::new().with("Name", "Lin").with("Team", "web"));
//!
//! let core = people.filtered_by(&Filter::all().where_eq("Team", "core"));
//! assert_eq!(core.len(), 1);
//! ```

use std::sync::Arc;

use parking_lot::RwLock;

use horizon_trellis_core::{Column, Filter, Record, RecordSource, ToValue, Value, ValueType};

/// A column holding a single mutable value.
pub struct MemoryColumn {
    title: String,
    value_type: ValueType,
    value: RwLock<Value>,
}

impl MemoryColumn {
    /// Create a column of type `T` holding `value`.
    pub fn new<T: ToValue + 'static>(title: impl Into<String>, value: T) -> Self {
        Self {
            title: title.into(),
            value_type: ValueType::of::<T>(),
            value: RwLock::new(value.to_value()),
        }
    }

    /// Create a `String` column.
    ///
    /// Text widgets bind to `String` columns, so prefer this over
    /// `new(title, "literal")`, which declares a `&str` column.
    pub fn text(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(title, value.into())
    }

    /// Replace the held value.
    ///
    /// The column type is fixed at construction; the new value is not
    /// checked against it.
    pub fn set_value(&self, value: impl ToValue) {
        *self.value.write() = value.to_value();
    }
}

impl Column for MemoryColumn {
    fn title(&self) -> &str {
        &self.title
    }

    fn value_type(&self) -> ValueType {
        self.value_type
    }

    fn current_value(&self) -> Value {
        self.value.read().clone()
    }

    fn source_expression(&self) -> String {
        format!("memory:{}", self.title)
    }
}

impl std::fmt::Debug for MemoryColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryColumn")
            .field("title", &self.title)
            .field("value_type", &self.value_type.name())
            .field("value", &*self.value.read())
            .finish()
    }
}

/// A record made of in-memory columns.
#[derive(Default)]
pub struct MemoryRecord {
    columns: Vec<Arc<dyn Column>>,
}

impl MemoryRecord {
    /// Create a record with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a [`MemoryColumn`] of type `T`.
    pub fn with<T: ToValue + 'static>(mut self, title: impl Into<String>, value: T) -> Self {
        self.columns.push(Arc::new(MemoryColumn::new(title, value)));
        self
    }

    /// Append an existing column.
    pub fn with_column(mut self, column: Arc<dyn Column>) -> Self {
        self.columns.push(column);
        self
    }
}

impl Record for MemoryRecord {
    fn columns(&self) -> Vec<Arc<dyn Column>> {
        self.columns.clone()
    }
}

/// An ordered list of records, filterable with [`Filter`].
#[derive(Default)]
pub struct RecordList {
    records: RwLock<Vec<Arc<dyn Record>>>,
}

impl RecordList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return the shared handle to it.
    pub fn push(&self, record: impl Record + 'static) -> Arc<dyn Record> {
        let record: Arc<dyn Record> = Arc::new(record);
        self.records.write().push(Arc::clone(&record));
        record
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl From<Vec<Arc<dyn Record>>> for RecordList {
    fn from(records: Vec<Arc<dyn Record>>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl RecordSource for RecordList {
    fn filtered_by(&self, filter: &Filter) -> Vec<Arc<dyn Record>> {
        self.records
            .read()
            .iter()
            .filter(|record| filter.matches(record.as_ref()))
            .cloned()
            .collect()
    }
}

static_assertions::assert_impl_all!(MemoryColumn: Send, Sync);
static_assertions::assert_impl_all!(RecordList: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_type_follows_value() {
        let column = MemoryColumn::new("Age", 30i64);
        assert_eq!(column.value_type(), ValueType::of::<i64>());
        assert_eq!(column.current_value(), Value::Int(30));

        column.set_value(31i64);
        assert_eq!(column.current_value(), Value::Int(31));
        assert_eq!(column.source_expression(), "memory:Age");
    }

    #[test]
    fn test_record_columns_keep_order() {
        let record = MemoryRecord::new().with("B", 1i64).with("A", "x");
        let titles: Vec<String> = record
            .columns()
            .iter()
            .map(|c| c.title().to_string())
            .collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert_eq!(record.column("A").unwrap().current_value(), Value::from("x"));
    }

    #[test]
    fn test_filtered_by_keeps_source_order() {
        let list = RecordList::new();
        let first = list.push(MemoryRecord::new().with("Team", "core"));
        list.push(MemoryRecord::new().with("Team", "web"));
        let third = list.push(MemoryRecord::new().with("Team", "core"));

        let core = list.filtered_by(&Filter::all().where_eq("Team", "core"));
        assert_eq!(core.len(), 2);
        assert!(Arc::ptr_eq(&core[0], &first));
        assert!(Arc::ptr_eq(&core[1], &third));
        assert_eq!(list.records().len(), 3);
    }
}

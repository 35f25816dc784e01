//! Data grid widget.
//!
//! A [`Grid`] shows tabular data either as keyed rows ([`Row`], field name to
//! value) or as structured [`Record`]s. Without explicit columns, columns are
//! derived from the first row or record only; later rows may be sparse and
//! their missing cells render as [`Value::None`]. Empty data yields a grid
//! with no columns.
//!
//! The host expects a grid hosted inside a stack, so a grid converts to a
//! `Stack` descriptor whose only child is the `DataGrid` descriptor.
//!
//! # Example
//!
//! ```
//! use horizon_trellis::widget::widgets::{Grid, GridParameters};
//! use horizon_trellis_core::{Row, Value};
//!
//! let mut first = Row::new();
//! first.insert("Name".into(), Value::from("A"));
//! first.insert("Age".into(), Value::from(30));
//! let mut second = Row::new();
//! second.insert("Name".into(), Value::from("B"));
//!
//! let grid = Grid::new(vec![first, second], GridParameters::default());
//! assert_eq!(grid.column_titles(), vec!["Name", "Age"]);
//! ```

use std::sync::Arc;

use indexmap::IndexMap;

use horizon_trellis_core::{
    keys, Column, Filter, HostKind, Parameters, Record, RecordSet, RecordSource, RenderDescriptor,
    Result, Row, ToValue, Value,
};

use super::grid_column::{
    column_attributes, ColumnDefinition, DerivedColumn, GridColumn, DEFAULT_COLUMN_WIDTH,
};
use super::parameters::GridParameters;
use crate::widget::{ConvertContext, Widget, WidgetBase};

/// The rows a grid displays.
enum GridData {
    Rows(Vec<Row>),
    Records(Vec<Arc<dyn Record>>),
}

impl GridData {
    fn len(&self) -> usize {
        match self {
            GridData::Rows(rows) => rows.len(),
            GridData::Records(records) => records.len(),
        }
    }

    /// Field names of the first row, in order.
    fn derived_titles(&self) -> Vec<String> {
        match self {
            GridData::Rows(rows) => rows
                .first()
                .map(|row| row.keys().cloned().collect())
                .unwrap_or_default(),
            GridData::Records(records) => records
                .first()
                .map(|record| {
                    record
                        .columns()
                        .iter()
                        .map(|column| column.title().to_string())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            GridData::Rows(rows) => Value::List(rows.iter().cloned().map(Value::Map).collect()),
            GridData::Records(records) => Value::Records(RecordSet::new(records.clone())),
        }
    }
}

/// A data grid.
pub struct Grid {
    base: WidgetBase,
    params: GridParameters,
    column_width: String,
    data: GridData,
    columns: Vec<Box<dyn ColumnDefinition>>,
    filter_values: IndexMap<String, Value>,
}

impl Grid {
    fn with_data(data: GridData, params: GridParameters) -> Self {
        Self {
            base: WidgetBase::new(),
            params,
            column_width: DEFAULT_COLUMN_WIDTH.to_string(),
            data,
            columns: Vec::new(),
            filter_values: IndexMap::new(),
        }
    }

    /// Create a grid over keyed rows.
    pub fn new(rows: Vec<Row>, params: GridParameters) -> Self {
        Self::with_data(GridData::Rows(rows), params)
    }

    /// Create a grid over structured records.
    pub fn from_records(records: Vec<Arc<dyn Record>>, params: GridParameters) -> Self {
        Self::with_data(GridData::Records(records), params)
    }

    /// Create a grid over the records of `source` that match `filter`.
    pub fn from_source(source: &dyn RecordSource, filter: &Filter, params: GridParameters) -> Self {
        let mut grid = Self::from_records(source.filtered_by(filter), params);
        for (title, value) in filter.predicates() {
            grid.set_filter_value(title.clone(), value.clone());
        }
        grid
    }

    /// Width for columns that do not set their own.
    pub fn with_column_width(mut self, width: impl Into<String>) -> Self {
        self.column_width = width.into();
        self
    }

    /// Add an explicit column. Once any explicit column is present, columns
    /// are no longer derived from the data.
    pub fn add_column<T>(&mut self, column: GridColumn<T>)
    where
        T: ToValue + Clone + PartialEq + Send + Sync + 'static,
    {
        self.columns.push(Box::new(column));
    }

    /// Add untyped explicit columns titled after data columns.
    pub fn add_columns_from(&mut self, columns: &[Arc<dyn Column>]) {
        for column in columns {
            self.columns
                .push(Box::new(DerivedColumn(column.title().to_string())));
        }
    }

    /// Track a filter value for the column titled `field`.
    pub fn set_filter_value(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.filter_values.insert(field.into(), value.into());
    }

    /// The tracked filter value for `field`, if any.
    pub fn filter_value(&self, field: &str) -> Option<&Value> {
        self.filter_values.get(field)
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// The titles of the columns this grid will render.
    pub fn column_titles(&self) -> Vec<String> {
        if self.columns.is_empty() {
            self.data.derived_titles()
        } else {
            self.columns.iter().map(|c| c.title().to_string()).collect()
        }
    }

    pub fn params(&self) -> &GridParameters {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut GridParameters {
        &mut self.params
    }

    fn describe(&self, column: &dyn ColumnDefinition) -> RenderDescriptor {
        RenderDescriptor::with_attributes(
            HostKind::DataGridColumn,
            column_attributes(
                column,
                &self.column_width,
                self.filter_values.get(column.title()),
            ),
        )
    }

    fn column_descriptors(&self) -> Vec<RenderDescriptor> {
        if self.columns.is_empty() {
            self.data
                .derived_titles()
                .into_iter()
                .map(|title| self.describe(&DerivedColumn(title)))
                .collect()
        } else {
            self.columns.iter().map(|column| self.describe(&**column)).collect()
        }
    }
}

impl Widget for Grid {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn host_kind(&self) -> HostKind {
        HostKind::DataGrid
    }

    fn convert(&self, cx: &ConvertContext<'_>) -> Result<RenderDescriptor> {
        let mut attributes = self.params.project();
        attributes.insert(keys::DATA.to_string(), self.data.to_value());
        attributes.insert(
            keys::COLUMNS.to_string(),
            Value::Content(self.column_descriptors()),
        );
        let grid = vec![cx.descriptor(self, attributes)];

        let mut stack = RenderDescriptor::new(HostKind::Stack);
        self.base.decorate(&mut stack);
        stack.set_attribute(keys::CHILD_CONTENT, grid.clone());
        Ok(stack.with_child_content(grid))
    }

    fn dispose(&mut self) {
        for column in &self.columns {
            column.release();
        }
        self.base.dispose();
    }
}

static_assertions::assert_impl_all!(Grid: Send, Sync);

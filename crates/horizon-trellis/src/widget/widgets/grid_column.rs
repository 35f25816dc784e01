//! Grid column definitions.
//!
//! A grid derives its columns from the first row of its data unless explicit
//! columns are supplied. Explicit columns are [`GridColumn`]s: a title, an
//! optional width, and a typed filter value that may be bound to a data
//! column of the same type.
//!
//! Every column renders to a `DataGridColumn` descriptor carrying `Title`,
//! `Width`, `FilterValue` and a `Template` that looks its field up per row.

use std::sync::Arc;

use horizon_trellis_core::{
    keys, AttributeMap, CellTemplate, Column, HostKind, RenderDescriptor, Result, ToValue,
    TrellisError, Value, ValueBinding, ValueType,
};

use crate::widget::{ConvertContext, Widget, WidgetBase};

/// Width used for columns that do not set one.
pub const DEFAULT_COLUMN_WIDTH: &str = "150px";

/// Anything a grid can turn into a column descriptor.
pub(crate) trait ColumnDefinition: Send + Sync {
    fn title(&self) -> &str;

    fn width(&self) -> Option<&str> {
        None
    }

    fn filter_value(&self) -> Value {
        Value::None
    }

    fn release(&self) {}
}

/// Build the `DataGridColumn` attributes for one column.
///
/// A filter tracked by the grid takes precedence over the column's own.
pub(crate) fn column_attributes(
    column: &dyn ColumnDefinition,
    default_width: &str,
    tracked_filter: Option<&Value>,
) -> AttributeMap {
    let mut attributes = AttributeMap::with_capacity(4);
    attributes.insert(keys::TITLE.to_string(), column.title().into());
    attributes.insert(
        keys::WIDTH.to_string(),
        column.width().unwrap_or(default_width).into(),
    );
    attributes.insert(
        keys::FILTER_VALUE.to_string(),
        tracked_filter.cloned().unwrap_or_else(|| column.filter_value()),
    );
    attributes.insert(
        keys::TEMPLATE.to_string(),
        Value::Template(CellTemplate::new(column.title())),
    );
    attributes
}

/// A column derived from data: only its title is known.
#[derive(Debug, Clone)]
pub(crate) struct DerivedColumn(pub(crate) String);

impl ColumnDefinition for DerivedColumn {
    fn title(&self) -> &str {
        &self.0
    }
}

/// An explicit, typed grid column.
///
/// # Example
///
/// ```
/// use horizon_trellis::widget::widgets::GridColumn;
///
/// let age = GridColumn::new("Age", 30i64).with_width("80px");
/// assert_eq!(age.title(), "Age");
/// assert_eq!(age.filter_value(), 30);
/// ```
pub struct GridColumn<T> {
    base: WidgetBase,
    title: String,
    width: Option<String>,
    filter: ValueBinding<T>,
}

impl<T> GridColumn<T>
where
    T: ToValue + Clone + PartialEq + Send + Sync + 'static,
{
    /// Create an unbound column with an initial filter value.
    pub fn new(title: impl Into<String>, filter: T) -> Self {
        Self {
            base: WidgetBase::new(),
            title: title.into(),
            width: None,
            filter: ValueBinding::unbound(filter),
        }
    }

    /// Create a column titled after `column` whose filter value is bound to it.
    ///
    /// Fails with `BoundColumnType` when `column` does not hold `T`.
    pub fn bound(column: &Arc<dyn Column>, filter: T) -> Result<Self> {
        let expected = ValueType::of::<T>();
        if column.value_type() != expected {
            return Err(TrellisError::bound_column_type(
                column.title(),
                format!("GridColumn<{expected}>"),
                column.value_type().name(),
            ));
        }
        Ok(Self {
            base: WidgetBase::new(),
            title: column.title().to_string(),
            width: None,
            filter: ValueBinding::bind(filter, Some(column))?,
        })
    }

    /// Restrict the filter value to `candidates`.
    ///
    /// Fails with `InvalidSelection` when the current filter value is not
    /// one of them.
    pub fn with_candidates(self, candidates: &[T]) -> Result<Self> {
        let current = self.filter.value();
        if candidates.contains(&current) {
            return Ok(self);
        }
        Err(TrellisError::invalid_selection(
            current.to_value().to_string(),
            candidates
                .iter()
                .map(|c| c.to_value().to_string())
                .collect(),
        ))
    }

    /// Set an explicit width, e.g. `"80px"`.
    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The current filter value.
    pub fn filter_value(&self) -> T {
        self.filter.value()
    }

    /// Replace the filter value and notify.
    pub fn set_filter_value(&self, value: T) {
        self.filter.set_value(value);
    }

    /// The binding holding the filter value.
    pub fn binding(&self) -> &ValueBinding<T> {
        &self.filter
    }
}

impl<T> ColumnDefinition for GridColumn<T>
where
    T: ToValue + Clone + PartialEq + Send + Sync + 'static,
{
    fn title(&self) -> &str {
        &self.title
    }

    fn width(&self) -> Option<&str> {
        self.width.as_deref()
    }

    fn filter_value(&self) -> Value {
        self.filter.with(ToValue::to_value)
    }

    fn release(&self) {
        self.filter.dispose();
    }
}

impl<T> Widget for GridColumn<T>
where
    T: ToValue + Clone + PartialEq + Send + Sync + 'static,
{
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn host_kind(&self) -> HostKind {
        HostKind::DataGridColumn
    }

    fn convert(&self, cx: &ConvertContext<'_>) -> Result<RenderDescriptor> {
        Ok(cx.descriptor(
            self,
            column_attributes(self, DEFAULT_COLUMN_WIDTH, None),
        ))
    }

    fn dispose(&mut self) {
        self.filter.dispose();
        self.base.dispose();
    }
}

static_assertions::assert_impl_all!(GridColumn<i64>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    struct Ages;

    impl Column for Ages {
        fn title(&self) -> &str {
            "Age"
        }

        fn value_type(&self) -> ValueType {
            ValueType::of::<i64>()
        }

        fn current_value(&self) -> Value {
            Value::Int(30)
        }
    }

    fn ages() -> Arc<dyn Column> {
        Arc::new(Ages)
    }

    #[test]
    fn test_bound_column_type_must_match() {
        let column = ages();
        assert!(GridColumn::bound(&column, 0i64).is_ok());

        let err = GridColumn::bound(&column, String::new()).err().unwrap();
        assert!(matches!(err, TrellisError::BoundColumnType { ref column, .. } if column == "Age"));
    }

    #[test]
    fn test_candidates_must_contain_filter() {
        let ok = GridColumn::new("Size", "M".to_string())
            .with_candidates(&["S".into(), "M".into()]);
        assert!(ok.is_ok());

        let err = GridColumn::new("Size", "XL".to_string())
            .with_candidates(&["S".into(), "M".into()])
            .err()
            .unwrap();
        assert_eq!(
            err,
            TrellisError::InvalidSelection {
                value: "XL".into(),
                candidates: vec!["S".into(), "M".into()],
            }
        );
    }

    #[test]
    fn test_column_attributes() {
        let column = GridColumn::new("Age", 30i64);
        let attributes = column_attributes(&column, DEFAULT_COLUMN_WIDTH, None);
        assert_eq!(attributes[keys::TITLE], Value::from("Age"));
        assert_eq!(attributes[keys::WIDTH], Value::from("150px"));
        assert_eq!(attributes[keys::FILTER_VALUE], Value::Int(30));
        assert_eq!(
            attributes[keys::TEMPLATE],
            Value::Template(CellTemplate::new("Age"))
        );

        let tracked = Value::Int(40);
        let overridden = column_attributes(&column.with_width("80px"), "1px", Some(&tracked));
        assert_eq!(overridden[keys::WIDTH], Value::from("80px"));
        assert_eq!(overridden[keys::FILTER_VALUE], Value::Int(40));
    }

    #[test]
    fn test_derived_column_has_no_filter() {
        let column = DerivedColumn("Name".into());
        let attributes = column_attributes(&column, "120px", None);
        assert_eq!(attributes[keys::FILTER_VALUE], Value::None);
        assert_eq!(attributes[keys::WIDTH], Value::from("120px"));
    }
}

//! Dropdown widgets.
//!
//! This module provides [`DropDown`], a single-selection list over plain
//! values, and [`RecordDropDown`], the same over structured records shown
//! through one of their columns.
//!
//! Selection round-trips through display text: the host receives the item
//! texts and the selected text, and reports changes back as a text.
//!
//! # Example
//!
//! ```
//! use horizon_trellis::widget::widgets::{DropDown, DropDownParameters};
//!
//! let sizes = DropDown::new(10u32, vec![2, 10, 20], DropDownParameters::default(), None).unwrap();
//! assert_eq!(sizes.selected_text(), "10");
//!
//! sizes.select_text("20").unwrap();
//! assert_eq!(sizes.value(), 20);
//! ```

use std::fmt::Display;
use std::sync::Arc;

use horizon_trellis_core::{
    keys, AttributeMap, Column, Filter, HostKind, Parameters, ReadOnlyBinding, Record,
    RecordSource, RenderDescriptor, Result, TrellisError,
};

use super::parameters::DropDownParameters;
use super::selection::{Candidates, Selection};
use crate::widget::{ConvertContext, Widget, WidgetBase};

/// A dropdown over plain values.
///
/// # Signals
///
/// - `binding().on_change(..)`: Runs on every selection, from code or the host
pub struct DropDown<T> {
    base: WidgetBase,
    params: DropDownParameters,
    selection: Selection<T>,
}

impl<T> DropDown<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Create a dropdown whose items display through `Display`.
    ///
    /// Fails with `InvalidSelection` when `default` is not among `values`,
    /// and with `BoundColumnType` when `column` does not hold `T`.
    pub fn new(
        default: T,
        values: Vec<T>,
        params: DropDownParameters,
        column: Option<&Arc<dyn Column>>,
    ) -> Result<Self>
    where
        T: Display,
    {
        Self::with_formatter(default, values, |v: &T| v.to_string(), params, column)
    }

    /// Create a dropdown with a custom display formatter.
    pub fn with_formatter<F>(
        default: T,
        values: Vec<T>,
        formatter: F,
        params: DropDownParameters,
        column: Option<&Arc<dyn Column>>,
    ) -> Result<Self>
    where
        F: Fn(&T) -> String,
    {
        let candidates = Candidates {
            texts: values.iter().map(&formatter).collect(),
            default_text: formatter(&default),
            default: &default,
            values,
            same: |a, b| a == b,
        };
        Ok(Self {
            base: WidgetBase::new(),
            params,
            selection: Selection::new("DropDown", candidates, column)?,
        })
    }
}

impl<T: Clone + Send + Sync + 'static> DropDown<T> {
    /// The selected value.
    pub fn value(&self) -> T {
        self.selection.value()
    }

    /// Position of the selected value.
    pub fn selected_index(&self) -> usize {
        self.selection.selected_index()
    }

    /// Display text of the selected value.
    pub fn selected_text(&self) -> &str {
        self.selection.selected_text()
    }

    /// The candidate values.
    pub fn values(&self) -> &[T] {
        self.selection.values()
    }

    /// The (unique) display texts of the candidates.
    pub fn texts(&self) -> &[String] {
        self.selection.texts()
    }

    /// Select by position and notify.
    pub fn select_index(&self, index: usize) -> Result<()> {
        self.selection.select_index(index)
    }

    /// Select by display text and notify.
    pub fn select_text(&self, text: &str) -> Result<()> {
        self.selection.select_text(text)
    }

    /// A read-only view of the underlying binding.
    ///
    /// Writes go through [`select_index`](Self::select_index) or
    /// [`select_text`](Self::select_text), which keep the value a candidate.
    pub fn binding(&self) -> ReadOnlyBinding<'_, T> {
        self.selection.binding()
    }
}

impl<T: Clone + Send + Sync + 'static> Widget for DropDown<T> {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn host_kind(&self) -> HostKind {
        HostKind::DropDownList
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn convert(&self, cx: &ConvertContext<'_>) -> Result<RenderDescriptor> {
        Ok(cx.descriptor(self, selection_attributes(&self.params, &self.selection)))
    }

    fn dispose(&mut self) {
        self.selection.dispose();
        self.base.dispose();
    }
}

fn selection_attributes<T: Clone + Send + Sync + 'static>(
    params: &DropDownParameters,
    selection: &Selection<T>,
) -> AttributeMap {
    let mut attributes = params.project();
    attributes.insert(keys::ITEMS.to_string(), selection.items_value());
    attributes.insert(
        keys::SELECTED_VALUE.to_string(),
        selection.selected_text().into(),
    );
    attributes.insert(keys::ON_CHANGE.to_string(), selection.on_change().clone().into());
    attributes
}

// ============================================================================
// Record dropdown
// ============================================================================

/// A dropdown over structured records.
///
/// Each record is displayed through the current value of its
/// `display_column`; records lacking that column display as an empty string.
/// Candidates are compared by identity, so two distinct records with equal
/// contents are both selectable.
pub struct RecordDropDown {
    base: WidgetBase,
    params: DropDownParameters,
    display_column: String,
    selection: Selection<Arc<dyn Record>>,
}

impl RecordDropDown {
    /// Create a record dropdown with `default` selected.
    pub fn new(
        default: &Arc<dyn Record>,
        records: Vec<Arc<dyn Record>>,
        display_column: impl Into<String>,
        params: DropDownParameters,
    ) -> Result<Self> {
        let display_column = display_column.into();
        let display = |record: &Arc<dyn Record>| {
            record
                .column(&display_column)
                .map(|column| column.current_value().to_string())
                .unwrap_or_default()
        };
        let candidates = Candidates {
            texts: records.iter().map(display).collect(),
            default_text: display(default),
            default,
            values: records,
            same: Arc::ptr_eq,
        };
        let selection = Selection::new("RecordDropDown", candidates, None)?;
        Ok(Self {
            base: WidgetBase::new(),
            params,
            display_column,
            selection,
        })
    }

    /// Create a record dropdown over the records of `source` that match
    /// `filter`, with the first one selected.
    pub fn from_source(
        source: &dyn RecordSource,
        filter: &Filter,
        display_column: impl Into<String>,
        params: DropDownParameters,
    ) -> Result<Self> {
        let records = source.filtered_by(filter);
        let Some(first) = records.first().cloned() else {
            return Err(TrellisError::invalid_selection(filter.expression(), Vec::new()));
        };
        Self::new(&first, records, display_column, params)
    }

    /// The column used for display texts.
    pub fn display_column(&self) -> &str {
        &self.display_column
    }

    /// The selected record.
    pub fn value(&self) -> Arc<dyn Record> {
        self.selection.value()
    }

    /// Position of the selected record.
    pub fn selected_index(&self) -> usize {
        self.selection.selected_index()
    }

    /// Display text of the selected record.
    pub fn selected_text(&self) -> &str {
        self.selection.selected_text()
    }

    /// The (unique) display texts of the candidates.
    pub fn texts(&self) -> &[String] {
        self.selection.texts()
    }

    /// Select by position and notify.
    pub fn select_index(&self, index: usize) -> Result<()> {
        self.selection.select_index(index)
    }

    /// Select by display text and notify.
    pub fn select_text(&self, text: &str) -> Result<()> {
        self.selection.select_text(text)
    }

    /// A read-only view of the underlying binding.
    pub fn binding(&self) -> ReadOnlyBinding<'_, Arc<dyn Record>> {
        self.selection.binding()
    }
}

impl Widget for RecordDropDown {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn host_kind(&self) -> HostKind {
        HostKind::DropDownList
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn convert(&self, cx: &ConvertContext<'_>) -> Result<RenderDescriptor> {
        Ok(cx.descriptor(self, selection_attributes(&self.params, &self.selection)))
    }

    fn dispose(&mut self) {
        self.selection.dispose();
        self.base.dispose();
    }
}

static_assertions::assert_impl_all!(DropDown<String>: Send, Sync);
static_assertions::assert_impl_all!(RecordDropDown: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn page_sizes() -> DropDown<u32> {
        DropDown::new(10u32, vec![2, 10, 20], DropDownParameters::default(), None).unwrap()
    }

    #[test]
    fn test_out_of_list_selection_is_refused() {
        let sizes = page_sizes();

        assert!(matches!(
            sizes.select_index(3),
            Err(TrellisError::InvalidSelection { .. })
        ));
        assert!(matches!(
            sizes.select_text("99"),
            Err(TrellisError::InvalidSelection { .. })
        ));

        assert_eq!(sizes.value(), 10);
        assert_eq!(sizes.selected_text(), "10");
        assert_eq!(sizes.selected_index(), 1);
    }

    #[test]
    fn test_value_and_text_stay_in_step() {
        let sizes = page_sizes();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        sizes.binding().on_change(move |v| seen_clone.lock().push(*v));

        sizes.select_text("20").unwrap();
        assert_eq!(sizes.value(), 20);
        assert_eq!(sizes.binding().value(), 20);
        assert_eq!(sizes.selected_index(), 2);
        assert_eq!(sizes.selected_text(), "20");
        assert_eq!(*seen.lock(), vec![20]);
    }
}

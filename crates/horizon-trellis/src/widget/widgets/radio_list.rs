//! Radio button group.
//!
//! A [`RadioList`] offers a fixed set of values as mutually exclusive radio
//! buttons. The host receives the display texts under `Items`, the selected
//! position under `Selected` and the selected text under `SelectedValue`.

use std::fmt::Display;
use std::sync::Arc;

use horizon_trellis_core::{
    keys, Column, HostKind, Parameters, ReadOnlyBinding, RenderDescriptor, Result, Value,
};

use super::parameters::RadioParameters;
use super::selection::{Candidates, Selection};
use crate::widget::{ConvertContext, Widget, WidgetBase};

/// A group of radio buttons with exactly one selected.
pub struct RadioList<T> {
    base: WidgetBase,
    params: RadioParameters,
    selection: Selection<T>,
}

impl<T> RadioList<T>
where
    T: Clone + PartialEq + Display + Send + Sync + 'static,
{
    /// Create a radio list with `default` selected.
    ///
    /// Fails with `InvalidSelection` when `default` is not among `values`,
    /// and with `BoundColumnType` when `column` does not hold `T`.
    pub fn new(
        values: Vec<T>,
        default: T,
        params: RadioParameters,
        column: Option<&Arc<dyn Column>>,
    ) -> Result<Self> {
        let candidates = Candidates {
            texts: values.iter().map(ToString::to_string).collect(),
            default_text: default.to_string(),
            default: &default,
            values,
            same: |a, b| a == b,
        };
        Ok(Self {
            base: WidgetBase::new(),
            params,
            selection: Selection::new("RadioList", candidates, column)?,
        })
    }
}

impl<T: Clone + Send + Sync + 'static> RadioList<T> {
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

    /// The display texts, one per button.
    pub fn texts(&self) -> &[String] {
        self.selection.texts()
    }

    pub fn select_index(&self, index: usize) -> Result<()> {
        self.selection.select_index(index)
    }

    pub fn select_text(&self, text: &str) -> Result<()> {
        self.selection.select_text(text)
    }

    /// A read-only view of the underlying binding.
    pub fn binding(&self) -> ReadOnlyBinding<'_, T> {
        self.selection.binding()
    }
}

impl<T: Clone + Send + Sync + 'static> Widget for RadioList<T> {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn host_kind(&self) -> HostKind {
        HostKind::Radio
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn convert(&self, cx: &ConvertContext<'_>) -> Result<RenderDescriptor> {
        let mut attributes = self.params.project();
        attributes.insert(keys::ITEMS.to_string(), self.selection.items_value());
        attributes.insert(
            keys::SELECTED.to_string(),
            Value::Int(self.selected_index() as i64),
        );
        attributes.insert(
            keys::SELECTED_VALUE.to_string(),
            self.selected_text().into(),
        );
        attributes.insert(
            keys::ON_CHANGE.to_string(),
            self.selection.on_change().clone().into(),
        );
        Ok(cx.descriptor(self, attributes))
    }

    fn dispose(&mut self) {
        self.selection.dispose();
        self.base.dispose();
    }
}

static_assertions::assert_impl_all!(RadioList<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_trellis_core::TrellisError;

    fn sizes(default: &str) -> Result<RadioList<String>> {
        RadioList::new(
            vec!["S".into(), "M".into(), "L".into()],
            default.to_string(),
            RadioParameters::default(),
            None,
        )
    }

    #[test]
    fn test_default_selects_its_position() {
        let list = sizes("M").unwrap();
        assert_eq!(list.selected_index(), 1);
        assert_eq!(list.selected_text(), "M");
        assert_eq!(list.value(), "M");
    }

    #[test]
    fn test_unknown_default_is_rejected() {
        let err = sizes("XL").err().unwrap();
        assert_eq!(
            err,
            TrellisError::InvalidSelection {
                value: "XL".into(),
                candidates: vec!["S".into(), "M".into(), "L".into()],
            }
        );
    }

    #[test]
    fn test_host_index_report() {
        let list = sizes("S").unwrap();
        list.selection.on_change().invoke(&Value::Int(2));
        assert_eq!(list.value(), "L");

        list.selection.on_change().invoke(&Value::Int(7));
        assert_eq!(list.selected_index(), 2);
    }
}

//! Single-line text input.

use std::sync::Arc;

use horizon_trellis_core::{
    keys, Column, HostKind, Parameters, RenderDescriptor, Result, ValueBinding,
};

use super::bindable::{parse_text, Bindable};
use super::parameters::TextParameters;
use crate::widget::{ConvertContext, Widget, WidgetBase};

/// A single-line text input bound to a string value.
pub struct TextField {
    base: WidgetBase,
    params: TextParameters,
    value: Bindable<String>,
}

impl TextField {
    /// Create a text field, optionally bound to a `String` column.
    pub fn new(
        text: impl Into<String>,
        params: TextParameters,
        column: Option<&Arc<dyn Column>>,
    ) -> Result<Self> {
        Ok(Self {
            base: WidgetBase::new(),
            params,
            value: Bindable::new(text.into(), column, parse_text)?,
        })
    }

    /// The current text.
    pub fn text(&self) -> String {
        self.value.binding().value()
    }

    /// Replace the text and notify.
    pub fn set_text(&self, text: impl Into<String>) {
        self.value.binding().set_value(text.into());
    }

    /// The underlying binding.
    pub fn binding(&self) -> &ValueBinding<String> {
        self.value.binding()
    }
}

impl Widget for TextField {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn host_kind(&self) -> HostKind {
        HostKind::TextField
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn convert(&self, cx: &ConvertContext<'_>) -> Result<RenderDescriptor> {
        let mut attributes = self.params.project();
        attributes.insert(keys::VALUE.to_string(), self.text().into());
        attributes.insert(keys::ON_CHANGE.to_string(), self.value.on_change().clone().into());
        Ok(cx.descriptor(self, attributes))
    }

    fn dispose(&mut self) {
        self.value.dispose();
        self.base.dispose();
    }
}

static_assertions::assert_impl_all!(TextField: Send, Sync);

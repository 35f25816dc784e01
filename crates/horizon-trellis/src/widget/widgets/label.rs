//! Label widget implementation.

use horizon_trellis_core::{HostKind, Parameters, RenderDescriptor, Result};

use super::parameters::LabelParameters;
use crate::widget::{ConvertContext, Widget, WidgetBase};

/// A static text label.
#[derive(Debug, Default)]
pub struct Label {
    base: WidgetBase,
    params: LabelParameters,
}

impl Label {
    /// Create a label showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_params(LabelParameters {
            text: text.into(),
            ..Default::default()
        })
    }

    /// Create a label from full settings.
    pub fn with_params(params: LabelParameters) -> Self {
        Self {
            base: WidgetBase::new(),
            params,
        }
    }

    /// The displayed text.
    pub fn text(&self) -> &str {
        &self.params.text
    }

    /// Replace the displayed text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.params.text = text.into();
    }
}

impl Widget for Label {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn host_kind(&self) -> HostKind {
        HostKind::Label
    }

    fn convert(&self, cx: &ConvertContext<'_>) -> Result<RenderDescriptor> {
        Ok(cx.descriptor(self, self.params.project()))
    }
}

static_assertions::assert_impl_all!(Label: Send, Sync);

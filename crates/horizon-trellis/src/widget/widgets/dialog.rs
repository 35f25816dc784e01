//! Dialog box container.

use horizon_trellis_core::{HostKind, Parameters, RenderDescriptor, Result};

use super::parameters::DialogParameters;
use crate::widget::{ConvertContext, Widget, WidgetBase};

/// A titled dialog that may own child widgets.
///
/// The body paragraphs are projected as `Paragraphs`; child widgets go under
/// `ChildContent` exactly as for a [`Stack`](super::Stack).
#[derive(Debug, Default)]
pub struct DialogBox {
    base: WidgetBase,
    params: DialogParameters,
}

impl DialogBox {
    /// Create a dialog with a title and body paragraphs.
    pub fn new<I, S>(title: impl Into<String>, paragraphs: I, params: DialogParameters) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut params = params;
        params.title = title.into();
        params.paragraphs = paragraphs.into_iter().map(Into::into).collect();
        Self {
            base: WidgetBase::new(),
            params,
        }
    }

    /// The dialog title.
    pub fn title(&self) -> &str {
        &self.params.title
    }

    /// The body paragraphs.
    pub fn paragraphs(&self) -> &[String] {
        &self.params.paragraphs
    }
}

impl Widget for DialogBox {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn host_kind(&self) -> HostKind {
        HostKind::Dialog
    }

    fn convert(&self, cx: &ConvertContext<'_>) -> Result<RenderDescriptor> {
        cx.compose(cx.descriptor(self, self.params.project()))
    }
}

static_assertions::assert_impl_all!(DialogBox: Send, Sync);

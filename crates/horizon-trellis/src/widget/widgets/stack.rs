//! Stack container.

use horizon_trellis_core::{HostKind, Parameters, RenderDescriptor, Result};

use super::parameters::StackParameters;
use crate::widget::{ConvertContext, Widget, WidgetBase};

/// A container that stacks its children.
///
/// Children are converted in insertion order and placed under
/// `ChildContent`. A stack without visible children carries no
/// `ChildContent` key at all.
#[derive(Debug, Default)]
pub struct Stack {
    base: WidgetBase,
    params: StackParameters,
}

impl Stack {
    /// Create an empty stack.
    pub fn new(params: StackParameters) -> Self {
        Self {
            base: WidgetBase::new(),
            params,
        }
    }

    /// The stack's settings.
    pub fn params(&self) -> &StackParameters {
        &self.params
    }

    /// Mutable access to the stack's settings.
    pub fn params_mut(&mut self) -> &mut StackParameters {
        &mut self.params
    }
}

impl Widget for Stack {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn host_kind(&self) -> HostKind {
        HostKind::Stack
    }

    fn convert(&self, cx: &ConvertContext<'_>) -> Result<RenderDescriptor> {
        cx.compose(cx.descriptor(self, self.params.project()))
    }
}

static_assertions::assert_impl_all!(Stack: Send, Sync);

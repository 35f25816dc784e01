//! CheckBox widget implementation.
//!
//! This module provides [`CheckBox`], a boolean input whose value lives in a
//! [`ValueBinding`] and may be linked to a `bool` data column.
//!
//! # Example
//!
//! ```
//! use horizon_trellis::widget::widgets::{CheckBox, InputParameters};
//!
//! let accept = CheckBox::new(false, InputParameters::default(), None).unwrap();
//! accept.binding().on_change(|&checked| println!("accepted: {checked}"));
//!
//! accept.set_checked(true);
//! assert!(accept.is_checked());
//! ```

use std::sync::Arc;

use horizon_trellis_core::{
    keys, Column, HostKind, Parameters, RenderDescriptor, Result, Value, ValueBinding,
};

use super::bindable::Bindable;
use super::parameters::InputParameters;
use crate::widget::{ConvertContext, Widget, WidgetBase};

/// A check box bound to a boolean value.
///
/// # Signals
///
/// - `binding().changed()`: Emitted on every value write, including host toggles
pub struct CheckBox {
    base: WidgetBase,
    params: InputParameters,
    value: Bindable<bool>,
}

impl CheckBox {
    /// Create a check box, optionally bound to a `bool` column.
    pub fn new(
        checked: bool,
        params: InputParameters,
        column: Option<&Arc<dyn Column>>,
    ) -> Result<Self> {
        Ok(Self {
            base: WidgetBase::new(),
            params,
            value: Bindable::new(checked, column, Value::as_bool)?,
        })
    }

    /// Whether the box is checked.
    pub fn is_checked(&self) -> bool {
        self.value.binding().value()
    }

    /// Set the checked state and notify.
    pub fn set_checked(&self, checked: bool) {
        self.value.binding().set_value(checked);
    }

    /// The underlying binding.
    pub fn binding(&self) -> &ValueBinding<bool> {
        self.value.binding()
    }
}

impl Widget for CheckBox {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn host_kind(&self) -> HostKind {
        HostKind::CheckBox
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn convert(&self, cx: &ConvertContext<'_>) -> Result<RenderDescriptor> {
        let mut attributes = self.params.project();
        attributes.insert(keys::VALUE.to_string(), self.is_checked().into());
        attributes.insert(keys::ON_CHANGE.to_string(), self.value.on_change().clone().into());
        Ok(cx.descriptor(self, attributes))
    }

    fn dispose(&mut self) {
        self.value.dispose();
        self.base.dispose();
    }
}

static_assertions::assert_impl_all!(CheckBox: Send, Sync);

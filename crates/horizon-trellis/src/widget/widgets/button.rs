//! Button widget implementation.
//!
//! # Example
//!
//! ```
//! use horizon_trellis::widget::widgets::{Button, ButtonParameters};
//!
//! let button = Button::new(ButtonParameters {
//!     text: "Save".into(),
//!     ..Default::default()
//! });
//! button.clicked().connect(|_| println!("saved"));
//! ```

use std::sync::Arc;

use horizon_trellis_core::{keys, Callback, HostKind, Parameters, RenderDescriptor, Result, Signal};

use super::parameters::ButtonParameters;
use crate::widget::{ConvertContext, Widget, WidgetBase};

/// A clickable button.
///
/// The host reports clicks through the `OnClick` callback, which emits
/// [`clicked`](Self::clicked).
///
/// # Signals
///
/// - `clicked()`: Emitted when the host reports a click
pub struct Button {
    base: WidgetBase,
    params: ButtonParameters,
    clicked: Arc<Signal<()>>,
    on_click: Callback,
}

impl Button {
    /// Create a button.
    pub fn new(params: ButtonParameters) -> Self {
        let clicked = Arc::new(Signal::new());
        let target = Arc::clone(&clicked);
        Self {
            base: WidgetBase::new(),
            params,
            clicked,
            on_click: Callback::new(move |_| target.emit(())),
        }
    }

    /// The button caption.
    pub fn text(&self) -> &str {
        &self.params.text
    }

    /// Replace the caption.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.params.text = text.into();
    }

    /// The button's settings.
    pub fn params(&self) -> &ButtonParameters {
        &self.params
    }

    /// Signal emitted when the host reports a click.
    pub fn clicked(&self) -> &Signal<()> {
        &self.clicked
    }

    /// Simulate a host click.
    pub fn click(&self) {
        self.on_click.invoke(&Default::default());
    }
}

impl Widget for Button {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn host_kind(&self) -> HostKind {
        HostKind::Button
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn convert(&self, cx: &ConvertContext<'_>) -> Result<RenderDescriptor> {
        let mut attributes = self.params.project();
        attributes.insert(keys::ON_CLICK.to_string(), self.on_click.clone().into());
        Ok(cx.descriptor(self, attributes))
    }

    fn dispose(&mut self) {
        self.clicked.disconnect_all();
        self.base.dispose();
    }
}

static_assertions::assert_impl_all!(Button: Send, Sync);

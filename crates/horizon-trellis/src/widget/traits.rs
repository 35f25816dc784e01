//! Widget trait definitions.

use std::any::Any;

use horizon_trellis_core::{HostKind, RenderDescriptor, Result};

use super::base::WidgetBase;
use super::context::ConvertContext;

/// The base trait for all widgets.
///
/// A widget owns its configuration and bindings and knows how to convert
/// itself into a [`RenderDescriptor`]. Children are not stored on the widget;
/// they live in the [`WidgetTree`](super::WidgetTree) and are reached through
/// the [`ConvertContext`] during conversion.
///
/// # Implementing Widget
///
/// ```
/// use horizon_trellis::widget::{ConvertContext, Widget, WidgetBase};
/// use horizon_trellis_core::{HostKind, RenderDescriptor, Result};
///
/// struct Divider {
///     base: WidgetBase,
/// }
///
/// impl Widget for Divider {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///
///     fn host_kind(&self) -> HostKind {
///         HostKind::Label
///     }
///
///     fn convert(&self, cx: &ConvertContext<'_>) -> Result<RenderDescriptor> {
///         Ok(cx.descriptor(self, Default::default()))
///     }
/// }
/// ```
pub trait Widget: Any + Send + Sync {
    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// The host component this widget converts to.
    fn host_kind(&self) -> HostKind;

    /// Produce this widget's render descriptor.
    ///
    /// Must not mutate the widget. Converting twice with the same focus
    /// yields equal descriptors.
    fn convert(&self, cx: &ConvertContext<'_>) -> Result<RenderDescriptor>;

    // =========================================================================
    // Capabilities
    // =========================================================================

    /// Whether this widget may own children.
    fn is_container(&self) -> bool {
        self.host_kind().accepts_children()
    }

    /// Whether this widget takes input focus and should emit `AutoFocus`.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Release resources held by the widget before it is destroyed.
    ///
    /// Implementations holding bindings disconnect them here and then call
    /// the base's `dispose`.
    fn dispose(&mut self) {
        self.widget_base().dispose();
    }

    // =========================================================================
    // Enabled State
    // =========================================================================

    /// Check if the widget is enabled.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Set whether the widget is enabled.
    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    /// Enable the widget.
    fn enable(&mut self) {
        self.set_enabled(true);
    }

    /// Disable the widget.
    fn disable(&mut self) {
        self.set_enabled(false);
    }

    // =========================================================================
    // Hidden State
    // =========================================================================

    /// Check if the widget is hidden.
    fn is_hidden(&self) -> bool {
        self.widget_base().is_hidden()
    }

    /// Set whether the widget is hidden.
    fn set_hidden(&mut self, hidden: bool) {
        self.widget_base_mut().set_hidden(hidden);
    }

    /// Show the widget.
    fn show(&mut self) {
        self.set_hidden(false);
    }

    /// Hide the widget.
    fn hide(&mut self) {
        self.set_hidden(true);
    }
}

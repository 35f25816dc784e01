//! Widget base implementation.
//!
//! This module provides `WidgetBase`, the state every widget shares: the
//! enabled and hidden flags, an optional debug name, and the signals that
//! announce flag changes.

use horizon_trellis_core::{keys, RenderDescriptor, Signal};

/// The base implementation for all widgets.
///
/// Widget implementations include this as a field and return it from
/// [`Widget::widget_base`](super::Widget::widget_base); the trait's default
/// methods delegate to it.
///
/// # Example
///
/// ```
/// use horizon_trellis::widget::WidgetBase;
///
/// let mut base = WidgetBase::new();
/// base.enabled_changed.connect(|&enabled| println!("enabled: {enabled}"));
///
/// base.disable();
/// base.disable(); // no second notification
/// assert!(!base.is_enabled());
/// ```
pub struct WidgetBase {
    /// Whether the widget accepts input.
    enabled: bool,

    /// Whether the widget is left out of rendering.
    hidden: bool,

    /// Name shown in tree dumps.
    name: String,

    /// Signal emitted when the enabled state changes.
    pub enabled_changed: Signal<bool>,

    /// Signal emitted when the hidden state changes.
    pub hidden_changed: Signal<bool>,
}

impl WidgetBase {
    /// Create an enabled, visible widget base.
    pub fn new() -> Self {
        Self {
            enabled: true,
            hidden: false,
            name: String::new(),
            enabled_changed: Signal::new(),
            hidden_changed: Signal::new(),
        }
    }

    /// Create a widget base with explicit initial flags.
    pub fn with_state(enabled: bool, hidden: bool) -> Self {
        Self {
            enabled,
            hidden,
            ..Self::new()
        }
    }

    // =========================================================================
    // Name
    // =========================================================================

    /// Get the widget's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the widget's name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // =========================================================================
    // Enabled State
    // =========================================================================

    /// Check if the widget is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget is enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.enabled_changed.emit(enabled);
        }
    }

    /// Enable the widget.
    pub fn enable(&mut self) {
        self.set_enabled(true);
    }

    /// Disable the widget.
    pub fn disable(&mut self) {
        self.set_enabled(false);
    }

    // =========================================================================
    // Hidden State
    // =========================================================================

    /// Check if the widget is hidden.
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Set whether the widget is hidden.
    pub fn set_hidden(&mut self, hidden: bool) {
        if self.hidden != hidden {
            self.hidden = hidden;
            self.hidden_changed.emit(hidden);
        }
    }

    /// Show the widget.
    pub fn show(&mut self) {
        self.set_hidden(false);
    }

    /// Hide the widget.
    pub fn hide(&mut self) {
        self.set_hidden(true);
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Write the state every descriptor carries.
    pub fn decorate(&self, descriptor: &mut RenderDescriptor) {
        descriptor.set_attribute(keys::DISABLED, !self.enabled);
    }

    /// Disconnect every slot from the base signals.
    pub fn dispose(&self) {
        self.enabled_changed.disconnect_all();
        self.hidden_changed.disconnect_all();
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WidgetBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetBase")
            .field("name", &self.name)
            .field("enabled", &self.enabled)
            .field("hidden", &self.hidden)
            .finish()
    }
}

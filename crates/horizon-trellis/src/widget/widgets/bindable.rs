//! Shared plumbing for widgets that hold a bound value.

use std::sync::Arc;

use horizon_trellis_core::logging::targets;
use horizon_trellis_core::{Callback, Column, Result, ValueBinding, Value};

/// A value binding plus the host callback that writes into it.
///
/// The callback is created once, so converting a widget twice hands the host
/// the same callback and the two descriptors compare equal.
pub(crate) struct Bindable<T> {
    binding: Arc<ValueBinding<T>>,
    on_change: Callback,
}

impl<T: Clone + Send + Sync + 'static> Bindable<T> {
    /// Bind `initial` to an optional column. `parse` reads what the host
    /// reports; values it rejects are ignored.
    pub(crate) fn new(
        initial: T,
        column: Option<&Arc<dyn Column>>,
        parse: fn(&Value) -> Option<T>,
    ) -> Result<Self> {
        let binding = Arc::new(ValueBinding::bind(initial, column)?);
        let target = Arc::clone(&binding);
        let on_change = Callback::new(move |reported| match parse(reported) {
            Some(value) => target.set_value(value),
            None => tracing::debug!(
                target: targets::BINDING,
                %reported,
                "ignoring host value of unexpected shape"
            ),
        });
        Ok(Self { binding, on_change })
    }

    pub(crate) fn binding(&self) -> &ValueBinding<T> {
        &self.binding
    }

    pub(crate) fn on_change(&self) -> &Callback {
        &self.on_change
    }

    pub(crate) fn dispose(&self) {
        self.binding.dispose();
    }
}

/// Read a host-reported text value.
pub(crate) fn parse_text(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

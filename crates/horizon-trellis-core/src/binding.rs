//! Typed values linked to external data columns.
//!
//! A [`ValueBinding`] is the live value behind an input widget. It may be
//! linked to a [`Column`] of the external data layer; the link is weak, so the
//! binding never keeps a column alive, and the column's declared type is
//! checked against `T` when the binding is created.

use std::fmt;
use std::sync::{Arc, Weak};

use crate::data::Column;
use crate::error::{Result, TrellisError};
use crate::logging::targets;
use crate::property::Property;
use crate::signal::{ConnectionId, Signal};
use crate::value::ValueType;

/// A typed value with an optional column link and change notification.
pub struct ValueBinding<T> {
    value: Property<T>,
    column: Option<Weak<dyn Column>>,
    changed: Signal<T>,
}

impl<T: Clone + Send + Sync + 'static> ValueBinding<T> {
    /// Create a binding holding `initial`, optionally linked to `column`.
    ///
    /// Fails with [`TrellisError::TypeMismatch`] when the column does not hold
    /// values of type `T`.
    pub fn bind(initial: T, column: Option<&Arc<dyn Column>>) -> Result<Self> {
        if let Some(column) = column {
            let expected = ValueType::of::<T>();
            let actual = column.value_type();
            if actual != expected {
                return Err(TrellisError::type_mismatch(
                    column.title(),
                    expected.name(),
                    actual.name(),
                ));
            }
            tracing::trace!(
                target: targets::BINDING,
                column = column.title(),
                value_type = expected.name(),
                "binding linked to column"
            );
        }

        Ok(Self {
            value: Property::new(initial),
            column: column.map(Arc::downgrade),
            changed: Signal::new(),
        })
    }

    /// Create an unlinked binding.
    pub fn unbound(initial: T) -> Self {
        Self {
            value: Property::new(initial),
            column: None,
            changed: Signal::new(),
        }
    }

    /// Connect a slot that runs after every [`set_value`](Self::set_value).
    pub fn on_change<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.changed.connect(slot)
    }

    /// Store `value` and notify every change slot once.
    ///
    /// Notification happens even when the value is unchanged.
    pub fn set_value(&self, value: T) {
        self.value.set_silent(value.clone());
        tracing::trace!(
            target: targets::BINDING,
            slots = self.changed.connection_count(),
            "binding value set"
        );
        self.changed.emit(value);
    }

    /// A clone of the current value.
    pub fn value(&self) -> T {
        self.value.get()
    }

    /// Borrow the current value.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.value.with(f)
    }

    /// The linked column, if it is still alive.
    pub fn column(&self) -> Option<Arc<dyn Column>> {
        self.column.as_ref().and_then(Weak::upgrade)
    }

    /// Whether this binding was created with a column link.
    pub fn is_bound(&self) -> bool {
        self.column.is_some()
    }

    /// The change signal.
    pub fn changed(&self) -> &Signal<T> {
        &self.changed
    }

    /// Disconnect every change slot.
    pub fn dispose(&self) {
        self.changed.disconnect_all();
    }

    /// A view that can observe this binding but not write it.
    pub fn read_only(&self) -> ReadOnlyBinding<'_, T> {
        ReadOnlyBinding { inner: self }
    }
}

/// A read-only view of a [`ValueBinding`].
///
/// Handed out by widgets whose writes must go through their own validation,
/// such as selections restricted to a candidate list.
pub struct ReadOnlyBinding<'a, T> {
    inner: &'a ValueBinding<T>,
}

impl<T: Clone + Send + Sync + 'static> ReadOnlyBinding<'_, T> {
    /// A clone of the current value.
    pub fn value(&self) -> T {
        self.inner.value()
    }

    /// Borrow the current value.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.with(f)
    }

    /// The linked column, if it is still alive.
    pub fn column(&self) -> Option<Arc<dyn Column>> {
        self.inner.column()
    }

    /// Whether the binding was created with a column link.
    pub fn is_bound(&self) -> bool {
        self.inner.is_bound()
    }

    /// Connect a slot that runs after every write to the binding.
    pub fn on_change<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.inner.on_change(slot)
    }

    /// Disconnect a slot connected through [`on_change`](Self::on_change).
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.inner.changed.disconnect(id)
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for ValueBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueBinding")
            .field("value", &self.value)
            .field("bound", &self.column.is_some())
            .field("slots", &self.changed.connection_count())
            .finish()
    }
}

static_assertions::assert_impl_all!(ValueBinding<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use parking_lot::Mutex;

    struct TypedColumn {
        title: &'static str,
        value_type: ValueType,
    }

    impl Column for TypedColumn {
        fn title(&self) -> &str {
            self.title
        }

        fn value_type(&self) -> ValueType {
            self.value_type
        }

        fn current_value(&self) -> Value {
            Value::None
        }
    }

    fn column<T: 'static>(title: &'static str) -> Arc<dyn Column> {
        Arc::new(TypedColumn {
            title,
            value_type: ValueType::of::<T>(),
        })
    }

    #[test]
    fn test_bind_rejects_wrong_column_type() {
        let age = column::<i64>("Age");
        let err = ValueBinding::bind(String::new(), Some(&age)).unwrap_err();

        match err {
            TrellisError::TypeMismatch { column, actual, .. } => {
                assert_eq!(column, "Age");
                assert_eq!(actual, "i64");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bind_accepts_matching_column() {
        let name = column::<String>("Name");
        let binding = ValueBinding::bind("kim".to_string(), Some(&name)).unwrap();

        assert!(binding.is_bound());
        assert_eq!(binding.column().map(|c| c.title().to_string()).as_deref(), Some("Name"));
    }

    #[test]
    fn test_column_link_is_weak() {
        let name = column::<String>("Name");
        let binding = ValueBinding::bind(String::new(), Some(&name)).unwrap();

        drop(name);
        assert!(binding.is_bound());
        assert!(binding.column().is_none());
    }

    #[test]
    fn test_set_value_notifies_every_time() {
        let binding = ValueBinding::unbound(1i64);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        binding.on_change(move |v| seen_clone.lock().push(*v));

        binding.set_value(2);
        binding.set_value(2);

        assert_eq!(*seen.lock(), vec![2, 2]);
        assert_eq!(binding.value(), 2);
    }

    #[test]
    fn test_dispose_disconnects_slots() {
        let binding = ValueBinding::unbound(false);
        binding.on_change(|_| panic!("slot should be gone"));

        binding.dispose();
        binding.set_value(true);
        assert!(binding.with(|v| *v));
    }

    #[test]
    fn test_read_only_view_observes_writes() {
        let binding = ValueBinding::unbound(String::from("a"));
        let view = binding.read_only();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        let id = view.on_change(move |v: &String| seen_clone.lock().push(v.clone()));
        binding.set_value("b".into());

        assert_eq!(view.value(), "b");
        assert!(!view.is_bound());
        assert!(view.disconnect(id));
        binding.set_value("c".into());
        assert_eq!(*seen.lock(), vec!["b".to_string()]);
    }
}

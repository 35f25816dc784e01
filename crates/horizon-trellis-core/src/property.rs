//! Interior-mutable properties with change detection.
//!
//! A [`Property`] is the storage cell behind widget state that can change
//! after construction while the widget itself is only reachable through a
//! shared reference, such as the live value of a [`ValueBinding`] that a host
//! callback writes to.
//!
//! [`ValueBinding`]: crate::binding::ValueBinding
//!
//! # Example
//!
//! ```
//! use horizon_trellis_core::Property;
//!
//! let selected = Property::new(0usize);
//! assert!(selected.set(2));
//! assert!(!selected.set(2));
//! assert_eq!(selected.get(), 2);
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value cell that can be read and replaced through `&self`.
///
/// `set()` compares against the current value and reports whether anything
/// changed; `set_silent()` always overwrites. The caller decides whether a
/// change is worth a notification.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning it.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Overwrite the value unconditionally.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if it differed from the current one.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the previous value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.value.read())
            .finish()
    }
}

/// A read-only view of a property.
///
/// Handed out to callers that may observe a value but do not own it.
pub struct ReadOnlyProperty<'a, T> {
    inner: &'a Property<T>,
}

impl<'a, T: Clone> ReadOnlyProperty<'a, T> {
    /// Create a read-only view of a property.
    pub fn new(property: &'a Property<T>) -> Self {
        Self { inner: property }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.get()
    }

    /// Access the value through a closure.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.with(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_set_detects_change() {
        let prop = Property::new(10);

        assert!(!prop.set(10));
        assert_eq!(prop.get(), 10);

        assert!(prop.set(20));
        assert_eq!(prop.get(), 20);
    }

    #[test]
    fn test_property_set_silent_overwrites() {
        let prop = Property::new("a".to_string());
        prop.set_silent("a".to_string());
        prop.set_silent("b".to_string());
        assert_eq!(prop.get(), "b");
    }

    #[test]
    fn test_property_replace() {
        let prop = Property::new(vec![1, 2]);

        assert!(prop.replace(vec![1, 2]).is_none());
        assert_eq!(prop.replace(vec![3]), Some(vec![1, 2]));
        assert_eq!(prop.with(|v| v.len()), 1);
    }

    #[test]
    fn test_read_only_view_tracks_owner() {
        let prop = Property::new(42);
        let view = ReadOnlyProperty::new(&prop);

        assert_eq!(view.get(), 42);
        prop.set_silent(7);
        assert_eq!(view.get(), 7);
    }
}

//! Property system for Picklist.
//!
//! Properties hold a value and report whether a write actually changed it, so
//! that owners emit their change signal only for real changes:
//!
//! ```
//! use picklist_core::{Property, Signal};
//!
//! struct Choice {
//!     current: Property<Option<String>>,
//!     current_changed: Signal<Option<String>>,
//! }
//!
//! impl Choice {
//!     fn choose(&self, item: Option<String>) {
//!         if self.current.set(item.clone()) {
//!             self.current_changed.emit(item);
//!         }
//!     }
//! }
//! ```

use std::fmt;

use parking_lot::RwLock;

/// Value cell with change detection.
///
/// No lock outlives a call, so a slot triggered by a write may read the
/// property again.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Wrap `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Clone out the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Borrow the value for the duration of `f`.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Store `value`. Returns `true` if it differs from the old value; the
    /// owner emits its change signal only then.
    pub fn set(&self, value: T) -> bool {
        self.replace(value).is_some()
    }

    /// Store `value` and hand back the old one, or `None` if nothing changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current == value {
            return None;
        }
        Some(std::mem::replace(&mut *current, value))
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
            .field("value", &self.get())
            .finish()
    }
}

/// Borrowed view of a [`Property`] without its setters.
pub struct ReadOnlyProperty<'a, T> {
    inner: &'a Property<T>,
}

impl<'a, T: Clone> ReadOnlyProperty<'a, T> {
    /// View `property`.
    pub fn new(property: &'a Property<T>) -> Self {
        Self { inner: property }
    }

    /// Clone out the current value.
    pub fn get(&self) -> T {
        self.inner.get()
    }

    /// Borrow the value for the duration of `f`.
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
    fn test_set_reports_change() {
        let value = Property::new(Some("List".to_string()));
        assert!(!value.set(Some("List".to_string())));
        assert!(value.set(None));
        assert_eq!(value.get(), None);
    }

    #[test]
    fn test_replace_returns_previous() {
        let index = Property::new(Some(0usize));
        assert_eq!(index.replace(Some(0)), None);
        assert_eq!(index.replace(None), Some(Some(0)));
        assert_eq!(index.get(), None);
    }


    #[test]
    fn test_read_only_view() {
        let count = Property::new(2usize);
        let view = ReadOnlyProperty::new(&count);
        count.set(3);
        assert_eq!(view.get(), 3);
        assert!(view.with(|n| *n == 3));
    }
}

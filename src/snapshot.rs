//! Snapshots

use std::{ops::Deref, sync::Arc};

/// An immutable, cheaply clonable view of a collection at one moment.
///
/// Engines hand snapshots out to readers and keep mutating their own copy.
/// The backing storage is shared until the owner writes to it, at which point
/// the owner gets a private copy and every outstanding snapshot keeps seeing
/// the state it was taken from.
#[derive(Debug, PartialEq, Eq)]
pub struct Snapshot<T> {
    items: Arc<Vec<T>>,
}

impl<T> Snapshot<T> {
    /// Create a snapshot owning the given items.
    pub fn new(items: impl Into<Vec<T>>) -> Self {
        Self {
            items: Arc::new(items.into()),
        }
    }

    /// Returns true if both snapshots share the same backing storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T: Clone> Snapshot<T> {
    /// Mutable access for the owning engine, copying first if readers share it.
    pub(crate) fn make_mut(&mut self) -> &mut Vec<T> {
        Arc::make_mut(&mut self.items)
    }
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Deref for Snapshot<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.items.as_slice()
    }
}

impl<T> From<Vec<T>> for Snapshot<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

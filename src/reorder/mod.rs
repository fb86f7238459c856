//! Reordering
//!
//! An [`OrderableCollection`] keeps a sequence of unique ids in a user chosen
//! order. Elements are repositioned by a drag gesture: pick a candidate, hover
//! over the list, drop it on a target. Only the drop mutates the sequence.

use std::{fmt::Debug, hash::Hash};

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, trace};

use crate::snapshot::Snapshot;

mod gesture;

pub use gesture::DragGesture;

/// Errors related to collection construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReorderError {
    /// An id appears more than once (index of the repeat).
    #[error("Element at position {0} appears more than once")]
    DuplicateId(usize),
}

/// Move the element at `from` so that it ends up at `to`.
///
/// Everything between the two positions shifts by one slot towards `from`.
/// Returns false, leaving `items` untouched, when the positions are equal or
/// either is out of range.
pub fn reposition<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }

    let element = items.remove(from);
    items.insert(to, element);

    true
}

/// An ordered sequence of unique ids with a single active drag gesture.
#[derive(Debug, Clone)]
pub struct OrderableCollection<K> {
    sequence: Snapshot<K>,
    gesture: DragGesture<K>,
}

impl<K> OrderableCollection<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Create a collection in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`ReorderError::DuplicateId`] if an id appears twice.
    pub fn new(ids: impl Into<Vec<K>>) -> Result<Self, ReorderError> {
        let ids = ids.into();
        let mut seen = FxHashSet::default();

        if let Some(idx) = ids.iter().position(|id| !seen.insert(id)) {
            return Err(ReorderError::DuplicateId(idx));
        }

        Ok(Self {
            sequence: Snapshot::new(ids),
            gesture: DragGesture::Idle,
        })
    }

    /// Start a gesture with `id` as the candidate, replacing any earlier one.
    pub fn pick(&mut self, id: K) {
        trace!(?id, "picked for reorder");

        self.gesture = DragGesture::Picked(id);
    }

    /// Signal that the pointer is over the list.
    ///
    /// Never changes anything. Returns true if a drop would be considered,
    /// i.e. a candidate is active.
    pub fn hover(&self) -> bool {
        !self.gesture.is_idle()
    }

    /// Drop the active candidate on `target`.
    ///
    /// A successful move ends the gesture. A declined drop (no candidate,
    /// dropping onto itself, unknown ids) changes nothing and leaves the
    /// gesture as it was.
    pub fn drop_on(&mut self, target: &K) -> bool {
        let dragged = self.gesture.candidate().cloned();
        let moved = self.move_to_target(dragged.as_ref(), target);

        if moved {
            self.gesture = DragGesture::Idle;
        }

        moved
    }

    /// End the gesture without moving anything.
    pub fn cancel(&mut self) {
        self.gesture = DragGesture::Idle;
    }

    /// Move `dragged` to the position currently held by `target`.
    ///
    /// The relative order of every other element is kept. Returns false and
    /// leaves the sequence untouched if `dragged` is `None`, equal to `target`,
    /// or if either id is not in the collection.
    pub fn move_to_target(&mut self, dragged: Option<&K>, target: &K) -> bool {
        let Some(dragged) = dragged else {
            trace!(?target, "drop ignored, nothing picked");
            return false;
        };

        if dragged == target {
            trace!(?target, "drop ignored, dropped onto itself");
            return false;
        }

        let (Some(from), Some(to)) = (self.position(dragged), self.position(target)) else {
            trace!(?dragged, ?target, "drop ignored, unknown id");
            return false;
        };

        let moved = reposition(self.sequence.make_mut(), from, to);

        if moved {
            debug!(?dragged, ?target, from, to, "element repositioned");
        }

        moved
    }

    /// Position of `id` in the sequence.
    pub fn position(&self, id: &K) -> Option<usize> {
        self.sequence.iter().position(|candidate| candidate == id)
    }

    /// Check if `id` is in the collection.
    pub fn contains(&self, id: &K) -> bool {
        self.position(id).is_some()
    }
}

impl<K> OrderableCollection<K> {
    /// A read-only view of the current sequence.
    pub fn snapshot(&self) -> Snapshot<K> {
        self.sequence.clone()
    }

    /// Iterate over the ids in order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.sequence.iter()
    }

    /// The current gesture state.
    pub fn gesture(&self) -> &DragGesture<K> {
        &self.gesture
    }

    /// The active candidate, if a gesture is in progress.
    pub fn candidate(&self) -> Option<&K> {
        self.gesture.candidate()
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

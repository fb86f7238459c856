//! Drag Gesture

/// State of the pick, hover, drop interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragGesture<K> {
    /// Nothing picked
    Idle,

    /// An element has been picked and awaits a drop
    Picked(K),
}

impl<K> DragGesture<K> {
    /// The picked element, if any.
    pub fn candidate(&self) -> Option<&K> {
        match self {
            Self::Idle => None,
            Self::Picked(id) => Some(id),
        }
    }

    /// Check if no gesture is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl<K> Default for DragGesture<K> {
    fn default() -> Self {
        Self::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let gesture = DragGesture::<u32>::default();

        assert!(gesture.is_idle());
        assert_eq!(gesture.candidate(), None);
    }

    #[test]
    fn picked_exposes_candidate() {
        let gesture = DragGesture::Picked(7);

        assert!(!gesture.is_idle());
        assert_eq!(gesture.candidate(), Some(&7));
    }
}

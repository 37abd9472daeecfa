/// Hover and selection slots.
///
/// The two axes are independent: hover is recomputed every frame from the
/// pointer, selection persists until explicitly replaced or cleared. Keys
/// are lookups into some owning collection, never owners themselves.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SelectionState<K> {
    hovered: Option<K>,
    selected: Option<K>,
}

impl<K> Default for SelectionState<K> {
    fn default() -> Self {
        Self {
            hovered: None,
            selected: None,
        }
    }
}

impl<K: Copy + PartialEq> SelectionState<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<K> {
        self.hovered
    }

    pub fn selected(&self) -> Option<K> {
        self.selected
    }

    /// Sets the hover slot. Returns `true` if it changed.
    pub fn set_hovered(&mut self, key: Option<K>) -> bool {
        let changed = self.hovered != key;
        self.hovered = key;
        changed
    }

    /// Sets the selection slot. Returns `true` if it changed.
    pub fn set_selected(&mut self, key: Option<K>) -> bool {
        let changed = self.selected != key;
        self.selected = key;
        changed
    }

    pub fn clear(&mut self) {
        self.hovered = None;
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionState;

    #[test]
    fn hover_and_selection_are_independent() {
        let mut s: SelectionState<u32> = SelectionState::new();
        assert!(s.set_hovered(Some(3)));
        assert!(!s.set_hovered(Some(3)));
        assert!(s.set_selected(Some(3)));
        assert!(s.set_hovered(None));
        assert_eq!(s.selected(), Some(3));
        assert_eq!(s.hovered(), None);
    }

    #[test]
    fn clear_empties_both_slots() {
        let mut s = SelectionState::new();
        s.set_hovered(Some(1u32));
        s.set_selected(Some(2));
        s.clear();
        assert_eq!(s, SelectionState::default());
    }
}

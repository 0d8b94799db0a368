//! Reorder engine
//!
//! The single-element move shared by the top-level bundle list and the
//! nested variant sub-lists. A grab gesture feeds `Grab::hover` on every
//! discrete cursor move, and each emitted `(from, to)` pair is applied with
//! [`reorder`] immediately, so the visible order and the committed order are
//! always identical mid-gesture.

use std::cmp::Ordering;

/// Move the element at `from` to position `to`, shifting everything between
/// them by exactly one slot (a rotation, not a swap).
///
/// `from == to` is a no-op. Out-of-bounds indices are a programmer error
/// (they can only arise from a UI/index bug, never from user input) and
/// panic rather than clamp.
pub fn reorder<T>(items: &mut [T], from: usize, to: usize) {
    assert!(
        from < items.len() && to < items.len(),
        "reorder index out of bounds: from={} to={} len={}",
        from,
        to,
        items.len()
    );
    match from.cmp(&to) {
        Ordering::Less => items[from..=to].rotate_left(1),
        Ordering::Greater => items[to..=from].rotate_right(1),
        Ordering::Equal => {}
    }
}

/// An active grab gesture over one ordered scope.
///
/// Tracks where the grabbed element currently sits. `hover` over a different
/// row yields the move to apply and advances the tracked index, mirroring
/// how a pointer-driven drag updates the dragged item's index on every
/// hover event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grab {
    index: usize,
}

impl Grab {
    /// Start a grab at the element's current index
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Current position of the grabbed element
    pub fn index(&self) -> usize {
        self.index
    }

    /// Hover over `to`; returns the `(from, to)` move to apply, or `None`
    /// when hovering over the element's own row.
    pub fn hover(&mut self, to: usize) -> Option<(usize, usize)> {
        if to == self.index {
            return None;
        }
        let from = self.index;
        self.index = to;
        Some((from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_moves_forward() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        reorder(&mut items, 0, 2);
        assert_eq!(items, vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn test_reorder_moves_backward() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        reorder(&mut items, 3, 1);
        assert_eq!(items, vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn test_reorder_same_index_is_noop() {
        let mut items = vec![1, 2, 3];
        reorder(&mut items, 1, 1);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "reorder index out of bounds")]
    fn test_reorder_rejects_out_of_bounds() {
        let mut items = vec![1, 2, 3];
        reorder(&mut items, 0, 3);
    }

    #[test]
    fn test_grab_hover_emits_moves_and_tracks_index() {
        let mut grab = Grab::new(2);
        assert_eq!(grab.hover(2), None);
        assert_eq!(grab.hover(0), Some((2, 0)));
        assert_eq!(grab.index(), 0);
        assert_eq!(grab.hover(1), Some((0, 1)));
        assert_eq!(grab.index(), 1);
    }

    #[test]
    fn test_grab_hover_sequence_matches_single_move() {
        // Hovering row by row from 0 to 2 must land the list in the same
        // order as one direct move(0, 2).
        let mut stepped = vec!['a', 'b', 'c'];
        let mut grab = Grab::new(0);
        for target in 1..=2 {
            if let Some((from, to)) = grab.hover(target) {
                reorder(&mut stepped, from, to);
            }
        }

        let mut direct = vec!['a', 'b', 'c'];
        reorder(&mut direct, 0, 2);
        assert_eq!(stepped, direct);
    }
}

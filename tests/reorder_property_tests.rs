//! Property-based tests for the reorder engine
//!
//! Uses proptest to verify the move-element-to-new-position contract shared
//! by the bundle list and the nested variant sub-lists:
//! - the multiset of elements and the length are preserved
//! - from == to is the identity
//! - matched opposite moves restore the original order

use bundletui::reorder::{Grab, reorder};
use proptest::prelude::*;

/// Strategy: a non-empty vector plus two valid indices into it
fn vec_and_two_indices() -> impl Strategy<Value = (Vec<u32>, usize, usize)> {
    prop::collection::vec(any::<u32>(), 1..32).prop_flat_map(|v| {
        let len = v.len();
        (Just(v), 0..len, 0..len)
    })
}

proptest! {
    /// Multiset and length are preserved by every valid move
    #[test]
    fn reorder_preserves_elements((mut items, from, to) in vec_and_two_indices()) {
        let mut before = items.clone();
        reorder(&mut items, from, to);

        prop_assert_eq!(items.len(), before.len());
        let mut after = items.clone();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(after, before);
    }

    /// The moved element lands exactly at `to`
    #[test]
    fn reorder_places_moved_element((items, from, to) in vec_and_two_indices()) {
        let moved = items[from];
        let mut reordered = items.clone();
        reorder(&mut reordered, from, to);
        prop_assert_eq!(reordered[to], moved);
    }

    /// from == to is the identity
    #[test]
    fn reorder_same_index_is_identity(mut items in prop::collection::vec(any::<u32>(), 1..32),
                                      seed in any::<prop::sample::Index>()) {
        let idx = seed.index(items.len());
        let before = items.clone();
        reorder(&mut items, idx, idx);
        prop_assert_eq!(items, before);
    }

    /// A move followed by its inverse restores the original order
    #[test]
    fn reorder_is_self_invertible((mut items, from, to) in vec_and_two_indices()) {
        let before = items.clone();
        reorder(&mut items, from, to);
        reorder(&mut items, to, from);
        prop_assert_eq!(items, before);
    }

    /// Adjacent swap pairs cancel out: move(i, i+1) then move(i+1, i)
    #[test]
    fn adjacent_move_pair_cancels(mut items in prop::collection::vec(any::<u32>(), 2..32),
                                  seed in any::<prop::sample::Index>()) {
        let i = seed.index(items.len() - 1);
        let before = items.clone();
        reorder(&mut items, i, i + 1);
        reorder(&mut items, i + 1, i);
        prop_assert_eq!(items, before);
    }

    /// Driving a grab gesture hover by hover ends in the same order as one
    /// direct move from the grab origin to the final hover target
    #[test]
    fn hover_path_equals_direct_move((items, from, to) in vec_and_two_indices()) {
        let mut stepped = items.clone();
        let mut grab = Grab::new(from);
        let mut position = from;
        while position != to {
            position = if position < to { position + 1 } else { position - 1 };
            if let Some((f, t)) = grab.hover(position) {
                reorder(&mut stepped, f, t);
            }
        }

        let mut direct = items.clone();
        reorder(&mut direct, from, to);
        prop_assert_eq!(stepped, direct);
    }
}

#[test]
fn scenario_b_move_first_to_last() {
    // Bundle List = [A, B, C] -> move(0, 2) -> [B, C, A]
    let mut items = vec!["A", "B", "C"];
    reorder(&mut items, 0, 2);
    assert_eq!(items, vec!["B", "C", "A"]);
}

#[test]
#[should_panic(expected = "reorder index out of bounds")]
fn out_of_bounds_from_panics() {
    let mut items = vec![1, 2, 3];
    reorder(&mut items, 5, 0);
}

#[test]
#[should_panic(expected = "reorder index out of bounds")]
fn out_of_bounds_to_panics() {
    let mut items = vec![1, 2, 3];
    reorder(&mut items, 0, 3);
}

//! Picker selection state
//!
//! Tracks which variants are checked per product inside the picker dialog,
//! before anything is committed to the bundle. A product with an empty
//! variant set is equivalent to an unselected product: both render unchecked
//! and neither counts toward the "N products selected" tally.

use std::collections::{HashMap, HashSet};

/// Per-product variant selection, keyed by catalog product id
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    selections: HashMap<u64, HashSet<u64>>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Product-level checkbox: checked selects every variant of the product,
    /// unchecked clears the selection. There is no indeterminate state.
    pub fn toggle_product(&mut self, product_id: u64, all_variant_ids: &[u64], checked: bool) {
        if checked {
            self.selections
                .insert(product_id, all_variant_ids.iter().copied().collect());
        } else {
            self.selections.insert(product_id, HashSet::new());
        }
    }

    /// Variant-level checkbox: adds or removes exactly one variant id,
    /// leaving siblings untouched.
    pub fn toggle_variant(&mut self, product_id: u64, variant_id: u64, checked: bool) {
        let entry = self.selections.entry(product_id).or_default();
        if checked {
            entry.insert(variant_id);
        } else {
            entry.remove(&variant_id);
        }
    }

    /// Number of distinct products with at least one variant checked.
    /// This is the commit-eligibility signal, not a variant count.
    pub fn selected_count(&self) -> usize {
        self.selections.values().filter(|v| !v.is_empty()).count()
    }

    /// Whether the product-level checkbox renders checked (any variant selected)
    pub fn is_product_checked(&self, product_id: u64) -> bool {
        self.selections
            .get(&product_id)
            .is_some_and(|v| !v.is_empty())
    }

    pub fn is_variant_checked(&self, product_id: u64, variant_id: u64) -> bool {
        self.selections
            .get(&product_id)
            .is_some_and(|v| v.contains(&variant_id))
    }

    /// Checked variant ids for one product (unordered)
    pub fn selected_variant_ids(&self, product_id: u64) -> Option<&HashSet<u64>> {
        self.selections.get(&product_id).filter(|v| !v.is_empty())
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }
}

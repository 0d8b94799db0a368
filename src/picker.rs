//! Product picker state
//!
//! Everything the picker dialog owns while it is open: the search box, its
//! debounce clock, the selection set, and the cursor over the flattened
//! product/variant rows. Dropped wholesale on close, which is what resets
//! the selection for the next open.

use crate::catalog::CatalogProduct;
use crate::selection::SelectionSet;
use crate::scrolling::ScrollState;
use std::time::{Duration, Instant};

/// One focusable row of the picker list, indexing into the current catalog page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerRow {
    Product(usize),
    Variant { product: usize, variant: usize },
}

/// Flatten a catalog page into picker rows: each product header followed by
/// its variants
pub fn picker_rows(products: &[CatalogProduct]) -> Vec<PickerRow> {
    let mut rows = Vec::new();
    for (pi, product) in products.iter().enumerate() {
        rows.push(PickerRow::Product(pi));
        for vi in 0..product.variants.len() {
            rows.push(PickerRow::Variant { product: pi, variant: vi });
        }
    }
    rows
}

/// State of the open picker dialog
#[derive(Debug)]
pub struct PickerState {
    /// Contents of the search box
    pub query_input: String,
    /// Set on every edit; a fetch is issued once the input has been stable
    /// for the debounce window
    dirty_since: Option<Instant>,
    pub selection: SelectionSet,
    pub scroll: ScrollState,
    /// Guards the commit action against a rapid double press
    pub committing: bool,
}

impl PickerState {
    pub fn new() -> Self {
        Self {
            query_input: String::new(),
            dirty_since: None,
            selection: SelectionSet::new(),
            scroll: ScrollState::new(0, 12),
            committing: false,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.query_input.push(c);
        self.dirty_since = Some(Instant::now());
    }

    pub fn pop_char(&mut self) {
        if self.query_input.pop().is_some() {
            self.dirty_since = Some(Instant::now());
        }
    }

    /// Returns the query to fetch once the debounce window has elapsed since
    /// the last edit, clearing the dirty mark. Polled from the event loop.
    pub fn take_due_query(&mut self, debounce: Duration) -> Option<String> {
        let since = self.dirty_since?;
        if since.elapsed() < debounce {
            return None;
        }
        self.dirty_since = None;
        Some(self.query_input.clone())
    }

    /// Whether an edit is waiting on the debounce window
    pub fn is_dirty(&self) -> bool {
        self.dirty_since.is_some()
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogVariant;

    fn product(id: u64, variant_count: usize) -> CatalogProduct {
        CatalogProduct {
            id,
            title: format!("Product {id}"),
            image: None,
            variants: (0..variant_count as u64)
                .map(|n| CatalogVariant {
                    id: id * 100 + n,
                    title: format!("Variant {n}"),
                    price: 1.0,
                    inventory_quantity: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_rows_interleave_products_and_variants() {
        let products = vec![product(1, 2), product(2, 0), product(3, 1)];
        let rows = picker_rows(&products);
        assert_eq!(
            rows,
            vec![
                PickerRow::Product(0),
                PickerRow::Variant { product: 0, variant: 0 },
                PickerRow::Variant { product: 0, variant: 1 },
                PickerRow::Product(1),
                PickerRow::Product(2),
                PickerRow::Variant { product: 2, variant: 0 },
            ]
        );
    }

    #[test]
    fn test_debounce_waits_for_stable_input() {
        let mut picker = PickerState::new();
        picker.push_char('s');
        assert!(picker.is_dirty());

        // Window not yet elapsed
        assert_eq!(picker.take_due_query(Duration::from_secs(60)), None);
        assert!(picker.is_dirty());

        // Zero window: due immediately, and the dirty mark clears
        assert_eq!(picker.take_due_query(Duration::ZERO), Some("s".to_string()));
        assert!(!picker.is_dirty());
        assert_eq!(picker.take_due_query(Duration::ZERO), None);
    }

    #[test]
    fn test_backspace_on_empty_does_not_mark_dirty() {
        let mut picker = PickerState::new();
        picker.pop_char();
        assert!(!picker.is_dirty());
    }
}

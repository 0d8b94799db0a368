//! Bundle list state
//!
//! The ordered, committed list of bundle entries: the thing ultimately
//! rendered and submitted. Entries are unique by identity; the list is
//! mutated only through the operations here, and indices stay dense across
//! every one of them.

use crate::catalog::{CatalogProduct, CatalogVariant};
use crate::discount::DiscountRule;
use crate::reorder;
use crate::selection::SelectionSet;
use tracing::debug;
use uuid::Uuid;

/// One row of the bundle: a product snapshot, its chosen variants (in their
/// own order, independent from the product's), and a discount.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleEntry {
    /// Stable identity, the reorder/removal key
    pub id: Uuid,
    /// Product snapshot taken at selection time; never re-parented
    pub product: CatalogProduct,
    /// Chosen variant sequence: non-empty, deduplicated, a subset of the
    /// product's variants
    pub variants: Vec<CatalogVariant>,
    pub discount: DiscountRule,
}

impl BundleEntry {
    /// Build an entry from a picker selection. The chosen variants follow the
    /// product's own variant order at commit time; they can be reordered
    /// independently afterwards. Returns `None` when nothing is checked:
    /// a product with zero variants selected is not committable.
    pub fn from_selection(product: &CatalogProduct, selection: &SelectionSet) -> Option<Self> {
        let checked = selection.selected_variant_ids(product.id)?;
        let variants: Vec<CatalogVariant> = product
            .variants
            .iter()
            .filter(|v| checked.contains(&v.id))
            .cloned()
            .collect();
        if variants.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            product: product.clone(),
            variants,
            discount: DiscountRule::default(),
        })
    }
}

/// Build bundle entries for every product with a non-empty selection, in
/// catalog page order. No deduplication against existing bundle entries:
/// the same product may be committed twice with different variant subsets.
pub fn commit_selection(products: &[CatalogProduct], selection: &SelectionSet) -> Vec<BundleEntry> {
    products
        .iter()
        .filter_map(|p| BundleEntry::from_selection(p, selection))
        .collect()
}

/// The ordered, committed bundle
#[derive(Debug, Clone, Default)]
pub struct BundleList {
    entries: Vec<BundleEntry>,
}

impl BundleList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[BundleEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&BundleEntry> {
        self.entries.get(index)
    }

    pub fn find(&self, entry_id: &Uuid) -> Option<&BundleEntry> {
        self.entries.iter().find(|e| &e.id == entry_id)
    }

    pub fn index_of(&self, entry_id: &Uuid) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == entry_id)
    }

    /// Append entries at the end, preserving their relative order
    pub fn append(&mut self, entries: Vec<BundleEntry>) {
        debug!(added = entries.len(), total = self.entries.len() + entries.len(), "appending bundle entries");
        for entry in entries {
            debug_assert!(
                self.index_of(&entry.id).is_none(),
                "duplicate bundle entry id"
            );
            self.entries.push(entry);
        }
    }

    /// Remove the entry with this identity; a no-op if absent
    pub fn remove(&mut self, entry_id: &Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| &e.id != entry_id);
        before != self.entries.len()
    }

    /// Relocate the entry at `from` to `to` (single-element rotation)
    pub fn move_entry(&mut self, from: usize, to: usize) {
        reorder::reorder(&mut self.entries, from, to);
    }

    /// Relocate one chosen variant within an entry's sub-list
    pub fn move_variant(&mut self, entry_id: &Uuid, from: usize, to: usize) -> bool {
        match self.entries.iter_mut().find(|e| &e.id == entry_id) {
            Some(entry) => {
                reorder::reorder(&mut entry.variants, from, to);
                true
            }
            None => false,
        }
    }

    /// Replace an entry's chosen-variant sequence wholesale
    pub fn update_variants(&mut self, entry_id: &Uuid, variants: Vec<CatalogVariant>) -> bool {
        match self.entries.iter_mut().find(|e| &e.id == entry_id) {
            Some(entry) => {
                entry.variants = variants;
                true
            }
            None => false,
        }
    }

    /// Replace an entry's discount rule wholesale
    pub fn update_discount(&mut self, entry_id: &Uuid, rule: DiscountRule) -> bool {
        match self.entries.iter_mut().find(|e| &e.id == entry_id) {
            Some(entry) => {
                entry.discount = rule;
                true
            }
            None => false,
        }
    }

    /// UI policy: the remove affordance is only exposed when removal cannot
    /// empty the bundle (the initial empty state is still legitimate)
    pub fn show_remove(&self) -> bool {
        self.entries.len() > 1
    }
}

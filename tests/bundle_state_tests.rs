//! End-to-end tests for the bundle list lifecycle
//!
//! Drives the state types the way the event loop does: commit a picker
//! selection, reorder, edit discounts, reorder nested variants, and remove
//! entries, checking the list invariants after each operation.

use bundletui::{
    BundleList, CatalogProduct, CatalogVariant, DiscountKind, DiscountRule, SelectionSet,
    commit_selection,
};

fn variant(id: u64, title: &str, price: f64) -> CatalogVariant {
    CatalogVariant {
        id,
        title: title.to_string(),
        price,
        inventory_quantity: Some(10),
    }
}

fn product(id: u64, title: &str, variants: Vec<CatalogVariant>) -> CatalogProduct {
    CatalogProduct {
        id,
        title: title.to_string(),
        image: None,
        variants,
    }
}

fn sample_page() -> Vec<CatalogProduct> {
    vec![
        product(
            1,
            "T-Shirt",
            vec![
                variant(11, "S / Black", 7.99),
                variant(12, "M / Black", 7.99),
                variant(13, "L / Black", 8.99),
            ],
        ),
        product(2, "Mug", vec![variant(21, "Default", 4.50)]),
        product(
            3,
            "Hoodie",
            vec![variant(31, "M", 24.00), variant(32, "L", 24.00)],
        ),
    ]
}

/// Search, select a product with some of its variants, add it, then set a
/// discount on the committed entry.
#[test]
fn select_commit_and_discount_flow() {
    let page = sample_page();
    let mut selection = SelectionSet::new();
    selection.toggle_variant(1, 11, true);
    selection.toggle_variant(1, 13, true);

    let mut bundle = BundleList::new();
    bundle.append(commit_selection(&page, &selection));

    assert_eq!(bundle.len(), 1);
    let entry = bundle.get(0).unwrap();
    assert_eq!(entry.product.id, 1);
    let ids: Vec<u64> = entry.variants.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![11, 13]);
    assert_eq!(entry.discount, DiscountRule::default());

    let entry_id = entry.id;
    let rule = DiscountRule::new(DiscountKind::Percentage, 15.0);
    assert!(rule.validate().is_ok());
    assert!(bundle.update_discount(&entry_id, rule));
    assert_eq!(bundle.get(0).unwrap().discount, rule);
}

/// Committing a multi-product selection preserves catalog page order,
/// whatever order the checkboxes were toggled in.
#[test]
fn commit_preserves_page_order() {
    let page = sample_page();
    let mut selection = SelectionSet::new();
    selection.toggle_product(3, &[31, 32], true);
    selection.toggle_product(1, &[11, 12, 13], true);

    let entries = commit_selection(&page, &selection);
    let product_ids: Vec<u64> = entries.iter().map(|e| e.product.id).collect();
    assert_eq!(product_ids, vec![1, 3]);
}

#[test]
fn move_entry_shifts_neighbors() {
    let page = sample_page();
    let mut selection = SelectionSet::new();
    for p in &page {
        selection.toggle_product(p.id, &p.variant_ids(), true);
    }

    let mut bundle = BundleList::new();
    bundle.append(commit_selection(&page, &selection));
    assert_eq!(bundle.len(), 3);

    // [T-Shirt, Mug, Hoodie] -> move the first entry to the end
    bundle.move_entry(0, 2);
    let titles: Vec<&str> = bundle
        .entries()
        .iter()
        .map(|e| e.product.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Mug", "Hoodie", "T-Shirt"]);

    // Entry identity follows the move
    assert_eq!(bundle.index_of(&bundle.get(2).unwrap().id), Some(2));
}

/// Reordering a variant inside one entry must not touch the entry order or
/// any sibling entry's variants.
#[test]
fn move_variant_is_scoped_to_its_entry() {
    let page = sample_page();
    let mut selection = SelectionSet::new();
    selection.toggle_product(1, &[11, 12, 13], true);
    selection.toggle_product(3, &[31, 32], true);

    let mut bundle = BundleList::new();
    bundle.append(commit_selection(&page, &selection));

    let shirt_id = bundle.get(0).unwrap().id;
    assert!(bundle.move_variant(&shirt_id, 0, 2));

    let shirt_ids: Vec<u64> = bundle.get(0).unwrap().variants.iter().map(|v| v.id).collect();
    assert_eq!(shirt_ids, vec![12, 13, 11]);

    let hoodie_ids: Vec<u64> = bundle.get(1).unwrap().variants.iter().map(|v| v.id).collect();
    assert_eq!(hoodie_ids, vec![31, 32]);

    // Unknown entry id reports failure and changes nothing
    assert!(!bundle.move_variant(&uuid::Uuid::new_v4(), 0, 1));
}

/// The remove affordance appears at two entries and disappears back at one.
#[test]
fn remove_affordance_tracks_length() {
    let page = sample_page();
    let mut selection = SelectionSet::new();
    selection.toggle_product(1, &[11], true);
    selection.toggle_product(2, &[21], true);

    let mut bundle = BundleList::new();
    assert!(!bundle.show_remove());

    bundle.append(commit_selection(&page, &selection));
    assert_eq!(bundle.len(), 2);
    assert!(bundle.show_remove());

    let first_id = bundle.get(0).unwrap().id;
    assert!(bundle.remove(&first_id));
    assert_eq!(bundle.len(), 1);
    assert!(!bundle.show_remove());
    assert_eq!(bundle.get(0).unwrap().product.id, 2);
}

#[test]
fn remove_keeps_order_dense() {
    let page = sample_page();
    let mut selection = SelectionSet::new();
    for p in &page {
        selection.toggle_product(p.id, &p.variant_ids(), true);
    }

    let mut bundle = BundleList::new();
    bundle.append(commit_selection(&page, &selection));

    let middle_id = bundle.get(1).unwrap().id;
    assert!(bundle.remove(&middle_id));

    let product_ids: Vec<u64> = bundle.entries().iter().map(|e| e.product.id).collect();
    assert_eq!(product_ids, vec![1, 3]);
    assert!(bundle.find(&middle_id).is_none());
}

/// Replacing an entry's variant set keeps the entry in place and leaves the
/// discount untouched.
#[test]
fn update_variants_replaces_sequence() {
    let page = sample_page();
    let mut selection = SelectionSet::new();
    selection.toggle_product(1, &[11, 12, 13], true);

    let mut bundle = BundleList::new();
    bundle.append(commit_selection(&page, &selection));

    let entry_id = bundle.get(0).unwrap().id;
    let rule = DiscountRule::new(DiscountKind::Flat, 2.0);
    bundle.update_discount(&entry_id, rule);

    bundle.update_variants(&entry_id, vec![variant(12, "M / Black", 7.99)]);
    let entry = bundle.get(0).unwrap();
    assert_eq!(entry.variants.len(), 1);
    assert_eq!(entry.variants[0].id, 12);
    assert_eq!(entry.discount, rule);
}

/// Discount validation bounds, as the editor applies them before committing
/// a rule to the list.
#[test]
fn discount_validation_bounds() {
    assert!(DiscountRule::new(DiscountKind::Percentage, 100.0).validate().is_ok());
    assert!(DiscountRule::new(DiscountKind::Percentage, 100.1).validate().is_err());
    assert!(DiscountRule::new(DiscountKind::Flat, 0.0).validate().is_ok());
    assert!(DiscountRule::new(DiscountKind::Flat, -0.5).validate().is_err());
}

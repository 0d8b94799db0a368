//! bundletui library
//!
//! Core state and UI for composing a product bundle against a remote
//! catalog: search the catalog, pick products and variants, arrange the
//! committed entries by grab-and-move reordering, and attach per-entry
//! discounts.

pub mod app;
pub mod bundle;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod discount;
pub mod error;
pub mod input;
pub mod picker;
pub mod reorder;
pub mod scrolling;
pub mod search;
pub mod selection;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState, BundleFocus};
pub use bundle::{BundleEntry, BundleList, commit_selection};
pub use catalog::{CatalogProduct, CatalogVariant};
pub use config::Settings;
pub use discount::{DiscountKind, DiscountRule};
pub use error::{BundleError, Result};
pub use picker::{PickerRow, PickerState, picker_rows};
pub use reorder::{Grab, reorder};
pub use scrolling::ScrollState;
pub use search::{CatalogCache, SearchMessage, SearchWorker};
pub use selection::SelectionSet;

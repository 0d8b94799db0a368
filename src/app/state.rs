//! Application state definitions
//!
//! Contains all state-related types for the application including AppState,
//! AppMode, and the bundle-view focus types.

use crate::bundle::BundleList;
use crate::input::DiscountEditorState;
use crate::picker::PickerState;
use crate::reorder::Grab;
use crate::scrolling::ScrollState;
use crate::search::CatalogCache;
use std::collections::HashSet;
use uuid::Uuid;

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Bundle list - the main view
    Bundle,
    /// Product picker dialog
    Picker,
    /// Discount editor dialog for one entry
    DiscountEditor,
}

/// Which ordered scope the bundle view's cursor (and any grab gesture)
/// currently operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleFocus {
    /// Top-level bundle rows
    Entries,
    /// The chosen-variant sub-list of one expanded entry
    Variants { entry_id: Uuid },
}

/// Main application state
///
/// Owned by the event loop; handlers get `&mut`, renderers get `&`. All
/// mutations of the bundle and selection go through their documented
/// operations, never direct field writes from other components.
#[derive(Debug)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// The committed bundle
    pub bundle: BundleList,
    /// Latest catalog page + loading/error flags
    pub catalog: CatalogCache,
    /// Picker dialog state, present while the picker is open
    pub picker: Option<PickerState>,
    /// Discount editor state, present while the editor is open
    pub discount_editor: Option<DiscountEditorState>,
    /// Cursor/viewport over the bundle rows
    pub bundle_scroll: ScrollState,
    /// Cursor within the focused variant sub-list
    pub variant_cursor: usize,
    /// Focused scope in the bundle view
    pub focus: BundleFocus,
    /// Entries with their variant sub-list expanded
    pub expanded: HashSet<Uuid>,
    /// Active grab gesture, if any (scoped by `focus`)
    pub grab: Option<Grab>,
    /// Status message for user feedback
    pub status_message: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Bundle,
            bundle: BundleList::new(),
            catalog: CatalogCache::new(),
            picker: None,
            discount_editor: None,
            bundle_scroll: ScrollState::new(0, 20),
            variant_cursor: 0,
            focus: BundleFocus::Entries,
            expanded: HashSet::new(),
            grab: None,
            status_message: "Press 'a' to add products to the bundle".to_string(),
        }
    }
}

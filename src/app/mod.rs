//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, BundleFocus)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{AppMode, AppState, BundleFocus};

use crate::bundle::commit_selection;
use crate::components::keybindings::KeybindingContext;
use crate::config::Settings;
use crate::error::Result;
use crate::input::{DiscountEditorState, InputResult};
use crate::picker::{PickerRow, PickerState, picker_rows};
use crate::reorder::Grab;
use crate::search::{SearchMessage, SearchWorker};
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use tracing::{debug, info};

/// A picker checkbox toggle, resolved from the cursor row before mutating
/// the selection
enum RowToggle {
    Product {
        product_id: u64,
        variant_ids: Vec<u64>,
        checked: bool,
    },
    Variant {
        product_id: u64,
        variant_id: u64,
        checked: bool,
    },
}

/// Main application struct
pub struct App {
    state: AppState,
    settings: Settings,
    ui_renderer: UiRenderer,
    /// Keybinding context for navigation hints
    keybinding_context: KeybindingContext,
    /// Search worker spawning one thread per request
    worker: SearchWorker,
    /// Channel receiver for search results (polled in main loop)
    search_rx: Receiver<SearchMessage>,
}

impl App {
    /// Create a new application instance
    pub fn new(settings: Settings) -> Self {
        info!("creating new App instance");
        let (tx, rx) = mpsc::channel();
        let worker = SearchWorker::new(tx, &settings);

        Self {
            state: AppState::default(),
            settings,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            worker,
            search_rx: rx,
        }
    }

    /// Borrow the application state (for tests and external inspection)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main application loop
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        info!("starting main application loop");

        loop {
            // Apply any completed search requests
            self.poll_search_messages();

            // Issue a debounced search once the picker input has settled
            self.poll_picker_debounce();

            // Handle input events
            if crossterm::event::poll(Duration::from_millis(50))? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event)? {
                            break; // Exit requested
                        }
                    }
                    Event::Resize(_, height) => {
                        self.handle_resize(height);
                    }
                    _ => {}
                }
            }

            // Render UI
            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, &self.keybinding_context);
            })?;
        }

        info!("application loop exited");
        Ok(())
    }

    /// Drain completed search requests; stale responses are discarded by the
    /// catalog cache
    fn poll_search_messages(&mut self) {
        while let Ok(msg) = self.search_rx.try_recv() {
            if self.state.catalog.apply(msg) {
                self.refresh_picker_rows();
            }
        }
    }

    /// Fire the search once the picker input has been stable for the
    /// debounce window. A query change always starts back at page 0.
    fn poll_picker_debounce(&mut self) {
        if self.state.mode != AppMode::Picker {
            return;
        }
        let due = self
            .state
            .picker
            .as_mut()
            .and_then(|p| p.take_due_query(self.settings.debounce));
        if let Some(query) = due {
            self.issue_search(&query, 0);
        }
    }

    /// Tag a search with the next sequence number and hand it to the worker
    fn issue_search(&mut self, query: &str, page: usize) {
        let seq = self.state.catalog.begin_search(query, page);
        self.worker
            .spawn_fetch(seq, query.to_string(), self.state.catalog.page());
    }

    fn refresh_picker_rows(&mut self) {
        let count = picker_rows(self.state.catalog.products()).len();
        if let Some(picker) = self.state.picker.as_mut() {
            picker.scroll.set_item_count(count);
        }
    }

    fn handle_resize(&mut self, height: u16) {
        // Header, column labels, and nav bar take up the rest
        self.state
            .bundle_scroll
            .set_viewport_height(usize::from(height).saturating_sub(6));
    }

    /// Dispatch a key event based on the current mode; returns true when the
    /// user asked to quit
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<bool> {
        match self.state.mode {
            AppMode::Bundle => self.handle_bundle_key(key_event),
            AppMode::Picker => {
                self.handle_picker_key(key_event);
                Ok(false)
            }
            AppMode::DiscountEditor => {
                self.handle_discount_key(key_event);
                Ok(false)
            }
        }
    }

    // ------------------------------------------------------------------
    // Bundle view
    // ------------------------------------------------------------------

    fn handle_bundle_key(&mut self, key_event: KeyEvent) -> Result<bool> {
        if self.state.grab.is_some() {
            self.handle_grab_key(key_event.code);
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Char('a') => self.open_picker(),
            KeyCode::Up => match self.state.focus {
                BundleFocus::Entries => self.state.bundle_scroll.move_up(),
                BundleFocus::Variants { .. } => {
                    self.state.variant_cursor = self.state.variant_cursor.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.state.focus {
                BundleFocus::Entries => self.state.bundle_scroll.move_down(),
                BundleFocus::Variants { .. } => {
                    let len = self.focused_variant_len();
                    if self.state.variant_cursor + 1 < len {
                        self.state.variant_cursor += 1;
                    }
                }
            },
            KeyCode::Enter | KeyCode::Char('e') => self.toggle_expanded(),
            KeyCode::Right | KeyCode::Char('v') => self.focus_variants(),
            KeyCode::Left | KeyCode::Esc => {
                self.state.focus = BundleFocus::Entries;
            }
            KeyCode::Char(' ') => self.start_grab(),
            KeyCode::Char('d') | KeyCode::Delete => self.remove_selected_entry(),
            KeyCode::Char('f') => self.open_discount_editor(),
            _ => {}
        }
        Ok(false)
    }

    /// While a grab is active, every Up/Down is one hover message into the
    /// reorder engine; the order is committed immediately on each hover.
    fn handle_grab_key(&mut self, code: KeyCode) {
        let Some(mut grab) = self.state.grab else {
            return;
        };

        let target = match code {
            KeyCode::Up => grab.index().checked_sub(1),
            KeyCode::Down => {
                let next = grab.index() + 1;
                (next < self.grab_scope_len()).then_some(next)
            }
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Esc => {
                // Order was committed hover by hover; dropping just ends
                // the gesture
                self.state.grab = None;
                self.state.status_message = "Dropped".to_string();
                return;
            }
            _ => None,
        };

        if let Some(target) = target
            && let Some((from, to)) = grab.hover(target)
        {
            match self.state.focus {
                BundleFocus::Entries => {
                    self.state.bundle.move_entry(from, to);
                    self.state.bundle_scroll.select(to);
                }
                BundleFocus::Variants { entry_id } => {
                    self.state.bundle.move_variant(&entry_id, from, to);
                    self.state.variant_cursor = to;
                }
            }
            debug!(from, to, "reordered via hover");
        }
        self.state.grab = Some(grab);
    }

    fn grab_scope_len(&self) -> usize {
        match self.state.focus {
            BundleFocus::Entries => self.state.bundle.len(),
            BundleFocus::Variants { entry_id } => self.focused_len_for(&entry_id),
        }
    }

    fn focused_variant_len(&self) -> usize {
        match self.state.focus {
            BundleFocus::Variants { entry_id } => self.focused_len_for(&entry_id),
            BundleFocus::Entries => 0,
        }
    }

    fn focused_len_for(&self, entry_id: &uuid::Uuid) -> usize {
        self.state
            .bundle
            .find(entry_id)
            .map_or(0, |e| e.variants.len())
    }

    fn start_grab(&mut self) {
        match self.state.focus {
            BundleFocus::Entries => {
                if self.state.bundle.is_empty() {
                    return;
                }
                self.state.grab = Some(Grab::new(self.state.bundle_scroll.selected_index));
            }
            BundleFocus::Variants { entry_id } => {
                if self.focused_len_for(&entry_id) == 0 {
                    return;
                }
                self.state.grab = Some(Grab::new(self.state.variant_cursor));
            }
        }
        self.state.status_message = "Grabbed: ↑↓ to move, Space to drop".to_string();
    }

    /// Expand/collapse the selected entry's variant sub-list. Only entries
    /// whose product has more than one variant are collapsible.
    fn toggle_expanded(&mut self) {
        let Some((id, multi)) = self
            .state
            .bundle
            .get(self.state.bundle_scroll.selected_index)
            .map(|e| (e.id, e.product.has_multiple_variants()))
        else {
            return;
        };
        if !multi {
            return;
        }
        if self.state.expanded.remove(&id) {
            if self.state.focus == (BundleFocus::Variants { entry_id: id }) {
                self.state.focus = BundleFocus::Entries;
            }
        } else {
            self.state.expanded.insert(id);
        }
    }

    /// Move the cursor into the expanded variant sub-list of the selected entry
    fn focus_variants(&mut self) {
        let Some(id) = self
            .state
            .bundle
            .get(self.state.bundle_scroll.selected_index)
            .map(|e| e.id)
        else {
            return;
        };
        if self.state.expanded.contains(&id) {
            self.state.focus = BundleFocus::Variants { entry_id: id };
            self.state.variant_cursor = 0;
        }
    }

    fn remove_selected_entry(&mut self) {
        if !self.state.bundle.show_remove() {
            self.state.status_message =
                "Cannot remove: the bundle must keep at least one entry".to_string();
            return;
        }
        let Some((id, title)) = self
            .state
            .bundle
            .get(self.state.bundle_scroll.selected_index)
            .map(|e| (e.id, e.product.title.clone()))
        else {
            return;
        };
        self.state.bundle.remove(&id);
        self.state.expanded.remove(&id);
        self.state
            .bundle_scroll
            .set_item_count(self.state.bundle.len());
        self.state.status_message = format!("Removed {title}");
    }

    fn open_discount_editor(&mut self) {
        let Some(entry) = self
            .state
            .bundle
            .get(self.state.bundle_scroll.selected_index)
        else {
            return;
        };
        self.state.discount_editor = Some(DiscountEditorState::open(entry));
        self.state.mode = AppMode::DiscountEditor;
    }

    fn handle_discount_key(&mut self, key_event: KeyEvent) {
        let Some(editor) = self.state.discount_editor.as_mut() else {
            self.state.mode = AppMode::Bundle;
            return;
        };
        let entry_id = editor.entry_id;
        match editor.handle_key(key_event) {
            InputResult::Pending => {}
            InputResult::Cancel => {
                self.state.discount_editor = None;
                self.state.mode = AppMode::Bundle;
            }
            InputResult::Confirm(rule) => {
                self.state.discount_editor = None;
                self.state.bundle.update_discount(&entry_id, rule);
                self.state.mode = AppMode::Bundle;
                self.state.status_message = format!("Discount set: {}", rule.summary());
            }
        }
    }

    // ------------------------------------------------------------------
    // Picker
    // ------------------------------------------------------------------

    /// Open the picker with a fresh, empty selection and fetch the first page
    fn open_picker(&mut self) {
        self.state.picker = Some(PickerState::new());
        self.state.mode = AppMode::Picker;
        self.state.grab = None;
        self.issue_search("", 0);
    }

    fn handle_picker_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc => {
                // Cancel: dropping the picker state resets the selection
                self.state.picker = None;
                self.state.mode = AppMode::Bundle;
                self.state.status_message = "Selection cancelled".to_string();
            }
            KeyCode::Enter => self.commit_picker(),
            KeyCode::Backspace => {
                if let Some(picker) = self.state.picker.as_mut() {
                    picker.pop_char();
                }
            }
            KeyCode::Up => {
                if let Some(picker) = self.state.picker.as_mut() {
                    picker.scroll.move_up();
                }
            }
            KeyCode::Down => {
                if let Some(picker) = self.state.picker.as_mut() {
                    picker.scroll.move_down();
                }
            }
            KeyCode::Char(' ') => self.toggle_picker_row(),
            KeyCode::Right | KeyCode::PageDown => self.turn_picker_page(1),
            KeyCode::Left | KeyCode::PageUp => self.turn_picker_page(-1),
            KeyCode::Char(c) => {
                if let Some(picker) = self.state.picker.as_mut() {
                    picker.push_char(c);
                }
            }
            _ => {}
        }
    }

    fn turn_picker_page(&mut self, delta: i64) {
        let Some(query) = self.state.picker.as_ref().map(|p| p.query_input.clone()) else {
            return;
        };
        let page = self.state.catalog.page() as i64 + delta;
        if page < 0 {
            return;
        }
        self.issue_search(&query, page as usize);
    }

    /// Flip the checkbox under the picker cursor
    fn toggle_picker_row(&mut self) {
        let toggle = {
            let Some(picker) = self.state.picker.as_ref() else {
                return;
            };
            let products = self.state.catalog.products();
            let rows = picker_rows(products);
            match rows.get(picker.scroll.selected_index) {
                Some(&PickerRow::Product(pi)) => {
                    let product = &products[pi];
                    RowToggle::Product {
                        product_id: product.id,
                        variant_ids: product.variant_ids(),
                        checked: !picker.selection.is_product_checked(product.id),
                    }
                }
                Some(&PickerRow::Variant { product, variant }) => {
                    let p = &products[product];
                    let v = &p.variants[variant];
                    RowToggle::Variant {
                        product_id: p.id,
                        variant_id: v.id,
                        checked: !picker.selection.is_variant_checked(p.id, v.id),
                    }
                }
                None => return,
            }
        };

        let Some(picker) = self.state.picker.as_mut() else {
            return;
        };
        match toggle {
            RowToggle::Product {
                product_id,
                variant_ids,
                checked,
            } => picker
                .selection
                .toggle_product(product_id, &variant_ids, checked),
            RowToggle::Variant {
                product_id,
                variant_id,
                checked,
            } => picker
                .selection
                .toggle_variant(product_id, variant_id, checked),
        }
    }

    /// Commit the picker selection into the bundle. Disabled at zero
    /// selected products, and guarded against a rapid double press.
    fn commit_picker(&mut self) {
        let Some(picker) = self.state.picker.as_mut() else {
            return;
        };
        if picker.committing {
            return;
        }
        if picker.selection.selected_count() == 0 {
            self.state.status_message = "Select at least one product first".to_string();
            return;
        }
        picker.committing = true;

        let entries = commit_selection(self.state.catalog.products(), &picker.selection);
        let count = entries.len();
        self.state.bundle.append(entries);
        self.state.picker = None;
        self.state.mode = AppMode::Bundle;
        self.state
            .bundle_scroll
            .set_item_count(self.state.bundle.len());
        self.state.status_message = format!("Added {count} product(s) to the bundle");
        info!(count, total = self.state.bundle.len(), "picker selection committed");
    }
}

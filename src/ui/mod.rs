//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `header` - Title and navigation-bar rendering
//! - `bundle` - The main bundle list view
//! - `picker` - The product picker modal
//! - `dialogs` - The discount editor dialog and shared dialog helpers
//!
//! Rendering is a pure function of [`AppState`]: nothing in here mutates
//! state.

mod bundle;
mod dialogs;
mod header;
mod picker;

use crate::app::{AppMode, AppState};
use crate::components::keybindings::KeybindingContext;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// UI renderer for the application
///
/// Main entry point for UI rendering; delegates to specialized submodules
/// for different parts of the UI.
pub struct UiRenderer;

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
        // Main layout with nav bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        let content_area = main_chunks[0];
        let nav_bar_area = main_chunks[1];

        // The bundle view is always the backdrop; dialogs overlay it
        bundle::render_bundle_view(f, state, content_area);

        match state.mode {
            AppMode::Bundle => {}
            AppMode::Picker => picker::render_picker_modal(f, state),
            AppMode::DiscountEditor => dialogs::render_discount_editor(f, state),
        }

        header::render_nav_bar(f, state, keybinding_ctx, nav_bar_area);
    }
}

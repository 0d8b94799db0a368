//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current
//! application mode, used to render the navigation hint bar.

#![allow(dead_code)]

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    Grab,
    Expand,
    FocusVariants,
    Remove,
    Discount,
    AddProducts,
    Toggle,
    PagePrev,
    PageNext,
    Confirm,
    Cancel,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.mode_bindings.insert(
            AppMode::Bundle,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "↑↓", "Navigate"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Grab, "Space", "Grab/drop"),
                Keybinding::new(KeyCode::Enter, KeyAction::Expand, "Enter", "Variants"),
                Keybinding::new(KeyCode::Char('f'), KeyAction::Discount, "F", "Discount"),
                Keybinding::new(KeyCode::Char('d'), KeyAction::Remove, "D", "Remove"),
                Keybinding::new(KeyCode::Char('a'), KeyAction::AddProducts, "A", "Add products"),
                Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Picker,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "↑↓", "Navigate"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", "Toggle"),
                Keybinding::new(KeyCode::Left, KeyAction::PagePrev, "←→", "Page"),
                Keybinding::new(KeyCode::Enter, KeyAction::Confirm, "Enter", "Add"),
                Keybinding::new(KeyCode::Esc, KeyAction::Cancel, "Esc", "Cancel"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::DiscountEditor,
            vec![
                Keybinding::new(KeyCode::Tab, KeyAction::NavigateDown, "Tab", "Next field"),
                Keybinding::new(KeyCode::Left, KeyAction::Toggle, "←→", "Change kind"),
                Keybinding::new(KeyCode::Enter, KeyAction::Confirm, "Enter", "Apply"),
                Keybinding::new(KeyCode::Esc, KeyAction::Cancel, "Esc", "Cancel"),
            ],
        );
    }

    /// Keybindings to display for the given mode
    pub fn hints_for(&self, mode: AppMode) -> &[Keybinding] {
        self.mode_bindings
            .get(&mode)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

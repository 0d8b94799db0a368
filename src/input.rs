//! Input handling for the discount editor dialog
//!
//! The dialog owns its own key handling and reports back through
//! [`InputResult`], keeping the event loop's dispatch thin.

use crate::bundle::BundleEntry;
use crate::discount::{DiscountKind, DiscountRule};
use crossterm::event::{KeyCode, KeyEvent};
use uuid::Uuid;

/// Which field of the discount editor has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Value,
    Kind,
}

/// Outcome of feeding one key event to a dialog
#[derive(Debug, Clone, PartialEq)]
pub enum InputResult {
    /// Dialog consumed the key and stays open
    Pending,
    /// User confirmed with a valid rule
    Confirm(DiscountRule),
    Cancel,
}

/// State of the open discount editor
#[derive(Debug, Clone)]
pub struct DiscountEditorState {
    pub entry_id: Uuid,
    pub entry_title: String,
    pub value_input: String,
    pub kind: DiscountKind,
    pub field: EditorField,
    /// Validation feedback shown inline; cleared on the next edit
    pub error: Option<String>,
}

impl DiscountEditorState {
    /// Open the editor pre-filled from the entry's current rule
    pub fn open(entry: &BundleEntry) -> Self {
        Self {
            entry_id: entry.id,
            entry_title: entry.product.title.clone(),
            value_input: format_value(entry.discount.value),
            kind: entry.discount.kind,
            field: EditorField::Value,
            error: None,
        }
    }

    /// Handle one key event. Enter validates and either confirms or surfaces
    /// the validation message inline; the rule is never clamped.
    pub fn handle_key(&mut self, key_event: KeyEvent) -> InputResult {
        match key_event.code {
            KeyCode::Esc => return InputResult::Cancel,
            KeyCode::Enter => {
                let value = match self.value_input.trim().parse::<f64>() {
                    Ok(v) => v,
                    Err(_) => {
                        self.error = Some("discount value must be a number".to_string());
                        return InputResult::Pending;
                    }
                };
                let rule = DiscountRule::new(self.kind, value);
                match rule.validate() {
                    Ok(()) => return InputResult::Confirm(rule),
                    Err(e) => {
                        self.error = Some(e.to_string());
                        return InputResult::Pending;
                    }
                }
            }
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.field = match self.field {
                    EditorField::Value => EditorField::Kind,
                    EditorField::Kind => EditorField::Value,
                };
            }
            KeyCode::Left | KeyCode::Right if self.field == EditorField::Kind => {
                self.kind = self.kind.toggled();
                self.error = None;
            }
            KeyCode::Backspace if self.field == EditorField::Value => {
                self.value_input.pop();
                self.error = None;
            }
            KeyCode::Char(c) if self.field == EditorField::Value => {
                if c.is_ascii_digit() || c == '.' {
                    self.value_input.push(c);
                    self.error = None;
                }
            }
            _ => {}
        }
        InputResult::Pending
    }
}

fn format_value(value: f64) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

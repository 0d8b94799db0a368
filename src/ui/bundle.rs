//! Bundle list view
//!
//! Renders the committed bundle: one row per entry with its 1-based
//! position, title, discount summary, and remove affordance, plus the
//! expanded variant sub-lists. The grabbed row is highlighted for the
//! duration of a reorder gesture.

use crate::app::{AppState, BundleFocus};
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use super::header;

pub fn render_bundle_view(f: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Column labels
            Constraint::Min(1),    // Entry list
            Constraint::Length(1), // Status line
        ])
        .split(area);

    header::render_title(f, chunks[0]);

    let labels = Paragraph::new(Line::from(Span::styled(
        "   #  Product                          Discount",
        Style::default().fg(Colors::FG_SECONDARY),
    )));
    f.render_widget(labels, chunks[1]);

    if state.bundle.is_empty() {
        let empty = Paragraph::new("Bundle is empty - press 'a' to add products")
            .style(Styles::muted());
        f.render_widget(empty, chunks[2]);
    } else {
        render_entries(f, state, chunks[2]);
    }

    let status = Paragraph::new(state.status_message.as_str())
        .style(Style::default().fg(Colors::FG_SECONDARY));
    f.render_widget(status, chunks[3]);
}

fn render_entries(f: &mut Frame, state: &AppState, area: Rect) {
    let show_remove = state.bundle.show_remove();
    let mut items: Vec<ListItem> = Vec::new();

    for (idx, entry) in state.bundle.entries().iter().enumerate() {
        let on_entries = state.focus == BundleFocus::Entries;
        let selected = on_entries && state.bundle_scroll.selected_index == idx;
        let grabbed = selected && state.grab.is_some();

        let style = if grabbed {
            Styles::grabbed()
        } else if selected {
            Styles::selected()
        } else {
            Style::default().fg(Colors::FG_PRIMARY)
        };

        let expander = if entry.product.has_multiple_variants() {
            if state.expanded.contains(&entry.id) { "▾" } else { "▸" }
        } else {
            " "
        };
        let remove = if show_remove { "  ✕" } else { "" };
        let line = format!(
            " {} {:>2}. {:<32} {}{}",
            expander,
            idx + 1,
            entry.product.title,
            entry.discount.summary(),
            remove,
        );
        items.push(ListItem::new(Line::from(Span::styled(line, style))));

        if state.expanded.contains(&entry.id) {
            let variant_focus = state.focus == (BundleFocus::Variants { entry_id: entry.id });
            for (vi, variant) in entry.variants.iter().enumerate() {
                let v_selected = variant_focus && state.variant_cursor == vi;
                let v_grabbed = v_selected && state.grab.is_some();
                let v_style = if v_grabbed {
                    Styles::grabbed()
                } else if v_selected {
                    Styles::selected()
                } else {
                    Style::default().fg(Colors::FG_SECONDARY)
                };
                let v_line = format!(
                    "       ☰ {:<28} $ {:.2}",
                    variant.title, variant.price
                );
                items.push(ListItem::new(Line::from(Span::styled(v_line, v_style))));
            }
        }
    }

    let list = List::new(items);
    let mut list_state = ListState::default().with_offset(state.bundle_scroll.offset);
    f.render_stateful_widget(list, area, &mut list_state);
}

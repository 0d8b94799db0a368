//! Product picker modal
//!
//! Modal overlay with the search box, the paged product/variant checkbox
//! list, the running selection count, and the Cancel/Add footer.

use crate::app::AppState;
use crate::picker::{PickerRow, picker_rows};
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::dialogs::centered_rect;

pub fn render_picker_modal(f: &mut Frame, state: &AppState) {
    let Some(picker) = state.picker.as_ref() else {
        return;
    };

    let area = centered_rect(f.area(), 70, 80);
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Select Products ")
        .border_style(Style::default().fg(Colors::BORDER_ACTIVE));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Min(1),    // Product list
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    // Search box; the trailing marker doubles as a text cursor
    let search = Paragraph::new(format!("{}▌", picker.query_input)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search product ")
            .border_style(Style::default().fg(Colors::BORDER_INACTIVE)),
    );
    f.render_widget(search, chunks[0]);

    if state.catalog.is_loading() {
        let loading = Paragraph::new("Loading…")
            .alignment(Alignment::Center)
            .style(Styles::muted());
        f.render_widget(loading, chunks[1]);
    } else {
        render_rows(f, state, chunks[1]);
    }

    render_footer(f, state, chunks[2]);
}

fn render_rows(f: &mut Frame, state: &AppState, area: ratatui::layout::Rect) {
    let Some(picker) = state.picker.as_ref() else {
        return;
    };
    let products = state.catalog.products();
    let rows = picker_rows(products);

    let mut items: Vec<ListItem> = Vec::new();

    if let Some(error) = state.catalog.error() {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("⚠ {error}"),
            Styles::error(),
        ))));
    }
    if rows.is_empty() && state.catalog.error().is_none() {
        items.push(ListItem::new(Line::from(Span::styled(
            "No products found",
            Styles::muted(),
        ))));
    }

    for (i, row) in rows.iter().enumerate() {
        let selected = picker.scroll.selected_index == i;
        let base = if selected {
            Styles::selected()
        } else {
            Style::default().fg(Colors::FG_PRIMARY)
        };

        let line = match *row {
            PickerRow::Product(pi) => {
                let product = &products[pi];
                let mark = if picker.selection.is_product_checked(product.id) {
                    "[x]"
                } else {
                    "[ ]"
                };
                format!(" {mark} {}", product.title)
            }
            PickerRow::Variant { product, variant } => {
                let p = &products[product];
                let v = &p.variants[variant];
                let mark = if picker.selection.is_variant_checked(p.id, v.id) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let availability = v
                    .inventory_quantity
                    .map(|n| format!("{n} available"))
                    .unwrap_or_default();
                format!(
                    "     {mark} {:<26} {:>14}  $ {:.2}",
                    v.title, availability, v.price
                )
            }
        };
        items.push(ListItem::new(Line::from(Span::styled(line, base))));
    }

    let list = List::new(items);
    let mut list_state = ListState::default().with_offset(picker.scroll.offset);
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_footer(f: &mut Frame, state: &AppState, area: ratatui::layout::Rect) {
    let Some(picker) = state.picker.as_ref() else {
        return;
    };
    let count = picker.selection.selected_count();
    let add_style = if count == 0 {
        Styles::muted()
    } else {
        Style::default().fg(Colors::SUCCESS)
    };

    let footer = Line::from(vec![
        Span::styled(
            format!(" {count} product(s) selected"),
            Style::default().fg(Colors::FG_SECONDARY),
        ),
        Span::styled(
            format!("  ·  page {}", state.catalog.page() + 1),
            Styles::muted(),
        ),
        Span::styled("   Esc Cancel", Style::default().fg(Colors::FG_SECONDARY)),
        Span::styled("   Enter Add", add_style),
    ]);
    f.render_widget(Paragraph::new(footer), area);
}

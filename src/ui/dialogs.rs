//! Dialog rendering
//!
//! The discount editor dialog plus the shared centered-rect helper used by
//! every overlay.

use crate::app::AppState;
use crate::input::EditorField;
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// A rect centered in `area`, sized as percentages of it
pub fn centered_rect(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let width = area.width * width_percent / 100;
    let height = area.height * height_percent / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Render the discount editor overlay
pub fn render_discount_editor(f: &mut Frame, state: &AppState) {
    let Some(editor) = state.discount_editor.as_ref() else {
        return;
    };

    let width = 46.min(f.area().width);
    let height = 8.min(f.area().height);
    let x = f.area().x + (f.area().width.saturating_sub(width)) / 2;
    let y = f.area().y + (f.area().height.saturating_sub(height)) / 2;
    let area = Rect::new(x, y, width, height);

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Discount - {} ", editor.entry_title))
        .border_style(Style::default().fg(Colors::BORDER_ACTIVE));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let field_style = |field: EditorField| {
        if editor.field == field {
            Styles::selected()
        } else {
            Style::default().fg(Colors::FG_PRIMARY)
        }
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw(" Value: "),
            Span::styled(format!("{}▌", editor.value_input), field_style(EditorField::Value)),
        ]),
        Line::from(vec![
            Span::raw(" Kind:  "),
            Span::styled(
                format!("< {} >", editor.kind.label()),
                field_style(EditorField::Kind),
            ),
        ]),
        Line::default(),
    ];

    if let Some(ref error) = editor.error {
        lines.push(Line::from(Span::styled(format!(" {error}"), Styles::error())));
    } else {
        lines.push(Line::from(Span::styled(
            " Tab: switch field · Enter: apply · Esc: cancel",
            Styles::muted(),
        )));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

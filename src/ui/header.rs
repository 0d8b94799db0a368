//! Title and navigation-bar rendering

use crate::app::AppState;
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the application title line
pub fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(" Bundle Builder ", Styles::title())));
    f.render_widget(title, area);
}

/// Render the bottom navigation bar with context-aware key hints
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, binding) in keybinding_ctx.hints_for(state.mode).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Styles::muted()));
        }
        spans.push(Span::styled(
            binding.display.clone(),
            Style::default().fg(Colors::SECONDARY),
        ));
        spans.push(Span::styled(
            format!(" {}", binding.description),
            Style::default().fg(Colors::FG_SECONDARY),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

//! Inline button component
//!
//! Buttons sit inside page lines rather than in their own areas, so they are
//! rendered as styled spans.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::state::hero_button_text;

/// Style of a button label
pub fn button_style(is_selected: bool, is_enabled: bool) -> Style {
    if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }
}

/// Render a bracketed button label
pub fn render_button(label: &str, is_selected: bool, is_enabled: bool) -> Span<'static> {
    Span::styled(
        hero_button_text(label),
        button_style(is_selected, is_enabled),
    )
}

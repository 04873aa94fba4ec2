//! Field rendering utilities for forms

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::state::FormField;

const CURSOR: &str = "▌";
const INPUT_EDGE: &str = "│ ";

/// Render a field as label, `input_height` input rows and its error slot
pub fn field_lines(
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
    input_height: u16,
    indent: &str,
) -> Vec<Line<'static>> {
    let label_style = if is_active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let edge_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(indent.to_string()),
        Span::styled(field.label.clone(), label_style),
    ])];

    let height = usize::from(input_height.max(1));
    let text = field.as_text();
    let rows: Vec<&str> = if field.is_multiline {
        text.split('\n').collect()
    } else {
        vec![text]
    };
    // Long messages keep their tail (and the cursor) on screen
    let visible = &rows[rows.len().saturating_sub(height)..];

    for i in 0..height {
        let mut spans = vec![
            Span::raw(indent.to_string()),
            Span::styled(INPUT_EDGE, edge_style),
        ];
        match visible.get(i) {
            Some(_) if text.is_empty() && !is_active => {
                spans.push(Span::styled(
                    "(empty)",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Some(row) => {
                spans.push(Span::raw(row.to_string()));
                if is_active && i + 1 == visible.len() {
                    spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
                }
            }
            None => {}
        }
        lines.push(Line::from(spans));
    }

    lines.push(match error {
        Some(message) => Line::from(vec![
            Span::raw(indent.to_string()),
            Span::styled(format!("✗ {message}"), Style::default().fg(Color::Red)),
        ]),
        None => Line::default(),
    });

    lines
}

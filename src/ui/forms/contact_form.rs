//! Contact form rendering

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use super::field_renderer::field_lines;
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::page::{form_rows, CONTACT_FORM_HEIGHT};
use crate::state::{FieldKey, Focus, Form};
use crate::ui::components::render_button;

/// Lines of the contact form block, exactly `CONTACT_FORM_HEIGHT` rows
pub fn contact_form_lines(app: &App, indent: &str) -> Vec<Line<'static>> {
    let state = &app.state;
    let form = &state.form;
    let in_form = state.focus == Focus::Form;
    let active = form.active_field();

    let mut lines = Vec::with_capacity(usize::from(CONTACT_FORM_HEIGHT));
    for (index, key) in FieldKey::ALL.iter().enumerate() {
        let field = form.field(*key);
        let input_height = if field.is_multiline {
            form_rows::MESSAGE_INPUT_HEIGHT
        } else {
            1
        };
        lines.extend(field_lines(
            field,
            in_form && active == index,
            state.errors.message(key.as_str()),
            input_height,
            indent,
        ));
    }

    while lines.len() < usize::from(form_rows::SUBMIT) {
        lines.push(Line::default());
    }

    let button = app.submission.button();
    lines.push(Line::from(vec![
        Span::raw(indent.to_string()),
        render_button(
            button.label(),
            in_form && form.is_submit_row_active(),
            button.is_enabled(),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::raw(indent.to_string()),
        Span::styled(
            format!("Tab:next field  Enter/{SUBMIT_SHORTCUT}:send"),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    lines.truncate(usize::from(CONTACT_FORM_HEIGHT));
    lines
}

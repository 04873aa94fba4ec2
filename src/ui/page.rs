//! Page body: every section rendered as fixed-height blocks of lines
//!
//! The body is one tall paragraph of exactly `Page::height()` lines, scrolled
//! underneath the navbar. Row offsets match `state::page`, which mouse
//! hit-testing relies on.

use std::time::Instant;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::components::render_button;
use super::forms::contact_form_lines;
use crate::app::App;
use crate::state::content::{
    ABOUT_TEXT, BRAND, CONTACT_DETAILS, DOCTORS, FOOTER, HERO_SUBTITLE, HERO_TITLE, SERVICES,
    STATS,
};
use crate::state::page::{
    ABOUT_TEXT_HEIGHT, CARD_HEIGHT, CONTACT_DETAILS_HEIGHT, FOOTER_HEIGHT, HERO_CTA_ROW,
    SECTION_HEADER_HEIGHT, STAT_HEIGHT,
};
use crate::state::{ScreenLayout, SectionId, CONTENT_INDENT};

/// Width of one stat cell in the about section
const STAT_CELL_WIDTH: usize = 14;
/// Columns a block slides in from while fading
const REVEAL_SHIFT: f32 = 3.0;

pub fn draw_page(frame: &mut Frame, app: &App, now: Instant) {
    let state = &app.state;
    let paragraph = Paragraph::new(page_lines(app, now)).scroll((state.scroll, 0));
    frame.render_widget(paragraph, state.layout.viewport());
}

/// All page lines, with reveal applied
pub fn page_lines(app: &App, now: Instant) -> Vec<Line<'static>> {
    let state = &app.state;
    let indent = " ".repeat(usize::from(CONTENT_INDENT));

    let mut lines = Vec::with_capacity(usize::from(state.page.height()));
    for section in state.page.sections() {
        let mut block = match section.id {
            SectionId::Home => hero_lines(&state.layout, &indent),
            SectionId::Services => services_lines(&indent),
            SectionId::Doctors => doctors_lines(&indent),
            SectionId::About => about_lines(&indent),
            SectionId::Contact => contact_lines(app, &indent),
        };
        fit(&mut block, section.height);
        lines.extend(block);
    }
    lines.extend(footer_lines(state.layout.width));

    // Stat blocks share their rows, so each row range fades once
    let mut last = None;
    for block in state.reveal.blocks() {
        if last == Some((block.kind, block.top)) {
            continue;
        }
        last = Some((block.kind, block.top));

        let progress = block.fade_progress(now);
        let end = usize::from(block.top + block.height).min(lines.len());
        for line in &mut lines[usize::from(block.top).min(end)..end] {
            *line = reveal(std::mem::take(line), progress);
        }
    }

    lines
}

/// Pad or cut a block to its layout height
fn fit(lines: &mut Vec<Line<'static>>, height: u16) {
    lines.resize(usize::from(height), Line::default());
}

/// Hidden until revealed, then dim and offset while fading in
fn reveal(mut line: Line<'static>, progress: f32) -> Line<'static> {
    if progress <= 0.0 {
        return Line::default();
    }
    if progress < 1.0 {
        let shift = ((1.0 - progress) * REVEAL_SHIFT).round() as usize;
        if progress < 0.6 {
            for span in &mut line.spans {
                span.style = span.style.fg(Color::DarkGray);
            }
        }
        line.spans.insert(0, Span::raw(" ".repeat(shift)));
    }
    line
}

fn section_header(title: &str, indent: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::raw(indent.to_string()),
            Span::styled(
                title.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw(indent.to_string()),
            Span::styled(
                "─".repeat(title.chars().count()),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::default(),
    ]
}

fn hero_lines(layout: &ScreenLayout, indent: &str) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default(); 4];
    lines.push(Line::from(vec![
        Span::raw(indent.to_string()),
        Span::styled(
            HERO_TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::raw(indent.to_string()),
        Span::styled(BRAND, Style::default().fg(Color::Cyan)),
    ]));
    for text in HERO_SUBTITLE {
        lines.push(Line::from(vec![
            Span::raw(indent.to_string()),
            Span::styled(text, Style::default().fg(Color::Gray)),
        ]));
    }
    fit(&mut lines, HERO_CTA_ROW);

    // Buttons land on the columns hit-testing expects
    let mut spans = Vec::new();
    let mut x = 0;
    for (label, start, width) in layout.hero_buttons() {
        spans.push(Span::raw(" ".repeat(usize::from(start.saturating_sub(x)))));
        spans.push(render_button(label, false, true));
        x = start + width;
    }
    lines.push(Line::from(spans));
    lines
}

fn services_lines(indent: &str) -> Vec<Line<'static>> {
    let mut lines = section_header("Our Services", indent);
    for service in &SERVICES {
        let mut card = vec![
            Line::from(vec![
                Span::raw(indent.to_string()),
                Span::styled(
                    format!("◆ {}", service.title),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw(format!("{indent}  ")),
                Span::styled(service.summary, Style::default().fg(Color::Gray)),
            ]),
        ];
        fit(&mut card, CARD_HEIGHT);
        lines.extend(card);
    }
    lines
}

fn doctors_lines(indent: &str) -> Vec<Line<'static>> {
    let mut lines = section_header("Our Doctors", indent);
    for doctor in &DOCTORS {
        let mut card = vec![
            Line::from(vec![
                Span::raw(indent.to_string()),
                Span::styled(
                    format!("● {}", doctor.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw(format!("{indent}  ")),
                Span::styled(doctor.specialty, Style::default().fg(Color::Cyan)),
            ]),
            Line::from(vec![
                Span::raw(format!("{indent}  ")),
                Span::styled(doctor.experience, Style::default().fg(Color::Gray)),
            ]),
        ];
        fit(&mut card, CARD_HEIGHT);
        lines.extend(card);
    }
    lines
}

fn about_lines(indent: &str) -> Vec<Line<'static>> {
    let mut lines = section_header("About Us", indent);

    let mut text: Vec<Line<'static>> = ABOUT_TEXT
        .iter()
        .map(|t| Line::from(format!("{indent}{t}")))
        .collect();
    fit(&mut text, ABOUT_TEXT_HEIGHT);
    lines.extend(text);

    let mut values = vec![Span::raw(indent.to_string())];
    let mut labels = vec![Span::raw(indent.to_string())];
    for stat in &STATS {
        values.push(Span::styled(
            format!("{:<STAT_CELL_WIDTH$}", stat.value),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        labels.push(Span::styled(
            format!("{:<STAT_CELL_WIDTH$}", stat.label),
            Style::default().fg(Color::Gray),
        ));
    }
    let mut stats = vec![Line::from(values), Line::from(labels)];
    fit(&mut stats, STAT_HEIGHT);
    lines.extend(stats);
    lines
}

fn contact_lines(app: &App, indent: &str) -> Vec<Line<'static>> {
    let mut lines = section_header("Contact Us", indent);

    let mut details: Vec<Line<'static>> = CONTACT_DETAILS
        .iter()
        .map(|d| Line::from(format!("{indent}{d}")))
        .collect();
    fit(&mut details, CONTACT_DETAILS_HEIGHT);
    lines.extend(details);

    lines.extend(contact_form_lines(app, indent));
    lines
}

fn footer_lines(width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(
            "─".repeat(usize::from(width)),
            Style::default().fg(Color::DarkGray),
        ),
        Line::styled(FOOTER, Style::default().fg(Color::DarkGray)).centered(),
    ];
    fit(&mut lines, FOOTER_HEIGHT);
    lines
}

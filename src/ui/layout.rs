//! Layout components (navbar, menu dropdown, status bar)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::content::BRAND;
use crate::state::{Focus, SectionId, MENU_TRIGGER};
use crate::submit::SubmissionState;

/// Close glyph shown on the trigger while the menu is open
const MENU_CLOSE: &str = "✕";

fn link_style(is_active: bool) -> Style {
    if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Draw the fixed navbar over the top of the page
pub fn draw_navbar(frame: &mut Frame, app: &App) {
    let state = &app.state;
    let area = state.layout.navbar();
    let scrolled = state.is_navbar_scrolled();

    // Scrolled: the bar gets a solid background and a bright edge
    let (bar_style, border_style) = if scrolled {
        (
            Style::default().bg(Color::Rgb(20, 24, 32)),
            Style::default().fg(Color::Cyan),
        )
    } else {
        (Style::default(), Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style)
        .style(bar_style);
    frame.render_widget(block, area);

    let brand_area = Rect::new(2, 1, area.width.saturating_sub(2), 1).intersection(area);
    frame.render_widget(
        Paragraph::new(Span::styled(
            BRAND,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        brand_area,
    );

    let active = state.active_section();
    if state.is_menu_collapsed() {
        let glyph = if state.menu.is_open() {
            MENU_CLOSE
        } else {
            MENU_TRIGGER
        };
        let trigger = state.layout.menu_trigger().intersection(area);
        frame.render_widget(
            Paragraph::new(format!(" {glyph} ")).style(link_style(state.menu.is_open())),
            trigger,
        );
    } else {
        for (id, rect) in state.layout.nav_links() {
            frame.render_widget(
                Paragraph::new(format!(" {} ", id.label())).style(link_style(id == active)),
                rect.intersection(area),
            );
        }
    }
}

/// Draw the dropdown of nav links below the navbar
pub fn draw_menu(frame: &mut Frame, app: &App) {
    let state = &app.state;
    let area = state.layout.menu().intersection(state.layout.viewport());
    let active = state.active_section();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
        area,
    );
    for (id, rect) in state.layout.menu_items() {
        let marker = if id == active { "▸ " } else { "  " };
        frame.render_widget(
            Paragraph::new(format!("{marker}{}", id.label())).style(link_style(id == active)),
            rect.intersection(area),
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let state = &app.state;
    let area = state.layout.status_bar();

    let mut spans = vec![Span::styled(
        format!(" #{} ", state.active_section().anchor()),
        Style::default().fg(Color::Cyan),
    )];

    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::Gray),
    ));

    match app.submission.state() {
        SubmissionState::Pending => {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                app.submission.button().label().to_string(),
                Style::default().fg(Color::Yellow),
            ));
        }
        SubmissionState::Failed => {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                "Last send failed",
                Style::default().fg(Color::Red),
            ));
        }
        SubmissionState::Idle | SubmissionState::Completed => {}
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Scroll position on the right
    let max = state.max_scroll();
    let position = if max == 0 {
        " All ".to_string()
    } else {
        format!(" {:>3}% ", u32::from(state.scroll) * 100 / u32::from(max))
    };
    let width = position.chars().count() as u16;
    let position_area = Rect {
        x: area.width.saturating_sub(width),
        y: area.y,
        width: width.min(area.width),
        height: area.height,
    };
    frame.render_widget(
        Paragraph::new(position).style(Style::default().bg(Color::DarkGray).fg(Color::Gray)),
        position_area,
    );
}

/// Get keyboard hints for the current focus
fn get_hints(app: &App) -> String {
    let state = &app.state;
    match state.focus {
        Focus::Form => format!("Tab:next  Enter:next/send  {SUBMIT_SHORTCUT}:send  Esc:page"),
        Focus::Page if state.is_menu_collapsed() => {
            "j/k:scroll  m:menu  1-5:jump  b/e:buttons  c:contact  q:quit".to_string()
        }
        Focus::Page => format!(
            "j/k:scroll  1-{}:jump  b/e:buttons  c:contact  q:quit",
            SectionId::ALL.len()
        ),
    }
}

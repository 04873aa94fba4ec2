//! Toast notifications in the top-right corner, below the navbar

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::state::{NotificationKind, NotificationPhase, NAVBAR_HEIGHT};

const TOAST_WIDTH: u16 = 44;

/// Horizontal offset of a toast, 0 when fully slid in
fn slide_offset(phase: NotificationPhase, width: u16) -> u16 {
    let hidden = match phase {
        NotificationPhase::Entering(progress) => 1.0 - simple_easing::cubic_out(progress),
        NotificationPhase::Visible => 0.0,
        NotificationPhase::Leaving(progress) => simple_easing::cubic_in_out(progress),
        NotificationPhase::Expired => 1.0,
    };
    (f32::from(width) * hidden).round() as u16
}

/// Rows needed for `message` wrapped inside a bordered box of `width`
fn toast_height(message: &str, width: u16) -> u16 {
    let inner = usize::from(width.saturating_sub(2).max(1));
    let rows = message.chars().count().div_ceil(inner).max(1);
    rows as u16 + 2
}

pub fn draw_notifications(frame: &mut Frame, app: &App, now: Instant) {
    let viewport = app.state.layout.viewport();
    let width = TOAST_WIDTH.min(viewport.width.saturating_sub(2));
    if width < 4 {
        return;
    }

    let mut y = NAVBAR_HEIGHT;
    for (notification, phase) in app.state.notifier.visible(now) {
        let height = toast_height(&notification.message, width);
        if y + height > viewport.bottom() {
            break;
        }

        let offset = slide_offset(phase, width);
        let x = viewport.width.saturating_sub(width + 1) + offset;
        let area = Rect::new(x, y, width.saturating_sub(offset), height).intersection(viewport);
        y += height;
        if area.width < 3 {
            continue;
        }

        let color = match notification.kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
        };
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(notification.message.clone())
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(color))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                ),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slide_offset_by_phase() {
        assert_eq!(slide_offset(NotificationPhase::Entering(0.0), 40), 40);
        assert_eq!(slide_offset(NotificationPhase::Visible, 40), 0);
        assert_eq!(slide_offset(NotificationPhase::Leaving(1.0), 40), 40);
    }

    #[test]
    fn test_toast_height_wraps_long_messages() {
        assert_eq!(toast_height("short", 44), 3);
        assert_eq!(toast_height(&"x".repeat(84), 44), 4);
    }
}

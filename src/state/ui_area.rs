//! Screen geometry shared by the renderer and mouse hit-testing
//!
//! ```text
//! Row 0-2:    Navbar, drawn over the top of the page viewport
//! Row 0..h-1: Page viewport (scrolls underneath the navbar)
//! Row h-1:    Status bar
//! ```
//!
//! When collapsed, the nav links are replaced by a menu trigger and open as a
//! dropdown below the navbar on the right.

use ratatui::layout::Rect;

use super::content::HERO_BUTTONS;
use super::page::SectionId;

/// Height of the navbar (with borders: top + content + bottom)
pub const NAVBAR_HEIGHT: u16 = 3;
pub const STATUS_BAR_HEIGHT: u16 = 1;
pub const MENU_WIDTH: u16 = 18;
pub const MENU_TRIGGER: &str = "☰";
/// Left indent of page content
pub const CONTENT_INDENT: u16 = 4;
/// Gap between the hero buttons
const HERO_BUTTON_GAP: u16 = 3;

/// Whether `(column, row)` falls inside `rect`
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Label of a hero button as drawn, brackets included
pub fn hero_button_text(label: &str) -> String {
    format!("[ {label} ]")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub width: u16,
    pub height: u16,
}

impl ScreenLayout {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Scrolling page area, everything above the status bar
    pub fn viewport(&self) -> Rect {
        Rect::new(
            0,
            0,
            self.width,
            self.height.saturating_sub(STATUS_BAR_HEIGHT),
        )
    }

    pub fn navbar(&self) -> Rect {
        Rect::new(0, 0, self.width, NAVBAR_HEIGHT.min(self.height))
    }

    pub fn status_bar(&self) -> Rect {
        Rect::new(
            0,
            self.height.saturating_sub(STATUS_BAR_HEIGHT),
            self.width,
            STATUS_BAR_HEIGHT.min(self.height),
        )
    }

    /// Inline nav links, right-aligned inside the navbar
    pub fn nav_links(&self) -> Vec<(SectionId, Rect)> {
        let widths: Vec<u16> = SectionId::ALL
            .iter()
            .map(|id| id.label().chars().count() as u16 + 2)
            .collect();
        let total = widths.iter().sum::<u16>() + widths.len().saturating_sub(1) as u16;
        let mut x = self.width.saturating_sub(total + 2);

        SectionId::ALL
            .iter()
            .zip(widths)
            .map(|(id, width)| {
                let rect = Rect::new(x, 1, width, 1);
                x += width + 1;
                (*id, rect)
            })
            .collect()
    }

    /// The collapsed-menu trigger inside the navbar
    pub fn menu_trigger(&self) -> Rect {
        let width = MENU_TRIGGER.chars().count() as u16 + 2;
        Rect::new(self.width.saturating_sub(width + 2), 1, width, 1)
    }

    /// Dropdown panel, borders included
    pub fn menu(&self) -> Rect {
        let width = MENU_WIDTH.min(self.width);
        Rect::new(
            self.width.saturating_sub(width + 1),
            NAVBAR_HEIGHT,
            width,
            SectionId::ALL.len() as u16 + 2,
        )
    }

    pub fn menu_items(&self) -> Vec<(SectionId, Rect)> {
        let menu = self.menu();
        SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, id)| {
                (
                    *id,
                    Rect::new(
                        menu.x + 1,
                        menu.y + 1 + i as u16,
                        menu.width.saturating_sub(2),
                        1,
                    ),
                )
            })
            .collect()
    }

    /// Column ranges of the hero buttons as `(label, start, width)`
    pub fn hero_buttons(&self) -> Vec<(&'static str, u16, u16)> {
        let mut x = CONTENT_INDENT;
        HERO_BUTTONS
            .iter()
            .map(|label| {
                let width = hero_button_text(label).chars().count() as u16;
                let placed = (*label, x, width);
                x += width + HERO_BUTTON_GAP;
                placed
            })
            .collect()
    }

    /// Page row under a viewport row at the given scroll offset
    pub fn page_row(&self, screen_row: u16, scroll: u16) -> Option<u16> {
        let viewport = self.viewport();
        contains(viewport, 0, screen_row)
            .then(|| scroll.saturating_add(screen_row - viewport.y))
    }
}

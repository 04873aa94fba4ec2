//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod notifications;
mod page;

use std::time::Instant;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    // Page body first, everything else is drawn over it
    page::draw_page(frame, app, now);

    // Fixed navbar over the top rows of the page
    layout::draw_navbar(frame, app);

    if app.state.is_menu_collapsed() && app.state.menu.is_open() {
        layout::draw_menu(frame, app);
    }

    notifications::draw_notifications(frame, app, now);

    // Draw status bar
    layout::draw_status_bar(frame, app);
}

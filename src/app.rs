//! Application state and input dispatch

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::SiteConfig;
use crate::platform::is_submit_modifier;
use crate::state::page::{form_index_at, CONTACT_FORM_HEIGHT, HERO_CTA_ROW};
use crate::state::{
    contains, route_button, AppState, FieldKey, Focus, Form, SectionId, NAVBAR_HEIGHT,
};
use crate::submit::{SimulatedSubmitter, SubmissionController, SubmitOutcome, Submitter};

/// Rows moved per mouse wheel notch
const WHEEL_STEP: i32 = 3;

/// Main application struct
pub struct App {
    /// Page and form state
    pub state: AppState,
    /// Owner of the submit button and the in-flight delivery
    pub submission: SubmissionController,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create the app with the simulated submitter
    pub fn new(config: &SiteConfig) -> Self {
        let submitter = Arc::new(SimulatedSubmitter::new(config.submit_delay()));
        Self::with_submitter(config, submitter)
    }

    pub fn with_submitter(config: &SiteConfig, submitter: Arc<dyn Submitter>) -> Self {
        Self {
            state: AppState::new(config),
            submission: SubmissionController::new(submitter),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the loop should poll at animation rate
    pub fn is_busy(&self, now: Instant) -> bool {
        self.submission.is_pending() || self.state.is_animating(now)
    }

    /// Advance timers: scroll animation, reveals, notifications, submission
    pub fn tick(&mut self, now: Instant) {
        self.state.tick(now);
        if let Some(passed) = self.submission.poll_completion(
            &mut self.state.form,
            &mut self.state.errors,
            &mut self.state.notifier,
            now,
        ) {
            tracing::debug!("Submission settled via {passed:?}");
        }
    }

    /// Single entry point for terminal events
    pub fn handle_event(&mut self, event: Event, now: Instant) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse, now),
            Event::Resize(width, height) => {
                self.handle_resize(width, height);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.state.resize(width, height);
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Escape always dismisses the menu, whatever has focus
        if key.code == KeyCode::Esc {
            self.state.menu.close();
        }

        match self.state.focus {
            Focus::Page => self.handle_page_key(key, now),
            Focus::Form => self.handle_form_key(key, now),
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        let page_step = i32::from(self.state.viewport_height().saturating_sub(2)).max(1);
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.state.scroll_by(page_step),
            KeyCode::PageUp => self.state.scroll_by(-page_step),
            KeyCode::Char('g') | KeyCode::Home => self.state.scroll_to(0),
            KeyCode::Char('G') | KeyCode::End => self.state.scroll_to(self.state.max_scroll()),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                if let Some(id) = SectionId::ALL.get(index) {
                    self.activate_nav_link(*id, now);
                }
            }
            KeyCode::Char('m') => {
                if self.state.is_menu_collapsed() {
                    self.state.menu.toggle();
                }
            }
            KeyCode::Char('b') => self.activate_button("Book Appointment", now),
            KeyCode::Char('e') => self.activate_button("Emergency Care", now),
            KeyCode::Tab | KeyCode::Char('c') => {
                self.state.scroll_to_section(SectionId::Contact, now);
                self.enter_form(0);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_form_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        let state = &mut self.state;
        match key.code {
            KeyCode::Esc => self.leave_form(),
            KeyCode::Tab | KeyCode::Down => state.form.focus_next(&mut state.errors),
            KeyCode::BackTab | KeyCode::Up => state.form.focus_prev(&mut state.errors),
            KeyCode::Char('s') if is_submit_modifier(key.modifiers) => self.submit_form(),
            KeyCode::Enter => {
                if state.form.is_submit_row_active() {
                    self.submit_form();
                } else if let Some(field) = state
                    .form
                    .get_active_field_mut()
                    .filter(|f| f.is_multiline)
                {
                    field.push_char('\n');
                } else {
                    state.form.focus_next(&mut state.errors);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            _ => {}
        }
        // Keep the form on screen while typing
        if self.state.focus == Focus::Form && self.state.smooth_scroll.is_none() {
            self.keep_form_visible(now);
        }
        Ok(())
    }

    /// Handle mouse input
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> Result<()> {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.state.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.state.scroll_by(-WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row, now)
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        let layout = self.state.layout;
        let collapsed = self.state.is_menu_collapsed();
        let on_trigger = collapsed && contains(layout.menu_trigger(), column, row);
        let in_menu = self.state.menu.is_open() && contains(layout.menu(), column, row);

        // Trigger toggles; anything outside trigger and menu closes it
        self.state.menu.handle_click(on_trigger, in_menu);
        if on_trigger {
            return;
        }

        if in_menu {
            if let Some((id, _)) = layout
                .menu_items()
                .into_iter()
                .find(|(_, rect)| contains(*rect, column, row))
            {
                self.activate_nav_link(id, now);
            }
            return;
        }

        if contains(layout.navbar(), column, row) {
            if !collapsed {
                if let Some((id, _)) = layout
                    .nav_links()
                    .into_iter()
                    .find(|(_, rect)| contains(*rect, column, row))
                {
                    self.activate_nav_link(id, now);
                }
            }
            return;
        }

        let Some(page_row) = layout.page_row(row, self.state.scroll) else {
            return;
        };

        if page_row == HERO_CTA_ROW {
            if let Some((label, _, _)) = layout
                .hero_buttons()
                .into_iter()
                .find(|(_, start, width)| column >= *start && column < start + width)
            {
                self.activate_button(label, now);
                return;
            }
        }

        let form_top = self.state.page.contact_form_top();
        let index = page_row
            .checked_sub(form_top)
            .filter(|rel| *rel < CONTACT_FORM_HEIGHT)
            .and_then(form_index_at);
        match index {
            Some(index) => {
                self.enter_form(index);
                if self.state.form.is_submit_row_active() {
                    self.submit_form();
                }
            }
            None => {
                if self.state.focus == Focus::Form {
                    self.leave_form();
                }
            }
        }
    }

    /// Nav link activation: smooth scroll to the section and close the menu
    fn activate_nav_link(&mut self, id: SectionId, now: Instant) {
        if self.state.scroll_to_section(id, now).is_some() {
            self.state.menu.close();
        }
    }

    /// Call-to-action buttons scroll to wherever their label routes
    fn activate_button(&mut self, label: &str, now: Instant) {
        match route_button(label) {
            Some(id) => {
                tracing::debug!("Button {label:?} routes to #{}", id.anchor());
                self.state.scroll_to_section(id, now);
            }
            None => tracing::debug!("Button {label:?} has no route"),
        }
    }

    fn enter_form(&mut self, index: usize) {
        let state = &mut self.state;
        if state.focus == Focus::Form {
            state.form.focus(index, &mut state.errors);
        } else {
            state.focus = Focus::Form;
            state.form.set_active_field(index);
        }
    }

    /// Return focus to the page, blurring the active input
    fn leave_form(&mut self) {
        let state = &mut self.state;
        if let Some(key) = state.form.active_key() {
            state.form.blur(key, &mut state.errors);
        }
        state.focus = Focus::Page;
    }

    fn submit_form(&mut self) {
        let outcome = self
            .submission
            .submit(&self.state.form, &mut self.state.errors);
        if let SubmitOutcome::Rejected(failures) = &outcome {
            // Move focus to the first field needing attention
            if let Some(first) = failures.first() {
                let index = FieldKey::ALL
                    .iter()
                    .position(|k| *k == first.field)
                    .unwrap_or(0);
                self.state.form.set_active_field(index);
            }
        }
    }

    /// Scroll just enough to keep the contact form inside the viewport
    fn keep_form_visible(&mut self, now: Instant) {
        let form_top = self.state.page.contact_form_top();
        let form_bottom = form_top + CONTACT_FORM_HEIGHT;
        let viewport = self.state.viewport_height();
        let scroll = self.state.scroll;
        if form_top < scroll + NAVBAR_HEIGHT || form_bottom > scroll + viewport {
            self.state.scroll_to_section(SectionId::Contact, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SUBMIT_ROW;
    use crate::submit::SubmissionState;
    use std::time::Duration;

    fn app() -> App {
        let mut app = App::new(&SiteConfig::default());
        app.handle_resize(120, 24);
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(key(code), Instant::now()).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn click(app: &mut App, column: u16, row: u16) {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(mouse, Instant::now()).unwrap();
    }

    fn settle_scroll(app: &mut App) {
        app.tick(Instant::now() + Duration::from_secs(5));
    }

    mod keys {
        use super::*;

        #[test]
        fn test_ctrl_c_quits() {
            let mut app = app();
            app.handle_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                Instant::now(),
            )
            .unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_q_quits_from_page_only() {
            let mut app = app();
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Char('q'));
            assert!(!app.should_quit());
            assert_eq!(app.state.form.name.as_text(), "q");

            press(&mut app, KeyCode::Esc);
            press(&mut app, KeyCode::Char('q'));
            assert!(app.should_quit());
        }

        #[test]
        fn test_number_keys_scroll_to_sections() {
            let mut app = app();
            press(&mut app, KeyCode::Char('2'));
            settle_scroll(&mut app);
            let services = app.state.page.section_top(SectionId::Services).unwrap();
            assert_eq!(app.state.scroll, services - 3);
            assert_eq!(app.state.active_section(), SectionId::Services);
        }

        #[test]
        fn test_book_appointment_routes_to_contact() {
            let mut app = app();
            press(&mut app, KeyCode::Char('b'));
            settle_scroll(&mut app);
            assert_eq!(app.state.active_section(), SectionId::Contact);
        }

        #[test]
        fn test_escape_closes_menu() {
            let mut app = app();
            app.handle_resize(60, 40);
            press(&mut app, KeyCode::Char('m'));
            assert!(app.state.menu.is_open());
            press(&mut app, KeyCode::Esc);
            assert!(!app.state.menu.is_open());
        }

        #[test]
        fn test_menu_key_ignored_when_links_inline() {
            let mut app = app();
            press(&mut app, KeyCode::Char('m'));
            assert!(!app.state.menu.is_open());
        }
    }

    mod form {
        use super::*;

        #[test]
        fn test_typing_fills_active_field() {
            let mut app = app();
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.state.focus, Focus::Form);
            type_text(&mut app, "Jo");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "jo@example.com");
            press(&mut app, KeyCode::Backspace);

            assert_eq!(app.state.form.name.as_text(), "Jo");
            assert_eq!(app.state.form.email.as_text(), "jo@example.co");
        }

        #[test]
        fn test_tab_away_from_invalid_field_shows_error() {
            let mut app = app();
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "A");
            press(&mut app, KeyCode::Tab);
            assert!(app.state.errors.is_visible("name"));
        }

        #[test]
        fn test_escape_blurs_active_field() {
            let mut app = app();
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "bad");
            press(&mut app, KeyCode::Esc);
            assert_eq!(app.state.focus, Focus::Page);
            assert!(app.state.errors.is_visible("email"));
        }

        #[test]
        fn test_enter_in_message_inserts_newline() {
            let mut app = app();
            press(&mut app, KeyCode::Tab);
            app.state.form.set_active_field(2);
            type_text(&mut app, "hi");
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.form.message.as_text(), "hi\n");
        }

        #[test]
        fn test_invalid_submit_shows_all_errors_and_focuses_first() {
            let mut app = app();
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "bad");
            app.handle_key(
                KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
                Instant::now(),
            )
            .unwrap();

            assert_eq!(app.state.errors.visible_count(), 3);
            assert_eq!(app.submission.state(), SubmissionState::Idle);
            assert_eq!(app.state.form.active_key(), Some(FieldKey::Name));
        }

        #[tokio::test(start_paused = true)]
        async fn test_valid_submit_via_keyboard_completes() {
            let mut app = app();
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "Jo");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "jo@example.com");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "Hello, this is a test message.");
            press(&mut app, KeyCode::Tab);
            assert!(app.state.form.is_submit_row_active());

            press(&mut app, KeyCode::Enter);
            assert!(app.submission.is_pending());
            assert!(!app.submission.button().is_enabled());

            // Hammering submit while pending changes nothing
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.submission.completions_scheduled(), 1);

            tokio::time::sleep(Duration::from_millis(2001)).await;
            app.tick(Instant::now());

            assert_eq!(app.submission.state(), SubmissionState::Idle);
            assert!(app.submission.button().is_enabled());
            assert_eq!(app.state.form.name.as_text(), "");
            assert_eq!(app.state.notifier.len(), 1);
        }
    }

    mod mouse {
        use super::*;

        #[test]
        fn test_click_nav_link_scrolls() {
            let mut app = app();
            let (_, rect) = app
                .state
                .layout
                .nav_links()
                .into_iter()
                .find(|(id, _)| *id == SectionId::About)
                .unwrap();
            click(&mut app, rect.x, rect.y);
            settle_scroll(&mut app);
            assert_eq!(app.state.active_section(), SectionId::About);
        }

        #[test]
        fn test_trigger_toggles_and_outside_click_closes() {
            let mut app = app();
            app.handle_resize(60, 40);
            let trigger = app.state.layout.menu_trigger();

            click(&mut app, trigger.x, trigger.y);
            assert!(app.state.menu.is_open());

            click(&mut app, 1, 20);
            assert!(!app.state.menu.is_open());
        }

        #[test]
        fn test_menu_item_click_scrolls_and_closes() {
            let mut app = app();
            app.handle_resize(60, 40);
            let trigger = app.state.layout.menu_trigger();
            click(&mut app, trigger.x, trigger.y);

            let (_, item) = app
                .state
                .layout
                .menu_items()
                .into_iter()
                .find(|(id, _)| *id == SectionId::Doctors)
                .unwrap();
            click(&mut app, item.x, item.y);

            assert!(!app.state.menu.is_open());
            settle_scroll(&mut app);
            assert_eq!(app.state.active_section(), SectionId::Doctors);
        }

        #[test]
        fn test_hero_button_click_routes_to_contact() {
            let mut app = app();
            let (_, start, _) = app.state.layout.hero_buttons()[1];
            click(&mut app, start + 1, HERO_CTA_ROW);
            settle_scroll(&mut app);
            assert_eq!(app.state.active_section(), SectionId::Contact);
        }

        #[test]
        fn test_click_form_row_focuses_field() {
            let mut app = app();
            app.state.scroll_to(app.state.max_scroll());
            let form_top = app.state.page.contact_form_top();
            let screen_row = form_top - app.state.scroll + 4;

            click(&mut app, 10, screen_row);
            assert_eq!(app.state.focus, Focus::Form);
            assert_eq!(app.state.form.active_key(), Some(FieldKey::Email));
        }

        #[test]
        fn test_click_submit_with_empty_form_shows_errors() {
            let mut app = app();
            app.state.scroll_to(app.state.max_scroll());
            let form_top = app.state.page.contact_form_top();
            let screen_row = form_top - app.state.scroll + 13;

            click(&mut app, 10, screen_row);
            assert_eq!(app.state.form.active_field(), 0);
            assert_eq!(app.state.errors.visible_count(), 3);
            assert_ne!(app.state.form.active_field(), SUBMIT_ROW);
        }

        #[test]
        fn test_wheel_scrolls() {
            let mut app = app();
            let mouse = MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 0,
                row: 10,
                modifiers: KeyModifiers::NONE,
            };
            app.handle_mouse(mouse, Instant::now()).unwrap();
            assert_eq!(app.state.scroll, WHEEL_STEP as u16);
        }
    }

    #[test]
    fn test_resize_event_updates_layout() {
        let mut app = app();
        app.handle_event(Event::Resize(70, 30), Instant::now()).unwrap();
        assert_eq!(app.state.layout.width, 70);
        assert!(app.state.is_menu_collapsed());
    }
}

//! Page-level UI state: scroll position, collaborators and the contact form

use std::time::{Duration, Instant};

use super::forms::{ContactForm, ErrorPresenter};
use super::navigation::{navbar_scrolled, scroll_target, MobileMenu, NavHighlighter, SmoothScroll};
use super::notifications::Notifier;
use super::page::{Page, SectionId};
use super::reveal::ScrollRevealObserver;
use super::ui_area::ScreenLayout;
use crate::config::SiteConfig;

/// Where keyboard input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Page,
    Form,
}

/// Tunables resolved from the config once at startup
#[derive(Debug, Clone, Copy)]
pub struct PageSettings {
    pub header_offset: u16,
    pub menu_breakpoint: u16,
    pub navbar_scroll_threshold: u16,
    pub smooth_scroll: Duration,
}

impl PageSettings {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            header_offset: config.header_offset(),
            menu_breakpoint: config.menu_breakpoint(),
            navbar_scroll_threshold: config.navbar_scroll_threshold(),
            smooth_scroll: config.smooth_scroll_duration(),
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub page: Page,
    pub settings: PageSettings,
    pub layout: ScreenLayout,
    pub scroll: u16,
    pub smooth_scroll: Option<SmoothScroll>,
    pub highlighter: NavHighlighter,
    pub menu: MobileMenu,
    pub reveal: ScrollRevealObserver,
    pub focus: Focus,
    pub form: ContactForm,
    pub errors: ErrorPresenter,
    pub notifier: Notifier,
}

impl AppState {
    pub fn new(config: &SiteConfig) -> Self {
        let page = Page::clinic();
        let reveal = ScrollRevealObserver::new(
            page.reveal_blocks(),
            config.reveal_threshold(),
            config.reveal_bottom_margin(),
        );
        Self {
            page,
            settings: PageSettings::from_config(config),
            layout: ScreenLayout::new(80, 24),
            scroll: 0,
            smooth_scroll: None,
            highlighter: NavHighlighter {
                lookahead: config.highlight_lookahead(),
            },
            menu: MobileMenu::default(),
            reveal,
            focus: Focus::Page,
            form: ContactForm::new(),
            errors: ErrorPresenter::for_contact_form(),
            notifier: Notifier::new(config.notification_display(), config.notification_exit()),
        }
    }

    pub fn viewport_height(&self) -> u16 {
        self.layout.viewport().height
    }

    pub fn max_scroll(&self) -> u16 {
        self.page.max_scroll(self.viewport_height())
    }

    pub fn active_section(&self) -> SectionId {
        self.highlighter.active_section(&self.page, self.scroll)
    }

    pub fn is_navbar_scrolled(&self) -> bool {
        navbar_scrolled(self.scroll, self.settings.navbar_scroll_threshold)
    }

    pub fn is_menu_collapsed(&self) -> bool {
        super::navigation::is_collapsed(self.layout.width, self.settings.menu_breakpoint)
    }

    /// Scroll immediately by `delta` rows, cancelling any animation
    pub fn scroll_by(&mut self, delta: i32) {
        self.smooth_scroll = None;
        let target = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = target as u16;
    }

    /// Jump to an absolute offset, cancelling any animation
    pub fn scroll_to(&mut self, offset: u16) {
        self.smooth_scroll = None;
        self.scroll = offset.min(self.max_scroll());
    }

    /// Animate towards a section, offset by the fixed header. Returns the target
    /// offset, or `None` when the section does not exist.
    pub fn scroll_to_section(&mut self, id: SectionId, now: Instant) -> Option<u16> {
        let top = self.page.section_top(id)?;
        let target = scroll_target(top, self.settings.header_offset, self.max_scroll());
        tracing::debug!("Smooth scrolling to #{} (offset {target})", id.anchor());
        self.smooth_scroll = Some(SmoothScroll::new(
            self.scroll,
            target,
            now,
            self.settings.smooth_scroll,
        ));
        Some(target)
    }

    /// Advance the scroll animation and reveal newly visible blocks
    pub fn tick(&mut self, now: Instant) {
        if let Some(anim) = self.smooth_scroll {
            let (offset, done) = anim.position(now);
            self.scroll = offset.min(self.max_scroll());
            if done {
                self.smooth_scroll = None;
            }
        }
        let viewport_height = self.viewport_height();
        self.reveal.observe(self.scroll, viewport_height, now);
        self.notifier.tick(now);
    }

    /// Apply a new terminal size
    pub fn resize(&mut self, width: u16, height: u16) {
        self.layout = ScreenLayout::new(width, height);
        self.menu.handle_resize(width, self.settings.menu_breakpoint);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// True while something on screen changes without input
    pub fn is_animating(&self, now: Instant) -> bool {
        self.smooth_scroll.is_some() || !self.notifier.is_empty() || self.reveal.is_animating(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let mut state = AppState::new(&SiteConfig::default());
        state.resize(120, 30);
        state
    }

    #[test]
    fn test_new_state_starts_at_top_on_page() {
        let state = state();
        assert_eq!(state.scroll, 0);
        assert_eq!(state.focus, Focus::Page);
        assert_eq!(state.active_section(), SectionId::Home);
        assert!(!state.is_navbar_scrolled());
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut state = state();
        state.scroll_by(-5);
        assert_eq!(state.scroll, 0);
        state.scroll_by(10_000);
        assert_eq!(state.scroll, state.max_scroll());
    }

    #[test]
    fn test_scroll_to_section_animates_to_offset_target() {
        let mut state = state();
        let start = Instant::now();
        let contact_top = state.page.section_top(SectionId::Contact).unwrap();

        let target = state.scroll_to_section(SectionId::Contact, start).unwrap();
        assert_eq!(target, (contact_top - 3).min(state.max_scroll()));
        assert!(state.smooth_scroll.is_some());

        state.tick(start + Duration::from_secs(1));
        assert_eq!(state.scroll, target);
        assert!(state.smooth_scroll.is_none());
    }

    #[test]
    fn test_manual_scroll_cancels_animation() {
        let mut state = state();
        state.scroll_to_section(SectionId::About, Instant::now());
        state.scroll_by(1);
        assert!(state.smooth_scroll.is_none());
        assert_eq!(state.scroll, 1);
    }

    #[test]
    fn test_tick_reveals_blocks_in_view() {
        let mut state = state();
        let now = Instant::now();
        state.scroll_to(state.page.section_top(SectionId::Services).unwrap());
        state.tick(now);
        assert!(state.reveal.blocks().iter().any(|b| b.is_revealed()));
    }

    #[test]
    fn test_widening_closes_menu() {
        let mut state = AppState::new(&SiteConfig::default());
        state.resize(60, 30);
        assert!(state.is_menu_collapsed());
        state.menu.toggle();

        state.resize(140, 30);
        assert!(!state.menu.is_open());
        assert!(!state.is_menu_collapsed());
    }

    #[test]
    fn test_resize_clamps_scroll() {
        let mut state = state();
        state.scroll_by(10_000);
        state.resize(120, 200);
        assert_eq!(state.scroll, state.max_scroll());
    }
}

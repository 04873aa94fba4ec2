//! Navigation collaborators: active-link highlighting, smooth scrolling,
//! the collapsible menu and call-to-action routing.
//!
//! None of these share state with each other or with the contact form.

use std::time::{Duration, Instant};

use super::page::{Page, SectionId};

/// Picks the nav item matching the section currently scrolled to
#[derive(Debug, Clone, Copy)]
pub struct NavHighlighter {
    /// Rows before its top at which a section already counts as current
    pub lookahead: u16,
}

impl NavHighlighter {
    /// The last section whose top, minus the look-ahead, is at or above `scroll`
    pub fn active_section(&self, page: &Page, scroll: u16) -> SectionId {
        page.sections()
            .iter()
            .filter(|s| scroll >= s.top.saturating_sub(self.lookahead))
            .last()
            .map(|s| s.id)
            .unwrap_or(SectionId::Home)
    }
}

/// Whether the navbar switches to its scrolled style
pub fn navbar_scrolled(scroll: u16, threshold: u16) -> bool {
    scroll > threshold
}

/// Scroll offset that brings a section's top just below the fixed header
pub fn scroll_target(section_top: u16, header_offset: u16, max_scroll: u16) -> u16 {
    section_top.saturating_sub(header_offset).min(max_scroll)
}

/// An in-progress animated scroll between two offsets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    pub from: u16,
    pub to: u16,
    pub started_at: Instant,
    pub duration: Duration,
}

impl SmoothScroll {
    pub fn new(from: u16, to: u16, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// Scroll offset at `now` and whether the animation has finished
    pub fn position(&self, now: Instant) -> (u16, bool) {
        let elapsed = now.saturating_duration_since(self.started_at);
        if self.duration.is_zero() || elapsed >= self.duration {
            return (self.to, true);
        }
        let linear = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = simple_easing::cubic_in_out(linear);
        let delta = f32::from(self.to) - f32::from(self.from);
        let offset = (f32::from(self.from) + delta * eased).round();
        (offset.clamp(0.0, f32::from(u16::MAX)) as u16, false)
    }
}

/// Open/closed state of the collapsed navigation menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::debug!("Menu toggled, open={}", self.open);
    }

    pub fn close(&mut self) {
        if self.open {
            tracing::debug!("Menu closed");
        }
        self.open = false;
    }

    /// A click anywhere outside both the trigger and the menu closes it
    pub fn handle_click(&mut self, on_trigger: bool, in_menu: bool) {
        if on_trigger {
            self.toggle();
        } else if !in_menu {
            self.close();
        }
    }

    /// Widening past the breakpoint closes the menu
    pub fn handle_resize(&mut self, width: u16, breakpoint: u16) {
        if width > breakpoint {
            self.close();
        }
    }
}

/// Whether the nav links collapse behind the menu trigger at this width
pub fn is_collapsed(width: u16, breakpoint: u16) -> bool {
    width <= breakpoint
}

/// Section a button leads to, judged by its label
pub fn route_button(label: &str) -> Option<SectionId> {
    let label = label.to_lowercase();
    if label.contains("appointment") || label.contains("emergency") {
        Some(SectionId::Contact)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod highlighter {
        use super::*;

        #[test]
        fn test_top_of_page_is_home() {
            let page = Page::clinic();
            let nav = NavHighlighter { lookahead: 8 };
            assert_eq!(nav.active_section(&page, 0), SectionId::Home);
        }

        #[test]
        fn test_section_becomes_active_within_lookahead() {
            let page = Page::clinic();
            let nav = NavHighlighter { lookahead: 8 };
            let services = page.section_top(SectionId::Services).unwrap();

            assert_eq!(nav.active_section(&page, services - 9), SectionId::Home);
            assert_eq!(nav.active_section(&page, services - 8), SectionId::Services);
            assert_eq!(nav.active_section(&page, services), SectionId::Services);
        }

        #[test]
        fn test_bottom_of_page_is_contact() {
            let page = Page::clinic();
            let nav = NavHighlighter { lookahead: 8 };
            assert_eq!(nav.active_section(&page, page.height()), SectionId::Contact);
        }
    }

    #[test]
    fn test_navbar_scrolled_threshold() {
        assert!(!navbar_scrolled(0, 2));
        assert!(!navbar_scrolled(2, 2));
        assert!(navbar_scrolled(3, 2));
    }

    mod smooth_scroll {
        use super::*;

        #[test]
        fn test_target_subtracts_header_offset() {
            assert_eq!(scroll_target(40, 3, 100), 37);
        }

        #[test]
        fn test_target_clamps_to_scroll_range() {
            assert_eq!(scroll_target(2, 3, 100), 0);
            assert_eq!(scroll_target(90, 3, 60), 60);
        }

        #[test]
        fn test_position_starts_at_origin_and_finishes_at_target() {
            let start = Instant::now();
            let anim = SmoothScroll::new(10, 50, start, Duration::from_millis(400));

            assert_eq!(anim.position(start), (10, false));

            let (mid, done) = anim.position(start + Duration::from_millis(200));
            assert!(!done);
            assert!(mid > 10 && mid < 50, "mid = {mid}");

            assert_eq!(anim.position(start + Duration::from_millis(400)), (50, true));
        }

        #[test]
        fn test_scrolling_upwards() {
            let start = Instant::now();
            let anim = SmoothScroll::new(50, 0, start, Duration::from_millis(400));
            let (mid, _) = anim.position(start + Duration::from_millis(200));
            assert!(mid < 50);
            assert_eq!(anim.position(start + Duration::from_secs(1)), (0, true));
        }

        #[test]
        fn test_zero_duration_jumps() {
            let start = Instant::now();
            let anim = SmoothScroll::new(0, 30, start, Duration::ZERO);
            assert_eq!(anim.position(start), (30, true));
        }
    }

    mod menu {
        use super::*;

        #[test]
        fn test_starts_closed() {
            assert!(!MobileMenu::default().is_open());
        }

        #[test]
        fn test_trigger_click_toggles() {
            let mut menu = MobileMenu::default();
            menu.handle_click(true, false);
            assert!(menu.is_open());
            menu.handle_click(true, false);
            assert!(!menu.is_open());
        }

        #[test]
        fn test_click_inside_menu_keeps_it_open() {
            let mut menu = MobileMenu::default();
            menu.toggle();
            menu.handle_click(false, true);
            assert!(menu.is_open());
        }

        #[test]
        fn test_outside_click_closes() {
            let mut menu = MobileMenu::default();
            menu.toggle();
            menu.handle_click(false, false);
            assert!(!menu.is_open());
        }

        #[test]
        fn test_resize_past_breakpoint_closes() {
            let mut menu = MobileMenu::default();
            menu.toggle();
            menu.handle_resize(100, 100);
            assert!(menu.is_open());
            menu.handle_resize(101, 100);
            assert!(!menu.is_open());
        }

        #[test]
        fn test_collapsed_at_or_below_breakpoint() {
            assert!(is_collapsed(80, 100));
            assert!(is_collapsed(100, 100));
            assert!(!is_collapsed(101, 100));
        }
    }

    #[test]
    fn test_route_button() {
        assert_eq!(route_button("Book Appointment"), Some(SectionId::Contact));
        assert_eq!(route_button("EMERGENCY CARE"), Some(SectionId::Contact));
        assert_eq!(route_button("Learn More"), None);
    }
}

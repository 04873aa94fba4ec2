//! Page geometry: sections, observed blocks and fixed row offsets
//!
//! Every position is a row offset from the top of the page. The renderer
//! produces exactly [`Page::height`] lines so these offsets line up with what
//! is drawn.

use super::content::{DOCTORS, SERVICES, STATS};
use super::forms::SUBMIT_ROW;
use super::reveal::{BlockKind, RevealBlock};

pub const HERO_HEIGHT: u16 = 14;
pub const SECTION_HEADER_HEIGHT: u16 = 3;
pub const CARD_HEIGHT: u16 = 4;
pub const ABOUT_TEXT_HEIGHT: u16 = 5;
pub const STAT_HEIGHT: u16 = 4;
pub const CONTACT_DETAILS_HEIGHT: u16 = 4;
pub const CONTACT_FORM_HEIGHT: u16 = 15;
pub const FOOTER_HEIGHT: u16 = 3;

/// Row of the hero call-to-action buttons, relative to the page top
pub const HERO_CTA_ROW: u16 = 9;

/// Rows inside the contact form block, relative to its top
pub mod form_rows {
    pub const NAME: u16 = 0;
    pub const EMAIL: u16 = 3;
    pub const MESSAGE: u16 = 6;
    pub const MESSAGE_INPUT_HEIGHT: u16 = 4;
    pub const SUBMIT: u16 = 13;
}

/// Map a row inside the contact form block to a form focus index
pub fn form_index_at(row: u16) -> Option<usize> {
    match row {
        0..=2 => Some(0),
        3..=5 => Some(1),
        6..=11 => Some(2),
        form_rows::SUBMIT => Some(SUBMIT_ROW),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Services,
    Doctors,
    About,
    Contact,
}

impl SectionId {
    /// Sections in page (and nav) order
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Services,
        SectionId::Doctors,
        SectionId::About,
        SectionId::Contact,
    ];

    /// Anchor id, as used by nav links
    pub const fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Services => "services",
            SectionId::Doctors => "doctors",
            SectionId::About => "about",
            SectionId::Contact => "contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Services => "Services",
            SectionId::Doctors => "Doctors",
            SectionId::About => "About",
            SectionId::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub top: u16,
    pub height: u16,
}

#[derive(Debug, Clone)]
pub struct Page {
    sections: Vec<Section>,
    height: u16,
}

impl Page {
    /// Layout of the clinic page
    pub fn clinic() -> Self {
        let heights = [
            (SectionId::Home, HERO_HEIGHT),
            (
                SectionId::Services,
                SECTION_HEADER_HEIGHT + CARD_HEIGHT * SERVICES.len() as u16,
            ),
            (
                SectionId::Doctors,
                SECTION_HEADER_HEIGHT + CARD_HEIGHT * DOCTORS.len() as u16,
            ),
            (
                SectionId::About,
                SECTION_HEADER_HEIGHT + ABOUT_TEXT_HEIGHT + STAT_HEIGHT,
            ),
            (
                SectionId::Contact,
                SECTION_HEADER_HEIGHT + CONTACT_DETAILS_HEIGHT + CONTACT_FORM_HEIGHT,
            ),
        ];

        let mut top = 0;
        let sections = heights
            .into_iter()
            .map(|(id, height)| {
                let section = Section { id, top, height };
                top += height;
                section
            })
            .collect();

        Self {
            sections,
            height: top + FOOTER_HEIGHT,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_top(&self, id: SectionId) -> Option<u16> {
        self.section(id).map(|s| s.top)
    }

    /// Total number of rows, footer included
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Largest scroll offset that still fills a viewport of `viewport_height`
    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.height.saturating_sub(viewport_height)
    }

    /// Top row of the contact form block
    pub fn contact_form_top(&self) -> u16 {
        self.section_top(SectionId::Contact).unwrap_or_default()
            + SECTION_HEADER_HEIGHT
            + CONTACT_DETAILS_HEIGHT
    }

    /// Blocks observed for the reveal animation, in page order
    pub fn reveal_blocks(&self) -> Vec<RevealBlock> {
        let mut blocks = Vec::new();

        if let Some(top) = self.section_top(SectionId::Services) {
            let first = top + SECTION_HEADER_HEIGHT;
            blocks.extend((0..SERVICES.len() as u16).map(|i| {
                RevealBlock::new(BlockKind::ServiceCard, first + i * CARD_HEIGHT, CARD_HEIGHT)
            }));
        }

        if let Some(top) = self.section_top(SectionId::Doctors) {
            let first = top + SECTION_HEADER_HEIGHT;
            blocks.extend((0..DOCTORS.len() as u16).map(|i| {
                RevealBlock::new(BlockKind::DoctorCard, first + i * CARD_HEIGHT, CARD_HEIGHT)
            }));
        }

        if let Some(top) = self.section_top(SectionId::About) {
            let text_top = top + SECTION_HEADER_HEIGHT;
            blocks.push(RevealBlock::new(
                BlockKind::AboutText,
                text_top,
                ABOUT_TEXT_HEIGHT,
            ));
            let stats_top = text_top + ABOUT_TEXT_HEIGHT;
            blocks.extend(
                (0..STATS.len()).map(|_| RevealBlock::new(BlockKind::Stat, stats_top, STAT_HEIGHT)),
            );
        }

        blocks.push(RevealBlock::new(
            BlockKind::ContactForm,
            self.contact_form_top(),
            CONTACT_FORM_HEIGHT,
        ));

        blocks
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::clinic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_contiguous_and_ordered() {
        let page = Page::clinic();
        let ids: Vec<SectionId> = page.sections().iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());

        let mut expected_top = 0;
        for section in page.sections() {
            assert_eq!(section.top, expected_top);
            expected_top += section.height;
        }
        assert_eq!(page.height(), expected_top + FOOTER_HEIGHT);
    }

    #[test]
    fn test_max_scroll_saturates() {
        let page = Page::clinic();
        assert_eq!(page.max_scroll(page.height() + 10), 0);
        assert_eq!(page.max_scroll(10), page.height() - 10);
    }

    #[test]
    fn test_reveal_blocks_cover_observed_kinds() {
        let page = Page::clinic();
        let blocks = page.reveal_blocks();
        let count = |kind| blocks.iter().filter(|b| b.kind == kind).count();

        assert_eq!(count(BlockKind::ServiceCard), SERVICES.len());
        assert_eq!(count(BlockKind::DoctorCard), DOCTORS.len());
        assert_eq!(count(BlockKind::Stat), STATS.len());
        assert_eq!(count(BlockKind::AboutText), 1);
        assert_eq!(count(BlockKind::ContactForm), 1);
        assert!(blocks.iter().all(|b| b.revealed_at.is_none()));
    }

    #[test]
    fn test_contact_form_sits_inside_contact_section() {
        let page = Page::clinic();
        let contact = page.section(SectionId::Contact).unwrap();
        let form_top = page.contact_form_top();
        assert!(form_top > contact.top);
        assert_eq!(form_top + CONTACT_FORM_HEIGHT, contact.top + contact.height);
    }

    #[test]
    fn test_form_index_at_rows() {
        assert_eq!(form_index_at(form_rows::NAME), Some(0));
        assert_eq!(form_index_at(form_rows::EMAIL + 1), Some(1));
        assert_eq!(form_index_at(form_rows::MESSAGE + 3), Some(2));
        assert_eq!(form_index_at(form_rows::SUBMIT), Some(SUBMIT_ROW));
        assert_eq!(form_index_at(12), None);
        assert_eq!(form_index_at(14), None);
    }
}

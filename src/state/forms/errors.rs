//! Inline error slots shown under each contact form input

use std::collections::BTreeMap;

use super::field::FieldKey;

/// Maps a slot identifier to the message currently shown in it.
///
/// An empty message means the slot is hidden. Only the slots registered at
/// construction exist; calls naming any other slot do nothing.
#[derive(Debug, Clone)]
pub struct ErrorPresenter {
    slots: BTreeMap<&'static str, String>,
}

impl ErrorPresenter {
    pub fn new(slot_ids: &[&'static str]) -> Self {
        Self {
            slots: slot_ids.iter().map(|id| (*id, String::new())).collect(),
        }
    }

    /// Presenter with one slot per contact form field
    pub fn for_contact_form() -> Self {
        let ids: Vec<&'static str> = FieldKey::ALL.iter().map(|k| k.as_str()).collect();
        Self::new(&ids)
    }

    pub fn show_error(&mut self, slot_id: &str, message: &str) {
        match self.slots.get_mut(slot_id) {
            Some(slot) => {
                if slot != message {
                    *slot = message.to_string();
                }
            }
            None => tracing::debug!("Ignoring error for unknown slot {slot_id:?}"),
        }
    }

    pub fn clear_error(&mut self, slot_id: &str) {
        if let Some(slot) = self.slots.get_mut(slot_id) {
            slot.clear();
        }
    }

    pub fn clear_all_errors(&mut self) {
        self.slots.values_mut().for_each(String::clear);
    }

    /// Message shown in a slot, `None` when hidden or unknown
    pub fn message(&self, slot_id: &str) -> Option<&str> {
        self.slots
            .get(slot_id)
            .filter(|m| !m.is_empty())
            .map(String::as_str)
    }

    pub fn is_visible(&self, slot_id: &str) -> bool {
        self.message(slot_id).is_some()
    }

    /// Number of slots currently showing a message
    pub fn visible_count(&self) -> usize {
        self.slots.values().filter(|m| !m.is_empty()).count()
    }
}

impl Default for ErrorPresenter {
    fn default() -> Self {
        Self::for_contact_form()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_presenter_has_no_visible_errors() {
        let presenter = ErrorPresenter::for_contact_form();
        assert_eq!(presenter.visible_count(), 0);
        assert!(presenter.message("name").is_none());
    }

    #[test]
    fn test_show_error_sets_message() {
        let mut presenter = ErrorPresenter::for_contact_form();
        presenter.show_error("email", "Please enter a valid email address");
        assert_eq!(
            presenter.message("email"),
            Some("Please enter a valid email address")
        );
        assert!(presenter.is_visible("email"));
        assert_eq!(presenter.visible_count(), 1);
    }

    #[test]
    fn test_show_error_twice_is_idempotent() {
        let mut presenter = ErrorPresenter::for_contact_form();
        presenter.show_error("name", "bad");
        presenter.show_error("name", "bad");
        assert_eq!(presenter.message("name"), Some("bad"));
        assert_eq!(presenter.visible_count(), 1);
    }

    #[test]
    fn test_clear_error_hides_slot() {
        let mut presenter = ErrorPresenter::for_contact_form();
        presenter.show_error("message", "too short");
        presenter.clear_error("message");
        assert!(!presenter.is_visible("message"));
    }

    #[test]
    fn test_clear_all_errors_twice_leaves_all_empty() {
        let mut presenter = ErrorPresenter::for_contact_form();
        presenter.show_error("name", "a");
        presenter.show_error("email", "b");
        presenter.show_error("message", "c");

        presenter.clear_all_errors();
        assert_eq!(presenter.visible_count(), 0);

        presenter.clear_all_errors();
        assert_eq!(presenter.visible_count(), 0);
        for key in FieldKey::ALL {
            assert!(presenter.message(key.as_str()).is_none());
        }
    }

    #[test]
    fn test_unknown_slot_is_ignored() {
        let mut presenter = ErrorPresenter::for_contact_form();
        presenter.show_error("phone", "nope");
        presenter.clear_error("phone");
        assert!(presenter.message("phone").is_none());
        assert_eq!(presenter.visible_count(), 0);
    }
}

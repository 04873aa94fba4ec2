//! Contact form state and focus handling

use super::errors::ErrorPresenter;
use super::field::{FieldKey, FormField};
use super::validation::validate_field;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// Index of the submit button row
pub const SUBMIT_ROW: usize = 3;

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub message: FormField,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text(FieldKey::Name, "Full Name", false),
            email: FormField::text(FieldKey::Email, "Email Address", false),
            message: FormField::text(FieldKey::Message, "Message", true),
            active_field_index: 0,
        }
    }

    pub fn field(&self, key: FieldKey) -> &FormField {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Email => &self.email,
            FieldKey::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, key: FieldKey) -> &mut FormField {
        match key {
            FieldKey::Name => &mut self.name,
            FieldKey::Email => &mut self.email,
            FieldKey::Message => &mut self.message,
        }
    }

    /// Key of the focused input, `None` on the submit row
    pub fn active_key(&self) -> Option<FieldKey> {
        FieldKey::ALL.get(self.active_field_index).copied()
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Empty every input
    pub fn reset(&mut self) {
        for key in FieldKey::ALL {
            self.field_mut(key).clear();
        }
    }

    /// Move focus to `index`, running blur validation on the input being left
    pub fn focus(&mut self, index: usize, errors: &mut ErrorPresenter) {
        let previous = self.active_key();
        self.set_active_field(index);
        self.blur_if_left(previous, errors);
    }

    /// Tab order with wraparound, blurring the input being left
    pub fn focus_next(&mut self, errors: &mut ErrorPresenter) {
        let previous = self.active_key();
        self.next_field();
        self.blur_if_left(previous, errors);
    }

    pub fn focus_prev(&mut self, errors: &mut ErrorPresenter) {
        let previous = self.active_key();
        self.prev_field();
        self.blur_if_left(previous, errors);
    }

    fn blur_if_left(&self, previous: Option<FieldKey>, errors: &mut ErrorPresenter) {
        if previous != self.active_key() {
            if let Some(key) = previous {
                self.blur(key, errors);
            }
        }
    }

    /// Blur validation: show the error for a non-empty invalid value, clear it otherwise
    pub fn blur(&self, key: FieldKey, errors: &mut ErrorPresenter) {
        let field = self.field(key);
        let result = validate_field(key, field.as_text());
        match result.message() {
            Some(message) if !field.value.is_empty() => errors.show_error(key.as_str(), message),
            _ => errors.clear_error(key.as_str()),
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        4 // name, email, message, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.active_key().map(|key| self.field_mut(key))
    }
}

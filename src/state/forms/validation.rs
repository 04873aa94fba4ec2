//! Field validation rules for the contact form
//!
//! Every rule is a pure, total function from the current text of a field to a
//! [`ValidationResult`]. Values are read fresh on each call; nothing is cached.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::contact_form::ContactForm;
use super::field::FieldKey;

/// Minimum trimmed length of a name, in `char`s (Unicode scalar values)
pub const MIN_NAME_LENGTH: usize = 2;

/// Minimum trimmed length of a message, in `char`s (Unicode scalar values)
pub const MIN_MESSAGE_LENGTH: usize = 10;

pub const NAME_ERROR: &str = "Please enter a valid name (at least 2 characters)";
pub const EMAIL_ERROR: &str = "Please enter a valid email address";
pub const MESSAGE_ERROR: &str = "Please enter a message (at least 10 characters)";

/// Letters and whitespace only
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern is valid"));

/// Permissive single-@ shape: local@domain.tld
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A single field failing its rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationFailure {
    pub field: FieldKey,
    pub reason: &'static str,
}

/// Verdict for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub field: FieldKey,
    pub failure: Option<ValidationFailure>,
}

impl ValidationResult {
    fn verdict(field: FieldKey, valid: bool, reason: &'static str) -> Self {
        Self {
            field,
            failure: (!valid).then_some(ValidationFailure { field, reason }),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }

    /// Human-readable message when invalid
    pub fn message(&self) -> Option<&'static str> {
        self.failure.as_ref().map(|f| f.reason)
    }
}

pub fn validate_name(text: &str) -> ValidationResult {
    let trimmed = text.trim();
    let valid = trimmed.chars().count() >= MIN_NAME_LENGTH && NAME_PATTERN.is_match(trimmed);
    ValidationResult::verdict(FieldKey::Name, valid, NAME_ERROR)
}

pub fn validate_email(text: &str) -> ValidationResult {
    let valid = EMAIL_PATTERN.is_match(text.trim());
    ValidationResult::verdict(FieldKey::Email, valid, EMAIL_ERROR)
}

pub fn validate_message(text: &str) -> ValidationResult {
    let valid = text.trim().chars().count() >= MIN_MESSAGE_LENGTH;
    ValidationResult::verdict(FieldKey::Message, valid, MESSAGE_ERROR)
}

/// Run the rule belonging to `key`
pub fn validate_field(key: FieldKey, text: &str) -> ValidationResult {
    match key {
        FieldKey::Name => validate_name(text),
        FieldKey::Email => validate_email(text),
        FieldKey::Message => validate_message(text),
    }
}

/// Validate every field of the form, collecting all failures in tab order
pub fn validate_all(form: &ContactForm) -> Vec<ValidationFailure> {
    FieldKey::ALL
        .iter()
        .filter_map(|key| validate_field(*key, form.field(*key).as_text()).failure)
        .collect()
}

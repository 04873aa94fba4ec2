//! Form field value objects

/// Stable identifiers for the contact form inputs and their error slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    Name,
    Email,
    Message,
}

impl FieldKey {
    /// All keys in tab order
    pub const ALL: [FieldKey; 3] = [FieldKey::Name, FieldKey::Email, FieldKey::Message];

    /// Identifier shared by the input and its error slot
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Email => "email",
            FieldKey::Message => "message",
        }
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw text captured from an input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValue(String);

impl FieldValue {
    pub fn raw(&self) -> &str {
        &self.0
    }

    pub fn trimmed(&self) -> &str {
        self.0.trim()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub key: FieldKey,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(key: FieldKey, label: &str, is_multiline: bool) -> Self {
        Self {
            key,
            label: label.to_string(),
            value: FieldValue::default(),
            is_multiline,
        }
    }

    /// Get the raw text value
    pub fn as_text(&self) -> &str {
        self.value.raw()
    }

    /// Set the text value
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = FieldValue(value.into());
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.0.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.0.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.0.clear();
    }
}

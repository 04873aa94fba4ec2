//! Trait abstraction for message delivery to enable mocking in tests

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::state::{ContactForm, FieldKey};

/// What gets delivered when the contact form is submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Snapshot of the trimmed form values
    pub fn from_form(form: &ContactForm) -> Self {
        let trimmed = |key| form.field(key).value.trimmed().to_string();
        Self {
            name: trimmed(FieldKey::Name),
            email: trimmed(FieldKey::Email),
            message: trimmed(FieldKey::Message),
        }
    }
}

/// Acknowledgement of a delivered message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl SubmitReceipt {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }
}

impl Default for SubmitReceipt {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("submission interrupted before completing")]
    Interrupted,
}

/// Trait for message delivery, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Deliver a contact message
    async fn submit(&self, message: ContactMessage) -> Result<SubmitReceipt, SubmitError>;
}

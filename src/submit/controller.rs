//! Submission lifecycle of the contact form
//!
//! `Idle -> Pending` on a valid submit request, `Pending -> Completed -> Idle`
//! once the in-flight delivery reports back. A delivery error goes through
//! `Failed` instead, which re-enables the button without clearing the form.
//! Only this controller touches the submit button.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;

use super::traits::{ContactMessage, SubmitError, SubmitReceipt, Submitter};
use crate::state::{
    validate_all, ContactForm, ErrorPresenter, NotificationKind, Notifier, ValidationFailure,
    SUCCESS_MESSAGE,
};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const PENDING_LABEL: &str = "⟳ Sending...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Pending,
    Completed,
    Failed,
}

/// The single submit control: enabled flag plus label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    label: String,
    original_label: String,
    enabled: bool,
}

impl SubmitButton {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            original_label: label.to_string(),
            enabled: true,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn begin_pending(&mut self) {
        self.enabled = false;
        self.label = PENDING_LABEL.to_string();
    }

    fn restore(&mut self) {
        self.enabled = true;
        self.label.clone_from(&self.original_label);
    }
}

/// Result of a submit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and delivery is in flight
    Started,
    /// At least one field failed; nothing was scheduled
    Rejected(Vec<ValidationFailure>),
    /// A submission was already pending
    Ignored,
}

struct InFlight {
    task: JoinHandle<()>,
    result: oneshot::Receiver<Result<SubmitReceipt, SubmitError>>,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub struct SubmissionController {
    state: SubmissionState,
    button: SubmitButton,
    submitter: Arc<dyn Submitter>,
    in_flight: Option<InFlight>,
    scheduled: u64,
}

impl SubmissionController {
    pub fn new(submitter: Arc<dyn Submitter>) -> Self {
        Self {
            state: SubmissionState::Idle,
            button: SubmitButton::new(SUBMIT_LABEL),
            submitter,
            in_flight: None,
            scheduled: 0,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    pub fn is_pending(&self) -> bool {
        self.state == SubmissionState::Pending
    }

    /// Number of deliveries started over the controller's lifetime
    pub fn completions_scheduled(&self) -> u64 {
        self.scheduled
    }

    /// Validate the form and, if every field passes, start delivery.
    ///
    /// Must be called inside a tokio runtime when the form is valid.
    pub fn submit(&mut self, form: &ContactForm, errors: &mut ErrorPresenter) -> SubmitOutcome {
        if self.is_pending() {
            tracing::debug!("Ignoring submit request while a submission is pending");
            return SubmitOutcome::Ignored;
        }

        errors.clear_all_errors();
        let failures = validate_all(form);
        if !failures.is_empty() {
            for failure in &failures {
                errors.show_error(failure.field.as_str(), failure.reason);
            }
            tracing::info!("Submission blocked by {} invalid field(s)", failures.len());
            return SubmitOutcome::Rejected(failures);
        }

        let message = ContactMessage::from_form(form);
        let submitter = Arc::clone(&self.submitter);
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            let result = submitter.submit(message).await;
            // Receiver is gone only if the controller was dropped
            let _ = tx.send(result);
        });

        self.in_flight = Some(InFlight { task, result: rx });
        self.scheduled += 1;
        self.button.begin_pending();
        self.state = SubmissionState::Pending;
        tracing::info!("Submission started");
        SubmitOutcome::Started
    }

    /// Collect the in-flight delivery if it has finished.
    ///
    /// Returns the transient state passed through (`Completed` or `Failed`);
    /// the controller is back in `Idle` afterwards. `None` while nothing has
    /// finished.
    pub fn poll_completion(
        &mut self,
        form: &mut ContactForm,
        errors: &mut ErrorPresenter,
        notifier: &mut Notifier,
        now: Instant,
    ) -> Option<SubmissionState> {
        let in_flight = self.in_flight.as_mut()?;
        let result = match in_flight.result.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(SubmitError::Interrupted),
        };
        self.in_flight = None;

        let passed_through = match result {
            Ok(receipt) => {
                self.state = SubmissionState::Completed;
                form.reset();
                notifier.notify(NotificationKind::Success, SUCCESS_MESSAGE, now);
                self.button.restore();
                errors.clear_all_errors();
                tracing::info!(
                    submission_id = %receipt.id,
                    submitted_at = %receipt.submitted_at,
                    "Submission completed"
                );
                SubmissionState::Completed
            }
            Err(err) => {
                self.state = SubmissionState::Failed;
                self.button.restore();
                notifier.notify(
                    NotificationKind::Error,
                    format!("Your message could not be sent: {err}"),
                    now,
                );
                tracing::warn!("Submission failed: {err}");
                SubmissionState::Failed
            }
        };

        self.state = SubmissionState::Idle;
        Some(passed_through)
    }
}

//! Contact message delivery and the submission state machine

mod controller;
mod simulated;
mod traits;

pub use controller::{SubmissionController, SubmissionState, SubmitOutcome};
pub use simulated::SimulatedSubmitter;
pub use traits::Submitter;

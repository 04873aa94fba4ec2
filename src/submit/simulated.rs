//! Stand-in delivery used until the site has a backend

use std::time::Duration;

use async_trait::async_trait;

use super::traits::{ContactMessage, SubmitError, SubmitReceipt, Submitter};

/// Waits for a fixed delay, then always succeeds
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, message: ContactMessage) -> Result<SubmitReceipt, SubmitError> {
        tracing::debug!(
            payload = %serde_json::to_string(&message).unwrap_or_default(),
            "Simulating delivery"
        );
        tokio::time::sleep(self.delay).await;
        Ok(SubmitReceipt::new())
    }
}

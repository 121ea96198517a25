//! Contact Dispatcher: validates a submission and walks the notification
//! chain (rich → simple) until one strategy delivers it.
//!
//! If every strategy fails, the caller gets a manual fallback: a pre-filled
//! `mailto:` link plus the last failure reason. Attempts are sequential and
//! never retried.

use std::sync::Arc;

use chrono::Local;
use tracing::{info, warn};

use crate::contact::mailto::build_mailto;
use crate::contact::models::{ContactSubmission, DispatchOutcome, ValidationError};
use crate::contact::notify::{NotificationStrategy, RichNotification, SimpleNotification};
use crate::contact::validation::validate;
use crate::webhook_client::WebhookClient;

pub struct ContactDispatcher {
    strategies: Vec<Arc<dyn NotificationStrategy>>,
    contact_email: String,
}

impl ContactDispatcher {
    /// Default chain: rich embed first, plain text second, both on `client`.
    pub fn new(client: WebhookClient, contact_email: String) -> Self {
        let strategies: Vec<Arc<dyn NotificationStrategy>> = vec![
            Arc::new(RichNotification::new(client.clone())),
            Arc::new(SimpleNotification::new(client)),
        ];
        Self::with_strategies(strategies, contact_email)
    }

    pub fn with_strategies(
        strategies: Vec<Arc<dyn NotificationStrategy>>,
        contact_email: String,
    ) -> Self {
        Self {
            strategies,
            contact_email,
        }
    }

    /// Validates, then dispatches. Invalid submissions never reach the network.
    pub async fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> Result<DispatchOutcome, ValidationError> {
        validate(submission)?;
        Ok(self.dispatch(submission).await)
    }

    /// Tries each strategy in order and stops at the first success.
    pub async fn dispatch(&self, submission: &ContactSubmission) -> DispatchOutcome {
        let sent_at = Local::now();
        let mut last_failure: Option<String> = None;

        for strategy in &self.strategies {
            let channel = strategy.channel();
            match strategy.deliver(submission, sent_at).await {
                Ok(()) => {
                    info!(
                        "Contact message delivered via {} notification (subject: {})",
                        channel, submission.subject
                    );
                    return DispatchOutcome::Delivered { channel };
                }
                Err(e) => {
                    warn!("{} notification failed: {}", channel, e);
                    last_failure = Some(e.to_string());
                }
            }
        }

        let reason =
            last_failure.unwrap_or_else(|| "no notification channel available".to_string());
        warn!("All notification channels failed; offering manual email fallback");

        DispatchOutcome::ManualFallback {
            mailto: build_mailto(&self.contact_email, submission),
            reason,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

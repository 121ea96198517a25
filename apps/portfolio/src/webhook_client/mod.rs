/// Webhook Client: the single point of entry for outbound notification calls.
///
/// ARCHITECTURAL RULE: No other module may POST to the webhook directly.
/// Notification strategies build payloads and hand them to this client.
///
/// One request per call. No retries, no timeout beyond the transport default.
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::debug;

use crate::contact::models::{ConfigurationError, DeliveryError, NotifyError};

pub mod payload;

/// The status a webhook answers with when it accepted the message.
const ACCEPTED: StatusCode = StatusCode::NO_CONTENT;

#[derive(Clone)]
pub struct WebhookClient {
    client: Client,
    url: Option<String>,
}

impl WebhookClient {
    pub fn new(url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    /// POSTs `payload` as JSON. Only `204 No Content` counts as delivered.
    pub async fn post<T: Serialize + ?Sized>(&self, payload: &T) -> Result<(), NotifyError> {
        let url = self
            .url
            .as_deref()
            .ok_or(ConfigurationError::EndpointNotSet)?;

        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            // The URL carries the webhook token; keep it out of error text.
            .map_err(|e| DeliveryError::from(e.without_url()))?;

        let status = response.status();
        debug!("Webhook responded with {}", status);

        if status != ACCEPTED {
            return Err(DeliveryError::NonAcceptedStatus(status.as_u16()).into());
        }

        Ok(())
    }
}

use std::sync::Arc;

use crate::config::Config;
use crate::contact::dispatcher::ContactDispatcher;
use crate::page::profile::Profile;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Notification chain, built once with the configured webhook endpoint.
    pub dispatcher: Arc<ContactDispatcher>,
    /// Read-only page content.
    pub profile: Arc<Profile>,
}

impl AppState {
    pub fn webhook_configured(&self) -> bool {
        self.config.webhook_url.is_some()
    }
}

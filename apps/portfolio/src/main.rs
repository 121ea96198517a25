mod config;
mod contact;
mod errors;
mod page;
mod routes;
mod state;
#[cfg(test)]
mod test_support;
mod webhook_client;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::dispatcher::ContactDispatcher;
use crate::page::profile::default_profile;
use crate::routes::build_router;
use crate::state::AppState;
use crate::webhook_client::WebhookClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Initialize webhook client (endpoint is injected here and nowhere else)
    let webhook = WebhookClient::new(config.webhook_url.clone());
    if webhook.is_configured() {
        info!("Webhook notifications enabled");
    } else {
        warn!("DISCORD_WEBHOOK_URL not set; contact form will offer email fallback only");
    }

    let dispatcher = ContactDispatcher::new(webhook, config.contact_email.clone());

    let state = AppState {
        config: config.clone(),
        dispatcher: Arc::new(dispatcher),
        profile: Arc::new(default_profile()),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

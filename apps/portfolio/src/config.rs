use std::path::Path;

use anyhow::{Context, Result};

use crate::page::profile::PROFILE_EMAIL;

/// Application configuration loaded from environment variables.
/// Every setting has a default; the webhook URL is optional and its absence
/// only disables automated delivery.
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord-style webhook endpoint. Secret: never log it.
    pub webhook_url: Option<String>,
    /// Recipient of the manual fallback `mailto:` link.
    pub contact_email: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let webhook_url = resolve_webhook_url(
            std::env::var("DISCORD_WEBHOOK_URL").ok(),
            std::env::var("DISCORD_WEBHOOK_URL_FILE").ok().as_deref().map(Path::new),
        )?;

        Ok(Config {
            webhook_url,
            contact_email: std::env::var("CONTACT_EMAIL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| PROFILE_EMAIL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Picks the webhook URL from the direct value first, then from a secret file.
/// Blank values count as unset.
fn resolve_webhook_url(direct: Option<String>, file: Option<&Path>) -> Result<Option<String>> {
    if let Some(url) = non_blank(direct) {
        return Ok(Some(url));
    }

    match file {
        Some(path) => {
            let contents = std::fs::read_to_string(path).with_context(|| {
                format!("Failed to read webhook URL secret file '{}'", path.display())
            })?;
            Ok(non_blank(Some(contents)))
        }
        None => Ok(None),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

//! Notification strategies, one per delivery format, tried in order by the
//! dispatcher.
//!
//! Both strategies share the same endpoint and success criterion; they differ
//! only in payload shape. All network I/O goes through `WebhookClient`.

use async_trait::async_trait;
use chrono::{DateTime, Local};

use crate::contact::models::{Channel, ContactSubmission, NotifyError};
use crate::webhook_client::payload::{
    Embed, EmbedField, EmbedFooter, EmbedThumbnail, RichPayload, SimplePayload,
};
use crate::webhook_client::WebhookClient;

pub const BOT_USERNAME: &str = "Portfolio Bot";
const BOT_AVATAR_URL: &str = "https://cdn-icons-png.flaticon.com/512/3682/3682321.png";
/// #66882A
const EMBED_COLOR: u32 = 6_719_530;
/// Longest message body sent in an embed field, in characters.
pub const RICH_MESSAGE_LIMIT: usize = 1000;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A way of delivering a submission. Implement this to add a channel without
/// touching the dispatcher.
#[async_trait]
pub trait NotificationStrategy: Send + Sync {
    fn channel(&self) -> Channel;

    /// Makes at most one delivery attempt.
    async fn deliver(
        &self,
        submission: &ContactSubmission,
        sent_at: DateTime<Local>,
    ) -> Result<(), NotifyError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Rich (embed) notification
// ────────────────────────────────────────────────────────────────────────────

pub struct RichNotification {
    client: WebhookClient,
}

impl RichNotification {
    pub fn new(client: WebhookClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationStrategy for RichNotification {
    fn channel(&self) -> Channel {
        Channel::Rich
    }

    async fn deliver(
        &self,
        submission: &ContactSubmission,
        sent_at: DateTime<Local>,
    ) -> Result<(), NotifyError> {
        self.client
            .post(&build_rich_payload(submission, sent_at))
            .await
    }
}

pub fn build_rich_payload(submission: &ContactSubmission, sent_at: DateTime<Local>) -> RichPayload {
    let embed = Embed {
        title: "🌟 New Portfolio Contact Message".to_string(),
        description: format!("**Subject:** {}", submission.subject),
        color: EMBED_COLOR,
        fields: vec![
            EmbedField {
                name: "👤 Name".to_string(),
                value: submission.name.clone(),
                inline: true,
            },
            EmbedField {
                name: "📧 Email".to_string(),
                value: submission.email.clone(),
                inline: true,
            },
            EmbedField {
                name: "📝 Message".to_string(),
                value: truncate_message(&submission.message, RICH_MESSAGE_LIMIT),
                inline: false,
            },
        ],
        footer: EmbedFooter {
            text: format!(
                "Portfolio Website • {}",
                sent_at.format(TIMESTAMP_FORMAT)
            ),
        },
        thumbnail: EmbedThumbnail {
            url: BOT_AVATAR_URL.to_string(),
        },
    };

    RichPayload {
        username: BOT_USERNAME.to_string(),
        avatar_url: BOT_AVATAR_URL.to_string(),
        embeds: vec![embed],
    }
}

/// Keeps the first `limit` characters and appends `...` if anything was cut.
fn truncate_message(message: &str, limit: usize) -> String {
    match message.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &message[..cut]),
        None => message.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Simple (plain-text) notification
// ────────────────────────────────────────────────────────────────────────────

pub struct SimpleNotification {
    client: WebhookClient,
}

impl SimpleNotification {
    pub fn new(client: WebhookClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationStrategy for SimpleNotification {
    fn channel(&self) -> Channel {
        Channel::Simple
    }

    async fn deliver(
        &self,
        submission: &ContactSubmission,
        sent_at: DateTime<Local>,
    ) -> Result<(), NotifyError> {
        self.client
            .post(&build_simple_payload(submission, sent_at))
            .await
    }
}

/// Same fields as the embed, as Discord markdown. The body is never truncated.
pub fn build_simple_payload(
    submission: &ContactSubmission,
    sent_at: DateTime<Local>,
) -> SimplePayload {
    let content = format!(
        "🌟 **New Portfolio Contact Message**\n\
         \n\
         👤 **Name:** {name}\n\
         📧 **Email:** {email}\n\
         📋 **Subject:** {subject}\n\
         \n\
         📝 **Message:**\n\
         {message}\n\
         \n\
         ---\n\
         *Sent from Portfolio Website at {sent_at}*",
        name = submission.name,
        email = submission.email,
        subject = submission.subject,
        message = submission.message,
        sent_at = sent_at.format(TIMESTAMP_FORMAT),
    );

    SimplePayload {
        content,
        username: BOT_USERNAME.to_string(),
    }
}

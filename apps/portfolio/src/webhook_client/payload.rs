//! Wire shapes for Discord-style webhook messages.

use serde::Serialize;

/// Embed-style message: one embed with fields, footer and thumbnail.
#[derive(Debug, Clone, Serialize)]
pub struct RichPayload {
    pub username: String,
    pub avatar_url: String,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
    pub thumbnail: EmbedThumbnail,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedThumbnail {
    pub url: String,
}

/// Plain-text message.
#[derive(Debug, Clone, Serialize)]
pub struct SimplePayload {
    pub content: String,
    pub username: String,
}

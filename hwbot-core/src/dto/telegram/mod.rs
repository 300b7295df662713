//! Telegram Bot API DTOs

use serde::{Deserialize, Serialize};

/// Body of a `sendMessage` call
#[derive(Debug, Clone, Serialize)]
pub struct SendMessage {
    /// Target chat: numeric id or `@channel` username
    pub chat_id: String,

    /// Message text
    pub text: String,
}

/// Envelope of every Bot API response; the payload itself is not needed
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
}

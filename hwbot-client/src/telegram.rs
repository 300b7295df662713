//! Telegram Bot API client
//!
//! Only the `sendMessage` method is needed: the bot never reads updates.

use hwbot_core::dto::telegram::{SendMessage, TelegramResponse};
use reqwest::Client;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Default Bot API base URL
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// HTTP client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    base_url: String,
    bot_token: String,
    client: Client,
}

impl TelegramClient {
    /// Create a client for the public Bot API
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_TELEGRAM_API_URL, bot_token)
    }

    /// Create a client against a custom Bot API server
    pub fn with_base_url(base_url: impl Into<String>, bot_token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bot_token: bot_token.into(),
            client: Client::new(),
        }
    }

    /// Get the base URL of the Bot API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.bot_token, method)
    }

    /// Send a text message to a chat
    ///
    /// Makes a single delivery attempt.
    ///
    /// # Arguments
    /// * `chat_id` - Numeric chat id or `@channel` username
    /// * `text` - Message text
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let request = self.build_send_request(chat_id, text)?;

        // The URL carries the bot token; keep it out of error messages.
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ClientError::RequestFailed(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::RequestFailed(e.without_url()))?;

        let parsed: TelegramResponse = serde_json::from_str(&body)
            .map_err(|_| {
                if status.is_success() {
                    ClientError::ParseError(format!("Invalid sendMessage response: {}", body))
                } else {
                    ClientError::Telegram(format!("status {}", status.as_u16()))
                }
            })?;

        if !status.is_success() || !parsed.ok {
            return Err(ClientError::Telegram(
                parsed
                    .description
                    .unwrap_or_else(|| format!("status {}", status.as_u16())),
            ));
        }

        debug!("Message delivered to chat {}", chat_id);
        Ok(())
    }

    fn build_send_request(&self, chat_id: &str, text: &str) -> Result<reqwest::Request> {
        let request = self
            .client
            .post(self.api_url("sendMessage"))
            .json(&SendMessage {
                chat_id: chat_id.to_string(),
                text: text.to_string(),
            })
            .build()
            .map_err(|e| ClientError::RequestFailed(e.without_url()))?;

        Ok(request)
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .field("bot_token", &"***")
            .finish()
    }
}

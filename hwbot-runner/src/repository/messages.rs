//! Messages repository
//!
//! Delivers text to the configured chat through the Telegram Bot API.

use async_trait::async_trait;
use hwbot_client::{ClientError, TelegramClient};

/// Repository trait for outgoing chat messages
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Sends one message to the bot's chat
    ///
    /// Makes a single delivery attempt.
    async fn send_message(&self, text: &str) -> Result<(), ClientError>;
}

/// Telegram implementation of MessageRepository
pub struct TelegramMessageRepository {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramMessageRepository {
    /// Creates a repository that posts to `chat_id`
    ///
    /// # Arguments
    /// * `client` - Bot API client authenticated with the bot token
    /// * `chat_id` - Numeric chat id or `@channel` username
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl MessageRepository for TelegramMessageRepository {
    async fn send_message(&self, text: &str) -> Result<(), ClientError> {
        self.client.send_message(&self.chat_id, text).await
    }
}

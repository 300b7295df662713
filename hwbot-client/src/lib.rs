//! Homework Bot HTTP Clients
//!
//! Type-safe HTTP clients for the two remote services the bot talks to:
//! - [`ReviewClient`]: the homework review status API
//! - [`TelegramClient`]: the Telegram Bot API, used to deliver notifications
//!
//! # Example
//!
//! ```no_run
//! use hwbot_client::{ReviewClient, TelegramClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let reviews = ReviewClient::new(hwbot_client::DEFAULT_ENDPOINT, "practicum-token");
//!     let body = reviews.homework_statuses(0).await?;
//!
//!     let bot = TelegramClient::new("bot-token");
//!     bot.send_message("12345", &body.to_string()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
mod homeworks;
mod telegram;
#[cfg(test)]
mod test_server;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use telegram::{DEFAULT_TELEGRAM_API_URL, TelegramClient};

use reqwest::Client;

/// Default homework statuses endpoint
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// HTTP client for the homework review status API
#[derive(Clone)]
pub struct ReviewClient {
    /// Full URL of the homework statuses endpoint
    endpoint: String,
    /// OAuth token sent in the `Authorization` header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl ReviewClient {
    /// Create a new review client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the homework statuses endpoint
    /// * `token` - OAuth token of the student
    ///
    /// # Example
    /// ```
    /// use hwbot_client::ReviewClient;
    ///
    /// let client = ReviewClient::new("http://localhost:8080/statuses/", "token");
    /// assert_eq!(client.endpoint(), "http://localhost:8080/statuses/");
    /// ```
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client: Client::new(),
        }
    }

    /// Get the endpoint this client polls
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Value of the `Authorization` header
    fn authorization(&self) -> String {
        format!("OAuth {}", self.token)
    }
}

impl std::fmt::Debug for ReviewClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ReviewClient::new(DEFAULT_ENDPOINT, "secret");
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(client.authorization(), "OAuth secret");
    }

    #[test]
    fn test_debug_hides_token() {
        let client = ReviewClient::new(DEFAULT_ENDPOINT, "secret");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret"));
    }
}

//! Error types for the homework bot clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the status API or the Bot API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure: connection, timeout, body read
    #[error("Возникла ошибка {0} при запросе к API")]
    RequestFailed(#[from] reqwest::Error),

    /// The status API answered with something other than 200 OK
    #[error("Неверный код ответа API: {status}")]
    WrongStatusCode {
        /// HTTP status code
        status: u16,
    },

    /// Failed to parse response
    #[error("Не удалось разобрать ответ API: {0}")]
    ParseError(String),

    /// The Bot API refused to deliver a message
    #[error("Telegram API error: {0}")]
    Telegram(String),
}

impl ClientError {
    /// Create a wrong status code error
    pub fn wrong_status(status: u16) -> Self {
        Self::WrongStatusCode { status }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::WrongStatusCode { status } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::WrongStatusCode { status } if *status >= 500)
    }
}

//! Bot configuration
//!
//! Credentials and tunables are read once at startup into an immutable
//! [`Config`] that is passed to every component that needs it.

use std::time::Duration;
use thiserror::Error;

use hwbot_client::{DEFAULT_ENDPOINT, DEFAULT_TELEGRAM_API_URL};

/// Required credential variables, in the order they are reported
pub const REQUIRED_TOKENS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);
const DEFAULT_LOG_FILE: &str = "homework_bot.log";

/// Configuration errors; all of them stop the bot before polling starts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more credentials are unset or empty
    #[error("Программа была принудительно остановлена. Отсутствует: {}", .0.join(", "))]
    MissingTokens(Vec<&'static str>),

    /// A tunable has an unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Bot configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the homework status API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives notifications
    pub telegram_chat_id: String,

    /// Homework statuses endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Wait between two polls, also the only backoff after failures
    pub retry_period: Duration,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - RETRY_PERIOD (optional, seconds, default: 600)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    ///
    /// Every missing credential is collected so the error names all of them at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| non_empty(lookup(name));

        let missing: Vec<&'static str> = REQUIRED_TOKENS
            .into_iter()
            .filter(|name| present(*name).is_none())
            .collect();

        if !missing.is_empty() {
            return Err(ConfigError::MissingTokens(missing));
        }

        let retry_period = match present("RETRY_PERIOD") {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Invalid(format!("RETRY_PERIOD is not a number: {}", raw)))?,
            None => DEFAULT_RETRY_PERIOD,
        };

        Ok(Self {
            practicum_token: present("PRACTICUM_TOKEN").unwrap_or_default(),
            telegram_token: present("TELEGRAM_TOKEN").unwrap_or_default(),
            telegram_chat_id: present("TELEGRAM_CHAT_ID").unwrap_or_default(),
            endpoint: present("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: present("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_period,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("PRACTICUM_ENDPOINT", &self.endpoint),
            ("TELEGRAM_API_URL", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "{} must start with http:// or https://",
                    name
                )));
            }
        }

        if self.retry_period.is_zero() {
            return Err(ConfigError::Invalid(
                "RETRY_PERIOD must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Log file path from `LOG_FILE`, read before the rest of the configuration
///
/// Logging has to be up before credentials are checked so that a missing
/// token is recorded in the file too.
pub fn log_file_from_env() -> String {
    log_file(|name| std::env::var(name).ok())
}

fn log_file<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup("LOG_FILE")).unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
}

/// Trims a variable's value; blank values count as unset
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_period", &self.retry_period)
            .finish()
    }
}

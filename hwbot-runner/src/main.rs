//! Homework Bot
//!
//! Watches the review status of submitted homework and reports every change
//! to a Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and tunables from the environment
//! - Repositories: HTTP communication with the status API and the Bot API
//! - Services: notification delivery with a duplicate guard
//! - Scheduler: the polling loop and its clock
//!
//! The bot polls on a fixed period and never stops on a failed iteration;
//! only missing credentials abort it at startup.

mod config;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::{HttpStatusRepository, TelegramMessageRepository};
use crate::scheduler::{IntervalTicker, StatusPoller, SystemClock};
use crate::service::Notifier;
use hwbot_client::{ReviewClient, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    // A `.env` file may supply any variable, LOG_FILE included, so it is read first.
    let dotenv = dotenvy::dotenv();

    init_tracing(&config::log_file_from_env())?;

    info!("Starting homework bot");
    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file, using process environment"),
        Err(e) => warn!("Failed to read .env file: {}", e),
    }

    // Nothing touches the network before the credentials are known to be present.
    let config = load_config()?;
    info!("Loaded configuration: {:?}", config);

    let reviews = ReviewClient::new(config.endpoint.clone(), config.practicum_token.clone());
    let bot = TelegramClient::with_base_url(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
    );
    info!(
        "Status API: {}, Bot API: {}",
        reviews.endpoint(),
        bot.base_url()
    );

    let statuses = Arc::new(HttpStatusRepository::new(reviews));
    let chat = Arc::new(TelegramMessageRepository::new(
        bot,
        config.telegram_chat_id.clone(),
    ));

    let mut poller = StatusPoller::new(statuses, Notifier::new(chat), &SystemClock);
    let mut ticker = IntervalTicker::new(config.retry_period);

    info!("Poll interval: {:?}", ticker.period());
    poller.run(&mut ticker).await;

    info!("Homework bot stopped");
    Ok(())
}

/// Sets up logging to stdout and to an append-only log file
fn init_tracing(log_file: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "homework_bot=info,hwbot_client=info,hwbot_core=info".into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    Ok(())
}

/// Loads and validates configuration; any failure here is fatal
fn load_config() -> Result<Config> {
    let config = Config::from_env().inspect_err(|e| error!(critical = true, "{}", e))?;
    config
        .validate()
        .inspect_err(|e| error!(critical = true, "{}", e))?;
    Ok(config)
}

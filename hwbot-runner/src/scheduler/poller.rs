//! Status poller
//!
//! Polls the homework status API once per tick and notifies the chat about
//! status changes. Errors never leave an iteration: they are logged, turned
//! into a chat message and the loop carries on after the next tick.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use hwbot_client::ClientError;
use hwbot_core::ResponseError;
use hwbot_core::validation::{check_response, parse_status};

use crate::repository::StatusRepository;
use crate::scheduler::clock::{Clock, Ticker};
use crate::service::{Delivery, Notifier};

/// Notice sent once when the bot starts
pub const STARTUP_MESSAGE: &str = "Я включился, отслеживаю изменения.";

/// Everything that can go wrong within one poll iteration
#[derive(Debug, Error)]
pub enum PollError {
    /// The status API could not be reached or answered badly
    #[error(transparent)]
    Api(#[from] ClientError),

    /// The status API answered with a malformed body or work item
    #[error(transparent)]
    Response(#[from] ResponseError),
}

impl PollError {
    /// Chat message reporting this failure
    pub fn message(&self) -> String {
        format!("Сбой в работе программы: {}", self)
    }
}

/// Result of one poll iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// No work item changed since the cursor
    Unchanged,

    /// A status message was produced and handed to the notifier
    Updated(Delivery),

    /// The iteration failed and an error message was handed to the notifier
    Failed(Delivery),
}

/// Poller that watches homework statuses and reports changes
pub struct StatusPoller {
    statuses: Arc<dyn StatusRepository>,
    notifier: Notifier,
    cursor: i64,
}

impl StatusPoller {
    /// Creates a new poller whose cursor starts at the clock's current time
    pub fn new(
        statuses: Arc<dyn StatusRepository>,
        notifier: Notifier,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            statuses,
            notifier,
            cursor: clock.now(),
        }
    }

    /// Timestamp sent as `from_date` on the next request
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Sends the startup notice, then polls on every tick until the ticker stops
    pub async fn run(&mut self, ticker: &mut dyn Ticker) {
        info!("Starting status poller (cursor: {})", self.cursor());

        if self.notifier.send(STARTUP_MESSAGE).await != Delivery::Sent {
            warn!("Startup notice was not delivered");
        }

        while ticker.tick().await {
            match self.poll_once().await {
                PollOutcome::Unchanged => debug!("Nothing changed this cycle"),
                PollOutcome::Updated(delivery) => info!("Status update handled: {:?}", delivery),
                PollOutcome::Failed(delivery) => debug!("Failure report handled: {:?}", delivery),
            }
        }

        info!(
            "Status poller stopped (cursor: {}, last message: {:?})",
            self.cursor(),
            self.notifier.last_sent()
        );
    }

    /// Performs a single poll cycle
    pub async fn poll_once(&mut self) -> PollOutcome {
        match self.check_for_updates().await {
            Ok(None) => PollOutcome::Unchanged,
            Ok(Some(message)) => PollOutcome::Updated(self.notifier.notify(&message).await),
            Err(e) => {
                match &e {
                    PollError::Api(api_error) if api_error.is_client_error() => {
                        error!("Status API rejected the request, check PRACTICUM_TOKEN: {}", api_error)
                    }
                    PollError::Api(api_error) if api_error.is_server_error() => {
                        warn!("Status API is unavailable: {}", api_error)
                    }
                    PollError::Api(ClientError::WrongStatusCode { status }) => {
                        error!("Status API answered with unexpected status {}", status)
                    }
                    PollError::Api(api_error) => {
                        error!("Status API request failed: {}", api_error)
                    }
                    PollError::Response(ResponseError::StrangeStatus(code)) => {
                        error!("Unknown homework status: {}", code)
                    }
                    PollError::Response(response_error) => {
                        error!("Malformed status API response: {}", response_error)
                    }
                }
                PollOutcome::Failed(self.notifier.notify(&e.message()).await)
            }
        }
    }

    /// Fetches, validates and formats; returns the message to send, if any
    ///
    /// The cursor only moves when the whole response was understood.
    async fn check_for_updates(&mut self) -> Result<Option<String>, PollError> {
        let body = self.statuses.fetch_statuses(self.cursor).await?;
        let response = check_response(body)?;

        let message = match response.homeworks.first() {
            None => {
                debug!("No homework status changes");
                None
            }
            Some(item) => Some(parse_status(item)?),
        };

        if let Some(current_date) = response.current_date {
            self.advance_cursor(current_date);
        }

        Ok(message)
    }

    fn advance_cursor(&mut self, current_date: i64) {
        if current_date < self.cursor {
            warn!(
                "Ignoring current_date {} older than cursor {}",
                current_date, self.cursor
            );
            return;
        }
        self.cursor = current_date;
    }
}

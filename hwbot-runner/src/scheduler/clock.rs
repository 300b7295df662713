//! Time sources for the poller
//!
//! Wall-clock time and the polling schedule are behind traits so the poller
//! can be driven deterministically in tests.

use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tokio::time::{self, Interval, MissedTickBehavior};
use tracing::info;

/// Source of the current unix timestamp
pub trait Clock: Send + Sync {
    /// Current time in whole seconds since the unix epoch
    fn now(&self) -> i64;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Polling schedule
#[async_trait]
pub trait Ticker: Send {
    /// Waits for the next tick
    ///
    /// Returns `false` once the schedule is over and the loop should stop.
    async fn tick(&mut self) -> bool;
}

/// Fixed-period schedule that ends on Ctrl-C
///
/// The first tick completes immediately, so every poll is followed by one
/// full period of waiting.
pub struct IntervalTicker {
    interval: Interval,
    shutdown: Pin<Box<dyn Future<Output = std::io::Result<()>> + Send>>,
    stopped: bool,
}

impl IntervalTicker {
    /// Creates a ticker firing every `period`
    ///
    /// # Panics
    /// If `period` is zero; the configuration rejects that earlier.
    pub fn new(period: Duration) -> Self {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            interval,
            shutdown: Box::pin(tokio::signal::ctrl_c()),
            stopped: false,
        }
    }

    /// Period between ticks
    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

#[async_trait]
impl Ticker for IntervalTicker {
    async fn tick(&mut self) -> bool {
        if self.stopped {
            return false;
        }

        tokio::select! {
            _ = self.interval.tick() => true,
            _ = &mut self.shutdown => {
                info!("Shutdown signal received");
                self.stopped = true;
                false
            }
        }
    }
}

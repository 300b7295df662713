//! Scheduler layer for the bot
//!
//! This layer drives the polling loop: it owns the cursor, asks the status
//! API for changes once per tick and hands the resulting messages to the
//! notifier.

pub mod clock;
pub mod poller;

pub use clock::{IntervalTicker, SystemClock};
pub use poller::StatusPoller;

//! Service layer
//!
//! Business logic that sits between the poller and the repositories.

pub(crate) mod notifier;

pub use notifier::{Delivery, Notifier};

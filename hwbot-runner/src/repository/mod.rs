//! Repository layer
//!
//! Repositories are thin adapters over the HTTP clients. They give the
//! poller and the notifier narrow, trait-based seams so both can be tested
//! against in-memory fakes.

mod messages;
mod statuses;

// Re-export traits
pub use messages::MessageRepository;
pub use statuses::StatusRepository;

// Re-export implementations
pub use messages::TelegramMessageRepository;
pub use statuses::HttpStatusRepository;

//! Data Transfer Objects for the external APIs
//!
//! Request and response shapes of the homework status API and the
//! Telegram Bot API.

pub mod status;
pub mod telegram;

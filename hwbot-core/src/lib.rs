//! Homework Bot Core
//!
//! Core types and pure logic shared by the homework status bot crates.
//!
//! This crate contains:
//! - Domain types: work items, review statuses and the verdict table
//! - DTOs: request/response shapes of the status API and the Telegram Bot API
//! - Validation: response checking and status message formatting

pub mod domain;
pub mod dto;
pub mod error;
pub mod validation;

pub use error::ResponseError;

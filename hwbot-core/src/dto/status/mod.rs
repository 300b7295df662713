//! Status API DTOs

use serde::Serialize;

/// Query parameters of the homework statuses endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusQuery {
    /// Unix timestamp; only changes after it are returned
    pub from_date: i64,
}

/// A status API response that passed structural validation
///
/// Work items are kept as raw JSON; each one is checked when it is formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusResponse {
    /// Work items changed since the requested timestamp, newest first
    pub homeworks: Vec<serde_json::Value>,

    /// Server time of the response, used as the next cursor
    pub current_date: Option<i64>,
}

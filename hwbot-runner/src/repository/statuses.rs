//! Statuses repository
//!
//! Fetches raw homework status changes from the review API.

use async_trait::async_trait;
use hwbot_client::{ClientError, ReviewClient};

/// Repository trait for the homework status API
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetches status changes since `from_date`
    ///
    /// Makes exactly one request and returns the unvalidated JSON body.
    async fn fetch_statuses(&self, from_date: i64) -> Result<serde_json::Value, ClientError>;
}

/// HTTP implementation of StatusRepository
pub struct HttpStatusRepository {
    client: ReviewClient,
}

impl HttpStatusRepository {
    /// Creates a new HTTP status repository
    pub fn new(client: ReviewClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusRepository for HttpStatusRepository {
    async fn fetch_statuses(&self, from_date: i64) -> Result<serde_json::Value, ClientError> {
        self.client.homework_statuses(from_date).await
    }
}

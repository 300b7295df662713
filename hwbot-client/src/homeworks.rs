//! Homework status endpoint

use hwbot_core::dto::status::StatusQuery;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use tracing::info;

use crate::ReviewClient;
use crate::error::{ClientError, Result};

impl ReviewClient {
    /// Fetch homework status changes since `from_date`
    ///
    /// Issues exactly one GET request; retries are the caller's business.
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp; only changes after it are returned
    ///
    /// # Returns
    /// The parsed JSON body, not yet validated
    ///
    /// # Errors
    /// * [`ClientError::RequestFailed`] on transport failure
    /// * [`ClientError::WrongStatusCode`] on any status other than 200
    /// * [`ClientError::ParseError`] if the body is not JSON
    pub async fn homework_statuses(&self, from_date: i64) -> Result<serde_json::Value> {
        let request = self.build_statuses_request(from_date)?;
        info!("Requesting {} with from_date={}", self.endpoint, from_date);

        let response = self.client.execute(request).await?;
        info!("Status API responded with {}", response.status());

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::wrong_status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    fn build_statuses_request(&self, from_date: i64) -> Result<reqwest::Request> {
        let request = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, self.authorization())
            .query(&StatusQuery { from_date })
            .build()?;

        Ok(request)
    }
}

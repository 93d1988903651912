use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;

/// Seam for fetching review statuses.
///
/// The poll cycle runs against this trait so it can be driven by canned
/// responses in tests.
#[async_trait]
pub trait ReviewApi: Send + Sync {
    /// Fetch submissions updated since `from_date` (Unix timestamp).
    async fn fetch(&self, from_date: i64) -> Result<Value, ApiError>;
}

/// HTTP client for the homework review API.
pub struct ReviewClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl ReviewClient {
    pub fn new(endpoint: String, token: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            token,
        }
    }
}

#[async_trait]
impl ReviewApi for ReviewClient {
    /// One GET per call; no internal retry. A non-200 answer becomes
    /// [`ApiError::BadStatus`] carrying the request parameters and body,
    /// anything below that becomes [`ApiError::Transport`].
    async fn fetch(&self, from_date: i64) -> Result<Value, ApiError> {
        debug!(from_date, endpoint = %self.endpoint, "Fetching review statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::BadStatus {
                status: status.as_u16(),
                from_date,
                body,
            });
        }

        let payload: Value = response.json().await?;
        debug!("API answer decoded");
        Ok(payload)
    }
}

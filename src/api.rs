//! API client for the measurement backend.
//!
//! One read-only endpoint: `GET {base_url}/sample` returning the full
//! record collection. The payload is deserialized at this boundary so a
//! malformed body fails the fetch instead of reaching the table.

use std::sync::Arc;
use thiserror::Error;

use crate::adapters::ReqwestHttpClient;
use crate::models::{Record, SampleListResponse};
use crate::traits::{HttpClient, HttpError};

/// Error type for sample API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Server answered with a non-2xx status
    #[error("server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Body did not match the expected `{ "data": [...] }` shape
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Client for the measurement backend API.
pub struct SampleApiClient {
    /// Base URL for the backend
    pub base_url: String,
    http: Arc<dyn HttpClient>,
}

impl SampleApiClient {
    /// Create a client for the given base URL, using the production
    /// reqwest transport.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Arc::new(ReqwestHttpClient::new()),
        }
    }

    /// Create a client with an injected transport (tests).
    pub fn with_http_client(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Fetch the full record collection.
    ///
    /// Issued exactly once per activation by the app; pagination never
    /// refetches.
    pub async fn fetch_samples(&self) -> Result<Vec<Record>, ApiError> {
        let url = format!("{}/sample", self.base_url);
        let response = self.http.get(&url).await?;

        if !response.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ApiError::ServerError {
                status: response.status,
                message,
            });
        }

        let parsed: SampleListResponse = response.json()?;
        Ok(parsed.data)
    }
}

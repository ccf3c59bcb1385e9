//! Mock HTTP client for testing.
//!
//! A configurable in-memory transport: tests register responses per URL
//! and can inspect which URLs were requested.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{HttpClient, HttpError, Response};

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful response
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

/// Mock HTTP client returning predefined responses without network access.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses, matched by exact URL
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// URLs requested so far, in order
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client with no configured responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response for an exact URL.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    /// All URLs requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(url.to_string());

        match self.responses.lock().unwrap().get(url) {
            Some(MockResponse::Success(response)) => Ok(response.clone()),
            Some(MockResponse::Error(err)) => Err(err.clone()),
            None => Err(HttpError::Other(format!(
                "no mock response configured for {url}"
            ))),
        }
    }
}

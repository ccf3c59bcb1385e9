//! Runtime configuration.
//!
//! The single required configuration value is the backend base URL; the
//! page size and log switch are conveniences on top. Everything comes
//! from the environment with sensible defaults, plus builder methods for
//! tests.

use crate::domain::pagination::DEFAULT_PAGE_SIZE;

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend base URL.
pub const ENV_API_URL: &str = "SAMPLEVIEW_API_URL";

/// Environment variable overriding the rows-per-page default.
pub const ENV_PAGE_SIZE: &str = "SAMPLEVIEW_PAGE_SIZE";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL used to build the fetch target
    pub base_url: String,
    /// Rows per page
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the page size. Zero is rejected and keeps the previous value.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        if page_size > 0 {
            self.page_size = page_size;
        }
        self
    }

    /// Build config from the environment.
    ///
    /// `SAMPLEVIEW_API_URL` overrides the base URL and
    /// `SAMPLEVIEW_PAGE_SIZE` the page size; unset, empty, or unparsable
    /// values fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.is_empty() {
                config.base_url = url;
            }
        }

        if let Some(page_size) = std::env::var(ENV_PAGE_SIZE)
            .ok()
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|n| *n > 0)
        {
            config.page_size = page_size;
        }

        config
    }
}

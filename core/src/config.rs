//! Client configuration for the remote todo service.
//!
//! The base URL comes from the `TODO_API_URL` environment variable when set,
//! falling back to the local development server. One global request timeout
//! applies to every operation.

use std::time::Duration;

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "TODO_API_URL";

/// Base URL used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the remote todo service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Read the base URL from the environment, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

//! # Client Configuration
//!
//! Configuration for the marketplace HTTP client, loaded from environment
//! variables with defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_BASE_URL`: Base URL of the marketplace server
//!   (default: "http://localhost:8001")
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)

use eyre::{Result, WrapErr};
use std::env;

/// Configuration for the marketplace HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the marketplace server, without a trailing slash
    pub base_url: String,

    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001".to_string(),
            request_timeout: 30,
        }
    }
}

impl ClientConfig {
    /// Creates a new ClientConfig from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_REQUEST_TIMEOUT_SECONDS` is set but cannot
    /// be parsed as an integer.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8001".to_string())
            .trim_end_matches('/')
            .to_string();

        let request_timeout = match env::var("API_REQUEST_TIMEOUT_SECONDS") {
            Ok(value) => value
                .parse()
                .wrap_err("Invalid API_REQUEST_TIMEOUT_SECONDS value")?,
            Err(_) => 30,
        };

        Ok(Self {
            base_url,
            request_timeout,
        })
    }
}

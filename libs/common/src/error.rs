//! Custom error types for the common library
//!
//! This module defines the error types shared by the seeder and the prober
//! when talking to the catalog API.

use reqwest::StatusCode;
use thiserror::Error;

/// Error type for catalog API calls
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request URL could not be built from the configured base URL
    #[error("Invalid URL: {0}")]
    Url(String),
}

impl ClientError {
    /// Status code carried by the error, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Type alias for Result with ClientError
pub type ClientResult<T> = Result<T, ClientError>;

/// Error type for loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error raised by the configuration loader
    #[error("Configuration source error: {0}")]
    Source(#[from] config::ConfigError),

    /// A value was loaded but is not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Type alias for Result with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

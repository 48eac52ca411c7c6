//! Configuration for reaching the catalog API
//!
//! Values come from built-in defaults, overlaid by `CATALOG_*` environment
//! variables, overlaid by whatever the binaries receive on the command line.

use config::{Config, Environment, Map};
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Per-request timeout used when nothing else is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_PREFIX: &str = "CATALOG";

/// Connection settings for the catalog API
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User agent sent with each request
    pub user_agent: String,
}

impl ApiConfig {
    /// Create a new ApiConfig from environment variables
    ///
    /// # Environment Variables
    /// - `CATALOG_BASE_URL`: API base URL (default: "http://localhost:8080/api")
    /// - `CATALOG_TIMEOUT_SECS`: request timeout in seconds (default: 30)
    /// - `CATALOG_USER_AGENT`: user agent header (default: "catalog-tools/<version>")
    pub fn from_env() -> ConfigResult<Self> {
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    /// Same as [`ApiConfig::from_env`] but reads variables from `vars`
    /// instead of the process environment
    pub fn from_vars(vars: Map<String, String>) -> ConfigResult<Self> {
        Self::load(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn load(env: Environment) -> ConfigResult<Self> {
        let settings = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .set_default("user_agent", default_user_agent())?
            .add_source(env.try_parsing(true))
            .build()?;

        let config: ApiConfig = settings.try_deserialize()?;
        config.validated()
    }

    /// Apply command line overrides on top of the loaded values
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> ConfigResult<Self> {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(timeout_secs) = timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        self.validated()
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validated(mut self) -> ConfigResult<Self> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::Invalid("base URL cannot be empty".to_string()));
        }

        let url = Url::parse(trimmed)
            .map_err(|e| ConfigError::Invalid(format!("base URL {trimmed:?}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "base URL must use http or https, got {}",
                url.scheme()
            )));
        }
        self.base_url = trimmed.to_string();

        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout must be greater than 0".to_string(),
            ));
        }

        Ok(self)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("catalog-tools/{}", env!("CARGO_PKG_VERSION"))
}

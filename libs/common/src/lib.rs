//! Common library for the catalog tools
//!
//! This crate provides what the seeder and the prober share: connection
//! configuration, the catalog API client and its wire models, error types,
//! and client-side payload validation.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;

pub use client::{CatalogClient, RawResponse};
pub use config::ApiConfig;
pub use error::{ClientError, ClientResult, ConfigError, ConfigResult};

/// Example usage of the client
///
/// ```rust,no_run
/// use common::{ApiConfig, CatalogClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ApiConfig::from_env()?;
///     let client = CatalogClient::new(&config)?;
///     let users = client.list_users().await?.into_items();
///     println!("{} users registered", users.len());
///     Ok(())
/// }
/// ```
pub fn example_usage() {}

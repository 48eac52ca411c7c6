//! Custom error types for the seeder

use common::{ClientError, ConfigError};
use thiserror::Error;

/// Errors that abort a seeding run
#[derive(Error, Debug)]
pub enum SeedError {
    /// A catalog API call failed where the run cannot continue
    #[error("Catalog API error: {0}")]
    Client(#[from] ClientError),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No user exists to own the generated products
    #[error("No users are registered")]
    NoUsers,

    /// No category exists to attach to the generated products
    #[error("No categories are available")]
    NoCategories,

    /// Too many user creations failed before the minimum was reached
    #[error("User bootstrap gave up after {failures} failures: wanted {wanted} users, have {have}")]
    Bootstrap { wanted: u32, have: u32, failures: u32 },
}

/// Type alias for Result with SeedError
pub type SeedResult<T> = Result<T, SeedError>;

//! Seeds the catalog API with synthetic users, categories and products
//!
//! Users and categories are bootstrapped idempotently; products are not,
//! every run adds up to `target_products` more.

pub mod config;
pub mod error;
pub mod generator;
pub mod report;
pub mod seeder;

pub use config::SeederConfig;
pub use error::{SeedError, SeedResult};
pub use report::{Bootstrap, ProductOutcome, SeedReport};
pub use seeder::Seeder;

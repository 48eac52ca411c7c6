//! Seeding run settings

use common::ConfigError;

/// Categories every run makes sure exist
pub const DEFAULT_CATEGORIES: [&str; 5] = ["Electrónica", "Hogar", "Ropa", "Deportes", "Salud"];

/// Seeding run configuration
#[derive(Debug, Clone)]
pub struct SeederConfig {
    /// Users that must exist before products are generated
    pub min_users: u32,
    /// Failed user creations tolerated while bootstrapping users
    pub max_bootstrap_attempts: u32,
    /// Category names to ensure exist
    pub categories: Vec<String>,
    /// Description attached to newly created categories
    pub category_description: String,
    /// Products to create in this run
    pub target_products: u32,
    /// Product creation attempts allowed in this run
    pub max_attempts: u32,
    /// Log a progress line every N created products
    pub progress_every: u32,
    /// Seed for reproducible data; entropy when absent
    pub seed: Option<u64>,
}

impl SeederConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_bootstrap_attempts == 0 {
            return Err(ConfigError::Invalid(
                "bootstrap attempts must be greater than 0".to_string(),
            ));
        }

        if self.categories.iter().all(|name| name.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "at least one category name is required".to_string(),
            ));
        }

        if self.progress_every == 0 {
            return Err(ConfigError::Invalid(
                "progress interval must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            min_users: 5,
            max_bootstrap_attempts: 20,
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            category_description: "Carga masiva".to_string(),
            target_products: 1000,
            max_attempts: 3000,
            progress_every: 100,
            seed: None,
        }
    }
}

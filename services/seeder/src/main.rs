use anyhow::Result;
use clap::Parser;
use common::{ApiConfig, CatalogClient};
use seeder::{Seeder, SeederConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "catalog-seeder",
    about = "Populate the catalog API with synthetic users, categories and products"
)]
struct SeedArgs {
    /// API base URL (overrides CATALOG_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides CATALOG_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Users that must exist before products are created
    #[arg(long, default_value_t = 5)]
    min_users: u32,

    /// Products to create
    #[arg(long, default_value_t = 1000)]
    products: u32,

    /// Product creation attempts allowed
    #[arg(long, default_value_t = 3000)]
    max_attempts: u32,

    /// Random seed for reproducible data
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    // Logs go to stderr, the report to stdout
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting catalog seeder");

    let api_config = ApiConfig::from_env()?.with_overrides(args.base_url, args.timeout_secs)?;
    let client = CatalogClient::new(&api_config)?;

    let config = SeederConfig {
        min_users: args.min_users,
        target_products: args.products,
        max_attempts: args.max_attempts,
        seed: args.seed,
        ..SeederConfig::default()
    };
    config.validate()?;

    let mut seeder = Seeder::new(client, config);
    let report = match seeder.run().await {
        Ok(report) => report,
        Err(e) => {
            error!("Seeding aborted: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Seeding completed: {} products inserted",
        report.products.created
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

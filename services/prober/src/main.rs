use anyhow::Result;
use clap::Parser;
use common::{ApiConfig, CatalogClient};
use prober::{Prober, default_scenarios};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "catalog-prober",
    about = "Exercise the paginated product endpoints and report status codes"
)]
struct ProbeArgs {
    /// API base URL (overrides CATALOG_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides CATALOG_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// User whose products the per-user scenario lists
    #[arg(long, default_value_t = 1)]
    user_id: i64,

    /// Exit with a failure status when any scenario does not pass
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = ProbeArgs::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let api_config = ApiConfig::from_env()?.with_overrides(args.base_url, args.timeout_secs)?;
    let client = CatalogClient::new(&api_config)?;
    info!("Probing product endpoints at {}", client.base_url());

    println!("{}", "=".repeat(60));
    println!("PAGINATED PRODUCT ENDPOINT CHECKS");
    println!("{}", "=".repeat(60));

    let prober = Prober::new(client);
    let scenarios = default_scenarios(args.user_id);
    let report = prober
        .run_all(&scenarios, |result| println!("\n{result}"))
        .await;

    println!("\n{report}");

    if args.strict && !report.all_passed() {
        warn!("Strict mode: {} scenarios did not pass", report.results.len() - report.passed());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

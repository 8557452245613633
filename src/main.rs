//! Marquee main entry point
//!
//! Command-line interface for the Marquee movie-listing harvester.

use clap::Parser;
use marquee::config::load_config_with_hash;
use marquee::crawler::run_harvest;
use marquee::output::{compute_statistics, print_statistics, write_csv};
use marquee::progress::LogProgress;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Marquee: a polite movie-listing harvester
///
/// Marquee fetches a fixed range of paginated listing pages, extracts
/// movie records with defensive defaults, prints summary statistics,
/// and writes the dataset to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(version = "1.0.0")]
#[command(about = "A polite movie-listing harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be fetched without touching the network
    #[arg(long)]
    dry_run: bool,

    /// Write the CSV export to this path instead of the configured one
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_harvest(config, cli.output).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("marquee=info,warn"),
            1 => EnvFilter::new("marquee=debug,info"),
            2 => EnvFilter::new("marquee=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the plan
fn handle_dry_run(config: &marquee::config::Config) {
    println!("=== Marquee Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  Total pages: {}", config.site.total_pages);
    println!("  User-Agent: {}", config.site.user_agent);

    println!("\nCrawl pacing:");
    println!(
        "  Delay window: {}..{} ms",
        config.crawl.delay_min_ms, config.crawl.delay_max_ms
    );

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would fetch pages {}1 through {}{}",
        config.site.base_url, config.site.base_url, config.site.total_pages
    );
}

/// Handles the main harvest: crawl, print statistics, export CSV
async fn handle_harvest(
    config: marquee::config::Config,
    output_override: Option<PathBuf>,
) -> anyhow::Result<()> {
    let csv_path = output_override
        .unwrap_or_else(|| PathBuf::from(&config.output.csv_path));

    let mut progress = LogProgress;
    let dataset = run_harvest(config, &mut progress).await?;

    if dataset.is_empty() {
        tracing::warn!("Harvest produced no records");
    }

    let stats = compute_statistics(&dataset);
    print_statistics(&stats);

    write_csv(&dataset, &csv_path)?;
    println!("\n✓ Dataset exported to: {}", csv_path.display());

    Ok(())
}

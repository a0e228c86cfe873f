//! MovieCharts - movie revenue and director rating charts
//!
//! A CLI tool that loads a movie CSV dataset, averages gross revenue by
//! title year and IMDB score by director, and renders the results as a
//! line chart and a bar chart in SVG.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (arguments, config, unreadable dataset, write failure)

mod analysis;
mod cli;
mod config;
mod dataset;
mod models;
mod render;

use anyhow::{Context, Result};
use cli::Args;
use config::Config;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Load configuration before logging so the file can enable verbose output
    let mut config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    config.merge_with_args(&args);

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Initialize logging
    init_logging(args.log_level(config.general.verbose));

    info!("MovieCharts v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);
    debug!("Configuration: {:?}", config);

    if let Err(e) = run(args, config).await {
        error!("Chart generation failed: {:#}", e);
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .moviecharts.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(config::CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!("⚠️  .moviecharts.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .moviecharts.toml")?;

    println!("✅ Created .moviecharts.toml with default settings.");
    println!("   Edit it to customize columns, chart size, colors, and more.");
    Ok(())
}

/// Initialize logging at the given level.
fn init_logging(level: tracing::Level) {

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Load the dataset, aggregate it and write the charts.
async fn run(args: Args, config: Config) -> Result<()> {
    let start_time = Instant::now();

    // Step 1: load the full dataset before any processing
    let columns = dataset::Columns::from(&config.data);
    let records = dataset::load_records(&args.input, &columns)
        .await
        .with_context(|| format!("Failed to load dataset {}", args.input.display()))?;

    // Step 2: aggregate
    let top = config.aggregation.top_directors;
    let data = analysis::build_chart_data(&records, config.aggregation.min_year, top);

    if data.yearly_gross.is_empty() {
        warn!(
            "No records with gross and year from {} on; the line chart will be empty",
            config.aggregation.min_year
        );
    }
    if data.top_directors.is_empty() {
        warn!("No records with director and score; the bar chart will be empty");
    }

    // Handle --dry-run: print the series and exit
    if args.dry_run {
        let json = serde_json::to_string_pretty(&data)
            .context("Failed to serialize aggregated data")?;
        println!("{}", json);
        return Ok(());
    }

    // Step 3: render and write
    let charts = render::render_charts(&data, top, &config.chart);
    let output_dir = PathBuf::from(&config.general.output_dir);
    let written = render::write_charts(&charts, args.format, &output_dir)?;

    if !args.quiet {
        println!("\n📊 Chart Summary:");
        println!("   Records loaded: {}", records.len());
        match data.year_span() {
            Some((first, last)) => println!(
                "   Revenue years: {} ({}-{})",
                data.yearly_gross.len(),
                first,
                last
            ),
            None => println!("   Revenue years: 0"),
        }
        println!("   Directors ranked: {}", data.top_directors.len());
        for point in &data.top_directors {
            println!("     - {}", point);
        }
        println!("   Duration: {:.2}s", start_time.elapsed().as_secs_f64());
        println!("\n✅ Charts written:");
        for path in &written {
            println!("   {}", path.display());
        }
    }

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// Runs before logging is set up, so problems go straight to stderr.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => Ok(config),
        Ok(None) => Ok(Config::default()),
        Err(e) => {
            eprintln!("⚠️  Failed to load config, using defaults: {:#}", e);
            Ok(Config::default())
        }
    }
}

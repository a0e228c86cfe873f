//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// MovieCharts - movie revenue and director rating charts from a CSV dataset
///
/// Reads a movie dataset, averages gross revenue per year and IMDB score
/// per director, and renders a line chart and a bar chart as SVG.
///
/// Examples:
///   moviecharts --input movies.csv
///   moviecharts --input movies.csv --format svg --output-dir out
///   moviecharts --input movies.csv --min-year 2000 --top 10
///   moviecharts --input movies.csv --dry-run
///   moviecharts --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// CSV dataset to read
    #[arg(
        short,
        long,
        default_value = "movies.csv",
        value_name = "FILE",
        env = "MOVIECHARTS_INPUT"
    )]
    pub input: PathBuf,

    /// Directory the charts are written to
    ///
    /// Defaults to the value in .moviecharts.toml, or "charts".
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format (html, svg)
    ///
    /// html writes one index.html holding both charts;
    /// svg writes line_chart.svg and bar_chart.svg.
    #[arg(long, default_value = "html", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Path to configuration file
    ///
    /// If not specified, looks for .moviecharts.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Earliest title year included in the revenue chart
    #[arg(long, value_name = "YEAR")]
    pub min_year: Option<i32>,

    /// Number of directors shown in the ranking
    #[arg(long, value_name = "COUNT")]
    pub top: Option<usize>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the aggregated series as JSON instead of writing charts
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default .moviecharts.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Single HTML page (default)
    #[default]
    Html,
    /// Two standalone SVG files
    Svg,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.top == Some(0) {
            return Err("Top must be at least 1".to_string());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if !self.input.exists() {
            return Err(format!(
                "Input file does not exist: {}",
                self.input.display()
            ));
        }
        if !self.input.is_file() {
            return Err(format!("Input path is not a file: {}", self.input.display()));
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    ///
    /// `config_verbose` is the config file's `general.verbose`; `--quiet`
    /// still wins over it.
    pub fn log_level(&self, config_verbose: bool) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose || config_verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
impl Args {
    pub(crate) fn for_tests() -> Self {
        Args {
            input: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/movies.csv")),
            output_dir: None,
            format: OutputFormat::Html,
            config: None,
            min_year: None,
            top: None,
            verbose: false,
            quiet: false,
            dry_run: false,
            init_config: false,
        }
    }
}

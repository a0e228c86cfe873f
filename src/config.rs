//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.moviecharts.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = ".moviecharts.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Dataset column names.
    #[serde(default)]
    pub data: DataConfig,

    /// Aggregation parameters.
    #[serde(default)]
    pub aggregation: AggregationConfig,

    /// Chart layout and styling.
    #[serde(default)]
    pub chart: ChartConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Directory the charts are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            verbose: false,
        }
    }
}

fn default_output_dir() -> String {
    "charts".to_string()
}

/// Names of the CSV columns read from the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_gross_column")]
    pub gross_column: String,

    #[serde(default = "default_year_column")]
    pub year_column: String,

    #[serde(default = "default_director_column")]
    pub director_column: String,

    #[serde(default = "default_score_column")]
    pub score_column: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            gross_column: default_gross_column(),
            year_column: default_year_column(),
            director_column: default_director_column(),
            score_column: default_score_column(),
        }
    }
}

fn default_gross_column() -> String {
    "gross".to_string()
}

fn default_year_column() -> String {
    "title_year".to_string()
}

fn default_director_column() -> String {
    "director_name".to_string()
}

fn default_score_column() -> String {
    "imdb_score".to_string()
}

/// Aggregation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Earliest title year in the revenue time series.
    #[serde(default = "default_min_year")]
    pub min_year: i32,

    /// Number of directors shown in the ranking.
    #[serde(default = "default_top_directors")]
    pub top_directors: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            min_year: default_min_year(),
            top_directors: default_top_directors(),
        }
    }
}

fn default_min_year() -> i32 {
    crate::analysis::DEFAULT_MIN_YEAR
}

fn default_top_directors() -> usize {
    crate::analysis::DEFAULT_TOP_DIRECTORS
}

/// Outer dimensions, margins and colors shared by both charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Outer width in pixels.
    #[serde(default = "default_width")]
    pub width: f64,

    /// Outer height in pixels.
    #[serde(default = "default_height")]
    pub height: f64,

    /// Stroke color of the revenue line.
    #[serde(default = "default_color")]
    pub line_color: String,

    /// Fill color of the director bars.
    #[serde(default = "default_color")]
    pub bar_color: String,

    /// Stroke width of the revenue line.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Padding between bars, as a fraction of the band step.
    #[serde(default = "default_band_padding")]
    pub band_padding: f64,

    /// Space around the plot area.
    #[serde(default)]
    pub margin: Margin,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            line_color: default_color(),
            bar_color: default_color(),
            stroke_width: default_stroke_width(),
            band_padding: default_band_padding(),
            margin: Margin::default(),
        }
    }
}

impl ChartConfig {
    /// Width of the plot area inside the margins.
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Height of the plot area inside the margins.
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }
}

fn default_width() -> f64 {
    800.0
}

fn default_height() -> f64 {
    400.0
}

fn default_color() -> String {
    "blue".to_string()
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_band_padding() -> f64 {
    0.1
}

/// Chart margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    #[serde(default = "default_margin_top")]
    pub top: f64,
    #[serde(default = "default_margin_right")]
    pub right: f64,
    #[serde(default = "default_margin_bottom")]
    pub bottom: f64,
    #[serde(default = "default_margin_left")]
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: default_margin_top(),
            right: default_margin_right(),
            bottom: default_margin_bottom(),
            left: default_margin_left(),
        }
    }
}

fn default_margin_top() -> f64 {
    50.0
}

fn default_margin_right() -> f64 {
    30.0
}

fn default_margin_bottom() -> f64 {
    60.0
}

fn default_margin_left() -> f64 {
    70.0
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(CONFIG_FILE_NAME);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when they were given explicitly.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref output_dir) = args.output_dir {
            self.general.output_dir = output_dir.display().to_string();
        }
        if let Some(min_year) = args.min_year {
            self.aggregation.min_year = min_year;
        }
        if let Some(top) = args.top {
            self.aggregation.top_directors = top;
        }

        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Validate the merged configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.aggregation.top_directors == 0 {
            return Err("aggregation.top_directors must be at least 1".to_string());
        }
        if self.chart.inner_width() <= 0.0 || self.chart.inner_height() <= 0.0 {
            return Err("Chart margins leave no room to draw".to_string());
        }

        Ok(())
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.output_dir, "charts");
        assert_eq!(config.data.year_column, "title_year");
        assert_eq!(config.aggregation.min_year, 2010);
        assert_eq!(config.aggregation.top_directors, 6);
        assert_eq!(config.chart.inner_width(), 700.0);
        assert_eq!(config.chart.inner_height(), 290.0);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
output_dir = "out"
verbose = true

[data]
score_column = "rating"

[aggregation]
top_directors = 3

[chart]
width = 1000.0
bar_color = "steelblue"

[chart.margin]
left = 100.0
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.general.output_dir, "out");
        assert!(config.general.verbose);
        assert_eq!(config.data.score_column, "rating");
        assert_eq!(config.data.gross_column, "gross");
        assert_eq!(config.aggregation.top_directors, 3);
        assert_eq!(config.aggregation.min_year, 2010);
        assert_eq!(config.chart.bar_color, "steelblue");
        assert_eq!(config.chart.line_color, "blue");
        assert_eq!(config.chart.margin.left, 100.0);
        assert_eq!(config.chart.margin.top, 50.0);
        assert_eq!(config.chart.inner_width(), 870.0);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[data]"));
        assert!(toml_str.contains("[aggregation]"));
        assert!(toml_str.contains("[chart.margin]"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.chart.width, 800.0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[aggregation]\nmin_year = 2005").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.aggregation.min_year, 2005);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[aggregation\nmin_year = ").unwrap();

        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = Config::default();
        let mut args = Args::for_tests();
        args.output_dir = Some(PathBuf::from("public"));
        args.top = Some(10);

        config.merge_with_args(&args);

        assert_eq!(config.general.output_dir, "public");
        assert_eq!(config.aggregation.top_directors, 10);
        // Not given on the command line, so the file value stays.
        assert_eq!(config.aggregation.min_year, 2010);
    }

    #[test]
    fn test_merge_verbose_flag() {
        let mut config = Config::default();
        let mut args = Args::for_tests();

        config.merge_with_args(&args);
        assert!(!config.general.verbose);

        args.verbose = true;
        config.merge_with_args(&args);
        assert!(config.general.verbose);
    }

    #[test]
    fn test_validate_rejects_zero_top_directors() {
        let mut config: Config = toml::from_str("[aggregation]\ntop_directors = 0").unwrap();
        assert!(config.validate().is_err());

        let mut args = Args::for_tests();
        args.top = Some(3);
        config.merge_with_args(&args);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_margins() {
        let config: Config = toml::from_str("[chart]\nwidth = 50.0").unwrap();
        assert!(config.validate().is_err());
        assert!(Config::default().validate().is_ok());
    }
}

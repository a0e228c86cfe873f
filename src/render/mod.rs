//! Chart rendering.
//!
//! Maps aggregated series to pixel space with linear and band scales and
//! writes the result as SVG, either as two standalone files or embedded in
//! a single HTML page.

pub mod axis;
pub mod bar_chart;
pub mod line_chart;
pub mod page;
pub mod scale;
pub mod svg;

pub use bar_chart::render_bar_chart;
pub use line_chart::render_line_chart;
pub use page::render_page;

use crate::cli::OutputFormat;
use crate::config::ChartConfig;
use crate::models::ChartData;
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the HTML page output.
pub const PAGE_FILE: &str = "index.html";

/// File name of the standalone line chart.
pub const LINE_CHART_FILE: &str = "line_chart.svg";

/// File name of the standalone bar chart.
pub const BAR_CHART_FILE: &str = "bar_chart.svg";

/// Both charts rendered to SVG text.
#[derive(Debug, Clone)]
pub struct RenderedCharts {
    pub line_chart: String,
    pub bar_chart: String,
}

/// Render both charts from the aggregated data.
pub fn render_charts(data: &ChartData, top: usize, config: &ChartConfig) -> RenderedCharts {
    debug!(
        "Rendering {} years and {} directors",
        data.yearly_gross.len(),
        data.top_directors.len()
    );

    RenderedCharts {
        line_chart: render_line_chart(&data.yearly_gross, config),
        bar_chart: render_bar_chart(&data.top_directors, top, config),
    }
}

/// Write the rendered charts into `dir` and return the written paths.
pub fn write_charts(
    charts: &RenderedCharts,
    format: OutputFormat,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let outputs = match format {
        OutputFormat::Html => vec![(
            dir.join(PAGE_FILE),
            render_page(&charts.line_chart, &charts.bar_chart, Utc::now()),
        )],
        OutputFormat::Svg => vec![
            (dir.join(LINE_CHART_FILE), standalone(&charts.line_chart)),
            (dir.join(BAR_CHART_FILE), standalone(&charts.bar_chart)),
        ],
    };

    let mut written = Vec::with_capacity(outputs.len());
    for (path, content) in outputs {
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write chart to {}", path.display()))?;
        info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

/// Prefix an SVG element with the XML declaration.
fn standalone(svg: &str) -> String {
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}", svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DirectorPoint, YearPoint};
    use tempfile::TempDir;

    fn sample_data() -> ChartData {
        ChartData {
            yearly_gross: vec![
                YearPoint::new(2010, 200.0),
                YearPoint::new(2011, 500.0),
            ],
            top_directors: vec![DirectorPoint::new("B".to_string(), 9.0)],
        }
    }

    #[test]
    fn test_write_html() {
        let dir = TempDir::new().unwrap();
        let charts = render_charts(&sample_data(), 6, &ChartConfig::default());

        let written = write_charts(&charts, OutputFormat::Html, dir.path()).unwrap();

        assert_eq!(written, vec![dir.path().join(PAGE_FILE)]);
        let html = std::fs::read_to_string(&written[0]).unwrap();
        assert!(html.contains("<svg id=\"lineChart\""));
        assert!(html.contains("<svg id=\"barChart\""));
    }

    #[test]
    fn test_write_svg_files() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested/charts");
        let charts = render_charts(&sample_data(), 6, &ChartConfig::default());

        let written = write_charts(&charts, OutputFormat::Svg, &out).unwrap();

        assert_eq!(written.len(), 2);
        let line = std::fs::read_to_string(out.join(LINE_CHART_FILE)).unwrap();
        let bar = std::fs::read_to_string(out.join(BAR_CHART_FILE)).unwrap();
        assert!(line.starts_with("<?xml"));
        assert!(line.contains("id=\"lineChart\""));
        assert!(bar.contains("id=\"barChart\""));
    }

    #[test]
    fn test_render_empty_data() {
        let charts = render_charts(&ChartData::default(), 6, &ChartConfig::default());

        assert!(!charts.line_chart.contains("class=\"line\""));
        assert!(!charts.bar_chart.contains("<rect"));
    }
}

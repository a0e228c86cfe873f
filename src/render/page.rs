//! HTML page holding both chart containers.

use chrono::{DateTime, Utc};

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em; }
svg { display: block; margin-bottom: 2em; }
.title { font-size: 18px; font-weight: bold; text-anchor: middle; }
.axis-label { font-size: 14px; text-anchor: middle; }
";

/// Build a standalone HTML document around the two rendered charts.
pub fn render_page(line_chart: &str, bar_chart: &str, generated_at: DateTime<Utc>) -> String {
    let mut page = String::new();

    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str("<title>Movie Charts</title>\n");
    page.push_str(&format!("<style>\n{}</style>\n", STYLE));
    page.push_str("</head>\n<body>\n");

    page.push_str(line_chart);
    page.push_str(bar_chart);

    page.push_str(&format!(
        "<footer>Generated {} by moviecharts v{}</footer>\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        env!("CARGO_PKG_VERSION")
    ));
    page.push_str("</body>\n</html>\n");

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_page() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let page = render_page("<svg id=\"lineChart\"></svg>", "<svg id=\"barChart\"></svg>", at);

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<svg id=\"lineChart\">"));
        assert!(page.contains("<svg id=\"barChart\">"));
        assert!(page.find("lineChart") < page.find("barChart"));
        assert!(page.contains("Generated 2024-05-01 12:30:00 UTC"));
        assert!(page.contains(".axis-label"));
    }
}

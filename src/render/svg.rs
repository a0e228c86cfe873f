//! Low-level SVG text helpers.

use crate::config::ChartConfig;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Escape text for use in XML content or attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Format a coordinate with at most two decimals and no trailing zeros.
pub fn num(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Opening tags of a chart: the `<svg>` container and the plot group
/// shifted by the margins.
pub fn open_chart(id: &str, config: &ChartConfig) -> String {
    format!(
        "<svg id=\"{}\" xmlns=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n<g transform=\"translate({},{})\">\n",
        escape(id),
        SVG_NAMESPACE,
        num(config.width),
        num(config.height),
        num(config.width),
        num(config.height),
        num(config.margin.left),
        num(config.margin.top),
    )
}

/// Closing tags matching [`open_chart`].
pub fn close_chart() -> &'static str {
    "</g>\n</svg>\n"
}

/// A static text label.
#[derive(Debug, Clone)]
pub struct Label<'a> {
    pub class: &'a str,
    pub text: &'a str,
    pub x: f64,
    pub y: f64,
    /// Rotate the label to run bottom-to-top; `x` and `y` are then in the
    /// rotated frame.
    pub vertical: bool,
}

impl Label<'_> {
    pub fn render(&self) -> String {
        let rotate = if self.vertical {
            " transform=\"rotate(-90)\""
        } else {
            ""
        };

        format!(
            "<text class=\"{}\"{} text-anchor=\"middle\" x=\"{}\" y=\"{}\">{}</text>\n",
            escape(self.class),
            rotate,
            num(self.x),
            num(self.y),
            escape(self.text),
        )
    }
}

//! Line chart of average gross revenue by year.

use super::axis::{format_millions, Axis};
use super::scale::{LinearScale, DEFAULT_TICK_COUNT};
use super::svg::{close_chart, escape, num, open_chart, Label};
use crate::config::ChartConfig;
use crate::models::YearPoint;

/// Id of the line chart container.
pub const LINE_CHART_ID: &str = "lineChart";

const TITLE: &str = "Trends in Average Gross Movie Revenue";

/// Widest year span that still gets one tick per year.
const MAX_YEARLY_TICK_SPAN: i64 = (DEFAULT_TICK_COUNT * 2) as i64;

/// Chart title, including the year span when there is data.
pub fn title(points: &[YearPoint]) -> String {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => format!("{} ({}\u{2013}{})", TITLE, first.key, last.key),
        _ => TITLE.to_string(),
    }
}

/// Render the revenue line chart as an `<svg>` element.
///
/// `points` must be sorted ascending by year.
pub fn render_line_chart(points: &[YearPoint], config: &ChartConfig) -> String {
    let width = config.inner_width();
    let height = config.inner_height();
    let mut svg = open_chart(LINE_CHART_ID, config);

    let mut x_axis = Axis::bottom((0.0, width));
    let mut y_axis = Axis::left((height, 0.0));

    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        let x = LinearScale::new((first.key as f64, last.key as f64), (0.0, width));
        let y = LinearScale::new((0.0, max_value(points)), (height, 0.0));

        svg.push_str(&format!(
            "<path class=\"line\" d=\"{}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"/>\n",
            path_data(points, &x, &y),
            escape(&config.line_color),
            num(config.stroke_width),
        ));

        x_axis = x_axis.with_linear_ticks(&x, &year_ticks(first.key, last.key, &x), |v| {
            format!("{}", v as i64)
        });
        y_axis = y_axis.with_linear_ticks(&y, &y.ticks(DEFAULT_TICK_COUNT), format_millions);
    }

    svg.push_str(&x_axis.render((0.0, height)));
    svg.push_str(&y_axis.render((0.0, 0.0)));

    svg.push_str(
        &Label {
            class: "title",
            text: &title(points),
            x: width / 2.0,
            y: -config.margin.top / 2.0,
            vertical: false,
        }
        .render(),
    );
    svg.push_str(
        &Label {
            class: "axis-label",
            text: "Year",
            x: width / 2.0,
            y: height + config.margin.bottom / 2.0 + 10.0,
            vertical: false,
        }
        .render(),
    );
    svg.push_str(
        &Label {
            class: "axis-label",
            text: "Average Revenue (Million $)",
            x: -height / 2.0,
            y: -config.margin.left / 2.0 - 10.0,
            vertical: true,
        }
        .render(),
    );

    svg.push_str(close_chart());
    svg
}

/// Upper bound of the y domain. Falls back to 1 when every value is zero.
fn max_value(points: &[YearPoint]) -> f64 {
    let max = points.iter().map(|p| p.value).fold(0.0, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

/// Tick values for the year axis: every year over a short span, otherwise
/// the scale's round values that fall on whole years.
fn year_ticks(first: i32, last: i32, x: &LinearScale) -> Vec<f64> {
    if i64::from(last) - i64::from(first) <= MAX_YEARLY_TICK_SPAN {
        return (first..=last).map(f64::from).collect();
    }

    x.ticks(DEFAULT_TICK_COUNT)
        .into_iter()
        .filter(|v| v.fract() == 0.0)
        .collect()
}

/// SVG path data joining the points in order.
fn path_data(points: &[YearPoint], x: &LinearScale, y: &LinearScale) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let command = if i == 0 { 'M' } else { 'L' };
            format!("{}{},{}", command, num(x.map(p.key as f64)), num(y.map(p.value)))
        })
        .collect()
}

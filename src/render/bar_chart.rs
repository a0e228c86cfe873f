//! Bar chart of the top directors by average IMDB score.

use super::axis::{format_with_step, Axis};
use super::scale::{BandScale, LinearScale, DEFAULT_TICK_COUNT};
use super::svg::{close_chart, escape, num, open_chart, Label};
use crate::config::ChartConfig;
use crate::models::DirectorPoint;

/// Id of the bar chart container.
pub const BAR_CHART_ID: &str = "barChart";

/// Chart title for a ranking of `top` directors.
pub fn title(top: usize) -> String {
    format!("Top {} Directors' IMDB Scores", top)
}

/// Render the director ranking as an `<svg>` element.
///
/// `top` is the requested ranking size, used in the title.
pub fn render_bar_chart(points: &[DirectorPoint], top: usize, config: &ChartConfig) -> String {
    let width = config.inner_width();
    let height = config.inner_height();
    let mut svg = open_chart(BAR_CHART_ID, config);

    let x = BandScale::new(
        points.iter().map(|p| p.key.clone()).collect(),
        (0.0, width),
        config.band_padding,
    );
    let mut y_axis = Axis::left((height, 0.0));

    if !points.is_empty() {
        let max = points.iter().map(|p| p.value).fold(0.0, f64::max);
        let y = LinearScale::new((0.0, if max > 0.0 { max } else { 1.0 }), (height, 0.0));
        let bandwidth = x.bandwidth();

        for point in points {
            let Some(left) = x.position(&point.key) else {
                continue;
            };
            let top_edge = y.map(point.value);

            svg.push_str(&format!(
                "<rect class=\"bar\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"><title>{}</title></rect>\n",
                num(left),
                num(top_edge),
                num(bandwidth),
                num(height - top_edge),
                escape(&config.bar_color),
                escape(&point.to_string()),
            ));
        }

        let step = y.tick_step(DEFAULT_TICK_COUNT);
        y_axis = y_axis.with_linear_ticks(&y, &y.ticks(DEFAULT_TICK_COUNT), |v| {
            format_with_step(v, step)
        });
    }

    svg.push_str(&Axis::bottom((0.0, width)).with_band_ticks(&x).render((0.0, height)));
    svg.push_str(&y_axis.render((0.0, 0.0)));

    svg.push_str(
        &Label {
            class: "title",
            text: &title(top),
            x: width / 2.0,
            y: -10.0,
            vertical: false,
        }
        .render(),
    );
    svg.push_str(
        &Label {
            class: "axis-label",
            text: "Director",
            x: width / 2.0,
            y: height + config.margin.bottom / 2.0 + 10.0,
            vertical: false,
        }
        .render(),
    );
    svg.push_str(
        &Label {
            class: "axis-label",
            text: "Score",
            x: -height / 2.0,
            y: -config.margin.bottom / 2.0,
            vertical: true,
        }
        .render(),
    );

    svg.push_str(close_chart());
    svg
}

//! Axis rendering: domain line, tick marks and tick labels.

use super::scale::{BandScale, LinearScale};
use super::svg::{escape, num};

/// Length of a tick mark in pixels.
const TICK_SIZE: f64 = 6.0;

/// Distance from the axis line to a tick label.
const TICK_LABEL_OFFSET: f64 = 9.0;

/// Which side of the plot area an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

/// One tick: its pixel position along the axis and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// An axis ready to be rendered.
#[derive(Debug, Clone)]
pub struct Axis {
    orientation: Orientation,
    range: (f64, f64),
    ticks: Vec<Tick>,
}

impl Axis {
    pub fn bottom(range: (f64, f64)) -> Self {
        Self {
            orientation: Orientation::Bottom,
            range,
            ticks: Vec::new(),
        }
    }

    pub fn left(range: (f64, f64)) -> Self {
        Self {
            orientation: Orientation::Left,
            range,
            ticks: Vec::new(),
        }
    }

    /// Place a tick at each of `values`, labelled by `format`.
    pub fn with_linear_ticks(
        mut self,
        scale: &LinearScale,
        values: &[f64],
        format: impl Fn(f64) -> String,
    ) -> Self {
        self.ticks = values
            .iter()
            .map(|&v| Tick {
                position: scale.map(v),
                label: format(v),
            })
            .collect();
        self
    }

    /// Place a tick at the centre of every band, labelled with its key.
    pub fn with_band_ticks(mut self, scale: &BandScale) -> Self {
        self.ticks = scale
            .domain
            .iter()
            .filter_map(|key| {
                scale.center(key).map(|position| Tick {
                    position,
                    label: key.clone(),
                })
            })
            .collect();
        self
    }

    #[allow(dead_code)] // Inspected by tests
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Render the axis as a `<g>` translated by `offset`.
    pub fn render(&self, offset: (f64, f64)) -> String {
        let (r0, r1) = self.range;
        let mut out = String::new();

        let (anchor, domain) = match self.orientation {
            Orientation::Bottom => (
                "middle",
                format!("M{},{}V0H{}V{}", num(r0), num(TICK_SIZE), num(r1), num(TICK_SIZE)),
            ),
            Orientation::Left => (
                "end",
                format!("M{},{}H0V{}H{}", num(-TICK_SIZE), num(r0), num(r1), num(-TICK_SIZE)),
            ),
        };

        out.push_str(&format!(
            "<g class=\"axis\" transform=\"translate({},{})\" fill=\"none\" font-size=\"10\" font-family=\"sans-serif\" text-anchor=\"{}\">\n",
            num(offset.0),
            num(offset.1),
            anchor
        ));
        out.push_str(&format!(
            "<path class=\"domain\" stroke=\"currentColor\" d=\"{}\"/>\n",
            domain
        ));

        for tick in &self.ticks {
            out.push_str(&self.render_tick(tick));
        }

        out.push_str("</g>\n");
        out
    }

    fn render_tick(&self, tick: &Tick) -> String {
        let label = escape(&tick.label);

        match self.orientation {
            Orientation::Bottom => format!(
                "<g class=\"tick\" transform=\"translate({},0)\"><line stroke=\"currentColor\" y2=\"{}\"/><text fill=\"currentColor\" y=\"{}\" dy=\"0.71em\">{}</text></g>\n",
                num(tick.position),
                num(TICK_SIZE),
                num(TICK_LABEL_OFFSET),
                label
            ),
            Orientation::Left => format!(
                "<g class=\"tick\" transform=\"translate(0,{})\"><line stroke=\"currentColor\" x2=\"{}\"/><text fill=\"currentColor\" x=\"{}\" dy=\"0.32em\">{}</text></g>\n",
                num(tick.position),
                num(-TICK_SIZE),
                num(-TICK_LABEL_OFFSET),
                label
            ),
        }
    }
}

/// Format a tick value with as many decimals as the tick step needs.
pub fn format_with_step(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10()).ceil() as usize
    } else {
        0
    };
    format!("{:.*}", decimals, value)
}

/// Format a dollar amount in millions, e.g. `150000000` as `150M`.
pub fn format_millions(value: f64) -> String {
    let millions = (value / 1_000_000.0 * 1_000.0).round() / 1_000.0;
    format!("{}M", millions)
}

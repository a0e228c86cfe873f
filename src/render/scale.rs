//! Domain-to-pixel scales.

/// Tick count used when an axis does not ask for one.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// A continuous scale mapping `domain` linearly onto `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to the range.
    ///
    /// A collapsed domain maps everything to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;

        if d0 == d1 {
            return (r0 + r1) / 2.0;
        }

        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Roughly `count` evenly spaced round values inside the domain.
    ///
    /// Steps are 1, 2 or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut start, mut stop) = self.domain;
        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }

        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }

        let Some(grid) = TickGrid::new(start, stop, count) else {
            return Vec::new();
        };
        let mut ticks: Vec<f64> = (grid.first..=grid.last).map(|i| grid.value(i)).collect();

        if reverse {
            ticks.reverse();
        }
        ticks
    }

    /// Spacing between the values returned by [`ticks`](Self::ticks).
    pub fn tick_step(&self, count: usize) -> f64 {
        let (d0, d1) = self.domain;
        let (start, stop) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };

        TickGrid::new(start, stop, count)
            .map(|grid| grid.step())
            .unwrap_or(0.0)
    }
}

/// Tick positions as integer multiples of a step.
///
/// A negative `increment` means the step is `1 / -increment`, which keeps
/// sub-unit steps exact.
struct TickGrid {
    first: i64,
    last: i64,
    increment: f64,
}

impl TickGrid {
    fn new(start: f64, stop: f64, count: usize) -> Option<Self> {
        let step = (stop - start) / count.max(1) as f64;
        if !(step > 0.0) || !step.is_finite() {
            return None;
        }

        let power = step.log10().floor();
        let error = step / 10f64.powf(power);
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };

        let (first, last, increment) = if power < 0.0 {
            let inc = 10f64.powf(-power) / factor;
            let mut first = (start * inc).round();
            let mut last = (stop * inc).round();
            if first / inc < start {
                first += 1.0;
            }
            if last / inc > stop {
                last -= 1.0;
            }
            (first, last, -inc)
        } else {
            let inc = 10f64.powf(power) * factor;
            let mut first = (start / inc).round();
            let mut last = (stop / inc).round();
            if first * inc < start {
                first += 1.0;
            }
            if last * inc > stop {
                last -= 1.0;
            }
            (first, last, inc)
        };

        if last < first {
            return None;
        }

        Some(Self {
            first: first as i64,
            last: last as i64,
            increment,
        })
    }

    fn value(&self, i: i64) -> f64 {
        if self.increment < 0.0 {
            i as f64 / -self.increment
        } else {
            i as f64 * self.increment
        }
    }

    fn step(&self) -> f64 {
        if self.increment < 0.0 {
            1.0 / -self.increment
        } else {
            self.increment
        }
    }
}

/// A categorical scale giving each key an equal-width band.
///
/// Inner and outer padding are both `padding`, expressed as a fraction of
/// the step between bands; bands are centred in the range.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    pub domain: Vec<String>,
    pub range: (f64, f64),
    pub padding: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        Self {
            domain,
            range,
            padding: padding.clamp(0.0, 1.0),
        }
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;

        (r1 - r0) / (n - self.padding + 2.0 * self.padding).max(1.0)
    }

    /// Width of each band.
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Start of the band for `key`, or `None` for an unknown key.
    pub fn position(&self, key: &str) -> Option<f64> {
        let index = self.domain.iter().position(|k| k == key)?;
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        let step = self.step();
        let start = r0 + (r1 - r0 - step * (n - self.padding)) * 0.5;

        Some(start + step * index as f64)
    }

    /// Centre of the band for `key`.
    pub fn center(&self, key: &str) -> Option<f64> {
        self.position(key).map(|x| x + self.bandwidth() / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_linear_map() {
        let scale = LinearScale::new((2010.0, 2016.0), (0.0, 600.0));
        assert!(approx(scale.map(2010.0), 0.0));
        assert!(approx(scale.map(2013.0), 300.0));
        assert!(approx(scale.map(2016.0), 600.0));
    }

    #[test]
    fn test_linear_map_inverted_range() {
        let scale = LinearScale::new((0.0, 100.0), (290.0, 0.0));
        assert!(approx(scale.map(0.0), 290.0));
        assert!(approx(scale.map(100.0), 0.0));
        assert!(approx(scale.map(50.0), 145.0));
    }

    #[test]
    fn test_linear_map_collapsed_domain() {
        let scale = LinearScale::new((2012.0, 2012.0), (0.0, 700.0));
        assert!(approx(scale.map(2012.0), 350.0));
    }

    #[test]
    fn test_ticks_integer_steps() {
        let scale = LinearScale::new((0.0, 9.0), (0.0, 1.0));
        assert_eq!(
            scale.ticks(10),
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
        assert_eq!(scale.tick_step(10), 1.0);
    }

    #[test]
    fn test_ticks_large_values() {
        let scale = LinearScale::new((0.0, 183_000_000.0), (290.0, 0.0));
        let ticks = scale.ticks(10);

        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&180_000_000.0));
        assert_eq!(scale.tick_step(10), 20_000_000.0);
    }

    #[test]
    fn test_ticks_fractional_steps() {
        let scale = LinearScale::new((0.0, 1.0), (0.0, 1.0));
        let ticks = scale.ticks(5);

        assert_eq!(ticks, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert!(approx(scale.tick_step(5), 0.2));
    }

    #[test]
    fn test_ticks_reversed_and_degenerate() {
        let scale = LinearScale::new((10.0, 0.0), (0.0, 1.0));
        let ticks = scale.ticks(5);
        assert_eq!(ticks.first(), Some(&10.0));
        assert_eq!(ticks.last(), Some(&0.0));

        let flat = LinearScale::new((3.0, 3.0), (0.0, 1.0));
        assert_eq!(flat.ticks(10), vec![3.0]);
        assert!(flat.ticks(0).is_empty());
    }

    #[test]
    fn test_band_scale_geometry() {
        let domain: Vec<String> = ["A", "B", "C", "D", "E", "F"]
            .into_iter()
            .map(String::from)
            .collect();
        let scale = BandScale::new(domain, (0.0, 700.0), 0.1);

        // n - inner + 2 * outer = 6.1
        let step = 700.0 / 6.1;
        assert!(approx(scale.step(), step));
        assert!(approx(scale.bandwidth(), step * 0.9));
        assert!(approx(scale.position("A").unwrap(), step * 0.1));
        assert!(approx(scale.position("B").unwrap(), step * 1.1));
        assert!(approx(
            scale.position("F").unwrap() + scale.bandwidth() + step * 0.1,
            700.0
        ));
        assert_eq!(scale.position("Z"), None);
    }

    #[test]
    fn test_band_scale_empty_domain() {
        let scale = BandScale::new(Vec::new(), (0.0, 700.0), 0.1);
        assert!(approx(scale.step(), 700.0));
        assert_eq!(scale.position("A"), None);
    }
}

//! Group-by-mean aggregation.
//!
//! This module provides the generic filter/group/mean/sort/truncate
//! pipeline and the two instantiations that feed the charts.

use crate::models::{AggregatedPoint, DirectorPoint, Record, YearPoint};
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::hash::Hash;
use tracing::debug;

/// Earliest title year included in the revenue time series by default.
pub const DEFAULT_MIN_YEAR: i32 = 2010;

/// Number of directors kept in the ranking by default.
pub const DEFAULT_TOP_DIRECTORS: usize = 6;

type Predicate<'a, R> = Box<dyn Fn(&R) -> bool + 'a>;
type Extractor<'a, R, T> = Box<dyn Fn(&R) -> Option<T> + 'a>;
type Comparator<'a, K> = Box<dyn Fn(&AggregatedPoint<K>, &AggregatedPoint<K>) -> Ordering + 'a>;

/// Running sum and count for one group.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Returns the mean, or `None` for an empty accumulator.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }

    #[allow(dead_code)] // Inspected by tests
    pub fn count(&self) -> usize {
        self.count
    }
}

/// How many records took part in an aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationSummary {
    /// Records offered to the aggregation.
    pub considered: usize,
    /// Records that passed the filter and contributed to a group.
    pub contributing: usize,
    /// Distinct groups before truncation.
    pub groups: usize,
}

/// A group-by-mean over records of type `R`, keyed by `K`.
///
/// Records whose key or value extractor returns `None`, or that fail any
/// filter, are excluded. Groups keep first-seen order, and ordering uses a
/// stable sort, so ties stay in encounter order.
pub struct Aggregation<'a, R, K> {
    filters: Vec<Predicate<'a, R>>,
    key: Extractor<'a, R, K>,
    value: Extractor<'a, R, f64>,
    order: Option<Comparator<'a, K>>,
    limit: Option<usize>,
}

impl<'a, R, K> Aggregation<'a, R, K>
where
    K: Eq + Hash,
{
    /// Create an aggregation from a key extractor and a value extractor.
    pub fn new(
        key: impl Fn(&R) -> Option<K> + 'a,
        value: impl Fn(&R) -> Option<f64> + 'a,
    ) -> Self {
        Self {
            filters: Vec::new(),
            key: Box::new(key),
            value: Box::new(value),
            order: None,
            limit: None,
        }
    }

    /// Add a predicate every contributing record must satisfy.
    pub fn filter(mut self, predicate: impl Fn(&R) -> bool + 'a) -> Self {
        self.filters.push(Box::new(predicate));
        self
    }

    /// Order the output with `compare`.
    pub fn order_by(
        mut self,
        compare: impl Fn(&AggregatedPoint<K>, &AggregatedPoint<K>) -> Ordering + 'a,
    ) -> Self {
        self.order = Some(Box::new(compare));
        self
    }

    /// Keep at most `n` points after ordering.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Run the aggregation.
    #[allow(dead_code)] // Callers currently want the summary too
    pub fn run(&self, records: &[R]) -> Vec<AggregatedPoint<K>> {
        self.run_with_summary(records).0
    }

    /// Run the aggregation and report how many records contributed.
    pub fn run_with_summary(&self, records: &[R]) -> (Vec<AggregatedPoint<K>>, AggregationSummary) {
        let mut groups: IndexMap<K, MeanAccumulator> = IndexMap::new();
        let mut summary = AggregationSummary {
            considered: records.len(),
            ..AggregationSummary::default()
        };

        for record in records {
            if !self.filters.iter().all(|keep| keep(record)) {
                continue;
            }
            let (Some(key), Some(value)) = ((self.key)(record), (self.value)(record)) else {
                continue;
            };

            groups.entry(key).or_default().push(value);
            summary.contributing += 1;
        }
        summary.groups = groups.len();

        let mut points: Vec<AggregatedPoint<K>> = groups
            .into_iter()
            .filter_map(|(key, acc)| acc.mean().map(|mean| AggregatedPoint::new(key, mean)))
            .collect();

        if let Some(ref compare) = self.order {
            points.sort_by(|a, b| compare(a, b));
        }
        if let Some(n) = self.limit {
            points.truncate(n);
        }

        (points, summary)
    }
}

/// Mean gross revenue per title year, from `min_year` on, ascending by year.
pub fn yearly_mean_gross(records: &[Record], min_year: i32) -> Vec<YearPoint> {
    let (points, summary) = Aggregation::new(|r: &Record| r.year, |r: &Record| r.gross)
        .filter(move |r| r.year.is_some_and(|year| year >= min_year))
        .order_by(|a, b| a.key.cmp(&b.key))
        .run_with_summary(records);

    debug!(
        "Yearly gross: {} of {} records contributed to {} years",
        summary.contributing, summary.considered, summary.groups
    );
    points
}

/// The `limit` directors with the highest mean IMDB score, best first.
pub fn top_directors_by_score(records: &[Record], limit: usize) -> Vec<DirectorPoint> {
    let (points, summary) = Aggregation::new(
        |r: &Record| r.director_name().map(String::from),
        |r: &Record| r.score,
    )
    .order_by(|a, b| b.value.total_cmp(&a.value))
    .limit(limit)
    .run_with_summary(records);

    debug!(
        "Director scores: {} of {} records contributed to {} directors",
        summary.contributing, summary.considered, summary.groups
    );
    points
}

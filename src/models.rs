//! Data models for the chart pipeline.
//!
//! This module contains the record types produced by the loader and
//! the aggregated points consumed by the renderer.

use serde::Serialize;
use std::fmt;

/// A CSV row as read from disk, restricted to the columns the pipeline uses.
///
/// Each field is `None` when the configured column is absent from the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// Gross revenue text.
    pub gross: Option<String>,
    /// Title year text.
    pub title_year: Option<String>,
    /// Director name text.
    pub director_name: Option<String>,
    /// IMDB score text.
    pub imdb_score: Option<String>,
}

/// A movie record after field coercion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// Gross revenue in dollars.
    pub gross: Option<f64>,
    /// Title year.
    pub year: Option<i32>,
    /// Director name, possibly empty.
    pub director: String,
    /// IMDB rating.
    pub score: Option<f64>,
}

impl Record {
    /// Returns the director name if it is not blank.
    pub fn director_name(&self) -> Option<&str> {
        if self.director.trim().is_empty() {
            None
        } else {
            Some(&self.director)
        }
    }
}

/// The mean of one group of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedPoint<K> {
    /// Group key (a year or a director name).
    pub key: K,
    /// Arithmetic mean of the group's selected field.
    pub value: f64,
}

impl<K> AggregatedPoint<K> {
    pub fn new(key: K, value: f64) -> Self {
        Self { key, value }
    }
}

impl<K: fmt::Display> fmt::Display for AggregatedPoint<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.key, self.value)
    }
}

/// Average gross revenue for a title year.
pub type YearPoint = AggregatedPoint<i32>;

/// Average IMDB score for a director.
pub type DirectorPoint = AggregatedPoint<String>;

/// Both aggregated series, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    /// Mean gross by year, ascending by year.
    pub yearly_gross: Vec<YearPoint>,
    /// Top directors by mean score, descending by score.
    pub top_directors: Vec<DirectorPoint>,
}

impl ChartData {
    /// Returns the first and last year of the time series.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let first = self.yearly_gross.first()?;
        let last = self.yearly_gross.last()?;
        Some((first.key, last.key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_director_name_blank() {
        let mut record = Record {
            director: "   ".to_string(),
            ..Record::default()
        };
        assert_eq!(record.director_name(), None);

        record.director = "James Cameron".to_string();
        assert_eq!(record.director_name(), Some("James Cameron"));
    }

    #[test]
    fn test_point_display() {
        let point = DirectorPoint::new("Nolan".to_string(), 8.5);
        assert_eq!(point.to_string(), "Nolan: 8.50");
    }

    #[test]
    fn test_year_span() {
        let data = ChartData {
            yearly_gross: vec![YearPoint::new(2010, 1.0), YearPoint::new(2016, 2.0)],
            top_directors: Vec::new(),
        };
        assert_eq!(data.year_span(), Some((2010, 2016)));
        assert_eq!(ChartData::default().year_span(), None);
    }

    #[test]
    fn test_chart_data_serializes() {
        let data = ChartData {
            yearly_gross: vec![YearPoint::new(2010, 200.0)],
            top_directors: vec![DirectorPoint::new("B".to_string(), 9.0)],
        };
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"yearly_gross\""));
        assert!(json.contains("\"key\":2010"));
        assert!(json.contains("\"key\":\"B\""));
    }
}

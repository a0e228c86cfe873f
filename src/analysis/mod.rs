//! Aggregation of movie records into chart series.

pub mod aggregator;

pub use aggregator::*;

use crate::models::{ChartData, Record};

/// Build both chart series from the loaded records.
pub fn build_chart_data(records: &[Record], min_year: i32, top_directors: usize) -> ChartData {
    ChartData {
        yearly_gross: yearly_mean_gross(records, min_year),
        top_directors: top_directors_by_score(records, top_directors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{load_records, Columns};
    use std::path::Path;

    fn fixture() -> Vec<Record> {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/movies.csv");
        tokio_test::block_on(load_records(&path, &Columns::default())).unwrap()
    }

    #[test]
    fn test_build_chart_data_from_fixture() {
        let data = build_chart_data(&fixture(), DEFAULT_MIN_YEAR, DEFAULT_TOP_DIRECTORS);

        let years: Vec<i32> = data.yearly_gross.iter().map(|p| p.key).collect();
        assert_eq!(years, (2010..=2016).collect::<Vec<_>>());
        assert!((data.yearly_gross[0].value - 246_688_056.5).abs() < 1e-3);

        let names: Vec<&str> = data.top_directors.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(data.top_directors.len(), DEFAULT_TOP_DIRECTORS);
        assert_eq!(&names[..2], &["Christopher Nolan", "James Cameron"]);
        assert!(data
            .top_directors
            .windows(2)
            .all(|w| w[0].value >= w[1].value));
        assert!(names.iter().all(|name| !name.trim().is_empty()));
    }

    #[test]
    fn test_build_chart_data_respects_settings() {
        let records = fixture();
        let data = build_chart_data(&records, 2015, 2);

        assert!(data.yearly_gross.iter().all(|p| p.key >= 2015));
        assert_eq!(data.top_directors.len(), 2);
    }
}

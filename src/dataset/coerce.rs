//! Field coercion from raw CSV text to typed records.
//!
//! Parse failures never raise an error: the affected field becomes `None`
//! and the record drops out of any aggregation that needs it.

use crate::models::{RawRecord, Record};

/// Coerce a raw row into a typed record.
pub fn coerce(raw: &RawRecord) -> Record {
    Record {
        gross: raw.gross.as_deref().and_then(parse_number),
        year: raw.title_year.as_deref().and_then(parse_year),
        director: raw.director_name.clone().unwrap_or_default(),
        score: raw.imdb_score.as_deref().and_then(parse_number),
    }
}

/// Parse a finite number, ignoring surrounding whitespace.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a year. Accepts integral decimals such as `2010.0`.
pub fn parse_year(text: &str) -> Option<i32> {
    let value = parse_number(text)?;

    if value.fract() != 0.0 || value < i32::MIN as f64 || value > i32::MAX as f64 {
        return None;
    }

    Some(value as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(gross: &str, year: &str, director: &str, score: &str) -> RawRecord {
        RawRecord {
            gross: Some(gross.to_string()),
            title_year: Some(year.to_string()),
            director_name: Some(director.to_string()),
            imdb_score: Some(score.to_string()),
        }
    }

    #[test]
    fn test_coerce_complete_row() {
        let record = coerce(&raw("760505847", "2009", "James Cameron", "7.9"));
        assert_eq!(record.gross, Some(760505847.0));
        assert_eq!(record.year, Some(2009));
        assert_eq!(record.director, "James Cameron");
        assert_eq!(record.score, Some(7.9));
    }

    #[test]
    fn test_empty_fields_are_absent_not_zero() {
        let record = coerce(&raw("", " ", "", ""));
        assert_eq!(record.gross, None);
        assert_eq!(record.year, None);
        assert_eq!(record.director, "");
        assert_eq!(record.score, None);
    }

    #[test]
    fn test_missing_columns() {
        let record = coerce(&RawRecord::default());
        assert_eq!(record, Record::default());
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number(" 42.5 "), Some(42.5));
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2010"), Some(2010));
        assert_eq!(parse_year("2010.0"), Some(2010));
        assert_eq!(parse_year("2010.5"), None);
        assert_eq!(parse_year("1e12"), None);
        assert_eq!(parse_year(""), None);
    }

    #[test]
    fn test_director_copied_verbatim() {
        let record = coerce(&raw("1", "2012", "  Joss Whedon ", "8"));
        assert_eq!(record.director, "  Joss Whedon ");
    }
}

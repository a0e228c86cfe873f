//! Dataset loading.
//!
//! Reads the movie CSV from disk and turns every row into a typed
//! [`Record`]. Loading is the only asynchronous step of the pipeline;
//! everything after it works on the returned, immutable record set.

pub mod coerce;

use crate::models::{RawRecord, Record};
use csv::{ByteRecord, StringRecord};
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

pub use coerce::coerce;

/// Errors that abort loading the dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read CSV header: {0}")]
    Header(#[source] csv::Error),

    #[error("CSV parse error at line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Names of the CSV columns the pipeline reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub gross: String,
    pub year: String,
    pub director: String,
    pub score: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            gross: "gross".to_string(),
            year: "title_year".to_string(),
            director: "director_name".to_string(),
            score: "imdb_score".to_string(),
        }
    }
}

impl From<&crate::config::DataConfig> for Columns {
    fn from(config: &crate::config::DataConfig) -> Self {
        Self {
            gross: config.gross_column.clone(),
            year: config.year_column.clone(),
            director: config.director_column.clone(),
            score: config.score_column.clone(),
        }
    }
}

/// Header positions of the configured columns.
#[derive(Debug, Clone, Copy, Default)]
struct ColumnIndex {
    gross: Option<usize>,
    year: Option<usize>,
    director: Option<usize>,
    score: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, columns: &Columns) -> Self {
        let find = |name: &str| {
            let position = headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}') == name);
            if position.is_none() {
                warn!("Column '{}' not found in dataset; its values are treated as missing", name);
            }
            position
        };

        Self {
            gross: find(&columns.gross),
            year: find(&columns.year),
            director: find(&columns.director),
            score: find(&columns.score),
        }
    }

    /// Pull the configured fields out of a row, replacing invalid UTF-8.
    fn extract(&self, row: &ByteRecord) -> RawRecord {
        let field = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        };

        RawRecord {
            gross: field(self.gross),
            title_year: field(self.year),
            director_name: field(self.director),
            imdb_score: field(self.score),
        }
    }
}

/// Load and coerce every row of the dataset at `path`.
pub async fn load_records(path: &Path, columns: &Columns) -> Result<Vec<Record>, LoadError> {
    info!("Loading dataset: {}", path.display());

    let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes", bytes.len());

    let records = parse_records(bytes.as_slice(), columns)?;
    info!("Loaded {} records", records.len());

    Ok(records)
}

/// Parse CSV text with a header row into typed records.
///
/// Only header names are trimmed; field values reach the coercer as written.
pub fn parse_records<R: Read>(reader: R, columns: &Columns) -> Result<Vec<Record>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers().map_err(LoadError::Header)?.clone();
    let index = ColumnIndex::resolve(&headers, columns);

    let mut records = Vec::new();
    for result in reader.byte_records() {
        let row = result.map_err(|source| LoadError::Row {
            line: source.position().map(|p| p.line()).unwrap_or(0),
            source,
        })?;
        records.push(coerce(&index.extract(&row)));
    }

    Ok(records)
}

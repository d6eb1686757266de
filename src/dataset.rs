//! The in-memory tabular dataset and its CSV loader.

use std::path::Path;

use chrono::NaiveDate;
use encoding_rs::Encoding;
use log::info;

use crate::{
    data::{self, Value},
    error::LoadError,
    io_utils,
};

/// Columns every query depends on; ingest fails when any is absent from the
/// header row.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "release_date",
    "revenue",
    "budget",
    "vote_average",
    "vote_count",
    "director",
    "cast",
    "genres",
];

/// Resolved positions of the columns the queries read. `original_title` and
/// `release_year` are optional and only shape the Q3/Q5 output when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub release_date: usize,
    pub revenue: usize,
    pub budget: usize,
    pub vote_average: usize,
    pub vote_count: usize,
    pub director: usize,
    pub cast: usize,
    pub genres: usize,
    pub original_title: Option<usize>,
    pub release_year: Option<usize>,
}

impl Columns {
    pub fn resolve(headers: &[String], path: &Path) -> Result<Self, LoadError> {
        let required = |name: &str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| LoadError::MissingColumn {
                    column: name.to_string(),
                    path: path.to_path_buf(),
                })
        };
        let optional = |name: &str| headers.iter().position(|header| header == name);
        Ok(Self {
            release_date: required("release_date")?,
            revenue: required("revenue")?,
            budget: required("budget")?,
            vote_average: required("vote_average")?,
            vote_count: required("vote_count")?,
            director: required("director")?,
            cast: required("cast")?,
            genres: required("genres")?,
            original_title: optional("original_title"),
            release_year: optional("release_year"),
        })
    }
}

/// One movie record: the raw string cells, the opportunistically typed
/// cells, and the fields the cleaner precomputes for the queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub raw: Vec<String>,
    pub typed: Vec<Option<Value>>,
    pub release_date: Option<NaiveDate>,
    pub cast: Vec<String>,
    pub genres: Vec<String>,
}

impl Row {
    pub fn from_raw(raw: Vec<String>) -> Self {
        let typed = raw.iter().map(|cell| data::parse_cell(cell)).collect();
        Self {
            raw,
            typed,
            release_date: None,
            cast: Vec::new(),
            genres: Vec::new(),
        }
    }

    pub fn integer(&self, idx: usize) -> Option<i64> {
        self.typed[idx].as_ref().and_then(Value::as_i64)
    }

    pub fn float(&self, idx: usize) -> Option<f64> {
        self.typed[idx].as_ref().and_then(Value::as_f64)
    }
}

/// An ordered sequence of movie rows with a fixed column set.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub columns: Columns,
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Reads the raw dataset. Header names are trimmed and lowercased so the
    /// required-column check is case-insensitive in effect.
    pub fn load(
        path: &Path,
        delimiter: u8,
        encoding: &'static Encoding,
    ) -> Result<Self, LoadError> {
        let mut reader = io_utils::open_csv_reader(path, delimiter)?;
        let header_record = reader
            .byte_headers()
            .map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                source,
            })?
            .clone();
        let headers: Vec<String> = io_utils::decode_record(&header_record, encoding, path)?
            .iter()
            .map(|header| header.trim().to_lowercase())
            .collect();
        let columns = Columns::resolve(&headers, path)?;

        let mut rows = Vec::new();
        let mut record = csv::ByteRecord::new();
        loop {
            match reader.read_byte_record(&mut record) {
                Ok(true) => {}
                Ok(false) => break,
                Err(source) => {
                    return Err(LoadError::Read {
                        path: path.to_path_buf(),
                        source,
                    });
                }
            }
            let raw = io_utils::decode_record(&record, encoding, path)?;
            rows.push(Row::from_raw(raw));
        }

        info!(
            "Loaded {} row(s) across {} column(s) from {:?}",
            rows.len(),
            headers.len(),
            path
        );
        Ok(Dataset {
            headers,
            columns,
            rows,
        })
    }

    /// Renders one cell for output: the release-date column formats its
    /// parsed date (empty when unparseable), every other cell renders its
    /// typed value when present and falls back to the raw text.
    pub fn render_cell(&self, row: &Row, idx: usize) -> String {
        if idx == self.columns.release_date {
            return row
                .release_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
        }
        match &row.typed[idx] {
            Some(value) => value.as_display(),
            None => row.raw[idx].clone(),
        }
    }

    pub fn render_row(&self, row: &Row) -> Vec<String> {
        (0..self.headers.len())
            .map(|idx| self.render_cell(row, idx))
            .collect()
    }
}

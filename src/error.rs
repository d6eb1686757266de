use std::{io, path::PathBuf};

use thiserror::Error;

/// Fatal ingest failures: the dataset cannot be opened or decoded, a record
/// is malformed, or a column the queries depend on is absent.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open dataset {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed record in {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("cannot decode {path:?} as {encoding}")]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },
    #[error("required column '{column}' missing from {path:?}")]
    MissingColumn { column: String, path: PathBuf },
}

/// A cell that does not parse as the requested type. Recovered at the cell
/// by substituting the missing-value marker; never aborts the run.
#[derive(Debug, Error)]
#[error("cannot parse '{value}' as {expected}")]
pub struct ParseError {
    value: String,
    expected: &'static str,
}

impl ParseError {
    pub fn new(value: &str, expected: &'static str) -> Self {
        Self {
            value: value.to_string(),
            expected,
        }
    }
}

/// Fatal output failures while preparing the output directory or writing a
/// report file.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("cannot create output directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot create report file {path:?}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write report {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("cannot flush report {path:?}")]
    Flush {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

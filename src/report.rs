//! Query result tables and the report writer.

use std::{fs, path::Path};

use log::info;

use crate::{error::WriteError, io_utils};

/// A small ordered table produced by one query, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Creates the output directory (and parents) before the first write.
pub fn ensure_output_dir(dir: &Path) -> Result<(), WriteError> {
    fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Serializes one result table as a comma-separated file with a header row,
/// overwriting any existing file at `path`.
pub fn write_report(table: &ResultTable, path: &Path) -> Result<(), WriteError> {
    let mut writer = io_utils::create_report_writer(path)?;
    let write_err = |source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    };
    writer.write_record(table.headers()).map_err(write_err)?;
    for row in table.rows() {
        writer.write_record(row).map_err(write_err)?;
    }
    writer.flush().map_err(|source| WriteError::Flush {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} row(s) to {:?}", table.len(), path);
    Ok(())
}

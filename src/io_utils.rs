//! CSV reader/writer construction, input decoding, and delimiter handling.
//!
//! All file I/O in movie-reports flows through this module: extension-based
//! delimiter detection (`.csv` → comma, `.tsv` → tab) with manual override,
//! input decoding via `encoding_rs` (UTF-8 by default), and buffered CSV
//! reader/writer construction for the loader and the report writer.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use anyhow::{Result, anyhow};
use encoding_rs::{Encoding, UTF_8};

use crate::error::{LoadError, WriteError};

pub const DEFAULT_CSV_DELIMITER: u8 = b',';
pub const DEFAULT_TSV_DELIMITER: u8 = b'\t';

pub fn resolve_encoding(label: Option<&str>) -> Result<&'static Encoding> {
    if let Some(value) = label {
        Encoding::for_label(value.trim().as_bytes())
            .ok_or_else(|| anyhow!("Unknown encoding '{value}'"))
    } else {
        Ok(UTF_8)
    }
}

pub fn resolve_input_delimiter(path: &Path, provided: Option<u8>) -> u8 {
    provided.unwrap_or_else(|| match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => DEFAULT_TSV_DELIMITER,
        _ => DEFAULT_CSV_DELIMITER,
    })
}

pub fn printable_delimiter(delimiter: u8) -> String {
    match delimiter {
        b',' => ",".to_string(),
        b'\t' => "\\t".to_string(),
        b'\n' => "\\n".to_string(),
        other => (other as char).to_string(),
    }
}

pub fn open_csv_reader(path: &Path, delimiter: u8) -> Result<csv::Reader<BufReader<File>>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .delimiter(delimiter)
        .double_quote(true)
        .flexible(false);
    Ok(builder.from_reader(BufReader::new(file)))
}

/// Opens a comma-separated report writer, truncating any existing file.
/// Fields are quoted only when they contain the delimiter, quotes, or line
/// breaks.
pub fn create_report_writer(path: &Path) -> Result<csv::Writer<BufWriter<File>>, WriteError> {
    let file = File::create(path).map_err(|source| WriteError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut builder = csv::WriterBuilder::new();
    builder.delimiter(DEFAULT_CSV_DELIMITER).double_quote(true);
    Ok(builder.from_writer(BufWriter::new(file)))
}

pub fn decode_bytes(
    bytes: &[u8],
    encoding: &'static Encoding,
    path: &Path,
) -> Result<String, LoadError> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        Err(LoadError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        })
    } else {
        Ok(text.into_owned())
    }
}

pub fn decode_record(
    record: &csv::ByteRecord,
    encoding: &'static Encoding,
    path: &Path,
) -> Result<Vec<String>, LoadError> {
    record
        .iter()
        .map(|field| decode_bytes(field, encoding, path))
        .collect()
}

//! Normalization pass between ingest and the queries.

use std::collections::HashSet;

use chrono::NaiveDate;
use log::{debug, info};

use crate::{
    data,
    dataset::{Dataset, Row},
};

/// Applies the cleaning rules in order: drop exact-duplicate rows, trim
/// every cell, re-type the trimmed cells, parse release dates with the
/// century correction, and pre-split the pipe-delimited list fields.
///
/// `today` anchors the future-year correction; production passes the current
/// local date, tests pin a fixed one.
pub fn clean(dataset: Dataset, today: NaiveDate) -> Dataset {
    let Dataset {
        headers,
        columns,
        rows,
    } = dataset;
    let before = rows.len();

    // Full-row equality on the raw cells; first occurrence wins.
    let mut seen: HashSet<Vec<String>> = HashSet::with_capacity(rows.len());
    let mut kept: Vec<Row> = Vec::with_capacity(rows.len());
    for row in rows {
        if seen.insert(row.raw.clone()) {
            kept.push(row);
        }
    }
    let duplicates = before - kept.len();
    if duplicates > 0 {
        debug!("Dropped {duplicates} duplicate row(s)");
    }

    for row in &mut kept {
        for cell in &mut row.raw {
            let trimmed = cell.trim();
            if trimmed.len() != cell.len() {
                *cell = trimmed.to_string();
            }
        }
        row.typed = row.raw.iter().map(|cell| data::parse_cell(cell)).collect();
        row.release_date = data::parse_release_date(&row.raw[columns.release_date], today).ok();
        row.cast = split_list(&row.raw[columns.cast]);
        row.genres = split_list(&row.raw[columns.genres]);
    }

    info!(
        "Cleaned dataset: {} row(s) retained, {} duplicate(s) dropped",
        kept.len(),
        duplicates
    );
    Dataset {
        headers,
        columns,
        rows: kept,
    }
}

/// Splits a pipe-delimited multi-value field into trimmed, non-empty names.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

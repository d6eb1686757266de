//! Q1: the full dataset in reverse chronological order.

use crate::{
    dataset::{Dataset, Row},
    report::ResultTable,
};

/// Rows with a parsed release date, newest first; equal dates keep their
/// cleaned order. Rows whose date could not be parsed are absent from this
/// report only.
pub fn sort_by_release_date(dataset: &Dataset) -> ResultTable {
    let mut dated: Vec<(usize, &Row)> = dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.release_date.is_some())
        .collect();
    dated.sort_by(|a, b| {
        b.1.release_date
            .cmp(&a.1.release_date)
            .then_with(|| a.0.cmp(&b.0))
    });

    let mut table = ResultTable::new(dataset.headers.iter().cloned());
    for (_, row) in dated {
        table.push(dataset.render_row(row));
    }
    table
}

//! Q3 and Q4: revenue extremes and the revenue total.
//!
//! Both restrict to rows reporting revenue strictly above zero; the dataset
//! records zero for movies whose takings are unknown.

use crate::{
    dataset::{Dataset, Row},
    report::ResultTable,
};

/// Q3: the single highest- and lowest-grossing movies, labeled
/// `highest_revenue` and `lowest_revenue`. Ties resolve toward the first
/// occurrence in cleaned order; the result is empty when nothing grossed
/// above zero.
pub fn extremes(dataset: &Dataset) -> ResultTable {
    let c = &dataset.columns;
    let mut highest: Option<(&Row, i64)> = None;
    let mut lowest: Option<(&Row, i64)> = None;
    for row in &dataset.rows {
        let Some(revenue) = row.integer(c.revenue).filter(|r| *r > 0) else {
            continue;
        };
        if highest.is_none_or(|(_, best)| revenue > best) {
            highest = Some((row, revenue));
        }
        if lowest.is_none_or(|(_, worst)| revenue < worst) {
            lowest = Some((row, revenue));
        }
    }

    let detail = detail_columns(dataset);
    let mut headers = vec!["type".to_string()];
    headers.extend(detail.iter().map(|&idx| dataset.headers[idx].clone()));
    let mut table = ResultTable::new(headers);
    if let (Some((high, _)), Some((low, _))) = (highest, lowest) {
        table.push(labeled_row(dataset, "highest_revenue", high, &detail));
        table.push(labeled_row(dataset, "lowest_revenue", low, &detail));
    }
    table
}

/// Q4: the arithmetic sum of revenue across every qualifying movie; a single
/// `total_revenue` cell, zero when nothing qualifies.
pub fn total(dataset: &Dataset) -> ResultTable {
    let c = &dataset.columns;
    let total: i64 = dataset
        .rows
        .iter()
        .filter_map(|row| row.integer(c.revenue))
        .filter(|revenue| *revenue > 0)
        .sum();
    let mut table = ResultTable::new(["total_revenue"]);
    table.push([total.to_string()]);
    table
}

fn detail_columns(dataset: &Dataset) -> Vec<usize> {
    let c = &dataset.columns;
    let mut columns = Vec::new();
    if let Some(idx) = c.original_title {
        columns.push(idx);
    }
    columns.push(c.revenue);
    columns.push(c.budget);
    if let Some(idx) = c.release_year {
        columns.push(idx);
    }
    columns.push(c.release_date);
    columns
}

fn labeled_row(dataset: &Dataset, label: &str, row: &Row, detail: &[usize]) -> Vec<String> {
    let mut record = vec![label.to_string()];
    record.extend(detail.iter().map(|&idx| dataset.render_cell(row, idx)));
    record
}

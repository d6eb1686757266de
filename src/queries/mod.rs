//! The seven report queries. Each is a pure function over the cleaned
//! dataset returning a [`ResultTable`](crate::report::ResultTable); none
//! mutates shared state or depends on another query's output.

pub mod chronology;
pub mod genres;
pub mod people;
pub mod profit;
pub mod ratings;
pub mod revenue;

use log::debug;

use crate::{dataset::Dataset, report::ResultTable};

/// Runs every query in report order, pairing each result with its output
/// file stem (`q1` .. `q7`).
pub fn run_all(dataset: &Dataset) -> Vec<(&'static str, ResultTable)> {
    let reports = vec![
        ("q1", chronology::sort_by_release_date(dataset)),
        ("q2", ratings::filter_high_rated(dataset)),
        ("q3", revenue::extremes(dataset)),
        ("q4", revenue::total(dataset)),
        ("q5", profit::top_profit(dataset)),
        ("q6", people::most_prolific(dataset)),
        ("q7", genres::count_by_genre(dataset)),
    ];
    for (name, table) in &reports {
        debug!("{name}: {} row(s)", table.len());
    }
    reports
}

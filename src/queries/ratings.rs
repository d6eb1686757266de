//! Q2: highly rated movies.

use crate::{
    dataset::{Dataset, Row},
    report::ResultTable,
};

const RATING_THRESHOLD: f64 = 7.5;

/// Movies rated strictly above 7.5, best first. Equal ratings order by vote
/// count descending; rows missing a vote count sort last among those ties,
/// and remaining ties keep their cleaned order.
pub fn filter_high_rated(dataset: &Dataset) -> ResultTable {
    let c = &dataset.columns;
    let mut picked: Vec<(usize, &Row)> = dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            row.float(c.vote_average)
                .is_some_and(|rating| rating > RATING_THRESHOLD)
        })
        .collect();
    picked.sort_by(|a, b| {
        let rating = |row: &Row| row.float(c.vote_average).unwrap_or(f64::NEG_INFINITY);
        rating(b.1)
            .total_cmp(&rating(a.1))
            // Option orders None first, so comparing b to a puts missing
            // vote counts after every real count.
            .then_with(|| b.1.integer(c.vote_count).cmp(&a.1.integer(c.vote_count)))
            .then_with(|| a.0.cmp(&b.0))
    });

    let mut table = ResultTable::new(dataset.headers.iter().cloned());
    for (_, row) in picked {
        table.push(dataset.render_row(row));
    }
    table
}

//! Q7: how many movies carry each genre.

use std::collections::HashMap;

use itertools::Itertools;

use crate::{dataset::Dataset, report::ResultTable};

/// One count per row per listed genre, so a movie tagged "Action|Drama"
/// contributes to both. Output is sorted by count descending, then
/// alphabetically by genre.
pub fn count_by_genre(dataset: &Dataset) -> ResultTable {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for row in &dataset.rows {
        for genre in &row.genres {
            *counts.entry(genre.as_str()).or_insert(0) += 1;
        }
    }

    let mut table = ResultTable::new(["genre", "movie_count"]);
    for (genre, count) in counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
    {
        table.push([genre.to_string(), count.to_string()]);
    }
    table
}

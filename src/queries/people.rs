//! Q6: the most-prolific director and actor.

use std::collections::HashMap;

use crate::{dataset::Dataset, report::ResultTable};

/// Counter that remembers the order names were first seen so ties resolve
/// toward the earliest occurrence in cleaned order.
#[derive(Default)]
struct FirstSeenCounter {
    counts: HashMap<String, (usize, usize)>,
    next_ordinal: usize,
}

impl FirstSeenCounter {
    fn add(&mut self, name: &str) {
        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;
        let entry = self.counts.entry(name.to_string()).or_insert((0, ordinal));
        entry.0 += 1;
    }

    fn top(&self) -> Option<(&str, usize)> {
        self.counts
            .iter()
            .max_by(|a, b| {
                let (count_a, first_a) = a.1;
                let (count_b, first_b) = b.1;
                count_a.cmp(count_b).then_with(|| first_b.cmp(first_a))
            })
            .map(|(name, (count, _))| (name.as_str(), *count))
    }
}

/// Whoever directed the most movies and whoever appears in the most cast
/// lists, as `top_director` and `top_actor` rows. Each listed cast name is
/// one appearance; blank directors are skipped. A row is omitted when no
/// qualifying value exists at all.
pub fn most_prolific(dataset: &Dataset) -> ResultTable {
    let c = &dataset.columns;
    let mut directors = FirstSeenCounter::default();
    let mut actors = FirstSeenCounter::default();
    for row in &dataset.rows {
        let director = row.raw[c.director].as_str();
        if !director.is_empty() {
            directors.add(director);
        }
        for actor in &row.cast {
            actors.add(actor);
        }
    }

    let mut table = ResultTable::new(["role", "name", "movie_count"]);
    if let Some((name, count)) = directors.top() {
        table.push([
            "top_director".to_string(),
            name.to_string(),
            count.to_string(),
        ]);
    }
    if let Some((name, count)) = actors.top() {
        table.push(["top_actor".to_string(), name.to_string(), count.to_string()]);
    }
    table
}

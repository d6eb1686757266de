//! Q5: the most profitable movies.

use crate::{
    dataset::{Dataset, Row},
    report::ResultTable,
};

const TOP_N: usize = 10;

/// The ten most profitable movies among those reporting both revenue and
/// budget above zero, profit = revenue - budget. The filter is on the
/// inputs, not the result: a movie that lost money still qualifies and
/// ranks by its negative profit. Ties keep their cleaned order.
pub fn top_profit(dataset: &Dataset) -> ResultTable {
    let c = &dataset.columns;
    let mut ranked: Vec<(usize, &Row, i64)> = dataset
        .rows
        .iter()
        .enumerate()
        .filter_map(|(ordinal, row)| {
            let revenue = row.integer(c.revenue)?;
            let budget = row.integer(c.budget)?;
            (revenue > 0 && budget > 0).then_some((ordinal, row, revenue - budget))
        })
        .collect();
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(TOP_N);

    let mut detail = Vec::new();
    if let Some(idx) = c.original_title {
        detail.push(idx);
    }
    if let Some(idx) = c.release_year {
        detail.push(idx);
    }
    detail.push(c.budget);
    detail.push(c.revenue);

    let mut headers: Vec<String> = detail
        .iter()
        .map(|&idx| dataset.headers[idx].clone())
        .collect();
    headers.push("profit".to_string());
    let mut table = ResultTable::new(headers);
    for (_, row, profit) in ranked {
        let mut record: Vec<String> = detail
            .iter()
            .map(|&idx| dataset.render_cell(row, idx))
            .collect();
        record.push(profit.to_string());
        table.push(record);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::testutil;

    #[test]
    fn ranks_by_profit_and_keeps_losses() {
        // Both rows qualify because the filter is revenue > 0 AND
        // budget > 0, not profit > 0.
        let dataset = testutil::dataset(&[
            &["1", "Winner", "A", "D", "Drama", "1/1/90", "40", "100", "3", "4.0"],
            &["2", "Loser", "A", "D", "Drama", "1/1/90", "600", "500", "3", "4.0"],
        ]);
        let table = top_profit(&dataset);
        assert_eq!(
            table.headers(),
            &["original_title", "budget", "revenue", "profit"]
        );
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0], vec!["Winner", "40", "100", "60"]);
        assert_eq!(table.rows()[1], vec!["Loser", "600", "500", "-100"]);
    }

    #[test]
    fn skips_rows_missing_or_zero_revenue_or_budget() {
        let dataset = testutil::dataset(&[
            &["1", "NoBudget", "A", "D", "Drama", "1/1/90", "0", "100", "3", "4.0"],
            &["2", "NoRevenue", "A", "D", "Drama", "1/1/90", "40", "0", "3", "4.0"],
            &["3", "Blank", "A", "D", "Drama", "1/1/90", "", "100", "3", "4.0"],
            &["4", "Full", "A", "D", "Drama", "1/1/90", "40", "100", "3", "4.0"],
        ]);
        let table = top_profit(&dataset);
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0][0], "Full");
    }

    #[test]
    fn returns_at_most_ten_rows() {
        let rows: Vec<Vec<String>> = (0..12)
            .map(|n| {
                vec![
                    n.to_string(),
                    format!("Movie {n}"),
                    "A".to_string(),
                    "D".to_string(),
                    "Drama".to_string(),
                    "1/1/90".to_string(),
                    "10".to_string(),
                    (100 + n).to_string(),
                    "3".to_string(),
                    "4.0".to_string(),
                ]
            })
            .collect();
        let borrowed: Vec<Vec<&str>> = rows
            .iter()
            .map(|row| row.iter().map(String::as_str).collect())
            .collect();
        let slices: Vec<&[&str]> = borrowed.iter().map(Vec::as_slice).collect();
        let dataset = testutil::dataset(&slices);
        let table = top_profit(&dataset);
        assert_eq!(table.rows().len(), 10);
        // Highest profit first: revenue 111 - budget 10.
        assert_eq!(table.rows()[0][0], "Movie 11");
    }
}

//! Ranking engine: scores the whole dataset and applies the result policy.

use super::scorer::score;
use crate::dataset::types::Record;

/// Minimum score a result must reach under the multi-word policy.
pub const MULTI_WORD_MIN_SCORE: f64 = 10.0;

/// Scores every record against `query`, drops non-matches, and returns at
/// most `limit` results ordered by descending relevance.
///
/// The sort is stable, so records with equal scores keep their dataset
/// order. Multi-word queries go through a wider window first (`limit * 2`),
/// get filtered to scores of at least [`MULTI_WORD_MIN_SCORE`], and are then
/// truncated to `limit` — which can return fewer than `limit` results even
/// when more records scored above zero.
///
/// Callers reject empty and whitespace-only queries before getting here.
pub fn rank<'a>(query: &str, records: &'a [Record], limit: usize) -> Vec<(&'a Record, f64)> {
    let mut scored: Vec<(&Record, f64)> = records
        .iter()
        .filter_map(|record| {
            let score = score(query, record);
            (score > 0.0).then_some((record, score))
        })
        .collect();

    // sort_by is stable: ties keep dataset order.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    if query.split_whitespace().count() > 1 {
        let mut top: Vec<(&Record, f64)> = scored
            .into_iter()
            .take(limit * 2)
            .filter(|(_, score)| *score >= MULTI_WORD_MIN_SCORE)
            .collect();
        top.truncate(limit);
        top
    } else {
        scored.truncate(limit);
        scored
    }
}

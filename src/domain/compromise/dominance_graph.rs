//! Dominance Directed Graph compromise ranking.

use crate::domain::foundation::{RankingMatrix, SortOrder};
use crate::domain::ranking::rank_preferences;

/// Ranks alternatives by how many others they dominate.
///
/// For every method column, alternative `i` gains one point for each other
/// alternative holding a strictly worse (larger) rank in that column. Points
/// are summed across columns and ranked descending. Ties within a column
/// contribute nothing to either side.
pub fn dominance_directed_graph(ranks: &RankingMatrix) -> Vec<usize> {
    let m = ranks.alternatives();
    tracing::debug!(alternatives = m, methods = ranks.methods(), "Dominance graph compromise");

    let mut dominance = vec![0usize; m];
    for j in 0..ranks.methods() {
        let column = ranks.column(j);
        for (i, &rank) in column.iter().enumerate() {
            dominance[i] += column.iter().filter(|&&other| rank < other).count();
        }
    }

    let scores: Vec<f64> = dominance.into_iter().map(|d| d as f64).collect();
    rank_preferences(&scores, SortOrder::Descending)
}

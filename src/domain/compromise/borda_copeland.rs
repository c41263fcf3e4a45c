//! Borda count combined with the Copeland method.

use crate::domain::foundation::{RankingMatrix, SortOrder};
use crate::domain::ranking::rank_preferences;

/// Fuses rankings with Borda grades and Copeland wins/losses.
///
/// # Algorithm
/// - grade = m - rank (higher is better)
/// - wins_i = Σ grades of alternative i
/// - losses_i = Σ wins - wins_i
/// - consensus_i = wins_i - losses_i, ranked descending
pub fn borda_copeland(ranks: &RankingMatrix) -> Vec<usize> {
    let m = ranks.alternatives();
    tracing::debug!(alternatives = m, methods = ranks.methods(), "Borda-Copeland compromise");

    let wins: Vec<i64> = ranks
        .rows()
        .map(|row| row.iter().map(|&r| (m - r) as i64).sum())
        .collect();
    let total: i64 = wins.iter().sum();

    let consensus: Vec<f64> = wins
        .iter()
        .map(|&w| {
            let losses = total - w;
            (w - losses) as f64
        })
        .collect();

    rank_preferences(&consensus, SortOrder::Descending)
}

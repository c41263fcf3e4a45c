//! Rank Position Method compromise ranking.

use crate::domain::foundation::{RankingMatrix, SortOrder};
use crate::domain::ranking::rank_preferences;

/// Ranks alternatives by the harmonic aggregate `1 / Σ (1 / rank)`.
///
/// Works directly on rank numbers, so a smaller aggregate is better and the
/// result is ranked ascending.
pub fn rank_position_method(ranks: &RankingMatrix) -> Vec<usize> {
    tracing::debug!(
        alternatives = ranks.alternatives(),
        methods = ranks.methods(),
        "Rank position compromise"
    );

    let aggregate: Vec<f64> = ranks
        .rows()
        .map(|row| 1.0 / row.iter().map(|&r| 1.0 / r as f64).sum::<f64>())
        .collect();

    rank_preferences(&aggregate, SortOrder::Ascending)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harmonic_aggregate_ordering() {
        // aggregates: 1/2 = 0.5, 1/(1/2 + 1/3) = 1.2, 1/(1/3 + 1/2) = 1.2
        let ranks = RankingMatrix::from_rows(vec![vec![1, 1], vec![2, 3], vec![3, 2]]).unwrap();
        assert_eq!(rank_position_method(&ranks), vec![1, 2, 2]);
    }

    #[test]
    fn a_single_first_place_outweighs_consistent_middling() {
        // 1/(1 + 1/4) = 0.8 beats 1/(1/2 + 1/2) = 1.0
        let ranks = RankingMatrix::from_rows(vec![
            vec![1, 4],
            vec![2, 2],
            vec![3, 1],
            vec![4, 3],
        ])
        .unwrap();
        let consensus = rank_position_method(&ranks);
        assert!(consensus[0] < consensus[1]);
    }
}

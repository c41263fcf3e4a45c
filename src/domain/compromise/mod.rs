//! Compromise ranking - fusing several methods' rankings into one.
//!
//! All aggregators read a ranking (and, for the Improved Borda Rule, a
//! preference) matrix with alternatives in rows and methods in columns,
//! and return one consensus rank vector produced by
//! [`rank_preferences`](crate::domain::ranking::rank_preferences).
//!
//! # Components
//!
//! - `borda_copeland` - grade sums, wins minus losses
//! - `dominance_directed_graph` - count of alternatives strictly dominated
//! - `rank_position_method` - harmonic aggregate of ranks
//! - `improved_borda_rule` - three fixed-role branches (MULTIMOORA style)
//!
//! Borda-Copeland and the dominance graph are insensitive to column order.
//! The Improved Borda Rule is not: its three columns have fixed roles.

mod borda_copeland;
mod dominance_graph;
mod improved_borda;
mod rank_position;

pub use borda_copeland::borda_copeland;
pub use dominance_graph::dominance_directed_graph;
pub use improved_borda::improved_borda_rule;
pub use rank_position::rank_position_method;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::RankingMatrix;

/// Aggregators that need only a ranking matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompromiseMethod {
    BordaCopeland,
    DominanceDirectedGraph,
    RankPosition,
}

impl CompromiseMethod {
    /// All rank-only aggregators.
    pub const ALL: [CompromiseMethod; 3] = [
        CompromiseMethod::BordaCopeland,
        CompromiseMethod::DominanceDirectedGraph,
        CompromiseMethod::RankPosition,
    ];

    /// Runs the aggregator over `ranks`.
    pub fn apply(&self, ranks: &RankingMatrix) -> Vec<usize> {
        match self {
            CompromiseMethod::BordaCopeland => borda_copeland(ranks),
            CompromiseMethod::DominanceDirectedGraph => dominance_directed_graph(ranks),
            CompromiseMethod::RankPosition => rank_position_method(ranks),
        }
    }

    /// Short identifier.
    pub fn name(&self) -> &'static str {
        match self {
            CompromiseMethod::BordaCopeland => "borda_copeland",
            CompromiseMethod::DominanceDirectedGraph => "dominance_directed_graph",
            CompromiseMethod::RankPosition => "rank_position",
        }
    }
}

impl fmt::Display for CompromiseMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_dispatches_to_each_aggregator() {
        let ranks = RankingMatrix::from_rows(vec![vec![1, 2], vec![2, 1], vec![3, 3]]).unwrap();
        assert_eq!(CompromiseMethod::BordaCopeland.apply(&ranks), borda_copeland(&ranks));
        assert_eq!(
            CompromiseMethod::DominanceDirectedGraph.apply(&ranks),
            dominance_directed_graph(&ranks)
        );
        assert_eq!(
            CompromiseMethod::RankPosition.apply(&ranks),
            rank_position_method(&ranks)
        );
    }

    #[test]
    fn unanimous_rankings_are_reproduced_by_every_aggregator() {
        let ranks =
            RankingMatrix::from_columns(vec![vec![2, 4, 1, 3], vec![2, 4, 1, 3], vec![2, 4, 1, 3]])
                .unwrap();
        for method in CompromiseMethod::ALL {
            assert_eq!(method.apply(&ranks), vec![2, 4, 1, 3], "{}", method);
        }
    }

    #[test]
    fn method_serializes_snake_case() {
        let json = serde_json::to_string(&CompromiseMethod::RankPosition).unwrap();
        assert_eq!(json, "\"rank_position\"");
    }
}

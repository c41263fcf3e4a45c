//! Integration tests for the scoring and compromise pipeline.
//!
//! These tests verify the end-to-end flow:
//! 1. A decision matrix is scored by several configured methods
//! 2. Each preference vector becomes a rank vector
//! 3. Rank vectors are stacked and fused by a compromise aggregator
//!
//! Row-order independence and the sign-reversal property are checked with
//! generated inputs.

use proptest::prelude::*;

use mcda_rank::adapters::{PearsonCorrelation, SpearmanCorrelation};
use mcda_rank::application::MethodEnsemble;
use mcda_rank::config::{McdaConfig, ScoringConfig};
use mcda_rank::domain::compromise::{borda_copeland, CompromiseMethod};
use mcda_rank::domain::distance::{DistanceKind, Euclidean, Manhattan};
use mcda_rank::domain::foundation::{
    CriteriaWeights, CriterionType, DecisionMatrix, DegeneratePolicy, ErrorCode, McdaError,
    RankingMatrix, SortOrder,
};
use mcda_rank::domain::normalization::{
    MinMaxNormalization, NormalizationKind, SumNormalization, VectorNormalization,
};
use mcda_rank::domain::ranking::rank_preferences;
use mcda_rank::domain::scoring::{ScoringMethod, Topsis};
use mcda_rank::ports::RankCorrelation;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn laptop_matrix() -> DecisionMatrix {
    DecisionMatrix::new(vec![
        vec![256.0, 8.0, 41.0, 1.6, 1.77, 7347.16],
        vec![256.0, 8.0, 32.0, 1.0, 1.8, 6919.99],
        vec![256.0, 8.0, 53.0, 1.6, 1.9, 8400.0],
        vec![256.0, 8.0, 41.0, 1.0, 1.75, 6808.9],
        vec![512.0, 8.0, 35.0, 1.6, 1.7, 8479.99],
        vec![256.0, 4.0, 35.0, 1.6, 1.7, 7499.99],
    ])
    .unwrap()
}

fn laptop_weights() -> CriteriaWeights {
    CriteriaWeights::try_new(vec![0.405, 0.221, 0.134, 0.199, 0.007, 0.034]).unwrap()
}

fn laptop_types() -> Vec<CriterionType> {
    CriterionType::from_markers(&[1, 1, 1, 1, -1, -1]).unwrap()
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-4, "{actual:?} != {expected:?}");
    }
}

/// True when `b` orders every pair of alternatives opposite to `a`.
fn is_reversed(a: &[usize], b: &[usize]) -> bool {
    (0..a.len()).all(|i| {
        (0..a.len()).all(|j| a[i].cmp(&a[j]) == b[i].cmp(&b[j]).reverse())
    })
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn topsis_laptop_scenario_is_reproducible() {
    let topsis = Topsis::new(MinMaxNormalization::new(), Euclidean);
    let preferences = topsis
        .score(&laptop_matrix(), &laptop_weights(), &laptop_types())
        .unwrap();

    assert_close(
        &preferences,
        &[0.424223, 0.321733, 0.445286, 0.335333, 0.807625, 0.297079],
    );
    assert_eq!(
        rank_preferences(&preferences, topsis.preference_order()),
        vec![3, 5, 2, 4, 1, 6]
    );
}

#[test]
fn default_configuration_builds_the_reference_topsis() {
    let topsis = McdaConfig::default().scoring.build_topsis();
    let ranks = topsis
        .rank(&laptop_matrix(), &laptop_weights(), &laptop_types())
        .unwrap();
    assert_eq!(ranks, vec![3, 5, 2, 4, 1, 6]);
}

#[test]
fn ensemble_feeds_every_rank_only_aggregator() {
    let outcome = MethodEnsemble::new()
        .with_method("minmax-euclidean", Topsis::default())
        .with_method("vector-euclidean", Topsis::new(VectorNormalization::new(), Euclidean))
        .with_method("minmax-manhattan", Topsis::new(MinMaxNormalization::new(), Manhattan))
        .with_method("sum-manhattan", Topsis::new(SumNormalization::new(), Manhattan))
        .evaluate(&laptop_matrix(), &laptop_weights(), &laptop_types())
        .unwrap();

    assert_eq!(outcome.ranking_matrix().methods(), 4);
    for method in CompromiseMethod::ALL {
        let consensus = outcome.compromise(method);
        assert_eq!(consensus.len(), 6);
        assert_eq!(consensus[4], 1, "{method} did not favour alternative 5");
    }

    for coefficient in [
        &SpearmanCorrelation as &dyn RankCorrelation,
        &PearsonCorrelation,
    ] {
        let table = outcome.correlations(coefficient).unwrap();
        assert_eq!(table.coefficient(), coefficient.name());
        assert_eq!(table.len(), 4);
        for (i, row) in table.values().iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                assert!((-1.0..=1.0).contains(&value));
                assert!((value - table.get(j, i)).abs() < 1e-12);
            }
            assert!((row[i] - 1.0).abs() < 1e-12);
        }
    }
}

#[test]
fn hand_computed_aggregator_scenarios() {
    let borda = RankingMatrix::from_rows(vec![vec![1, 2], vec![2, 1], vec![3, 3]]).unwrap();
    assert_eq!(CompromiseMethod::BordaCopeland.apply(&borda), vec![1, 1, 2]);

    let rpm = RankingMatrix::from_rows(vec![vec![1, 1], vec![2, 3], vec![3, 2]]).unwrap();
    assert_eq!(CompromiseMethod::RankPosition.apply(&rpm), vec![1, 2, 2]);
}

#[test]
fn improved_borda_requires_three_role_columns() {
    let outcome = MethodEnsemble::new()
        .with_method("a", Topsis::default())
        .with_method("b", Topsis::new(VectorNormalization::new(), Euclidean))
        .evaluate(&laptop_matrix(), &laptop_weights(), &laptop_types())
        .unwrap();

    let err = outcome.improved_borda().unwrap_err();
    assert_eq!(err.code(), ErrorCode::RoleMismatch);
}

#[test]
fn degenerate_column_is_an_error_by_default() {
    let matrix = DecisionMatrix::new(vec![vec![5.0, 1.0], vec![5.0, 2.0], vec![5.0, 3.0]]).unwrap();
    let weights = CriteriaWeights::equal(2).unwrap();
    let types = [CriterionType::Benefit, CriterionType::Benefit];

    let err = Topsis::default().score(&matrix, &weights, &types).unwrap_err();
    assert_eq!(err, McdaError::ZeroRange { criterion: 0 });
    assert_eq!(err.code(), ErrorCode::DegenerateInput);
}

#[test]
fn degenerate_column_propagates_nan_when_configured() {
    let matrix = DecisionMatrix::new(vec![vec![5.0, 1.0], vec![5.0, 2.0], vec![5.0, 3.0]]).unwrap();
    let weights = CriteriaWeights::equal(2).unwrap();
    let types = [CriterionType::Benefit, CriterionType::Benefit];

    let topsis = ScoringConfig {
        normalization: NormalizationKind::MinMax,
        distance: DistanceKind::Euclidean,
        degenerate_policy: DegeneratePolicy::PropagateNan,
    }
    .build_topsis();

    let preferences = topsis.score(&matrix, &weights, &types).unwrap();
    assert!(preferences.iter().all(|p| p.is_nan()));
    assert_eq!(rank_preferences(&preferences, SortOrder::Descending), vec![1, 1, 1]);
}

#[test]
fn misaligned_inputs_are_rejected() {
    let weights = CriteriaWeights::equal(5).unwrap();
    let err = Topsis::default()
        .score(&laptop_matrix(), &weights, &laptop_types())
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ShapeMismatch);
}

// =============================================================================
// Properties
// =============================================================================

fn decision_problem() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<bool>, Vec<usize>)> {
    (2usize..7, 1usize..5).prop_flat_map(|(m, n)| {
        (
            prop::collection::vec(prop::collection::vec(1.0f64..100.0, n), m),
            prop::collection::vec(any::<bool>(), n),
            Just((0..m).collect::<Vec<_>>()).prop_shuffle(),
        )
    })
}

fn types_from(flags: &[bool]) -> Vec<CriterionType> {
    flags
        .iter()
        .map(|&benefit| if benefit { CriterionType::Benefit } else { CriterionType::Cost })
        .collect()
}

/// Relative tolerance for strategies that sum across rows.
const ROUNDING: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= ROUNDING * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn permuting_rows_permutes_min_max_preferences_and_ranks_exactly(
        (rows, flags, order) in decision_problem()
    ) {
        let matrix = DecisionMatrix::new(rows).unwrap();
        let weights = CriteriaWeights::equal(matrix.criteria()).unwrap();
        let types = types_from(&flags);
        let permuted = matrix.permute_rows(&order).unwrap();

        let topsis = Topsis::default();
        let original = topsis.score(&matrix, &weights, &types);
        let shuffled = topsis.score(&permuted, &weights, &types);

        match (original, shuffled) {
            (Ok(original), Ok(shuffled)) => {
                let expected: Vec<f64> = order.iter().map(|&i| original[i]).collect();
                prop_assert_eq!(&shuffled, &expected);

                let original_ranks = rank_preferences(&original, SortOrder::Descending);
                let shuffled_ranks = rank_preferences(&shuffled, SortOrder::Descending);
                let expected_ranks: Vec<usize> = order.iter().map(|&i| original_ranks[i]).collect();
                prop_assert_eq!(shuffled_ranks, expected_ranks);
            }
            (Err(a), Err(b)) => prop_assert_eq!(a.code(), b.code()),
            (a, b) => prop_assert!(false, "outcomes diverged: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn permuting_rows_permutes_summing_strategies_up_to_rounding(
        (rows, flags, order) in decision_problem(),
        kind in prop_oneof![Just(NormalizationKind::Vector), Just(NormalizationKind::Sum)],
    ) {
        let matrix = DecisionMatrix::new(rows).unwrap();
        let weights = CriteriaWeights::equal(matrix.criteria()).unwrap();
        let types = types_from(&flags);
        let permuted = matrix.permute_rows(&order).unwrap();

        let topsis = ScoringConfig { normalization: kind, ..ScoringConfig::default() }.build_topsis();
        let original = topsis.score(&matrix, &weights, &types).unwrap();
        let shuffled = topsis.score(&permuted, &weights, &types).unwrap();

        for (k, &i) in order.iter().enumerate() {
            prop_assert!(
                close(shuffled[k], original[i]),
                "{:?}: row {} scored {} before and {} after permutation",
                kind, i, original[i], shuffled[k]
            );
        }

        // Ranks agree wherever two scores are separated by more than rounding.
        let original_ranks = rank_preferences(&original, SortOrder::Descending);
        let shuffled_ranks = rank_preferences(&shuffled, SortOrder::Descending);
        for (k, &i) in order.iter().enumerate() {
            for (l, &j) in order.iter().enumerate() {
                if !close(original[i], original[j]) {
                    prop_assert_eq!(
                        original_ranks[i].cmp(&original_ranks[j]),
                        shuffled_ranks[k].cmp(&shuffled_ranks[l])
                    );
                }
            }
        }
    }

    #[test]
    fn negated_preferences_reverse_borda_copeland(
        columns in (2usize..7, 1usize..5).prop_flat_map(|(m, k)| {
            prop::collection::vec(prop::collection::vec(-10.0f64..10.0, m), k)
        })
    ) {
        let ranks = |sign: f64| {
            RankingMatrix::from_columns(
                columns
                    .iter()
                    .map(|c| {
                        let signed: Vec<f64> = c.iter().map(|v| sign * v).collect();
                        rank_preferences(&signed, SortOrder::Descending)
                    })
                    .collect(),
            )
            .unwrap()
        };

        let forward = borda_copeland(&ranks(1.0));
        let backward = borda_copeland(&ranks(-1.0));
        prop_assert!(is_reversed(&forward, &backward), "{:?} vs {:?}", forward, backward);
    }
}

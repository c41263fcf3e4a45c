//! Rank conversion - preference scores to integer ranks.
//!
//! # Tie Policy
//!
//! Dense ranking: alternatives with exactly equal scores share a rank and
//! the next distinct score receives the next integer, so no rank is
//! skipped (`[0.5, 0.9, 0.5]` descending gives `[2, 1, 2]`). `NaN` scores
//! sort after every number in either direction and share the last rank.
//! Every call site in the crate goes through [`rank_preferences`].

use std::cmp::Ordering;

use crate::domain::foundation::SortOrder;

/// Converts scores into ranks, rank 1 being the best.
///
/// With `SortOrder::Descending` the largest score is best; with
/// `SortOrder::Ascending` the smallest is.
pub fn rank_preferences(values: &[f64], order: SortOrder) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&a, &b| compare(values[a], values[b], order));

    let mut ranks = vec![0; values.len()];
    let mut rank = 0;
    let mut previous: Option<f64> = None;

    for &i in &indices {
        let value = values[i];
        let same_group = previous.is_some_and(|p| p == value || (p.is_nan() && value.is_nan()));
        if !same_group {
            rank += 1;
        }
        ranks[i] = rank;
        previous = Some(value);
    }

    ranks
}

fn compare(a: f64, b: f64, order: SortOrder) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ascending = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            match order {
                SortOrder::Ascending => ascending,
                SortOrder::Descending => ascending.reverse(),
            }
        }
    }
}

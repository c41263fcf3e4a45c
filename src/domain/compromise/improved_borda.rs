//! Improved Borda Rule for fusing a three-branch method such as MULTIMOORA.

use crate::domain::foundation::{
    CriterionType, McdaError, PreferenceMatrix, RankingMatrix, SortOrder,
};
use crate::domain::normalization::{Normalization, SumNormalization};
use crate::domain::ranking::rank_preferences;

/// Number of fixed-role branches.
const BRANCHES: usize = 3;

/// Fuses preferences and ranks from exactly three sub-methods.
///
/// Column roles are fixed: columns 0 and 2 come from "larger is better"
/// sub-methods, column 1 from a "smaller is better" one (e.g. the reference
/// point approach), which is why its term is subtracted.
///
/// # Algorithm
/// With `T = m(m+1)/2` and `p` the column-sum normalized preferences:
/// `p0·(m - r0 + 1)/T - p1·r1/T + p2·(m - r2 + 1)/T`, ranked descending.
///
/// # Errors
/// - `RoleMismatch` unless both matrices have exactly three columns
/// - `ShapeMismatch` if their row counts differ
/// - `ZeroSum` if a preference column sums to zero
/// - `NegativeEntry` if a preference is negative
pub fn improved_borda_rule(
    prefs: &PreferenceMatrix,
    ranks: &RankingMatrix,
) -> Result<Vec<usize>, McdaError> {
    if prefs.methods() != BRANCHES {
        return Err(McdaError::role_mismatch(
            "preference matrix",
            BRANCHES,
            prefs.methods(),
        ));
    }
    if ranks.methods() != BRANCHES {
        return Err(McdaError::role_mismatch(
            "ranking matrix",
            BRANCHES,
            ranks.methods(),
        ));
    }
    if prefs.alternatives() != ranks.alternatives() {
        return Err(McdaError::shape_mismatch(
            "ranking matrix rows",
            prefs.alternatives(),
            ranks.alternatives(),
        ));
    }

    let m = ranks.alternatives() as f64;
    tracing::debug!(alternatives = ranks.alternatives(), "Improved Borda rule compromise");

    let nprefs = SumNormalization::new()
        .normalize(prefs.as_matrix(), &[CriterionType::Benefit; BRANCHES])?;
    let total = m * (m + 1.0) / 2.0;

    let scores: Vec<f64> = (0..ranks.alternatives())
        .map(|i| {
            let p = nprefs.row(i);
            let r = ranks.row(i);
            p[0] * ((m - r[0] as f64 + 1.0) / total) - p[1] * (r[1] as f64 / total)
                + p[2] * ((m - r[2] as f64 + 1.0) / total)
        })
        .collect();

    Ok(rank_preferences(&scores, SortOrder::Descending))
}

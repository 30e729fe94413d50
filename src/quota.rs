//! Per-category quotas derived from a candidate count.
//!
//! `quota = round(ratio × candidate_count)` where `round` is the configured
//! [`RoundingMode`]. The candidate count is the number of *relevant* posts,
//! so ratios are shares of relevant content only. Remainders are never
//! redistributed; the quotas may sum to less than the candidate count.

use hashbrown::HashMap;

use crate::table::CategoryRatioTable;

/// How a fractional `ratio × count` becomes an integer quota.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoundingMode {
    /// Truncate toward zero. Favours under-allocation.
    #[default]
    Floor,
    /// Round up to the next integer.
    Ceil,
}

impl RoundingMode {
    /// Apply this rounding to `x`.
    ///
    /// Float-to-int conversion saturates, so NaN maps to `0` and infinities
    /// to the `i64` bounds.
    pub fn apply(self, x: f64) -> i64 {
        match self {
            Self::Floor => x as i64,
            Self::Ceil => ceil_i64(x),
        }
    }
}

// no_std ceil: core has no f64::ceil without std.
fn ceil_i64(x: f64) -> i64 {
    let t = x as i64;
    if (t as f64) < x {
        t.saturating_add(1)
    } else {
        t
    }
}

/// Computes integer quotas for every configured category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuotaCalculator {
    /// Rounding applied to each `ratio × candidate_count`.
    pub rounding: RoundingMode,
}

impl QuotaCalculator {
    /// Calculator with the given rounding.
    pub fn new(rounding: RoundingMode) -> Self {
        Self { rounding }
    }

    /// Quota per category of `table` for `candidate_count` relevant posts.
    pub fn compute<'t>(
        &self,
        table: &'t CategoryRatioTable,
        candidate_count: usize,
    ) -> HashMap<&'t str, i64> {
        let n = candidate_count as f64;
        table
            .iter()
            .map(|(category, ratio)| (category, self.rounding.apply(ratio * n)))
            .collect()
    }
}

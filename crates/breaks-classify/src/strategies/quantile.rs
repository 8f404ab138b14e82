//! Quantile classification

use crate::traits::{check_input, BreaksStrategy};
use crate::types::Breaks;
use breaks_core::{utils, Result};
use serde::{Deserialize, Serialize};

/// Quantile breaks
///
/// Places break `i` at the `i/k` quantile so each class holds roughly
/// `n/k` observations. Quantiles use linear interpolation between order
/// statistics (Hyndman-Fan type 7), so for 1..=100 and `k = 5` the breaks
/// are `[1, 20.8, 40.6, 60.4, 80.2, 100]`.
///
/// Dense ties can make adjacent breaks equal; those breaks are kept and the
/// classes they bound end up with unequal counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuantileBreaks;

impl QuantileBreaks {
    pub fn new() -> Self {
        Self
    }
}

/// Type 7 quantile of sorted data
///
/// `p` is clamped to `[0, 1]`; `sorted` must be non-empty.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let n = sorted.len();
    let h = (n - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    if lo + 1 >= n {
        return sorted[n - 1];
    }
    let frac = h - lo as f64;
    // Rounding may overshoot the upper order statistic by an ulp
    (sorted[lo] + frac * (sorted[lo + 1] - sorted[lo])).min(sorted[lo + 1])
}

impl BreaksStrategy for QuantileBreaks {
    fn name(&self) -> &'static str {
        "quantile"
    }

    fn breaks_sorted(&self, sorted_sample: &[f64], k: usize) -> Result<Breaks> {
        check_input(sorted_sample, k, self.name())?;
        utils::require_distinct(sorted_sample, k)?;

        let values = (0..=k)
            .map(|i| quantile_sorted(sorted_sample, i as f64 / k as f64))
            .collect();
        Ok(Breaks::from_sorted(values))
    }
}

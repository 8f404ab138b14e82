//! Equal-interval classification

use crate::traits::{check_input, BreaksStrategy};
use crate::types::Breaks;
use breaks_core::{utils, Result};
use serde::{Deserialize, Serialize};

/// Equal-interval breaks
///
/// Splits `[min, max]` into `k` classes of identical width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EqualIntervalBreaks;

impl EqualIntervalBreaks {
    pub fn new() -> Self {
        Self
    }
}

impl BreaksStrategy for EqualIntervalBreaks {
    fn name(&self) -> &'static str {
        "equal"
    }

    fn breaks_sorted(&self, sorted_sample: &[f64], k: usize) -> Result<Breaks> {
        check_input(sorted_sample, k, self.name())?;
        utils::require_distinct(sorted_sample, k)?;

        // O(1) min/max from sorted data
        let min = sorted_sample[0];
        let max = sorted_sample[sorted_sample.len() - 1];
        let width = (max - min) / k as f64;

        let values = (0..=k)
            .map(|i| if i == k { max } else { (min + i as f64 * width).min(max) })
            .collect();
        Ok(Breaks::from_sorted(values))
    }
}

//! Standard-deviation classification

use crate::traits::{check_input, BreaksStrategy};
use crate::types::Breaks;
use breaks_core::{Error, Result};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Upper bound on classes, guarding against tiny multipliers
const MAX_CLASSES: usize = 1000;

/// Standard-deviation breaks
///
/// Places breaks at `mean + j * multiplier * sd` for every integer `j` whose
/// break lies strictly inside `(min, max)`, bracketed by the sample minimum
/// and maximum. `sd` is the sample standard deviation. The class count
/// follows the spread of the data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StdDevBreaks {
    multiplier: f64,
}

impl Default for StdDevBreaks {
    fn default() -> Self {
        Self { multiplier: 1.0 }
    }
}

impl StdDevBreaks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of each class in standard deviations
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }
}

impl BreaksStrategy for StdDevBreaks {
    fn name(&self) -> &'static str {
        "sd"
    }

    fn breaks_sorted(&self, sorted_sample: &[f64], k: usize) -> Result<Breaks> {
        check_input(sorted_sample, k, self.name())?;
        if !(self.multiplier.is_finite() && self.multiplier > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "standard deviation multiplier {} must be positive",
                self.multiplier
            )));
        }

        let min = sorted_sample[0];
        let max = sorted_sample[sorted_sample.len() - 1];
        if min == max {
            return Ok(Breaks::from_sorted(vec![min, max]));
        }

        let mean = sorted_sample.iter().mean();
        let step = self.multiplier * sorted_sample.iter().std_dev();
        if !(step.is_finite() && step > 0.0) {
            return Err(Error::InvalidInput(format!(
                "standard deviation of the sample is not usable as a step ({step:e})"
            )));
        }
        let lo = ((min - mean) / step).floor() as i64;
        let hi = ((max - mean) / step).ceil() as i64;
        if (hi - lo) as usize > MAX_CLASSES {
            return Err(Error::InvalidParameter(format!(
                "standard deviation multiplier {} yields more than {MAX_CLASSES} classes",
                self.multiplier
            )));
        }

        let mut values = vec![min];
        values.extend(
            (lo..=hi)
                .map(|j| mean + j as f64 * step)
                .filter(|&b| b > min && b < max),
        );
        values.push(max);
        Ok(Breaks::from_sorted(values))
    }

    fn target_classes(&self, _k: usize) -> Option<usize> {
        None
    }
}

//! Fixed (user-supplied) classification

use crate::traits::{check_input, BreaksStrategy};
use crate::types::Breaks;
use breaks_core::{utils, Error, Result};
use serde::{Deserialize, Serialize};

/// What to do with sample values outside the supplied breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipPolicy {
    /// Fail when the sample reaches outside the breaks
    #[default]
    Reject,
    /// Keep the breaks; outliers are assigned to the first or last class
    Clamp,
    /// Widen the first/last break to the sample minimum/maximum
    Extend,
}

/// Caller-supplied breaks
///
/// The breaks must be finite and strictly increasing, and `k` must equal
/// `breaks.len() - 1`. Valid breaks that span the sample are returned
/// unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedBreaks {
    breaks: Vec<f64>,
    #[serde(default)]
    clip: ClipPolicy,
}

impl FixedBreaks {
    /// Create a fixed classification rejecting out-of-range values
    pub fn new(breaks: Vec<f64>) -> Self {
        Self {
            breaks,
            clip: ClipPolicy::Reject,
        }
    }

    /// Set the policy for values outside the breaks
    pub fn clip_policy(mut self, clip: ClipPolicy) -> Self {
        self.clip = clip;
        self
    }

    pub fn breaks_values(&self) -> &[f64] {
        &self.breaks
    }

    pub fn policy(&self) -> ClipPolicy {
        self.clip
    }

    fn validate(&self, k: usize) -> Result<()> {
        if self.breaks.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: self.breaks.len(),
            });
        }
        if self.breaks.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("fixed breaks"));
        }
        if !utils::is_strictly_increasing(&self.breaks) {
            return Err(Error::InvalidInput(
                "fixed breaks must be strictly increasing".to_string(),
            ));
        }
        if k != self.breaks.len() - 1 {
            return Err(Error::InvalidInput(format!(
                "{} fixed breaks define {} classes, but {k} were requested",
                self.breaks.len(),
                self.breaks.len() - 1
            )));
        }
        Ok(())
    }
}

impl BreaksStrategy for FixedBreaks {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn breaks_sorted(&self, sorted_sample: &[f64], k: usize) -> Result<Breaks> {
        check_input(sorted_sample, k, self.name())?;
        self.validate(k)?;

        let min = sorted_sample[0];
        let max = sorted_sample[sorted_sample.len() - 1];
        let mut values = self.breaks.clone();
        let last = values.len() - 1;
        let outside = min < values[0] || max > values[last];

        match self.clip {
            ClipPolicy::Reject if outside => Err(Error::InvalidInput(format!(
                "sample range [{min}, {max}] falls outside fixed breaks [{}, {}]",
                values[0], values[last]
            ))),
            ClipPolicy::Reject => Ok(Breaks::from_sorted(values)),
            ClipPolicy::Clamp => Ok(Breaks::from_sorted(values).with_clamped_outliers(true)),
            ClipPolicy::Extend => {
                values[0] = values[0].min(min);
                values[last] = values[last].max(max);
                Ok(Breaks::from_sorted(values))
            }
        }
    }
}

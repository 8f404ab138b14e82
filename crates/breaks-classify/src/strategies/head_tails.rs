//! Head/tail breaks for heavy-tailed distributions

use crate::traits::{check_input, BreaksStrategy};
use crate::types::Breaks;
use breaks_core::{Error, Result};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use tracing::debug;

/// Head/tail breaks
///
/// Splits the sample at its mean into a tail (values at or below the mean)
/// and a head (values above it), then keeps splitting the head at its own
/// mean while each new head stays a small minority of the group it came
/// from. The breaks are the sample minimum, the successive means and the
/// sample maximum, so the class count follows the data rather than `k`.
///
/// The first split is always made when the sample has more than one
/// distinct value. Later splits stop once the head proportion exceeds
/// `threshold`, the head is a single distinct value, or `max_classes` is
/// reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadTailBreaks {
    threshold: f64,
    max_classes: Option<usize>,
}

impl Default for HeadTailBreaks {
    fn default() -> Self {
        Self {
            threshold: 0.4,
            max_classes: None,
        }
    }
}

impl HeadTailBreaks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest head proportion that still allows a further split
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Cap on the number of classes
    pub fn max_classes(mut self, max_classes: usize) -> Self {
        self.max_classes = Some(max_classes);
        self
    }

    fn validate(&self) -> Result<()> {
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "head/tail threshold {} must be in (0, 1)",
                self.threshold
            )));
        }
        if self.max_classes == Some(0) {
            return Err(Error::InvalidParameter(
                "head/tail max_classes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl BreaksStrategy for HeadTailBreaks {
    fn name(&self) -> &'static str {
        "headtails"
    }

    fn breaks_sorted(&self, sorted_sample: &[f64], k: usize) -> Result<Breaks> {
        check_input(sorted_sample, k, self.name())?;
        self.validate()?;

        let min = sorted_sample[0];
        let max = sorted_sample[sorted_sample.len() - 1];
        let max_classes = self.max_classes.unwrap_or(usize::MAX);

        let mut values = vec![min];
        let mut group = sorted_sample;
        // values.len() is the class count once max is appended
        while values.len() < max_classes && group.len() >= 2 && group[0] < group[group.len() - 1]
        {
            let mean = group.iter().mean();
            let head_start = group.partition_point(|&v| v <= mean);
            let head = &group[head_start..];
            let proportion = head.len() as f64 / group.len() as f64;
            if head.is_empty() || (values.len() > 1 && proportion > self.threshold) {
                break;
            }
            debug!(
                level = values.len(),
                mean,
                head = head.len(),
                proportion,
                "head/tail split"
            );
            values.push(mean);
            group = head;
        }

        values.push(max);
        Ok(Breaks::from_sorted(values))
    }

    fn target_classes(&self, _k: usize) -> Option<usize> {
        None
    }
}

//! "Pretty" classification: equal-width classes on round numbers

use crate::traits::{check_input, BreaksStrategy};
use crate::types::Breaks;
use breaks_core::{utils, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Relative slack when comparing a ratio against a rung of the 1-2-5 ladder
const LADDER_TOLERANCE: f64 = 1e-10;

/// Slack when rounding `min / step` and `max / step` to whole steps
const STEP_FUZZ: f64 = 1e-7;

/// Round-number breaks
///
/// Picks a step of 1, 2 or 5 times a power of ten and lays equal-width
/// classes on multiples of it, from the largest multiple at or below the
/// sample minimum to the smallest multiple at or above the maximum. Of the
/// two ladder steps around `(max - min) / k`, the one giving the fewest
/// classes that is still at least `k` wins (the finer step on a tie).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PrettyBreaks;

impl PrettyBreaks {
    pub fn new() -> Self {
        Self
    }
}

/// Largest value of the form {1, 2, 5} x 10^e that does not exceed `raw`
pub fn nice_step_below(raw: f64) -> f64 {
    let mut base = 10f64.powf(raw.log10().floor());
    let mut ratio = raw / base * (1.0 + LADDER_TOLERANCE);
    if ratio >= 10.0 {
        base *= 10.0;
        ratio /= 10.0;
    }
    let mult = if ratio >= 5.0 {
        5.0
    } else if ratio >= 2.0 {
        2.0
    } else {
        1.0
    };
    mult * base
}

/// The ladder rung directly above a nice step
fn next_rung(step: f64) -> f64 {
    let base = 10f64.powf(step.log10().floor());
    let ratio = (step / base).round();
    if ratio == 2.0 {
        step * 2.5
    } else {
        step * 2.0
    }
}

/// Round a multiple of `step` to the decimal precision of `step`
pub(crate) fn snap(value: f64, step: f64) -> f64 {
    let decimals = (-step.log10().floor()).max(0.0) as i32;
    if decimals == 0 {
        return value.round();
    }
    let scale = 10f64.powi(decimals);
    let snapped = (value * scale).round() / scale;
    // Steps near the subnormal range have no representable scale
    if snapped.is_finite() {
        snapped
    } else {
        value
    }
}

/// Indices `(start, end)` such that `start * step <= min` and `end * step >= max`
pub(crate) fn enclosing_multiples(min: f64, max: f64, step: f64) -> (i64, i64) {
    let mut start = (min / step + STEP_FUZZ).floor() as i64;
    while snap(start as f64 * step, step) > min {
        start -= 1;
    }
    let mut end = (max / step - STEP_FUZZ).ceil() as i64;
    while snap(end as f64 * step, step) < max {
        end += 1;
    }
    (start, end)
}

impl BreaksStrategy for PrettyBreaks {
    fn name(&self) -> &'static str {
        "pretty"
    }

    fn breaks_sorted(&self, sorted_sample: &[f64], k: usize) -> Result<Breaks> {
        check_input(sorted_sample, k, self.name())?;
        utils::require_distinct(sorted_sample, k)?;

        let min = sorted_sample[0];
        let max = sorted_sample[sorted_sample.len() - 1];
        if min == max {
            return Ok(Breaks::from_sorted(vec![min, max]));
        }

        let no_step = || {
            Error::InvalidInput(format!(
                "no round step fits the sample range [{min:e}, {max:e}]"
            ))
        };
        let below = nice_step_below((max - min) / k as f64);
        if !(below.is_finite() && below > 0.0) {
            return Err(no_step());
        }
        // Candidates whose outer multiples overflow are dropped
        let (step, start, end) = [next_rung(below), below]
            .into_iter()
            .map(|step| {
                let (start, end) = enclosing_multiples(min, max, step);
                (step, start, end)
            })
            .filter(|&(step, start, end)| {
                (start as f64 * step).is_finite() && (end as f64 * step).is_finite()
            })
            .filter(|&(_, start, end)| (end - start) as usize >= k)
            .min_by(|a, b| (a.2 - a.1).cmp(&(b.2 - b.1)).then(a.0.total_cmp(&b.0)))
            .ok_or_else(no_step)?;
        trace!(step, classes = end - start, "pretty step chosen");

        let values = (start..=end)
            .map(|i| snap(i as f64 * step, step))
            .collect();
        Ok(Breaks::from_sorted(values))
    }

    fn target_classes(&self, _k: usize) -> Option<usize> {
        None
    }
}

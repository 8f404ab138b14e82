//! Continuous classification: value to normalized position mapping
//!
//! Instead of discrete classes, a continuous scheme maps each value to a
//! position in `[0, 1]` that a renderer interpolates a color ramp with.

use crate::strategies::pretty;
use breaks_core::{utils, Error, Result};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// How values are normalized before color interpolation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Min-max scaling
    #[default]
    Linear,
    /// Min-max scaling of log10 values; requires a positive domain
    Log10,
}

/// Mapping from a value domain to `[0, 1]`
///
/// Values outside the domain are clamped. A degenerate domain
/// (`min == max`) maps every value to the midpoint `0.5`.
///
/// # Examples
///
/// ```rust
/// use breaks_classify::{ContinuousScale, Normalization};
///
/// let scale = ContinuousScale::new(0.0, 100.0, Normalization::Linear).unwrap();
/// assert_eq!(scale.position(25.0), 0.25);
/// assert_eq!(scale.position(150.0), 1.0);
///
/// let log: ContinuousScale = ContinuousScale::new(1.0, 1000.0, Normalization::Log10).unwrap();
/// assert!((log.position(10.0) - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContinuousScale<F: Float = f64> {
    min: F,
    max: F,
    normalization: Normalization,
}

impl<F: Float> ContinuousScale<F> {
    /// Create a scale over `[min, max]`
    pub fn new(min: F, max: F, normalization: Normalization) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::non_finite("scale domain"));
        }
        if min > max {
            return Err(Error::InvalidInput(
                "scale domain minimum exceeds maximum".to_string(),
            ));
        }
        if normalization == Normalization::Log10 && min <= F::zero() {
            return Err(Error::InvalidInput(
                "log10 normalization requires strictly positive values".to_string(),
            ));
        }
        Ok(Self {
            min,
            max,
            normalization,
        })
    }

    /// Domain bounds
    pub fn domain(&self) -> (F, F) {
        (self.min, self.max)
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    fn transform(&self, value: F) -> F {
        match self.normalization {
            Normalization::Linear => value,
            Normalization::Log10 => value.log10(),
        }
    }

    /// Map a value to `[0, 1]`
    pub fn position(&self, value: F) -> F {
        let half = F::from(0.5).unwrap_or_else(F::zero);
        let lo = self.transform(self.min);
        let hi = self.transform(self.max);
        if hi == lo {
            return half;
        }
        let clamped = value.max(self.min).min(self.max);
        ((self.transform(clamped) - lo) / (hi - lo))
            .max(F::zero())
            .min(F::one())
    }

    /// Map a position in `[0, 1]` back to the domain
    pub fn value_at(&self, position: F) -> F {
        let t = position.max(F::zero()).min(F::one());
        let lo = self.transform(self.min);
        let hi = self.transform(self.max);
        let v = lo + t * (hi - lo);
        match self.normalization {
            Normalization::Linear => v,
            Normalization::Log10 => F::from(10.0).unwrap_or_else(F::one).powf(v),
        }
    }
}

impl ContinuousScale<f64> {
    /// Build a scale spanning the sample's range
    pub fn from_sample(sample: &[f64], normalization: Normalization) -> Result<Self> {
        utils::validate_sample(sample, "continuous scale")?;
        let (min, max) = sample
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        Self::new(min, max, normalization)
    }

    /// Legend tick values inside the domain
    ///
    /// Linear scales use round steps targeting about `n` intervals; log
    /// scales use the powers of ten inside the domain plus the endpoints.
    pub fn ticks(&self, n: usize) -> Vec<f64> {
        let n = n.max(1);
        if self.min == self.max {
            return vec![self.min];
        }
        let mut ticks: Vec<f64> = match self.normalization {
            Normalization::Linear => {
                let step = pretty::nice_step_below((self.max - self.min) / n as f64);
                if !(step.is_finite() && step > 0.0) {
                    return vec![self.min, self.max];
                }
                let (start, end) = pretty::enclosing_multiples(self.min, self.max, step);
                (start..=end)
                    .map(|i| pretty::snap(i as f64 * step, step))
                    .filter(|&t| t >= self.min && t <= self.max)
                    .collect()
            }
            Normalization::Log10 => {
                let lo = self.min.log10().ceil() as i32;
                let hi = self.max.log10().floor() as i32;
                (lo..=hi).map(|e| 10f64.powi(e)).collect()
            }
        };
        if ticks.first().map_or(true, |&t| t > self.min) {
            ticks.insert(0, self.min);
        }
        if ticks.last().map_or(true, |&t| t < self.max) {
            ticks.push(self.max);
        }
        ticks
    }
}

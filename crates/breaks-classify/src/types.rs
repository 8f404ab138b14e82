//! Core types for class break representation

use crate::continuous::ContinuousScale;
use breaks_core::{utils, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One class of a classified sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassInterval {
    /// Lower edge of the class (inclusive)
    pub lower: f64,
    /// Upper edge of the class (exclusive, except for the last class)
    pub upper: f64,
    /// Number of values assigned to this class
    pub count: usize,
    /// Whether the upper edge is inclusive
    pub closed_upper: bool,
}

impl ClassInterval {
    /// Create a new class interval
    pub fn new(lower: f64, upper: f64, count: usize, closed_upper: bool) -> Self {
        Self {
            lower,
            upper,
            count,
            closed_upper,
        }
    }

    /// Get the width of the class
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Get the center point of the class
    pub fn center(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Check if a value falls within this class
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && (value < self.upper || (self.closed_upper && value == self.upper))
    }

    /// Relative frequency (count / total)
    pub fn frequency(&self, total: usize) -> f64 {
        if total > 0 {
            self.count as f64 / total as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for ClassInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.closed_upper { ']' } else { ')' };
        write!(
            f,
            "[{:.3}, {:.3}{}: count={}",
            self.lower, self.upper, close, self.count
        )
    }
}

#[derive(Deserialize)]
struct RawBreaks {
    values: Vec<f64>,
    #[serde(default)]
    clamp_outliers: bool,
}

/// Ordered class boundaries b0 <= b1 <= ... <= bm
///
/// The breaks define `m` classes `[b_i, b_{i+1})`, with the last class closed
/// on both ends. Adjacent breaks may be equal (dense ties under quantile
/// classification); the resulting empty class is skipped during assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBreaks")]
pub struct Breaks {
    values: Vec<f64>,
    /// When set, values outside `[b0, bm]` are assigned to the end classes
    clamp_outliers: bool,
}

impl TryFrom<RawBreaks> for Breaks {
    type Error = Error;

    fn try_from(raw: RawBreaks) -> Result<Self> {
        let breaks = Breaks::new(raw.values)?;
        Ok(breaks.with_clamped_outliers(raw.clamp_outliers))
    }
}

impl Breaks {
    /// Create breaks, validating that there are at least two finite,
    /// non-decreasing values
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: values.len(),
            });
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("breaks"));
        }
        if !utils::is_non_decreasing(&values) {
            return Err(Error::InvalidInput(
                "breaks must be non-decreasing".to_string(),
            ));
        }
        Ok(Self::from_sorted(values))
    }

    /// Create breaks from values already known to be valid
    pub(crate) fn from_sorted(values: Vec<f64>) -> Self {
        debug_assert!(values.len() >= 2);
        debug_assert!(utils::is_non_decreasing(&values));
        Self {
            values,
            clamp_outliers: false,
        }
    }

    /// Assign out-of-range values to the first/last class instead of none
    pub fn with_clamped_outliers(mut self, clamp: bool) -> Self {
        self.clamp_outliers = clamp;
        self
    }

    /// Whether out-of-range values are assigned to the end classes
    pub fn clamps_outliers(&self) -> bool {
        self.clamp_outliers
    }

    /// Get the break values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume into the break values
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Number of break values (classes + 1)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: breaks hold at least two values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of classes
    pub fn num_classes(&self) -> usize {
        self.values.len() - 1
    }

    /// Lowest break
    pub fn min(&self) -> f64 {
        self.values[0]
    }

    /// Highest break
    pub fn max(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Find the class containing a value
    ///
    /// Returns `None` for non-finite values and, unless outliers are
    /// clamped, for values outside `[b0, bm]`.
    pub fn class_of(&self, value: f64) -> Option<usize> {
        if self.clamp_outliers {
            self.class_of_clamped(value)
        } else {
            self.class_within(value)
        }
    }

    /// Find the class containing a value, sending outliers to the end classes
    pub fn class_of_clamped(&self, value: f64) -> Option<usize> {
        if !value.is_finite() {
            return None;
        }
        let clamped = value.clamp(self.min(), self.max());
        self.class_within(clamped)
    }

    fn class_within(&self, value: f64) -> Option<usize> {
        if !value.is_finite() || value < self.min() || value > self.max() {
            return None;
        }
        let last = self.num_classes() - 1;
        if value == self.max() {
            return Some(last);
        }
        // Interior breaks at or below the value; ties push it rightwards
        let interior = &self.values[1..self.values.len() - 1];
        Some(interior.partition_point(|&b| b <= value))
    }

    /// Assign every value of a sample to a class
    pub fn assign(&self, sample: &[f64]) -> Vec<Option<usize>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            sample.par_iter().map(|&v| self.class_of(v)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            sample.iter().map(|&v| self.class_of(v)).collect()
        }
    }

    /// Count values per class; unassignable values are not counted
    pub fn counts(&self, sample: &[f64]) -> Vec<usize> {
        let mut counts = vec![0; self.num_classes()];
        for class in self.assign(sample).into_iter().flatten() {
            counts[class] += 1;
        }
        counts
    }

    /// Describe each class together with its count for a sample
    pub fn intervals(&self, sample: &[f64]) -> Vec<ClassInterval> {
        let counts = self.counts(sample);
        let last = self.num_classes() - 1;
        self.values
            .windows(2)
            .zip(counts)
            .enumerate()
            .map(|(i, (w, count))| ClassInterval::new(w[0], w[1], count, i == last))
            .collect()
    }

    /// Legend labels of the form "a to b"
    pub fn labels(&self, precision: usize) -> Vec<String> {
        self.values
            .windows(2)
            .map(|w| format!("{:.*} to {:.*}", precision, w[0], precision, w[1]))
            .collect()
    }
}

impl From<Breaks> for Vec<f64> {
    fn from(breaks: Breaks) -> Self {
        breaks.values
    }
}

impl fmt::Display for Breaks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Breaks({} classes: ", self.num_classes())?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v:.3}")?;
        }
        write!(f, ")")
    }
}

/// Result of classifying a sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ClassScheme {
    /// A discrete list of class boundaries
    Discrete(Breaks),
    /// A value-to-position mapping for gradient coloring
    Continuous(ContinuousScale),
}

impl ClassScheme {
    /// Get the breaks of a discrete scheme
    pub fn breaks(&self) -> Option<&Breaks> {
        match self {
            Self::Discrete(breaks) => Some(breaks),
            Self::Continuous(_) => None,
        }
    }

    /// Get the scale of a continuous scheme
    pub fn scale(&self) -> Option<&ContinuousScale> {
        match self {
            Self::Discrete(_) => None,
            Self::Continuous(scale) => Some(scale),
        }
    }

    /// Whether this scheme is continuous
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::Continuous(_))
    }

    /// Consume into breaks, failing for continuous schemes
    pub fn into_breaks(self) -> Result<Breaks> {
        match self {
            Self::Discrete(breaks) => Ok(breaks),
            Self::Continuous(_) => Err(Error::InvalidParameter(
                "continuous classification has no discrete breaks".to_string(),
            )),
        }
    }
}

//! Strategy selection and the `compute_breaks` entry point

use crate::continuous::{ContinuousScale, Normalization};
use crate::strategies::{
    EqualIntervalBreaks, FixedBreaks, HeadTailBreaks, NaturalBreaks, PrettyBreaks,
    QuantileBreaks, StdDevBreaks,
};
use crate::traits::{check_input, BreaksStrategy};
use crate::types::{Breaks, ClassScheme};
use breaks_core::{utils, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Values of the `style` tag in serialized strategies
pub const STYLE_TAGS: &[&str] = &[
    "quantile",
    "fixed",
    "pretty",
    "equal_interval",
    "natural_breaks",
    "head_tails",
    "std_dev",
    "continuous",
];

/// Classification style for a choropleth legend
///
/// Serializes with a `style` tag, e.g. `{"style": "quantile"}` or
/// `{"style": "fixed", "breaks": [0, 20, 40], "clip": "clamp"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum ClassificationStrategy {
    Quantile,
    Fixed(FixedBreaks),
    Pretty,
    EqualInterval,
    NaturalBreaks,
    HeadTails(HeadTailBreaks),
    StdDev(StdDevBreaks),
    Continuous {
        #[serde(default)]
        normalization: Normalization,
    },
}

impl ClassificationStrategy {
    /// Fixed classification with the default clip policy
    pub fn fixed(breaks: Vec<f64>) -> Self {
        Self::Fixed(FixedBreaks::new(breaks))
    }

    /// Head/tail classification with default options
    pub fn head_tails() -> Self {
        Self::HeadTails(HeadTailBreaks::default())
    }

    /// Continuous classification with linear normalization
    pub fn continuous() -> Self {
        Self::Continuous {
            normalization: Normalization::Linear,
        }
    }

    /// Style name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Quantile => QuantileBreaks.name(),
            Self::Fixed(s) => s.name(),
            Self::Pretty => PrettyBreaks.name(),
            Self::EqualInterval => EqualIntervalBreaks.name(),
            Self::NaturalBreaks => NaturalBreaks.name(),
            Self::HeadTails(s) => s.name(),
            Self::StdDev(s) => s.name(),
            Self::Continuous { .. } => "continuous",
        }
    }

    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::Continuous { .. })
    }

    /// Compute discrete breaks; fails for the continuous style
    pub fn breaks(&self, sample: &[f64], k: usize) -> Result<Breaks> {
        check_input(sample, k, self.name())?;
        self.breaks_sorted(&utils::sorted(sample), k)
    }

    /// Compute discrete breaks from a sample sorted ascending
    pub fn breaks_sorted(&self, sorted_sample: &[f64], k: usize) -> Result<Breaks> {
        match self {
            Self::Quantile => QuantileBreaks.breaks_sorted(sorted_sample, k),
            Self::Fixed(s) => s.breaks_sorted(sorted_sample, k),
            Self::Pretty => PrettyBreaks.breaks_sorted(sorted_sample, k),
            Self::EqualInterval => EqualIntervalBreaks.breaks_sorted(sorted_sample, k),
            Self::NaturalBreaks => NaturalBreaks.breaks_sorted(sorted_sample, k),
            Self::HeadTails(s) => s.breaks_sorted(sorted_sample, k),
            Self::StdDev(s) => s.breaks_sorted(sorted_sample, k),
            Self::Continuous { .. } => {
                check_input(sorted_sample, k, self.name())?;
                Err(Error::InvalidParameter(
                    "continuous classification has no discrete breaks".to_string(),
                ))
            }
        }
    }

    /// Classify a sample into a discrete or continuous scheme
    pub fn classify(&self, sample: &[f64], k: usize) -> Result<ClassScheme> {
        check_input(sample, k, self.name())?;
        let scheme = match self {
            Self::Continuous { normalization } => {
                ClassScheme::Continuous(ContinuousScale::from_sample(sample, *normalization)?)
            }
            _ => ClassScheme::Discrete(self.breaks(sample, k)?),
        };
        debug!(style = self.name(), n = sample.len(), k, "sample classified");
        Ok(scheme)
    }
}

/// Compute the classification scheme for a sample
///
/// # Examples
///
/// ```rust
/// use breaks_classify::{compute_breaks, ClassificationStrategy};
///
/// let sample: Vec<f64> = (1..=100).map(|x| x as f64).collect();
/// let scheme = compute_breaks(&sample, 5, &ClassificationStrategy::Quantile).unwrap();
/// let breaks = scheme.breaks().unwrap();
/// assert_eq!(breaks.num_classes(), 5);
/// assert_eq!(breaks.class_of(100.0), Some(4));
/// ```
pub fn compute_breaks(
    sample: &[f64],
    k: usize,
    strategy: &ClassificationStrategy,
) -> Result<ClassScheme> {
    strategy.classify(sample, k)
}

impl fmt::Display for ClassificationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClassificationStrategy {
    type Err = Error;

    /// Parse a style name with default options
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quantile" => Ok(Self::Quantile),
            "pretty" => Ok(Self::Pretty),
            "equal" | "equal_interval" => Ok(Self::EqualInterval),
            "jenks" | "fisher" | "natural_breaks" => Ok(Self::NaturalBreaks),
            "headtails" | "head_tails" => Ok(Self::head_tails()),
            "sd" | "std_dev" => Ok(Self::StdDev(StdDevBreaks::default())),
            "cont" | "continuous" => Ok(Self::continuous()),
            "log10" => Ok(Self::Continuous {
                normalization: Normalization::Log10,
            }),
            "fixed" => Err(Error::InvalidParameter(
                "the fixed style needs explicit breaks".to_string(),
            )),
            other => Err(Error::StrategyUnsupported(other.to_string())),
        }
    }
}

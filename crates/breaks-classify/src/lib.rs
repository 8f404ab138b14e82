//! Class break computation for choropleth maps
//!
//! This crate turns a sample of numeric attribute values into the class
//! boundaries of a choropleth legend. Each strategy implements
//! [`BreaksStrategy`]; [`ClassificationStrategy`] selects one by name or from
//! configuration and [`compute_breaks`] is the single entry point.
//!
//! # Key Features
//!
//! - **Quantile**: equal-count classes (Hyndman-Fan type 7 interpolation)
//! - **Fixed**: user-supplied breaks with a configurable clip policy
//! - **Pretty**: round-number breaks from the 1-2-5 ladder
//! - **Equal interval**: equal-width classes over the sample range
//! - **Natural breaks**: Fisher-Jenks optimal partition in O(k n log n)
//! - **Head/tails**: recursive mean splits for heavy-tailed data
//! - **Standard deviation**: breaks at multiples of the sample deviation
//! - **Continuous**: linear or log10 gradient scales
//!
//! # Examples
//!
//! ## Computing breaks
//!
//! ```rust
//! use breaks_classify::{compute_breaks, ClassificationStrategy};
//!
//! let sample = vec![1.0, 1.0, 1.0, 1.0, 50.0, 50.0, 50.0, 50.0];
//! let scheme = compute_breaks(&sample, 2, &ClassificationStrategy::NaturalBreaks).unwrap();
//! let breaks = scheme.breaks().unwrap();
//!
//! assert_eq!(breaks.values(), &[1.0, 25.5, 50.0]);
//! assert_eq!(breaks.counts(&sample), vec![4, 4]);
//! ```
//!
//! ## Using a strategy directly
//!
//! ```rust
//! use breaks_classify::{BreaksStrategy, ClassificationOps, PrettyBreaks};
//!
//! let sample = vec![3.2, 7.9, 12.4, 18.1, 26.7];
//! let breaks = PrettyBreaks.breaks(&sample, 5).unwrap();
//!
//! println!("{breaks}");
//! for label in breaks.labels(0) {
//!     println!("  {label}");
//! }
//! let gvf = breaks.goodness_of_variance_fit(&sample).unwrap();
//! assert!((0.0..=1.0).contains(&gvf));
//! ```
//!
//! ## Selecting a style by name
//!
//! ```rust
//! use breaks_classify::ClassificationStrategy;
//!
//! let strategy: ClassificationStrategy = "jenks".parse().unwrap();
//! assert_eq!(strategy, ClassificationStrategy::NaturalBreaks);
//! assert!("kmeans".parse::<ClassificationStrategy>().is_err());
//! ```

pub mod continuous;
pub mod ops;
pub mod strategies;
pub mod strategy;
pub mod traits;
pub mod types;

pub use breaks_core::{Error, Result};

// Re-export main types and traits
pub use continuous::{ContinuousScale, Normalization};
pub use ops::ClassificationOps;
pub use strategies::{
    ClipPolicy, EqualIntervalBreaks, FixedBreaks, HeadTailBreaks, NaturalBreaks, PrettyBreaks,
    QuantileBreaks, StdDevBreaks,
};
pub use strategy::{compute_breaks, ClassificationStrategy, STYLE_TAGS};
pub use traits::BreaksStrategy;
pub use types::{Breaks, ClassInterval, ClassScheme};

// Convenience functions
/// Compute quantile breaks for `k` classes
pub fn quantile_breaks(sample: &[f64], k: usize) -> Result<Breaks> {
    QuantileBreaks.breaks(sample, k)
}

/// Compute natural (Fisher-Jenks) breaks for `k` classes
pub fn natural_breaks(sample: &[f64], k: usize) -> Result<Breaks> {
    NaturalBreaks.breaks(sample, k)
}

/// Compute round-number breaks for roughly `k` classes
pub fn pretty_breaks(sample: &[f64], k: usize) -> Result<Breaks> {
    PrettyBreaks.breaks(sample, k)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        compute_breaks, Breaks, BreaksStrategy, ClassScheme, ClassificationOps,
        ClassificationStrategy, ContinuousScale, Error, Normalization, Result,
    };
}

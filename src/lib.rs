//! Class breaks for choropleth maps
//!
//! Umbrella crate over the workspace members:
//!
//! - [`breaks_core`]: shared error type and sample utilities
//! - [`breaks_classify`]: the classification styles and `compute_breaks`
//! - `breaks_polars` (feature `polars`): DataFrame preparation and classification
//!
//! # Example
//!
//! ```rust
//! use choropleth_breaks::prelude::*;
//!
//! let pct = vec![2.1, 3.4, 3.9, 5.0, 7.7, 12.5, 18.0, 31.2, 44.9, 60.3];
//! let scheme = compute_breaks(&pct, 3, &ClassificationStrategy::NaturalBreaks).unwrap();
//! let breaks = scheme.breaks().unwrap();
//!
//! assert_eq!(breaks.num_classes(), 3);
//! assert_eq!(breaks.counts(&pct).iter().sum::<usize>(), pct.len());
//! ```

pub use breaks_classify;
pub use breaks_core;

#[cfg(feature = "polars")]
pub use breaks_polars;

pub use breaks_classify::{
    compute_breaks, Breaks, BreaksStrategy, ClassInterval, ClassScheme, ClassificationOps,
    ClassificationStrategy, ClipPolicy, ContinuousScale, Normalization,
};
pub use breaks_core::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use breaks_classify::prelude::*;

    #[cfg(feature = "polars")]
    pub use breaks_polars::{ChoroplethFrameExt, ClassificationConfig, TableSource};
}

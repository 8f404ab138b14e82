//! Polars integration for choropleth classification
//!
//! This crate prepares attribute columns on Polars DataFrames and classifies
//! them through a single extension trait, [`ChoroplethFrameExt`]. Tables are
//! loaded from explicitly configured paths with [`load_table`].
//!
//! # Example
//!
//! ```rust
//! use polars::prelude::*;
//! use breaks_polars::{ChoroplethFrameExt, ClassificationConfig};
//! use breaks_classify::ClassificationStrategy;
//!
//! let areas = df!["code" => ["E01", "E02", "E03", "E04"]].unwrap();
//! let census = df![
//!     "code" => ["E01", "E02", "E03", "E04"],
//!     "group_a" => [12i64, 40, 3, 25],
//!     "total" => [100i64, 160, 60, 50],
//! ].unwrap();
//!
//! let joined = areas.join_attributes(&census, "code").unwrap();
//! joined.check_complete(&["group_a", "total"]).unwrap();
//!
//! let df = joined.with_percentage("group_a", "total", "pct_a").unwrap();
//! let config = ClassificationConfig::new("pct_a", ClassificationStrategy::Quantile).classes(2);
//! let classified = df.classify(&config).unwrap();
//! assert!(classified.column("pct_a_class").is_ok());
//! ```

mod config;
mod error;
mod io;
mod methods;
mod traits;

pub use config::*;
pub use error::{Error, Result};
pub use io::load_table;
pub use traits::*;

// Re-export commonly used types from dependencies
pub use breaks_classify::{Breaks, ClassScheme, ClassificationStrategy};

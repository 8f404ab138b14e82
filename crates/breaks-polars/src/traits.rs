//! Extension trait for preparing and classifying choropleth attributes

use crate::{ClassificationConfig, Result};
use breaks_classify::{Breaks, ClassScheme, ClassificationStrategy};
use polars::prelude::*;

/// Extension trait for choropleth operations on Polars DataFrames
pub trait ChoroplethFrameExt {
    /// Left join an attribute table onto this frame by a shared key column
    ///
    /// Every row of `self` is kept; rows without a match get nulls in the
    /// table's columns.
    fn join_attributes(&self, table: &DataFrame, key: &str) -> Result<DataFrame>;

    /// Derive `100 * numerator / denominator` as a Float64 column
    ///
    /// Zero or null denominators give null.
    fn with_percentage(&self, numerator: &str, denominator: &str, name: &str)
        -> Result<DataFrame>;

    /// Fail with `MissingValues` if any listed column contains nulls
    fn check_complete(&self, columns: &[&str]) -> Result<()>;

    /// Compute a classification scheme from a numeric column
    ///
    /// Nulls are skipped; integer columns are cast to Float64.
    fn class_breaks(
        &self,
        column: &str,
        k: usize,
        strategy: &ClassificationStrategy,
    ) -> Result<ClassScheme>;

    /// Append a UInt32 class index column for a discrete strategy
    ///
    /// Nulls and values outside the breaks give null.
    fn with_class_column(
        &self,
        column: &str,
        k: usize,
        strategy: &ClassificationStrategy,
        output: &str,
    ) -> Result<DataFrame>;

    /// Classify a column as configured
    ///
    /// Discrete strategies append a class index column, continuous ones a
    /// Float64 position column in `[0, 1]`.
    fn classify(&self, config: &ClassificationConfig) -> Result<DataFrame>;

    /// Legend table for the given breaks
    ///
    /// # Returns
    /// DataFrame with columns `class`, `lower`, `upper`, `count` and `label`
    fn legend(&self, column: &str, breaks: &Breaks, precision: usize) -> Result<DataFrame>;
}

//! Core traits for class break computation

use crate::types::Breaks;
use breaks_core::{utils, Result};

/// Trait for computing class breaks from sample data
pub trait BreaksStrategy {
    /// Short style name, used in logs and errors
    fn name(&self) -> &'static str;

    /// Compute breaks for `k` classes from an unsorted sample
    fn breaks(&self, sample: &[f64], k: usize) -> Result<Breaks> {
        check_input(sample, k, self.name())?;
        let sorted = utils::sorted(sample);
        self.breaks_sorted(&sorted, k)
    }

    /// Compute breaks from a sample already sorted ascending
    ///
    /// Implementations validate their input again, so passing an empty or
    /// non-finite slice here still fails cleanly.
    fn breaks_sorted(&self, sorted_sample: &[f64], k: usize) -> Result<Breaks>;

    /// Number of classes the strategy will produce for `k`, if fixed by it
    fn target_classes(&self, k: usize) -> Option<usize> {
        Some(k)
    }
}

/// Shared validation for every strategy: non-empty, finite, `k >= 1`
pub(crate) fn check_input(sample: &[f64], k: usize, name: &str) -> Result<()> {
    utils::validate_sample(sample, name)?;
    utils::validate_class_count(k)
}

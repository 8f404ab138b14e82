//! Utility functions for working with samples

use crate::{Error, Result};
use ordered_float::OrderedFloat;

/// Sort data and return a new vector
///
/// Uses a total order, so NaN values land after every finite value.
///
/// # Examples
///
/// ```rust
/// use breaks_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by_key(|&v| OrderedFloat(v));
    sorted
}

/// Check that a sample is non-empty and finite, with `max - min` finite too
pub fn validate_sample(sample: &[f64], operation: &str) -> Result<()> {
    if sample.is_empty() {
        return Err(Error::empty_input(operation));
    }
    if sample.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite("sample"));
    }
    let (min, max) = sample
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if !(max - min).is_finite() {
        return Err(Error::range_overflow("sample"));
    }
    Ok(())
}

/// Check that a class count is usable
pub fn validate_class_count(k: usize) -> Result<()> {
    if k < 1 {
        return Err(Error::invalid_class_count(k));
    }
    Ok(())
}

/// Count distinct values in sorted data
///
/// # Examples
///
/// ```rust
/// use breaks_core::utils::distinct_count_sorted;
///
/// assert_eq!(distinct_count_sorted(&[1.0, 1.0, 2.0, 3.0, 3.0]), 3);
/// assert_eq!(distinct_count_sorted(&[]), 0);
/// ```
pub fn distinct_count_sorted(sorted: &[f64]) -> usize {
    if sorted.is_empty() {
        return 0;
    }
    1 + sorted
        .windows(2)
        .filter(|w| OrderedFloat(w[0]) != OrderedFloat(w[1]))
        .count()
}

/// Fail when `k` exceeds the distinct values of sorted data
pub fn require_distinct(sorted: &[f64], k: usize) -> Result<()> {
    let distinct = distinct_count_sorted(sorted);
    if k > distinct {
        return Err(Error::too_many_classes(k, distinct));
    }
    Ok(())
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sum of squared deviations from the mean
pub fn sum_squared_deviations(data: &[f64]) -> f64 {
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum()
}

/// Check whether a sequence is non-decreasing
pub fn is_non_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Check whether a sequence is strictly increasing
pub fn is_strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_sorted_basic() {
        assert_eq!(sorted(&[3.0, -1.0, 0.0, -5.0, 2.0]), vec![-5.0, -1.0, 0.0, 2.0, 3.0]);
        assert_eq!(sorted(&[]), Vec::<f64>::new());
    }

    #[test]
    fn test_sorted_with_nan() {
        let s = sorted(&[3.0, f64::NAN, 1.0, 2.0]);
        assert_eq!(&s[..3], &[1.0, 2.0, 3.0]);
        assert!(s[3].is_nan());
    }

    #[test]
    fn test_validate_sample() {
        assert!(validate_sample(&[1.0, 2.0], "test").is_ok());
        assert!(validate_sample(&[], "test").unwrap_err().is_invalid_input());
        assert!(validate_sample(&[1.0, f64::NAN], "test").is_err());
        assert!(validate_sample(&[f64::INFINITY], "test").is_err());
    }

    #[test]
    fn test_validate_sample_range_overflow() {
        let err = validate_sample(&[-1e308, 0.0, 1e308], "test").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("range"));
        assert!(validate_sample(&[f64::MAX, f64::MAX], "test").is_ok());
        assert!(validate_sample(&[-f64::MAX, 0.0], "test").is_ok());
    }

    #[test]
    fn test_validate_class_count() {
        assert!(validate_class_count(0).is_err());
        assert!(validate_class_count(1).is_ok());
    }

    #[test]
    fn test_require_distinct() {
        let data = [1.0, 1.0, 2.0, 2.0];
        assert!(require_distinct(&data, 2).is_ok());
        assert!(require_distinct(&data, 3).is_err());
    }

    #[test]
    fn test_mean_and_ssd() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_relative_eq!(sum_squared_deviations(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(sum_squared_deviations(&[4.0, 4.0]), 0.0);
    }

    #[test]
    fn test_monotonicity_checks() {
        assert!(is_non_decreasing(&[1.0, 1.0, 2.0]));
        assert!(!is_strictly_increasing(&[1.0, 1.0, 2.0]));
        assert!(is_strictly_increasing(&[0.0, 20.0, 40.0]));
        assert!(!is_non_decreasing(&[2.0, 1.0]));
    }

    proptest! {
        #[test]
        fn prop_sorted_is_non_decreasing(data in prop::collection::vec(-1e6f64..1e6, 0..200)) {
            let s = sorted(&data);
            prop_assert_eq!(s.len(), data.len());
            prop_assert!(is_non_decreasing(&s));
            prop_assert!(distinct_count_sorted(&s) <= s.len());
        }
    }
}

//! Property-based tests for class breaks
//!
//! Every discrete style must return non-decreasing breaks that cover the
//! sample, so each value lands in exactly one class.

use breaks_classify::strategies::quantile::quantile_sorted;
use breaks_classify::{
    compute_breaks, Breaks, BreaksStrategy, ClassificationOps, ClassificationStrategy,
    HeadTailBreaks, NaturalBreaks, PrettyBreaks, QuantileBreaks,
};
use proptest::prelude::*;

fn distinct_count(sample: &[f64]) -> usize {
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    sorted.dedup();
    sorted.len()
}

fn assert_partition(breaks: &Breaks, sample: &[f64]) -> Result<(), TestCaseError> {
    prop_assert!(breaks.values().windows(2).all(|w| w[0] <= w[1]));
    for &v in sample {
        prop_assert!(breaks.class_of(v).is_some(), "{} outside {}", v, breaks);
    }
    prop_assert_eq!(breaks.counts(sample).iter().sum::<usize>(), sample.len());
    Ok(())
}

fn sample_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e4..1.0e4f64, 1..120)
}

proptest! {
    // Property: quantile breaks span the sample and match k
    #[test]
    fn prop_quantile_partition(sample in sample_strategy(), k in 1usize..8) {
        prop_assume!(k <= distinct_count(&sample));
        let breaks = QuantileBreaks.breaks(&sample, k).unwrap();
        prop_assert_eq!(breaks.num_classes(), k);
        prop_assert_eq!(breaks.min(), sample.iter().cloned().fold(f64::INFINITY, f64::min));
        prop_assert_eq!(breaks.max(), sample.iter().cloned().fold(f64::NEG_INFINITY, f64::max));
        assert_partition(&breaks, &sample)?;
    }

    // Property: quantiles are monotone in p
    #[test]
    fn prop_quantile_monotone(sample in sample_strategy(), p in 0.0..1.0f64, q in 0.0..1.0f64) {
        let mut sorted = sample.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let (lo, hi) = if p <= q { (p, q) } else { (q, p) };
        prop_assert!(quantile_sorted(&sorted, lo) <= quantile_sorted(&sorted, hi));
    }

    // Property: pretty breaks enclose the sample with at least k classes
    #[test]
    fn prop_pretty_encloses(sample in sample_strategy(), k in 1usize..8) {
        prop_assume!(k <= distinct_count(&sample));
        let breaks = PrettyBreaks.breaks(&sample, k).unwrap();
        if distinct_count(&sample) > 1 {
            prop_assert!(breaks.num_classes() >= k);
        }
        assert_partition(&breaks, &sample)?;
    }

    // Property: natural breaks never do worse than quantile breaks
    #[test]
    fn prop_natural_beats_quantile(
        sample in prop::collection::vec(0.0..100.0f64, 2..60),
        k in 1usize..6
    ) {
        prop_assume!(k <= distinct_count(&sample));
        let natural = NaturalBreaks.breaks(&sample, k).unwrap();
        let quantile = QuantileBreaks.breaks(&sample, k).unwrap();
        assert_partition(&natural, &sample)?;
        let natural_sdcm = natural.within_class_deviation(&sample).unwrap();
        let quantile_sdcm = quantile.within_class_deviation(&sample).unwrap();
        prop_assert!(natural_sdcm <= quantile_sdcm + 1e-6 * quantile_sdcm.max(1.0));
    }

    // Property: head/tail splits terminate and cover the sample
    #[test]
    fn prop_head_tails_terminates(sample in sample_strategy()) {
        let breaks = HeadTailBreaks::new().breaks(&sample, 1).unwrap();
        prop_assert!(breaks.num_classes() <= sample.len().max(1));
        assert_partition(&breaks, &sample)?;
    }

    // Property: every discrete style in the registry yields a partition
    #[test]
    fn prop_compute_breaks_partition(sample in sample_strategy(), k in 1usize..6) {
        prop_assume!(k <= distinct_count(&sample));
        for name in ["quantile", "pretty", "equal", "jenks", "headtails", "sd"] {
            let strategy: ClassificationStrategy = name.parse().unwrap();
            let scheme = compute_breaks(&sample, k, &strategy).unwrap();
            assert_partition(scheme.breaks().unwrap(), &sample)?;
        }
    }

    // Property: continuous positions stay inside [0, 1]
    #[test]
    fn prop_continuous_position_in_unit_range(sample in sample_strategy(), v in -2.0e4..2.0e4f64) {
        let scheme = compute_breaks(&sample, 1, &ClassificationStrategy::continuous()).unwrap();
        let position = scheme.scale().unwrap().position(v);
        prop_assert!((0.0..=1.0).contains(&position));
    }
}

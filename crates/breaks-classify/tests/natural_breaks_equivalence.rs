//! Equivalence tests comparing the divide-and-conquer natural breaks solver
//! with the naive reference implementation

use approx::assert_relative_eq;
use breaks_classify::strategies::natural::optimal_group_starts;
use breaks_classify::{BreaksStrategy, ClassificationOps, NaturalBreaks};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, LogNormal, Normal};

// Import naive reference implementation
#[path = "../src/naive_reference.rs"]
mod naive_reference;

use naive_reference::{naive_break_values, naive_natural_breaks};

/// Test parameters for equivalence testing
struct TestParams {
    /// Relative tolerance for comparing costs
    rel_tolerance: f64,
    /// Absolute tolerance for near-zero costs
    abs_tolerance: f64,
}

impl Default for TestParams {
    fn default() -> Self {
        Self {
            rel_tolerance: 1e-9,
            abs_tolerance: 1e-9,
        }
    }
}

fn generate_normal(n: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std_dev).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

fn generate_lognormal(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = LogNormal::new(2.0, 1.0).unwrap();
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

fn generate_uniform(n: usize, min: f64, max: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(min..max)).collect()
}

/// Datasets without repeated values
fn continuous_datasets() -> Vec<(&'static str, Vec<f64>)> {
    vec![
        ("tiny", vec![1.0, 2.0, 4.0, 8.0]),
        ("random_normal", generate_normal(120, 0.0, 1.0, 42)),
        ("random_uniform", generate_uniform(150, 0.0, 10.0, 7)),
        ("random_lognormal", generate_lognormal(90, 3)),
        ("bimodal", {
            let mut data = generate_normal(60, 10.0, 1.0, 11);
            data.extend(generate_normal(60, 40.0, 2.0, 12));
            data
        }),
        ("large_values", generate_normal(80, 1.0e6, 10.0, 5)),
    ]
}

/// Datasets with ties and clusters
fn tied_datasets() -> Vec<(&'static str, Vec<f64>)> {
    vec![
        ("duplicates", vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 9.0, 9.0]),
        ("integers", {
            let mut rng = ChaCha8Rng::seed_from_u64(21);
            (0..100).map(|_| rng.gen_range(0..25) as f64).collect()
        }),
        ("clusters", vec![1.0, 1.0, 1.0, 1.0, 50.0, 50.0, 50.0, 50.0]),
    ]
}

#[test]
fn test_total_cost_matches_naive() {
    let params = TestParams::default();

    for (name, data) in continuous_datasets().into_iter().chain(tied_datasets()) {
        let mut sorted = data.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let distinct = {
            let mut d = sorted.clone();
            d.dedup();
            d.len()
        };

        for k in 1..=distinct.min(7) {
            let (_, naive_cost) = naive_natural_breaks(&data, k);
            let (_, fast_cost) = optimal_group_starts(&sorted, k);

            if (fast_cost - naive_cost).abs() > params.abs_tolerance {
                eprintln!(
                    "Dataset: {}, k: {}, naive: {}, optimized: {}",
                    name, k, naive_cost, fast_cost
                );
            }
            assert_relative_eq!(
                fast_cost,
                naive_cost,
                epsilon = params.abs_tolerance * naive_cost.max(1.0),
                max_relative = params.rel_tolerance,
            );
        }
    }
}

#[test]
fn test_breaks_are_optimal() {
    let params = TestParams::default();

    for (name, data) in continuous_datasets() {
        for k in 2..=data.len().min(6) {
            let breaks = NaturalBreaks.breaks(&data, k).unwrap();
            assert_eq!(breaks.num_classes(), k, "dataset {name}");

            // The classification the breaks induce reaches the naive optimum
            let (_, naive_cost) = naive_natural_breaks(&data, k);
            let sdcm = breaks.within_class_deviation(&data).unwrap();
            assert_relative_eq!(
                sdcm,
                naive_cost,
                epsilon = params.abs_tolerance * naive_cost.max(1.0),
                max_relative = 1e-8,
            );
        }
    }
}

#[test]
fn test_break_values_on_small_datasets() {
    let cases: Vec<(Vec<f64>, usize)> = vec![
        (vec![1.0, 1.0, 1.0, 1.0, 50.0, 50.0, 50.0, 50.0], 2),
        (vec![10.0, 1.0, 21.0, 2.0, 11.0, 20.0, 3.0, 12.0, 22.0], 3),
        (vec![0.0, 0.5, 4.0, 4.5, 9.0, 9.5, 30.0], 4),
        (vec![1.0, 2.0, 4.0], 3),
    ];

    for (data, k) in cases {
        let expected = naive_break_values(&data, k);
        let breaks = NaturalBreaks.breaks(&data, k).unwrap();
        assert_eq!(breaks.values(), expected.as_slice(), "data {data:?}, k {k}");
    }
}

#[test]
fn test_gvf_grows_with_classes() {
    let data = generate_lognormal(200, 99);
    let mut last = -1.0;
    for k in 1..=6 {
        let gvf = NaturalBreaks
            .breaks(&data, k)
            .unwrap()
            .goodness_of_variance_fit(&data)
            .unwrap();
        assert!(gvf >= last - 1e-12, "k = {k}: {gvf} < {last}");
        last = gvf;
    }
    assert!(last > 0.85);
}

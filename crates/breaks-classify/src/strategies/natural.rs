//! Fisher-Jenks natural breaks
//!
//! Finds the partition of the sorted sample into `k` contiguous groups that
//! minimises the total within-group sum of squared deviations. The dynamic
//! program runs layer by layer over the number of groups:
//!
//! ```text
//! D[1][j] = cost(0, j)
//! D[m][j] = min over i in [m-1, j) of D[m-1][i] + cost(i, j)
//! ```
//!
//! where `cost(i, j)` is the squared deviation of `x[i..j]`, answered in O(1)
//! from prefix sums. The optimal split index is monotone in `j`, so each
//! layer is filled by divide and conquer in O(n log n), giving O(k n log n)
//! overall instead of the textbook O(k n^2).

use crate::traits::{check_input, BreaksStrategy};
use crate::types::Breaks;
use breaks_core::{utils, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Natural breaks (Fisher-Jenks) classification
///
/// Interior breaks sit midway between the largest value of one group and
/// the smallest value of the next, so `[1, 1, 1, 1, 50, 50, 50, 50]` with
/// `k = 2` gives `[1, 25.5, 50]`. Output is deterministic: among equally good
/// split points the smallest index wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NaturalBreaks;

impl NaturalBreaks {
    pub fn new() -> Self {
        Self
    }
}

/// Prefix sums of centered values and their squares
struct PrefixSums {
    sum: Vec<f64>,
    sum_sq: Vec<f64>,
}

impl PrefixSums {
    fn new(sorted: &[f64]) -> Self {
        // Centering keeps the squared sums small, limiting cancellation
        let shift = utils::mean(sorted);
        let mut sum = Vec::with_capacity(sorted.len() + 1);
        let mut sum_sq = Vec::with_capacity(sorted.len() + 1);
        sum.push(0.0);
        sum_sq.push(0.0);
        for &x in sorted {
            let c = x - shift;
            sum.push(sum[sum.len() - 1] + c);
            sum_sq.push(sum_sq[sum_sq.len() - 1] + c * c);
        }
        Self { sum, sum_sq }
    }

    /// Sum of squared deviations of `x[i..j]`
    #[inline]
    fn cost(&self, i: usize, j: usize) -> f64 {
        let n = (j - i) as f64;
        let s = self.sum[j] - self.sum[i];
        let ssd = self.sum_sq[j] - self.sum_sq[i] - s * s / n;
        ssd.max(0.0)
    }
}

/// Optimal split points per layer, ready for backtracking
struct SplitTable {
    /// `splits[m][j]`: start of the last group when `x[..j]` forms `m + 1` groups
    splits: Vec<Vec<usize>>,
    /// Minimal total cost for the full sample
    total_cost: f64,
}

/// One layer of the recurrence, filled by divide and conquer over `j`
struct LayerSolver<'a> {
    prefix: &'a PrefixSums,
    prev: &'a [f64],
    layer: usize,
}

impl LayerSolver<'_> {
    fn solve(
        &self,
        cur: &mut [f64],
        split: &mut [usize],
        (j_lo, j_hi): (usize, usize),
        (opt_lo, opt_hi): (usize, usize),
    ) {
        if j_lo > j_hi {
            return;
        }
        let mid = (j_lo + j_hi) / 2;
        let lo = opt_lo.max(self.layer);
        let hi = opt_hi.min(mid - 1);

        let mut best = f64::INFINITY;
        let mut best_i = lo;
        for i in lo..=hi {
            let candidate = self.prev[i] + self.prefix.cost(i, mid);
            if candidate < best {
                best = candidate;
                best_i = i;
            }
        }
        cur[mid] = best;
        split[mid] = best_i;

        if mid > j_lo {
            self.solve(cur, split, (j_lo, mid - 1), (opt_lo, best_i));
        }
        self.solve(cur, split, (mid + 1, j_hi), (best_i, opt_hi));
    }
}

fn split_table(sorted: &[f64], k: usize) -> SplitTable {
    let n = sorted.len();
    let prefix = PrefixSums::new(sorted);

    // Layer 0: a single group covering x[..j]
    let mut prev: Vec<f64> = (0..=n)
        .map(|j| if j == 0 { 0.0 } else { prefix.cost(0, j) })
        .collect();
    let mut splits = vec![vec![0usize; n + 1]];

    for layer in 1..k {
        let mut cur = vec![f64::INFINITY; n + 1];
        let mut split = vec![0usize; n + 1];
        // x[..j] needs at least layer + 1 values for layer + 1 groups
        LayerSolver {
            prefix: &prefix,
            prev: &prev,
            layer,
        }
        .solve(&mut cur, &mut split, (layer + 1, n), (layer, n - 1));
        prev = cur;
        splits.push(split);
    }

    SplitTable {
        splits,
        total_cost: prev[n],
    }
}

/// Start indices of groups 1..k in the optimal partition of sorted data
///
/// `sorted` must be non-empty with `1 <= k <= sorted.len()`.
pub fn optimal_group_starts(sorted: &[f64], k: usize) -> (Vec<usize>, f64) {
    let table = split_table(sorted, k);
    let mut starts = vec![0usize; k - 1];
    let mut end = sorted.len();
    for layer in (1..k).rev() {
        let start = table.splits[layer][end];
        starts[layer - 1] = start;
        end = start;
    }
    (starts, table.total_cost)
}

impl BreaksStrategy for NaturalBreaks {
    fn name(&self) -> &'static str {
        "jenks"
    }

    #[instrument(level = "debug", skip(self, sorted_sample), fields(n = sorted_sample.len()))]
    fn breaks_sorted(&self, sorted_sample: &[f64], k: usize) -> Result<Breaks> {
        check_input(sorted_sample, k, self.name())?;
        utils::require_distinct(sorted_sample, k)?;

        let n = sorted_sample.len();
        let (starts, total_cost) = optimal_group_starts(sorted_sample, k);
        debug!(total_cost, "natural breaks partition found");

        let mut values = Vec::with_capacity(k + 1);
        values.push(sorted_sample[0]);
        for &s in &starts {
            let (a, b) = (sorted_sample[s - 1], sorted_sample[s]);
            values.push(a + (b - a) / 2.0);
        }
        values.push(sorted_sample[n - 1]);
        Ok(Breaks::from_sorted(values))
    }
}

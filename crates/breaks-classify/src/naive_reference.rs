//! Naive reference implementation of natural breaks
//!
//! Fills the full O(k n^2) dynamic programming table, computing every group
//! cost directly from the data. It exists to check the divide-and-conquer
//! solver and is only compiled into tests.
//!
//! DO NOT USE IN PRODUCTION

/// Squared deviation of a group from its own mean
fn group_cost(group: &[f64]) -> f64 {
    let mean = group.iter().sum::<f64>() / group.len() as f64;
    group.iter().map(|&x| (x - mean) * (x - mean)).sum()
}

/// Optimal partition of `data` into `k` contiguous groups after sorting
///
/// Returns the start index of groups 1..k and the minimal total cost.
pub fn naive_natural_breaks(data: &[f64], k: usize) -> (Vec<usize>, f64) {
    assert!(!data.is_empty(), "Cannot classify empty data");
    assert!(k >= 1 && k <= data.len(), "Class count out of range");

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let n = sorted.len();

    // cost[m][j]: best cost for sorted[..j] in m + 1 groups
    let mut cost = vec![vec![f64::INFINITY; n + 1]; k];
    let mut split = vec![vec![0usize; n + 1]; k];
    for j in 1..=n {
        cost[0][j] = group_cost(&sorted[..j]);
    }
    for m in 1..k {
        for j in (m + 1)..=n {
            for i in m..j {
                let candidate = cost[m - 1][i] + group_cost(&sorted[i..j]);
                if candidate < cost[m][j] {
                    cost[m][j] = candidate;
                    split[m][j] = i;
                }
            }
        }
    }

    let mut starts = vec![0usize; k - 1];
    let mut end = n;
    for m in (1..k).rev() {
        starts[m - 1] = split[m][end];
        end = starts[m - 1];
    }
    (starts, cost[k - 1][n])
}

/// Natural breaks values computed with the naive solver
pub fn naive_break_values(data: &[f64], k: usize) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let (starts, _) = naive_natural_breaks(&sorted, k);

    let mut values = vec![sorted[0]];
    values.extend(starts.iter().map(|&s| (sorted[s - 1] + sorted[s]) / 2.0));
    values.push(sorted[sorted.len() - 1]);
    values
}

//! Kuhn-Munkres assignment with row/column potentials.
//!
//! Works on a rectangular cost matrix with rows <= cols and returns, for
//! every row, the column it is assigned to. Every row gets a distinct
//! column and the total cost is minimal.

use super::correspondence_data::CostMatrix;
use glam::Vec3;

/// Build the Euclidean distance matrix between two point sets
pub fn distance_matrix(sources: &[Vec3], targets: &[Vec3]) -> CostMatrix {
    let mut costs = Vec::with_capacity(sources.len() * targets.len());
    for source in sources {
        for target in targets {
            costs.push(source.distance(*target) as f64);
        }
    }
    CostMatrix {
        rows: sources.len(),
        cols: targets.len(),
        costs,
    }
}

/// Optimal matching of `sources` onto `targets` by Euclidean distance
pub fn solve_exact(sources: &[Vec3], targets: &[Vec3]) -> Vec<usize> {
    solve_assignment(&distance_matrix(sources, targets))
}

/// Solve the assignment problem. Panics if rows > cols.
pub fn solve_assignment(matrix: &CostMatrix) -> Vec<usize> {
    let n = matrix.rows;
    let m = matrix.cols;
    assert!(
        n <= m,
        "assignment needs rows <= cols (rows={}, cols={})",
        n,
        m
    );
    if n == 0 {
        return Vec::new();
    }

    // Indices are 1-based below; row/column 0 is a sentinel.
    let cost = |i: usize, j: usize| matrix.costs[(i - 1) * m + (j - 1)];

    let mut u = vec![0.0f64; n + 1];
    let mut v = vec![0.0f64; m + 1];
    // p[j]: row matched to column j (0 = free)
    let mut p = vec![0usize; m + 1];
    // way[j]: previous column on the alternating path to j
    let mut way = vec![0usize; m + 1];
    let mut min_v = vec![f64::INFINITY; m + 1];
    let mut used = vec![false; m + 1];

    for i in 1..=n {
        p[0] = i;
        let mut j0 = 0usize;
        min_v.fill(f64::INFINITY);
        used.fill(false);

        loop {
            used[j0] = true;
            let i0 = p[j0];
            let mut delta = f64::INFINITY;
            let mut j1 = 0usize;

            for j in 1..=m {
                if used[j] {
                    continue;
                }
                let reduced = cost(i0, j) - u[i0] - v[j];
                if reduced < min_v[j] {
                    min_v[j] = reduced;
                    way[j] = j0;
                }
                if min_v[j] < delta {
                    delta = min_v[j];
                    j1 = j;
                }
            }

            for j in 0..=m {
                if used[j] {
                    u[p[j]] += delta;
                    v[j] -= delta;
                } else {
                    min_v[j] -= delta;
                }
            }

            j0 = j1;
            if p[j0] == 0 {
                break;
            }
        }

        // Flip the augmenting path
        loop {
            let j1 = way[j0];
            p[j0] = p[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![0usize; n];
    for j in 1..=m {
        if p[j] != 0 {
            assignment[p[j] - 1] = j - 1;
        }
    }
    assignment
}

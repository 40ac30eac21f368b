//! Correspondence Operations - Pure DOP Functions
//!
//! Chooses a solver from the problem size and matches two equal-size clouds.

use super::correspondence_data::{Correspondence, SolverMode};
use super::greedy::solve_greedy;
use super::hungarian::solve_exact;
use bit_vec::BitVec;
use glam::Vec3;

/// Exact up to and including `threshold` points, greedy above
pub fn select_solver_mode(n: usize, threshold: usize) -> SolverMode {
    if n <= threshold {
        SolverMode::Exact
    } else {
        SolverMode::Greedy
    }
}

/// Match `sources[i]` to `targets[assignment[i]]` minimizing total travel.
///
/// Both sets must have the same length; anything else is a caller bug.
pub fn solve_correspondence(sources: &[Vec3], targets: &[Vec3], threshold: usize) -> Correspondence {
    assert_eq!(
        sources.len(),
        targets.len(),
        "correspondence needs equal-size point sets"
    );

    let mode = select_solver_mode(sources.len(), threshold);
    let assignment = match mode {
        SolverMode::Exact => solve_exact(sources, targets),
        SolverMode::Greedy => {
            log::debug!(
                "[correspondence_operations::solve] {} points above exact threshold {}, using greedy matching",
                sources.len(),
                threshold
            );
            solve_greedy(sources, targets)
        }
    };

    let total_distance = total_distance(sources, targets, &assignment);
    log::info!(
        "[correspondence_operations::solve] Matched {} points ({:?}), total distance {:.2}",
        sources.len(),
        mode,
        total_distance
    );

    Correspondence {
        assignment,
        mode,
        total_distance,
    }
}

/// Sum of distances travelled under an assignment
pub fn total_distance(sources: &[Vec3], targets: &[Vec3], assignment: &[usize]) -> f32 {
    sources
        .iter()
        .zip(assignment)
        .map(|(source, &j)| source.distance(targets[j]))
        .sum()
}

/// Whether `assignment` uses every index in `0..target_count` exactly once
pub fn is_bijection(assignment: &[usize], target_count: usize) -> bool {
    if assignment.len() != target_count {
        return false;
    }
    let mut seen = BitVec::from_elem(target_count, false);
    for &j in assignment {
        if j >= target_count || seen[j] {
            return false;
        }
        seen.set(j, true);
    }
    true
}

/// Reorder `targets` so that index `i` holds the point matched to source `i`
pub fn apply_assignment(targets: &[Vec3], assignment: &[usize]) -> Vec<Vec3> {
    assignment.iter().map(|&j| targets[j]).collect()
}

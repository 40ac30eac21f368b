//! Greedy nearest-unused-neighbor matching.
//!
//! Sources are visited in order; each takes the closest target nobody has
//! claimed yet. Comparisons use squared distance. Ties go to the lowest
//! target index so results are deterministic.

use bit_vec::BitVec;
use glam::Vec3;

/// Match every source to a distinct target. Panics if there are fewer targets than sources.
pub fn solve_greedy(sources: &[Vec3], targets: &[Vec3]) -> Vec<usize> {
    assert!(
        sources.len() <= targets.len(),
        "greedy matching needs at least as many targets as sources ({} > {})",
        sources.len(),
        targets.len()
    );

    let mut used = BitVec::from_elem(targets.len(), false);
    let mut assignment = Vec::with_capacity(sources.len());

    for source in sources {
        let mut best_index = usize::MAX;
        let mut best_distance = f32::INFINITY;

        for (index, target) in targets.iter().enumerate() {
            if used[index] {
                continue;
            }
            let distance = source.distance_squared(*target);
            if best_index == usize::MAX || distance < best_distance {
                best_distance = distance;
                best_index = index;
            }
        }

        used.set(best_index, true);
        assignment.push(best_index);
    }

    assignment
}

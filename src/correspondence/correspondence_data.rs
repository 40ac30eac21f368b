//! Correspondence Data - Pure DOP
//!
//! NO METHODS. Just data.
//! Solvers live in hungarian.rs, greedy.rs and correspondence_operations.rs

/// Which solver produced (or will produce) an assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverMode {
    /// Kuhn-Munkres, O(N³), optimal
    Exact,
    /// Nearest unused neighbor, O(N²), approximate
    Greedy,
}

/// Dense row-major cost matrix, rows <= cols
#[derive(Debug, Clone)]
pub struct CostMatrix {
    pub rows: usize,
    pub cols: usize,
    pub costs: Vec<f64>,
}

/// Result of matching source points to target points
#[derive(Debug, Clone)]
pub struct Correspondence {
    /// `assignment[i]` is the target index matched to source `i`
    pub assignment: Vec<usize>,
    pub mode: SolverMode,
    pub total_distance: f32,
}

/// Correspondence Module - Data-Oriented Programming (DOP) style
///
/// - correspondence_data.rs: solver mode, cost matrix and result containers
/// - hungarian.rs / greedy.rs: the two solvers
/// - ordering.rs: flow and spiral pre-orderings
/// - correspondence_operations.rs: solver selection and matching

pub mod correspondence_data;
pub mod correspondence_operations;
pub mod greedy;
pub mod hungarian;
pub mod ordering;

pub use correspondence_data::{CostMatrix, Correspondence, SolverMode};

pub use correspondence_operations::{
    apply_assignment, is_bijection, select_solver_mode, solve_correspondence, total_distance,
};
pub use greedy::solve_greedy;
pub use hungarian::{distance_matrix, solve_assignment, solve_exact};
pub use ordering::{flow_order, spiral_order};

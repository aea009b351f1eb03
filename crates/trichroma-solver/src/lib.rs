//! # trichroma-solver
//!
//! Sequential greedy 3-coloring driver and its supporting priority
//! structure:
//! - **SortingMachine**: indexes uncolored vertices by (static degree
//!   descending, colored-neighbor count descending, id ascending) for O(1)
//!   best-next-vertex selection.
//! - **GreedySolver**: the selection/propagation loop with a trapped-vertex
//!   fast path and an independent verification pass.
//!
//! The algorithm is a heuristic: it never backtracks, and it may report
//! failure on graphs that are in fact 3-colorable.

pub mod machine;
pub mod solver;

pub use machine::SortingMachine;
pub use solver::GreedySolver;

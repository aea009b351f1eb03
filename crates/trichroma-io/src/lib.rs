//! # trichroma-io
//!
//! Collaborator operations around the core graph model:
//! - **random**: G(n, p) random graph generation with a caller-supplied RNG
//! - **dot**: DOT-format export of a graph and its coloring
//!
//! Both consume only the graph's public API; all randomness in the system
//! lives here, keeping the core and solver fully deterministic.

pub mod dot;
pub mod random;

pub use dot::export_dot;
pub use random::generate_random_graph;

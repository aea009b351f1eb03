//! Random graph generation.

use rand::distributions::{Bernoulli, Distribution};
use rand::Rng;
use trichroma_core::{Graph, Result, TrichromaError};

/// Generates a G(n, p) random graph: every unordered vertex pair receives
/// an edge independently with probability `p`.
///
/// Degrees are computed before returning. The caller supplies the RNG, so
/// a seeded generator reproduces the same graph exactly.
pub fn generate_random_graph<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> Result<Graph> {
    let edge_dist = Bernoulli::new(p).map_err(|_| {
        TrichromaError::validation(format!("edge probability {} outside [0, 1]", p))
    })?;

    let mut graph = Graph::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            if edge_dist.sample(rng) {
                graph.add_edge(u, v)?;
            }
        }
    }
    graph.compute_degrees();

    log::debug!(
        "generated random graph: n={}, p={}, edges={}",
        n,
        p,
        graph.num_edges()
    );
    Ok(graph)
}

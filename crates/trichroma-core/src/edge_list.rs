//! Text edge-list file parser.
//!
//! The format is a plain whitespace-separated token stream:
//! - first two integers: `n m` (vertex count, edge count)
//! - followed by `m` pairs `u v` of 0-based vertex ids
//!
//! Tokens may be split across lines. Out-of-range ids fail at edge-add time
//! with the graph's own out-of-range error; duplicate pairs pass through
//! unchanged and double-count degree, and `u u` pairs are dropped silently,
//! both per the graph's edge policy.
//!
//! ## Example
//! ```text
//! 4 5
//! 0 1
//! 1 2
//! 2 0
//! 1 3
//! 2 3
//! ```

use crate::errors::{Result, TrichromaError};
use crate::types::Graph;
use std::fs;
use std::path::Path;

/// Parses the next token as a `usize`, with a descriptive error on
/// exhaustion or malformed input.
fn next_usize<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<usize> {
    let token = tokens
        .next()
        .ok_or_else(|| TrichromaError::validation(format!("unexpected end of input: missing {what}")))?;
    token.parse::<usize>().map_err(|_| {
        TrichromaError::validation(format!("invalid {what} '{token}': must be a non-negative integer"))
    })
}

/// Loads a graph from an edge-list file.
///
/// Degrees are computed before returning, so the graph is ready for a
/// solver. An unreadable path fails with an I/O error; malformed tokens
/// fail with a validation error; out-of-range ids fail with
/// [`TrichromaError::VertexOutOfRange`].
pub fn load_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path_ref = path.as_ref();
    let content = fs::read_to_string(path_ref).map_err(|e| {
        TrichromaError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to open edge list file '{}': {}", path_ref.display(), e),
        ))
    })?;

    let mut tokens = content.split_whitespace();

    let n = next_usize(&mut tokens, "vertex count")?;
    let m = next_usize(&mut tokens, "edge count")?;

    let mut graph = Graph::new(n);
    for i in 0..m {
        let u = next_usize(&mut tokens, &format!("first endpoint of edge {i}"))?;
        let v = next_usize(&mut tokens, &format!("second endpoint of edge {i}"))?;
        graph.add_edge(u, v)?;
    }

    let trailing = tokens.count();
    if trailing > 0 {
        log::warn!(
            "edge list file '{}' declared {} edges but has {} trailing tokens",
            path_ref.display(),
            m,
            trailing
        );
    }

    graph.compute_degrees();
    Ok(graph)
}

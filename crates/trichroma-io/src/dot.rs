//! DOT-format export of a graph and its coloring.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use trichroma_core::{Color, Graph, Result};

fn fill_color(color: Option<Color>) -> &'static str {
    match color {
        Some(Color::Red) => "red",
        Some(Color::Blue) => "blue",
        Some(Color::Yellow) => "yellow",
        None => "gray",
    }
}

/// Writes `graph` to `path` as an undirected DOT graph.
///
/// Each vertex becomes a filled node carrying its current color (gray while
/// uncolored); each edge becomes one `u -- v;` line, emitted from the
/// endpoint with the smaller id. Parallel edges produce one line per
/// duplicate, matching the graph's duplicate-edge policy.
pub fn export_dot<P: AsRef<Path>>(graph: &Graph, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut out = BufWriter::new(file);

    writeln!(out, "graph G {{")?;
    for vertex in graph.vertices() {
        writeln!(
            out,
            "  {} [style=filled, fillcolor={}];",
            vertex.id,
            fill_color(vertex.color)
        )?;
    }
    for vertex in graph.vertices() {
        for u in graph.neighbors(vertex.id) {
            if u > vertex.id {
                writeln!(out, "  {} -- {};", vertex.id, u)?;
            }
        }
    }
    writeln!(out, "}}")?;
    out.flush()?;

    log::debug!(
        "exported {} vertices and {} edges to DOT",
        graph.num_vertices(),
        graph.num_edges()
    );
    Ok(())
}

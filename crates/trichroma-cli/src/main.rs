//! trichroma CLI entry point.
//!
//! Loads a graph from an edge-list file (or generates a random one), runs
//! the greedy 3-coloring solver once, reports the outcome and the
//! independent verification verdict, and optionally exports the colored
//! graph to DOT.

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use trichroma_io::{export_dot, generate_random_graph};
use trichroma_solver::GreedySolver;

/// trichroma version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Telemetry output path (JSONL, one record appended per run)
const TELEMETRY_PATH: &str = "telemetry_trichroma.jsonl";

#[derive(Parser, Debug)]
#[command(name = "trichroma")]
#[command(version = VERSION)]
#[command(about = "Greedy 3-coloring with constraint propagation", long_about = None)]
struct Args {
    /// Input edge-list file path (first line `n m`, then `m` pairs `u v`,
    /// 0-based ids). A random graph is generated when omitted.
    #[arg(short, long)]
    input: Option<String>,

    /// Number of vertices for generated graphs
    ///
    /// Example: --vertices 50
    #[arg(long, default_value = "10")]
    vertices: usize,

    /// Edge probability for generated graphs, in [0.0, 1.0]
    ///
    /// Example: --probability 0.2
    #[arg(long, default_value = "0.3")]
    probability: f64,

    /// RNG seed for generated graphs (entropy-seeded when omitted)
    ///
    /// A fixed seed reproduces the same graph, and with it the same
    /// coloring outcome.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the (possibly partially) colored graph to a DOT file
    ///
    /// Example: --dot coloring.dot
    #[arg(long)]
    dot: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    log::info!("trichroma {} - starting", VERSION);

    // ========================================================================
    // Graph Acquisition
    // ========================================================================

    let mut graph = if let Some(ref path) = args.input {
        log::info!("Loading graph from edge list: {}", path);
        trichroma_core::edge_list::load_edge_list_file(path)
            .map_err(|e| anyhow::anyhow!("failed to load edge list '{}': {}", path, e))?
    } else {
        if !(0.0..=1.0).contains(&args.probability) {
            anyhow::bail!(
                "edge probability must be in [0.0, 1.0] (got {})",
                args.probability
            );
        }
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        log::info!(
            "No input file given, generating random graph: n={}, p={}",
            args.vertices,
            args.probability
        );
        generate_random_graph(args.vertices, args.probability, &mut rng)?
    };

    log::info!(
        "Graph: {} vertices, {} edges, density {:.3}",
        graph.num_vertices(),
        graph.num_edges(),
        graph.density()
    );

    // ========================================================================
    // Solve & Verify
    // ========================================================================

    let mut solver = GreedySolver::new();
    let start = std::time::Instant::now();
    let success = solver.run_greedy(&mut graph)?;
    let elapsed = start.elapsed();

    let verified = success && solver.verify_coloring(&graph);

    if success {
        log::info!(
            "Greedy 3-color result: Success ({:.3} ms)",
            elapsed.as_secs_f64() * 1000.0
        );
        if verified {
            log::info!("Coloring verified: no monochromatic edges");
        } else {
            log::error!("Coloring appears invalid");
        }
    } else {
        log::info!(
            "Greedy 3-color result: Failure - contradiction reached ({:.3} ms)",
            elapsed.as_secs_f64() * 1000.0
        );
    }

    if let Some(ref dot_path) = args.dot {
        export_dot(&graph, dot_path)
            .map_err(|e| anyhow::anyhow!("failed to export DOT file '{}': {}", dot_path, e))?;
        log::info!("DOT export written to: {}", dot_path);
    }

    // ========================================================================
    // Telemetry
    // ========================================================================

    let telemetry = serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "input": args.input,
        "seed": args.seed,
        "graph": {
            "vertices": graph.num_vertices(),
            "edges": graph.num_edges(),
            "density": graph.density(),
        },
        "results": {
            "success": success,
            "verified": verified,
            "runtime_ms": elapsed.as_secs_f64() * 1000.0,
        }
    });

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(TELEMETRY_PATH)?;
    writeln!(file, "{}", serde_json::to_string(&telemetry)?)?;
    log::info!("Telemetry written to: {}", TELEMETRY_PATH);

    Ok(())
}

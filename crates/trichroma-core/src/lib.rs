//! # trichroma-core
//!
//! Core types for the trichroma greedy 3-coloring engine:
//! - **Types**: Graph, Vertex, Color, ColorMask
//! - **Errors**: Unified error handling with TrichromaError
//! - **Edge lists**: Text edge-list file parsing
//!
//! The graph stores its vertices in a dense arena indexed by `VertexId` and
//! its adjacency entries in a second arena owned by the same `Graph`, so all
//! cross-structure references are plain indices. Dynamic coloring state lives
//! on the vertices and is reset before every solve; identity, degree, and
//! adjacency are fixed once the graph is built.

pub mod edge_list;
pub mod errors;
pub mod types;

pub use errors::{Result, TrichromaError};
pub use types::{AdjEntry, Color, ColorMask, EntryId, Graph, Vertex, VertexId};

//! Core data types for graph 3-coloring.

use crate::errors::{Result, TrichromaError};
use serde::{Deserialize, Serialize};

/// Vertex id type alias for clarity.
pub type VertexId = usize;

/// Index of an adjacency entry in the graph's entry arena.
pub type EntryId = usize;

/// Bitmask covering all three colors.
const ALL_COLORS: u8 = 0b111;

/// One of the three vertex colors.
///
/// "Uncolored" is represented as `Option<Color>` = `None` on the vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Yellow,
}

impl Color {
    /// Fixed assignment priority: Red first, then Blue, then Yellow.
    pub const PRIORITY: [Color; 3] = [Color::Red, Color::Blue, Color::Yellow];

    /// Bit position of this color in a [`ColorMask`].
    pub fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
            Color::Yellow => 2,
        }
    }

    /// Single-bit mask for this color.
    pub fn bit(self) -> u8 {
        1 << self.index()
    }
}

/// Set of colors forbidden for a vertex, one bit per color.
///
/// Bit *c* is set iff some already-colored neighbor carries color *c*.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMask(u8);

impl ColorMask {
    /// The empty mask: every color still available.
    pub fn empty() -> Self {
        ColorMask(0)
    }

    /// Marks `color` as forbidden. Returns true if the bit was newly set.
    pub fn forbid(&mut self, color: Color) -> bool {
        let old = self.0;
        self.0 |= color.bit();
        self.0 != old
    }

    /// True if `color` is forbidden by this mask.
    pub fn is_forbidden(self, color: Color) -> bool {
        self.0 & color.bit() != 0
    }

    /// Number of colors still available: `popcount(~mask & 0b111)`.
    pub fn available_count(self) -> usize {
        (!self.0 & ALL_COLORS).count_ones() as usize
    }

    /// The single remaining color, if exactly one is available.
    pub fn sole_available(self) -> Option<Color> {
        if self.available_count() == 1 {
            self.first_available()
        } else {
            None
        }
    }

    /// First available color in priority order (Red, Blue, Yellow).
    pub fn first_available(self) -> Option<Color> {
        Color::PRIORITY.into_iter().find(|&c| !self.is_forbidden(c))
    }
}

/// One half of an undirected edge: a non-owning index reference to the
/// other endpoint, plus a link to the next entry in the source vertex's
/// adjacency list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AdjEntry {
    /// The neighboring vertex this entry points at.
    pub target: VertexId,
    /// Next entry in the owning vertex's adjacency list.
    pub next: Option<EntryId>,
}

/// A graph vertex with its static identity and per-solve dynamic state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// Stable identity, `0..n-1`.
    pub id: VertexId,
    /// Static neighbor count; parallel edges count twice.
    pub degree: usize,
    /// Current color, `None` while uncolored.
    pub color: Option<Color>,
    /// Colors already used by colored neighbors.
    pub forbidden: ColorMask,
    /// Number of neighbors currently colored.
    pub colored_neighbors: usize,
    /// True iff uncolored with exactly one color remaining.
    pub trapped: bool,
    /// Head of this vertex's adjacency list in the entry arena.
    adjacency_head: Option<EntryId>,
}

impl Vertex {
    fn new(id: VertexId) -> Self {
        Self {
            id,
            degree: 0,
            color: None,
            forbidden: ColorMask::empty(),
            colored_neighbors: 0,
            trapped: false,
            adjacency_head: None,
        }
    }

    /// True while the vertex has no color assigned.
    pub fn is_uncolored(&self) -> bool {
        self.color.is_none()
    }
}

/// Undirected graph with arena-backed adjacency.
///
/// Vertices live in a dense `Vec` indexed by [`VertexId`]. Each edge is two
/// back-to-back [`AdjEntry`] values in a second arena owned by the graph
/// and freed with it; entries are never removed individually. Only coloring
/// state is mutable once the graph is built.
///
/// Edges are not deduplicated: adding the same edge twice creates a parallel
/// relation and double-counts degree. Self-loops are silently dropped. Both
/// behaviors are intentional policy, not accidents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    vertices: Vec<Vertex>,
    entries: Vec<AdjEntry>,
    num_edges: usize,
}

impl Graph {
    /// Creates a graph with `n` isolated vertices.
    pub fn new(n: usize) -> Self {
        Self {
            vertices: (0..n).map(Vertex::new).collect(),
            entries: Vec::new(),
            num_edges: 0,
        }
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges added so far (parallel edges counted individually).
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Immutable access to a vertex.
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id]
    }

    /// Mutable access to a vertex.
    pub fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex {
        &mut self.vertices[id]
    }

    /// Iterator over all vertices in id order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Adds an undirected edge between `u` and `v`.
    ///
    /// Fails with [`TrichromaError::VertexOutOfRange`] if either id is
    /// outside `[0, n)`. `u == v` is a silent no-op.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        let len = self.vertices.len();
        for id in [u, v] {
            if id >= len {
                return Err(TrichromaError::VertexOutOfRange { id, len });
            }
        }
        if u == v {
            return Ok(());
        }

        // u -> v
        let entry_u = self.entries.len();
        self.entries.push(AdjEntry {
            target: v,
            next: self.vertices[u].adjacency_head,
        });
        self.vertices[u].adjacency_head = Some(entry_u);

        // v -> u
        let entry_v = self.entries.len();
        self.entries.push(AdjEntry {
            target: u,
            next: self.vertices[v].adjacency_head,
        });
        self.vertices[v].adjacency_head = Some(entry_v);

        self.num_edges += 1;
        Ok(())
    }

    /// Head of `v`'s adjacency list, for manual chain walking.
    pub fn first_entry(&self, v: VertexId) -> Option<EntryId> {
        self.vertices[v].adjacency_head
    }

    /// The adjacency entry at `e`.
    pub fn entry(&self, e: EntryId) -> AdjEntry {
        self.entries[e]
    }

    /// Iterator over the neighbor ids of `v`, most recently added first.
    pub fn neighbors(&self, v: VertexId) -> Neighbors<'_> {
        Neighbors {
            graph: self,
            cursor: self.vertices[v].adjacency_head,
        }
    }

    /// Sets each vertex's `degree` to the length of its adjacency list.
    ///
    /// Must run after all edges are added and before a priority structure
    /// is built over this graph.
    pub fn compute_degrees(&mut self) {
        for id in 0..self.vertices.len() {
            let mut d = 0;
            let mut cursor = self.vertices[id].adjacency_head;
            while let Some(e) = cursor {
                d += 1;
                cursor = self.entries[e].next;
            }
            self.vertices[id].degree = d;
        }
    }

    /// Restores every vertex's dynamic coloring state to its initial value.
    ///
    /// Identity, degree, and adjacency are untouched.
    pub fn reset_coloring_state(&mut self) {
        for vertex in &mut self.vertices {
            vertex.color = None;
            vertex.forbidden = ColorMask::empty();
            vertex.colored_neighbors = 0;
            vertex.trapped = false;
        }
    }

    /// Graph density: `2|E| / (|V| * (|V| - 1))`.
    pub fn density(&self) -> f64 {
        let n = self.vertices.len();
        if n <= 1 {
            return 0.0;
        }
        (2.0 * self.num_edges as f64) / (n * (n - 1)) as f64
    }
}

/// Iterator over a vertex's adjacency list.
pub struct Neighbors<'a> {
    graph: &'a Graph,
    cursor: Option<EntryId>,
}

impl Iterator for Neighbors<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        let e = self.cursor?;
        let entry = self.graph.entries[e];
        self.cursor = entry.next;
        Some(entry.target)
    }
}

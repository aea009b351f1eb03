//! Greedy 3-coloring driver with constraint propagation.

use crate::machine::SortingMachine;
use trichroma_core::{Color, Graph, Result, VertexId};

/// Sequential greedy 3-coloring solver.
///
/// Each step selects a vertex (trapped pool first, else the sorting
/// machine's best pick), assigns the first available color in Red, Blue,
/// Yellow priority order, and propagates the choice into the neighbors'
/// forbidden masks. A neighbor left with exactly one color becomes trapped
/// and is served before any machine pick; a neighbor left with none is a
/// contradiction and ends the run. There is no backtracking: a
/// contradiction is final for that run.
///
/// `run_greedy` returns `Ok(false)` on contradiction — an ordinary
/// algorithmic outcome. `Err` is reserved for broken internal invariants.
#[derive(Debug, Default)]
pub struct GreedySolver {
    machine: SortingMachine,
    /// Currently-trapped uncolored vertices, LIFO. The vertex `trapped`
    /// flag guards membership, so the pool holds no duplicates.
    trapped: Vec<VertexId>,
}

impl GreedySolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one greedy coloring pass over `graph`.
    ///
    /// Resets all dynamic coloring state first, so repeated calls on the
    /// same graph are independent and yield identical outcomes.
    pub fn run_greedy(&mut self, graph: &mut Graph) -> Result<bool> {
        self.initialize_state(graph)?;

        loop {
            if self.machine.is_empty() {
                // All uncolored vertices consumed.
                return Ok(true);
            }

            let v = match self.pop_trapped(graph) {
                Some(v) => {
                    self.machine.remove(graph, v);
                    v
                }
                None => match self.machine.pick_vertex(graph) {
                    Some(v) => {
                        self.machine.remove(graph, v);
                        v
                    }
                    None => return Ok(true),
                },
            };

            let mask = graph.vertex(v).forbidden;
            let color = match mask.sole_available() {
                // Trapped: the single remaining color is forced.
                Some(forced) => forced,
                None => match mask.first_available() {
                    Some(c) => c,
                    None => {
                        log::debug!("contradiction: vertex {} has no available color", v);
                        return Ok(false);
                    }
                },
            };

            graph.vertex_mut(v).color = Some(color);
            if !self.propagate(graph, v, color)? {
                return Ok(false);
            }
        }
    }

    /// Independently re-checks the coloring: every vertex colored, no edge
    /// joining equal colors.
    pub fn verify_coloring(&self, graph: &Graph) -> bool {
        for vertex in graph.vertices() {
            let Some(color) = vertex.color else {
                return false;
            };
            for u in graph.neighbors(vertex.id) {
                if graph.vertex(u).color == Some(color) {
                    return false;
                }
            }
        }
        true
    }

    fn initialize_state(&mut self, graph: &mut Graph) -> Result<()> {
        graph.reset_coloring_state();
        self.trapped.clear();
        self.machine.initialize(graph)
    }

    fn add_trapped(&mut self, graph: &mut Graph, v: VertexId) {
        let vertex = graph.vertex_mut(v);
        if vertex.trapped {
            return;
        }
        vertex.trapped = true;
        self.trapped.push(v);
    }

    fn remove_trapped(&mut self, graph: &mut Graph, v: VertexId) {
        let vertex = graph.vertex_mut(v);
        if !vertex.trapped {
            return;
        }
        vertex.trapped = false;
        if let Some(pos) = self.trapped.iter().position(|&t| t == v) {
            // Linear removal; the trapped pool stays small.
            self.trapped.remove(pos);
        }
    }

    /// Pops the most recently trapped uncolored vertex, silently demoting
    /// any entry that was colored in the meantime (which correct
    /// bookkeeping never produces).
    fn pop_trapped(&mut self, graph: &mut Graph) -> Option<VertexId> {
        while let Some(v) = self.trapped.pop() {
            graph.vertex_mut(v).trapped = false;
            if graph.vertex(v).color.is_none() {
                return Some(v);
            }
        }
        None
    }

    /// Folds `color` into every uncolored neighbor of `v`: forbids the
    /// color, reclassifies the neighbor's trapped state when the mask
    /// changed, and repositions it in the machine. Returns `Ok(false)` on
    /// contradiction.
    fn propagate(&mut self, graph: &mut Graph, v: VertexId, color: Color) -> Result<bool> {
        let mut cursor = graph.first_entry(v);
        while let Some(e) = cursor {
            let entry = graph.entry(e);
            cursor = entry.next;
            let u = entry.target;

            if graph.vertex(u).color.is_some() {
                continue;
            }

            let changed = graph.vertex_mut(u).forbidden.forbid(color);
            if changed {
                match graph.vertex(u).forbidden.available_count() {
                    0 => {
                        log::debug!("contradiction: vertex {} has no available color", u);
                        return Ok(false);
                    }
                    1 => self.add_trapped(graph, u),
                    _ => self.remove_trapped(graph, u),
                }
            }

            // Parallel edges revisit u here; the mask OR above is
            // idempotent, but the count inflates, which only shifts
            // selection order.
            self.machine.bump_colored_neighbors(graph, u)?;
        }
        Ok(true)
    }
}

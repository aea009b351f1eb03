//! Degree-bucketed priority structure over uncolored vertices.

use trichroma_core::{Graph, Result, TrichromaError, VertexId};

/// Priority structure ("sorting machine") over the uncolored vertices of a
/// graph.
///
/// One bucket exists per distinct static degree, buckets ordered by degree
/// descending. Within a bucket, vertices are kept sorted by colored-neighbor
/// count descending, ties broken by id ascending. Each bucket is a doubly
/// linked list threaded through the `next`/`prev` vectors indexed by vertex
/// id, so detaching a vertex is O(1); insertion is linear in the bucket's
/// occupancy.
///
/// The machine holds no reference to the graph: every operation takes the
/// graph as an explicit argument and must be given the same graph that
/// `initialize` saw. Degrees must not change between `initialize` and the
/// end of the solve.
#[derive(Debug, Default)]
pub struct SortingMachine {
    /// Distinct degree values present in the graph, sorted descending.
    degree_values: Vec<usize>,
    /// Degree -> bucket index lookup; `None` for degrees not present.
    degree_to_bucket: Vec<Option<usize>>,
    /// Head vertex of each bucket's list.
    heads: Vec<Option<VertexId>>,
    /// Per-vertex successor link within its bucket.
    next: Vec<Option<VertexId>>,
    /// Per-vertex predecessor link within its bucket.
    prev: Vec<Option<VertexId>>,
    /// Per-vertex membership flag; false once detached.
    linked: Vec<bool>,
}

impl SortingMachine {
    /// Creates an empty machine; call [`SortingMachine::initialize`] before use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the buckets from the graph's degrees and inserts every
    /// uncolored vertex.
    ///
    /// Must be called exactly once per solve, after `compute_degrees` and
    /// `reset_coloring_state` (immediately after a reset all vertices
    /// qualify as uncolored).
    pub fn initialize(&mut self, graph: &Graph) -> Result<()> {
        let n = graph.num_vertices();

        self.degree_values.clear();
        self.degree_values.extend(graph.vertices().map(|v| v.degree));
        self.degree_values.sort_unstable_by(|a, b| b.cmp(a));
        self.degree_values.dedup();

        let max_degree = self.degree_values.first().copied().unwrap_or(0);
        self.degree_to_bucket = vec![None; max_degree + 1];
        for (index, &degree) in self.degree_values.iter().enumerate() {
            self.degree_to_bucket[degree] = Some(index);
        }

        self.heads = vec![None; self.degree_values.len()];
        self.next = vec![None; n];
        self.prev = vec![None; n];
        self.linked = vec![false; n];

        for id in 0..n {
            self.insert(graph, id)?;
        }
        Ok(())
    }

    /// True iff every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.heads.iter().all(Option::is_none)
    }

    fn bucket_for_degree(&self, degree: usize) -> Option<usize> {
        self.degree_to_bucket.get(degree).copied().flatten()
    }

    /// Inserts `v` into its degree bucket at the position maintaining the
    /// (colored_neighbors desc, id asc) order.
    ///
    /// Only uncolored vertices are inserted; a colored `v` is a no-op. A
    /// degree with no bucket means `initialize` was not run against this
    /// graph, or a degree changed afterwards; that is a programmer error
    /// reported as [`TrichromaError::Invariant`].
    pub fn insert(&mut self, graph: &Graph, v: VertexId) -> Result<()> {
        let vertex = graph.vertex(v);
        if vertex.color.is_some() {
            return Ok(());
        }

        let bucket = self.bucket_for_degree(vertex.degree).ok_or_else(|| {
            TrichromaError::invariant(format!(
                "insert: vertex {} has degree {} with no bucket",
                v, vertex.degree
            ))
        })?;

        let mut prev_v: Option<VertexId> = None;
        let mut cursor = self.heads[bucket];
        while let Some(c) = cursor {
            let cur = graph.vertex(c);
            let before = cur.colored_neighbors > vertex.colored_neighbors
                || (cur.colored_neighbors == vertex.colored_neighbors && cur.id < vertex.id);
            if !before {
                break;
            }
            prev_v = Some(c);
            cursor = self.next[c];
        }

        self.prev[v] = prev_v;
        self.next[v] = cursor;
        match prev_v {
            Some(p) => self.next[p] = Some(v),
            None => self.heads[bucket] = Some(v),
        }
        if let Some(c) = cursor {
            self.prev[c] = Some(v);
        }
        self.linked[v] = true;
        Ok(())
    }

    /// Detaches `v` from its bucket in O(1); a no-op if already detached.
    pub fn remove(&mut self, graph: &Graph, v: VertexId) {
        if !self.linked.get(v).copied().unwrap_or(false) {
            return;
        }
        let Some(bucket) = self.bucket_for_degree(graph.vertex(v).degree) else {
            return;
        };

        match self.prev[v] {
            Some(p) => self.next[p] = self.next[v],
            None => self.heads[bucket] = self.next[v],
        }
        if let Some(n) = self.next[v] {
            self.prev[n] = self.prev[v];
        }
        self.next[v] = None;
        self.prev[v] = None;
        self.linked[v] = false;
    }

    /// Increments `v`'s colored-neighbor count and re-sorts its bucket
    /// position (remove + insert). A no-op if `v` is already colored.
    pub fn bump_colored_neighbors(&mut self, graph: &mut Graph, v: VertexId) -> Result<()> {
        if graph.vertex(v).color.is_some() {
            return Ok(());
        }
        self.remove(graph, v);
        graph.vertex_mut(v).colored_neighbors += 1;
        self.insert(graph, v)
    }

    /// Returns the head of the first non-empty bucket in descending-degree
    /// order, or `None` when all buckets are empty.
    ///
    /// Stale heads whose color is no longer `None` are lazily discarded;
    /// under correct usage the solver removes a vertex before or right
    /// after coloring it, so the discard never fires.
    pub fn pick_vertex(&mut self, graph: &Graph) -> Option<VertexId> {
        for bucket in 0..self.heads.len() {
            while let Some(head) = self.heads[bucket] {
                if graph.vertex(head).color.is_none() {
                    return Some(head);
                }
                self.remove(graph, head);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trichroma_core::Color;

    /// Star graph: vertex 0 adjacent to every other vertex.
    fn star_graph(n: usize) -> Graph {
        let mut graph = Graph::new(n);
        for v in 1..n {
            graph.add_edge(0, v).unwrap();
        }
        graph.compute_degrees();
        graph
    }

    fn bucket_contents(machine: &SortingMachine, bucket: usize) -> Vec<VertexId> {
        let mut out = Vec::new();
        let mut cursor = machine.heads[bucket];
        while let Some(v) = cursor {
            out.push(v);
            cursor = machine.next[v];
        }
        out
    }

    /// Asserts the (colored_neighbors desc, id asc) order inside every bucket.
    fn assert_bucket_order(machine: &SortingMachine, graph: &Graph) {
        for bucket in 0..machine.heads.len() {
            let ids = bucket_contents(machine, bucket);
            for pair in ids.windows(2) {
                let (a, b) = (graph.vertex(pair[0]), graph.vertex(pair[1]));
                assert!(
                    a.colored_neighbors > b.colored_neighbors
                        || (a.colored_neighbors == b.colored_neighbors && a.id < b.id),
                    "bucket {} out of order: {} before {}",
                    bucket,
                    a.id,
                    b.id
                );
            }
        }
    }

    #[test]
    fn test_initialize_buckets_by_degree() {
        let graph = star_graph(5);
        let mut machine = SortingMachine::new();
        machine.initialize(&graph).unwrap();

        // Degrees present: 4 (hub) and 1 (leaves), descending.
        assert_eq!(machine.degree_values, vec![4, 1]);
        assert_eq!(bucket_contents(&machine, 0), vec![0]);
        assert_eq!(bucket_contents(&machine, 1), vec![1, 2, 3, 4]);
        assert!(!machine.is_empty());
    }

    #[test]
    fn test_pick_prefers_highest_degree() {
        let graph = star_graph(4);
        let mut machine = SortingMachine::new();
        machine.initialize(&graph).unwrap();

        assert_eq!(machine.pick_vertex(&graph), Some(0));
    }

    #[test]
    fn test_bump_reorders_within_bucket() {
        let mut graph = star_graph(5);
        let mut machine = SortingMachine::new();
        machine.initialize(&graph).unwrap();

        // Leaf 3 gains a colored neighbor and must move to its bucket head.
        machine.bump_colored_neighbors(&mut graph, 3).unwrap();
        assert_eq!(bucket_contents(&machine, 1), vec![3, 1, 2, 4]);
        assert_bucket_order(&machine, &graph);

        // Ties on colored_neighbors fall back to id ascending.
        machine.bump_colored_neighbors(&mut graph, 4).unwrap();
        assert_eq!(bucket_contents(&machine, 1), vec![3, 4, 1, 2]);
        assert_bucket_order(&machine, &graph);
    }

    #[test]
    fn test_remove_is_constant_time_detach_and_idempotent() {
        let graph = star_graph(5);
        let mut machine = SortingMachine::new();
        machine.initialize(&graph).unwrap();

        machine.remove(&graph, 2);
        assert_eq!(bucket_contents(&machine, 1), vec![1, 3, 4]);
        machine.remove(&graph, 2);
        assert_eq!(bucket_contents(&machine, 1), vec![1, 3, 4]);

        machine.remove(&graph, 1);
        machine.remove(&graph, 3);
        machine.remove(&graph, 4);
        machine.remove(&graph, 0);
        assert!(machine.is_empty());
    }

    #[test]
    fn test_insert_skips_colored_vertices() {
        let mut graph = star_graph(3);
        graph.vertex_mut(1).color = Some(Color::Red);

        let mut machine = SortingMachine::new();
        machine.initialize(&graph).unwrap();
        assert_eq!(bucket_contents(&machine, 1), vec![2]);
    }

    #[test]
    fn test_pick_discards_stale_colored_head() {
        let mut graph = star_graph(4);
        let mut machine = SortingMachine::new();
        machine.initialize(&graph).unwrap();

        // Color the hub without removing it first.
        graph.vertex_mut(0).color = Some(Color::Red);
        assert_eq!(machine.pick_vertex(&graph), Some(1));
        // The stale head was unlinked along the way.
        assert_eq!(bucket_contents(&machine, 0), Vec::<VertexId>::new());
    }

    #[test]
    fn test_insert_unknown_degree_is_invariant_error() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1).unwrap();
        graph.compute_degrees();

        let mut machine = SortingMachine::new();
        machine.initialize(&graph).unwrap();

        // Growing the graph after initialize leaves degree 2 without a bucket.
        machine.remove(&graph, 0);
        graph.add_edge(0, 2).unwrap();
        graph.compute_degrees();
        let err = machine.insert(&graph, 0).unwrap_err();
        assert!(matches!(err, TrichromaError::Invariant(_)));
    }

    #[test]
    fn test_bucket_order_after_mixed_operations() {
        // 6 vertices all of equal degree (a 6-cycle).
        let mut graph = Graph::new(6);
        for v in 0..6 {
            graph.add_edge(v, (v + 1) % 6).unwrap();
        }
        graph.compute_degrees();

        let mut machine = SortingMachine::new();
        machine.initialize(&graph).unwrap();

        machine.bump_colored_neighbors(&mut graph, 5).unwrap();
        machine.bump_colored_neighbors(&mut graph, 2).unwrap();
        machine.bump_colored_neighbors(&mut graph, 2).unwrap();
        machine.remove(&graph, 5);
        machine.bump_colored_neighbors(&mut graph, 4).unwrap();
        machine.insert(&graph, 5).unwrap();

        assert_bucket_order(&machine, &graph);
        // 2 has two colored neighbors, then 4 and 5 with one each (id order).
        assert_eq!(bucket_contents(&machine, 0), vec![2, 4, 5, 0, 1, 3]);
    }
}

use std::ops::Index;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    algorithm::{IterativeAlgorithm, TerminatingIterativeAlgorithm},
    errors::{InvariantCheck, InvariantError},
    graph::*,
    utils::LazyMinHeap,
};

/// Snapshot taken whenever a node is eliminated; `vertices_before` and `edges_before`
/// describe the induced subgraph on the remaining nodes *before* `node` was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemovalEntry {
    pub node: Node,
    pub degree: NumNodes,
    pub step: NumNodes,
    pub vertices_before: NumNodes,
    pub edges_before: NumEdges,
}

impl RemovalEntry {
    /// ⌈2·edges / vertices⌉ of the subgraph remaining before this removal, or None if it was
    /// empty
    pub fn ceil_average_degree(&self) -> Option<NumNodes> {
        (self.vertices_before > 0).then(|| {
            (2 * self.edges_before).div_ceil(self.vertices_before as NumEdges) as NumNodes
        })
    }
}

/// Append-only sequence of [`RemovalEntry`]s in elimination order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalRecord {
    entries: Vec<RemovalEntry>,
}

impl RemovalRecord {
    fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, entry: RemovalEntry) {
        debug_assert_eq!(entry.step as usize, self.entries.len());
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RemovalEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RemovalEntry> + '_ {
        self.entries.iter()
    }

    /// Nodes in the order they were eliminated
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.entries.iter().map(|e| e.node)
    }

    /// Degrees at removal in elimination order
    pub fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.entries.iter().map(|e| e.degree)
    }
}

impl Index<usize> for RemovalRecord {
    type Output = RemovalEntry;

    fn index(&self, step: usize) -> &Self::Output {
        &self.entries[step]
    }
}

/// Mutable per-run state of an elimination. The graph itself is only borrowed; removals are
/// tracked in auxiliary arrays so that any number of runs may share one graph.
pub struct EliminationState<'a, G> {
    graph: &'a G,
    removed: Vec<bool>,
    degree: Vec<NumNodes>,
    remaining: NumNodes,
    edges_remaining: NumEdges,
    record: RemovalRecord,
}

impl<'a, G: AdjacencyList> EliminationState<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            removed: vec![false; graph.len()],
            degree: graph.degrees().collect(),
            remaining: graph.number_of_nodes(),
            edges_remaining: graph.number_of_edges(),
            record: RemovalRecord::with_capacity(graph.len()),
        }
    }

    pub fn graph(&self) -> &'a G {
        self.graph
    }

    pub fn is_removed(&self, u: Node) -> bool {
        self.removed[u as usize]
    }

    /// Current degree of `u` within the remaining subgraph; for removed nodes this is the
    /// degree at the time of their removal
    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.degree[u as usize]
    }

    /// Returns true if `u` is still remaining and its current degree is `degree`
    pub fn is_current(&self, u: Node, degree: NumNodes) -> bool {
        !self.removed[u as usize] && self.degree[u as usize] == degree
    }

    pub fn number_of_remaining_nodes(&self) -> NumNodes {
        self.remaining
    }

    pub fn number_of_remaining_edges(&self) -> NumEdges {
        self.edges_remaining
    }

    pub fn remaining_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.graph
            .vertices()
            .filter(|&u| !self.removed[u as usize])
    }

    pub fn record(&self) -> &RemovalRecord {
        &self.record
    }

    pub fn into_record(self) -> RemovalRecord {
        self.record
    }

    /// Eliminates the remaining node `u`: records its snapshot, removes it and decrements the
    /// degree of each remaining neighbor, reporting every such `(neighbor, new_degree)` to
    /// `on_decrease`.
    pub fn eliminate<F: FnMut(Node, NumNodes)>(&mut self, u: Node, mut on_decrease: F) {
        debug_assert!(!self.removed[u as usize]);

        self.record.push(RemovalEntry {
            node: u,
            degree: self.degree[u as usize],
            step: self.record.len() as NumNodes,
            vertices_before: self.remaining,
            edges_before: self.edges_remaining,
        });

        self.removed[u as usize] = true;
        self.remaining -= 1;

        for &v in self.graph.neighbors_of(u) {
            if self.removed[v as usize] {
                continue;
            }

            self.degree[v as usize] -= 1;
            self.edges_remaining -= 1;
            on_decrease(v, self.degree[v as usize]);
        }
    }
}

impl<G: AdjacencyList> InvariantCheck<InvariantError> for EliminationState<'_, G> {
    fn is_correct(&self) -> Result<(), InvariantError> {
        let mut degree_sum: NumEdges = 0;
        let mut remaining: NumNodes = 0;

        for u in self.remaining_nodes() {
            let actual = self
                .graph
                .neighbors_of(u)
                .iter()
                .filter(|&&v| !self.removed[v as usize])
                .count() as NumNodes;

            if actual != self.degree[u as usize] {
                return Err(InvariantError::DegreeMismatch {
                    node: u,
                    stored: self.degree[u as usize],
                    actual,
                });
            }

            degree_sum += actual as NumEdges;
            remaining += 1;
        }

        if remaining != self.remaining {
            return Err(InvariantError::NodeCountMismatch {
                stored: self.remaining,
                actual: remaining,
            });
        }

        if 2 * self.edges_remaining != degree_sum {
            return Err(InvariantError::EdgeCountMismatch {
                stored: self.edges_remaining,
                actual: degree_sum / 2,
            });
        }

        Ok(())
    }
}

/// # Minimum-degree elimination
///
/// Each step removes a remaining node of minimum current degree (the smallest id among
/// ties). Degree decreases are realized as fresh heap insertions; stale entries are
/// discarded when they surface at the top of the heap. Runs in `O((n + m) log n)`.
pub struct MinDegreeElimination<'a, G> {
    state: EliminationState<'a, G>,
    heap: LazyMinHeap,
}

impl<'a, G: AdjacencyList> MinDegreeElimination<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        let state = EliminationState::new(graph);
        let heap = LazyMinHeap::from_entries(graph.vertices().map(|u| (state.degree_of(u), u)));
        Self { state, heap }
    }

    pub fn state(&self) -> &EliminationState<'a, G> {
        &self.state
    }

    /// Runs the elimination to completion and returns its record
    pub fn run(mut self) -> RemovalRecord {
        while !self.is_completed() {
            self.execute_step();
        }

        debug!(
            "Eliminated {} nodes; discarded {} stale heap entries",
            self.state.record().len(),
            self.heap.number_of_stale_discarded()
        );

        self.state.into_record()
    }
}

impl<G: AdjacencyList> IterativeAlgorithm<RemovalRecord> for MinDegreeElimination<'_, G> {
    fn execute_step(&mut self) {
        let state = &self.state;
        let Some((_, u)) = self.heap.pop_valid(|degree, u| state.is_current(u, degree)) else {
            debug_assert_eq!(self.state.number_of_remaining_nodes(), 0);
            return;
        };

        let heap = &mut self.heap;
        self.state
            .eliminate(u, |v, degree| heap.push(degree, v));
    }

    fn is_completed(&self) -> bool {
        self.state.number_of_remaining_nodes() == 0
    }

    fn best_known_solution(&mut self) -> Option<RemovalRecord> {
        self.is_completed().then(|| self.state.record().clone())
    }
}

impl<G: AdjacencyList> TerminatingIterativeAlgorithm<RemovalRecord>
    for MinDegreeElimination<'_, G>
{
}

/// Computes a full minimum-degree elimination order of `graph`
pub fn elimination_order<G: AdjacencyList>(graph: &G) -> RemovalRecord {
    MinDegreeElimination::new(graph).run()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn diamond() {
        // 4-cycle 0-1-2-3 with diagonal {0, 2}
        let graph = diamond_graph();
        assert_eq!(graph.degrees().collect_vec(), [3, 2, 3, 2]);

        let record = elimination_order(&graph);
        assert_eq!(record.len(), 4);
        assert_eq!(record[0].degree, 2);
        assert_eq!(record[0].node, 1);
        assert_eq!(record.degrees().collect_vec(), [2, 2, 1, 0]);
        assert_eq!(
            record.iter().map(|e| e.vertices_before).collect_vec(),
            [4, 3, 2, 1]
        );
        assert_eq!(
            record.iter().map(|e| e.edges_before).collect_vec(),
            [5, 3, 1, 0]
        );
    }

    #[test]
    fn empty_graph() {
        let graph = CsrGraph::new(0);
        let record = elimination_order(&graph);
        assert!(record.is_empty());

        let mut algo = MinDegreeElimination::new(&graph);
        assert!(algo.is_completed());
        assert_eq!(algo.run_to_completion(), Some(RemovalRecord::default()));
    }

    #[test]
    fn complete_graph_degrees() {
        for n in 1..12 {
            let record = elimination_order(&CsrGraph::complete(n));
            assert_eq!(
                record.degrees().collect_vec(),
                (0..n).rev().collect_vec()
            );
        }
    }

    #[test]
    fn completeness() {
        let mut rng = Pcg64::seed_from_u64(0xabc);
        for graph in random_graphs(&mut rng, 100, 2..60) {
            let record = elimination_order(&graph);
            assert_eq!(record.len(), graph.len());

            // each node exactly once
            assert_eq!(
                record.nodes().sorted().collect_vec(),
                graph.vertices().collect_vec()
            );

            for (s, entry) in record.iter().enumerate() {
                assert_eq!(entry.step as usize, s);
                assert_eq!(entry.vertices_before as usize, graph.len() - s);
            }
        }
    }

    #[test]
    fn degree_at_removal_matches_reconstruction() {
        let mut rng = Pcg64::seed_from_u64(0xdef);
        for graph in random_graphs(&mut rng, 100, 1..60) {
            let record = elimination_order(&graph);
            assert_eq!(
                record.degrees().collect_vec(),
                reconstruct_removal_degrees(&graph, record.nodes())
            );
        }
    }

    #[test]
    fn min_degree_is_selected() {
        let mut rng = Pcg64::seed_from_u64(0x123);
        for graph in random_graphs(&mut rng, 30, 1..40) {
            let mut algo = MinDegreeElimination::new(&graph);
            while !algo.is_completed() {
                let min_degree = algo
                    .state()
                    .remaining_nodes()
                    .map(|u| algo.state().degree_of(u))
                    .min();

                algo.execute_step();
                assert_eq!(algo.state().record().entries().last().map(|e| e.degree), min_degree);
                assert!(algo.state().is_correct().is_ok());
            }
        }
    }

    #[test]
    fn idempotent() {
        let mut rng = Pcg64::seed_from_u64(0x777);
        for graph in random_graphs(&mut rng, 50, 1..50) {
            let first = elimination_order(&graph);
            let second = elimination_order(&graph);
            assert_eq!(
                first.degrees().sorted().collect_vec(),
                second.degrees().sorted().collect_vec()
            );
            assert_eq!(first, second);
        }
    }

    #[test]
    fn invariant_violations_are_reported() {
        let graph = CsrGraph::path(3);
        let mut state = EliminationState::new(&graph);
        assert!(state.is_correct().is_ok());

        state.degree[1] = 5;
        assert_eq!(
            state.is_correct(),
            Err(InvariantError::DegreeMismatch {
                node: 1,
                stored: 5,
                actual: 2
            })
        );

        state.degree[1] = 2;
        state.edges_remaining = 7;
        assert!(matches!(
            state.is_correct(),
            Err(InvariantError::EdgeCountMismatch { stored: 7, .. })
        ));
    }

    #[test]
    fn ceil_average_degree() {
        let entry = RemovalEntry {
            node: 0,
            degree: 2,
            step: 0,
            vertices_before: 4,
            edges_before: 5,
        };
        assert_eq!(entry.ceil_average_degree(), Some(3));

        let empty = RemovalEntry {
            vertices_before: 0,
            edges_before: 0,
            ..entry
        };
        assert_eq!(empty.ceil_average_degree(), None);
    }
}

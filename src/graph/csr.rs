use itertools::Itertools;

use super::*;

/// Immutable compressed sparse row representation of a simple undirected graph.
///
/// Neighborhoods are sorted and free of duplicates and self-loops; every edge {u, v} is
/// stored twice (once at each endpoint). The graph never changes after construction, so
/// algorithms keep their per-run state in auxiliary arrays indexed by [`Node`] and share
/// the graph by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    offsets: Vec<NumEdges>,
    neighbors: Vec<Node>,
}

impl GraphNodeOrder for CsrGraph {
    fn number_of_nodes(&self) -> NumNodes {
        (self.offsets.len() - 1) as NumNodes
    }
}

impl GraphEdgeOrder for CsrGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.neighbors.len() as NumEdges / 2
    }
}

impl AdjacencyList for CsrGraph {
    fn neighbors_of(&self, u: Node) -> &[Node] {
        let lo = self.offsets[u as usize] as usize;
        let hi = self.offsets[u as usize + 1] as usize;
        &self.neighbors[lo..hi]
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        (self.offsets[u as usize + 1] - self.offsets[u as usize]) as NumNodes
    }
}

impl AdjacencyTest for CsrGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        // search the smaller neighborhood
        let (u, v) = if self.degree_of(u) <= self.degree_of(v) {
            (u, v)
        } else {
            (v, u)
        };
        self.neighbors_of(u).binary_search(&v).is_ok()
    }
}

impl GraphFromEdges for CsrGraph {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut edges = edges
            .into_iter()
            .map(|e| Into::<Edge>::into(e).normalized())
            .filter(|e| !e.is_loop())
            .collect_vec();

        edges.sort_unstable();
        edges.dedup();

        let n = n as usize;
        let mut degrees = vec![0 as NumEdges; n];
        for &Edge(u, v) in &edges {
            assert!(
                (v as usize) < n,
                "Edge ({u}, {v}) exceeds number of nodes {n}"
            );
            degrees[u as usize] += 1;
            degrees[v as usize] += 1;
        }

        let mut offsets = Vec::with_capacity(n + 1);
        let mut running_offset: NumEdges = 0;
        offsets.push(running_offset);
        for d in &degrees {
            running_offset += d;
            offsets.push(running_offset);
        }

        let mut fill: Vec<NumEdges> = offsets[..n].to_vec();
        let mut neighbors = vec![0 as Node; 2 * edges.len()];
        for Edge(u, v) in edges {
            neighbors[fill[u as usize] as usize] = v;
            fill[u as usize] += 1;
            neighbors[fill[v as usize] as usize] = u;
            fill[v as usize] += 1;
        }

        // smaller neighbors were appended interleaved with larger ones
        for u in 0..n {
            neighbors[offsets[u] as usize..offsets[u + 1] as usize].sort_unstable();
        }

        Self { offsets, neighbors }
    }
}

impl CsrGraph {
    /// Creates a graph with `n` isolated nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            offsets: vec![0; n as usize + 1],
            neighbors: Vec::new(),
        }
    }

    /// Returns the same graph with the additional edge {u, v}
    pub fn with_edge(&self, u: Node, v: Node) -> Self {
        Self::from_edges(
            self.number_of_nodes(),
            self.edges().chain(std::iter::once(Edge(u, v))),
        )
    }

    /// Number of edges with both endpoints in `nodes` (which must be free of duplicates)
    pub fn number_of_edges_within(&self, nodes: &[Node]) -> NumEdges {
        let mut inside = vec![false; self.len()];
        for &u in nodes {
            inside[u as usize] = true;
        }

        nodes
            .iter()
            .map(|&u| {
                self.neighbors_of(u)
                    .iter()
                    .filter(|&&v| inside[v as usize])
                    .count() as NumEdges
            })
            .sum::<NumEdges>()
            / 2
    }
}

pub trait InducedSubgraph: AdjacencyList {
    /// Returns the subgraph induced by `nodes` with contiguous ids in the order given;
    /// the mapper translates the new ids back to ids of `self`.
    fn induced_subgraph(&self, nodes: &[Node]) -> (CsrGraph, NodeMapper);
}

impl<G: AdjacencyList> InducedSubgraph for G {
    fn induced_subgraph(&self, nodes: &[Node]) -> (CsrGraph, NodeMapper) {
        let mut mapper = NodeMapper::with_capacity(nodes.len());
        for &u in nodes {
            mapper.get_or_insert(u as u64);
        }

        let edges = nodes
            .iter()
            .flat_map(|&u| {
                let mapper = &mapper;
                self.neighbors_of(u).iter().filter_map(move |&v| {
                    let nv = mapper.new_id_of(v as u64)?;
                    let nu = mapper.new_id_of(u as u64)?;
                    (nu < nv).then_some(Edge(nu, nv))
                })
            })
            .collect_vec();

        (
            CsrGraph::from_edges(mapper.len() as NumNodes, edges),
            mapper,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    #[test]
    fn new() {
        for n in 0..50 {
            let graph = CsrGraph::new(n);

            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.number_of_nodes(), n);

            assert_eq!(graph.vertices_range().len(), n as usize);
            assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            assert_eq!(graph.is_empty(), n == 0);
        }
    }

    #[test]
    fn degrees_and_neighbors() {
        let graph = CsrGraph::from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 2), (2, 3)]);

        assert_eq!(graph.number_of_edges(), 5);
        assert_eq!(graph.degrees().collect_vec(), [3, 2, 3, 2]);
        assert_eq!(graph.neighbors_of(0), &[1, 2, 3]);
        assert_eq!(graph.neighbors_of(3), &[0, 2]);
        assert_eq!(graph.max_degree(), 3);
        assert!(graph.has_edge(3, 0));
        assert!(!graph.has_edge(1, 3));
    }

    #[test]
    fn loops_and_duplicates_are_dropped() {
        let graph = CsrGraph::from_edges(3, [(0, 0), (0, 1), (1, 0), (0, 1), (2, 1), (2, 2)]);

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.edges().collect_vec(), [Edge(0, 1), Edge(1, 2)]);
        assert!(!graph.has_edge(0, 0));
    }

    #[test]
    #[should_panic]
    fn out_of_range_endpoint() {
        CsrGraph::from_edges(2, [(0, 2)]);
    }

    #[test]
    fn random_neighborhoods_are_sorted_and_symmetric() {
        let mut rng = Pcg64::seed_from_u64(123345);

        for _ in 0..100 {
            let n: NumNodes = rng.gen_range(2..50);
            let m = rng.gen_range(0..(n * n));
            let edges = (0..m)
                .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
                .collect_vec();

            let graph = CsrGraph::from_edges(n, edges.iter());

            for u in graph.vertices() {
                assert!(graph.neighbors_of(u).windows(2).all(|w| w[0] < w[1]));
                for &v in graph.neighbors_of(u) {
                    assert_ne!(u, v);
                    assert!(graph.neighbors_of(v).contains(&u));
                }
            }

            assert_eq!(
                graph.degrees().map(|d| d as NumEdges).sum::<NumEdges>(),
                2 * graph.number_of_edges()
            );
            assert_eq!(graph.edges().count() as NumEdges, graph.number_of_edges());
        }
    }

    #[test]
    fn induced_subgraph() {
        let graph = CsrGraph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2), (3, 4)]);
        let (sub, mapper) = graph.induced_subgraph(&[2, 0, 3]);

        assert_eq!(sub.number_of_nodes(), 3);
        assert_eq!(sub.number_of_edges(), 3);
        assert_eq!(mapper.old_id_of(0), 2);
        assert_eq!(mapper.old_id_of(1), 0);
        assert_eq!(graph.number_of_edges_within(&[2, 0, 3]), 3);
        assert_eq!(graph.number_of_edges_within(&[1, 4]), 0);
    }

    #[test]
    fn with_edge() {
        let graph = CsrGraph::from_edges(3, [(0, 1)]);
        let denser = graph.with_edge(2, 1);
        assert_eq!(denser.number_of_edges(), 2);
        assert!(denser.has_edge(1, 2));
        assert_eq!(graph.with_edge(1, 0), graph);
    }
}

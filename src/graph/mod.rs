pub mod connectivity;
pub mod csr;
pub mod edge;
pub mod families;
pub mod gnp;
pub mod node_mapper;

pub type Node = u32;
pub type NumNodes = Node;
pub type NumEdges = u64;

use std::ops::Range;

pub use connectivity::*;
pub use csr::*;
pub use edge::*;
pub use families::*;
pub use gnp::*;
pub use node_mapper::*;

/// Provides getters pertaining to the size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        self.vertices_range()
    }

    /// Returns a range of vertices. In contrast to self.vertices(), the name stresses that
    /// the range does not borrow self and hence may be used where additional mutable
    /// references of auxiliary per-node state are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns true if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;
}

#[macro_export]
macro_rules! node_iterator {
    ($iter : ident, $single : ident, $type : ty) => {
        fn $iter(&self) -> impl Iterator<Item = $type> + '_ {
            self.vertices().map(|u| self.$single(u))
        }
    };
}

pub trait AdjacencyList: GraphNodeOrder + GraphEdgeOrder + Sized {
    /// Returns a slice of neighbors of a given vertex.
    /// ** Panics if the v >= n **
    fn neighbors_of(&self, u: Node) -> &[Node];

    /// Returns the number of neighbors of from [`u`]
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).len() as NumNodes
    }

    /// Returns the largest degree or 0 for the empty graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    node_iterator!(degrees, degree_of, NumNodes);
    node_iterator!(neighbors, neighbors_of, &[Node]);

    /// Returns each undirected edge exactly once as a normalized [`Edge`] (i.e. `u < v`)
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u)
                .iter()
                .filter(move |&&v| u < v)
                .map(move |&v| Edge(u, v))
        })
    }
}

/// Provides efficient tests whether an edge exists
pub trait AdjacencyTest {
    /// Returns *true* exactly if the graph contains the undirected edge {u, v}
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

pub trait GraphFromEdges: Sized {
    /// Builds a graph with `n` nodes from the given edges. Self-loops are dropped and
    /// parallel edges (in either direction) collapse into one.
    /// ** Panics if an endpoint is >= n **
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

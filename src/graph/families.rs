//! Named graph families with known large-set arboricity behaviour.

use itertools::Itertools;

use super::*;

pub trait GraphFamilies: GraphFromEdges {
    /// Complete graph K_n
    fn complete(n: NumNodes) -> Self {
        Self::from_edges(n, (0..n).tuple_combinations::<(_, _)>())
    }

    /// Star with hub 0 and `leaves` leaves (i.e. `leaves + 1` nodes)
    fn star(leaves: NumNodes) -> Self {
        Self::from_edges(leaves + 1, (1..=leaves).map(|v| (0, v)))
    }

    /// Path 0 - 1 - ... - (n-1)
    fn path(n: NumNodes) -> Self {
        Self::from_edges(n, (1..n).map(|v| (v - 1, v)))
    }

    /// Cycle on n nodes; for n < 3 the result is a path
    fn cycle(n: NumNodes) -> Self {
        let closing = (n >= 3).then(|| (n - 1, 0));
        Self::from_edges(n, (1..n).map(|v| (v - 1, v)).chain(closing))
    }

    /// Complete bipartite graph with classes `0..a` and `a..a+b`
    fn complete_bipartite(a: NumNodes, b: NumNodes) -> Self {
        Self::from_edges(a + b, (0..a).cartesian_product(a..a + b))
    }

    /// Wheel: a cycle on `rim` nodes `1..=rim` and the hub 0 adjacent to all of them
    fn wheel(rim: NumNodes) -> Self {
        let spokes = (1..=rim).map(|v| (0, v));
        let rim_edges = (1..=rim).map(move |v| (v, if v == rim { 1 } else { v + 1 }));
        Self::from_edges(rim + 1, spokes.chain(rim_edges))
    }

    /// The Petersen graph (3-regular, 10 nodes)
    fn petersen() -> Self {
        let ids = 0..5 as Node;
        let outer = ids.clone().map(|i| (i, (i + 1) % 5));
        let spokes = ids.clone().map(|i| (i, i + 5));
        let inner = ids.map(|i| (5 + i, 5 + (i + 2) % 5));
        Self::from_edges(10, outer.chain(spokes).chain(inner))
    }

    /// The 3-dimensional hypercube (3-regular, 8 nodes)
    fn cube() -> Self {
        let edges = (0..8 as Node)
            .flat_map(|u| (0..3 as Node).map(move |b| (u, u ^ (1 << b))))
            .filter(|&(u, v)| u < v);
        Self::from_edges(8, edges)
    }
}

impl<G: GraphFromEdges> GraphFamilies for G {}

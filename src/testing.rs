use std::ops::Range;

use itertools::Itertools;
use rand::Rng;

use crate::graph::*;

/// 4-cycle 0-1-2-3 with the diagonal {0, 2}
pub fn diamond_graph() -> CsrGraph {
    CsrGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)])
}

/// Small members of the named families together with a short label
pub fn named_graphs() -> Vec<(String, CsrGraph)> {
    let mut graphs = vec![
        ("diamond".to_string(), diamond_graph()),
        ("petersen".to_string(), CsrGraph::petersen()),
        ("cube".to_string(), CsrGraph::cube()),
    ];

    for n in 1..9 {
        graphs.push((format!("K{n}"), CsrGraph::complete(n)));
        graphs.push((format!("P{n}"), CsrGraph::path(n)));
        graphs.push((format!("C{n}"), CsrGraph::cycle(n)));
        graphs.push((format!("S{n}"), CsrGraph::star(n)));
        graphs.push((format!("W{}", n + 2), CsrGraph::wheel(n + 2)));
    }

    for (a, b) in (1..5 as NumNodes).tuple_combinations::<(_, _)>() {
        graphs.push((format!("K{a},{b}"), CsrGraph::complete_bipartite(a, b)));
    }

    graphs
}

/// Stream of `count` G(n,p) graphs with `n` drawn from `nodes` and an expected average
/// degree between 0.5 and 6
pub fn random_graphs<'a, R: Rng>(
    rng: &'a mut R,
    count: usize,
    nodes: Range<Node>,
) -> impl Iterator<Item = CsrGraph> + 'a {
    (0..count).map(move |_| {
        let n = rng.gen_range(nodes.clone());
        let avg_deg = rng.gen_range(0.5..6.0);
        let p = (avg_deg / n as f64).min(1.0);
        CsrGraph::random_gnp(rng, n, p)
    })
}

/// Recomputes the degree at removal of each node when nodes are deleted from `graph` in
/// the given `order`, directly from the adjacency lists
pub fn reconstruct_removal_degrees(
    graph: &CsrGraph,
    order: impl IntoIterator<Item = Node>,
) -> Vec<NumNodes> {
    let mut removed = vec![false; graph.len()];
    order
        .into_iter()
        .map(|u| {
            let degree = graph
                .neighbors_of(u)
                .iter()
                .filter(|&&v| !removed[v as usize])
                .count() as NumNodes;
            removed[u as usize] = true;
            degree
        })
        .collect()
}

/// max over all node subsets S with |S| > k of ⌈2·e(S)/|S|⌉ by plain subset enumeration
pub fn brute_force_alpha_k(graph: &CsrGraph, k: NumNodes) -> NumNodes {
    graph
        .vertices()
        .powerset()
        .filter(|set| set.len() > k as usize)
        .map(|set| {
            let edges = graph.number_of_edges_within(&set);
            (2 * edges).div_ceil(set.len() as NumEdges) as NumNodes
        })
        .max()
        .unwrap_or(0)
}

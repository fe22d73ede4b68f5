use std::cmp::Reverse;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::graph::*;

use super::{elimination::RemovalRecord, single_k::removal_set};

/// Node subset certifying a value together with the number of edges it induces
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessSubgraph {
    pub nodes: Vec<Node>,
    pub number_of_edges: NumEdges,
}

impl WitnessSubgraph {
    pub fn number_of_nodes(&self) -> NumNodes {
        self.nodes.len() as NumNodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Average degree `2m/n` of the induced subgraph; 0.0 if it is empty
    pub fn average_degree(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            2.0 * self.number_of_edges as f64 / self.nodes.len() as f64
        }
    }

    /// ⌈2m/n⌉ of the induced subgraph; 0 if it is empty
    pub fn ceil_average_degree(&self) -> NumNodes {
        if self.is_empty() {
            0
        } else {
            (2 * self.number_of_edges).div_ceil(self.nodes.len() as NumEdges) as NumNodes
        }
    }
}

/// The nodes still remaining before `step` in sorted order
fn remaining_before(record: &RemovalRecord, step: usize) -> WitnessSubgraph {
    WitnessSubgraph {
        nodes: record.entries()[step..]
            .iter()
            .map(|e| e.node)
            .sorted_unstable()
            .collect(),
        number_of_edges: record[step].edges_before,
    }
}

/// Returns the first step among the first `n - k` that maximizes `value`
fn first_maximizer<F: Fn(usize) -> NumNodes>(
    record: &RemovalRecord,
    k: NumNodes,
    value: F,
) -> Option<usize> {
    (0..removal_set(record, k).len()).max_by_key(|&s| (value(s), Reverse(s)))
}

/// Intermediate subgraph of the elimination with more than `k` nodes whose ⌈2m/n⌉ equals
/// the density curve at `k`. Empty if `k >= n`.
pub fn density_witness(record: &RemovalRecord, k: NumNodes) -> WitnessSubgraph {
    first_maximizer(record, k, |s| record[s].ceil_average_degree().unwrap_or(0))
        .map(|s| remaining_before(record, s))
        .unwrap_or_default()
}

/// Intermediate subgraph with more than `k` nodes in which every node has degree at least
/// `dk`; it is the remaining graph right before the removal attaining `dk`. Empty if `k >= n`.
pub fn degree_witness(record: &RemovalRecord, k: NumNodes) -> WitnessSubgraph {
    first_maximizer(record, k, |s| record[s].degree)
        .map(|s| remaining_before(record, s))
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        arboricity::{degree_curve, density_curve, elimination_order},
        testing::*,
    };
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn diamond() {
        let record = elimination_order(&diamond_graph());
        let witness = density_witness(&record, 1);
        assert_eq!(witness.nodes, [0, 1, 2, 3]);
        assert_eq!(witness.number_of_edges, 5);
        assert_eq!(witness.ceil_average_degree(), 3);
        assert!((witness.average_degree() - 2.5).abs() < 1e-9);

        assert!(density_witness(&record, 4).is_empty());
        assert!(degree_witness(&record, 4).is_empty());
    }

    #[test]
    fn density_witness_certifies_curve() {
        let mut rng = Pcg64::seed_from_u64(0xb0b);
        for graph in random_graphs(&mut rng, 60, 1..40) {
            let record = elimination_order(&graph);
            for (k, value) in density_curve(&record).into_iter().enumerate() {
                let witness = density_witness(&record, k as NumNodes);
                assert!(witness.nodes.len() > k);
                assert_eq!(witness.ceil_average_degree(), value);
                assert_eq!(
                    graph.number_of_edges_within(&witness.nodes),
                    witness.number_of_edges
                );
            }
        }
    }

    #[test]
    fn degree_witness_has_min_degree_dk() {
        let mut rng = Pcg64::seed_from_u64(0xb0c);
        for graph in random_graphs(&mut rng, 60, 1..40) {
            let record = elimination_order(&graph);
            for (k, value) in degree_curve(&record).into_iter().enumerate() {
                let witness = degree_witness(&record, k as NumNodes);
                assert!(witness.nodes.len() > k);

                let (core, _) = graph.induced_subgraph(&witness.nodes);
                assert!(core.degrees().all(|d| d >= value));
                assert_eq!(core.number_of_edges(), witness.number_of_edges);
            }
        }
    }

    #[test]
    fn empty() {
        let witness = WitnessSubgraph::default();
        assert_eq!(witness.number_of_nodes(), 0);
        assert_eq!(witness.average_degree(), 0.0);
        assert_eq!(witness.ceil_average_degree(), 0);
    }
}

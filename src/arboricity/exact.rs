//! Exact `α_k` by enumeration of all node subsets. Only feasible for tiny graphs, and used
//! to validate the elimination-based estimates.

use std::{cmp::Reverse, ops::Range};

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ArboricityError, checked_k},
    graph::*,
};

use super::witness::WitnessSubgraph;

/// Largest number of nodes the oracle accepts
pub const EXACT_NODE_LIMIT: NumNodes = 15;

/// Exact `α_k` together with the first maximizing subset in increasing bitmask order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExactAlphaK {
    pub k: NumNodes,
    pub value: NumNodes,
    pub witness: WitnessSubgraph,
}

/// Subset enumerator over a bitmask copy of the adjacency; node `v` corresponds to bit `v`.
pub struct ExactOracle {
    neighborhoods: Vec<u32>,
}

impl ExactOracle {
    pub fn try_new<G: AdjacencyList>(graph: &G) -> Result<Self, ArboricityError> {
        if graph.number_of_nodes() > EXACT_NODE_LIMIT {
            return Err(ArboricityError::GraphTooLargeForExact {
                nodes: graph.number_of_nodes(),
                limit: EXACT_NODE_LIMIT,
            });
        }

        let neighborhoods = graph
            .neighbors()
            .map(|neighbors| neighbors.iter().fold(0u32, |mask, &v| mask | (1 << v)))
            .collect();

        Ok(Self { neighborhoods })
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.neighborhoods.len() as NumNodes
    }

    /// All non-empty subsets in increasing order
    fn subsets(&self) -> Range<u32> {
        1..(1u32 << self.neighborhoods.len())
    }

    fn number_of_edges_within(&self, set: u32) -> NumEdges {
        let mut rest = set;
        let mut twice_edges = 0;
        while rest != 0 {
            let v = rest.trailing_zeros() as usize;
            twice_edges += (self.neighborhoods[v] & set).count_ones() as NumEdges;
            rest &= rest - 1;
        }
        twice_edges / 2
    }

    fn value_of(&self, set: u32) -> NumNodes {
        let edges = self.number_of_edges_within(set);
        (2 * edges).div_ceil(set.count_ones() as NumEdges) as NumNodes
    }

    fn witness_of(&self, set: u32) -> WitnessSubgraph {
        WitnessSubgraph {
            nodes: (0..self.number_of_nodes())
                .filter(|&v| set & (1 << v) != 0)
                .collect(),
            number_of_edges: self.number_of_edges_within(set),
        }
    }

    fn result_of(&self, k: NumNodes, best: Option<(NumNodes, u32)>) -> ExactAlphaK {
        match best {
            Some((value, set)) => ExactAlphaK {
                k,
                value,
                witness: self.witness_of(set),
            },
            None => ExactAlphaK {
                k,
                value: 0,
                witness: WitnessSubgraph::default(),
            },
        }
    }

    /// Exact `α_k`; for `k >= n` no subset qualifies and the value is 0
    pub fn alpha_k(&self, k: NumNodes) -> ExactAlphaK {
        let mut best: Option<(NumNodes, u32)> = None;
        for set in self.subsets().filter(|set| set.count_ones() > k) {
            let value = self.value_of(set);
            if best.is_none_or(|(best_value, _)| value > best_value) {
                best = Some((value, set));
            }
        }

        debug!(
            "Exact alpha_{k} of graph with {} nodes is {:?}",
            self.number_of_nodes(),
            best.map(|(value, _)| value)
        );

        self.result_of(k, best)
    }

    /// Same as [`ExactOracle::alpha_k`] but distributes the subsets over the rayon pool.
    /// Among equal values the smallest bitmask wins, so the witness is identical.
    pub fn alpha_k_par(&self, k: NumNodes) -> ExactAlphaK {
        let best = self
            .subsets()
            .into_par_iter()
            .filter(|set| set.count_ones() > k)
            .map(|set| (self.value_of(set), Reverse(set)))
            .max()
            .map(|(value, Reverse(set))| (value, set));

        self.result_of(k, best)
    }

    /// `curve[k]` is the exact `α_k` for every `k` in `0..n`, obtained from one enumeration
    pub fn alpha_curve(&self) -> Vec<NumNodes> {
        let n = self.neighborhoods.len();

        // best value among subsets of each size
        let mut best_by_size: Vec<NumNodes> = vec![0; n + 1];
        for set in self.subsets() {
            let size = set.count_ones() as usize;
            best_by_size[size] = best_by_size[size].max(self.value_of(set));
        }

        Self::suffix_maxima(&best_by_size)
    }

    /// Parallel version of [`ExactOracle::alpha_curve`]
    pub fn alpha_curve_par(&self) -> Vec<NumNodes> {
        let n = self.neighborhoods.len();

        let best_by_size = self
            .subsets()
            .into_par_iter()
            .fold(
                || vec![0 as NumNodes; n + 1],
                |mut best, set| {
                    let size = set.count_ones() as usize;
                    best[size] = best[size].max(self.value_of(set));
                    best
                },
            )
            .reduce(
                || vec![0 as NumNodes; n + 1],
                |mut best, other| {
                    for (b, o) in best.iter_mut().zip(other) {
                        *b = (*b).max(o);
                    }
                    best
                },
            );

        Self::suffix_maxima(&best_by_size)
    }

    /// `α_k` is the maximum over the sizes `k+1..=n`
    fn suffix_maxima(best_by_size: &[NumNodes]) -> Vec<NumNodes> {
        let n = best_by_size.len() - 1;
        let mut curve = vec![0; n];
        let mut running: NumNodes = 0;
        for k in (0..n).rev() {
            running = running.max(best_by_size[k + 1]);
            curve[k] = running;
        }
        curve
    }
}

/// Exact `α_k` of `graph`
pub fn exact_alpha_k<G: AdjacencyList>(
    graph: &G,
    k: i64,
) -> Result<ExactAlphaK, ArboricityError> {
    let k = checked_k(k)?;
    Ok(ExactOracle::try_new(graph)?.alpha_k(k))
}

/// Exact `α_k` of `graph` using all rayon worker threads
pub fn exact_alpha_k_par<G: AdjacencyList>(
    graph: &G,
    k: i64,
) -> Result<ExactAlphaK, ArboricityError> {
    let k = checked_k(k)?;
    Ok(ExactOracle::try_new(graph)?.alpha_k_par(k))
}

/// Exact `α_k` of `graph` for every `k` in `0..n`
pub fn exact_alpha_curve<G: AdjacencyList>(graph: &G) -> Result<Vec<NumNodes>, ArboricityError> {
    Ok(ExactOracle::try_new(graph)?.alpha_curve())
}

use crate::{
    errors::{ArboricityError, checked_k},
    graph::*,
};

use super::elimination::{RemovalEntry, RemovalRecord, elimination_order};

/// Entries of the first `n - k` eliminations, i.e. those made while more than `k` nodes
/// remained. Empty if `k >= n`.
pub fn removal_set(record: &RemovalRecord, k: NumNodes) -> &[RemovalEntry] {
    let count = record.len().saturating_sub(k as usize);
    &record.entries()[..count]
}

/// Largest degree at removal within [`removal_set`]; zero if it is empty
pub fn dk_from_record(record: &RemovalRecord, k: NumNodes) -> NumNodes {
    removal_set(record, k)
        .iter()
        .map(|e| e.degree)
        .max()
        .unwrap_or(0)
}

/// Largest degree at removal over the whole elimination
pub fn degeneracy(record: &RemovalRecord) -> NumNodes {
    dk_from_record(record, 0)
}

/// `⌈d0 / 2⌉` where `d0` is the degeneracy. The `d0`-core has minimum degree `d0`, so this
/// is a lower bound on the arboricity of the graph.
pub fn arboricity_bound(record: &RemovalRecord) -> NumNodes {
    degeneracy(record).div_ceil(2)
}

/// Computes `d_k(G, k)` with a fresh elimination of `graph`
pub fn dk<G: AdjacencyList>(graph: &G, k: i64) -> Result<NumNodes, ArboricityError> {
    let k = checked_k(k)?;
    Ok(dk_from_record(&elimination_order(graph), k))
}

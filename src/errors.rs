use std::error::Error;

use thiserror::Error;

use crate::graph::{Node, NumEdges, NumNodes};

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: Error> {
    fn is_correct(&self) -> Result<(), E>;
}

/// Outcomes of the estimation engine that callers have to branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArboricityError {
    #[error("invalid parameter k = {k}; k has to be non-negative")]
    InvalidParameter { k: i64 },

    #[error("exact computation is infeasible for {nodes} nodes (limit is {limit})")]
    GraphTooLargeForExact { nodes: NumNodes, limit: NumNodes },
}

/// Violated invariant of an elimination state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("node {node} stores degree {stored} but has {actual} remaining neighbors")]
    DegreeMismatch {
        node: Node,
        stored: NumNodes,
        actual: NumNodes,
    },

    #[error("{stored} edges are stored but the remaining degrees sum up to {actual} edges")]
    EdgeCountMismatch { stored: NumEdges, actual: NumEdges },

    #[error("{stored} nodes are stored as remaining but {actual} are not removed")]
    NodeCountMismatch { stored: NumNodes, actual: NumNodes },
}

/// Converts a user supplied `k` into the internal node count type. Values beyond the range
/// of [`NumNodes`] are clamped, as they exceed every possible number of nodes anyway.
pub fn checked_k(k: i64) -> Result<NumNodes, ArboricityError> {
    if k < 0 {
        return Err(ArboricityError::InvalidParameter { k });
    }
    Ok(NumNodes::try_from(k).unwrap_or(NumNodes::MAX))
}

//! Estimation of the k-bounded arboricity `α_k(G)`, i.e. the largest ⌈2m/n⌉ over all induced
//! subgraphs with more than `k` nodes.
//!
//! A single minimum-degree elimination ([`elimination_order`]) yields a [`RemovalRecord`]
//! from which the degree estimate `dk` and the density estimate of every `k` can be read off
//! in linear time. Both satisfy `dk <= α_k`; the density estimate is additionally within a
//! factor of two of `α_k`. For graphs of at most [`EXACT_NODE_LIMIT`] nodes, [`exact`]
//! computes `α_k` by enumeration and [`verify()`] compares the values.

pub mod all_k;
pub mod elimination;
pub mod exact;
pub mod naive;
pub mod single_k;
pub mod verify;
pub mod witness;

pub use all_k::*;
pub use elimination::*;
pub use exact::*;
pub use naive::*;
pub use single_k::*;
pub use verify::*;
pub use witness::*;

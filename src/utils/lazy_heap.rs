use std::{cmp::Reverse, collections::BinaryHeap};

use crate::graph::{Node, NumNodes};

/// # LazyMinHeap: a min-heap over (key, node) pairs with lazy deletion
///
/// Keys never change in place. A node whose key decreases is pushed again with the new key
/// and its old entry stays behind as a *stale* entry. The owner keeps the authoritative key
/// of each node and passes a validity predicate to [`LazyMinHeap::pop_valid`], which discards
/// stale entries until it finds one that agrees with the current state.
///
/// Among entries with equal key, the smallest node is returned first.
#[derive(Debug, Clone, Default)]
pub struct LazyMinHeap {
    heap: BinaryHeap<Reverse<(NumNodes, Node)>>,
    stale_discarded: usize,
}

impl LazyMinHeap {
    /// Builds a heap from initial entries in linear time
    pub fn from_entries(entries: impl IntoIterator<Item = (NumNodes, Node)>) -> Self {
        Self {
            heap: entries.into_iter().map(Reverse).collect(),
            stale_discarded: 0,
        }
    }

    /// Pushes an entry; previous entries of the same node are not touched
    pub fn push(&mut self, key: NumNodes, node: Node) {
        self.heap.push(Reverse((key, node)));
    }

    /// Removes and returns the smallest entry regardless of whether it is stale
    pub fn pop(&mut self) -> Option<(NumNodes, Node)> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// Removes entries until `is_current(key, node)` holds for the smallest one, which is
    /// then removed and returned. Returns None if the heap runs empty.
    pub fn pop_valid<F: FnMut(NumNodes, Node) -> bool>(
        &mut self,
        mut is_current: F,
    ) -> Option<(NumNodes, Node)> {
        while let Some((key, node)) = self.pop() {
            if is_current(key, node) {
                return Some((key, node));
            }
            self.stale_discarded += 1;
        }
        None
    }

    /// Returns the smallest entry without removing it (which might be stale)
    pub fn peek(&self) -> Option<(NumNodes, Node)> {
        self.heap.peek().map(|Reverse(entry)| *entry)
    }

    /// Number of entries including stale ones
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of stale entries discarded by [`LazyMinHeap::pop_valid`] so far
    pub fn number_of_stale_discarded(&self) -> usize {
        self.stale_discarded
    }
}

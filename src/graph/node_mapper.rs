use fxhash::FxHashMap;

use super::*;

/// Bidirectional mapping between contiguous node ids `0..len` and arbitrary external ids.
///
/// Readers assign new ids in first-seen order; subgraph extraction uses the mapper to
/// translate ids of the subgraph back into ids of the host graph.
#[derive(Debug, Clone, Default)]
pub struct NodeMapper {
    new_to_old: Vec<u64>,
    old_to_new: FxHashMap<u64, Node>,
}

impl NodeMapper {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            new_to_old: Vec::with_capacity(n),
            old_to_new: FxHashMap::with_capacity_and_hasher(n, Default::default()),
        }
    }

    /// Mapper that maps every id in `0..n` onto itself
    pub fn identity(n: NumNodes) -> Self {
        let mut mapper = Self::with_capacity(n as usize);
        for u in 0..n {
            mapper.get_or_insert(u as u64);
        }
        mapper
    }

    /// Returns the new id of `old`, assigning the next free id if `old` was not seen yet
    pub fn get_or_insert(&mut self, old: u64) -> Node {
        let next = self.new_to_old.len() as Node;
        let id = *self.old_to_new.entry(old).or_insert(next);
        if id == next {
            self.new_to_old.push(old);
        }
        id
    }

    pub fn new_id_of(&self, old: u64) -> Option<Node> {
        self.old_to_new.get(&old).copied()
    }

    /// ** Panics if `new` was never assigned **
    pub fn old_id_of(&self, new: Node) -> u64 {
        self.new_to_old[new as usize]
    }

    pub fn len(&self) -> usize {
        self.new_to_old.len()
    }

    pub fn is_empty(&self) -> bool {
        self.new_to_old.is_empty()
    }

    /// Given `inner` mapping ids of a subgraph into ids covered by `self`, returns the mapper
    /// translating ids of that subgraph directly into the external ids of `self`.
    pub fn compose(&self, inner: &NodeMapper) -> NodeMapper {
        let mut mapper = NodeMapper::with_capacity(inner.len());
        for new in 0..inner.len() as Node {
            mapper.get_or_insert(self.old_id_of(inner.old_id_of(new) as Node));
        }
        mapper
    }
}

//! Arena storage for heap nodes
//!
//! Nodes live in a [`SlotMap`] and refer to each other through [`NodeKey`]s instead
//! of pointers. Keys are generational: once a node is removed, its key never
//! resolves again, even after the slot is reused by a later insert.
//!
//! Parent links are plain `Option<NodeKey>` values. They do not own anything, so
//! dropping or moving a node never has to consult its parent.

use slotmap::{new_key_type, SlotMap};
use std::ops::{Index, IndexMut};

new_key_type! {
    /// Stable handle to a node slot in an [`Arena`]
    pub struct NodeKey;
}

/// Owner of every node in a heap
#[derive(Debug, Clone)]
pub struct Arena<N> {
    nodes: SlotMap<NodeKey, N>,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Stores a node and returns the key that now owns it
    #[inline]
    pub fn insert(&mut self, node: N) -> NodeKey {
        self.nodes.insert(node)
    }

    /// Removes a node, handing ownership back to the caller
    ///
    /// Returns `None` if the key is stale.
    #[inline]
    pub fn remove(&mut self, key: NodeKey) -> Option<N> {
        self.nodes.remove(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Iterates over all live nodes in slot order (unrelated to heap order)
    pub fn values(&self) -> impl Iterator<Item = &N> {
        self.nodes.values()
    }

    /// Moves every node out of the arena together with its old key
    ///
    /// Old keys are dead once drained; callers relocating nodes into another
    /// arena must translate any keys stored inside the nodes themselves.
    pub fn drain(&mut self) -> impl Iterator<Item = (NodeKey, N)> + '_ {
        self.nodes.drain()
    }
}

impl<N> Index<NodeKey> for Arena<N> {
    type Output = N;

    #[inline]
    fn index(&self, key: NodeKey) -> &N {
        &self.nodes[key]
    }
}

impl<N> IndexMut<NodeKey> for Arena<N> {
    #[inline]
    fn index_mut(&mut self, key: NodeKey) -> &mut N {
        &mut self.nodes[key]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_basic() {
        let mut arena: Arena<i32> = Arena::new();

        let key = arena.insert(42);
        assert_eq!(arena[key], 42);

        arena[key] = 100;
        assert_eq!(arena[key], 100);
        assert_eq!(arena.len(), 1);

        assert_eq!(arena.remove(key), Some(100));
        assert!(arena.is_empty());
    }

    #[test]
    fn test_stale_key_after_slot_reuse() {
        let mut arena: Arena<&str> = Arena::with_capacity(4);

        let old = arena.insert("old");
        arena.remove(old);
        let new = arena.insert("new");

        // The slot is recycled but the generation differs
        assert_eq!(arena.remove(old), None);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena[new], "new");
    }

    #[test]
    fn test_drain_empties_arena() {
        let mut arena = Arena::new();
        let keys: Vec<_> = (0..5).map(|i| arena.insert(i)).collect();

        let mut drained: Vec<_> = arena.drain().collect();
        drained.sort_by_key(|&(_, v)| v);

        assert!(arena.is_empty());
        assert_eq!(drained.iter().map(|&(_, v)| v).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        for key in keys {
            assert_eq!(arena.remove(key), None);
        }
    }

    #[test]
    #[should_panic]
    fn test_index_stale_key_panics() {
        let mut arena = Arena::new();
        let key = arena.insert(1u8);
        arena.remove(key);
        let _value: u8 = arena[key];
    }
}

//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a priority queue with:
//! - O(1) insert and find-min
//! - O(log n) amortized extract-min
//!
//! The structure is a forest of heap-ordered multi-way trees. Insertion is lazy:
//! a new value simply becomes another one-node tree in the root list. All the
//! structural repair is deferred to extract-min, which promotes the children of
//! the removed minimum to roots and then *consolidates* the forest, linking trees
//! of equal degree until every root has a distinct degree.
//!
//! # Amortized analysis
//!
//! With potential Φ = number of roots, insert costs O(1) actual work plus one unit
//! of potential. Extract-min does work proportional to the number of roots, but
//! every link it performs removes a root, so that work is paid for by the
//! potential accumulated by earlier inserts. Because trees are only ever built by
//! linking equal-degree trees, a root of degree k holds at least 2ᵏ nodes, which
//! bounds the degree (and the number of roots after consolidation) by log₂ n.
//!
//! # Memory model
//!
//! Nodes live in an [`Arena`] and are addressed by [`NodeKey`]. Each node owns
//! its children through their keys; the parent link and the minimum pointer are
//! non-owning keys. Moving a tree between collections is a matter of moving its
//! key, never of copying the node.

use crate::storage::{Arena, NodeKey};
use crate::traits::{EmptyHeapError, Heap, HeapResult};
use log::{debug, trace};
use slotmap::SecondaryMap;
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt;

/// Child lists are short: degree never exceeds log₂ n
type Children = SmallVec<[NodeKey; 4]>;

#[derive(Clone)]
struct Node<T> {
    value: T,
    /// Parent node (None if root)
    parent: Option<NodeKey>,
    children: Children,
    /// Reserved for cascading cuts; nothing sets it yet
    marked: bool,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            parent: None,
            children: Children::new(),
            marked: false,
        }
    }

    #[inline]
    fn degree(&self) -> usize {
        self.children.len()
    }
}

/// Fibonacci Heap
///
/// # Example
///
/// ```rust
/// use rust_fibonacci_heap::fibonacci::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// heap.insert(5);
/// heap.insert(3);
/// heap.insert(7);
///
/// assert_eq!(heap.peek_min(), Ok(&3));
/// assert_eq!(heap.extract_min(), Ok(3));
/// assert_eq!(heap.size(), 2);
/// ```
#[derive(Clone)]
pub struct FibonacciHeap<T> {
    nodes: Arena<Node<T>>,
    roots: VecDeque<NodeKey>,
    min: Option<NodeKey>,
    len: usize,
}

impl<T> Default for FibonacciHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FibonacciHeap<T> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            roots: VecDeque::new(),
            min: None,
            len: 0,
        }
    }

    /// Creates an empty heap with room for `capacity` values before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            roots: VecDeque::with_capacity(capacity),
            min: None,
            len: 0,
        }
    }

    /// Returns the number of values in the heap
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    /// Removes every value
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
        self.min = None;
        self.len = 0;
    }

    /// Iterates over all values in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes.values().map(|node| &node.value)
    }

    /// Degrees of the current roots, in root-list order
    ///
    /// Right after [`extract_min`](Self::extract_min) these are pairwise distinct.
    pub fn root_degrees(&self) -> Vec<usize> {
        self.roots
            .iter()
            .map(|&root| self.nodes[root].degree())
            .collect()
    }
}

impl<T: Ord> FibonacciHeap<T> {
    /// Inserts a value as a new single-node tree at the front of the root list
    ///
    /// # Time Complexity
    /// O(1). No consolidation happens here.
    pub fn insert(&mut self, value: T) {
        let key = self.nodes.insert(Node::new(value));
        self.roots.push_front(key);

        let smaller = match self.min {
            Some(min) => self.nodes[key].value < self.nodes[min].value,
            None => true,
        };
        if smaller {
            self.min = Some(key);
        }

        self.len += 1;
    }

    /// Returns the minimum value without removing it
    ///
    /// # Errors
    /// [`EmptyHeapError`] if the heap holds no values.
    pub fn peek_min(&self) -> HeapResult<&T> {
        let min = self.min.ok_or(EmptyHeapError)?;
        Ok(&self.nodes[min].value)
    }

    /// Removes and returns the minimum value
    ///
    /// The children of the removed root become roots, then the forest is
    /// consolidated so that no two roots share a degree.
    ///
    /// # Errors
    /// [`EmptyHeapError`] if the heap holds no values.
    ///
    /// # Time Complexity
    /// O(log n) amortized.
    pub fn extract_min(&mut self) -> HeapResult<T> {
        let min = self.min.take().ok_or(EmptyHeapError)?;
        let Some(Node { value, children, .. }) = self.nodes.remove(min) else {
            unreachable!("minimum root missing from the node arena");
        };

        self.roots.retain(|&root| root != min);

        for &root in &self.roots {
            self.nodes[root].parent = None;
        }

        for child in children {
            self.nodes[child].parent = None;
            self.roots.push_back(child);
        }

        if !self.roots.is_empty() {
            self.consolidate();
        }

        self.len -= 1;
        Ok(value)
    }

    /// Moves every value of `other` into this heap
    ///
    /// Trees of `other` keep their shape and join the root list as they are.
    ///
    /// # Time Complexity
    /// O(m) where m is `other.len()`: nodes are relocated into this heap's arena.
    pub fn merge(&mut self, mut other: Self) {
        if other.is_empty() {
            return;
        }

        if self.is_empty() {
            *self = other;
            return;
        }

        let mut relocated: SecondaryMap<NodeKey, NodeKey> =
            SecondaryMap::with_capacity(other.nodes.len());
        for (old, node) in other.nodes.drain() {
            relocated.insert(old, self.nodes.insert(node));
        }

        // Rewrite the links stored inside the moved nodes
        for &key in relocated.values() {
            let node = &mut self.nodes[key];
            node.parent = node.parent.map(|parent| relocated[parent]);
            for child in node.children.iter_mut() {
                *child = relocated[*child];
            }
        }

        self.roots
            .extend(other.roots.iter().map(|&root| relocated[root]));

        if let (Some(self_min), Some(other_min)) = (self.min, other.min) {
            let other_min = relocated[other_min];
            if self.nodes[other_min].value < self.nodes[self_min].value {
                self.min = Some(other_min);
            }
        }

        self.len += other.len;
        debug!(
            "merged {} values into heap, {} roots, {} values total",
            other.len,
            self.roots.len(),
            self.len
        );
    }

    /// Consumes the heap, returning its values in non-decreasing order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len);
        while let Ok(value) = self.extract_min() {
            sorted.push(value);
        }
        sorted
    }

    /// Links roots of equal degree until all root degrees are distinct,
    /// then rebuilds the root list and recomputes the minimum
    fn consolidate(&mut self) {
        let roots_before = self.roots.len();
        // A root of degree k owns at least 2ᵏ nodes
        let max_degree = (usize::BITS - self.len.leading_zeros()) as usize;
        let mut buckets: Vec<Option<NodeKey>> = vec![None; max_degree + 1];
        let mut links = 0;

        while let Some(root) = self.roots.pop_front() {
            let mut x = root;
            let mut degree = self.nodes[x].degree();

            loop {
                if degree >= buckets.len() {
                    buckets.resize(degree + 1, None);
                }
                match buckets[degree].take() {
                    Some(mut y) => {
                        if self.nodes[y].value < self.nodes[x].value {
                            std::mem::swap(&mut x, &mut y);
                        }
                        self.link(y, x);
                        links += 1;
                        degree += 1;
                    }
                    None => {
                        buckets[degree] = Some(x);
                        break;
                    }
                }
            }
        }

        let mut min: Option<NodeKey> = None;
        for root in buckets.into_iter().flatten() {
            self.roots.push_back(root);
            let smaller = match min {
                Some(current) => self.nodes[root].value < self.nodes[current].value,
                None => true,
            };
            if smaller {
                min = Some(root);
            }
        }
        self.min = min;

        trace!(
            "consolidated {} roots into {} with {} links",
            roots_before,
            self.roots.len(),
            links
        );
    }

    /// Makes `child` the newest child of `parent`
    ///
    /// Both must be roots of equal degree, already detached from the root list.
    fn link(&mut self, child: NodeKey, parent: NodeKey) {
        let node = &mut self.nodes[child];
        node.parent = Some(parent);
        node.marked = false;
        self.nodes[parent].children.push(child);
    }
}

impl<T: fmt::Debug> fmt::Debug for FibonacciHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FibonacciHeap")
            .field("min", &self.min.map(|min| &self.nodes[min].value))
            .field("len", &self.len)
            .field("roots", &self.roots.len())
            .finish()
    }
}

impl<T: Ord> Extend<T> for FibonacciHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for FibonacciHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = FibonacciHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> Heap<T> for FibonacciHeap<T> {
    fn new() -> Self {
        FibonacciHeap::new()
    }

    fn is_empty(&self) -> bool {
        FibonacciHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        FibonacciHeap::len(self)
    }

    fn push(&mut self, value: T) {
        self.insert(value)
    }

    fn peek(&self) -> Option<&T> {
        self.peek_min().ok()
    }

    fn pop(&mut self) -> Option<T> {
        self.extract_min().ok()
    }

    fn merge(&mut self, other: Self) {
        FibonacciHeap::merge(self, other)
    }
}

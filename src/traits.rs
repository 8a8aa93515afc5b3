//! Common traits for heap data structures
//!
//! [`Heap`] is the Option-based surface that generic callers (schedulers, graph
//! search drivers) program against. Concrete heaps additionally expose a checked
//! API that reports misuse on an empty heap as [`EmptyHeapError`].

use thiserror::Error;

/// Error returned when the minimum is requested from an empty heap
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("heap is empty")]
pub struct EmptyHeapError;

/// Result type for checked heap operations
pub type HeapResult<T> = Result<T, EmptyHeapError>;

/// Base trait for min-ordered priority queues
///
/// This mirrors the shape of `std::collections::BinaryHeap`, except that the
/// smallest element comes out first.
///
/// # Example
///
/// ```rust
/// use rust_fibonacci_heap::Heap;
/// use rust_fibonacci_heap::fibonacci::FibonacciHeap;
///
/// let mut heap: FibonacciHeap<i32> = Heap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(1) amortized for Fibonacci heaps.
    fn push(&mut self, value: T);

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Time Complexity
    /// O(log n) amortized for Fibonacci heaps.
    fn pop(&mut self) -> Option<T>;

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}

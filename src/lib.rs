//! Fibonacci Heap for Rust
//!
//! This crate provides an arena-backed Fibonacci heap: a min-priority queue built
//! as a forest of heap-ordered multi-way trees, with lazy insertion and
//! consolidation on extract-min.
//!
//! # Features
//!
//! - **Insert**: O(1), the value becomes a new single-node root
//! - **Peek-min**: O(1)
//! - **Extract-min**: O(log n) amortized, followed by consolidation of equal-degree roots
//! - **Merge**: splices another heap's trees into the root list without consolidating
//!
//! Nodes are stored in a generational arena ([`storage::Arena`]) and linked by
//! keys, so the structure uses no `unsafe` code and no reference counting.
//!
//! # Example
//!
//! ```rust
//! use rust_fibonacci_heap::fibonacci::FibonacciHeap;
//! use rust_fibonacci_heap::EmptyHeapError;
//!
//! let mut heap = FibonacciHeap::new();
//! heap.insert(10);
//! heap.insert(1);
//! heap.insert(100);
//! assert_eq!(heap.peek_min(), Ok(&1));
//!
//! assert_eq!(heap.extract_min(), Ok(1));
//! assert_eq!(heap.extract_min(), Ok(10));
//! assert_eq!(heap.extract_min(), Ok(100));
//! assert_eq!(heap.extract_min(), Err(EmptyHeapError));
//! ```

pub mod fibonacci;
pub mod storage;
pub mod traits;

// Re-export the main trait and error for convenience
pub use fibonacci::FibonacciHeap;
pub use traits::{EmptyHeapError, Heap, HeapResult};

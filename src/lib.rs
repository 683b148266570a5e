//! Array-backed binary min-heap with a pluggable comparison strategy
//!
//! This crate provides [`BinaryHeap`], a priority queue built as a binary
//! min-heap over a contiguous `Vec`, ordered either by the elements' own
//! [`Ord`] implementation or by a comparator closure supplied at
//! construction.
//!
//! # Operations
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//! | `len`     | O(1)       |
//!
//! Retrieval comes in two flavors: `pop`/`peek` signal emptiness with
//! `None`, while `remove_min`/`element_min` return a
//! [`QueueError::Empty`](traits::QueueError) error for callers that treat
//! an empty queue as exceptional.
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::{BinaryHeap, PriorityQueue};
//!
//! let mut heap = BinaryHeap::new();
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), None);
//! ```
//!
//! With a comparator, any ordering rule works:
//!
//! ```rust
//! use comparator_heap::{BinaryHeap, PriorityQueue};
//!
//! // Max-heap behavior via a reversed comparator.
//! let mut heap = BinaryHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//! assert_eq!(heap.pop(), Some(3));
//! ```

pub mod binary;
pub mod traits;

// Re-export the main type and trait for convenience
pub use binary::BinaryHeap;
pub use traits::{PriorityQueue, QueueError};

//! Common trait and error type for priority queues
//!
//! This module provides:
//!
//! - [`PriorityQueue`]: the operation contract every queue in this crate
//!   satisfies
//! - [`QueueError`]: the error type returned by the strict retrieval
//!   operations
//!
//! The trait exposes each retrieval operation twice: a non-strict form
//! (`pop`, `peek`) that signals emptiness through `Option`, and a strict
//! form (`remove_min`, `element_min`) that treats emptiness as an error.
//! Both patterns are common downstream; stating them once here keeps
//! implementations to the `Option` pair only.

use std::fmt;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// A strict retrieval operation was called on an empty queue
    Empty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => write!(f, "queue is empty"),
        }
    }
}

impl std::error::Error for QueueError {}

/// Contract for min-priority queues
///
/// Implementors maintain a multiset of elements and always surface a
/// minimum under their active ordering. Ties among equal elements are
/// unordered; callers must not rely on any particular order between them.
///
/// # Example
///
/// ```rust
/// use comparator_heap::{BinaryHeap, PriorityQueue, QueueError};
///
/// let mut queue = BinaryHeap::new();
/// queue.push(2);
/// queue.push(1);
///
/// assert_eq!(queue.element_min(), Ok(&1));
/// assert_eq!(queue.remove_min(), Ok(1));
/// assert_eq!(queue.remove_min(), Ok(2));
/// assert_eq!(queue.remove_min(), Err(QueueError::Empty));
/// ```
pub trait PriorityQueue<E> {
    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue contains no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an element into the queue
    ///
    /// # Time Complexity
    /// O(log n) for the binary heap implementation.
    fn push(&mut self, item: E);

    /// Returns a reference to a minimum element without removing it,
    /// or `None` if the queue is empty
    ///
    /// Repeated calls without intervening mutation return the same
    /// element and never change the queue.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&E>;

    /// Removes and returns a minimum element, or `None` if the queue
    /// is empty
    ///
    /// # Time Complexity
    /// O(log n) for the binary heap implementation.
    fn pop(&mut self) -> Option<E>;

    /// Removes and returns a minimum element
    ///
    /// Strict counterpart of [`pop`](PriorityQueue::pop): an empty queue
    /// is an error rather than an absent result.
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue has no elements.
    fn remove_min(&mut self) -> Result<E, QueueError> {
        self.pop().ok_or(QueueError::Empty)
    }

    /// Returns a reference to a minimum element without removing it
    ///
    /// Strict counterpart of [`peek`](PriorityQueue::peek): an empty queue
    /// is an error rather than an absent result.
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue has no elements.
    fn element_min(&self) -> Result<&E, QueueError> {
        self.peek().ok_or(QueueError::Empty)
    }
}

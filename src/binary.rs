//! Binary min-heap over a contiguous backing vector
//!
//! The heap is stored flat in a `Vec` with the usual index arithmetic:
//! the parent of index `i` (for `i > 0`) is `(i - 1) / 2`, and the
//! children of index `i` are `2i + 1` and `2i + 2`. Heap order means the
//! element at every index compares not-greater than each of its children
//! under the active ordering, so index 0 always holds a minimum.
//!
//! Ordering comes from one of two strategies fixed at construction:
//! the element type's own [`Ord`] implementation ([`BinaryHeap::new`]),
//! or a caller-supplied comparator closure
//! ([`BinaryHeap::with_comparator`]). A comparator-built heap places no
//! `Ord` bound on its elements.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//! | `clear`   | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::{BinaryHeap, PriorityQueue};
//!
//! let mut heap = BinaryHeap::new();
//! heap.push("pear");
//! heap.push("apple");
//! heap.push("fig");
//!
//! assert_eq!(heap.peek(), Some(&"apple"));
//! assert_eq!(heap.pop(), Some("apple"));
//! assert_eq!(heap.pop(), Some("fig"));
//! assert_eq!(heap.pop(), Some("pear"));
//! assert_eq!(heap.pop(), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::traits::PriorityQueue;

/// The active comparison rule, fixed at construction
///
/// `Natural` carries the element type's `Ord::cmp` as a plain function
/// pointer; capturing it in the constructor is the only place the
/// `E: Ord` bound is needed. `Comparator` carries a boxed caller-supplied
/// closure. Every structural comparison dispatches on this tag.
enum Strategy<E> {
    Natural(fn(&E, &E) -> Ordering),
    Comparator(Box<dyn Fn(&E, &E) -> Ordering>),
}

impl<E> Strategy<E> {
    fn compare(&self, left: &E, right: &E) -> Ordering {
        match self {
            Strategy::Natural(cmp) => cmp(left, right),
            Strategy::Comparator(cmp) => cmp(left, right),
        }
    }
}

/// An array-backed binary min-heap
///
/// Elements are owned by the heap and moved within the backing vector
/// during restructuring. Duplicates are permitted and treated
/// independently; the order among equal elements is unspecified.
///
/// A heap built with [`new`](BinaryHeap::new) orders elements by their
/// `Ord` implementation. A heap built with
/// [`with_comparator`](BinaryHeap::with_comparator) orders them by the
/// supplied closure, where [`Ordering::Less`] means higher priority
/// (extracted earlier).
pub struct BinaryHeap<E> {
    /// The heap data, in heap order (not sorted order)
    data: Vec<E>,
    strategy: Strategy<E>,
}

impl<E: Ord> BinaryHeap<E> {
    /// Creates an empty heap ordered by the elements' natural ordering
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            strategy: Strategy::Natural(E::cmp),
        }
    }

    /// Creates an empty natural-order heap with space for at least
    /// `capacity` elements preallocated
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            strategy: Strategy::Natural(E::cmp),
        }
    }
}

impl<E> BinaryHeap<E> {
    /// Creates an empty heap ordered by the supplied comparator
    ///
    /// The comparator must impose a total order. The element type does
    /// not need to implement `Ord`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use comparator_heap::{BinaryHeap, PriorityQueue};
    ///
    /// let mut by_len = BinaryHeap::with_comparator(|a: &&str, b: &&str| {
    ///     a.len().cmp(&b.len())
    /// });
    /// by_len.push("three");
    /// by_len.push("a");
    /// by_len.push("of");
    /// assert_eq!(by_len.pop(), Some("a"));
    /// ```
    pub fn with_comparator<F>(comparator: F) -> Self
    where
        F: Fn(&E, &E) -> Ordering + 'static,
    {
        Self {
            data: Vec::new(),
            strategy: Strategy::Comparator(Box::new(comparator)),
        }
    }

    /// Removes all elements, keeping the allocated capacity and the
    /// comparison strategy
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Compare two elements under the active strategy
    fn compare(&self, left: &E, right: &E) -> Ordering {
        self.strategy.compare(left, right)
    }

    /// Move the element at `index` toward the root until its parent
    /// compares not-greater than it
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.compare(&self.data[parent], &self.data[index]) == Ordering::Greater {
                self.data.swap(parent, index);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `index` toward the leaves until it compares
    /// not-greater than its smaller child
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break; // leaf reached
            }

            let right = left + 1;
            let mut smaller = left;
            if right < len && self.compare(&self.data[left], &self.data[right]) == Ordering::Greater
            {
                smaller = right;
            }

            if self.compare(&self.data[index], &self.data[smaller]) == Ordering::Greater {
                self.data.swap(index, smaller);
                index = smaller;
            } else {
                break; // heap order restored
            }
        }
    }
}

impl<E> PriorityQueue<E> for BinaryHeap<E> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn push(&mut self, item: E) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    fn peek(&self) -> Option<&E> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<E> {
        if self.data.is_empty() {
            return None;
        }

        // Swap the root with the last element, remove it, then restore
        // heap order from the root.
        let result = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(result)
    }
}

impl<E: Ord> Default for BinaryHeap<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the backing vector in array order (heap order, not sorted
/// order). Diagnostic only; the layout is not a serialization format.
impl<E: fmt::Debug> fmt::Debug for BinaryHeap<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy = match self.strategy {
            Strategy::Natural(_) => "natural",
            Strategy::Comparator(_) => "comparator",
        };
        f.debug_struct("BinaryHeap")
            .field("data", &self.data)
            .field("strategy", &strategy)
            .finish()
    }
}

//! Contract tests for the priority queue interface
//!
//! These tests exercise the operation contract through the
//! [`PriorityQueue`] trait: empty-queue behavior of all four retrieval
//! entry points, single-element round trips, size bookkeeping, and
//! comparator-driven orderings.

use comparator_heap::{BinaryHeap, PriorityQueue, QueueError};

// Test helpers that work with any PriorityQueue implementation

/// Empty queue: non-strict retrieval is absent, strict retrieval errors
fn check_empty_behavior<Q: PriorityQueue<i32>>(mut queue: Q) {
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.peek(), None);
    assert_eq!(queue.pop(), None);
    assert_eq!(queue.element_min(), Err(QueueError::Empty));
    assert_eq!(queue.remove_min(), Err(QueueError::Empty));
}

/// One element in, the same element out, queue empty afterwards
fn check_single_element_round_trip<Q: PriorityQueue<i32>>(mut queue: Q) {
    queue.push(42);

    assert_eq!(queue.len(), 1);
    assert_eq!(queue.peek(), Some(&42));
    assert_eq!(queue.pop(), Some(42));
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.pop(), None);
}

/// Peek never mutates: repeated calls return the same element
fn check_idempotent_peek<Q: PriorityQueue<i32>>(mut queue: Q) {
    queue.push(7);
    queue.push(3);
    queue.push(11);

    for _ in 0..5 {
        assert_eq!(queue.peek(), Some(&3));
        assert_eq!(queue.element_min(), Ok(&3));
        assert_eq!(queue.len(), 3);
    }
}

#[test]
fn empty_natural_queue() {
    check_empty_behavior(BinaryHeap::new());
}

#[test]
fn empty_comparator_queue() {
    check_empty_behavior(BinaryHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a)));
}

#[test]
fn single_element_round_trip() {
    check_single_element_round_trip(BinaryHeap::new());
}

#[test]
fn idempotent_peek() {
    check_idempotent_peek(BinaryHeap::new());
}

#[test]
fn strict_and_non_strict_agree() {
    let mut queue = BinaryHeap::new();
    queue.push(5);
    queue.push(2);

    assert_eq!(queue.element_min(), Ok(&2));
    assert_eq!(queue.remove_min(), Ok(2));
    assert_eq!(queue.peek(), Some(&5));
    assert_eq!(queue.pop(), Some(5));
    assert_eq!(queue.remove_min(), Err(QueueError::Empty));
}

#[test]
fn descending_comparator_reverses_extraction() {
    let mut queue = BinaryHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));

    queue.push(3);
    queue.push(1);
    queue.push(2);

    assert_eq!(queue.pop(), Some(3));
    assert_eq!(queue.pop(), Some(2));
    assert_eq!(queue.pop(), Some(1));
    assert_eq!(queue.pop(), None);
}

#[test]
fn size_conservation() {
    let mut queue = BinaryHeap::new();

    for i in 0..50 {
        queue.push(i);
        assert_eq!(queue.len(), (i + 1) as usize);
    }
    for i in 0..20 {
        queue.pop();
        assert_eq!(queue.len(), 50 - 1 - i);
    }
    assert_eq!(queue.len(), 30);
}

#[test]
fn ascending_insertion_pops_sorted() {
    let mut queue = BinaryHeap::new();

    for i in 0..100 {
        queue.push(i);
    }
    for i in 0..100 {
        assert_eq!(queue.pop(), Some(i));
    }
    assert!(queue.is_empty());
}

#[test]
fn descending_insertion_pops_sorted() {
    let mut queue = BinaryHeap::new();

    for i in (0..100).rev() {
        queue.push(i);
    }
    for i in 0..100 {
        assert_eq!(queue.pop(), Some(i));
    }
    assert!(queue.is_empty());
}

#[test]
fn owned_elements_move_out() {
    let mut queue = BinaryHeap::new();
    queue.push(String::from("banana"));
    queue.push(String::from("apple"));

    let first: String = queue.pop().unwrap();
    assert_eq!(first, "apple");
    assert_eq!(queue.pop().as_deref(), Some("banana"));
}

#[test]
fn refill_after_drain() {
    let mut queue = BinaryHeap::new();

    queue.push(2);
    queue.push(1);
    assert_eq!(queue.pop(), Some(1));
    assert_eq!(queue.pop(), Some(2));
    assert_eq!(queue.pop(), None);

    queue.push(9);
    queue.push(4);
    assert_eq!(queue.pop(), Some(4));
    assert_eq!(queue.pop(), Some(9));
}

#[test]
fn comparator_on_struct_field() {
    #[derive(Debug, PartialEq)]
    struct Task {
        priority: u32,
        name: &'static str,
    }

    let mut queue =
        BinaryHeap::with_comparator(|a: &Task, b: &Task| a.priority.cmp(&b.priority));

    queue.push(Task { priority: 30, name: "low" });
    queue.push(Task { priority: 10, name: "high" });
    queue.push(Task { priority: 20, name: "mid" });

    assert_eq!(queue.pop().map(|t| t.name), Some("high"));
    assert_eq!(queue.pop().map(|t| t.name), Some("mid"));
    assert_eq!(queue.pop().map(|t| t.name), Some("low"));
}

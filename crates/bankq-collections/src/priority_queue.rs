//! `PriorityQueue` — queue vocabulary over a [`MinHeap`].
//!
//! The adapter exists for two reasons: event-driven callers speak
//! enqueue/dequeue/peek/is_empty rather than insert/remove, and the
//! queue rejects empty access at its own boundary before delegating; two
//! independent layers raise the same [`CollectionError::Empty`], so the
//! error is identical no matter which layer detects it.

use crate::{CollectionError, CollectionResult, MinHeap};

/// Initial capacity of the owned heap.  Deliberately small: the queue is
/// typically seeded with an unknown number of events and relies on the
/// heap's doubling growth.
const INITIAL_HEAP_CAPACITY: usize = 2;

/// A minimum priority queue: `dequeue` always yields the smallest element.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: MinHeap<T>,
}

impl<T: Ord> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: MinHeap::with_capacity(INITIAL_HEAP_CAPACITY),
        }
    }

    /// True iff the underlying heap holds no elements.  O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Logical size; equals the heap's element count at all times.  O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Insert `element` according to its ordering.  O(log n).
    pub fn enqueue(&mut self, element: T) {
        self.heap.insert(element);
    }

    /// Remove and return the highest-priority (smallest) element.  O(log n).
    ///
    /// Fails with [`CollectionError::Empty`] on an empty queue.
    pub fn dequeue(&mut self) -> CollectionResult<T> {
        if self.is_empty() {
            return Err(CollectionError::Empty);
        }
        self.heap.remove()
    }

    /// The highest-priority element, without removing it.  O(1).
    ///
    /// Fails with [`CollectionError::Empty`] on an empty queue.
    pub fn peek(&self) -> CollectionResult<&T> {
        if self.is_empty() {
            return Err(CollectionError::Empty);
        }
        self.heap.peek()
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

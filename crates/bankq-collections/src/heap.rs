//! `MinHeap` — array-backed binary min-heap.
//!
//! # Layout
//!
//! Elements live in a contiguous, zero-indexed buffer forming a complete
//! binary tree: the children of index `i` are `2i+1` and `2i+2`, its parent
//! is `(i-1)/2`.  The heap invariant is
//!
//! ```text
//! items[(i-1)/2] <= items[i]    for every 0 < i < len
//! ```
//!
//! so the minimum element is always at index 0 when the heap is non-empty.
//!
//! # Growth
//!
//! Capacity starts at the constructor-supplied value (clamped to at least 1)
//! and doubles whenever an insert would exceed it: all elements are copied
//! into fresh storage and the old allocation is released.  That copy is O(n)
//! but amortizes to O(1) per insert.  The heap never shrinks.
//!
//! # Ties
//!
//! Elements comparing equal have unspecified relative order; the heap is
//! not stable.

use crate::{CollectionError, CollectionResult};

/// A binary min-heap over any totally ordered element type.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    items: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    /// Initial capacity used by [`MinHeap::new`].
    pub const DEFAULT_CAPACITY: usize = 10;

    /// An empty heap with [`DEFAULT_CAPACITY`][Self::DEFAULT_CAPACITY] slots.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// An empty heap with room for `capacity` elements before the first
    /// reallocation.  A capacity of 0 is treated as 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity.max(1)),
        }
    }

    /// Number of stored elements.  O(1), never fails, does not mutate.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Currently allocated slots (`len() <= capacity()` always).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Insert `element`, restoring the heap invariant.  O(log n) amortized;
    /// doubles the capacity first when the heap is full.
    pub fn insert(&mut self, element: T) {
        if self.items.len() == self.items.capacity() {
            self.grow();
        }
        self.items.push(element);
        self.sift_up(self.items.len() - 1);
    }

    /// The minimum element, without removing it.  O(1).
    ///
    /// The returned borrow ends before any subsequent mutating call, so a
    /// reference into storage can never survive a reallocation.
    pub fn peek(&self) -> CollectionResult<&T> {
        self.items.first().ok_or(CollectionError::Empty)
    }

    /// Remove and return the minimum element.  O(log n).
    ///
    /// The last element replaces the root and is sifted down.  On an empty
    /// heap, fails with [`CollectionError::Empty`] and performs no mutation.
    pub fn remove(&mut self) -> CollectionResult<T> {
        if self.items.is_empty() {
            return Err(CollectionError::Empty);
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop().ok_or(CollectionError::Empty)?;
        self.sift_down(0);
        Ok(min)
    }

    /// Iterate the elements in storage order (NOT sorted order).
    ///
    /// Useful for inspecting the heap without draining it; the only ordering
    /// guarantee is the heap invariant itself.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    // ── Invariant maintenance ─────────────────────────────────────────────

    /// Double the capacity.  `reserve_exact` of the current capacity copies
    /// all elements into fresh storage and releases the old allocation.
    fn grow(&mut self) {
        let capacity = self.items.capacity().max(1);
        self.items.reserve_exact(capacity);
    }

    /// Swap the element at `child` upward while it is smaller than its
    /// parent, stopping at the root or at a parent that is no greater.
    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.items[child] < self.items[parent] {
                self.items.swap(child, parent);
                child = parent;
            } else {
                break;
            }
        }
    }

    /// Swap the element at `node` downward with its smallest child until no
    /// child is smaller or the node is a leaf.
    fn sift_down(&mut self, mut node: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * node + 1;
            let right = left + 1;
            let mut smallest = node;
            if left < len && self.items[left] < self.items[smallest] {
                smallest = left;
            }
            if right < len && self.items[right] < self.items[smallest] {
                smallest = right;
            }
            if smallest == node {
                break;
            }
            self.items.swap(node, smallest);
            node = smallest;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

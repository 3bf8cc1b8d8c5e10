//! `Fifo` — link-based first-in-first-out queue.
//!
//! A singly-linked chain of nodes where each node owns the next
//! (head-to-tail ownership), plus a non-owning raw pointer to the tail node
//! for O(1) append.  All operations are O(1).
//!
//! # Invariants
//!
//! - `tail` points at the last node of the chain reachable from `head`, and
//!   is null exactly when `head` is `None`.
//! - `len` equals the number of nodes in the chain.
//!
//! Removing the last element resets both `head` and `tail`.  The raw tail
//! pointer makes the type `!Send`/`!Sync`, which matches the single-owner,
//! single-thread access model of the rest of this crate.

use std::ptr;

use crate::{CollectionError, CollectionResult};

struct Node<T> {
    element: T,
    next:    Option<Box<Node<T>>>,
}

/// A FIFO queue: `enqueue` appends at the back, `dequeue` removes the front.
pub struct Fifo<T> {
    head: Option<Box<Node<T>>>,
    /// Dangling (null) iff `head` is `None`.
    tail: *mut Node<T>,
    len:  usize,
}

impl<T> Fifo<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: ptr::null_mut(),
            len:  0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Append `element` at the back.  O(1).
    pub fn enqueue(&mut self, element: T) {
        let node = Box::new(Node { element, next: None });
        let slot: &mut Option<Box<Node<T>>> = if self.tail.is_null() {
            &mut self.head
        } else {
            // SAFETY: `tail` is non-null, so it points at the last node of
            // the chain owned by `head`; that node's `next` is `None` and
            // we hold `&mut self`, so no other reference aliases it.
            unsafe { &mut (*self.tail).next }
        };
        *slot = Some(node);
        // The new tail pointer is derived from the node's final resting
        // place in the chain, after the box has been moved into it.
        if let Some(last) = slot.as_deref_mut() {
            self.tail = last;
        }
        self.len += 1;
    }

    /// Remove and return the front element.  O(1).
    ///
    /// Fails with [`CollectionError::Empty`] on an empty queue.
    pub fn dequeue(&mut self) -> CollectionResult<T> {
        let node = self.head.take().ok_or(CollectionError::Empty)?;
        let Node { element, next } = *node;
        self.head = next;
        if self.head.is_none() {
            self.tail = ptr::null_mut();
        }
        self.len -= 1;
        Ok(element)
    }

    /// The front element, without removing it.  O(1).
    ///
    /// Fails with [`CollectionError::Empty`] on an empty queue.
    pub fn peek(&self) -> CollectionResult<&T> {
        self.head
            .as_deref()
            .map(|node| &node.element)
            .ok_or(CollectionError::Empty)
    }
}

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Fifo<T> {
    /// Iterative teardown: the default recursive drop of a long `Box` chain
    /// would overflow the stack.
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
        }
    }
}

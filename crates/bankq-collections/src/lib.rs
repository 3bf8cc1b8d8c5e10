//! `bankq-collections` — the ordered containers driving the simulation.
//!
//! The load-bearing piece is [`MinHeap`], an array-backed binary min-heap
//! with O(log n) insert/remove and O(1) peek.  [`PriorityQueue`] is a thin
//! adapter over it presenting queue vocabulary to event-driven callers, and
//! [`Fifo`] is a link-based first-in-first-out queue for waiting lines.
//!
//! # Crate layout
//!
//! | Module             | Contents                                 |
//! |--------------------|------------------------------------------|
//! | [`heap`]           | `MinHeap<T>`                             |
//! | [`priority_queue`] | `PriorityQueue<T>`                       |
//! | [`fifo`]           | `Fifo<T>`                                |
//! | [`error`]          | `CollectionError`, `CollectionResult<T>` |
//!
//! All containers are generic, single-threaded, and exclusively own their
//! storage.  The only error any of them produce is
//! [`CollectionError::Empty`], from `peek`/`remove`/`dequeue` on an empty
//! container; callers that check `is_empty()` first never see it.

pub mod error;
pub mod fifo;
pub mod heap;
pub mod priority_queue;


pub use error::{CollectionError, CollectionResult};
pub use fifo::Fifo;
pub use heap::MinHeap;
pub use priority_queue::PriorityQueue;

//! `bankq-core` — foundational value types for the bankq simulation.
//!
//! This crate is a dependency of every other `bankq-*` crate.  It has no
//! `bankq-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                          |
//! |-----------|-----------------------------------|
//! | [`time`]  | `SimTime`                         |
//! | [`event`] | `Event`, `EventKind`              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod event;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use event::{Event, EventKind};
pub use time::SimTime;

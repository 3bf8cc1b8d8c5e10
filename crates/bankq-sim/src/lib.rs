//! `bankq-sim` — the single-teller bank-line simulation driver.
//!
//! # Event loop
//!
//! ```text
//! while the event queue is non-empty:
//!   ① Peek      — copy the earliest event; advance the clock to its time.
//!   ② Notify    — observer.on_event (the transcript line).
//!   ③ Dispatch  — Arrival:   serve immediately if the line is empty and the
//!                            teller is free (schedule a departure), else
//!                            join the line.
//!                 Departure: if anyone is waiting, pull the front customer,
//!                            accumulate their wait, schedule their
//!                            departure; else the teller goes idle.
//! ```
//!
//! # Crate layout
//!
//! | Module         | Contents                                         |
//! |----------------|--------------------------------------------------|
//! | [`sim`]        | `BankSim`                                        |
//! | [`observer`]   | `SimObserver`, `NoopObserver`                    |
//! | [`transcript`] | `Transcript<W>`                                  |
//! | [`loader`]     | `Customer`, `read_customers`, CSV loaders        |
//! | [`stats`]      | `SimStats`                                       |
//! | [`error`]      | `SimError`, `SimResult<T>`                       |

pub mod error;
pub mod loader;
pub mod observer;
pub mod sim;
pub mod stats;
pub mod transcript;

#[cfg(test)]
mod tests;

pub use error::{SimError, SimResult};
pub use loader::{Customer, load_customers_csv, load_customers_reader, read_customers};
pub use observer::{NoopObserver, SimObserver};
pub use sim::BankSim;
pub use stats::SimStats;
pub use transcript::Transcript;

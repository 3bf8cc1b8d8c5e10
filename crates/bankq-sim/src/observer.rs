//! Simulation observer trait for progress reporting.
//!
//! All methods have default no-op implementations so implementors only need
//! to override what they care about.  [`Transcript`][crate::Transcript] is
//! the stock implementation that renders the classic console output.

use bankq_core::Event;

use crate::SimStats;

/// Callbacks invoked by [`BankSim::run`][crate::BankSim::run].
pub trait SimObserver {
    /// Called once before the first event is processed.
    fn on_sim_start(&mut self) {}

    /// Called for each event, after the clock has advanced to its time and
    /// before it is dispatched.
    fn on_event(&mut self, _event: &Event) {}

    /// Called once after the event queue drains, with the final statistics.
    fn on_sim_end(&mut self, _stats: &SimStats) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want any output.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

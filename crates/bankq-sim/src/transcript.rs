//! `Transcript<W>` — renders the simulation's console output.
//!
//! One line per processed event plus a final report:
//!
//! ```text
//! Simulation Begins
//! Processing an arrival event at time:    0
//! Processing an arrival event at time:    2
//! Processing a departure event at time:   5
//! Processing a departure event at time:   8
//! Simulation Ends
//!
//! Final Statistics:
//!
//!     Total number of people processed: 2
//!     Average amount of time spent waiting: 1.5
//! ```
//!
//! Arrival times are right-aligned in a 5-character field, departure times
//! in a 4-character field (the longer "an arrival" article eats the column).
//!
//! Write errors are stored internally because `SimObserver` methods have no
//! return value.  After `sim.run()` returns, check for errors with
//! [`take_error`][Transcript::take_error].

use std::io::{self, Write};

use bankq_core::{Event, EventKind};

use crate::{SimObserver, SimStats};

/// A [`SimObserver`] that writes the event transcript and final report to
/// any `Write` sink.
pub struct Transcript<W: Write> {
    out:        W,
    last_error: Option<io::Error>,
}

impl<W: Write> Transcript<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect a buffer in tests).
    pub fn into_inner(self) -> W {
        self.out
    }

    fn store_err(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> SimObserver for Transcript<W> {
    fn on_sim_start(&mut self) {
        let result = writeln!(self.out, "Simulation Begins");
        self.store_err(result);
    }

    fn on_event(&mut self, event: &Event) {
        let result = match event.kind() {
            EventKind::Arrival => writeln!(
                self.out,
                "Processing an arrival event at time:{:>5}",
                event.time().0
            ),
            EventKind::Departure => writeln!(
                self.out,
                "Processing a departure event at time:{:>4}",
                event.time().0
            ),
        };
        self.store_err(result);
    }

    fn on_sim_end(&mut self, stats: &SimStats) {
        let result = writeln!(
            self.out,
            "Simulation Ends\n\nFinal Statistics:\n\n    \
             Total number of people processed: {}\n    \
             Average amount of time spent waiting: {}",
            stats.customers,
            stats.average_wait()
        );
        self.store_err(result);
    }
}

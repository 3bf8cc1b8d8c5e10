//! bank — single-teller bank-line simulation.
//!
//! Reads whitespace-separated `(arrival_time, service_duration)` integer
//! pairs from stdin until end of input, runs the event-driven simulation,
//! and prints one line per processed event followed by the final statistics.
//!
//! ```text
//! $ printf '0 5 2 3' | bank
//! Simulation Begins
//! Processing an arrival event at time:    0
//! ...
//! ```

use std::io;

use anyhow::Result;

use bankq_sim::{BankSim, Transcript, read_customers};

fn main() -> Result<()> {
    let customers = read_customers(io::stdin().lock())?;

    let mut sim = BankSim::new();
    sim.load(customers);

    let mut transcript = Transcript::new(io::stdout().lock());
    sim.run(&mut transcript)?;
    if let Some(e) = transcript.take_error() {
        return Err(e.into());
    }
    Ok(())
}

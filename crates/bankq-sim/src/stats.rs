//! Running totals accumulated over a simulation run.

/// Customer count and cumulative waiting time.
///
/// `customers` counts every customer fed into the simulation, including
/// those served immediately; the average divides by all of them, so a bank
/// where nobody waits reports 0.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total customers processed.
    pub customers: u32,
    /// Sum of every customer's (service start - arrival) wait.
    pub cumulative_wait: u64,
}

impl SimStats {
    /// Add one customer's wait to the running total.
    #[inline]
    pub fn record_wait(&mut self, wait: u32) {
        self.cumulative_wait += u64::from(wait);
    }

    /// Cumulative wait divided by total customer count; 0.0 when no
    /// customers were processed.
    pub fn average_wait(&self) -> f64 {
        if self.customers == 0 {
            0.0
        } else {
            self.cumulative_wait as f64 / f64::from(self.customers)
        }
    }
}

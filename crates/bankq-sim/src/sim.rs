//! The `BankSim` struct and its event loop.

use bankq_collections::{Fifo, PriorityQueue};
use bankq_core::{Event, EventKind, SimTime};

use crate::{Customer, SimObserver, SimResult, SimStats};

/// A single-teller bank-line simulation.
///
/// Arrivals are seeded up front via [`add_customer`][Self::add_customer] or
/// [`load`][Self::load]; departures are scheduled dynamically as customers
/// reach the teller.  The event priority queue orders everything by time
/// (arrivals before departures on ties), and the FIFO line holds customers
/// who arrive while the teller is busy.
pub struct BankSim {
    /// Pending events, ordered by time.
    events: PriorityQueue<Event>,

    /// Customers waiting for the teller, in arrival order.  Holds the
    /// original arrival events so wait time and service length stay
    /// attached to each customer.
    line: Fifo<Event>,

    /// Whether the teller is idle.  Starts true.
    teller_free: bool,

    /// Current simulation time: the time of the event being processed.
    clock: SimTime,

    stats: SimStats,
}

impl BankSim {
    pub fn new() -> Self {
        Self {
            events:      PriorityQueue::new(),
            line:        Fifo::new(),
            teller_free: true,
            clock:       SimTime::ZERO,
            stats:       SimStats::default(),
        }
    }

    /// Seed one customer's arrival event.
    pub fn add_customer(&mut self, customer: Customer) {
        self.events
            .enqueue(Event::arrival(customer.arrival, customer.service));
        self.stats.customers += 1;
    }

    /// Seed many customers at once.
    pub fn load<I: IntoIterator<Item = Customer>>(&mut self, customers: I) {
        for customer in customers {
            self.add_customer(customer);
        }
    }

    /// Statistics accumulated so far.
    pub fn stats(&self) -> SimStats {
        self.stats
    }

    /// Process events until the queue drains; returns the final statistics.
    ///
    /// The loop checks emptiness before every peek/dequeue, so on
    /// well-formed input the `Empty` error path is never taken; `?` still
    /// propagates it rather than panicking if an invariant is ever broken.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimStats> {
        observer.on_sim_start();
        while !self.events.is_empty() {
            let event = *self.events.peek()?;
            self.clock = event.time();
            observer.on_event(&event);
            match event.kind() {
                EventKind::Arrival => self.process_arrival(event)?,
                EventKind::Departure => self.process_departure()?,
            }
        }
        observer.on_sim_end(&self.stats);
        Ok(self.stats)
    }

    // ── Event handlers ────────────────────────────────────────────────────

    /// An arrival: serve immediately if the line is empty and the teller is
    /// free (their departure is scheduled `length` after now); otherwise the
    /// customer joins the back of the line.
    fn process_arrival(&mut self, event: Event) -> SimResult<()> {
        self.events.dequeue()?;
        if self.line.is_empty() && self.teller_free {
            self.events
                .enqueue(Event::departure(self.clock + event.length()));
            self.teller_free = false;
        } else {
            self.line.enqueue(event);
        }
        Ok(())
    }

    /// A departure: the teller frees up.  If anyone is waiting, the front
    /// customer starts service now, their wait (now - arrival) is recorded,
    /// and their departure is scheduled; otherwise the teller goes idle.
    fn process_departure(&mut self) -> SimResult<()> {
        self.events.dequeue()?;
        if self.line.is_empty() {
            self.teller_free = true;
        } else {
            let customer = self.line.dequeue()?;
            self.stats.record_wait(self.clock.since(customer.time()));
            self.events
                .enqueue(Event::departure(self.clock + customer.length()));
        }
        Ok(())
    }
}

impl Default for BankSim {
    fn default() -> Self {
        Self::new()
    }
}

//! Bank simulation events.
//!
//! # Ordering
//!
//! Events are ordered by time ascending; at equal times an arrival sorts
//! before a departure (a customer who walks in the instant another leaves
//! must see the teller already free).  Among same-kind events at the same
//! time the relative order is unspecified: the event queue's heap is not
//! stable, and no consumer may rely on insertion order for ties.
//!
//! The service length deliberately takes no part in comparison or equality;
//! including it would make two simultaneous arrivals with different service
//! lengths unequal while the queue treats them as interchangeable.

use std::cmp::Ordering;

use crate::SimTime;

/// What an [`Event`] represents.  `Arrival` sorts before `Departure`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A customer arrives at the bank.
    Arrival,
    /// A customer finishes their transaction and leaves.
    Departure,
}

/// A single event in the simulation timeline.
///
/// `Event` is a small `Copy` value: a kind, the time it occurs, and (for
/// arrivals only) the service length.  A departure's length is always 0.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    kind:   EventKind,
    time:   SimTime,
    length: u32,
}

impl Event {
    /// An arrival at `time` with the given service `length`.
    pub fn arrival(time: SimTime, length: u32) -> Self {
        Self { kind: EventKind::Arrival, time, length }
    }

    /// A departure at `time`.
    pub fn departure(time: SimTime) -> Self {
        Self { kind: EventKind::Departure, time, length: 0 }
    }

    #[inline]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    #[inline]
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Service length.  Meaningful for arrivals only; 0 for departures.
    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    #[inline]
    pub fn is_arrival(&self) -> bool {
        self.kind == EventKind::Arrival
    }
}

// Manual impls: ordering and equality are over (time, kind) only, so that
// `Eq` stays consistent with `Ord` while `length` stays out of both.

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.kind == other.kind
    }
}

impl Eq for Event {}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .cmp(&other.time)
            .then_with(|| self.kind.cmp(&other.kind))
    }
}

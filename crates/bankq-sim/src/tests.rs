//! Unit tests for bankq-sim.

use bankq_core::{Event, EventKind, SimTime};

use crate::{BankSim, Customer, NoopObserver, SimObserver, SimStats, Transcript};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn customer(arrival: u32, service: u32) -> Customer {
    Customer {
        arrival: SimTime(arrival),
        service,
    }
}

/// Observer recording the processed event sequence.
#[derive(Default)]
struct Recorder {
    events:  Vec<(EventKind, u32)>,
    started: bool,
    ended:   bool,
}

impl SimObserver for Recorder {
    fn on_sim_start(&mut self) {
        self.started = true;
    }

    fn on_event(&mut self, event: &Event) {
        self.events.push((event.kind(), event.time().0));
    }

    fn on_sim_end(&mut self, _stats: &SimStats) {
        self.ended = true;
    }
}

// ── Event queue ordering ──────────────────────────────────────────────────────

#[cfg(test)]
mod event_queue {
    use bankq_collections::PriorityQueue;

    use super::*;

    #[test]
    fn arrival_dequeues_before_departure_at_equal_time() {
        // Both insertion orders must yield the arrival first.
        for flip in [false, true] {
            let arrival = Event::arrival(SimTime(0), 5);
            let departure = Event::departure(SimTime(0));
            let mut queue = PriorityQueue::new();
            if flip {
                queue.enqueue(departure);
                queue.enqueue(arrival);
            } else {
                queue.enqueue(arrival);
                queue.enqueue(departure);
            }
            assert!(queue.dequeue().unwrap().is_arrival());
            assert!(!queue.dequeue().unwrap().is_arrival());
        }
    }

    #[test]
    fn events_dequeue_in_time_order() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(Event::departure(SimTime(9)));
        queue.enqueue(Event::arrival(SimTime(2), 1));
        queue.enqueue(Event::arrival(SimTime(7), 1));
        let times: Vec<u32> = (0..3).map(|_| queue.dequeue().unwrap().time().0).collect();
        assert_eq!(times, vec![2, 7, 9]);
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{SimError, load_customers_reader, read_customers};

    use super::*;

    #[test]
    fn pairs_across_arbitrary_line_structure() {
        let input = "0 5\n2\n3   7 1\n";
        let customers = read_customers(Cursor::new(input)).unwrap();
        assert_eq!(
            customers,
            vec![customer(0, 5), customer(2, 3), customer(7, 1)]
        );
    }

    #[test]
    fn empty_input_is_no_customers() {
        let customers = read_customers(Cursor::new("")).unwrap();
        assert!(customers.is_empty());
    }

    #[test]
    fn odd_value_count_is_a_parse_error() {
        let result = read_customers(Cursor::new("0 5 2"));
        assert!(matches!(result, Err(SimError::Parse(_))));
    }

    #[test]
    fn non_integer_token_is_a_parse_error() {
        let result = read_customers(Cursor::new("0 five"));
        assert!(matches!(result, Err(SimError::Parse(_))));
    }

    #[test]
    fn csv_loads_customers() {
        let csv = "arrival_time,service_duration\n0,5\n2,3\n";
        let customers = load_customers_reader(Cursor::new(csv)).unwrap();
        assert_eq!(customers, vec![customer(0, 5), customer(2, 3)]);
    }

    #[test]
    fn csv_with_bad_field_errors() {
        let csv = "arrival_time,service_duration\n0,soon\n";
        let result = load_customers_reader(Cursor::new(csv));
        assert!(matches!(result, Err(SimError::Csv(_))));
    }
}

// ── Simulation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sim {
    use super::*;

    #[test]
    fn canonical_two_customer_scenario() {
        // Customer A arrives at 0 (5 min service): served immediately,
        // departs at 5.  Customer B arrives at 2: waits in line until A
        // departs, so waits 5 - 2 = 3 and departs at 8.
        let mut sim = BankSim::new();
        sim.load([customer(0, 5), customer(2, 3)]);
        let stats = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(stats.customers, 2);
        assert_eq!(stats.cumulative_wait, 3);
        assert!((stats.average_wait() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn event_sequence_for_canonical_scenario() {
        let mut sim = BankSim::new();
        sim.load([customer(0, 5), customer(2, 3)]);
        let mut recorder = Recorder::default();
        sim.run(&mut recorder).unwrap();
        assert!(recorder.started && recorder.ended);
        assert_eq!(
            recorder.events,
            vec![
                (EventKind::Arrival, 0),
                (EventKind::Arrival, 2),
                (EventKind::Departure, 5),
                (EventKind::Departure, 8),
            ]
        );
    }

    #[test]
    fn transcript_matches_expected_output() {
        let mut sim = BankSim::new();
        sim.load([customer(0, 5), customer(2, 3)]);
        let mut transcript = Transcript::new(Vec::new());
        sim.run(&mut transcript).unwrap();
        assert!(transcript.take_error().is_none());
        let output = String::from_utf8(transcript.into_inner()).unwrap();
        assert_eq!(
            output,
            "Simulation Begins\n\
             Processing an arrival event at time:    0\n\
             Processing an arrival event at time:    2\n\
             Processing a departure event at time:   5\n\
             Processing a departure event at time:   8\n\
             Simulation Ends\n\
             \n\
             Final Statistics:\n\
             \n\
             \x20   Total number of people processed: 2\n\
             \x20   Average amount of time spent waiting: 1.5\n"
        );
    }

    #[test]
    fn spaced_out_customers_never_wait() {
        let mut sim = BankSim::new();
        sim.load([customer(0, 5), customer(10, 3)]);
        let stats = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(stats.customers, 2);
        assert_eq!(stats.cumulative_wait, 0);
        assert_eq!(stats.average_wait(), 0.0);
    }

    #[test]
    fn queue_builds_while_teller_is_busy() {
        // c1 served 1..6; c2 waits 6-2=4, served 6..11; c3 waits 11-4=7.
        let mut sim = BankSim::new();
        sim.load([customer(1, 5), customer(2, 5), customer(4, 5)]);
        let stats = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(stats.customers, 3);
        assert_eq!(stats.cumulative_wait, 11);
    }

    #[test]
    fn unsorted_input_is_ordered_by_the_event_queue() {
        let mut forward = BankSim::new();
        forward.load([customer(1, 2), customer(3, 2), customer(5, 2)]);
        let mut backward = BankSim::new();
        backward.load([customer(5, 2), customer(1, 2), customer(3, 2)]);
        let a = forward.run(&mut NoopObserver).unwrap();
        let b = backward.run(&mut NoopObserver).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_simulation_reports_zero() {
        let mut sim = BankSim::new();
        let mut recorder = Recorder::default();
        let stats = sim.run(&mut recorder).unwrap();
        assert!(recorder.started && recorder.ended);
        assert!(recorder.events.is_empty());
        assert_eq!(stats, SimStats::default());
        assert_eq!(stats.average_wait(), 0.0);
    }

    #[test]
    fn back_to_back_service_has_zero_wait() {
        // c2 arrives exactly when c1 departs; the tie-break processes the
        // arrival first, but the teller is still busy at that instant, so
        // c2 briefly joins the line and is picked up at the departure with
        // zero wait.
        let mut sim = BankSim::new();
        sim.load([customer(0, 5), customer(5, 2)]);
        let stats = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(stats.cumulative_wait, 0);
    }

    #[test]
    fn stats_accessor_tracks_loading() {
        let mut sim = BankSim::new();
        sim.add_customer(customer(0, 1));
        sim.add_customer(customer(1, 1));
        assert_eq!(sim.stats().customers, 2);
        assert_eq!(sim.stats().cumulative_wait, 0);
    }
}

//! Customer input loaders.
//!
//! Two input formats:
//!
//! 1. **Whitespace pairs** ([`read_customers`]) — the classic stream of
//!    integer pairs `(arrival_time, service_duration)`, one pair per
//!    customer, in any line structure, terminated by end of input.
//! 2. **CSV** ([`load_customers_csv`] / [`load_customers_reader`]) — one row
//!    per customer:
//!
//!    ```csv
//!    arrival_time,service_duration
//!    0,5
//!    2,3
//!    ```
//!
//! Both return customers in input order; the simulation's priority queue
//! does the time ordering, so the input need not be sorted by arrival.

use std::io::{BufRead, Read};
use std::path::Path;

use serde::Deserialize;

use bankq_core::SimTime;

use crate::{SimError, SimResult};

/// One customer: when they arrive and how long their transaction takes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Customer {
    pub arrival: SimTime,
    pub service: u32,
}

// ── Whitespace-pair loader ────────────────────────────────────────────────────

/// Read whitespace-separated `(arrival, service)` integer pairs until end of
/// input.
///
/// Fails with [`SimError::Parse`] on a non-integer token or an odd number of
/// values.
pub fn read_customers<R: BufRead>(reader: R) -> SimResult<Vec<Customer>> {
    let mut values: Vec<u32> = Vec::new();
    for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            let value = token
                .parse()
                .map_err(|_| SimError::Parse(format!("expected an integer, got {token:?}")))?;
            values.push(value);
        }
    }
    if values.len() % 2 != 0 {
        return Err(SimError::Parse(format!(
            "odd number of values ({}); input must be (arrival, service) pairs",
            values.len()
        )));
    }
    Ok(values
        .chunks_exact(2)
        .map(|pair| Customer {
            arrival: SimTime(pair[0]),
            service: pair[1],
        })
        .collect())
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CustomerRecord {
    arrival_time:     u32,
    service_duration: u32,
}

/// Load customers from a CSV file with an `arrival_time,service_duration`
/// header.
pub fn load_customers_csv(path: &Path) -> SimResult<Vec<Customer>> {
    let file = std::fs::File::open(path).map_err(SimError::Io)?;
    load_customers_reader(file)
}

/// Like [`load_customers_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_customers_reader<R: Read>(reader: R) -> SimResult<Vec<Customer>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut customers = Vec::new();
    for record in csv_reader.deserialize() {
        let record: CustomerRecord = record?;
        customers.push(Customer {
            arrival: SimTime(record.arrival_time),
            service: record.service_duration,
        });
    }
    Ok(customers)
}

//! `rent-output`: event trace writers for the rental counter simulator.
//!
//! | Backend | Files created                          |
//! |---------|----------------------------------------|
//! | CSV     | `event_trace.csv`, `run_summary.csv`   |
//!
//! Backends implement [`OutputWriter`] and are driven by [`TraceObserver`],
//! which implements `rent_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rent_output::{CsvWriter, TraceObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TraceObserver::new(writer);
//! sim.run_observed(&mut rng, &mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{RunSummaryRow, TraceRow};
pub use writer::OutputWriter;

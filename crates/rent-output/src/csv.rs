//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `event_trace.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, RunSummaryRow, TraceRow};

pub const TRACE_FILE: &str = "event_trace.csv";
pub const SUMMARY_FILE: &str = "run_summary.csv";

/// Writes the event trace and run summary to two CSV files.
pub struct CsvWriter {
    trace:    Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trace = Writer::from_path(dir.join(TRACE_FILE))?;
        trace.write_record([
            "minute",
            "time",
            "event",
            "outcome",
            "returns_at",
            "available_units",
            "pending_returns",
        ])?;

        let mut summary = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summary.write_record([
            "total_units",
            "interval_minutes",
            "total_clients",
            "unsatisfied_clients",
            "events_processed",
        ])?;

        Ok(Self {
            trace,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_event(&mut self, row: &TraceRow) -> OutputResult<()> {
        self.trace.write_record([
            row.minute.to_string().as_str(),
            row.time.as_str(),
            row.event,
            row.outcome,
            row.returns_at.as_deref().unwrap_or(""),
            row.available_units.to_string().as_str(),
            row.pending_returns.to_string().as_str(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.total_units.to_string(),
            row.interval_minutes.to_string(),
            row.total_clients.to_string(),
            row.unsatisfied_clients.to_string(),
            row.events_processed.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trace.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}

//! `TraceObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use rent_queue::{Event, EventKind, EventQueue};
use rent_sim::{Counter, EventOutcome, RunOutcome, SimObserver, SimParams};

use crate::row::{RunSummaryRow, TraceRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one row per dispatched event, then a
/// summary row, to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: OutputWriter> {
    writer:           W,
    total_units:      u32,
    interval_minutes: u32,
    last_error:       Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            total_units:      0,
            interval_minutes: 0,
            last_error:       None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TraceObserver<W> {
    fn on_run_start(&mut self, params: &SimParams, _seeded: usize) {
        self.total_units = params.total_units;
        self.interval_minutes = params.arrival_interval.as_minutes();
    }

    fn on_event(&mut self, event: &Event, outcome: EventOutcome, counter: &Counter, queue: &EventQueue) {
        let returns_at = match outcome {
            EventOutcome::Rented { returns_at } => Some(returns_at.to_string()),
            _ => None,
        };
        let row = TraceRow {
            minute:          event.time().0,
            time:            event.time().to_string(),
            event:           event.kind().as_str(),
            outcome:         outcome.label(),
            returns_at,
            available_units: counter.available(),
            pending_returns: queue.pending(EventKind::UnitReturned) as u64,
        };
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, outcome: &RunOutcome) {
        let row = RunSummaryRow {
            total_units:         self.total_units,
            interval_minutes:    self.interval_minutes,
            total_clients:       outcome.total_clients,
            unsatisfied_clients: outcome.unsatisfied_clients,
            events_processed:    outcome.events_processed,
        };
        let result = self.writer.write_summary(&row);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}

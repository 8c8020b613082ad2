//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, RunSummaryRow, TraceRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with [`TraceObserver::take_error`][crate::TraceObserver::take_error].
pub trait OutputWriter {
    /// Write one event row.
    fn write_event(&mut self, row: &TraceRow) -> OutputResult<()>;

    /// Write the end-of-day summary row.
    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

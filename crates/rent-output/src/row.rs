//! Plain data row types written by output backends.

/// One dispatched event and the counter state right after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRow {
    /// Event time, minutes since 00:00.
    pub minute:          u32,
    /// Event time as `HH:MM`.
    pub time:            String,
    pub event:           &'static str,
    pub outcome:         &'static str,
    /// Scheduled return time (`HH:MM`) for a rental; `None` otherwise.
    pub returns_at:      Option<String>,
    pub available_units: u32,
    pub pending_returns: u64,
}

/// Totals for one simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummaryRow {
    pub total_units:         u32,
    pub interval_minutes:    u32,
    pub total_clients:       u32,
    pub unsatisfied_clients: u32,
    pub events_processed:    u64,
}

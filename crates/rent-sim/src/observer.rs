//! Simulation observer trait for tracing and data collection.

use rent_core::SimTime;
use rent_queue::{Event, EventQueue};

use crate::{Counter, RunOutcome, SimParams};

/// Result of dispatching one event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// An arrival took a unit; its return is scheduled at `returns_at`.
    Rented { returns_at: SimTime },
    /// An arrival found no unit available.
    TurnedAway,
    /// A unit came back to the counter.
    Returned,
}

impl EventOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            EventOutcome::Rented { .. } => "rented",
            EventOutcome::TurnedAway    => "turned_away",
            EventOutcome::Returned      => "returned",
        }
    }
}

/// Callbacks invoked by [`Simulator::run_observed`][crate::Simulator::run_observed].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SimObserver {
    /// Called once the arrivals are seeded, before the first dispatch.
    fn on_run_start(&mut self, _params: &SimParams, _seeded: usize) {}

    /// Called after each event has been applied.
    ///
    /// `counter` and `queue` reflect the state *after* the transition,
    /// including any return the event scheduled.
    fn on_event(
        &mut self,
        _event:   &Event,
        _outcome: EventOutcome,
        _counter: &Counter,
        _queue:   &EventQueue,
    ) {}

    /// Called once the queue has drained.
    fn on_run_end(&mut self, _outcome: &RunOutcome) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

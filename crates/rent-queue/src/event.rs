//! A single scheduled occurrence on the simulated day.

use std::cmp::Ordering;
use std::fmt;

use rent_core::SimTime;

/// What happens when an event is dispatched.  Closed set.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A client walks up to the counter wanting a unit.
    ClientArrival,
    /// A rented unit comes back and is available again.
    UnitReturned,
}

impl EventKind {
    /// Stable snake_case name, used in logs and trace files.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::ClientArrival => "client_arrival",
            EventKind::UnitReturned  => "unit_returned",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A timestamped event.  Fields are fixed at construction.
///
/// `Ord` looks at `time` only, so two events at the same instant compare
/// `Equal` regardless of kind.  Tie order is decided by the queue.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    time: SimTime,
    kind: EventKind,
}

impl Event {
    #[inline]
    pub fn new(time: SimTime, kind: EventKind) -> Self {
        Self { time, kind }
    }

    #[inline]
    pub fn arrival(time: SimTime) -> Self {
        Self::new(time, EventKind::ClientArrival)
    }

    #[inline]
    pub fn returned(time: SimTime) -> Self {
        Self::new(time, EventKind::UnitReturned)
    }

    #[inline]
    pub fn time(&self) -> SimTime {
        self.time
    }

    #[inline]
    pub fn kind(&self) -> EventKind {
        self.kind
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time
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
        self.time.cmp(&other.time)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.kind, self.time)
    }
}

//! `EventQueue`: the simulation timeline.
//!
//! Events are bucketed by timestamp: `BTreeMap` keeps the buckets sorted and
//! each bucket is a FIFO.  Pop is O(log W) where W is the number of distinct
//! pending instants.  For a day at 10-minute spacing W stays below ~60.

use std::collections::{BTreeMap, VecDeque};

use rent_core::SimTime;

use crate::{Event, EventKind};

/// A priority queue of events, earliest first, FIFO within one instant.
#[derive(Default, Debug)]
pub struct EventQueue {
    inner: BTreeMap<SimTime, VecDeque<Event>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
    /// Cached count of pending `UnitReturned` events.
    returns: usize,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` at its own timestamp.
    ///
    /// An event pushed at an instant that already has pending events is
    /// dispatched after them.
    pub fn push(&mut self, event: Event) {
        self.inner.entry(event.time()).or_default().push_back(event);
        self.total += 1;
        if event.kind() == EventKind::UnitReturned {
            self.returns += 1;
        }
    }

    /// Remove and return the earliest event, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<Event> {
        let mut bucket = self.inner.first_entry()?;
        let event = bucket.get_mut().pop_front();
        if bucket.get().is_empty() {
            bucket.remove();
        }
        let event = event?;
        self.total -= 1;
        if event.kind() == EventKind::UnitReturned {
            self.returns -= 1;
        }
        Some(event)
    }

    /// The earliest instant with at least one queued event.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.inner.keys().next().copied()
    }

    /// Number of queued events of `kind`.
    pub fn pending(&self, kind: EventKind) -> usize {
        match kind {
            EventKind::UnitReturned  => self.returns,
            EventKind::ClientArrival => self.total - self.returns,
        }
    }

    /// Iterate the queued events in dispatch order without removing them.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.inner.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct future instants that have at least one event.
    pub fn instant_count(&self) -> usize {
        self.inner.len()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
        self.total = 0;
        self.returns = 0;
    }
}

//! Unit tests for rent-queue.

use rent_core::{SimDuration, SimTime};

use crate::{Event, EventKind, EventQueue};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn at(hour: u32, minute: u32) -> SimTime {
    SimTime::hm(hour, minute).unwrap()
}

// ── Event ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod event {
    use std::cmp::Ordering;

    use super::*;

    #[test]
    fn accessors() {
        let e = Event::new(at(8, 0), EventKind::ClientArrival);
        assert_eq!(e.time(), at(8, 0));
        assert_eq!(e.kind(), EventKind::ClientArrival);
        assert_eq!(Event::returned(at(9, 0)).kind(), EventKind::UnitReturned);
    }

    #[test]
    fn ordering_uses_time_only() {
        let early = Event::returned(at(8, 0));
        let late  = Event::arrival(at(8, 10));
        assert_eq!(early.cmp(&late), Ordering::Less);
        assert_eq!(late.cmp(&early), Ordering::Greater);
        // Same instant, different kinds: equal for ordering purposes.
        assert_eq!(Event::arrival(at(9, 0)).cmp(&Event::returned(at(9, 0))), Ordering::Equal);
    }

    #[test]
    fn display() {
        assert_eq!(Event::arrival(at(8, 0)).to_string(), "client_arrival @ 08:00");
        assert_eq!(EventKind::UnitReturned.to_string(), "unit_returned");
    }
}

// ── EventQueue ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use super::*;

    #[test]
    fn empty_queue() {
        let mut q = EventQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert!(q.peek_time().is_none());
        assert!(q.pop().is_none());
    }

    #[test]
    fn pops_in_time_order() {
        let mut q = EventQueue::new();
        q.push(Event::arrival(at(10, 0)));
        q.push(Event::arrival(at(8, 0)));
        q.push(Event::returned(at(9, 0)));

        assert_eq!(q.peek_time(), Some(at(8, 0)));
        let times: Vec<SimTime> = std::iter::from_fn(|| q.pop()).map(|e| e.time()).collect();
        assert_eq!(times, vec![at(8, 0), at(9, 0), at(10, 0)]);
        assert!(q.is_empty());
    }

    #[test]
    fn same_instant_is_fifo() {
        let mut q = EventQueue::new();
        q.push(Event::arrival(at(11, 0)));
        q.push(Event::returned(at(11, 0)));
        q.push(Event::arrival(at(11, 0)));

        let kinds: Vec<EventKind> = std::iter::from_fn(|| q.pop()).map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![EventKind::ClientArrival, EventKind::UnitReturned, EventKind::ClientArrival]
        );
    }

    #[test]
    fn push_during_drain_is_ordered() {
        // A return scheduled while draining slots between later arrivals.
        let mut q = EventQueue::new();
        q.push(Event::arrival(at(8, 0)));
        q.push(Event::arrival(at(10, 0)));

        let first = q.pop().unwrap();
        q.push(Event::returned(first.time() + SimDuration::hours(1)));

        assert_eq!(q.pop().unwrap().kind(), EventKind::UnitReturned);
        assert_eq!(q.pop().unwrap().time(), at(10, 0));
    }

    #[test]
    fn counts_track_push_and_pop() {
        let mut q = EventQueue::new();
        q.push(Event::arrival(at(8, 0)));
        q.push(Event::arrival(at(8, 0)));
        q.push(Event::returned(at(9, 0)));

        assert_eq!(q.len(), 3);
        assert_eq!(q.instant_count(), 2);
        assert_eq!(q.pending(EventKind::ClientArrival), 2);
        assert_eq!(q.pending(EventKind::UnitReturned), 1);

        q.pop();
        q.pop();
        assert_eq!(q.instant_count(), 1);
        assert_eq!(q.pending(EventKind::ClientArrival), 0);
        assert_eq!(q.pending(EventKind::UnitReturned), 1);
    }

    #[test]
    fn iter_matches_pop_order() {
        let mut q = EventQueue::new();
        q.push(Event::returned(at(12, 0)));
        q.push(Event::arrival(at(8, 30)));
        q.push(Event::arrival(at(12, 0)));

        let peeked: Vec<(SimTime, EventKind)> = q.iter().map(|e| (e.time(), e.kind())).collect();
        let popped: Vec<(SimTime, EventKind)> =
            std::iter::from_fn(|| q.pop()).map(|e| (e.time(), e.kind())).collect();
        assert_eq!(peeked, popped);
    }

    #[test]
    fn clear_resets_everything() {
        let mut q = EventQueue::new();
        q.push(Event::returned(at(9, 0)));
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.pending(EventKind::UnitReturned), 0);
        assert_eq!(q.instant_count(), 0);
    }
}

//! The `Simulator` and its event loop.

use rent_core::{SimDuration, SimTime, UniformSource};
use rent_queue::{Event, EventKind, EventQueue};
use tracing::{debug, info};

use crate::{Counter, EventOutcome, NoopObserver, SimError, SimObserver, SimParams, SimResult};
use crate::travel::draw_travel;

// ── RunOutcome ────────────────────────────────────────────────────────────────

/// Counters produced by one simulated day.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Every client that arrived, served or not.
    pub total_clients: u32,
    /// Clients that arrived while no unit was available.
    pub unsatisfied_clients: u32,
    /// Events popped from the queue (arrivals + returns).
    pub events_processed: u64,
}

impl RunOutcome {
    /// Clients that left with a unit.
    #[inline]
    pub fn satisfied_clients(&self) -> u32 {
        self.total_clients - self.unsatisfied_clients
    }
}

// ── Simulator ─────────────────────────────────────────────────────────────────

/// Rental counter simulator.
///
/// Holds the parameters between runs and the outcome of the most recent run.
/// All per-run state (queue, counter, accumulators) is created fresh inside
/// [`run`][Self::run], so consecutive runs never observe each other.
#[derive(Clone, Debug, Default)]
pub struct Simulator {
    params: SimParams,
    last:   RunOutcome,
}

impl Simulator {
    /// A simulator with default parameters (10 units, 10-minute arrivals,
    /// open 08:00–17:00).
    pub fn new() -> Self {
        Self::default()
    }

    /// A simulator with explicit, validated parameters.
    pub fn with_params(params: SimParams) -> SimResult<Self> {
        params.validate()?;
        Ok(Self { params, last: RunOutcome::default() })
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    // ── Parameter setters ─────────────────────────────────────────────────
    //
    // Each setter validates before committing; on error the previous
    // parameters stay in place.

    /// Set the number of units.  Negative counts are rejected.
    pub fn set_num_units(&mut self, units: i64) -> SimResult<()> {
        let units = u32::try_from(units).map_err(|_| {
            SimError::InvalidConfiguration(format!(
                "unit count must be between 0 and {}, got {units}",
                u32::MAX
            ))
        })?;
        self.params.total_units = units;
        Ok(())
    }

    /// Set the spacing between arrivals.  Zero is rejected.
    pub fn set_arrival_interval(&mut self, interval: SimDuration) -> SimResult<()> {
        self.update(|p| p.arrival_interval = interval)
    }

    /// Set the window in which clients arrive.
    pub fn set_opening_hours(&mut self, opening: SimTime, closing: SimTime) -> SimResult<()> {
        self.update(|p| {
            p.opening = opening;
            p.closing = closing;
        })
    }

    fn update(&mut self, f: impl FnOnce(&mut SimParams)) -> SimResult<()> {
        let mut next = self.params.clone();
        f(&mut next);
        next.validate()?;
        self.params = next;
        Ok(())
    }

    // ── Results of the last run ───────────────────────────────────────────

    /// Clients seen in the last run.  Zero before the first run.
    pub fn total_clients(&self) -> u32 {
        self.last.total_clients
    }

    /// Clients turned away in the last run.  Zero before the first run.
    pub fn unsatisfied_clients(&self) -> u32 {
        self.last.unsatisfied_clients
    }

    pub fn last_outcome(&self) -> RunOutcome {
        self.last
    }

    // ── Run ───────────────────────────────────────────────────────────────

    /// Simulate one day, drawing travel durations from `source`.
    pub fn run<S: UniformSource + ?Sized>(&mut self, source: &mut S) -> RunOutcome {
        self.run_observed(source, &mut NoopObserver)
    }

    /// Simulate one day and report every dispatched event to `observer`.
    pub fn run_observed<S, O>(&mut self, source: &mut S, observer: &mut O) -> RunOutcome
    where
        S: UniformSource + ?Sized,
        O: SimObserver,
    {
        self.last = simulate_day(&self.params, source, observer);
        self.last
    }
}

// ── Seeding ───────────────────────────────────────────────────────────────────

/// Push the day's client arrivals into `queue` and return how many there are.
///
/// Arrivals fall at `opening`, `opening + Δ`, `opening + 2Δ`, … strictly
/// before `closing`.  The first arrival is pushed before the bound is
/// checked, so the counter always sees a client at opening time.
pub fn seed_arrivals(params: &SimParams, queue: &mut EventQueue) -> usize {
    let mut seeded = 0;
    let mut at = params.opening;
    loop {
        queue.push(Event::arrival(at));
        seeded += 1;
        match at.checked_add(params.arrival_interval) {
            Some(next) if next < params.closing && next > at => at = next,
            _ => break,
        }
    }
    seeded
}

// ── Drain loop ────────────────────────────────────────────────────────────────

fn simulate_day<S, O>(params: &SimParams, source: &mut S, observer: &mut O) -> RunOutcome
where
    S: UniformSource + ?Sized,
    O: SimObserver,
{
    let mut queue   = EventQueue::new();
    let mut counter = Counter::full(params.total_units);
    let mut outcome = RunOutcome::default();

    let seeded = seed_arrivals(params, &mut queue);
    info!(
        units    = params.total_units,
        interval = %params.arrival_interval,
        opening  = %params.opening,
        closing  = %params.closing,
        seeded,
        "starting simulated day"
    );
    observer.on_run_start(params, seeded);

    while let Some(event) = queue.pop() {
        outcome.events_processed += 1;
        let result = dispatch(event, &mut counter, &mut queue, &mut outcome, source);

        debug!(
            time      = %event.time(),
            kind      = %event.kind(),
            outcome   = result.label(),
            available = counter.available(),
            pending   = queue.len(),
            "event dispatched"
        );
        observer.on_event(&event, result, &counter, &queue);
    }

    debug_assert_eq!(counter.available(), counter.capacity(), "units still out after drain");
    info!(
        total_clients       = outcome.total_clients,
        unsatisfied_clients = outcome.unsatisfied_clients,
        events              = outcome.events_processed,
        "simulated day finished"
    );
    observer.on_run_end(&outcome);
    outcome
}

/// Apply one event to the world state and accumulators.
///
/// Only a successful rental inserts into the queue, and never an arrival,
/// so the drain loop terminates once the seeded arrivals are exhausted.
fn dispatch<S: UniformSource + ?Sized>(
    event:   Event,
    counter: &mut Counter,
    queue:   &mut EventQueue,
    outcome: &mut RunOutcome,
    source:  &mut S,
) -> EventOutcome {
    match event.kind() {
        EventKind::ClientArrival => {
            outcome.total_clients += 1;
            if counter.rent() {
                let returns_at = event.time() + draw_travel(source);
                queue.push(Event::returned(returns_at));
                EventOutcome::Rented { returns_at }
            } else {
                outcome.unsatisfied_clients += 1;
                EventOutcome::TurnedAway
            }
        }
        EventKind::UnitReturned => {
            counter.give_back();
            EventOutcome::Returned
        }
    }
}

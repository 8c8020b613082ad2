//! `rent-sim`: the discrete-event engine for a single rental counter.
//!
//! # Run loop
//!
//! ```text
//! seed:   push ClientArrival at opening, opening + Δ, … while < closing
//! drain:  pop earliest event until the queue is empty
//!   ClientArrival → total += 1
//!                   unit free? rent it, push UnitReturned at now + travel
//!                   otherwise  unsatisfied += 1
//!   UnitReturned  → available += 1
//! ```
//!
//! Every run allocates a fresh queue and counter, so a [`Simulator`] can be
//! reused with different parameters without carrying state between days.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rent_core::SimRng;
//! use rent_sim::Simulator;
//!
//! let mut sim = Simulator::new();
//! sim.set_num_units(12)?;
//! let outcome = sim.run(&mut SimRng::new(42));
//! println!("{} clients, {} unsatisfied", outcome.total_clients, outcome.unsatisfied_clients);
//! ```

pub mod error;
pub mod observer;
pub mod params;
pub mod sim;
pub mod travel;
pub mod world;


pub use error::{SimError, SimResult};
pub use observer::{EventOutcome, NoopObserver, SimObserver};
pub use params::SimParams;
pub use sim::{RunOutcome, Simulator, seed_arrivals};
pub use travel::{draw_travel, travel_duration};
pub use world::Counter;

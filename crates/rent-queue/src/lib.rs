//! `rent-queue`: events and the ordered timeline they are drawn from.
//!
//! # Crate layout
//!
//! | Module    | Contents                                           |
//! |-----------|----------------------------------------------------|
//! | [`event`] | `Event`, `EventKind`                               |
//! | [`queue`] | `EventQueue` (`BTreeMap<SimTime, VecDeque<Event>>`) |
//!
//! # Ordering model (summary)
//!
//! ```text
//! pop order   = ascending time
//! same instant = insertion order (FIFO)
//! ```
//!
//! The simulator seeds every arrival before it starts draining, so a return
//! scheduled for the same instant as an arrival is always dispatched after it.

pub mod event;
pub mod queue;

#[cfg(test)]
mod tests;

pub use event::{Event, EventKind};
pub use queue::EventQueue;

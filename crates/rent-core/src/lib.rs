//! `rent-core`: foundational types for the rental counter simulator.
//!
//! This crate is a dependency of every other `rent-*` crate.  It has no
//! `rent-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`time`]   | `SimTime`, `SimDuration`                              |
//! | [`rng`]    | `UniformSource`, `SimRng`, `ScriptedSource`           |
//! | [`error`]  | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `SimTime`/`SimDuration`. |

pub mod error;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use rng::{ScriptedSource, SimRng, UniformSource};
pub use time::{SimDuration, SimTime};

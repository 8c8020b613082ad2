//! Simulation parameters and their validation.

use rent_core::{SimDuration, SimTime};

use crate::{SimError, SimResult};

/// Parameters for one simulated day at the counter.
///
/// Typically built from defaults and adjusted through the
/// [`Simulator`][crate::Simulator] setters, or loaded from a JSON file by
/// the driver (with the `serde` feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimParams {
    /// Number of interchangeable units the counter starts the day with.
    pub total_units: u32,

    /// Fixed spacing between successive client arrivals.  Must be non-zero.
    pub arrival_interval: SimDuration,

    /// First arrival happens here.
    pub opening: SimTime,

    /// No arrival is scheduled at or after this time.  Returns may still
    /// land later.
    pub closing: SimTime,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            total_units:      10,
            arrival_interval: SimDuration::minutes(10),
            opening:          SimTime(8 * 60),
            closing:          SimTime(17 * 60),
        }
    }
}

impl SimParams {
    /// Reject parameters that would make seeding loop forever or describe an
    /// empty or inverted day.
    pub fn validate(&self) -> SimResult<()> {
        if self.arrival_interval.is_zero() {
            return Err(SimError::InvalidConfiguration(
                "arrival interval must be positive".into(),
            ));
        }
        if self.closing <= self.opening {
            return Err(SimError::InvalidConfiguration(format!(
                "closing time {} must be after opening time {}",
                self.closing, self.opening
            )));
        }
        if self.closing > SimTime::END_OF_DAY {
            return Err(SimError::InvalidConfiguration(format!(
                "closing time {} is past the end of the day",
                self.closing
            )));
        }
        Ok(())
    }

    /// Number of arrivals a run with these parameters seeds.
    ///
    /// Depends only on opening, closing and interval, never on randomness.
    pub fn expected_arrivals(&self) -> usize {
        if self.arrival_interval.is_zero() || self.closing <= self.opening {
            return 1;
        }
        let span = self.closing.since(self.opening).as_minutes();
        span.div_ceil(self.arrival_interval.as_minutes()) as usize
    }
}

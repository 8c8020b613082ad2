//! Simulated time-of-day model.
//!
//! # Design
//!
//! Time is an integer count of minutes since 00:00 of the simulated day.
//! Minute resolution is all the counter model needs, and integer arithmetic
//! keeps every schedule computation exact.
//!
//! The axis does not wrap at midnight.  A unit returned three hours after a
//! late arrival lands at e.g. `25:10`, which still sorts after everything
//! that happened earlier in the day.

use std::fmt;
use std::ops::Add;

use crate::{CoreError, CoreResult};

const MINUTES_PER_HOUR: u32 = 60;

// ── SimDuration ───────────────────────────────────────────────────────────────

/// A non-negative span of simulated time, in minutes.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimDuration(pub u32);

impl SimDuration {
    pub const ZERO: SimDuration = SimDuration(0);

    #[inline]
    pub const fn minutes(n: u32) -> Self {
        SimDuration(n)
    }

    #[inline]
    pub const fn hours(n: u32) -> Self {
        SimDuration(n * MINUTES_PER_HOUR)
    }

    #[inline]
    pub fn as_minutes(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for SimDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m) = (self.0 / MINUTES_PER_HOUR, self.0 % MINUTES_PER_HOUR);
        match (h, m) {
            (0, m) => write!(f, "{m}m"),
            (h, 0) => write!(f, "{h}h"),
            (h, m) => write!(f, "{h}h{m:02}m"),
        }
    }
}

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute point on the simulated day, in minutes since 00:00.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u32);

impl SimTime {
    /// End of the simulated day (24:00).  Valid as a closing time.
    pub const END_OF_DAY: SimTime = SimTime(24 * MINUTES_PER_HOUR);

    /// Build a time of day from wall-clock components.
    ///
    /// Fails for `hour > 23` or `minute > 59`.
    pub fn hm(hour: u32, minute: u32) -> CoreResult<Self> {
        if hour >= 24 || minute >= MINUTES_PER_HOUR {
            return Err(CoreError::InvalidTime { hour, minute });
        }
        Ok(SimTime(hour * MINUTES_PER_HOUR + minute))
    }

    #[inline]
    pub fn hour(self) -> u32 {
        self.0 / MINUTES_PER_HOUR
    }

    #[inline]
    pub fn minute(self) -> u32 {
        self.0 % MINUTES_PER_HOUR
    }

    /// `self + d`, or `None` if the minute counter would overflow.
    #[inline]
    pub fn checked_add(self, d: SimDuration) -> Option<SimTime> {
        self.0.checked_add(d.0).map(SimTime)
    }

    /// Span from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> SimDuration {
        SimDuration(self.0 - earlier.0)
    }
}

impl Add<SimDuration> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: SimDuration) -> SimTime {
        SimTime(self.0 + rhs.0)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

//! Rental travel-duration distribution.

use rent_core::{SimDuration, UniformSource};

/// Map a uniform draw in `[0, 1)` to a travel duration of 1, 2 or 3 hours,
/// each with probability 1/3.
///
/// `u < 1/3` → 1h, `u < 2/3` → 2h, otherwise 3h.
pub fn travel_duration(u: f64) -> SimDuration {
    if u < 1.0 / 3.0 {
        SimDuration::hours(1)
    } else if u < 2.0 / 3.0 {
        SimDuration::hours(2)
    } else {
        SimDuration::hours(3)
    }
}

/// Draw one travel duration from `source`.
#[inline]
pub fn draw_travel<S: UniformSource + ?Sized>(source: &mut S) -> SimDuration {
    travel_duration(source.next_unit())
}

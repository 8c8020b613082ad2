//! World state: the pool of units at the counter.

/// Units currently available at the counter, out of a fixed capacity.
///
/// `0 <= available <= capacity` holds for the whole run.  `rent` refuses to
/// go below zero; `give_back` relies on every return matching an earlier
/// rental, which the engine guarantees by scheduling exactly one return per
/// successful `rent`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counter {
    capacity:  u32,
    available: u32,
}

impl Counter {
    /// A counter with every unit in stock.
    pub fn full(capacity: u32) -> Self {
        Self { capacity, available: capacity }
    }

    /// Take one unit if any is free.  Returns whether the rental happened.
    #[inline]
    pub fn rent(&mut self) -> bool {
        if self.available == 0 {
            return false;
        }
        self.available -= 1;
        true
    }

    /// Put one rented unit back.
    ///
    /// # Panics
    /// Panics in debug mode if no unit is currently out.
    #[inline]
    pub fn give_back(&mut self) {
        debug_assert!(
            self.available < self.capacity,
            "unit returned to a full counter ({}/{})",
            self.available,
            self.capacity
        );
        self.available += 1;
    }

    #[inline]
    pub fn available(&self) -> u32 {
        self.available
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Units currently out with clients.
    #[inline]
    pub fn rented(&self) -> u32 {
        self.capacity.saturating_sub(self.available)
    }
}

//! Per-side countdown clock with a per-move increment
//!
//! The clock is a pure counter: it has no notion of wall time and only
//! changes when the owner calls [`Clock::tick`] or
//! [`Clock::add_increment`]. The external scheduler is expected to tick
//! once per real-time second.

use blitzchess_base::types::Color;

/// Remaining thinking time for both sides, in whole seconds
///
/// Totals and increments are accepted as given: a zero or negative total
/// simply produces a clock that expires on the first tick, and a
/// non-positive increment adds nothing.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Clock {
    remaining: [i64; 2],
    increment: i64,
}

impl Clock {
    pub const fn new(total_secs: i64, increment_secs: i64) -> Clock {
        Clock {
            remaining: [total_secs; 2],
            increment: increment_secs,
        }
    }

    /// Returns the remaining time of color `c` in seconds
    #[inline]
    pub const fn remaining(&self, c: Color) -> i64 {
        self.remaining[c.index()]
    }

    /// Returns the per-move increment in seconds
    #[inline]
    pub const fn increment(&self) -> i64 {
        self.increment
    }

    /// Returns `true` if the flag of color `c` has fallen
    #[inline]
    pub const fn is_expired(&self, c: Color) -> bool {
        self.remaining(c) <= 0
    }

    /// Removes one second from color `c` and reports whether its flag
    /// has now fallen
    pub fn tick(&mut self, c: Color) -> bool {
        self.remaining[c.index()] -= 1;
        self.is_expired(c)
    }

    /// Credits the per-move increment to color `c`
    pub fn add_increment(&mut self, c: Color) {
        self.remaining[c.index()] += self.increment;
    }
}

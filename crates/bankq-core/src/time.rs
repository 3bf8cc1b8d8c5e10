//! Simulation time model.
//!
//! Time is a monotonically increasing integer minute counter.  Using an
//! integer as the canonical time unit keeps all schedule arithmetic exact
//! (no floating-point drift) and comparisons O(1).  The unit itself is
//! nominal: the simulation only ever compares times and takes differences,
//! so "minute" can be read as any fixed tick the input data uses.

use std::fmt;

/// An absolute simulation timestamp.
///
/// `u32` is plenty: input times are small non-negative integers and the only
/// arithmetic is adding a service duration or subtracting an earlier time.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u32);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// Return the time `n` units after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> SimTime {
        SimTime(self.0 + n)
    }

    /// Time elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u32 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u32> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u32) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: SimTime) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Random implementations.

use std::ops::RangeInclusive;

use crate::infrastructure::ports::RandomPort;

/// System random - uses real randomness.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        use rand::Rng;
        if min >= max {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Draws from a `u32` range through a port that works in `i32`.
///
/// Results outside the range fall back to its start.
pub fn roll_in(random: &dyn RandomPort, range: RangeInclusive<u32>) -> u32 {
    let (start, end) = range.into_inner();
    let min = i32::try_from(start).unwrap_or(i32::MAX);
    let max = i32::try_from(end).unwrap_or(i32::MAX);
    u32::try_from(random.gen_range(min, max))
        .ok()
        .filter(|value| (start..=end).contains(value))
        .unwrap_or(start)
}

/// Fixed random for testing.
#[cfg(test)]
pub struct FixedRandom(pub i32);

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn gen_range(&self, _min: i32, _max: i32) -> i32 {
        self.0
    }
}

//! Egg clutch value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::error::DomainError;

/// Smallest clutch a bird lays
pub const MIN_CLUTCH: u32 = 1;
/// Largest clutch a bird lays
pub const MAX_CLUTCH: u32 = 4;

/// A batch of eggs, always between [`MIN_CLUTCH`] and [`MAX_CLUTCH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct EggClutch {
    count: u32,
}

impl EggClutch {
    /// The closed range a clutch size is drawn from.
    pub fn range() -> RangeInclusive<u32> {
        MIN_CLUTCH..=MAX_CLUTCH
    }

    /// Builds a clutch from a roll; out-of-range rolls are clamped.
    pub fn from_roll(roll: u32) -> Self {
        Self {
            count: roll.clamp(MIN_CLUTCH, MAX_CLUTCH),
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl TryFrom<u32> for EggClutch {
    type Error = DomainError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        if !Self::range().contains(&count) {
            return Err(DomainError::validation(format!(
                "Egg clutch must hold {}..={} eggs, got {}",
                MIN_CLUTCH, MAX_CLUTCH, count
            )));
        }
        Ok(Self { count })
    }
}

impl From<EggClutch> for u32 {
    fn from(clutch: EggClutch) -> u32 {
        clutch.count
    }
}

impl fmt::Display for EggClutch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Here are(is) {} eggs for you", self.count)
    }
}

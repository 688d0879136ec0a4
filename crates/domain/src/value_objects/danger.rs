//! Danger level and the attack stance it implies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer severity used by `attack()` to pick a stance.
///
/// Levels below [`DangerLevel::ATTACK_THRESHOLD`] are peaceful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DangerLevel(u8);

impl DangerLevel {
    /// Plain animals and birds
    pub const HARMLESS: DangerLevel = DangerLevel(0);
    /// Aquatic animals are slightly dangerous
    pub const AQUATIC: DangerLevel = DangerLevel(3);
    /// Poisonous animals are very dangerous
    pub const POISONOUS: DangerLevel = DangerLevel(8);
    /// Lowest level at which an animal attacks
    pub const ATTACK_THRESHOLD: DangerLevel = DangerLevel(5);

    pub const fn new(level: u8) -> Self {
        Self(level)
    }

    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Peaceful below the threshold, attacking at or above it.
    pub fn stance(&self) -> Stance {
        if *self < Self::ATTACK_THRESHOLD {
            Stance::Peaceful
        } else {
            Stance::Attacking
        }
    }
}

/// How an animal reacts when provoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stance {
    Peaceful,
    Attacking,
}

impl Stance {
    pub fn is_attacking(&self) -> bool {
        matches!(self, Self::Attacking)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Peaceful => "Sorry, i'm peaceful :)",
            Self::Attacking => "Be careful, i'm attacking you 0_0",
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

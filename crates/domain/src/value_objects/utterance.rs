//! What an animal says when asked to speak.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Utterance {
    Sound(&'static str),
    Silent,
}

impl Utterance {
    /// Builds an utterance from an optional sound; empty sounds count as silence.
    pub fn from_sound(sound: Option<&'static str>) -> Self {
        match sound {
            Some(s) if !s.is_empty() => Self::Sound(s),
            _ => Self::Silent,
        }
    }

    pub fn is_silent(&self) -> bool {
        matches!(self, Self::Silent)
    }
}

impl fmt::Display for Utterance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sound(s) => f.write_str(s),
            Self::Silent => f.write_str("This animal is silent."),
        }
    }
}

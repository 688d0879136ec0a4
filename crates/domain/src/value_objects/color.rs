//! RGB color value object
//!
//! Valid by construction: every channel is a `u8`, so a stored color can
//! never leave 0..=255. Untrusted integer input goes through [`Rgb::new`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// An RGB color with channels in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "[i64; 3]", into = "[u8; 3]")]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    /// Create a color from untrusted integer channels.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidColor` if any channel is outside 0..=255.
    pub fn new(r: i64, g: i64, b: i64) -> Result<Self, DomainError> {
        match (u8::try_from(r), u8::try_from(g), u8::try_from(b)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self { r, g, b }),
            _ => Err(DomainError::invalid_color(r, g, b)),
        }
    }

    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_channels(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_channels(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> [u8; 3] {
        color.channels()
    }
}

impl TryFrom<[i64; 3]> for Rgb {
    type Error = DomainError;

    fn try_from([r, g, b]: [i64; 3]) -> Result<Self, Self::Error> {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_channel_bounds() {
        assert_eq!(Rgb::new(0, 0, 0).unwrap().channels(), [0, 0, 0]);
        assert_eq!(Rgb::new(255, 255, 255).unwrap().channels(), [255, 255, 255]);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            Rgb::new(300, 70, 15),
            Err(DomainError::InvalidColor {
                r: 300,
                g: 70,
                b: 15
            })
        );
        assert!(Rgb::new(10, -1, 15).is_err());
        assert!(Rgb::new(10, 1, 256).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::from_channels(55, 66, 77).to_string(), "[55, 66, 77]");
    }

    #[test]
    fn test_serde_validates_on_deserialize() {
        let color: Rgb = serde_json::from_str("[222, 35, 130]").unwrap();
        assert_eq!(color, Rgb::from_channels(222, 35, 130));
        assert_eq!(serde_json::to_string(&color).unwrap(), "[222,35,130]");
        assert!(serde_json::from_str::<Rgb>("[300, 70, 15]").is_err());
    }
}

//! Position value object - an animal's location in 3D space.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in space. `z` is height above the floor and is kept non-negative
/// by the movement guards in `AnimalBody`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Where every animal starts.
    pub const ORIGIN: Position = Position {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the position shifted by `(dx, dy, dz)`, each delta multiplied by `scale`.
    pub fn offset(&self, dx: f64, dy: f64, dz: f64, scale: f64) -> Self {
        Self {
            x: self.x + dx * scale,
            y: self.y + dy * scale,
            z: self.z + dz * scale,
        }
    }

    /// Returns the same position at a different height.
    pub fn with_z(&self, z: f64) -> Self {
        Self { z, ..*self }
    }

    /// Coordinates as an `[x, y, z]` array.
    pub fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<(f64, f64, f64)> for Position {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {} Y: {} Z: {}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_default() {
        assert_eq!(Position::default(), Position::ORIGIN);
    }

    #[test]
    fn test_offset_scales_every_axis() {
        let moved = Position::ORIGIN.offset(1.0, 2.0, 3.0, 10.0);
        assert_eq!(moved, Position::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_with_z_keeps_x_and_y() {
        let p = Position::new(10.0, 20.0, 30.0).with_z(0.0);
        assert_eq!(p.as_array(), [10.0, 20.0, 0.0]);
    }

    #[test]
    fn test_display_drops_trailing_zero_fraction() {
        assert_eq!(
            Position::new(10.0, 20.0, 30.0).to_string(),
            "X: 10 Y: 20 Z: 30"
        );
        assert_eq!(Position::new(1.5, 0.0, 2.25).to_string(), "X: 1.5 Y: 0 Z: 2.25");
    }
}

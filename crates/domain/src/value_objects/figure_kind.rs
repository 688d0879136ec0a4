//! Figure kinds and their fixed side counts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The concrete kinds of figure.
///
/// Each kind fixes how many entries its `sides` sequence must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FigureKind {
    /// One "side": the circumference
    Circle,
    /// Three sides
    Triangle,
    /// Twelve edges
    Cube,
}

impl FigureKind {
    /// Number of entries the `sides` sequence must have for this kind.
    pub const fn side_count(&self) -> usize {
        match self {
            Self::Circle => 1,
            Self::Triangle => 3,
            Self::Cube => 12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Cube => "cube",
        }
    }

    pub fn all() -> [FigureKind; 3] {
        [Self::Circle, Self::Triangle, Self::Cube]
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FigureKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "triangle" => Ok(Self::Triangle),
            "cube" => Ok(Self::Cube),
            other => Err(DomainError::validation(format!(
                "Unknown figure kind: '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_counts() {
        assert_eq!(FigureKind::Circle.side_count(), 1);
        assert_eq!(FigureKind::Triangle.side_count(), 3);
        assert_eq!(FigureKind::Cube.side_count(), 12);
    }

    #[test]
    fn test_from_str_round_trips_display() {
        for kind in FigureKind::all() {
            assert_eq!(kind.to_string().parse::<FigureKind>(), Ok(kind));
        }
        assert_eq!(" Cube ".parse::<FigureKind>(), Ok(FigureKind::Cube));
        assert!("hexagon".parse::<FigureKind>().is_err());
    }
}

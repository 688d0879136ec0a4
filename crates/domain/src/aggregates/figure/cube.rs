//! Cube - twelve equal edges.

use super::{Figure, FigureBody};
use crate::error::DomainError;
use crate::value_objects::{FigureKind, Rgb};

/// A cube.
///
/// Built from either one edge length (copied to all twelve edges) or the
/// full list of twelve. Volume and surface area use the first edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    body: FigureBody,
}

impl Cube {
    /// Lenient constructor.
    ///
    /// - one value: replicated to twelve edges
    /// - twelve values: used as given
    /// - anything else (or a non-positive length): twelve ones
    pub fn new(color: impl Into<Rgb>, sides: &[i64]) -> Self {
        let sides = Self::expand(sides);
        Self {
            body: FigureBody::new(FigureKind::Cube, color, &sides),
        }
    }

    pub fn with_edge(color: impl Into<Rgb>, edge: u32) -> Self {
        Self::new(color, &[i64::from(edge)])
    }

    /// Strict constructor accepting one edge or twelve.
    pub fn try_new(color: impl Into<Rgb>, sides: &[i64]) -> Result<Self, DomainError> {
        let sides = Self::expand(sides);
        FigureBody::try_new(FigureKind::Cube, color, &sides).map(|body| Self { body })
    }

    fn expand(sides: &[i64]) -> Vec<i64> {
        match sides {
            [edge] => vec![*edge; FigureKind::Cube.side_count()],
            _ => sides.to_vec(),
        }
    }

    pub fn edge(&self) -> u32 {
        self.body.first_side()
    }

    /// `edge^3`. Widened to `u128` so any `u32` edge fits.
    pub fn volume(&self) -> u128 {
        u128::from(self.edge()).pow(3)
    }

    /// `6 * edge^2`
    pub fn surface_area(&self) -> u128 {
        6 * u128::from(self.edge()).pow(2)
    }
}

impl Figure for Cube {
    fn body(&self) -> &FigureBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut FigureBody {
        &mut self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube() -> Cube {
        Cube::with_edge(Rgb::from_channels(222, 35, 130), 6)
    }

    #[test]
    fn test_single_edge_is_replicated() {
        let c = cube();
        assert_eq!(c.sides(), &[6; 12]);
        assert_eq!(c.volume(), 216);
        assert_eq!(c.surface_area(), 216);
        assert_eq!(c.perimeter(), 72);
    }

    #[test]
    fn test_invalid_color_keeps_color() {
        let mut c = cube();
        assert!(!c.set_color(300, 70, 15).is_changed());
        assert_eq!(c.color().channels(), [222, 35, 130]);
    }

    #[test]
    fn test_wrong_side_count_keeps_sides() {
        let mut c = cube();
        let change = c.set_sides(&[5, 3, 12, 4, 5]);
        assert_eq!(
            change.rejection(),
            Some(&DomainError::side_count_mismatch(12, 5))
        );
        assert_eq!(c.sides(), &[6; 12]);
    }

    #[test]
    fn test_twelve_edges_accepted() {
        let edges = [2i64; 12];
        let c = Cube::new(Rgb::default(), &edges);
        assert_eq!(c.volume(), 8);
        assert!(Cube::try_new(Rgb::default(), &edges).is_ok());
    }

    #[test]
    fn test_other_counts_fall_back_to_ones() {
        let c = Cube::new(Rgb::default(), &[2, 3]);
        assert_eq!(c.sides(), &[1; 12]);
        assert_eq!(c.volume(), 1);
        assert!(Cube::try_new(Rgb::default(), &[2, 3]).is_err());
        assert!(Cube::try_new(Rgb::default(), &[0]).is_err());
    }

    #[test]
    fn test_largest_edge_does_not_overflow() {
        let c = Cube::with_edge(Rgb::default(), u32::MAX);
        let edge = u128::from(u32::MAX);
        assert_eq!(c.volume(), edge * edge * edge);
        assert_eq!(c.surface_area(), 6 * edge * edge);
        assert_eq!(c.perimeter(), 12 * u64::from(u32::MAX));
    }
}

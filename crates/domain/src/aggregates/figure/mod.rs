//! Figure aggregates - color and sides shared by every shape
//!
//! [`FigureBody`] owns the validated state; the [`Figure`] trait exposes it
//! on each variant. The side count is a property of [`FigureKind`], fixed
//! when the body is created.
//!
//! Two construction paths exist on every variant:
//! - `new` keeps the lenient behavior: a sides list of the wrong arity, or
//!   with non-positive lengths, is replaced by `side_count` ones
//! - `try_new` surfaces the same problems as a `DomainError`

mod circle;
mod cube;
mod triangle;

pub use circle::Circle;
pub use cube::Cube;
pub use triangle::Triangle;

use crate::error::DomainError;
use crate::events::{ColorChange, FillChange, SidesChange};
use crate::value_objects::{FigureKind, Rgb, Sides};

/// State shared by every figure.
///
/// # Invariants
///
/// - `sides.len() == kind.side_count()`
/// - every side is a positive integer (enforced by `Sides`)
/// - every color channel is within 0..=255 (enforced by `Rgb`)
#[derive(Debug, Clone, PartialEq)]
pub struct FigureBody {
    kind: FigureKind,
    color: Rgb,
    sides: Sides,
    filled: bool,
}

impl FigureBody {
    /// Lenient constructor: invalid `sides` fall back to all ones.
    pub fn new(kind: FigureKind, color: impl Into<Rgb>, sides: &[i64]) -> Self {
        let sides =
            Sides::for_kind(kind, sides).unwrap_or_else(|_| Sides::ones(kind.side_count()));
        Self::from_parts(kind, color.into(), sides)
    }

    /// Strict constructor.
    ///
    /// # Errors
    ///
    /// Returns the `Sides` validation error when the arity or any length is wrong.
    pub fn try_new(
        kind: FigureKind,
        color: impl Into<Rgb>,
        sides: &[i64],
    ) -> Result<Self, DomainError> {
        let sides = Sides::for_kind(kind, sides)?;
        Ok(Self::from_parts(kind, color.into(), sides))
    }

    fn from_parts(kind: FigureKind, color: Rgb, sides: Sides) -> Self {
        Self {
            kind,
            color,
            sides,
            filled: false,
        }
    }

    #[inline]
    pub fn kind(&self) -> FigureKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn sides(&self) -> &Sides {
        &self.sides
    }

    #[inline]
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Length of the first side. `sides` is never empty.
    pub fn first_side(&self) -> u32 {
        self.sides.first().unwrap_or(1)
    }

    /// Sum of all sides.
    pub fn perimeter(&self) -> u64 {
        self.sides.total()
    }

    /// Replace the color if every channel is within 0..=255.
    pub fn set_color(&mut self, r: i64, g: i64, b: i64) -> ColorChange {
        match Rgb::new(r, g, b) {
            Ok(to) => {
                let from = std::mem::replace(&mut self.color, to);
                ColorChange::Changed { from, to }
            }
            Err(reason) => ColorChange::Rejected {
                current: self.color,
                reason,
            },
        }
    }

    /// Replace the sides if the count matches and every length is positive.
    pub fn set_sides(&mut self, sides: &[i64]) -> SidesChange {
        match Sides::for_kind(self.kind, sides) {
            Ok(to) => {
                let from = std::mem::replace(&mut self.sides, to.clone());
                SidesChange::Changed { from, to }
            }
            Err(reason) => SidesChange::Rejected { reason },
        }
    }

    pub fn set_filled(&mut self, filled: bool) -> FillChange {
        if self.filled == filled {
            return FillChange::Unchanged { filled };
        }
        let from = std::mem::replace(&mut self.filled, filled);
        FillChange::Changed { from, to: filled }
    }
}

/// Behavior common to every figure.
pub trait Figure {
    fn body(&self) -> &FigureBody;

    fn body_mut(&mut self) -> &mut FigureBody;

    fn kind(&self) -> FigureKind {
        self.body().kind()
    }

    /// How many sides this figure must have.
    fn side_count(&self) -> usize {
        self.kind().side_count()
    }

    fn color(&self) -> Rgb {
        self.body().color()
    }

    fn set_color(&mut self, r: i64, g: i64, b: i64) -> ColorChange {
        self.body_mut().set_color(r, g, b)
    }

    fn sides(&self) -> &[u32] {
        self.body().sides().as_slice()
    }

    fn set_sides(&mut self, sides: &[i64]) -> SidesChange {
        self.body_mut().set_sides(sides)
    }

    /// Sum of the sides: the perimeter of a triangle, the circumference of a
    /// circle, and the total edge length of a cube.
    fn perimeter(&self) -> u64 {
        self.body().perimeter()
    }

    fn is_filled(&self) -> bool {
        self.body().is_filled()
    }

    fn set_filled(&mut self, filled: bool) -> FillChange {
        self.body_mut().set_filled(filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_body() -> FigureBody {
        FigureBody::new(FigureKind::Triangle, Rgb::from_channels(10, 20, 30), &[3, 4, 5])
    }

    #[test]
    fn test_new_with_wrong_arity_falls_back_to_ones() {
        let body = FigureBody::new(FigureKind::Triangle, Rgb::default(), &[3, 4]);
        assert_eq!(body.sides().as_slice(), &[1, 1, 1]);
        assert!(!body.is_filled());
    }

    #[test]
    fn test_new_with_non_positive_side_falls_back_to_ones() {
        let body = FigureBody::new(FigureKind::Triangle, Rgb::default(), &[3, -4, 5]);
        assert_eq!(body.sides().as_slice(), &[1, 1, 1]);
    }

    #[test]
    fn test_try_new_surfaces_arity_error() {
        let err = FigureBody::try_new(FigureKind::Cube, Rgb::default(), &[1, 2]).unwrap_err();
        assert_eq!(err, DomainError::side_count_mismatch(12, 2));
    }

    #[test]
    fn test_set_color_valid() {
        let mut body = triangle_body();
        let change = body.set_color(55, 66, 77);
        assert_eq!(
            change,
            ColorChange::Changed {
                from: Rgb::from_channels(10, 20, 30),
                to: Rgb::from_channels(55, 66, 77)
            }
        );
        assert_eq!(body.color().channels(), [55, 66, 77]);
    }

    #[test]
    fn test_set_color_invalid_keeps_color() {
        let mut body = triangle_body();
        let change = body.set_color(300, 70, 15);
        assert!(!change.is_changed());
        assert_eq!(
            change.rejection(),
            Some(&DomainError::invalid_color(300, 70, 15))
        );
        assert_eq!(body.color().channels(), [10, 20, 30]);
    }

    #[test]
    fn test_set_sides_round_trip() {
        let mut body = triangle_body();
        assert!(body.set_sides(&[6, 7, 8]).is_changed());
        assert_eq!(body.sides().as_slice(), &[6, 7, 8]);
        assert_eq!(body.perimeter(), 21);
    }

    #[test]
    fn test_set_sides_invalid_keeps_sides() {
        let mut body = triangle_body();
        assert!(!body.set_sides(&[6, 7]).is_changed());
        assert!(!body.set_sides(&[6, 0, 8]).is_changed());
        assert_eq!(body.sides().as_slice(), &[3, 4, 5]);
    }

    #[test]
    fn test_set_filled() {
        let mut body = triangle_body();
        assert_eq!(
            body.set_filled(true),
            FillChange::Changed {
                from: false,
                to: true
            }
        );
        assert_eq!(body.set_filled(true), FillChange::Unchanged { filled: true });
        assert!(body.is_filled());
    }
}

//! Triangle - three sides, area by Heron's formula.

use super::{Figure, FigureBody};
use crate::error::DomainError;
use crate::value_objects::{FigureKind, Rgb};

#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    body: FigureBody,
}

impl Triangle {
    /// Lenient constructor; anything but three positive lengths becomes `[1, 1, 1]`.
    pub fn new(color: impl Into<Rgb>, sides: &[i64]) -> Self {
        Self {
            body: FigureBody::new(FigureKind::Triangle, color, sides),
        }
    }

    pub fn try_new(color: impl Into<Rgb>, sides: &[i64]) -> Result<Self, DomainError> {
        FigureBody::try_new(FigureKind::Triangle, color, sides).map(|body| Self { body })
    }

    fn abc(&self) -> [u32; 3] {
        match self.body.sides().as_slice() {
            [a, b, c] => [*a, *b, *c],
            _ => [1, 1, 1],
        }
    }

    /// True unless one side is longer than the other two combined.
    /// A flat triangle (`a + b == c`) counts as valid with zero area.
    pub fn is_valid_triangle(&self) -> bool {
        let [a, b, c] = self.abc().map(u64::from);
        a + b >= c && a + c >= b && b + c >= a
    }

    /// Area from the current sides.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DegenerateTriangle` when the sides break the
    /// triangle inequality.
    pub fn area(&self) -> Result<f64, DomainError> {
        if !self.is_valid_triangle() {
            return Err(DomainError::DegenerateTriangle { sides: self.abc() });
        }
        let [a, b, c] = self.abc().map(f64::from);
        let s = (a + b + c) / 2.0;
        Ok((s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt())
    }
}

impl Figure for Triangle {
    fn body(&self) -> &FigureBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut FigureBody {
        &mut self.body
    }
}

//! Circle - a figure whose single "side" is its circumference.

use std::f64::consts::PI;

use super::{Figure, FigureBody};
use crate::error::DomainError;
use crate::value_objects::{FigureKind, Rgb};

/// A circle.
///
/// The radius is derived from the circumference once, at construction.
/// Later `set_sides` calls change the circumference (and the perimeter) but
/// not the radius, so [`Circle::area`] keeps reporting the first area.
/// Use [`Circle::circumference`] for the live value.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    body: FigureBody,
    radius: f64,
}

impl Circle {
    /// Lenient constructor; anything but one positive length becomes `[1]`.
    pub fn new(color: impl Into<Rgb>, sides: &[i64]) -> Self {
        Self::from_body(FigureBody::new(FigureKind::Circle, color, sides))
    }

    pub fn with_circumference(color: impl Into<Rgb>, circumference: u32) -> Self {
        Self::new(color, &[i64::from(circumference)])
    }

    pub fn try_new(color: impl Into<Rgb>, sides: &[i64]) -> Result<Self, DomainError> {
        FigureBody::try_new(FigureKind::Circle, color, sides).map(Self::from_body)
    }

    fn from_body(body: FigureBody) -> Self {
        let radius = f64::from(body.first_side()) / (2.0 * PI);
        Self { body, radius }
    }

    /// Radius computed when the circle was built.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Current circumference.
    pub fn circumference(&self) -> u32 {
        self.body.first_side()
    }

    /// `PI * radius^2` using the construction-time radius.
    pub fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }
}

impl Figure for Circle {
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

    fn circle() -> Circle {
        Circle::with_circumference(Rgb::from_channels(200, 200, 100), 10)
    }

    #[test]
    fn test_radius_from_circumference() {
        let c = circle();
        assert!((c.radius() - 10.0 / (2.0 * PI)).abs() < 1e-12);
        assert!((c.area() - 100.0 / (4.0 * PI)).abs() < 1e-12);
    }

    #[test]
    fn test_set_color_and_sides() {
        let mut c = circle();
        assert!(c.set_color(55, 66, 77).is_changed());
        assert_eq!(c.color().channels(), [55, 66, 77]);
        assert!(c.set_sides(&[15]).is_changed());
        assert_eq!(c.sides(), &[15]);
        assert_eq!(c.perimeter(), 15);
    }

    #[test]
    fn test_radius_is_not_refreshed_by_set_sides() {
        let mut c = circle();
        let area = c.area();
        c.set_sides(&[15]);
        assert_eq!(c.circumference(), 15);
        assert_eq!(c.area(), area);
    }

    #[test]
    fn test_wrong_arity_falls_back() {
        let c = Circle::new(Rgb::default(), &[3, 4]);
        assert_eq!(c.sides(), &[1]);
        assert_eq!(c.side_count(), 1);
        assert!(Circle::try_new(Rgb::default(), &[3, 4]).is_err());
    }
}

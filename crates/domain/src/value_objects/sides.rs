//! Side-length sequence for figures
//!
//! A `Sides` value always holds positive lengths. Whether it has the right
//! arity is checked against a [`FigureKind`] in [`Sides::for_kind`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::FigureKind;
use crate::error::DomainError;

/// Ordered, positive side lengths.
///
/// Deserialization checks positivity only; arity is checked by the figure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<u32>")]
pub struct Sides(Vec<u32>);

impl Sides {
    /// Validate untrusted lengths against an expected count.
    ///
    /// # Errors
    ///
    /// - `DomainError::SideCountMismatch` if `values.len() != expected`
    /// - `DomainError::NonPositiveSide` for the first value that is not a
    ///   positive integer that fits in `u32`
    pub fn new(values: &[i64], expected: usize) -> Result<Self, DomainError> {
        if values.len() != expected {
            return Err(DomainError::side_count_mismatch(expected, values.len()));
        }
        Self::positive(values)
    }

    /// Validate that every length is a positive `u32`, whatever the count.
    pub fn positive(values: &[i64]) -> Result<Self, DomainError> {
        values
            .iter()
            .map(|&value| match u32::try_from(value) {
                Ok(side) if side > 0 => Ok(side),
                _ => Err(DomainError::NonPositiveSide { value }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Validate untrusted lengths for a figure kind.
    pub fn for_kind(kind: FigureKind, values: &[i64]) -> Result<Self, DomainError> {
        Self::new(values, kind.side_count())
    }

    /// `count` copies of the same length. A zero length is raised to 1.
    pub fn uniform(length: u32, count: usize) -> Self {
        Self(vec![length.max(1); count])
    }

    /// The fallback used when a figure is constructed with the wrong arity.
    pub fn ones(count: usize) -> Self {
        Self::uniform(1, count)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<u32> {
        self.0.first().copied()
    }

    /// Sum of all lengths.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&s| u64::from(s)).sum()
    }
}

impl TryFrom<Vec<i64>> for Sides {
    type Error = DomainError;

    fn try_from(values: Vec<i64>) -> Result<Self, Self::Error> {
        Self::positive(&values)
    }
}

impl From<Sides> for Vec<u32> {
    fn from(sides: Sides) -> Vec<u32> {
        sides.0
    }
}

impl fmt::Display for Sides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_matching_positive_values() {
        let sides = Sides::new(&[3, 4, 5], 3).unwrap();
        assert_eq!(sides.as_slice(), &[3, 4, 5]);
        assert_eq!(sides.total(), 12);
    }

    #[test]
    fn test_new_rejects_wrong_count() {
        assert_eq!(
            Sides::new(&[5, 3, 12, 4, 5], 12),
            Err(DomainError::SideCountMismatch {
                expected: 12,
                actual: 5
            })
        );
    }

    #[test]
    fn test_new_rejects_non_positive() {
        assert_eq!(
            Sides::new(&[3, 0, 5], 3),
            Err(DomainError::NonPositiveSide { value: 0 })
        );
        assert_eq!(
            Sides::new(&[-3], 1),
            Err(DomainError::NonPositiveSide { value: -3 })
        );
        assert!(Sides::new(&[i64::from(u32::MAX) + 1], 1).is_err());
    }

    #[test]
    fn test_for_kind_uses_side_count() {
        assert!(Sides::for_kind(FigureKind::Circle, &[15]).is_ok());
        assert!(Sides::for_kind(FigureKind::Circle, &[15, 1]).is_err());
    }

    #[test]
    fn test_ones_and_uniform() {
        assert_eq!(Sides::ones(3).as_slice(), &[1, 1, 1]);
        let cube = Sides::uniform(6, 12);
        assert_eq!(cube.len(), 12);
        assert_eq!(cube.total(), 72);
        assert_eq!(cube.first(), Some(6));
    }

    #[test]
    fn test_display() {
        assert_eq!(Sides::uniform(6, 3).to_string(), "[6, 6, 6]");
    }

    #[test]
    fn test_serde_validates_lengths() {
        let sides: Sides = serde_json::from_str("[3, 4, 5]").unwrap();
        assert_eq!(sides.as_slice(), &[3, 4, 5]);
        assert_eq!(serde_json::to_string(&sides).unwrap(), "[3,4,5]");
        assert!(serde_json::from_str::<Sides>("[3, 0, 5]").is_err());
        assert!(serde_json::from_str::<Sides>("[-1]").is_err());
    }
}

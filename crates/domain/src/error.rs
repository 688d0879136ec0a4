//! Unified error types for the domain layer
//!
//! Setters never return these as `Err`: a rejected mutation hands its
//! `DomainError` back inside the outcome enum so the caller can report it.
//! Strict constructors (`Rgb::new`, `Sides::new`, `Circle::try_new`, ...)
//! return them as ordinary `Result` errors.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A color channel fell outside 0..=255
    #[error("Invalid color ({r}, {g}, {b}): every channel must be within 0..=255")]
    InvalidColor { r: i64, g: i64, b: i64 },

    /// Wrong number of sides for the figure kind
    #[error("Expected {expected} sides, got {actual}")]
    SideCountMismatch { expected: usize, actual: usize },

    /// A side length was zero, negative, or too large to store
    #[error("Side length must be a positive integer, got {value}")]
    NonPositiveSide { value: i64 },

    /// A move or dive would have taken the animal below the floor
    #[error("Depth {attempted_depth} is below the floor at 0")]
    TooDeep { attempted_depth: f64 },

    /// The sides violate the triangle inequality
    #[error("Sides {sides:?} do not form a triangle")]
    DegenerateTriangle { sides: [u32; 3] },
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if !speed.is_finite() {
    ///     return Err(DomainError::validation("Speed must be finite"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid color error
    pub fn invalid_color(r: i64, g: i64, b: i64) -> Self {
        Self::InvalidColor { r, g, b }
    }

    /// Create a side count mismatch error
    pub fn side_count_mismatch(expected: usize, actual: usize) -> Self {
        Self::SideCountMismatch { expected, actual }
    }

    /// Create a too-deep error
    pub fn too_deep(attempted_depth: f64) -> Self {
        Self::TooDeep { attempted_depth }
    }

    /// Returns true if this error came from a movement guard.
    pub fn is_too_deep(&self) -> bool {
        matches!(self, Self::TooDeep { .. })
    }
}

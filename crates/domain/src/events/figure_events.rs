//! Figure-related domain events
//!
//! These enums communicate what happened when figure state was modified,
//! allowing callers to report rejected input.

use crate::error::DomainError;
use crate::value_objects::{Rgb, Sides};

/// Outcome of `set_color`
#[derive(Debug, Clone, PartialEq)]
pub enum ColorChange {
    Changed { from: Rgb, to: Rgb },
    /// Color left at `current`
    Rejected { current: Rgb, reason: DomainError },
}

impl ColorChange {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }

    pub fn rejection(&self) -> Option<&DomainError> {
        match self {
            Self::Changed { .. } => None,
            Self::Rejected { reason, .. } => Some(reason),
        }
    }
}

/// Outcome of `set_sides`
#[derive(Debug, Clone, PartialEq)]
pub enum SidesChange {
    Changed { from: Sides, to: Sides },
    Rejected { reason: DomainError },
}

impl SidesChange {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }

    pub fn rejection(&self) -> Option<&DomainError> {
        match self {
            Self::Changed { .. } => None,
            Self::Rejected { reason } => Some(reason),
        }
    }
}

/// Outcome of toggling the filled flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillChange {
    Changed { from: bool, to: bool },
    Unchanged { filled: bool },
}

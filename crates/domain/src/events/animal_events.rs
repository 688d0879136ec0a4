//! Animal-related domain events

use crate::error::DomainError;
use crate::value_objects::Position;

/// Outcome of moving or diving an animal
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// Position was updated
    Moved { from: Position, to: Position },
    /// Move was refused; the animal stays at `at`
    Rejected { at: Position, reason: DomainError },
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    /// Where the animal is after the attempt.
    pub fn position(&self) -> Position {
        match self {
            Self::Moved { to, .. } => *to,
            Self::Rejected { at, .. } => *at,
        }
    }

    pub fn rejection(&self) -> Option<&DomainError> {
        match self {
            Self::Moved { .. } => None,
            Self::Rejected { reason, .. } => Some(reason),
        }
    }
}

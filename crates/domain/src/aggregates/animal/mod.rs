//! Animal aggregates - capability traits over a shared body
//!
//! Every variant owns an [`AnimalBody`] (speed and position) and opts into
//! capabilities by implementing traits:
//!
//! | Variant           | `Animal` | `Beaked` | `Diver` | Danger |
//! |-------------------|----------|----------|---------|--------|
//! | `Critter`         | yes      |          |         | 0      |
//! | `Bird`            | yes      | yes      |         | 0      |
//! | `AquaticAnimal`   | yes      |          | yes     | 3      |
//! | `PoisonousAnimal` | yes      |          |         | 8      |
//! | `Duckbill`        | yes      | yes      | yes     | 8      |
//!
//! Sound and danger level are per-variant constants returned by trait
//! methods, never shared mutable state.

mod aquatic;
mod bird;
mod critter;
mod duckbill;
mod poisonous;

pub use aquatic::AquaticAnimal;
pub use bird::Bird;
pub use critter::Critter;
pub use duckbill::Duckbill;
pub use poisonous::PoisonousAnimal;

use std::ops::RangeInclusive;

use crate::error::DomainError;
use crate::events::MoveOutcome;
use crate::value_objects::{DangerLevel, EggClutch, Position, Stance, Utterance};

/// Speed and position shared by every animal.
///
/// # Invariants
///
/// - `speed` is fixed at construction
/// - `position.z` never becomes negative through `shift` or `dive`
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalBody {
    speed: f64,
    position: Position,
}

impl AnimalBody {
    /// A body at the origin moving at `speed`.
    pub fn new(speed: f64) -> Self {
        Self {
            speed,
            position: Position::ORIGIN,
        }
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves every axis by `delta * speed`.
    ///
    /// If the resulting height would be negative the whole move is refused
    /// and no axis changes.
    pub fn shift(&mut self, dx: f64, dy: f64, dz: f64) -> MoveOutcome {
        let target = self.position.offset(dx, dy, dz, self.speed);
        if is_below_floor(target.z) {
            return MoveOutcome::Rejected {
                at: self.position,
                reason: DomainError::too_deep(target.z),
            };
        }
        let from = std::mem::replace(&mut self.position, target);
        MoveOutcome::Moved { from, to: target }
    }

    /// Descends by `|dz| * speed / 2`; x and y are untouched.
    pub fn dive(&mut self, dz: f64) -> MoveOutcome {
        let depth = self.position.z - dz.abs() * (self.speed / 2.0);
        if is_below_floor(depth) {
            return MoveOutcome::Rejected {
                at: self.position,
                reason: DomainError::too_deep(depth),
            };
        }
        let from = self.position;
        self.position = from.with_z(depth);
        MoveOutcome::Moved {
            from,
            to: self.position,
        }
    }
}

// NaN counts as below the floor so it can never be stored.
fn is_below_floor(z: f64) -> bool {
    z.is_nan() || z < 0.0
}

/// Behavior common to every animal.
pub trait Animal {
    fn body(&self) -> &AnimalBody;

    fn body_mut(&mut self) -> &mut AnimalBody;

    /// The variant's sound, if it makes one.
    fn sound(&self) -> Option<&'static str> {
        None
    }

    fn danger_level(&self) -> DangerLevel {
        DangerLevel::HARMLESS
    }

    /// All animals are alive.
    fn is_alive(&self) -> bool {
        true
    }

    fn speed(&self) -> f64 {
        self.body().speed()
    }

    fn position(&self) -> Position {
        self.body().position()
    }

    fn move_by(&mut self, dx: f64, dy: f64, dz: f64) -> MoveOutcome {
        self.body_mut().shift(dx, dy, dz)
    }

    fn attack(&self) -> Stance {
        self.danger_level().stance()
    }

    fn speak(&self) -> Utterance {
        Utterance::from_sound(self.sound())
    }
}

/// Animals with a beak that lay eggs.
pub trait Beaked: Animal {
    fn has_beak(&self) -> bool {
        true
    }

    /// Lays a clutch whose size is drawn by `roll` from [`EggClutch::range`].
    ///
    /// The roll is injected so callers own the RNG; a roll outside the range
    /// is clamped into it.
    fn lay_eggs<R>(&self, roll: R) -> EggClutch
    where
        R: FnOnce(RangeInclusive<u32>) -> u32,
        Self: Sized,
    {
        EggClutch::from_roll(roll(EggClutch::range()))
    }
}

/// Animals that can dive.
pub trait Diver: Animal {
    /// Always descends, whatever the sign of `dz`.
    fn dive_in(&mut self, dz: f64) -> MoveOutcome {
        self.body_mut().dive(dz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_body_starts_at_origin() {
        let body = AnimalBody::new(4.0);
        assert_eq!(body.position(), Position::ORIGIN);
        assert_eq!(body.speed(), 4.0);
    }

    #[test]
    fn test_shift_scales_by_speed() {
        let mut body = AnimalBody::new(10.0);
        let outcome = body.shift(1.0, 2.0, 3.0);
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: Position::ORIGIN,
                to: Position::new(10.0, 20.0, 30.0)
            }
        );
        assert_eq!(body.position(), Position::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_shift_below_floor_changes_nothing() {
        let mut body = AnimalBody::new(2.0);
        body.shift(0.0, 0.0, 1.0);
        let outcome = body.shift(5.0, 5.0, -2.0);
        assert!(!outcome.is_moved());
        assert!(outcome.rejection().is_some_and(DomainError::is_too_deep));
        assert_eq!(body.position(), Position::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_shift_to_exactly_floor_is_allowed() {
        let mut body = AnimalBody::new(1.0);
        body.shift(0.0, 0.0, 3.0);
        assert!(body.shift(1.0, 0.0, -3.0).is_moved());
        assert_eq!(body.position(), Position::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_shift_with_nan_is_rejected() {
        let mut body = AnimalBody::new(1.0);
        assert!(!body.shift(0.0, 0.0, f64::NAN).is_moved());
        assert_eq!(body.position(), Position::ORIGIN);
    }

    #[test]
    fn test_dive_ignores_sign() {
        let mut up = AnimalBody::new(10.0);
        let mut down = AnimalBody::new(10.0);
        up.shift(0.0, 0.0, 3.0);
        down.shift(0.0, 0.0, 3.0);
        up.dive(2.0);
        down.dive(-2.0);
        assert_eq!(up.position().z, 20.0);
        assert_eq!(down.position(), up.position());
    }

    #[test]
    fn test_dive_below_floor_is_rejected() {
        let mut body = AnimalBody::new(10.0);
        body.shift(1.0, 1.0, 1.0);
        let outcome = body.dive(3.0);
        assert_eq!(
            outcome,
            MoveOutcome::Rejected {
                at: Position::new(10.0, 10.0, 10.0),
                reason: DomainError::too_deep(-5.0)
            }
        );
        assert_eq!(body.position(), Position::new(10.0, 10.0, 10.0));
    }
}

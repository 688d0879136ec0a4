//! Duckbill (platypus) - beaked, diving, and poisonous in one body
//!
//! Combines the `Bird`, `AquaticAnimal` and `PoisonousAnimal` capabilities
//! explicitly instead of inheriting them. Where the parents disagree on the
//! danger level (3 for aquatic, 8 for poisonous) the duckbill takes the
//! poisonous value, so it attacks.

use super::{Animal, AnimalBody, Beaked, Diver};
use crate::value_objects::DangerLevel;

/// # Example
///
/// ```
/// use menagerie_domain::aggregates::{Animal, Diver, Duckbill};
/// use menagerie_domain::value_objects::Position;
///
/// let mut duckbill = Duckbill::new(10.0);
/// duckbill.move_by(1.0, 2.0, 3.0);
/// duckbill.dive_in(6.0);
///
/// assert_eq!(duckbill.position(), Position::new(10.0, 20.0, 0.0));
/// assert!(duckbill.attack().is_attacking());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Duckbill {
    body: AnimalBody,
}

impl Duckbill {
    pub const SOUND: &'static str = "Click-click-click";

    pub fn new(speed: f64) -> Self {
        Self {
            body: AnimalBody::new(speed),
        }
    }
}

impl Animal for Duckbill {
    fn body(&self) -> &AnimalBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut AnimalBody {
        &mut self.body
    }

    fn sound(&self) -> Option<&'static str> {
        Some(Self::SOUND)
    }

    fn danger_level(&self) -> DangerLevel {
        DangerLevel::POISONOUS
    }
}

impl Beaked for Duckbill {}

impl Diver for Duckbill {}

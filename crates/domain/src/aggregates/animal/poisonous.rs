//! Poisonous animals: no extra behavior, just dangerous.

use super::{Animal, AnimalBody};
use crate::value_objects::DangerLevel;

#[derive(Debug, Clone, PartialEq)]
pub struct PoisonousAnimal {
    body: AnimalBody,
}

impl PoisonousAnimal {
    pub fn new(speed: f64) -> Self {
        Self {
            body: AnimalBody::new(speed),
        }
    }
}

impl Animal for PoisonousAnimal {
    fn body(&self) -> &AnimalBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut AnimalBody {
        &mut self.body
    }

    fn danger_level(&self) -> DangerLevel {
        DangerLevel::POISONOUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Stance;

    #[test]
    fn test_poisonous_attacks() {
        let snake = PoisonousAnimal::new(1.0);
        assert_eq!(snake.attack(), Stance::Attacking);
        assert!(snake.speak().is_silent());
    }
}

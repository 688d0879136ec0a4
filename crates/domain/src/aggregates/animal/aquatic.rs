//! Aquatic animals: divers with a mild danger level.

use super::{Animal, AnimalBody, Diver};
use crate::value_objects::DangerLevel;

#[derive(Debug, Clone, PartialEq)]
pub struct AquaticAnimal {
    body: AnimalBody,
}

impl AquaticAnimal {
    pub fn new(speed: f64) -> Self {
        Self {
            body: AnimalBody::new(speed),
        }
    }
}

impl Animal for AquaticAnimal {
    fn body(&self) -> &AnimalBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut AnimalBody {
        &mut self.body
    }

    fn danger_level(&self) -> DangerLevel {
        DangerLevel::AQUATIC
    }
}

impl Diver for AquaticAnimal {}

//! A plain animal with no extra capabilities.

use super::{Animal, AnimalBody};

/// The base animal: moves, speaks (silently), and never attacks.
#[derive(Debug, Clone, PartialEq)]
pub struct Critter {
    body: AnimalBody,
}

impl Critter {
    pub fn new(speed: f64) -> Self {
        Self {
            body: AnimalBody::new(speed),
        }
    }
}

impl Animal for Critter {
    fn body(&self) -> &AnimalBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut AnimalBody {
        &mut self.body
    }
}

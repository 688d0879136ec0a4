//! Birds: beaked egg layers.

use super::{Animal, AnimalBody, Beaked};

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    body: AnimalBody,
}

impl Bird {
    pub fn new(speed: f64) -> Self {
        Self {
            body: AnimalBody::new(speed),
        }
    }
}

impl Animal for Bird {
    fn body(&self) -> &AnimalBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut AnimalBody {
        &mut self.body
    }
}

impl Beaked for Bird {}

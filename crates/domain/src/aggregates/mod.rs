//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods and capability traits, not public fields
//! - Returns domain events from mutations
//!
//! # Rustic Capability Design
//!
//! | Class-hierarchy pattern        | Rustic Equivalent                          |
//! |--------------------------------|--------------------------------------------|
//! | Base class with shared state   | A body struct owned by every variant       |
//! | Subclass adds behavior         | Capability trait (`Beaked`, `Diver`)       |
//! | Multiple inheritance           | One struct implementing several traits     |
//! | Class-level constants          | Trait methods / `FigureKind::side_count`   |
//! | Printed warnings               | Outcome enums carrying a `DomainError`     |

pub mod animal;
pub mod figure;

pub use animal::{
    Animal, AnimalBody, AquaticAnimal, Beaked, Bird, Critter, Diver, Duckbill, PoisonousAnimal,
};
pub use figure::{Circle, Cube, Figure, FigureBody, Triangle};

//! Menagerie domain - animal and figure capability models.
//!
//! Pure domain code: no I/O, no logging, no RNG. Randomness is injected by
//! the caller and every mutation reports what happened through its return
//! value.

pub mod aggregates;
pub mod error;
pub mod events;
pub mod value_objects;

pub use aggregates::{
    Animal, AnimalBody, AquaticAnimal, Beaked, Bird, Circle, Critter, Cube, Diver, Duckbill,
    Figure, FigureBody, PoisonousAnimal, Triangle,
};
pub use error::DomainError;
pub use events::{ColorChange, FillChange, MoveOutcome, SidesChange};
pub use value_objects::{
    DangerLevel, EggClutch, FigureKind, Position, Rgb, Sides, Stance, Utterance, MAX_CLUTCH,
    MIN_CLUTCH,
};

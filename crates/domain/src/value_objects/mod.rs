//! Value objects - immutable, validated building blocks for the aggregates

mod clutch;
mod color;
mod danger;
mod figure_kind;
mod position;
mod sides;
mod utterance;

pub use clutch::{EggClutch, MAX_CLUTCH, MIN_CLUTCH};
pub use color::Rgb;
pub use danger::{DangerLevel, Stance};
pub use figure_kind::FigureKind;
pub use position::Position;
pub use sides::Sides;
pub use utterance::Utterance;

//! Aggregate Mutation Events
//!
//! The `animal_events` and `figure_events` submodules contain return types
//! from aggregate mutations, communicating what happened when state was
//! modified. A rejected mutation leaves the aggregate untouched and carries
//! the `DomainError` explaining why.

pub mod animal_events;
pub mod figure_events;

pub use animal_events::*;
pub use figure_events::*;

//! Menagerie Engine library.
//!
//! ## Structure
//!
//! - `infrastructure/` - Configuration and port implementations (randomness)
//! - `use_cases/` - Demonstration runs over the domain aggregates
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;

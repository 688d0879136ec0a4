//! Use cases - demonstration runs over the domain aggregates.
//!
//! Each use case drives one aggregate family and returns a [`Transcript`]
//! of the lines a user would see. Rejected mutations are logged and show up
//! in the transcript as a one-line diagnostic.

pub mod animal_tour;
pub mod figure_workshop;

pub use animal_tour::AnimalTour;
pub use figure_workshop::FigureWorkshop;

use std::fmt;

/// Lines produced by a demonstration run, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl fmt::Display) {
        self.lines.push(line.to_string());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

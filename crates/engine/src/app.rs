//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::config::DemoConfig;
use crate::infrastructure::ports::RandomPort;
use crate::use_cases::{AnimalTour, FigureWorkshop, Transcript};

/// Main application state.
///
/// Holds the injected ports and the use cases built on them.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub animal_tour: Arc<AnimalTour>,
    pub figure_workshop: Arc<FigureWorkshop>,
}

impl App {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self {
            use_cases: UseCases {
                animal_tour: Arc::new(AnimalTour::new(random)),
                figure_workshop: Arc::new(FigureWorkshop::new()),
            },
        }
    }

    /// Runs both demonstrations, animals first.
    pub fn run(&self, config: &DemoConfig) -> Vec<Transcript> {
        vec![
            self.use_cases.animal_tour.run(config.duckbill_speed),
            self.use_cases.figure_workshop.run(&config.figures),
        ]
    }
}

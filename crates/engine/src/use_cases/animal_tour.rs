//! Animal tour - walks a duckbill through every animal capability.

use std::sync::Arc;

use menagerie_domain::{Animal, Beaked, Diver, Duckbill, MoveOutcome};

use super::Transcript;
use crate::infrastructure::ports::RandomPort;
use crate::infrastructure::random::roll_in;

/// Printed when a move or dive is refused.
pub const TOO_DEEP_MESSAGE: &str = "It's too deep, i can't dive :(";

pub struct AnimalTour {
    random: Arc<dyn RandomPort>,
}

impl AnimalTour {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    /// Builds a duckbill moving at `speed` and reports, in order: alive,
    /// beak, sound, attack stance, position after `move_by(1, 2, 3)`,
    /// position after `dive_in(6)`, and a clutch of eggs.
    pub fn run(&self, speed: f64) -> Transcript {
        let mut transcript = Transcript::new();
        let mut duckbill = Duckbill::new(speed);
        tracing::info!(speed, "Starting animal tour");

        transcript.push(duckbill.is_alive());
        transcript.push(duckbill.has_beak());
        transcript.push(duckbill.speak());
        transcript.push(duckbill.attack());

        let outcome = duckbill.move_by(1.0, 2.0, 3.0);
        report_move(&mut transcript, "move", &outcome);
        transcript.push(duckbill.position());

        let outcome = duckbill.dive_in(6.0);
        report_move(&mut transcript, "dive", &outcome);
        transcript.push(duckbill.position());

        let clutch = duckbill.lay_eggs(|range| roll_in(self.random.as_ref(), range));
        tracing::debug!(eggs = clutch.count(), "Duckbill laid eggs");
        transcript.push(clutch);

        transcript
    }
}

fn report_move(transcript: &mut Transcript, action: &'static str, outcome: &MoveOutcome) {
    match outcome {
        MoveOutcome::Moved { from, to } => {
            tracing::debug!(action, from = %from, to = %to, "Animal moved");
        }
        MoveOutcome::Rejected { at, reason } => {
            tracing::warn!(action, at = %at, error = %reason, "Movement rejected");
            transcript.push(TOO_DEEP_MESSAGE);
        }
    }
}

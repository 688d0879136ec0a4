//! Figure workshop - exercises color and side validation on a circle and a cube.

use menagerie_domain::{Circle, ColorChange, Cube, Figure, SidesChange};

use super::Transcript;
use crate::infrastructure::config::FigureDemoConfig;

/// Printed when `set_color` is refused.
pub const INVALID_COLOR_MESSAGE: &str = "Invalid color. The color was not changed.";
/// Printed when `set_sides` is refused.
pub const INVALID_SIDES_MESSAGE: &str = "Invalid sides. The sides were not changed.";

#[derive(Debug, Default)]
pub struct FigureWorkshop;

impl FigureWorkshop {
    pub fn new() -> Self {
        Self
    }

    /// Builds the configured circle and cube, then:
    /// 1. recolors the circle to `(55, 66, 77)` (valid)
    /// 2. recolors the cube to `(300, 70, 15)` (rejected)
    /// 3. gives the cube five sides (rejected)
    /// 4. sets the circle's circumference to 15 (valid)
    /// 5. reports the circle's perimeter and the cube's volume
    pub fn run(&self, config: &FigureDemoConfig) -> Transcript {
        let mut transcript = Transcript::new();
        let mut circle = Circle::with_circumference(config.circle_color, config.circle_circumference);
        let mut cube = Cube::with_edge(config.cube_color, config.cube_edge);
        tracing::info!(
            circle_color = %circle.color(),
            cube_color = %cube.color(),
            "Starting figure workshop"
        );

        report_color(&mut transcript, "circle", &circle.set_color(55, 66, 77));
        transcript.push(circle.color());

        report_color(&mut transcript, "cube", &cube.set_color(300, 70, 15));
        transcript.push(cube.color());

        report_sides(&mut transcript, "cube", &cube.set_sides(&[5, 3, 12, 4, 5]));
        transcript.push(format!("{:?}", cube.sides()));

        report_sides(&mut transcript, "circle", &circle.set_sides(&[15]));
        transcript.push(format!("{:?}", circle.sides()));

        transcript.push(circle.perimeter());
        transcript.push(cube.volume());

        transcript
    }
}

fn report_color(transcript: &mut Transcript, figure: &'static str, change: &ColorChange) {
    match change {
        ColorChange::Changed { from, to } => {
            tracing::debug!(figure, from = %from, to = %to, "Color changed");
        }
        ColorChange::Rejected { current, reason } => {
            tracing::warn!(figure, current = %current, error = %reason, "Color change rejected");
            transcript.push(INVALID_COLOR_MESSAGE);
        }
    }
}

fn report_sides(transcript: &mut Transcript, figure: &'static str, change: &SidesChange) {
    match change {
        SidesChange::Changed { from, to } => {
            tracing::debug!(figure, from = %from, to = %to, "Sides changed");
        }
        SidesChange::Rejected { reason } => {
            tracing::warn!(figure, error = %reason, "Sides change rejected");
            transcript.push(INVALID_SIDES_MESSAGE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menagerie_domain::Rgb;

    #[test]
    fn test_default_workshop_transcript() {
        let transcript = FigureWorkshop::new().run(&FigureDemoConfig::default());
        assert_eq!(
            transcript.lines(),
            &[
                "[55, 66, 77]",
                INVALID_COLOR_MESSAGE,
                "[222, 35, 130]",
                INVALID_SIDES_MESSAGE,
                "[6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6]",
                "[15]",
                "15",
                "216",
            ]
        );
    }

    #[test]
    fn test_configured_cube() {
        let config = FigureDemoConfig {
            cube_color: Rgb::from_channels(1, 2, 3),
            cube_edge: 2,
            ..FigureDemoConfig::default()
        };
        let transcript = FigureWorkshop::new().run(&config);
        let lines = transcript.lines();
        assert_eq!(lines[2], "[1, 2, 3]");
        assert_eq!(lines[4], "[2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2]");
        assert_eq!(lines[7], "8");
    }
}

//! A collection of figures which are advanced and reverted together.
//!
//! This is the part between a user pressing "advance" or "revert" and the individual
//! [`Shape`]s: it applies the same step to every figure in a fixed order, keeps track of how
//! many iterations are currently applied and refuses to advance once the total number of
//! corners grows too large.

use std::str::FromStr;

use nalgebra::Vector2;
use tracing::{debug, warn};

use crate::bounding_box::BoundingBox;
use crate::error::{Error, Result};
use crate::shape::Shape;
use crate::style::{Color, Figure, Style};
use crate::subdivision::Emission;

/// Default ratio of an edge's length at which corners are cut
pub const RATIO: f64 = 0.25;

/// Default number of passes per advance
pub const ITERATIONS: usize = 1;

/// Default number of corners above which advancing is refused
pub const CORNER_LIMIT: usize = 1_000_000;

/// Parameters shared by every step of a [`Scene`]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings {
    /// Ratio of an edge's length at which corners are cut
    pub ratio: f64,

    /// Passes of corner cutting per advance
    pub iterations: usize,

    /// Emission order for the shapes of [`Scene::demo`]
    pub emission: Emission,

    /// Advancing is skipped while the scene has more corners than this
    pub corner_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            ratio: RATIO,
            iterations: ITERATIONS,
            emission: Emission::Smooth,
            corner_limit: CORNER_LIMIT,
        }
    }
}

impl Settings {
    /// Rejects ratios which aren't a number.
    pub fn validate(&self) -> Result<()> {
        if !self.ratio.is_finite() {
            return Err(Error::InvalidConfiguration(format!(
                "ratio must be finite, got {}",
                self.ratio
            )));
        }
        Ok(())
    }
}

/// The two things a user can ask for
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Cut the corners of every figure
    Advance,

    /// Undo the last cut of every figure
    Revert,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "a" | "advance" => Ok(Command::Advance),
            "-" | "r" | "revert" | "undo" => Ok(Command::Revert),
            other => Err(Error::UnknownCommand(other.to_string())),
        }
    }
}

/// Outcome of [`Scene::advance`] and [`Scene::revert`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The figures changed
    Applied,

    /// Nothing changed
    Skipped,
}

/// Figures in drawing order plus the number of applied iterations
#[derive(Clone, Debug)]
pub struct Scene {
    figures: Vec<Figure>,
    settings: Settings,
    iterations: usize,
}

impl Scene {
    /// An empty scene
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Scene {
            figures: Vec::new(),
            settings,
            iterations: 0,
        })
    }

    /// Appends a figure, it will be drawn and advanced after all previous ones.
    pub fn push(&mut self, figure: Figure) {
        self.figures.push(figure);
    }

    /// The figures in drawing order
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// The settings used by every step
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Iterations currently applied
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Total number of points over all figures
    pub fn corner_count(&self) -> usize {
        self.figures.iter().map(|figure| figure.shape.len()).sum()
    }

    /// Box around every figure, `None` for an empty scene
    pub fn bounding_box(&self) -> Option<BoundingBox<f64>> {
        BoundingBox::from_iter(self.figures.iter().flat_map(|figure| figure.shape.points()))
    }

    /// Advances every figure once with the configured ratio and iterations.
    ///
    /// Skipped if there are more corners than the configured limit or nothing would change.
    pub fn advance(&mut self) -> Step {
        let Settings {
            ratio,
            iterations,
            corner_limit,
            ..
        } = self.settings;

        if iterations == 0 {
            debug!("Zero iterations per step, nothing to advance");
            return Step::Skipped;
        }
        let corners = self.corner_count();
        if corners > corner_limit {
            warn!(corners, corner_limit, "Number of corners limit reached");
            return Step::Skipped;
        }

        for figure in self.figures.iter_mut() {
            figure.shape.advance(ratio, iterations);
        }
        self.iterations += iterations;
        debug!(
            iterations = self.iterations,
            corners = self.corner_count(),
            "Advanced scene"
        );
        Step::Applied
    }

    /// Reverts every figure once.
    ///
    /// The iteration counter goes down even for figures without a memory, but never below zero.
    pub fn revert(&mut self) -> Step {
        let mut step = Step::Skipped;
        for figure in self.figures.iter_mut() {
            if figure.shape.history_len() > 0 {
                step = Step::Applied;
            }
            figure.shape.revert();
        }
        self.iterations = self.iterations.saturating_sub(self.settings.iterations);
        debug!(
            iterations = self.iterations,
            corners = self.corner_count(),
            "Reverted scene"
        );
        step
    }

    /// Dispatches a [`Command`]
    pub fn apply(&mut self, command: Command) -> Step {
        match command {
            Command::Advance => self.advance(),
            Command::Revert => self.revert(),
        }
    }

    /// The built-in demonstration: triangles, an "s", four pebbles and a braid.
    pub fn demo(settings: Settings) -> Result<Self> {
        let grey = Color(200, 200, 200);
        let figures: [(&[(f64, f64)], bool, Style); 8] = [
            (
                &[(50.0, 50.0), (400.0, 75.0), (45.0, 300.0)],
                true,
                Style::stroke(Color(255, 128, 0)),
            ),
            (
                &[(1000.0, 750.0), (1150.0, 600.0), (600.0, 650.0)],
                false,
                Style::stroke(Color(0, 128, 255)),
            ),
            (
                &[(100.0, 400.0), (200.0, 600.0), (300.0, 500.0), (400.0, 700.0)],
                false,
                Style::stroke(Color(0, 255, 0)),
            ),
            (
                &[
                    (650.0, 350.0),
                    (550.0, 350.0),
                    (500.0, 450.0),
                    (575.0, 500.0),
                    (650.0, 450.0),
                ],
                true,
                Style::stroke(grey),
            ),
            (
                &[(650.0, 350.0), (950.0, 350.0), (900.0, 450.0), (650.0, 550.0)],
                true,
                Style::filled(grey),
            ),
            (
                &[(650.0, 350.0), (950.0, 350.0), (900.0, 50.0), (650.0, 75.0)],
                true,
                Style::stroke(grey),
            ),
            (
                &[
                    (650.0, 350.0),
                    (450.0, 350.0),
                    (350.0, 150.0),
                    (450.0, 75.0),
                    (650.0, 100.0),
                ],
                true,
                Style::filled(grey),
            ),
            (
                &[
                    (1075.0, 25.0),
                    (1000.0, 138.0),
                    (1150.0, 250.0),
                    (1000.0, 363.0),
                    (1075.0, 475.0),
                    (1150.0, 363.0),
                    (1000.0, 250.0),
                    (1150.0, 138.0),
                ],
                true,
                Style::stroke(Color(255, 0, 255)),
            ),
        ];

        let mut scene = Scene::new(settings)?;
        for (corners, closed, style) in figures {
            let points = corners.iter().map(|&(x, y)| Vector2::new(x, y)).collect();
            let shape = Shape::new(points, closed)?.emission(settings.emission);
            scene.push(Figure::new(shape, style)?);
        }
        Ok(scene)
    }
}

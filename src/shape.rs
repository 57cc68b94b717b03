//! A polygon or polyline which can be subdivided step by step and reverted again.

use nalgebra::{RealField, Vector2};

use crate::error::{Error, Result};
use crate::subdivision::{cut_corners, edge_count, Emission};

/// An ordered sequence of points forming either a closed polygon or an open polyline.
///
/// [`advance`] replaces the points by their corner cut version and [`revert`] undoes
/// the most recent [`advance`]. Undoing is a plain stack: advancing after reverting starts a new
/// branch and the reverted state is gone.
///
/// [`advance`]: Shape::advance
/// [`revert`]: Shape::revert
#[derive(Clone, Debug, PartialEq)]
pub struct Shape<T: RealField> {
    points: Vec<Vector2<T>>,
    closed: bool,
    remember: bool,
    emission: Emission,
    history: Vec<Vec<Vector2<T>>>,
}

impl<T: RealField> Shape<T> {
    /// Creates a new shape which remembers its history and cuts smoothly.
    ///
    /// Fails if less than two points are given.
    pub fn new(points: Vec<Vector2<T>>, closed: bool) -> Result<Self> {
        if points.len() < 2 {
            return Err(Error::TooFewPoints { len: points.len() });
        }
        Ok(Shape {
            points,
            closed,
            remember: true,
            emission: Emission::default(),
            history: Vec::new(),
        })
    }

    /// Creates a closed polygon, see [`Shape::new`]
    pub fn closed(points: Vec<Vector2<T>>) -> Result<Self> {
        Shape::new(points, true)
    }

    /// Creates an open polyline, see [`Shape::new`]
    pub fn open(points: Vec<Vector2<T>>) -> Result<Self> {
        Shape::new(points, false)
    }

    /// Sets whether [`Shape::advance`] stores snapshots for [`Shape::revert`].
    ///
    /// Without a memory `revert` never does anything.
    pub fn remember(mut self, remember: bool) -> Self {
        self.remember = remember;
        if !remember {
            self.history.clear();
        }
        self
    }

    /// Sets the order in which cut points are emitted.
    pub fn emission(mut self, emission: Emission) -> Self {
        self.emission = emission;
        self
    }

    /// Applies `iterations` passes of corner cutting.
    ///
    /// The current points are stored once before the first pass (if the shape remembers),
    /// so a single [`Shape::revert`] undoes all passes of this call.
    /// Ratios above `0.5` are mirrored to `1 - ratio`.
    ///
    /// *Every pass doubles the number of edges. Nothing here stops that from exhausting memory.*
    pub fn advance(&mut self, ratio: T, iterations: usize) {
        if self.remember {
            self.history.push(self.points.clone());
        }
        for _ in 0..iterations {
            self.points = cut_corners(&self.points, self.closed, ratio.clone(), self.emission);
        }
    }

    /// Restores the points from before the most recent [`Shape::advance`].
    ///
    /// Does nothing if there is nothing to restore.
    pub fn revert(&mut self) {
        if let Some(points) = self.history.pop() {
            self.points = points;
        }
    }

    /// The current points
    pub fn points(&self) -> &[Vector2<T>] {
        &self.points
    }

    /// Number of current points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`, a shape has at least two points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of edges between the current points
    pub fn edge_count(&self) -> usize {
        edge_count(self.points.len(), self.closed)
    }

    /// Does the last point connect back to the first?
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Does [`Shape::advance`] store snapshots?
    pub fn remembers(&self) -> bool {
        self.remember
    }

    /// The emission order used by [`Shape::advance`]
    pub fn emission_order(&self) -> Emission {
        self.emission
    }

    /// Number of times [`Shape::revert`] would restore a previous state
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

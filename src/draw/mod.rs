//! Defines and implements the helper method [`DrawShape::add_shape`] on various drawing contexts.
//!
//! The subdivision itself never draws anything, this is only the thin glue between a
//! [`Shape`]'s points and whatever ends up displaying them.
use crate::Shape;

/// Draw shapes on different "drawing contexts" with ease.
///
/// Use different crate features to implement different contexts:
/// - `draw-svg` to draw shapes using svg paths
pub trait DrawShape {
    /// Add a shape to the drawing context.
    ///
    /// What this actually means depends on the context.
    /// But generally this just prepares the shape to be drawn instead of actually drawing it.
    fn add_shape(&mut self, shape: &Shape<f64>);
}

#[cfg(feature = "draw-svg")]
pub mod svg;

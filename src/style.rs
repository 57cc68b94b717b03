//! Drawing attributes attached to a shape.
//!
//! Subdivision never looks at these, they only travel along with a shape to the renderer.

use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};
use crate::shape::Shape;

/// An opaque RGB color
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// `#000000`
    pub const BLACK: Color = Color(0, 0, 0);

    /// `#ffffff`
    pub const WHITE: Color = Color(255, 255, 255);
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({},{},{})", self.0, self.1, self.2)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color(r, g, b)
    }
}

/// How a shape should be drawn
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Style {
    /// Stroke and fill color
    pub color: Color,

    /// Stroke width, `0` for a closed shape means "fill only"
    pub width: f64,

    /// Fill the inside of a closed shape
    pub filled: bool,
}

impl Style {
    /// A hairline outline
    pub fn stroke(color: Color) -> Self {
        Style {
            color,
            width: 1.0,
            filled: false,
        }
    }

    /// A hairline outline with its inside filled
    pub fn filled(color: Color) -> Self {
        Style {
            filled: true,
            ..Style::stroke(color)
        }
    }

    /// Should a shape with this style be filled?
    ///
    /// Open shapes are never filled. Closed ones are if asked for or if they have no stroke.
    pub fn is_filled(&self, closed: bool) -> bool {
        closed && (self.filled || self.width == 0.0)
    }

    /// Checks whether a shape with this style would be visible at all.
    pub fn validate(&self, closed: bool) -> Result<()> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "stroke width must be a non negative number, got {}",
                self.width
            )));
        }
        if !closed && self.width == 0.0 {
            return Err(Error::InvalidConfiguration(
                "open shapes need a positive stroke width".to_string(),
            ));
        }
        Ok(())
    }
}

/// A shape together with the attributes to draw it
#[derive(Clone, Debug)]
pub struct Figure {
    /// The geometry
    pub shape: Shape<f64>,

    /// How to draw it
    pub style: Style,
}

impl Figure {
    /// Pairs a shape with its style, rejecting invisible combinations (see [`Style::validate`]).
    pub fn new(shape: Shape<f64>, style: Style) -> Result<Self> {
        style.validate(shape.is_closed())?;
        Ok(Figure { shape, style })
    }

    /// Should this figure be drawn filled?
    pub fn is_filled(&self) -> bool {
        self.style.is_filled(self.shape.is_closed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    fn segment(closed: bool) -> Shape<f64> {
        Shape::new(vec![Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0)], closed).unwrap()
    }

    #[test]
    fn invisible_open_shape() {
        let style = Style {
            width: 0.0,
            ..Style::stroke(Color::WHITE)
        };
        assert!(matches!(
            Figure::new(segment(false), style),
            Err(Error::InvalidConfiguration(_))
        ));
        let figure = Figure::new(segment(true), style).unwrap();
        assert!(figure.is_filled());
    }

    #[test]
    fn negative_width() {
        let style = Style {
            width: -1.0,
            ..Style::stroke(Color::WHITE)
        };
        assert!(Figure::new(segment(true), style).is_err());
    }

    #[test]
    fn open_shapes_are_never_filled() {
        let figure = Figure::new(segment(false), Style::filled(Color::BLACK)).unwrap();
        assert!(!figure.is_filled());
    }

    #[test]
    fn color_display() {
        assert_eq!(Color(255, 128, 0).to_string(), "rgb(255,128,0)");
    }
}

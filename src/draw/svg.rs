//! Draw a shape in a svg

use crate::draw::DrawShape;
use crate::Shape;
use std::fmt::Write;
use std::marker::PhantomData;

/// Helper trait implemented by [`Absolute`] and [`Relative`] to choose
/// how the coordinates are interpreted in the svg's path.
///
/// This effectively toggles between lower and upper case letters for the path commands.
pub trait CoordRepr {
    /// Character to use for the MoveTo command
    const M: &'static str;

    /// Character to use for the LineTo command
    const L: &'static str;

    /// Character to use for the ClosePath command
    const Z: &'static str;

    /// Are coordinates given relative to the previous point?
    const RELATIVE: bool;
}

/// Interpret the svg path's coordinates as absolute.
pub struct Absolute;
impl CoordRepr for Absolute {
    const M: &'static str = "M";
    const L: &'static str = "L";
    const Z: &'static str = "Z";
    const RELATIVE: bool = false;
}

/// Interpret the svg path's coordinates as relative.
pub struct Relative;
impl CoordRepr for Relative {
    const M: &'static str = "m";
    const L: &'static str = "l";
    const Z: &'static str = "z";
    const RELATIVE: bool = true;
}

/// This type wraps a mutable String reference and implements [`DrawShape`] on it.
/// The [`DrawShape::add_shape`] writes the shape to the string
/// using the path commands used in a svg `<path>`'s d attribute
///
/// ```
/// # use nalgebra::Vector2;
/// use chaikin::Shape;
/// use chaikin::draw::DrawShape;
/// use chaikin::draw::svg::SVGAbsolutePath;
///
/// let shape = Shape::open(vec![Vector2::new(0.0, 1.0), Vector2::new(2.0, 3.0)]).unwrap();
/// let mut d = String::new();
/// SVGAbsolutePath::from(&mut d).add_shape(&shape);
/// assert_eq!(d, "M 0,1 L 2,3");
/// ```
pub struct SVGPath<'s, R: CoordRepr>(&'s mut String, PhantomData<&'s R>);

/// Wrapper for writing a shape to a svg's path using absolute coordinates
pub type SVGAbsolutePath<'s> = SVGPath<'s, Absolute>;

/// Wrapper for writing a shape to a svg's path using relative coordinates
pub type SVGRelativePath<'s> = SVGPath<'s, Relative>;

impl<'s, R: CoordRepr> From<&'s mut String> for SVGPath<'s, R> {
    fn from(string: &'s mut String) -> Self {
        SVGPath(string, PhantomData)
    }
}

impl<'s, R: CoordRepr> DrawShape for SVGPath<'s, R> {
    fn add_shape(&mut self, shape: &Shape<f64>) {
        let points = shape.points();
        let first = match points.first() {
            Some(first) => first,
            None => return,
        };

        // Only the path's very first moveto is relative to the origin
        let m = if self.0.is_empty() {
            R::M
        } else {
            self.0.push(' ');
            Absolute::M
        };
        let _ = write!(self.0, "{} {},{}", m, first.x, first.y);

        let mut previous = first;
        for point in &points[1..] {
            let p = if R::RELATIVE {
                point - previous
            } else {
                *point
            };
            let _ = write!(self.0, " {} {},{}", R::L, p.x, p.y);
            previous = point;
        }

        if shape.is_closed() {
            let _ = write!(self.0, " {}", R::Z);
        }
    }
}

/// Writes the `d` attribute for a single shape
pub fn path_data(shape: &Shape<f64>) -> String {
    let mut d = String::new();
    SVGAbsolutePath::from(&mut d).add_shape(shape);
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    fn triangle(closed: bool) -> Shape<f64> {
        Shape::new(
            vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(4.0, 0.0),
                Vector2::new(0.0, 4.0),
            ],
            closed,
        )
        .unwrap()
    }

    #[test]
    fn closed_path() {
        assert_eq!(path_data(&triangle(true)), "M 0,0 L 4,0 L 0,4 Z");
        assert_eq!(path_data(&triangle(false)), "M 0,0 L 4,0 L 0,4");
    }

    #[test]
    fn relative_path() {
        let mut d = String::new();
        SVGRelativePath::from(&mut d).add_shape(&triangle(true));
        assert_eq!(d, "m 0,0 l 4,0 l -4,4 z");

        SVGRelativePath::from(&mut d).add_shape(&triangle(false));
        assert_eq!(d, "m 0,0 l 4,0 l -4,4 z M 0,0 l 4,0 l -4,4");
    }

    #[test]
    fn multiple_shapes() {
        let mut d = String::new();
        let mut path = SVGAbsolutePath::from(&mut d);
        path.add_shape(&triangle(false));
        path.add_shape(&triangle(false));
        assert_eq!(d, "M 0,0 L 4,0 L 0,4 M 0,0 L 4,0 L 0,4");
    }
}

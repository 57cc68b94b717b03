//! A single pass of [Chaikin's corner cutting](https://sighack.com/post/chaikin-curves).
//!
//! Every edge `a -> b` of a polygon (or polyline) is replaced by two points,
//! one close to `a` and one close to `b`. Repeating this converges towards a
//! quadratic B-spline through the original corners.

use nalgebra::{RealField, Vector2};

/// Order in which the two points cut from an edge are emitted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Emission {
    /// The point near the edge's start comes first, producing smooth curves.
    #[default]
    Smooth,

    /// The point near the edge's end comes first, producing spiky curves.
    ///
    /// The set of points is the same as with [`Emission::Smooth`], only each pair is swapped.
    Inverted,
}

/// Number of edges between `len` points.
///
/// A closed polygon has one edge per point, an open polyline one less.
pub fn edge_count(len: usize, closed: bool) -> usize {
    if closed {
        len
    } else {
        len.saturating_sub(1)
    }
}

/// Normalizes a cut ratio to never cut past an edge's midpoint.
///
/// Ratios above `0.5` are mirrored to `1 - ratio`. Cutting `0.9` of the way from both ends of an
/// edge yields the same pair of points as cutting `0.1` of the way.
pub fn effective_ratio<T: RealField>(ratio: T) -> T {
    let half: T = nalgebra::convert(0.5);
    if ratio > half {
        T::one() - ratio
    } else {
        ratio
    }
}

/// The point `t` of the way from `a` to `b`, i.e. `a + t * (b - a)`.
pub fn lerp<T: RealField>(a: &Vector2<T>, b: &Vector2<T>, t: T) -> Vector2<T> {
    a + (b - a) * t
}

/// Applies one corner cutting pass to `points`.
///
/// The result contains exactly two points per edge (see [`edge_count`]).
/// For an open polyline the first and last point of the result are replaced by the original
/// endpoints, so the polyline keeps its ends no matter how often it is cut.
///
/// `ratio` is normalized with [`effective_ratio`] before use.
pub fn cut_corners<T: RealField>(
    points: &[Vector2<T>],
    closed: bool,
    ratio: T,
    emission: Emission,
) -> Vec<Vector2<T>> {
    let ratio = effective_ratio(ratio);
    let len = points.len();
    let edges = edge_count(len, closed);

    let mut cut = Vec::with_capacity(2 * edges);
    for i in 0..edges {
        let a = &points[i];
        let b = &points[(i + 1) % len];
        let near_a = lerp(a, b, ratio.clone());
        let near_b = lerp(b, a, ratio.clone());
        match emission {
            Emission::Smooth => {
                cut.push(near_a);
                cut.push(near_b);
            }
            Emission::Inverted => {
                cut.push(near_b);
                cut.push(near_a);
            }
        }
    }

    // Keep the polyline's endpoints
    if !closed && !cut.is_empty() {
        let last = cut.len() - 1;
        cut[0] = points[0].clone();
        cut[last] = points[len - 1].clone();
    }

    cut
}

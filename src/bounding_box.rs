//! Axis aligned bounding boxes around point sets.

use nalgebra::{RealField, Vector2};

/// Axis aligned box spanned by its lower left and upper right corner
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox<T: RealField> {
    /// Corner with the smallest coordinates
    pub min: Vector2<T>,

    /// Corner with the largest coordinates
    pub max: Vector2<T>,
}

impl<T: RealField> BoundingBox<T> {
    /// Smallest box containing all points, `None` for no points
    pub fn from_iter<'a, I: IntoIterator<Item = &'a Vector2<T>>>(points: I) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bb = BoundingBox {
            min: first.clone(),
            max: first.clone(),
        };
        for p in points {
            bb.insert(p);
        }
        Some(bb)
    }

    /// Smallest box containing all points, `None` for an empty slice
    pub fn from_points(points: &[Vector2<T>]) -> Option<Self> {
        BoundingBox::from_iter(points.iter())
    }

    /// Grows the box to contain `point`
    pub fn insert(&mut self, point: &Vector2<T>) {
        for i in 0..2 {
            if self.min[i] > point[i] {
                self.min[i] = point[i].clone();
            }
            if self.max[i] < point[i] {
                self.max[i] = point[i].clone();
            }
        }
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &Self) -> Self {
        let mut bb = self.clone();
        bb.insert(&other.min);
        bb.insert(&other.max);
        bb
    }

    /// The box grown by `margin` in every direction
    pub fn padded(&self, margin: T) -> Self {
        let margin = Vector2::new(margin.clone(), margin);
        BoundingBox {
            min: &self.min - &margin,
            max: &self.max + &margin,
        }
    }

    /// Is `point` inside the box or on its border?
    pub fn contains(&self, point: &Vector2<T>) -> bool {
        (0..2).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }

    /// Extent along the x-axis
    pub fn width(&self) -> T {
        self.max.x.clone() - self.min.x.clone()
    }

    /// Extent along the y-axis
    pub fn height(&self) -> T {
        self.max.y.clone() - self.min.y.clone()
    }
}

impl<T: RealField> From<[Vector2<T>; 2]> for BoundingBox<T> {
    fn from([min, max]: [Vector2<T>; 2]) -> Self {
        BoundingBox { min, max }
    }
}

impl<T: RealField> From<BoundingBox<T>> for [Vector2<T>; 2] {
    fn from(bb: BoundingBox<T>) -> Self {
        [bb.min, bb.max]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_all_points() {
        let points = [
            Vector2::new(50.0, 50.0),
            Vector2::new(400.0, 75.0),
            Vector2::new(45.0, 300.0),
        ];
        let bb = BoundingBox::from_points(&points).unwrap();
        assert_eq!(bb.min, Vector2::new(45.0, 50.0));
        assert_eq!(bb.max, Vector2::new(400.0, 300.0));
        assert!(points.iter().all(|p| bb.contains(p)));
        assert!(!bb.contains(&Vector2::new(0.0, 0.0)));
        assert_eq!(bb.width(), 355.0);
    }

    #[test]
    fn empty() {
        assert_eq!(BoundingBox::<f64>::from_points(&[]), None);
    }

    #[test]
    fn union_and_padding() {
        let a = BoundingBox::from([Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0)]);
        let b = BoundingBox::from([Vector2::new(2.0, -1.0), Vector2::new(3.0, 0.0)]);
        let bb = a.union(&b).padded(1.0);
        assert_eq!(bb.min, Vector2::new(-1.0, -2.0));
        assert_eq!(bb.max, Vector2::new(4.0, 2.0));
    }
}

use chaikin::Shape;
use nalgebra::Vector2;
use once_cell::sync::Lazy;

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"Vector2::new({(random()-0.5)*i}, {(random()-0.5)*i})")
/// ```
pub static POINTS: [(f64, f64); 10] = [
    ( 0.0,      0.0    ),
    (-0.29734,  0.44984),
    (-0.52560,  0.42885),
    ( 1.42777, -0.02652),
    ( 1.98032, -0.67824),
    ( 0.44863, -0.91328),
    (-2.51139, -0.79100),
    (-3.10479, -0.59318),
    (-1.16022, -2.95591),
    (-1.07946,  0.78888),
];

pub static SHAPES: Lazy<Shapes> = Lazy::new(Shapes::new);
#[allow(non_snake_case)]
pub struct Shapes {
    pub CLOSED: Vec<Shape<f64>>,
    pub OPEN: Vec<Shape<f64>>,
}
impl Shapes {
    pub fn new() -> Shapes {
        let shape = |indices: &[usize], closed: bool| {
            let points = indices
                .iter()
                .map(|&i| Vector2::new(POINTS[i].0, POINTS[i].1))
                .collect();
            Shape::new(points, closed).expect("samples have at least two points")
        };
        Shapes {
            CLOSED: vec![
                shape(&[0, 1, 2], true),
                shape(&[2, 3, 4, 5], true),
                shape(&[4, 6, 8, 1, 3], true),
                shape(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9], true),
            ],
            OPEN: vec![
                shape(&[0, 1], false),
                shape(&[1, 3, 5], false),
                shape(&[5, 7, 9, 0], false),
                shape(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0], false),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape<f64>> {
        self.CLOSED.iter().chain(self.OPEN.iter())
    }
}

use crate::common::samples::SHAPES;
use chaikin::subdivision::{cut_corners, Emission};
use chaikin::{Scene, Settings};
use criterion::{black_box, Criterion};

pub fn cut(c: &mut Criterion) {
    c.bench_function("cut_corners", |b| {
        for shape in SHAPES.iter() {
            b.iter(|| {
                black_box(cut_corners(
                    shape.points(),
                    shape.is_closed(),
                    0.25,
                    Emission::Smooth,
                ))
            })
        }
    });
}

pub fn advance_revert(c: &mut Criterion) {
    c.bench_function("advance_revert", |b| {
        for shape in SHAPES.iter() {
            let mut shape = shape.clone();
            b.iter(|| {
                shape.advance(0.25, 4);
                shape.revert();
            })
        }
    });
}

pub fn demo(c: &mut Criterion) {
    c.bench_function("demo_scene", |b| {
        b.iter(|| {
            let mut scene = Scene::demo(Settings::default()).expect("demo scene is valid");
            for _ in 0..6 {
                scene.advance();
            }
            black_box(scene.corner_count())
        })
    });
}

pub fn all(c: &mut Criterion) {
    cut(c);
    advance_revert(c);
    demo(c);
}

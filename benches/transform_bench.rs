//! Unprojection and navigation benchmarks.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};
use viso_nav::camera::{
    Camera, CameraParameters, OrthographicProjection, PerspectiveProjection,
};
use viso_nav::manipulator::{Manipulator, RangeLimits};

fn camera() -> Camera {
    let mut camera = Camera::new(
        CameraParameters::default(),
        vec![
            PerspectiveProjection::new(45.0, 0.1, 1000.0, 1.0).into(),
            OrthographicProjection::new(
                (-10.0, 10.0),
                (-10.0, 10.0),
                (-1000.0, 1000.0),
                1.0,
            )
            .into(),
        ],
        Manipulator::standard(RangeLimits::UNLIMITED),
    );
    camera.set_viewport(1920, 1080);
    camera
}

fn unproject_benchmark(c: &mut Criterion) {
    let camera = camera();
    let _ = c.bench_function("to_world_xy_coordinates", |b| {
        b.iter(|| {
            black_box(
                camera.to_world_xy_coordinates(
                    black_box(Vec2::new(640.0, 360.0)),
                    0.0,
                ),
            )
        });
    });
}

fn batch_unproject_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_world_xy_coordinates_all");
    let camera = camera();

    for count in [10, 100, 1000] {
        let points: Vec<Vec2> = (0..count)
            .map(|i| Vec2::new((i % 1920) as f32, (i % 1080) as f32))
            .collect();
        let _ = group.bench_function(format!("{count}_points"), |b| {
            b.iter(|| {
                black_box(camera.to_world_xy_coordinates_all(
                    black_box(&points),
                    0.0,
                ))
            });
        });
    }

    group.finish();
}

fn orbit_benchmark(c: &mut Criterion) {
    let mut camera = camera();
    let _ = c.bench_function("rotate_around", |b| {
        b.iter(|| {
            camera.rotate_around(black_box(0.5), black_box(0.0));
        });
    });
}

fn pan_benchmark(c: &mut Criterion) {
    let mut camera = camera();
    let _ = c.bench_function("focus", |b| {
        b.iter(|| camera.focus(black_box(Vec3::new(1.0, 2.0, 0.0))));
    });
}

criterion_group!(
    benches,
    unproject_benchmark,
    batch_unproject_benchmark,
    orbit_benchmark,
    pan_benchmark
);
criterion_main!(benches);

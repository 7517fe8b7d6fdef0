//! Criterion benchmarks for pose math and the engine tick.

// criterion_group! expands to an undocumented pub fn
#![allow(missing_docs)]

use std::f32::consts::FRAC_PI_2;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::{Quat, Vec3};
use vantage::camera::duration::estimate;
use vantage::camera::pose::ViewpointPose;
use vantage::engine::{ViewCommand, ViewEngine};
use vantage::scene::memory::MemoryScene;
use vantage::scene::stepped::{LoopStyle, SteppedAnimation};
use vantage::scene::BoundingSphere;
use vantage::util::easing::EasingFunction;
use web_time::{Duration, Instant};

fn poses() -> (ViewpointPose, ViewpointPose) {
    let a = ViewpointPose::new(
        Vec3::new(0.0, 0.0, 10.0),
        Quat::IDENTITY,
        1.0,
        10.0,
        100.0,
        0.8,
    );
    let b = ViewpointPose::new(
        Vec3::new(10.0, 2.0, 0.0),
        Quat::from_rotation_y(FRAC_PI_2 * 0.7),
        1.5,
        12.0,
        80.0,
        0.7,
    );
    (a, b)
}

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::SineInOut;
    let _ = c.bench_function("sine_in_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.37))));
    });
}

fn estimate_benchmark(c: &mut Criterion) {
    let (a, b) = poses();
    let _ = c.bench_function("duration_estimate", |bench| {
        bench.iter(|| black_box(estimate(black_box(&a), black_box(&b))));
    });
}

fn interpolation_benchmark(c: &mut Criterion) {
    let (a, b) = poses();
    let _ = c.bench_function("pose_interpolation", |bench| {
        bench.iter(|| black_box(a.interpolate(black_box(&b), black_box(0.5))));
    });
}

fn engine_tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_tick");

    for count in [10, 100, 1000] {
        let (start, _) = poses();
        let mut scene = MemoryScene::new(start, BoundingSphere::default());
        for i in 0..count {
            let _ = scene.add_animation(
                SteppedAnimation::new(format!("part{i}"), 120).with_loops(0, LoopStyle::Swing),
            );
        }
        let mut engine = ViewEngine::default();
        let mut now = Instant::now();
        engine.execute(&mut scene, ViewCommand::LoadAnimationSet, now);
        engine.execute(&mut scene, ViewCommand::PlayAnimation, now);
        engine.execute(
            &mut scene,
            ViewCommand::SetOrbit {
                axis: vantage::camera::orbit::OrbitAxis::Y,
                enabled: true,
            },
            now,
        );

        let _ = group.bench_function(format!("{count}_animations"), |b| {
            b.iter(|| {
                now += Duration::from_millis(16);
                let redraw = engine.tick(&mut scene, now);
                let _ = engine.drain_notifications();
                black_box(redraw)
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    easing_benchmark,
    estimate_benchmark,
    interpolation_benchmark,
    engine_tick_benchmark
);
criterion_main!(benches);

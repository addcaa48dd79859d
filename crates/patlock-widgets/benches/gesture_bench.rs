#![forbid(unsafe_code)]

use criterion::{Criterion, criterion_group, criterion_main};
use patlock_core::geometry::Point;
use patlock_layout::{GridLayout, PointLabel};
use patlock_puzzle::{PatternGenerator, PatternVerifier};
use patlock_widgets::GestureTracker;
use std::hint::black_box;

fn center(layout: &GridLayout, n: u8) -> Point {
    layout.center(PointLabel::new(n).expect("label in range"))
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/hit_test");
    let layout = GridLayout::compute(300.0, 15.0);

    group.bench_function("on_point", |b| {
        let p = center(&layout, 9);
        b.iter(|| black_box(layout.hit_test(black_box(p))));
    });

    group.bench_function("miss", |b| {
        let p = Point::new(1.0, 1.0);
        b.iter(|| black_box(layout.hit_test(black_box(p))));
    });

    group.finish();
}

fn bench_gesture_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/lifecycle");
    let layout = GridLayout::compute(300.0, 15.0);

    group.bench_function("visit_all_nine", |b| {
        let mut tracker = GestureTracker::new(layout.clone());
        b.iter(|| {
            tracker.pointer_down(center(&layout, 1));
            for n in 2..=9 {
                black_box(tracker.pointer_move(center(&layout, n)));
            }
            black_box(tracker.pointer_up());
        });
    });

    group.bench_function("drag_64_steps_between_points", |b| {
        let mut tracker = GestureTracker::new(layout.clone());
        let start = center(&layout, 1);
        let end = center(&layout, 3);
        b.iter(|| {
            tracker.pointer_down(start);
            for step in 0..64 {
                let t = f64::from(step) / 63.0;
                let p = Point::new(start.x + (end.x - start.x) * t, start.y);
                black_box(tracker.pointer_move(p));
            }
            black_box(tracker.pointer_up());
        });
    });

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("puzzle/verify");

    group.bench_function("generate", |b| {
        let mut generator = PatternGenerator::seeded(17);
        b.iter(|| black_box(generator.generate()));
    });

    group.bench_function("verify_mismatch_cycle", |b| {
        let mut verifier = PatternVerifier::new(PatternGenerator::seeded(17));
        let attempt = [PointLabel::MIN];
        b.iter(|| black_box(verifier.verify(black_box(&attempt))));
    });

    group.finish();
}

criterion_group!(benches, bench_hit_test, bench_gesture_lifecycle, bench_verify);
criterion_main!(benches);

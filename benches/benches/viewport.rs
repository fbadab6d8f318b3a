// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use tourscope_view2d::{TransformState, ViewTransform, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};

fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport");

    group.bench_function("drag_gesture(moves=1000)", |b| {
        b.iter(|| {
            let mut state = TransformState::new();
            state.drag_start(Point::new(0.0, 0.0));
            for i in 0..1000 {
                let t = f64::from(i);
                state.drag_move(Point::new(t, t * 0.5));
            }
            state.drag_end();
            black_box(state.transform());
        });
    });

    group.bench_function("zoom_steps(1000)", |b| {
        b.iter(|| {
            let mut state = TransformState::new();
            for i in 0..1000 {
                state.scale_by(if i % 3 == 0 { ZOOM_OUT_FACTOR } else { ZOOM_IN_FACTOR });
            }
            black_box(state.transform());
        });
    });

    let skewed = ViewTransform {
        skew_x: 0.1,
        skew_y: -0.05,
        ..ViewTransform::INITIAL
    };
    let view = Rect::new(0.0, 0.0, 960.0, 600.0);
    group.bench_function("visible_rect", |b| {
        b.iter(|| black_box(black_box(skewed).visible_rect(view)));
    });
    group.bench_function("apply_inverse", |b| {
        b.iter(|| black_box(black_box(skewed).apply_inverse(Point::new(480.0, 300.0))));
    });

    group.finish();
}

criterion_group!(benches, bench_viewport);
criterion_main!(benches);

// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Algebraic laws of the view transform: inverse round trip, drag deltas, and
//! scale composition.

use kurbo::{Point, Rect};
use proptest::prelude::*;
use tourscope_view2d::{TransformState, ViewTransform};

fn transform() -> impl Strategy<Value = ViewTransform> {
    (
        0.05..20.0_f64,
        0.05..20.0_f64,
        -5000.0..5000.0_f64,
        -5000.0..5000.0_f64,
        -0.5..0.5_f64,
        -0.5..0.5_f64,
    )
        .prop_map(|(sx, sy, tx, ty, kx, ky)| ViewTransform {
            scale_x: sx,
            scale_y: sy,
            translate_x: tx,
            translate_y: ty,
            skew_x: kx * sx,
            skew_y: ky * sy,
        })
}

fn assert_close(a: Point, b: Point) -> Result<(), TestCaseError> {
    let tol = 1e-6 * (1.0 + b.x.abs().max(b.y.abs()));
    prop_assert!(
        (a.x - b.x).abs() < tol && (a.y - b.y).abs() < tol,
        "{a:?} != {b:?}"
    );
    Ok(())
}

proptest! {
    #[test]
    fn inverse_round_trips_the_viewport(t in transform(), w in 1.0..4000.0_f64, h in 1.0..4000.0_f64) {
        let view = Rect::new(0.0, 0.0, w, h);
        let forward = t.to_affine();
        let inverse = t.inverse_affine();
        for corner in [
            Point::new(view.x0, view.y0),
            Point::new(view.x1, view.y0),
            Point::new(view.x0, view.y1),
            Point::new(view.x1, view.y1),
        ] {
            // Forward of the indicator corner reproduces the viewport corner.
            assert_close(forward * (inverse * corner), corner)?;
            // And the other way around.
            assert_close(inverse * (forward * corner), corner)?;
        }
    }

    #[test]
    fn drag_changes_translation_by_pointer_delta(
        t in transform(),
        x0 in -2000.0..2000.0_f64,
        y0 in -2000.0..2000.0_f64,
        x1 in -2000.0..2000.0_f64,
        y1 in -2000.0..2000.0_f64,
    ) {
        let mut state = TransformState::new();
        state.set_transform(t);
        let before = state.transform();

        state.drag_start(Point::new(x0, y0));
        state.drag_move(Point::new(x1, y1));
        state.drag_end();
        let after = state.transform();

        prop_assert!((after.translate_x - (before.translate_x + (x1 - x0))).abs() < 1e-9);
        prop_assert!((after.translate_y - (before.translate_y + (y1 - y0))).abs() < 1e-9);
        prop_assert_eq!(after.scale_x, before.scale_x);
        prop_assert_eq!(after.scale_y, before.scale_y);
        prop_assert_eq!(after.skew_x, before.skew_x);
        prop_assert_eq!(after.skew_y, before.skew_y);
    }

    #[test]
    fn scale_by_composes_multiplicatively(a in 0.2..5.0_f64, b in 0.2..5.0_f64) {
        let mut stepwise = TransformState::new();
        stepwise.scale_by(a);
        stepwise.scale_by(b);

        let mut once = TransformState::new();
        once.scale_by(a * b);

        let s = stepwise.transform();
        let o = once.transform();
        prop_assert!((s.scale_x - o.scale_x).abs() < 1e-12 * o.scale_x.max(1.0));
        prop_assert!((s.scale_y - o.scale_y).abs() < 1e-12 * o.scale_y.max(1.0));
    }

    #[test]
    fn reset_always_restores_initial(t in transform(), factor in 0.1..10.0_f64) {
        let mut state = TransformState::new();
        state.set_transform(t);
        state.scale_by(factor);
        state.reset();
        prop_assert_eq!(state.transform(), ViewTransform::INITIAL);
    }
}

// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property checks for scale monotonicity and endpoint mapping.

use kurbo::{Point, Size};
use proptest::prelude::*;
use tourscope_scale::{CoordinateMapper, LinearScale, RANGE_FACTOR};

fn point() -> impl Strategy<Value = Point> {
    (-1.0e6..1.0e6_f64, -1.0e6..1.0e6_f64).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn x_scale_maps_min_to_zero_and_max_to_double_width(
        points in prop::collection::vec(point(), 2..64),
        width in 1.0..4096.0_f64,
    ) {
        let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        prop_assume!(max_x > min_x);

        let mapper = CoordinateMapper::from_points(&points, Size::new(width, 100.0));
        let scale = mapper.x_scale();
        prop_assert_eq!(scale.apply(min_x), 0.0);
        let top = scale.apply(max_x);
        prop_assert!((top - RANGE_FACTOR * width).abs() < 1e-6 * width.max(1.0));
    }

    #[test]
    fn scale_is_monotonic_non_decreasing(
        lo in -1.0e6..1.0e6_f64,
        span in 1.0e-3..1.0e6_f64,
        extent in 0.0..4096.0_f64,
        a in -2.0e6..2.0e6_f64,
        b in -2.0e6..2.0e6_f64,
    ) {
        let scale = LinearScale::new(lo..lo + span, 0.0..RANGE_FACTOR * extent);
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(scale.apply(a) <= scale.apply(b));
    }

    #[test]
    fn empty_set_maps_any_input_to_zero(x in any::<f64>(), y in any::<f64>()) {
        let mapper = CoordinateMapper::from_points(&[], Size::new(500.0, 500.0));
        prop_assert_eq!(mapper.map_point(Point::new(x, y)), Point::ZERO);
    }
}

// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::linear::LinearScale;

/// Multiplier applied to the render extent to obtain the scale range.
///
/// The main view starts at half scale; a range of twice the extent keeps the
/// whole tour visible under that initial transform.
pub const RANGE_FACTOR: f64 = 2.0;

/// Maps domain points into render space using one [`LinearScale`] per axis.
///
/// The scales are derived from the bounding box of a point set. Applying the
/// mapper is pure; mapping the same point twice always yields the same
/// render-space coordinates, which is what keeps nodes and link endpoints in
/// agreement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    x: LinearScale,
    y: LinearScale,
}

impl CoordinateMapper {
    /// Derives a mapper for `points` rendered into `extent`.
    ///
    /// - The domain is the bounding box of `points` (`[0, 0]` when empty).
    /// - The range is `[0, RANGE_FACTOR * extent]` on each axis, collapsed to
    ///   `[0, 0]` when an extent is non-positive or non-finite.
    #[must_use]
    pub fn from_points(points: &[Point], extent: Size) -> Self {
        let bounds = bounding_box(points).unwrap_or(Rect::ZERO);
        let width = usable_extent(extent.width) * RANGE_FACTOR;
        let height = usable_extent(extent.height) * RANGE_FACTOR;
        Self {
            x: LinearScale::new(bounds.x0..bounds.x1, 0.0..width),
            y: LinearScale::new(bounds.y0..bounds.y1, 0.0..height),
        }
    }

    /// Creates a mapper from explicit per-axis scales.
    #[must_use]
    pub fn from_scales(x: LinearScale, y: LinearScale) -> Self {
        Self { x, y }
    }

    /// Returns the x-axis scale.
    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x
    }

    /// Returns the y-axis scale.
    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y
    }

    /// Maps a domain point into render space.
    #[must_use]
    pub fn map_point(&self, pt: Point) -> Point {
        Point::new(self.x.apply(pt.x), self.y.apply(pt.y))
    }

    /// Maps a render-space point back into the domain.
    #[must_use]
    pub fn unmap_point(&self, pt: Point) -> Point {
        Point::new(self.x.invert(pt.x), self.y.invert(pt.y))
    }

    /// Maps every point, preserving order.
    #[must_use]
    pub fn map_points(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|pt| self.map_point(*pt)).collect()
    }
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::from_scales(LinearScale::ZERO, LinearScale::ZERO)
    }
}

fn usable_extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

fn bounding_box(points: &[Point]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    let init = Rect::from_points(*first, *first);
    Some(rest.iter().fold(init, |acc, pt| {
        Rect::new(
            acc.x0.min(pt.x),
            acc.y0.min(pt.y),
            acc.x1.max(pt.x),
            acc.y1.max(pt.y),
        )
    }))
}

// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use kurbo::{Affine, Point, Rect, Vec2};

/// A 2D affine view transform expressed as scale, translate and skew.
///
/// The forward transform is a single matrix composed as translate, then
/// scale, then skew:
///
/// ```text
/// [ scale_x  skew_x   translate_x ]
/// [ skew_y   scale_y  translate_y ]
/// [ 0        0        1           ]
/// ```
///
/// This is the same layout as an SVG `matrix(a, b, c, d, e, f)` with
/// `a = scale_x`, `b = skew_y`, `c = skew_x`, `d = scale_y`,
/// `e = translate_x`, `f = translate_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
    /// Horizontal translation in screen pixels.
    pub translate_x: f64,
    /// Vertical translation in screen pixels.
    pub translate_y: f64,
    /// Horizontal skew coefficient.
    pub skew_x: f64,
    /// Vertical skew coefficient.
    pub skew_y: f64,
}

impl ViewTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        skew_x: 0.0,
        skew_y: 0.0,
    };

    /// The initial transform of the main view: half scale, no translation or skew.
    ///
    /// The overview occupies the same logical space at full scale, so the main
    /// view starts zoomed out.
    pub const INITIAL: Self = Self {
        scale_x: 0.5,
        scale_y: 0.5,
        translate_x: 0.0,
        translate_y: 0.0,
        skew_x: 0.0,
        skew_y: 0.0,
    };

    /// Builds a transform from a [`kurbo::Affine`].
    #[must_use]
    pub fn from_affine(affine: Affine) -> Self {
        let [a, b, c, d, e, f] = affine.as_coeffs();
        Self {
            scale_x: a,
            scale_y: d,
            translate_x: e,
            translate_y: f,
            skew_x: c,
            skew_y: b,
        }
    }

    /// Returns the forward transform as a [`kurbo::Affine`].
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::new([
            self.scale_x,
            self.skew_y,
            self.skew_x,
            self.scale_y,
            self.translate_x,
            self.translate_y,
        ])
    }

    /// Returns the exact inverse of [`ViewTransform::to_affine`].
    ///
    /// For a singular transform (see [`ViewTransform::is_invertible`]) the
    /// coefficients are not finite.
    #[must_use]
    pub fn inverse_affine(self) -> Affine {
        self.to_affine().inverse()
    }

    /// Returns `true` if the transform has a finite, non-zero determinant.
    #[must_use]
    pub fn is_invertible(self) -> bool {
        let det = self.to_affine().determinant();
        det != 0.0 && det.is_finite()
    }

    /// Returns the translation component.
    #[must_use]
    pub fn translation(self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Applies the forward transform to a render-space point.
    #[must_use]
    pub fn apply(self, pt: Point) -> Point {
        self.to_affine() * pt
    }

    /// Applies the inverse transform to a screen-space point.
    #[must_use]
    pub fn apply_inverse(self, pt: Point) -> Point {
        self.inverse_affine() * pt
    }

    /// Returns the render-space bounding box visible through `view`.
    ///
    /// The four corners of `view` are inverse-transformed and their bounding
    /// box is returned. Without skew this is exactly the inverse image.
    #[must_use]
    pub fn visible_rect(self, view: Rect) -> Rect {
        let inv = self.inverse_affine();
        let q0 = inv * Point::new(view.x0, view.y0);
        let q1 = inv * Point::new(view.x1, view.y0);
        let q2 = inv * Point::new(view.x0, view.y1);
        let q3 = inv * Point::new(view.x1, view.y1);
        let min_x = q0.x.min(q1.x).min(q2.x).min(q3.x);
        let min_y = q0.y.min(q1.y).min(q2.y).min(q3.y);
        let max_x = q0.x.max(q1.x).max(q2.x).max(q3.x);
        let max_y = q0.y.max(q1.y).max(q2.y).max(q3.y);
        Rect::new(min_x, min_y, max_x, max_y)
    }

    /// Formats the forward transform as an SVG/CSS `matrix(...)` value.
    #[must_use]
    pub fn to_matrix_string(self) -> String {
        matrix_string(self.to_affine())
    }

    /// Formats the inverse transform as an SVG/CSS `matrix(...)` value.
    #[must_use]
    pub fn to_inverse_matrix_string(self) -> String {
        matrix_string(self.inverse_affine())
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl From<ViewTransform> for Affine {
    fn from(t: ViewTransform) -> Self {
        t.to_affine()
    }
}

fn matrix_string(affine: Affine) -> String {
    let [a, b, c, d, e, f] = affine.as_coeffs().map(positive_zero);
    format!("matrix({a}, {b}, {c}, {d}, {e}, {f})")
}

// Inversion produces `-0.0` for zero coefficients; print those as `0`.
fn positive_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Affine, Point};

use crate::drag::DragState;
use crate::transform::ViewTransform;

/// Factor applied by the discrete zoom-in command.
pub const ZOOM_IN_FACTOR: f64 = 1.2;

/// Factor applied by the discrete zoom-out command.
pub const ZOOM_OUT_FACTOR: f64 = 0.8;

/// Default lower bound for each scale component.
pub const DEFAULT_MIN_SCALE: f64 = 1e-3;

/// Default upper bound for each scale component.
pub const DEFAULT_MAX_SCALE: f64 = 1e3;

/// Interaction phase of a [`TransformState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No gesture in progress; move events are ignored.
    #[default]
    Idle,
    /// A drag gesture is in progress.
    Dragging,
}

/// The mutable pan/zoom state of the main viewport.
///
/// `TransformState` has exactly one writer: the interaction handler that
/// forwards pointer and button events. Renderers only read
/// [`TransformState::transform`].
///
/// State machine:
/// - [`TransformState::drag_start`]: `Idle → Dragging`.
/// - [`TransformState::drag_end`] / [`TransformState::pointer_leave`]:
///   `Dragging → Idle`; no-op when idle.
/// - [`TransformState::drag_move`]: only acts while dragging.
/// - [`TransformState::reset`] / [`TransformState::scale_by`]: valid in either
///   phase and leave the phase untouched.
#[derive(Clone, Debug)]
pub struct TransformState {
    transform: ViewTransform,
    initial: ViewTransform,
    drag: DragState,
    min_scale: f64,
    max_scale: f64,
}

impl TransformState {
    /// Creates a state starting at [`ViewTransform::INITIAL`].
    ///
    /// Scale components are clamped to `[1e-3, 1e3]` by default.
    #[must_use]
    pub fn new() -> Self {
        Self::with_initial(ViewTransform::INITIAL)
    }

    /// Creates a state whose initial (and reset) transform is `initial`.
    #[must_use]
    pub fn with_initial(initial: ViewTransform) -> Self {
        Self {
            transform: initial,
            initial,
            drag: DragState::default(),
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
        }
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// Returns the transform restored by [`TransformState::reset`].
    #[must_use]
    pub fn initial(&self) -> ViewTransform {
        self.initial
    }

    /// Returns the current forward transform as a [`kurbo::Affine`].
    #[must_use]
    pub fn affine(&self) -> Affine {
        self.transform.to_affine()
    }

    /// Returns the current interaction phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        if self.drag.is_dragging() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    /// Returns `true` while a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Replaces the current transform, clamping its scale into the limits.
    pub fn set_transform(&mut self, transform: ViewTransform) {
        self.transform = transform;
        self.clamp_scale();
    }

    /// Restores the initial transform, clamped into the scale limits. The
    /// drag phase is unchanged.
    pub fn reset(&mut self) {
        self.transform = self.initial;
        self.clamp_scale();
    }

    /// Sets the minimum and maximum scale factors.
    ///
    /// The provided range is normalized so that `min_scale <= max_scale`.
    /// The current scale is clamped into the new range. Limits that are not
    /// finite and positive are ignored and the previous range is kept.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(min_scale) || !valid(max_scale) {
            return;
        }
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.clamp_scale();
    }

    /// Returns the `(min, max)` scale limits.
    #[must_use]
    pub fn scale_limits(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    /// Multiplies both scale components by `factor`.
    ///
    /// Translation and skew are left untouched. Non-finite or non-positive
    /// factors are ignored. Each component is clamped into the scale limits,
    /// so composition is exactly multiplicative only while the limits are not
    /// reached.
    pub fn scale_by(&mut self, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.transform.scale_x *= factor;
        self.transform.scale_y *= factor;
        self.clamp_scale();
    }

    /// Begins a drag gesture at pointer position `pos`.
    ///
    /// Starting while already dragging re-anchors the gesture at `pos`.
    pub fn drag_start(&mut self, pos: Point) {
        self.drag.start(pos, self.transform.translation());
    }

    /// Updates the translation for pointer position `pos`.
    ///
    /// The translation becomes the translation at gesture start plus the
    /// pointer offset since then, in screen pixels. Returns `false` (and does
    /// nothing) when no gesture is in progress.
    pub fn drag_move(&mut self, pos: Point) -> bool {
        let Some(translate) = self.drag.translation_at(pos) else {
            return false;
        };
        self.transform.translate_x = translate.x;
        self.transform.translate_y = translate.y;
        true
    }

    /// Ends the current drag gesture; no-op when idle.
    pub fn drag_end(&mut self) {
        self.drag.end();
    }

    /// Handles the pointer leaving the surface by ending any active gesture.
    pub fn pointer_leave(&mut self) {
        if self.drag.is_dragging() {
            self.drag_end();
        }
    }

    /// Formats the current forward transform as an SVG/CSS `matrix(...)` value.
    #[must_use]
    pub fn to_matrix_string(&self) -> String {
        self.transform.to_matrix_string()
    }

    /// Formats the current inverse transform as an SVG/CSS `matrix(...)` value.
    #[must_use]
    pub fn to_inverse_matrix_string(&self) -> String {
        self.transform.to_inverse_matrix_string()
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TransformStateDebugInfo {
        TransformStateDebugInfo {
            transform: self.transform,
            initial: self.initial,
            phase: self.phase(),
            drag_anchor: self.drag.start_pos,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
        }
    }

    fn clamp_scale(&mut self) {
        self.transform.scale_x = self.transform.scale_x.clamp(self.min_scale, self.max_scale);
        self.transform.scale_y = self.transform.scale_y.clamp(self.min_scale, self.max_scale);
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug snapshot of a [`TransformState`].
#[derive(Clone, Copy, Debug)]
pub struct TransformStateDebugInfo {
    /// Current transform.
    pub transform: ViewTransform,
    /// Transform restored on reset.
    pub initial: ViewTransform,
    /// Current interaction phase.
    pub phase: DragPhase,
    /// Pointer position where the active gesture started.
    pub drag_anchor: Option<Point>,
    /// Minimum scale factor.
    pub min_scale: f64,
    /// Maximum scale factor.
    pub max_scale: f64,
}

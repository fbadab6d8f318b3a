// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tourscope View 2D: the pan/zoom transform of the main viewport.
//!
//! This crate provides a small, headless model of the transform applied to
//! render-space content. It focuses on:
//! - A plain transform value ([`ViewTransform`]) with scale, translate and
//!   skew on both axes, plus its exact inverse.
//! - A single-owner state machine ([`TransformState`]) driven by drag
//!   gestures and discrete zoom commands.
//!
//! It does **not** own any graph data or rendering backend. Callers are
//! expected to:
//! - Forward pointer events into [`TransformState::drag_start`],
//!   [`TransformState::drag_move`] and [`TransformState::drag_end`].
//! - Read [`TransformState::transform`] when rendering, and use the inverse
//!   for overview indicators and hit testing.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use tourscope_view2d::{TransformState, ViewTransform, ZOOM_IN_FACTOR};
//!
//! let mut state = TransformState::new();
//! assert_eq!(state.transform(), ViewTransform::INITIAL);
//!
//! state.scale_by(ZOOM_IN_FACTOR);
//! state.drag_start(Point::new(10.0, 10.0));
//! state.drag_move(Point::new(40.0, 30.0));
//! state.drag_end();
//!
//! let t = state.transform();
//! assert_eq!((t.translate_x, t.translate_y), (30.0, 20.0));
//!
//! state.reset();
//! assert_eq!(state.transform(), ViewTransform::INITIAL);
//! ```
//!
//! ## Design notes
//!
//! - Drag distance maps one-to-one onto translation, independent of zoom.
//! - Scale components are clamped into configurable limits so the transform
//!   never degenerates to a zero or negative scale.
//! - Skew is carried through composition and inversion but no command in
//!   this crate changes it.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod drag;
mod state;
mod transform;

pub use drag::DragState;
pub use state::{
    DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DragPhase, TransformState, TransformStateDebugInfo,
    ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};
pub use transform::ViewTransform;

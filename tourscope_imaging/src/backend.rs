// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::{Brush, Color};

use crate::ops::{ClipShape, DrawOp, LayerOp, PaintDesc, PaintId, StateOp};

/// Creation and release of paints.
///
/// An id stays valid, and keeps naming the same paint, until it is destroyed.
/// Renderers destroy the paints they create before returning, so a backend
/// reused across frames does not accumulate them.
pub trait ResourceBackend {
    /// Registers a paint and returns its id.
    fn create_paint(&mut self, desc: PaintDesc) -> PaintId;
    /// Releases a paint. Ops already issued may still name `id`; new ops
    /// must not.
    fn destroy_paint(&mut self, id: PaintId);
}

/// Sink for imaging operations.
pub trait ImagingBackend: ResourceBackend {
    /// Applies a state change.
    fn state(&mut self, op: StateOp);

    /// Draws a mark.
    fn draw(&mut self, op: DrawOp);

    /// Shorthand for `state(StateOp::PushLayer(op))`.
    #[inline]
    fn layer_push(&mut self, op: LayerOp) {
        self.state(StateOp::PushLayer(op));
    }

    /// Shorthand for `state(StateOp::PopLayer)`.
    #[inline]
    fn layer_pop(&mut self) {
        self.state(StateOp::PopLayer);
    }
}

/// Scoped helpers over any [`ImagingBackend`].
///
/// Kept out of [`ImagingBackend`] itself so `dyn ImagingBackend` stays usable.
pub trait ImagingBackendExt: ImagingBackend {
    /// Runs `f` between a push of `op` and the matching pop.
    ///
    /// A panic inside `f` leaves the layer open.
    #[inline]
    fn with_layer<R>(&mut self, op: LayerOp, f: impl FnOnce(&mut Self) -> R) -> R {
        self.layer_push(op);
        let result = f(self);
        self.layer_pop();
        result
    }

    /// Runs `f` clipped to `shape`.
    #[inline]
    fn with_clip<R>(&mut self, shape: ClipShape, f: impl FnOnce(&mut Self) -> R) -> R {
        self.with_layer(LayerOp::clip(shape), f)
    }

    /// Runs `f` in a group faded to `opacity`.
    #[inline]
    fn with_opacity_layer<R>(&mut self, opacity: f32, f: impl FnOnce(&mut Self) -> R) -> R {
        self.with_layer(LayerOp::fade(opacity), f)
    }

    /// Registers a single-colour paint.
    #[inline]
    fn solid_paint(&mut self, color: Color) -> PaintId {
        self.create_paint(PaintDesc {
            brush: Brush::Solid(color),
        })
    }
}

impl<B: ImagingBackend + ?Sized> ImagingBackendExt for B {}

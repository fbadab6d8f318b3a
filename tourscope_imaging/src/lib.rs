// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tourscope Imaging: the drawing vocabulary shared by the tour renderers and
//! their outputs.
//!
//! Renderers never talk to an output format directly. They emit a short
//! stream of plain values into an [`ImagingBackend`]:
//!
//! - [`StateOp`] changes what later marks look like: the transform, the
//!   current paint and stroke, and the layer stack.
//! - [`DrawOp`] leaves a mark: rectangles, rounded rectangles, line segments
//!   and circles, which is all a tour view needs.
//! - [`LayerOp`] opens a scope with a clip, an opacity, or both. Scopes nest
//!   and every push is matched by a pop; [`ImagingBackendExt::with_layer`]
//!   keeps that pairing for you.
//!
//! Paints are resources. A backend hands out a [`PaintId`] from
//! [`ResourceBackend::create_paint`] and later ops refer to it by id.
//!
//! Shapes are kurbo's `f64` types, so render-space points produced by the
//! coordinate mapper reach the backend unchanged.
//!
//! ```
//! use kurbo::{Circle, Line};
//! use peniko::Color;
//! use tourscope_imaging::{
//!     DrawOp, ImagingBackend, ImagingBackendExt, ImagingOp, PaintDesc, PaintId,
//!     ResourceBackend, StateOp,
//! };
//!
//! #[derive(Default)]
//! struct Tape(Vec<ImagingOp>, u32);
//!
//! impl ResourceBackend for Tape {
//!     fn create_paint(&mut self, _: PaintDesc) -> PaintId {
//!         self.1 += 1;
//!         PaintId(self.1 - 1)
//!     }
//!     fn destroy_paint(&mut self, _: PaintId) {}
//! }
//!
//! impl ImagingBackend for Tape {
//!     fn state(&mut self, op: StateOp) {
//!         self.0.push(ImagingOp::State(op));
//!     }
//!     fn draw(&mut self, op: DrawOp) {
//!         self.0.push(ImagingOp::Draw(op));
//!     }
//! }
//!
//! let mut tape = Tape::default();
//! tape.with_opacity_layer(0.6, |t| {
//!     let grey = t.solid_paint(Color::from_rgba8(0x99, 0x99, 0x99, 0xff));
//!     t.state(StateOp::SetPaint(grey));
//!     t.draw(DrawOp::StrokeLine(Line::new((0.0, 0.0), (8.0, 6.0))));
//!     t.draw(DrawOp::FillCircle(Circle::new((8.0, 6.0), 1.5)));
//! });
//! assert_eq!(tape.0.len(), 5);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod backend;
mod ops;

pub use kurbo::{Affine, Circle, Line, Rect, RoundedRect};

pub use backend::{ImagingBackend, ImagingBackendExt, ResourceBackend};
pub use ops::{ClipShape, DrawOp, ImagingOp, LayerOp, PaintDesc, PaintId, StateOp, StrokeStyle};

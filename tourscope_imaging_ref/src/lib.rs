// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tourscope Imaging Reference Backend: a tape recorder for imaging ops.
//!
//! [`RefBackend`] draws nothing. It keeps every op it receives together with
//! the [`StateSnapshot`] in force right after the op, so tests can ask
//! questions like "which transform were the node circles drawn under?" or
//! "was the indicator inside an opacity layer?".
//!
//! ```
//! use peniko::Color;
//! use tourscope_imaging::{Affine, Circle, DrawOp, ImagingBackend, ImagingBackendExt, StateOp};
//! use tourscope_imaging_ref::RefBackend;
//!
//! let mut tape = RefBackend::default();
//! let red = tape.solid_paint(Color::from_rgba8(0xf5, 0x63, 0x42, 0xff));
//! tape.state(StateOp::SetTransform(Affine::scale(0.5)));
//! tape.state(StateOp::SetPaint(red));
//! tape.draw(DrawOp::FillCircle(Circle::new((4.0, 4.0), 15.0)));
//!
//! let (_, state) = tape.draws().next().unwrap();
//! assert_eq!(state.transform, Affine::scale(0.5));
//! assert_eq!(state.paint, Some(red));
//! ```

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use tourscope_imaging::{
    Affine, DrawOp, ImagingBackend, ImagingOp, LayerOp, PaintDesc, PaintId, ResourceBackend,
    StateOp, StrokeStyle,
};

/// Imaging state as seen by one recorded op.
#[derive(Clone, Debug)]
pub struct StateSnapshot {
    /// Transform in force.
    pub transform: Affine,
    /// How many layers are open.
    pub layer_stack_depth: u32,
    /// Innermost open layer.
    pub layer_top: Option<LayerOp>,
    /// Paint in force.
    pub paint: Option<PaintId>,
    /// Stroke in force.
    pub stroke: Option<StrokeStyle>,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            layer_stack_depth: 0,
            layer_top: None,
            paint: None,
            stroke: None,
        }
    }
}

/// Recording backend.
#[derive(Default, Debug)]
pub struct RefBackend {
    paints: Vec<Option<PaintDesc>>,
    /// Destroyed paints whose slots are freed on the next [`RefBackend::clear`].
    released: Vec<PaintId>,
    ops: Vec<ImagingOp>,
    snapshots: Vec<StateSnapshot>,
    current: StateSnapshot,
    layers: Vec<LayerOp>,
}

impl RefBackend {
    /// Every op received so far, in order.
    #[must_use]
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Every op paired with the state right after it.
    pub fn events(&self) -> impl Iterator<Item = (&ImagingOp, &StateSnapshot)> {
        self.ops.iter().zip(&self.snapshots)
    }

    /// Draw ops only, paired with the state they were drawn in.
    pub fn draws(&self) -> impl Iterator<Item = (&DrawOp, &StateSnapshot)> {
        self.events().filter_map(|(op, state)| match op {
            ImagingOp::Draw(draw) => Some((draw, state)),
            ImagingOp::State(_) => None,
        })
    }

    /// State after the last op.
    #[must_use]
    pub fn current(&self) -> &StateSnapshot {
        &self.current
    }

    /// Descriptor of `id`.
    ///
    /// A destroyed paint stays readable until the next [`clear`](Self::clear),
    /// since recorded ops may still name it.
    #[must_use]
    pub fn paint(&self, id: PaintId) -> Option<&PaintDesc> {
        self.paints.get(id.0 as usize)?.as_ref()
    }

    /// Number of paints created and not yet destroyed.
    #[must_use]
    pub fn live_paints(&self) -> usize {
        self.paints.iter().flatten().count() - self.released.len()
    }

    /// Open layers right now.
    #[must_use]
    pub fn layer_depth(&self) -> usize {
        self.layers.len()
    }

    /// Forgets the recorded ops and frees the slots of destroyed paints.
    /// Live paints and the current state survive.
    pub fn clear(&mut self) {
        self.ops.clear();
        self.snapshots.clear();
        for id in self.released.drain(..) {
            self.paints[id.0 as usize] = None;
        }
    }

    fn record(&mut self, op: ImagingOp) {
        self.ops.push(op);
        self.snapshots.push(self.current.clone());
    }
}

impl ResourceBackend for RefBackend {
    fn create_paint(&mut self, desc: PaintDesc) -> PaintId {
        let index = match self.paints.iter().position(Option::is_none) {
            Some(free) => {
                self.paints[free] = Some(desc);
                free
            }
            None => {
                self.paints.push(Some(desc));
                self.paints.len() - 1
            }
        };
        PaintId(u32::try_from(index).unwrap_or(u32::MAX))
    }

    fn destroy_paint(&mut self, id: PaintId) {
        let known = matches!(self.paints.get(id.0 as usize), Some(Some(_)));
        if known && !self.released.contains(&id) {
            self.released.push(id);
        }
    }
}

impl ImagingBackend for RefBackend {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetTransform(transform) => self.current.transform = *transform,
            StateOp::SetPaint(id) => self.current.paint = Some(*id),
            StateOp::SetStroke(stroke) => self.current.stroke = Some(stroke.clone()),
            StateOp::PushLayer(layer) => self.layers.push(*layer),
            StateOp::PopLayer => {
                self.layers.pop();
            }
        }
        self.current.layer_stack_depth = u32::try_from(self.layers.len()).unwrap_or(u32::MAX);
        self.current.layer_top = self.layers.last().copied();
        self.record(ImagingOp::State(op));
    }

    fn draw(&mut self, op: DrawOp) {
        self.record(ImagingOp::Draw(op));
    }
}

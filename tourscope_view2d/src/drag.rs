// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture tracking: pointer anchor plus the translation captured at gesture start.
//!
//! ## Usage
//!
//! 1) Start a gesture with [`DragState::start`], passing the pointer position
//!    and the translation in effect at that moment.
//! 2) On each move, call [`DragState::translation_at`] to get the translation
//!    the view should have for the current pointer position.
//! 3) End the gesture with [`DragState::end`].
//!
//! The translation is always recomputed from the start anchor, so a long
//! sequence of moves never accumulates rounding drift.

use kurbo::{Point, Vec2};

/// Tracks an in-progress drag gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    /// Pointer position when the gesture started.
    pub start_pos: Option<Point>,
    /// View translation when the gesture started.
    pub start_translate: Vec2,
}

impl DragState {
    /// Starts tracking a gesture anchored at `pos` with the given translation.
    pub fn start(&mut self, pos: Point, translate: Vec2) {
        self.start_pos = Some(pos);
        self.start_translate = translate;
    }

    /// Returns the pointer offset from the gesture start, if dragging.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| pos - start)
    }

    /// Returns the translation the view should have for pointer position `pos`.
    #[must_use]
    pub fn translation_at(&self, pos: Point) -> Option<Vec2> {
        self.total_offset(pos).map(|offset| self.start_translate + offset)
    }

    /// Ends the gesture and clears the anchor.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.start_translate = Vec2::ZERO;
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}

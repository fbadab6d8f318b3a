// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Circle, Line, Rect, RoundedRect, Shape};
use peniko::Brush;

/// Handle to a paint owned by a backend.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaintId(pub u32);

/// What a paint looks like.
#[derive(Clone, Debug)]
pub struct PaintDesc {
    /// Colour or gradient to fill or stroke with.
    pub brush: Brush,
}

/// Line width, caps, joins and dashes for stroked marks.
pub type StrokeStyle = kurbo::Stroke;

/// Region a layer is clipped to, in the coordinates current when the layer
/// is pushed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClipShape {
    /// Plain rectangle.
    Rect(Rect),
    /// Rectangle with rounded corners.
    RoundedRect(RoundedRect),
}

impl ClipShape {
    /// Axis-aligned bounds of the clip region before any transform.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect(rect) => *rect,
            Self::RoundedRect(rr) => rr.rect(),
        }
    }
}

/// A scope on the layer stack.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LayerOp {
    /// Clip for everything drawn inside the scope.
    pub clip: Option<ClipShape>,
    /// Group opacity in `0..=1`, applied once to the composited scope.
    pub opacity: Option<f32>,
}

impl LayerOp {
    /// A scope that only clips.
    #[inline]
    #[must_use]
    pub fn clip(shape: ClipShape) -> Self {
        Self {
            clip: Some(shape),
            ..Self::default()
        }
    }

    /// A scope that only fades.
    #[inline]
    #[must_use]
    pub fn fade(opacity: f32) -> Self {
        Self {
            opacity: Some(opacity),
            ..Self::default()
        }
    }

    /// `true` when pushing this scope changes nothing.
    #[inline]
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.clip.is_none() && self.opacity.is_none()
    }
}

/// Changes to the drawing state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Replace the current transform.
    SetTransform(Affine),
    /// Open a layer scope; must be closed by a later [`StateOp::PopLayer`].
    PushLayer(LayerOp),
    /// Close the innermost layer scope.
    PopLayer,
    /// Use this paint for subsequent marks.
    SetPaint(PaintId),
    /// Use this stroke for subsequent stroked marks.
    SetStroke(StrokeStyle),
}

/// Marks, drawn with the current state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawOp {
    /// Filled rectangle.
    FillRect(Rect),
    /// Rectangle outline.
    StrokeRect(Rect),
    /// Filled rectangle with rounded corners.
    FillRoundedRect(RoundedRect),
    /// Stroked segment; tour links.
    StrokeLine(Line),
    /// Filled circle; tour nodes.
    FillCircle(Circle),
}

impl DrawOp {
    /// Local-space bounds of the mark's geometry, ignoring stroke width.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::FillRect(rect) | Self::StrokeRect(rect) => *rect,
            Self::FillRoundedRect(rr) => rr.rect(),
            Self::StrokeLine(line) => line.bounding_box(),
            Self::FillCircle(circle) => circle.bounding_box(),
        }
    }
}

/// One recorded operation.
#[derive(Clone, Debug, PartialEq)]
pub enum ImagingOp {
    /// A [`StateOp`].
    State(StateOp),
    /// A [`DrawOp`].
    Draw(DrawOp),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_constructors() {
        assert!(LayerOp::default().is_noop());
        let clip = LayerOp::clip(ClipShape::Rect(Rect::ZERO));
        assert!(!clip.is_noop());
        assert_eq!(clip.opacity, None);
        let fade = LayerOp::fade(0.2);
        assert_eq!((fade.clip, fade.opacity), (None, Some(0.2)));
    }

    #[test]
    fn mark_bounds() {
        let line = DrawOp::StrokeLine(Line::new((4.0, 9.0), (1.0, 2.0)));
        assert_eq!(line.bounds(), Rect::new(1.0, 2.0, 4.0, 9.0));
        let node = DrawOp::FillCircle(Circle::new((10.0, 10.0), 3.0));
        assert_eq!(node.bounds(), Rect::new(7.0, 7.0, 13.0, 13.0));
        let rounded = RoundedRect::new(0.0, 0.0, 50.0, 20.0, 4.0);
        assert_eq!(
            ClipShape::RoundedRect(rounded).bounds(),
            Rect::new(0.0, 0.0, 50.0, 20.0)
        );
    }
}

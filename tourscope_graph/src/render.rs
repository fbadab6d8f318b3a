// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Circle, Vec2};
use peniko::Color;
use tourscope_imaging::{DrawOp, ImagingBackend, ImagingBackendExt, StateOp, StrokeStyle};

use crate::graph::MappedGraph;

/// Visual parameters for [`render_graph`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphStyle {
    /// Node fill colour.
    pub node_color: Color,
    /// Node circle radius in render units.
    pub node_radius: f64,
    /// Link stroke colour.
    pub link_color: Color,
    /// Link stroke width in render units.
    pub link_width: f64,
    /// Link opacity, multiplied into `link_color`.
    pub link_opacity: f32,
    /// Offset of the graph content inside its surface, applied before the transform.
    pub offset: Vec2,
}

impl GraphStyle {
    /// Colour links are actually stroked with.
    #[must_use]
    pub fn effective_link_color(&self) -> Color {
        self.link_color
            .multiply_alpha(self.link_opacity.clamp(0.0, 1.0))
    }
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            node_color: Color::from_rgba8(0xf5, 0x63, 0x42, 0xff),
            node_radius: 15.0,
            link_color: Color::from_rgba8(0x99, 0x99, 0x99, 0xff),
            link_width: 2.0,
            link_opacity: 0.6,
            offset: Vec2::new(20.0, 20.0),
        }
    }
}

/// Emits `graph` into `backend` under `transform`.
///
/// The content is drawn under `transform * translate(style.offset)`: every
/// link as a stroked line, then every node as a filled circle, so nodes sit
/// on top. An empty graph emits nothing at all.
///
/// The function keeps no state between calls; rendering the same graph twice
/// (main view and overview) yields two independent op sequences. The paints
/// it creates are destroyed before it returns.
pub fn render_graph<B: ImagingBackend + ?Sized>(
    backend: &mut B,
    graph: &MappedGraph,
    transform: Affine,
    style: &GraphStyle,
) {
    if graph.is_empty() {
        return;
    }

    let link_paint = backend.solid_paint(style.effective_link_color());
    let node_paint = backend.solid_paint(style.node_color);

    backend.state(StateOp::SetTransform(
        transform * Affine::translate(style.offset),
    ));

    backend.state(StateOp::SetPaint(link_paint));
    backend.state(StateOp::SetStroke(StrokeStyle::new(style.link_width)));
    for segment in graph.segments() {
        backend.draw(DrawOp::StrokeLine(segment));
    }

    backend.state(StateOp::SetPaint(node_paint));
    for &center in graph.nodes() {
        backend.draw(DrawOp::FillCircle(Circle::new(center, style.node_radius)));
    }

    backend.destroy_paint(link_paint);
    backend.destroy_paint(node_paint);
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Line, Point, Size};
    use tourscope_imaging::{DrawOp, ImagingOp, StateOp};
    use tourscope_imaging_ref::RefBackend;

    use super::*;
    use crate::graph::TourGraph;

    fn mapped_triangle() -> MappedGraph {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        TourGraph::from_tour(&points, &[1, 2, 0])
            .unwrap()
            .map_to_extent(Size::new(100.0, 100.0))
    }

    #[test]
    fn links_are_drawn_before_nodes() {
        let mut backend = RefBackend::default();
        render_graph(
            &mut backend,
            &mapped_triangle(),
            Affine::scale(0.5),
            &GraphStyle::default(),
        );

        let draws: Vec<_> = backend.draws().map(|(op, _)| *op).collect();
        assert_eq!(draws.len(), 6);
        assert!(draws[..3].iter().all(|op| matches!(op, DrawOp::StrokeLine(_))));
        assert!(draws[3..].iter().all(|op| matches!(op, DrawOp::FillCircle(_))));
        assert_eq!(
            draws[2],
            DrawOp::StrokeLine(Line::new((200.0, 200.0), (0.0, 0.0)))
        );
    }

    #[test]
    fn content_offset_is_applied_under_the_transform() {
        let mut backend = RefBackend::default();
        render_graph(
            &mut backend,
            &mapped_triangle(),
            Affine::scale(0.5),
            &GraphStyle::default(),
        );

        let (_, state) = backend.draws().next().unwrap();
        assert_eq!(
            state.transform,
            Affine::new([0.5, 0.0, 0.0, 0.5, 10.0, 10.0])
        );
        // Node (200, 200) lands at screen (110, 110).
        assert_eq!(state.transform * Point::new(200.0, 200.0), Point::new(110.0, 110.0));
    }

    #[test]
    fn paints_follow_the_style() {
        let mut backend = RefBackend::default();
        let style = GraphStyle::default();
        render_graph(&mut backend, &mapped_triangle(), Affine::IDENTITY, &style);

        let mut draws = backend.draws();
        let (_, link_state) = draws.next().unwrap();
        let (_, node_state) = draws.last().unwrap();

        let link = backend.paint(link_state.paint.unwrap()).unwrap();
        assert_eq!(
            link.brush,
            peniko::Brush::Solid(Color::from_rgba8(0x99, 0x99, 0x99, 0xff).multiply_alpha(0.6))
        );
        assert_eq!(link_state.stroke.as_ref().map(|s| s.width), Some(2.0));

        let node = backend.paint(node_state.paint.unwrap()).unwrap();
        assert_eq!(node.brush, peniko::Brush::Solid(style.node_color));

        // Both paints are released once the graph is drawn.
        assert_eq!(backend.live_paints(), 0);
    }

    #[test]
    fn empty_graph_emits_no_ops() {
        let mut backend = RefBackend::default();
        let empty = TourGraph::new().map_to_extent(Size::new(10.0, 10.0));
        render_graph(&mut backend, &empty, Affine::IDENTITY, &GraphStyle::default());
        assert!(backend.ops().is_empty());
    }

    #[test]
    fn repeated_renders_are_identical() {
        let graph = mapped_triangle();
        let style = GraphStyle::default();
        let mut backend = RefBackend::default();
        render_graph(&mut backend, &graph, Affine::scale(0.5), &style);
        let first: Vec<ImagingOp> = backend.ops().to_vec();
        backend.clear();
        render_graph(&mut backend, &graph, Affine::scale(0.5), &style);

        // Paint ids differ between frames; everything else matches.
        let strip = |ops: &[ImagingOp]| -> Vec<ImagingOp> {
            ops.iter()
                .filter(|op| !matches!(op, ImagingOp::State(StateOp::SetPaint(_))))
                .cloned()
                .collect()
        };
        assert_eq!(strip(&first), strip(backend.ops()));
    }
}

// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, RoundedRect, Size};
use peniko::Color;
use tourscope_graph::{GraphStyle, MappedGraph, TourGraph, render_graph};
use tourscope_imaging::{ClipShape, DrawOp, ImagingBackend, ImagingBackendExt, StateOp};
use tourscope_minimap::{MinimapController, MinimapStyle};
use tourscope_view2d::TransformState;
use tracing::{debug, trace, warn};

use crate::config::{ViewerConfig, surface_size};
use crate::event::ViewerEvent;

/// Background of the main surface.
pub const SURFACE_BACKGROUND: Color = Color::from_rgba8(0x21, 0x21, 0x21, 0xff);

/// Corner radius of the main surface.
pub const SURFACE_CORNER_RADIUS: f64 = 24.0;

/// The interactive tour view: one pan/zoom transform shared by the main
/// surface and its overview.
///
/// The viewer holds no tour data. Each [`render`](Self::render) maps the
/// graph it is given onto the current surface, so replacing the data is just
/// passing a different graph.
#[derive(Clone, Debug)]
pub struct Viewer {
    state: TransformState,
    minimap: MinimapController,
    size: Size,
    chrome_height: f64,
    zoom_in: f64,
    zoom_out: f64,
    graph_style: GraphStyle,
    minimap_style: MinimapStyle,
}

impl Viewer {
    /// Creates a viewer at the initial transform.
    ///
    /// A config that does not [validate](ViewerConfig::validate) is replaced
    /// by the defaults as a whole.
    #[must_use]
    pub fn new(config: &ViewerConfig) -> Self {
        let fallback;
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!(%err, "invalid viewer config, using defaults");
                fallback = ViewerConfig::default();
                &fallback
            }
        };
        let mut state = TransformState::new();
        state.set_scale_limits(config.min_scale, config.max_scale);
        let graph_style = config.graph_style();
        Self {
            state,
            minimap: MinimapController::new(config.minimap_config()),
            size: config.surface_size(),
            chrome_height: config.chrome_height,
            zoom_in: config.zoom_in,
            zoom_out: config.zoom_out,
            graph_style,
            minimap_style: MinimapStyle {
                graph: graph_style,
                ..MinimapStyle::default()
            },
        }
    }

    /// Resizes the surface. `height` includes the control row.
    ///
    /// The transform is kept as is.
    pub fn set_surface_size(&mut self, width: f64, height: f64) {
        self.size = surface_size(width, height, self.chrome_height);
        debug!(width = self.size.width, height = self.size.height, "surface resized");
    }

    /// Drawable surface size, excluding the control row.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Pan/zoom state of the main view.
    #[must_use]
    pub fn transform_state(&self) -> &TransformState {
        &self.state
    }

    /// Overview controller.
    #[must_use]
    pub fn minimap(&self) -> &MinimapController {
        &self.minimap
    }

    /// Style of the main graph.
    #[must_use]
    pub fn graph_style(&self) -> &GraphStyle {
        &self.graph_style
    }

    /// Applies one input event. Returns `true` if anything visible changed.
    pub fn handle(&mut self, event: ViewerEvent) -> bool {
        trace!(%event, "viewer event");
        match event {
            ViewerEvent::ZoomIn => self.zoom_in(),
            ViewerEvent::ZoomOut => self.zoom_out(),
            ViewerEvent::Reset => self.reset(),
            ViewerEvent::ToggleMinimap => self.toggle_minimap(),
            ViewerEvent::ShowMinimap => return self.set_minimap_visible(true),
            ViewerEvent::HideMinimap => return self.set_minimap_visible(false),
            ViewerEvent::PointerDown(pos) => return self.pointer_down(pos),
            ViewerEvent::PointerMove(pos) => return self.pointer_move(pos),
            ViewerEvent::PointerUp => self.pointer_up(),
            ViewerEvent::PointerLeave => self.pointer_leave(),
        }
        true
    }

    /// Multiplies the scale by the zoom-in factor.
    pub fn zoom_in(&mut self) {
        self.state.scale_by(self.zoom_in);
    }

    /// Multiplies the scale by the zoom-out factor.
    pub fn zoom_out(&mut self) {
        self.state.scale_by(self.zoom_out);
    }

    /// Restores the initial transform. Overview visibility is untouched.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Shows or hides the overview. The transform is untouched.
    pub fn toggle_minimap(&mut self) {
        self.minimap.toggle();
        debug!(visible = self.minimap.is_visible(), "minimap toggled");
    }

    fn set_minimap_visible(&mut self, visible: bool) -> bool {
        let changed = self.minimap.is_visible() != visible;
        self.minimap.set_visible(visible);
        changed
    }

    /// Starts a drag at `pos`.
    ///
    /// Presses on the visible overview do not start a drag. Returns `true` if
    /// a drag started.
    pub fn pointer_down(&mut self, pos: Point) -> bool {
        if self.minimap.contains(self.size, pos) {
            return false;
        }
        self.state.drag_start(pos);
        true
    }

    /// Follows the pointer while dragging. Returns `true` if the view moved.
    pub fn pointer_move(&mut self, pos: Point) -> bool {
        self.state.drag_move(pos)
    }

    /// Ends a drag.
    pub fn pointer_up(&mut self) {
        self.state.drag_end();
    }

    /// Ends a drag when the pointer leaves the surface.
    pub fn pointer_leave(&mut self) {
        self.state.pointer_leave();
    }

    /// Maps `graph` onto the current surface.
    #[must_use]
    pub fn mapped(&self, graph: &TourGraph) -> MappedGraph {
        graph.map_to_extent(self.size)
    }

    /// Emits the whole view for `graph`: the rounded background, the graph
    /// under the current transform and, if visible, the overview.
    ///
    /// Emits nothing for a surface without area.
    pub fn render<B: ImagingBackend + ?Sized>(&self, backend: &mut B, graph: &TourGraph) {
        if !(self.size.width > 0.0 && self.size.height > 0.0) {
            debug!(width = self.size.width, height = self.size.height, "surface has no area");
            return;
        }
        let mapped = self.mapped(graph);
        let transform = self.state.transform();
        debug!(
            nodes = graph.len(),
            transform = %transform.to_matrix_string(),
            minimap = self.minimap.is_visible(),
            "rendering view"
        );

        let surface = RoundedRect::from_rect(
            Rect::from_origin_size(Point::ZERO, self.size),
            SURFACE_CORNER_RADIUS,
        );
        backend.state(StateOp::SetTransform(Affine::IDENTITY));
        backend.with_clip(ClipShape::RoundedRect(surface), |b| {
            let background = b.solid_paint(SURFACE_BACKGROUND);
            b.state(StateOp::SetPaint(background));
            b.draw(DrawOp::FillRoundedRect(surface));
            b.destroy_paint(background);

            render_graph(b, &mapped, transform.to_affine(), &self.graph_style);

            self.minimap
                .render(b, &mapped, &transform, self.size, &self.minimap_style);
        });
    }

    /// Inverts the view for a surface position: which domain coordinate of
    /// `graph` is drawn at `screen`.
    ///
    /// Returns `None` when the transform cannot be inverted.
    #[must_use]
    pub fn domain_point_at(&self, screen: Point, graph: &TourGraph) -> Option<Point> {
        let transform = self.state.transform();
        if !transform.is_invertible() {
            return None;
        }
        let content = transform.to_affine() * Affine::translate(self.graph_style.offset);
        let render = content.inverse() * screen;
        Some(self.mapped(graph).mapper().unmap_point(render))
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use tourscope_imaging::{DrawOp, ImagingOp, StateOp};
    use tourscope_imaging_ref::RefBackend;
    use tourscope_view2d::ViewTransform;

    use super::*;

    fn triangle() -> TourGraph {
        TourGraph::from_tour(
            &[
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(50.0, 80.0),
            ],
            &[1, 2, 0],
        )
        .unwrap()
    }

    fn config(width: f64, height: f64) -> ViewerConfig {
        ViewerConfig {
            width,
            height,
            ..ViewerConfig::default()
        }
    }

    #[test]
    fn surface_excludes_the_control_row() {
        let mut viewer = Viewer::new(&config(800.0, 640.0));
        assert_eq!(viewer.size(), Size::new(800.0, 600.0));
        viewer.set_surface_size(800.0, 0.0);
        assert_eq!(viewer.size(), Size::new(800.0, 0.0));
    }

    #[test]
    fn buttons_drive_the_transform() {
        let mut viewer = Viewer::default();
        assert!(viewer.handle(ViewerEvent::ZoomIn));
        assert!(viewer.handle(ViewerEvent::ZoomIn));
        let t = viewer.transform_state().transform();
        assert!((t.scale_x - 0.72).abs() < 1e-12);
        assert!((t.scale_y - 0.72).abs() < 1e-12);

        viewer.handle(ViewerEvent::ZoomOut);
        assert!((viewer.transform_state().transform().scale_x - 0.576).abs() < 1e-12);

        viewer.handle(ViewerEvent::Reset);
        assert_eq!(viewer.transform_state().transform(), ViewTransform::INITIAL);
    }

    #[test]
    fn drag_pans_and_leave_ends_it() {
        let mut viewer = Viewer::new(&config(800.0, 640.0));
        assert!(viewer.handle(ViewerEvent::PointerDown(Point::new(100.0, 100.0))));
        assert!(viewer.handle(ViewerEvent::PointerMove(Point::new(130.0, 90.0))));
        let t = viewer.transform_state().transform();
        assert_eq!((t.translate_x, t.translate_y), (30.0, -10.0));

        viewer.handle(ViewerEvent::PointerLeave);
        assert!(!viewer.handle(ViewerEvent::PointerMove(Point::new(300.0, 300.0))));
        let t = viewer.transform_state().transform();
        assert_eq!((t.translate_x, t.translate_y), (30.0, -10.0));
    }

    #[test]
    fn press_on_the_overview_does_not_drag() {
        let mut viewer = Viewer::new(&config(800.0, 640.0));
        // Overview covers [585, 435] .. [785, 585] on an 800x600 surface.
        let on_minimap = Point::new(700.0, 500.0);
        assert!(!viewer.handle(ViewerEvent::PointerDown(on_minimap)));
        assert!(!viewer.transform_state().is_dragging());

        viewer.handle(ViewerEvent::HideMinimap);
        assert!(viewer.handle(ViewerEvent::PointerDown(on_minimap)));
        assert!(viewer.transform_state().is_dragging());
    }

    #[test]
    fn minimap_visibility_events() {
        let mut viewer = Viewer::default();
        assert!(viewer.minimap().is_visible());
        assert!(!viewer.handle(ViewerEvent::ShowMinimap));
        assert!(viewer.handle(ViewerEvent::ToggleMinimap));
        assert!(!viewer.minimap().is_visible());
        assert!(viewer.handle(ViewerEvent::ShowMinimap));
        assert!(viewer.minimap().is_visible());

        viewer.handle(ViewerEvent::ZoomIn);
        let before = viewer.transform_state().transform();
        viewer.handle(ViewerEvent::ToggleMinimap);
        assert_eq!(viewer.transform_state().transform(), before);
    }

    #[test]
    fn render_draws_background_graph_and_overview() {
        let viewer = Viewer::new(&config(800.0, 640.0));
        let mut backend = RefBackend::default();
        viewer.render(&mut backend, &triangle());

        let draws: Vec<_> = backend.draws().map(|(op, _)| *op).collect();
        // Background, 3 links + 3 nodes, overview background, 3 + 3, indicator fill + stroke.
        assert_eq!(draws.len(), 1 + 6 + 1 + 6 + 2);
        assert!(matches!(draws[0], DrawOp::FillRoundedRect(_)));
        assert_eq!(backend.layer_depth(), 0);

        let (_, first_link) = backend
            .draws()
            .find(|(op, _)| matches!(op, DrawOp::StrokeLine(_)))
            .unwrap();
        assert_eq!(
            first_link.transform,
            Affine::new([0.5, 0.0, 0.0, 0.5, 10.0, 10.0]),
            "main graph sits at the content offset under the initial transform"
        );
    }

    #[test]
    fn hidden_overview_is_not_drawn() {
        let mut viewer = Viewer::new(&config(800.0, 640.0));
        viewer.toggle_minimap();
        let mut backend = RefBackend::default();
        viewer.render(&mut backend, &triangle());
        assert_eq!(backend.draws().count(), 7);
    }

    #[test]
    fn hidden_overview_stays_dark_while_the_view_moves() {
        let mut viewer = Viewer::new(&config(800.0, 640.0));
        viewer.handle(ViewerEvent::HideMinimap);
        viewer.handle(ViewerEvent::ZoomIn);
        viewer.handle(ViewerEvent::PointerDown(Point::new(100.0, 100.0)));
        viewer.handle(ViewerEvent::PointerMove(Point::new(160.0, 70.0)));
        viewer.handle(ViewerEvent::PointerUp);

        let transform = viewer.transform_state().transform();
        assert_eq!((transform.translate_x, transform.translate_y), (60.0, -30.0));
        assert_eq!(viewer.minimap().indicator(&transform, viewer.size()), None);

        let mut backend = RefBackend::default();
        viewer.render(&mut backend, &triangle());
        // Background plus the main graph; no overview background or indicator.
        assert_eq!(backend.draws().count(), 7);
        assert!(
            backend
                .draws()
                .all(|(op, _)| !matches!(op, DrawOp::FillRect(_) | DrawOp::StrokeRect(_)))
        );
    }

    #[test]
    fn repeated_frames_do_not_accumulate_paints() {
        let viewer = Viewer::new(&config(800.0, 640.0));
        let graph = triangle();
        let mut backend = RefBackend::default();
        for _ in 0..3 {
            viewer.render(&mut backend, &graph);
            assert_eq!(backend.live_paints(), 0);
            // Surface, two graph copies of two paints each, overview, indicator pair.
            assert!(backend.draws().all(|(_, s)| s.paint.is_some_and(|id| id.0 < 8)));
            backend.clear();
        }
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let broken = ViewerConfig {
            min_scale: f64::NAN,
            max_scale: 10.0,
            ..config(800.0, 640.0)
        };
        let mut viewer = Viewer::new(&broken);
        let defaults = ViewerConfig::default();
        assert_eq!(
            viewer.transform_state().scale_limits(),
            (defaults.min_scale, defaults.max_scale)
        );
        assert_eq!(viewer.size(), defaults.surface_size());

        viewer.zoom_in();
        assert!((viewer.transform_state().transform().scale_x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn empty_surface_renders_nothing() {
        let viewer = Viewer::new(&config(800.0, 0.0));
        let mut backend = RefBackend::default();
        viewer.render(&mut backend, &triangle());
        assert!(backend.ops().is_empty());
    }

    #[test]
    fn empty_graph_still_draws_the_surface() {
        let viewer = Viewer::new(&config(400.0, 340.0));
        let mut backend = RefBackend::default();
        viewer.render(&mut backend, &TourGraph::new());
        let fills = backend
            .ops()
            .iter()
            .filter(|op| matches!(op, ImagingOp::Draw(DrawOp::FillRoundedRect(_))))
            .count();
        assert_eq!(fills, 1);
        assert!(
            backend
                .ops()
                .iter()
                .all(|op| !matches!(op, ImagingOp::Draw(DrawOp::FillCircle(_))))
        );
        assert!(
            backend
                .ops()
                .iter()
                .any(|op| matches!(op, ImagingOp::State(StateOp::PopLayer)))
        );
    }

    #[test]
    fn screen_points_map_back_to_the_domain() {
        let mut viewer = Viewer::new(&config(800.0, 640.0));
        let graph = triangle();
        let mapped = viewer.mapped(&graph);
        let node = mapped.nodes()[2];

        let screen = |viewer: &Viewer| {
            viewer.transform_state().affine() * Affine::translate((20.0, 20.0)) * node
        };
        let back = viewer.domain_point_at(screen(&viewer), &graph).unwrap();
        assert!((back - Point::new(50.0, 80.0)).hypot() < 1e-9);

        viewer.zoom_in();
        viewer.pointer_down(Point::new(10.0, 10.0));
        viewer.pointer_move(Point::new(-40.0, 25.0));
        let back = viewer.domain_point_at(screen(&viewer), &graph).unwrap();
        assert!((back - Point::new(50.0, 80.0)).hypot() < 1e-9);
    }
}

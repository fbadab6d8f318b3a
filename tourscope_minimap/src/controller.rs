// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};
use peniko::Color;
use tourscope_graph::{GraphStyle, MappedGraph, render_graph};
use tourscope_imaging::{ClipShape, DrawOp, ImagingBackend, ImagingBackendExt, StateOp, StrokeStyle};
use tourscope_view2d::ViewTransform;

/// Corner of the surface the overview is pinned to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Corner {
    /// Top left corner.
    TopLeft,
    /// Top right corner.
    TopRight,
    /// Bottom left corner.
    BottomLeft,
    /// Bottom right corner.
    #[default]
    BottomRight,
}

/// Placement and initial visibility of the overview.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimapConfig {
    /// Overview size as a fraction of the surface.
    pub scale: f64,
    /// Gap between the overview and the surface edges, in pixels.
    pub margin: f64,
    /// Corner the overview is pinned to.
    pub corner: Corner,
    /// Whether the overview starts visible.
    pub visible: bool,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            scale: 0.25,
            margin: 15.0,
            corner: Corner::BottomRight,
            visible: true,
        }
    }
}

/// Colours of the overview and its indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimapStyle {
    /// Overview background fill.
    pub background: Color,
    /// Indicator fill.
    pub indicator_fill: Color,
    /// Indicator outline.
    pub indicator_stroke: Color,
    /// Indicator outline width, in indicator-local units.
    pub indicator_stroke_width: f64,
    /// Group opacity of the whole indicator.
    pub indicator_opacity: f32,
    /// Style of the graph copy.
    ///
    /// Keep `graph.offset` equal to the main view's offset, otherwise the
    /// indicator no longer outlines the visible region exactly.
    pub graph: GraphStyle,
}

impl Default for MinimapStyle {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(0x1a, 0x1a, 0x1a, 0xff),
            indicator_fill: Color::WHITE,
            indicator_stroke: Color::WHITE,
            indicator_stroke_width: 4.0,
            indicator_opacity: 0.2,
            graph: GraphStyle::default(),
        }
    }
}

/// The main view's visible region, expressed in overview-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Indicator {
    /// The surface rectangle `[0, 0, width, height]`.
    pub rect: Rect,
    /// Inverse of the main transform; maps `rect` onto the visible region.
    pub transform: Affine,
    /// Axis-aligned bounds of `transform * rect`.
    pub bounds: Rect,
}

/// Visibility and geometry of the overview.
#[derive(Clone, Debug)]
pub struct MinimapController {
    config: MinimapConfig,
    visible: bool,
}

impl MinimapController {
    /// Creates a controller; visibility starts at `config.visible`.
    #[must_use]
    pub fn new(config: MinimapConfig) -> Self {
        Self {
            visible: config.visible,
            config,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &MinimapConfig {
        &self.config
    }

    /// Shows or hides the overview. Touches nothing else.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Flips visibility.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Returns `true` while the overview is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Affine from overview-local coordinates to screen coordinates.
    ///
    /// Overview-local space is the main surface itself (`[0, 0, w, h]`),
    /// scaled by `config.scale` and moved into the configured corner.
    #[must_use]
    pub fn placement(&self, view: Size) -> Affine {
        let s = self.config.scale;
        let m = self.config.margin;
        let far_x = view.width - s * view.width - m;
        let far_y = view.height - s * view.height - m;
        let origin = match self.config.corner {
            Corner::TopLeft => Point::new(m, m),
            Corner::TopRight => Point::new(far_x, m),
            Corner::BottomLeft => Point::new(m, far_y),
            Corner::BottomRight => Point::new(far_x, far_y),
        };
        Affine::translate(origin.to_vec2()) * Affine::scale(s)
    }

    /// Screen rectangle covered by the overview.
    #[must_use]
    pub fn bounds(&self, view: Size) -> Rect {
        let place = self.placement(view);
        Rect::from_points(place * Point::ZERO, place * Point::new(view.width, view.height))
    }

    /// Returns `true` if `pos` falls on the visible overview.
    #[must_use]
    pub fn contains(&self, view: Size, pos: Point) -> bool {
        self.visible && self.bounds(view).contains(pos)
    }

    /// Computes the viewport indicator for the main `transform`.
    ///
    /// Returns `None` while hidden, for an empty surface, or when the
    /// transform cannot be inverted.
    #[must_use]
    pub fn indicator(&self, transform: &ViewTransform, view: Size) -> Option<Indicator> {
        if !self.visible || !has_area(view) || !transform.is_invertible() {
            return None;
        }
        let rect = Rect::from_origin_size(Point::ZERO, view);
        Some(Indicator {
            rect,
            transform: transform.inverse_affine(),
            bounds: transform.visible_rect(rect),
        })
    }

    /// Emits the overview: clipped background, graph copy, then indicator.
    ///
    /// Emits nothing while hidden or for an empty surface.
    pub fn render<B: ImagingBackend + ?Sized>(
        &self,
        backend: &mut B,
        graph: &MappedGraph,
        transform: &ViewTransform,
        view: Size,
        style: &MinimapStyle,
    ) {
        if !self.visible || !has_area(view) {
            return;
        }
        let place = self.placement(view);
        let frame = Rect::from_origin_size(Point::ZERO, view);
        let indicator = self.indicator(transform, view);

        backend.state(StateOp::SetTransform(place));
        backend.with_clip(ClipShape::Rect(frame), |b| {
            let background = b.solid_paint(style.background);
            b.state(StateOp::SetPaint(background));
            b.draw(DrawOp::FillRect(frame));
            b.destroy_paint(background);

            render_graph(b, graph, place, &style.graph);

            if let Some(indicator) = indicator {
                let fill = b.solid_paint(style.indicator_fill);
                let stroke = b.solid_paint(style.indicator_stroke);
                b.state(StateOp::SetTransform(place * indicator.transform));
                b.with_opacity_layer(style.indicator_opacity, |b| {
                    b.state(StateOp::SetPaint(fill));
                    b.draw(DrawOp::FillRect(indicator.rect));
                    b.state(StateOp::SetPaint(stroke));
                    b.state(StateOp::SetStroke(StrokeStyle::new(
                        style.indicator_stroke_width,
                    )));
                    b.draw(DrawOp::StrokeRect(indicator.rect));
                });
                b.destroy_paint(fill);
                b.destroy_paint(stroke);
            }
        });
    }
}

impl Default for MinimapController {
    fn default() -> Self {
        Self::new(MinimapConfig::default())
    }
}

fn has_area(view: Size) -> bool {
    view.width.is_finite() && view.height.is_finite() && view.width > 0.0 && view.height > 0.0
}

// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tourscope Imaging SVG: exports a recorded tour view as a standalone SVG
//! document.
//!
//! [`SvgBackend`] stores the ops it receives and turns them into markup in
//! [`SvgBackend::to_svg`]:
//!
//! - Each mark becomes one element (`<rect>`, `<line>`, `<circle>`, or a
//!   `<path>` for rounded rectangles with uneven corners). Its transform is
//!   written as `transform="matrix(a b c d e f)"`, left out for the identity.
//! - A layer with a clip or an opacity becomes a `<g>`. Clips go into
//!   `<defs>` as `<clipPath>` elements in user space.
//! - Coordinates carry at most three decimals; matrix coefficients keep six
//!   significant digits.
//!
//! Solid brushes only; anything else is written as black.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use kurbo::{Cap, Join, PathEl, Shape};
use peniko::{Brush, Color};
use tourscope_imaging::{
    Affine, ClipShape, DrawOp, ImagingBackend, ImagingOp, PaintDesc, PaintId, Rect,
    ResourceBackend, RoundedRect, StateOp, StrokeStyle,
};

/// Flattening tolerance for rounded rectangles written as paths.
const PATH_TOLERANCE: f64 = 0.1;

/// Recording backend that exports SVG.
#[derive(Default, Debug)]
pub struct SvgBackend {
    paints: Vec<Option<PaintDesc>>,
    /// Destroyed paints, still resolvable until the next clear.
    released: Vec<PaintId>,
    ops: Vec<ImagingOp>,
}

impl SvgBackend {
    /// Drops the recorded ops and frees the slots of destroyed paints.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
        for id in self.released.drain(..) {
            self.paints[id.0 as usize] = None;
        }
    }

    /// Ops recorded since the last [`clear_ops`](Self::clear_ops).
    #[must_use]
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Writes the recorded ops as an SVG document of `width` x `height`
    /// pixels, with a matching `viewBox`.
    ///
    /// Layers still open at the end are closed.
    #[must_use]
    pub fn to_svg(&self, width: f64, height: f64) -> String {
        let mut doc = Document::new(self);
        for op in &self.ops {
            doc.apply(op);
        }
        doc.finish(width, height)
    }

    fn color_of(&self, paint: Option<PaintId>) -> Color {
        let desc = paint.and_then(|id| self.paints.get(id.0 as usize)?.as_ref());
        match desc.map(|desc| &desc.brush) {
            Some(Brush::Solid(color)) => *color,
            _ => Color::BLACK,
        }
    }
}

impl ResourceBackend for SvgBackend {
    fn create_paint(&mut self, desc: PaintDesc) -> PaintId {
        let slot = self.paints.iter().position(Option::is_none);
        let index = slot.unwrap_or(self.paints.len());
        if index == self.paints.len() {
            self.paints.push(Some(desc));
        } else {
            self.paints[index] = Some(desc);
        }
        PaintId(u32::try_from(index).unwrap_or(u32::MAX))
    }

    fn destroy_paint(&mut self, id: PaintId) {
        // Recorded ops keep exporting with the paint until `clear_ops`.
        let known = matches!(self.paints.get(id.0 as usize), Some(Some(_)));
        if known && !self.released.contains(&id) {
            self.released.push(id);
        }
    }
}

impl ImagingBackend for SvgBackend {
    fn state(&mut self, op: StateOp) {
        self.ops.push(ImagingOp::State(op));
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(ImagingOp::Draw(op));
    }
}

/// A number written with at most three decimals, without trailing zeros.
#[derive(Clone, Copy)]
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_finite() {
            return write!(f, "{}", self.0);
        }
        let mut text = String::new();
        write!(text, "{:.3}", self.0)?;
        let trimmed = text.trim_end_matches('0').trim_end_matches('.');
        match trimmed {
            "-0" | "" => f.write_str("0"),
            _ => f.write_str(trimmed),
        }
    }
}

/// A matrix coefficient, rounded to six significant digits.
///
/// Scale terms shrink towards zero at high zoom, so a fixed number of
/// decimals is not enough here.
#[derive(Clone, Copy)]
struct Coeff(f64);

impl fmt::Display for Coeff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_finite() {
            return write!(f, "{}", self.0);
        }
        let mut text = String::new();
        write!(text, "{:.5e}", self.0)?;
        let rounded: f64 = text.parse().unwrap_or(self.0);
        if rounded == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{rounded}")
        }
    }
}

/// ` transform="matrix(...)"`, or nothing for the identity.
struct TransformAttr(Affine);

impl fmt::Display for TransformAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == Affine::IDENTITY {
            return Ok(());
        }
        let [a, b, c, d, e, g] = self.0.as_coeffs();
        write!(
            f,
            " transform=\"matrix({} {} {} {} {} {})\"",
            Coeff(a),
            Coeff(b),
            Coeff(c),
            Coeff(d),
            Coeff(e),
            Coeff(g)
        )
    }
}

#[derive(Clone, Copy)]
enum Mode {
    Fill,
    Stroke,
}

struct Document<'a> {
    backend: &'a SvgBackend,
    defs: String,
    body: String,
    /// One entry per open layer: whether it emitted a `<g>`.
    groups: Vec<bool>,
    clips: usize,
    transform: Affine,
    paint: Option<PaintId>,
    stroke: Option<StrokeStyle>,
}

impl<'a> Document<'a> {
    fn new(backend: &'a SvgBackend) -> Self {
        Self {
            backend,
            defs: String::new(),
            body: String::new(),
            groups: Vec::new(),
            clips: 0,
            transform: Affine::IDENTITY,
            paint: None,
            stroke: None,
        }
    }

    fn apply(&mut self, op: &ImagingOp) {
        match op {
            ImagingOp::State(StateOp::SetTransform(transform)) => self.transform = *transform,
            ImagingOp::State(StateOp::SetPaint(id)) => self.paint = Some(*id),
            ImagingOp::State(StateOp::SetStroke(stroke)) => self.stroke = Some(stroke.clone()),
            ImagingOp::State(StateOp::PushLayer(layer)) => {
                let mut attrs = String::new();
                if let Some(clip) = &layer.clip {
                    let id = self.define_clip(clip);
                    let _ = write!(attrs, " clip-path=\"url(#{id})\"");
                }
                let fade = layer.opacity.map(|o| o.clamp(0.0, 1.0));
                if let Some(opacity) = fade.filter(|o| *o < 1.0) {
                    let _ = write!(attrs, " opacity=\"{}\"", Num(f64::from(opacity)));
                }
                let opened = !attrs.is_empty();
                if opened {
                    let _ = write!(self.body, "<g{attrs}>");
                }
                self.groups.push(opened);
            }
            ImagingOp::State(StateOp::PopLayer) => {
                if self.groups.pop() == Some(true) {
                    self.body.push_str("</g>");
                }
            }
            ImagingOp::Draw(draw) => self.mark(draw),
        }
    }

    fn define_clip(&mut self, clip: &ClipShape) -> String {
        self.clips += 1;
        let mut id = String::new();
        let _ = write!(id, "clip{}", self.clips);
        let _ = write!(
            self.defs,
            "<clipPath id=\"{id}\" clipPathUnits=\"userSpaceOnUse\">"
        );
        let transform = TransformAttr(self.transform);
        match clip {
            ClipShape::Rect(rect) => write_rect(&mut self.defs, *rect, &transform, ""),
            ClipShape::RoundedRect(rr) => write_rounded(&mut self.defs, rr, &transform, ""),
        }
        self.defs.push_str("</clipPath>");
        id
    }

    fn mark(&mut self, op: &DrawOp) {
        let transform = TransformAttr(self.transform);
        match op {
            DrawOp::FillRect(rect) => {
                let paint = self.paint_attrs(Mode::Fill);
                write_rect(&mut self.body, *rect, &transform, &paint);
            }
            DrawOp::StrokeRect(rect) => {
                let paint = self.paint_attrs(Mode::Stroke);
                write_rect(&mut self.body, *rect, &transform, &paint);
            }
            DrawOp::FillRoundedRect(rr) => {
                let paint = self.paint_attrs(Mode::Fill);
                write_rounded(&mut self.body, rr, &transform, &paint);
            }
            DrawOp::StrokeLine(line) => {
                let paint = self.paint_attrs(Mode::Stroke);
                let _ = write!(
                    self.body,
                    "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{transform}{paint}/>",
                    Num(line.p0.x),
                    Num(line.p0.y),
                    Num(line.p1.x),
                    Num(line.p1.y),
                );
            }
            DrawOp::FillCircle(circle) => {
                let paint = self.paint_attrs(Mode::Fill);
                let _ = write!(
                    self.body,
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{transform}{paint}/>",
                    Num(circle.center.x),
                    Num(circle.center.y),
                    Num(circle.radius),
                );
            }
        }
    }

    fn paint_attrs(&self, mode: Mode) -> String {
        let rgba = self.backend.color_of(self.paint).to_rgba8();
        let alpha = f64::from(rgba.a) / 255.0;
        let mut out = String::new();
        let (painted, other) = match mode {
            Mode::Fill => ("fill", "stroke"),
            Mode::Stroke => ("stroke", "fill"),
        };
        let _ = write!(
            out,
            " {painted}=\"#{:02x}{:02x}{:02x}\" {other}=\"none\"",
            rgba.r, rgba.g, rgba.b
        );
        if alpha < 1.0 {
            let _ = write!(out, " {painted}-opacity=\"{}\"", Num(alpha));
        }
        if let (Mode::Stroke, Some(stroke)) = (mode, &self.stroke) {
            write_stroke(&mut out, stroke);
        }
        out
    }

    fn finish(mut self, width: f64, height: f64) -> String {
        while let Some(opened) = self.groups.pop() {
            if opened {
                self.body.push_str("</g>");
            }
        }
        let (w, h) = (Num(width), Num(height));
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
        );
        if !self.defs.is_empty() {
            let _ = write!(svg, "<defs>{}</defs>", self.defs);
        }
        svg.push_str(&self.body);
        svg.push_str("</svg>");
        svg
    }
}

fn write_stroke(out: &mut String, stroke: &StrokeStyle) {
    // SVG has one cap for both ends.
    let cap = match stroke.start_cap {
        Cap::Butt => "butt",
        Cap::Round => "round",
        Cap::Square => "square",
    };
    let join = match stroke.join {
        Join::Miter => "miter",
        Join::Round => "round",
        Join::Bevel => "bevel",
    };
    let _ = write!(
        out,
        " stroke-width=\"{}\" stroke-linecap=\"{cap}\" stroke-linejoin=\"{join}\"",
        Num(stroke.width)
    );
    if let Some((first, rest)) = stroke.dash_pattern.split_first() {
        let _ = write!(out, " stroke-dasharray=\"{}", Num(*first));
        for dash in rest {
            let _ = write!(out, ",{}", Num(*dash));
        }
        out.push('"');
    }
}

fn write_rect(out: &mut String, rect: Rect, transform: &TransformAttr, paint: &str) {
    let _ = write!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{transform}{paint}/>",
        Num(rect.x0),
        Num(rect.y0),
        Num(rect.width()),
        Num(rect.height()),
    );
}

fn write_rounded(out: &mut String, rr: &RoundedRect, transform: &TransformAttr, paint: &str) {
    if let Some(radius) = rr.radii().as_single_radius() {
        let rect = rr.rect();
        let r = Num(radius);
        let _ = write!(
            out,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{r}\" ry=\"{r}\"{transform}{paint}/>",
            Num(rect.x0),
            Num(rect.y0),
            Num(rect.width()),
            Num(rect.height()),
        );
        return;
    }
    out.push_str("<path d=\"");
    for el in rr.path_elements(PATH_TOLERANCE) {
        let _ = match el {
            PathEl::MoveTo(p) => write!(out, "M{} {}", Num(p.x), Num(p.y)),
            PathEl::LineTo(p) => write!(out, "L{} {}", Num(p.x), Num(p.y)),
            PathEl::QuadTo(a, b) => {
                write!(out, "Q{} {} {} {}", Num(a.x), Num(a.y), Num(b.x), Num(b.y))
            }
            PathEl::CurveTo(a, b, c) => write!(
                out,
                "C{} {} {} {} {} {}",
                Num(a.x),
                Num(a.y),
                Num(b.x),
                Num(b.y),
                Num(c.x),
                Num(c.y)
            ),
            PathEl::ClosePath => out.write_char('Z'),
        };
    }
    let _ = write!(out, "\"{transform}{paint}/>");
}

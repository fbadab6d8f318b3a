// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tourscope Viewer: the interactive view of a solved tour.
//!
//! [`Viewer`] ties the pieces together. It owns one pan/zoom
//! [`TransformState`](tourscope_view2d::TransformState) and one
//! [`MinimapController`](tourscope_minimap::MinimapController). It turns
//! [`ViewerEvent`]s into state changes and renders a
//! [`TourGraph`](tourscope_graph::TourGraph) into any imaging backend.
//!
//! The `tourscope` binary is a thin command-line shell over this crate. It
//! lists datasets, replays event scripts and exports the result as SVG.
//!
//! ```
//! use kurbo::Point;
//! use tourscope_graph::TourGraph;
//! use tourscope_imaging_svg::SvgBackend;
//! use tourscope_viewer::{Viewer, ViewerConfig, parse_script};
//!
//! let graph = TourGraph::from_tour(
//!     &[Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, 3.0)],
//!     &[1, 2, 0],
//! )
//! .unwrap();
//!
//! let mut viewer = Viewer::new(&ViewerConfig::default());
//! for event in parse_script("zoom-out down:10,10 move:60,40 up").unwrap() {
//!     viewer.handle(event);
//! }
//!
//! let mut svg = SvgBackend::default();
//! viewer.render(&mut svg, &graph);
//! let size = viewer.size();
//! assert!(svg.to_svg(size.width, size.height).contains("<circle"));
//! ```

mod config;
mod event;
mod viewer;

pub use config::{ConfigError, MinimapSettings, ViewerConfig};
pub use event::{ScriptError, ViewerEvent, parse_script};
pub use viewer::{SURFACE_BACKGROUND, SURFACE_CORNER_RADIUS, Viewer};

// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tourscope Graph: tours as node/link graphs, and their rendering.
//!
//! A solver run yields a point set and a tour `path`, where `path[i]` is the
//! node visited after node `i`. [`TourGraph::from_tour`] turns that into one
//! [`Link`] per node, validating every index up front. Links refer to nodes
//! by index, so a link endpoint is always the very node it names.
//!
//! [`TourGraph::map_to_extent`] runs the points through a
//! [`tourscope_scale::CoordinateMapper`] and yields a [`MappedGraph`] in
//! render space. [`render_graph`] then emits it into any
//! [`tourscope_imaging::ImagingBackend`]: links first, nodes on top.
//!
//! ```
//! use kurbo::{Point, Size};
//! use tourscope_graph::TourGraph;
//!
//! let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
//! let graph = TourGraph::from_tour(&points, &[1, 2, 0]).unwrap();
//! assert_eq!(graph.links().len(), 3);
//!
//! let mapped = graph.map_to_extent(Size::new(100.0, 100.0));
//! let segments: Vec<_> = mapped.segments().collect();
//! assert_eq!(segments[2].p0, Point::new(200.0, 200.0));
//! assert_eq!(segments[2].p1, Point::new(0.0, 0.0));
//! ```

#![no_std]

extern crate alloc;

mod error;
mod graph;
mod render;

pub use error::TourError;
pub use graph::{Link, MappedGraph, TourGraph};
pub use render::{GraphStyle, render_graph};

// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tourscope Scale: linear scales and domain → render coordinate mapping.
//!
//! Solver output arrives in arbitrary domain units. Before anything can be
//! drawn, every point has to be brought into the fixed render space of the
//! viewport. This crate provides:
//! - [`LinearScale`]: a pure, monotonic `domain → range` function.
//! - [`CoordinateMapper`]: a pair of scales derived from the bounding box of
//!   a point set and a render extent.
//!
//! The render range is `RANGE_FACTOR` times the extent on each axis. The
//! main view starts zoomed out to half scale, so doubling the range makes the
//! whole tour visible under the initial transform.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use tourscope_scale::CoordinateMapper;
//!
//! let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
//! let mapper = CoordinateMapper::from_points(&points, Size::new(100.0, 100.0));
//!
//! assert_eq!(mapper.map_point(points[0]), Point::new(0.0, 0.0));
//! assert_eq!(mapper.map_point(points[1]), Point::new(200.0, 0.0));
//! assert_eq!(mapper.map_point(points[2]), Point::new(200.0, 200.0));
//! ```
//!
//! ## Degenerate input
//!
//! - An empty point set yields scales with the domain `[0, 0]`.
//! - A domain with `min == max` maps every input to the start of the range.
//! - Non-positive or non-finite extents collapse the range to `[0, 0]`.
//!
//! None of these cases panic; callers simply get every point at the origin.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod linear;
mod mapper;

pub use linear::LinearScale;
pub use mapper::{CoordinateMapper, RANGE_FACTOR};

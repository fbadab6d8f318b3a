// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tourscope Minimap: a fixed-scale overview of the whole tour.
//!
//! The overview draws the same mapped graph as the main view, but under a
//! fixed placement (down-scaled and pinned to a corner) instead of the live
//! pan/zoom transform. On top of it sits the viewport indicator: the surface
//! rectangle pushed through the inverse of the main transform, which outlines
//! exactly the region the main view currently shows.
//!
//! The indicator is recomputed from the transform on every call and never
//! stored, so it cannot drift out of sync with the main view.
//!
//! ```
//! use kurbo::{Point, Size};
//! use tourscope_minimap::{MinimapConfig, MinimapController};
//! use tourscope_view2d::ViewTransform;
//!
//! let minimap = MinimapController::new(MinimapConfig::default());
//! let view = Size::new(800.0, 600.0);
//!
//! // Bottom-right corner, a quarter of the surface, 15px margin.
//! assert_eq!(minimap.placement(view) * Point::ZERO, Point::new(585.0, 435.0));
//!
//! // At the initial half-scale zoom the main view sees twice the surface.
//! let indicator = minimap.indicator(&ViewTransform::INITIAL, view).unwrap();
//! assert_eq!(indicator.bounds.size(), Size::new(1600.0, 1200.0));
//! ```

#![no_std]

mod controller;

pub use controller::{Corner, Indicator, MinimapConfig, MinimapController, MinimapStyle};

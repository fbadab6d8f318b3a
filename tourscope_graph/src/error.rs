// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Malformed tour data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TourError {
    /// `path` and `points` have different lengths.
    LengthMismatch {
        /// Number of points.
        points: usize,
        /// Number of path entries.
        path: usize,
    },
    /// A path entry names a node that does not exist.
    IndexOutOfBounds {
        /// Position in `path` holding the bad entry.
        position: usize,
        /// The offending node index.
        index: usize,
        /// Number of nodes.
        len: usize,
    },
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { points, path } => write!(
                f,
                "tour has {path} path entries for {points} points"
            ),
            Self::IndexOutOfBounds {
                position,
                index,
                len,
            } => write!(
                f,
                "path[{position}] = {index} is out of bounds for {len} points"
            ),
        }
    }
}

impl core::error::Error for TourError {}

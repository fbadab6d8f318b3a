// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tourscope_graph::TourError;

/// Failure reported by a [`Solver`](crate::Solver).
#[derive(Debug, Error)]
pub enum SolverError {
    /// The requested instance file does not exist.
    #[error("dataset not found: {0}")]
    DatasetNotFound(String),
    /// The solver ran but returned an unusable tour.
    #[error("solver returned a malformed tour: {0}")]
    MalformedTour(#[from] TourError),
    /// Any other solver-side failure.
    #[error("solver failed: {0}")]
    Failed(String),
}

/// Failure reading datasets, recorded results or optimum tables.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A file or directory could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The path being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A JSON document could not be parsed.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        /// The path being parsed.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
}

impl DatasetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

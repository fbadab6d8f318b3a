// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs;
use std::path::Path;
use std::time::Duration;

use kurbo::Point;
use serde::{Deserialize, Serialize};
use tourscope_graph::{TourError, TourGraph};
use tracing::{debug, warn};

use crate::algorithm::Algorithm;
use crate::dataset::dataset_label;
use crate::error::DatasetError;

/// Parameters of one solver run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunRequest {
    /// Which algorithm to run.
    pub algorithm: Algorithm,
    /// Random seed; `-1` lets the solver pick.
    pub seed: i64,
    /// Time limit in seconds; `-1` (or any non-positive value) means unlimited.
    pub timelimit: f64,
    /// Path of the instance file.
    pub dataset: String,
}

impl RunRequest {
    /// A request with a solver-chosen seed and no time limit.
    pub fn new(algorithm: Algorithm, dataset: impl Into<String>) -> Self {
        Self {
            algorithm,
            seed: -1,
            timelimit: -1.0,
            dataset: dataset.into(),
        }
    }

    /// The explicit seed, if one was given.
    #[must_use]
    pub fn seed(&self) -> Option<i64> {
        (self.seed != -1).then_some(self.seed)
    }

    /// The time limit, if one applies.
    #[must_use]
    pub fn time_limit(&self) -> Option<Duration> {
        if self.timelimit.is_finite() && self.timelimit > 0.0 {
            Some(Duration::from_secs_f64(self.timelimit))
        } else {
            None
        }
    }

    /// Display name of the requested instance.
    #[must_use]
    pub fn dataset_label(&self) -> String {
        dataset_label(&self.dataset)
    }
}

/// Output of one solver run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Node coordinates in solver units.
    pub points: Vec<Point>,
    /// Successor of each node: the tour visits `path[i]` right after `i`.
    pub path: Vec<usize>,
    /// Total tour cost.
    pub cost: f64,
    /// Solver wall time in seconds.
    pub execution_time: f64,
    /// Instance the run was made on, when known.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "filename")]
    pub dataset: Option<String>,
}

impl RunResult {
    /// Builds the node/link graph, one link `i -> path[i]` per node.
    pub fn tour_graph(&self) -> Result<TourGraph, TourError> {
        let graph = TourGraph::from_tour(&self.points, &self.path);
        match &graph {
            Ok(graph) => debug!(nodes = graph.len(), cost = self.cost, "built tour graph"),
            Err(err) => warn!(%err, "rejected malformed solver result"),
        }
        graph
    }

    /// Display name of the instance, when known.
    #[must_use]
    pub fn dataset_label(&self) -> Option<String> {
        self.dataset.as_deref().map(dataset_label)
    }

    /// Parses a result from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads a recorded result from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| DatasetError::io(path, e))?;
        Self::from_json_str(&text).map_err(|e| DatasetError::json(path, e))
    }
}

// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::run::RunResult;

/// Relative gap between `cost` and a known `optimal`, in percent.
///
/// The gap is `|cost - optimal| / ((cost + optimal) / 2) * 100`, i.e.
/// measured against the mean of the two values. Returns `None` when that mean
/// is zero or either input is not finite.
#[must_use]
pub fn gap_from_optimal(cost: f64, optimal: f64) -> Option<f64> {
    let mean = (cost + optimal) / 2.0;
    if !cost.is_finite() || !optimal.is_finite() || mean == 0.0 {
        return None;
    }
    Some((cost - optimal).abs() / mean * 100.0)
}

/// Known optimal tour costs keyed by dataset label.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptimalCosts(BTreeMap<String, f64>);

impl OptimalCosts {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the optimum for `label`.
    pub fn insert(&mut self, label: impl Into<String>, cost: f64) {
        self.0.insert(label.into(), cost);
    }

    /// The optimum for `label`, if known.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.0.get(label).copied()
    }

    /// Number of known optima.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no optimum is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reads a `{"label": cost, ...}` table from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| DatasetError::io(path, e))?;
        serde_json::from_str(&text).map_err(|e| DatasetError::json(path, e))
    }
}

/// What a user is told about a finished run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    /// Tour cost rounded to an integer.
    pub cost: f64,
    /// Solver wall time in seconds.
    pub execution_time: f64,
    /// Gap from the known optimum in percent, if the optimum is known.
    pub gap_percent: Option<f64>,
}

impl RunSummary {
    /// Summarizes `result`, comparing against `optimal` when given.
    ///
    /// The gap is computed from the rounded cost.
    #[must_use]
    pub fn new(result: &RunResult, optimal: Option<f64>) -> Self {
        let cost = result.cost.round();
        Self {
            cost,
            execution_time: result.execution_time,
            gap_percent: optimal.and_then(|opt| gap_from_optimal(cost, opt)),
        }
    }

    /// Summarizes `result`, looking its dataset up in `table`.
    #[must_use]
    pub fn with_table(result: &RunResult, table: &OptimalCosts) -> Self {
        let optimal = result
            .dataset_label()
            .and_then(|label| table.get(&label));
        Self::new(result, optimal)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cost {:.0}, {:.4} s", self.cost, self.execution_time)?;
        if let Some(gap) = self.gap_percent {
            write!(f, ", {gap:.2}% from the optimal")?;
        }
        Ok(())
    }
}

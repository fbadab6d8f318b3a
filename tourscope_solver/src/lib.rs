// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tourscope Solver: the data contract with an external TSP solver.
//!
//! The solver itself lives outside this workspace. This crate describes what
//! goes in ([`RunRequest`]), what comes out ([`RunResult`]), where instances
//! come from ([`list_datasets`]) and how a result compares to a known optimum
//! ([`gap_from_optimal`], [`OptimalCosts`], [`RunSummary`]).
//!
//! All wire types are serde-serializable with the field names the solver
//! service uses, so a recorded JSON response can be replayed directly:
//!
//! ```
//! use tourscope_solver::RunResult;
//!
//! let json = r#"{
//!     "points": [{"x": 0.0, "y": 0.0}, {"x": 3.0, "y": 4.0}],
//!     "path": [1, 0],
//!     "cost": 10.0,
//!     "execution_time": 0.002
//! }"#;
//! let result: RunResult = serde_json::from_str(json).unwrap();
//! let graph = result.tour_graph().unwrap();
//! assert_eq!(graph.links().len(), 2);
//! ```

mod algorithm;
mod dataset;
mod error;
mod optimal;
mod run;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use dataset::{DatasetEntry, dataset_label, list_datasets};
pub use error::{DatasetError, SolverError};
pub use optimal::{OptimalCosts, RunSummary, gap_from_optimal};
pub use run::{RunRequest, RunResult};

/// An external, synchronous TSP solver.
///
/// Implementations block until the run finishes (or its time limit expires)
/// and return the best tour found.
pub trait Solver {
    /// Runs `request` to completion.
    fn run(&self, request: &RunRequest) -> Result<RunResult, SolverError>;
}

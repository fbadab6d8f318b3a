// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Solver algorithm selector. Serialized as its numeric id (`0..=8`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Algorithm {
    /// Nearest neighbour from a single start node.
    Greedy,
    /// Nearest neighbour from every start node.
    GreedyIterative,
    /// Nearest neighbour refined with 2-opt.
    Greedy2Opt,
    /// Tabu search over 2-opt moves.
    TabuSearch,
    /// Variable neighbourhood search.
    Vns,
    /// MIP model without subtour elimination constraints.
    CplexNoSec,
    /// Benders-style loop adding subtour elimination constraints.
    BendersLoop,
    /// Extra-mileage insertion.
    ExtraMileage,
    /// Benders loop with subtour patching.
    BendersLoopPatching,
}

/// An algorithm id outside `0..=8`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("unknown algorithm id {0} (expected 0..=8)")]
pub struct UnknownAlgorithm(pub u8);

impl Algorithm {
    /// Every algorithm, in id order.
    pub const ALL: [Self; 9] = [
        Self::Greedy,
        Self::GreedyIterative,
        Self::Greedy2Opt,
        Self::TabuSearch,
        Self::Vns,
        Self::CplexNoSec,
        Self::BendersLoop,
        Self::ExtraMileage,
        Self::BendersLoopPatching,
    ];

    /// Numeric id used on the wire.
    #[must_use]
    pub fn id(self) -> u8 {
        match self {
            Self::Greedy => 0,
            Self::GreedyIterative => 1,
            Self::Greedy2Opt => 2,
            Self::TabuSearch => 3,
            Self::Vns => 4,
            Self::CplexNoSec => 5,
            Self::BendersLoop => 6,
            Self::ExtraMileage => 7,
            Self::BendersLoopPatching => 8,
        }
    }

    /// Display name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Greedy => "Greedy",
            Self::GreedyIterative => "Greedy Iterative",
            Self::Greedy2Opt => "Greedy 2-opt",
            Self::TabuSearch => "Tabu Search",
            Self::Vns => "VNS",
            Self::CplexNoSec => "Cplex No SEC",
            Self::BendersLoop => "Benders Loop",
            Self::ExtraMileage => "Extra Mileage",
            Self::BendersLoopPatching => "Benders Loop with Patching",
        }
    }

    /// One-paragraph explanation of what the algorithm does.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Greedy => {
                "Builds a tour from the first node by repeatedly moving to the nearest \
                 unvisited node, then closes the cycle."
            }
            Self::GreedyIterative => {
                "Runs the nearest-neighbour construction once from every node and keeps \
                 the cheapest tour."
            }
            Self::Greedy2Opt => {
                "Starts from the nearest-neighbour tour and applies improving 2-opt \
                 exchanges until none is left."
            }
            Self::TabuSearch => {
                "2-opt local search that keeps moving past local optima, forbidding \
                 recently used moves through a tabu list."
            }
            Self::Vns => {
                "Variable neighbourhood search: alternates random k-opt kicks with 2-opt \
                 descent, widening the kick when no improvement is found."
            }
            Self::CplexNoSec => {
                "Solves the degree-constrained MIP without subtour elimination. The \
                 result is a lower bound and usually a set of disjoint subtours."
            }
            Self::BendersLoop => {
                "Solves the MIP repeatedly, adding a subtour elimination constraint for \
                 every subtour found, until the solution is a single tour."
            }
            Self::ExtraMileage => {
                "Insertion heuristic: starts from the two farthest nodes and inserts the \
                 node with the smallest extra mileage until all nodes are in the tour."
            }
            Self::BendersLoopPatching => {
                "Benders loop that also patches each intermediate set of subtours into a \
                 feasible tour, keeping the best one as incumbent."
            }
        }
    }
}

impl TryFrom<u8> for Algorithm {
    type Error = UnknownAlgorithm;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(id))
            .copied()
            .ok_or(UnknownAlgorithm(id))
    }
}

impl From<Algorithm> for u8 {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.id()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

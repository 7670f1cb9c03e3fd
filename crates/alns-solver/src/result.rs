// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::stats::Statistics;
use alns_core::state::SolutionState;

/// Immutable record returned when a search terminates.
#[derive(Clone, Debug)]
pub struct SearchResult<S> {
    best: S,
    best_objective: f64,
    statistics: Statistics,
}

impl<S: SolutionState> SearchResult<S> {
    pub(crate) fn new(best: S, statistics: Statistics) -> Self {
        let best_objective = best.objective();
        Self {
            best,
            best_objective,
            statistics,
        }
    }

    /// The best solution found.
    #[inline]
    pub fn best_state(&self) -> &S {
        &self.best
    }

    /// Objective of the best solution, cached at termination.
    #[inline]
    pub fn best_objective(&self) -> f64 {
        self.best_objective
    }

    /// Per-iteration traces and per-operator outcome counts. Empty when
    /// statistics collection was switched off.
    #[inline]
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Consume the result, keeping only the best solution.
    #[inline]
    pub fn into_best_state(self) -> S {
        self.best
    }
}

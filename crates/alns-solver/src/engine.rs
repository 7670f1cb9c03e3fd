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

use crate::accept::AcceptanceCriterion;
use crate::err::{ConfigurationError, InvalidObjectiveError, SearchError, UserOperatorError};
use crate::result::SearchResult;
use crate::select::{OperatorSelector, SelectionContext};
use crate::stats::Statistics;
use crate::stop::StoppingCriterion;
use alns_core::operator::{DestroyOperator, OperatorKind, RepairOperator};
use alns_core::outcome::Outcome;
use alns_core::params::Params;
use alns_core::random::seeded;
use alns_core::state::SolutionState;
use rand::RngCore;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;
use tracing::{debug, info, trace, warn};

/// Callback fired whenever a new global best is found. A returned state
/// replaces both best and current iff it is strictly better; anything else
/// is ignored. Intended for caller-side polishing such as local search.
pub type OnBestCallback<S> = Box<dyn FnMut(&S, &mut dyn RngCore) -> Option<S> + Send>;

/// The adaptive large neighborhood search engine.
///
/// The engine owns the registered operator portfolio, the random source,
/// and the on-best callbacks; the per-search strategies (selection,
/// acceptance, stopping) are handed to each [`Alns::iterate`] call and
/// consumed by it. Within one iteration randomness is drawn in a fixed
/// order (selector, destroy, repair, acceptance), which makes seeded runs
/// replay exactly.
pub struct Alns<S: SolutionState> {
    rng: ChaCha8Rng,
    destroy_ops: Vec<Box<dyn DestroyOperator<S>>>,
    repair_ops: Vec<Box<dyn RepairOperator<S>>>,
    on_best: Vec<OnBestCallback<S>>,
    collect_statistics: bool,
    strict_objectives: bool,
}

impl<S: SolutionState> Alns<S> {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            destroy_ops: Vec::new(),
            repair_ops: Vec::new(),
            on_best: Vec::new(),
            collect_statistics: true,
            strict_objectives: false,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(seeded(seed))
    }

    /// Register a destroy operator. Names must be unique per kind; clashes
    /// are reported when a search starts.
    pub fn add_destroy_operator(&mut self, op: impl DestroyOperator<S> + 'static) -> &mut Self {
        self.destroy_ops.push(Box::new(op));
        self
    }

    /// Register a repair operator.
    pub fn add_repair_operator(&mut self, op: impl RepairOperator<S> + 'static) -> &mut Self {
        self.repair_ops.push(Box::new(op));
        self
    }

    /// Register a callback invoked whenever a new global best is found.
    pub fn on_best<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut(&S, &mut dyn RngCore) -> Option<S> + Send + 'static,
    {
        self.on_best.push(Box::new(callback));
        self
    }

    /// Toggle per-iteration statistics recording. Default is on; switching
    /// it off trades the traces for maximum throughput.
    pub fn collect_statistics(&mut self, collect: bool) -> &mut Self {
        self.collect_statistics = collect;
        self
    }

    /// Make non-finite candidate objectives fatal instead of treating the
    /// candidate as rejected. Default is off.
    pub fn strict_objectives(&mut self, strict: bool) -> &mut Self {
        self.strict_objectives = strict;
        self
    }

    pub fn destroy_operator_names(&self) -> Vec<&str> {
        self.destroy_ops.iter().map(|op| op.name()).collect()
    }

    pub fn repair_operator_names(&self) -> Vec<&str> {
        self.repair_ops.iter().map(|op| op.name()).collect()
    }

    fn validate(
        &self,
        selector: &dyn OperatorSelector,
        initial: &S,
    ) -> Result<(), ConfigurationError> {
        if self.destroy_ops.is_empty() {
            return Err(ConfigurationError::MissingDestroyOperators);
        }
        if self.repair_ops.is_empty() {
            return Err(ConfigurationError::MissingRepairOperators);
        }

        for (i, op) in self.destroy_ops.iter().enumerate() {
            if self.destroy_ops[..i].iter().any(|o| o.name() == op.name()) {
                return Err(ConfigurationError::DuplicateOperatorName {
                    kind: OperatorKind::Destroy,
                    name: op.name().to_string(),
                });
            }
        }
        for (i, op) in self.repair_ops.iter().enumerate() {
            if self.repair_ops[..i].iter().any(|o| o.name() == op.name()) {
                return Err(ConfigurationError::DuplicateOperatorName {
                    kind: OperatorKind::Repair,
                    name: op.name().to_string(),
                });
            }
        }

        if selector.num_destroy() != self.destroy_ops.len() {
            return Err(ConfigurationError::OperatorCountMismatch {
                kind: OperatorKind::Destroy,
                registered: self.destroy_ops.len(),
                expected: selector.num_destroy(),
            });
        }
        if selector.num_repair() != self.repair_ops.len() {
            return Err(ConfigurationError::OperatorCountMismatch {
                kind: OperatorKind::Repair,
                registered: self.repair_ops.len(),
                expected: selector.num_repair(),
            });
        }

        if selector.requires_context() && initial.context().is_none() {
            return Err(ConfigurationError::MissingSolutionContext {
                selector: selector.name().to_string(),
            });
        }

        Ok(())
    }

    /// Run the search from `initial` until the stopping criterion fires.
    ///
    /// The strategy instances are single-use: they arrive by value, carry
    /// whatever state they accumulate, and are dropped with the call. The
    /// engine takes ownership of `initial`; best and current evolve as
    /// independent copies from there.
    pub fn iterate<Sel, Acc, St>(
        &mut self,
        initial: S,
        mut selector: Sel,
        mut acceptance: Acc,
        mut stopping: St,
        params: &Params,
    ) -> Result<SearchResult<S>, SearchError>
    where
        Sel: OperatorSelector,
        Acc: AcceptanceCriterion,
        St: StoppingCriterion,
    {
        self.validate(&selector, &initial)?;

        let mut best = initial.clone();
        let mut current = initial;
        let mut best_obj = best.objective();
        let mut current_obj = best_obj;

        acceptance.start(current_obj);

        let mut statistics = Statistics::for_operators(
            self.destroy_ops.iter().map(|op| op.name().to_string()).collect(),
            self.repair_ops.iter().map(|op| op.name().to_string()).collect(),
        );

        let needs_context = selector.requires_context();
        let run_started = Instant::now();
        let mut iteration = 0usize;

        while !stopping.should_stop(&mut self.rng, best_obj, current_obj) {
            let iter_started = Instant::now();

            let features = if needs_context {
                match current.context() {
                    Some(features) => Some(features),
                    None => {
                        return Err(ConfigurationError::MissingSolutionContext {
                            selector: selector.name().to_string(),
                        }
                        .into());
                    }
                }
            } else {
                None
            };
            let search = SelectionContext {
                best: best_obj,
                current: current_obj,
                features: features.as_deref(),
            };

            let pair = selector.choose(&mut self.rng, &search);
            assert!(
                pair.destroy < self.destroy_ops.len() && pair.repair < self.repair_ops.len(),
                "selector returned out-of-range operator pair {pair}"
            );

            let destroyed = self.destroy_ops[pair.destroy]
                .destroy(&current, &mut self.rng, params)
                .map_err(|source| UserOperatorError {
                    iteration,
                    operator: self.destroy_ops[pair.destroy].name().to_string(),
                    kind: OperatorKind::Destroy,
                    source,
                })?;
            let candidate = self.repair_ops[pair.repair]
                .repair(&destroyed, &mut self.rng, params)
                .map_err(|source| UserOperatorError {
                    iteration,
                    operator: self.repair_ops[pair.repair].name().to_string(),
                    kind: OperatorKind::Repair,
                    source,
                })?;

            let candidate_obj = candidate.objective();

            let outcome = if !candidate_obj.is_finite() {
                let err = InvalidObjectiveError {
                    iteration,
                    destroy: self.destroy_ops[pair.destroy].name().to_string(),
                    repair: self.repair_ops[pair.repair].name().to_string(),
                    value: candidate_obj,
                };
                if self.strict_objectives {
                    return Err(err.into());
                }
                warn!(%err, "rejecting candidate with non-finite objective");
                Outcome::Reject
            } else if candidate_obj < best_obj {
                best = candidate.clone();
                best_obj = candidate_obj;
                current = candidate;
                current_obj = candidate_obj;

                for callback in &mut self.on_best {
                    if let Some(polished) = callback(&best, &mut self.rng) {
                        let polished_obj = polished.objective();
                        if polished_obj.is_finite() && polished_obj < best_obj {
                            best = polished.clone();
                            best_obj = polished_obj;
                            current = polished;
                            current_obj = polished_obj;
                        }
                    }
                }
                debug!(iteration, objective = best_obj, "new best solution");
                Outcome::Best
            } else if candidate_obj < current_obj {
                current = candidate;
                current_obj = candidate_obj;
                Outcome::Better
            } else if acceptance.accept(&mut self.rng, best_obj, current_obj, candidate_obj) {
                current = candidate;
                current_obj = candidate_obj;
                Outcome::Accept
            } else {
                Outcome::Reject
            };

            selector.update(candidate_obj, pair, outcome, &search);
            acceptance.tick(best_obj, current_obj);

            if self.collect_statistics {
                statistics.record_iteration(
                    best_obj,
                    current_obj,
                    candidate_obj,
                    iter_started.elapsed(),
                );
                statistics.record_outcome(pair, outcome);
            }
            trace!(iteration, %pair, %outcome, candidate = candidate_obj, "iteration done");

            iteration += 1;
        }

        info!(
            iterations = iteration,
            best_objective = best_obj,
            runtime_ms = run_started.elapsed().as_secs_f64() * 1e3,
            "search finished"
        );

        Ok(SearchResult::new(best, statistics))
    }
}

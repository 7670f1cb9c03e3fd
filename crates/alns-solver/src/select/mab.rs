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

use super::{OperatorSelector, ScoreVector, SelectionContext, validate_operator_counts};
use crate::err::ConfigurationError;
use alns_core::operator::OperatorPair;
use alns_core::outcome::Outcome;
use rand::RngCore;

/// An injected multi-armed-bandit policy. Implementations may come from an
/// external bandit library or be hand-rolled; the selector only needs arm
/// prediction and reward feedback. Contextual policies set
/// [`BanditPolicy::requires_context`] and receive the current solution's
/// feature vector with every call.
pub trait BanditPolicy: Send + Sync {
    /// Whether `predict`/`partial_fit` need a context vector.
    fn requires_context(&self) -> bool {
        false
    }

    /// Pick an arm in `[0, num_arms)`.
    fn predict(&mut self, rng: &mut dyn RngCore, context: Option<&[f64]>) -> usize;

    /// Observe `reward` for `arm`.
    fn partial_fit(&mut self, arm: usize, reward: f64, context: Option<&[f64]>);
}

/// Bridges an injected [`BanditPolicy`] into operator selection. Operator
/// pairs map to arms row-major: `arm = destroy * num_repair + repair`; the
/// reward fed back on every update is the score of the observed outcome.
pub struct MabSelector {
    scores: ScoreVector,
    policy: Box<dyn BanditPolicy>,
    num_destroy: usize,
    num_repair: usize,
}

impl MabSelector {
    pub fn new(
        scores: ScoreVector,
        policy: Box<dyn BanditPolicy>,
        num_destroy: usize,
        num_repair: usize,
    ) -> Result<Self, ConfigurationError> {
        validate_operator_counts(num_destroy, num_repair)?;
        Ok(Self {
            scores,
            policy,
            num_destroy,
            num_repair,
        })
    }

    #[inline]
    fn num_arms(&self) -> usize {
        self.num_destroy * self.num_repair
    }
}

impl OperatorSelector for MabSelector {
    fn name(&self) -> &str {
        "MabSelector"
    }

    fn num_destroy(&self) -> usize {
        self.num_destroy
    }

    fn num_repair(&self) -> usize {
        self.num_repair
    }

    fn requires_context(&self) -> bool {
        self.policy.requires_context()
    }

    fn choose(&mut self, rng: &mut dyn RngCore, search: &SelectionContext<'_>) -> OperatorPair {
        let arm = self.policy.predict(rng, search.features);
        assert!(
            arm < self.num_arms(),
            "bandit policy returned arm {arm} outside the {}-arm grid",
            self.num_arms()
        );
        OperatorPair::new(arm / self.num_repair, arm % self.num_repair)
    }

    fn update(
        &mut self,
        _candidate: f64,
        pair: OperatorPair,
        outcome: Outcome,
        search: &SelectionContext<'_>,
    ) {
        let arm = pair.destroy * self.num_repair + pair.repair;
        self.policy
            .partial_fit(arm, self.scores.score(outcome), search.features);
    }
}

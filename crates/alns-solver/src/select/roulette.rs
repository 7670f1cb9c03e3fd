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
use rand::{Rng, RngCore};
use tracing::warn;

/// Weight-proportional sampling of an operator index. A fully drained
/// weight vector degrades to uniform sampling instead of failing.
pub(crate) fn spin(weights: &[f64], rng: &mut dyn RngCore) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        warn!(
            operators = weights.len(),
            "all operator weights are zero; falling back to uniform sampling"
        );
        return rng.random_range(0..weights.len());
    }

    let mut roll = rng.random_range(0.0..total);
    for (i, w) in weights.iter().enumerate() {
        roll -= w;
        if roll <= 0.0 {
            return i;
        }
    }
    weights.len() - 1
}

/// Classic adaptive weight scheme: destroy and repair indices are sampled
/// independently, proportional to weights that chase the per-outcome scores
/// through a convex combination with decay factor `decay`.
#[derive(Clone, Debug)]
pub struct RouletteWheel {
    scores: ScoreVector,
    decay: f64,
    destroy_weights: Vec<f64>,
    repair_weights: Vec<f64>,
}

impl RouletteWheel {
    pub fn new(
        scores: ScoreVector,
        decay: f64,
        num_destroy: usize,
        num_repair: usize,
    ) -> Result<Self, ConfigurationError> {
        if !decay.is_finite() || !(0.0..=1.0).contains(&decay) {
            return Err(ConfigurationError::invalid_parameter(
                "decay",
                format!("0.0..=1.0 required, got {decay}"),
            ));
        }
        validate_operator_counts(num_destroy, num_repair)?;

        Ok(Self {
            scores,
            decay,
            destroy_weights: vec![1.0; num_destroy],
            repair_weights: vec![1.0; num_repair],
        })
    }

    #[inline]
    pub fn destroy_weights(&self) -> &[f64] {
        &self.destroy_weights
    }

    #[inline]
    pub fn repair_weights(&self) -> &[f64] {
        &self.repair_weights
    }
}

impl OperatorSelector for RouletteWheel {
    fn name(&self) -> &str {
        "RouletteWheel"
    }

    fn num_destroy(&self) -> usize {
        self.destroy_weights.len()
    }

    fn num_repair(&self) -> usize {
        self.repair_weights.len()
    }

    fn choose(&mut self, rng: &mut dyn RngCore, _search: &SelectionContext<'_>) -> OperatorPair {
        let destroy = spin(&self.destroy_weights, rng);
        let repair = spin(&self.repair_weights, rng);
        OperatorPair::new(destroy, repair)
    }

    fn update(
        &mut self,
        _candidate: f64,
        pair: OperatorPair,
        outcome: Outcome,
        _search: &SelectionContext<'_>,
    ) {
        let score = self.scores.score(outcome);
        let w = &mut self.destroy_weights[pair.destroy];
        *w = self.decay * *w + (1.0 - self.decay) * score;
        let w = &mut self.repair_weights[pair.repair];
        *w = self.decay * *w + (1.0 - self.decay) * score;
    }
}

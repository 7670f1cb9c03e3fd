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

/// Upper-confidence-bound selection over the full destroy x repair grid.
/// Every pair is one bandit arm; `alpha` scales the exploration bonus.
/// Arms that never ran take strict priority, lowest index first, so the
/// whole grid is visited before any arm repeats.
#[derive(Clone, Debug)]
pub struct AlphaUcb {
    scores: ScoreVector,
    alpha: f64,
    num_destroy: usize,
    num_repair: usize,
    plays: Vec<u64>,
    means: Vec<f64>,
    total_plays: u64,
}

impl AlphaUcb {
    pub fn new(
        scores: ScoreVector,
        alpha: f64,
        num_destroy: usize,
        num_repair: usize,
    ) -> Result<Self, ConfigurationError> {
        if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
            return Err(ConfigurationError::invalid_parameter(
                "alpha",
                format!("exploration factor must lie in (0, 1], got {alpha}"),
            ));
        }
        validate_operator_counts(num_destroy, num_repair)?;

        let arms = num_destroy * num_repair;
        Ok(Self {
            scores,
            alpha,
            num_destroy,
            num_repair,
            plays: vec![0; arms],
            means: vec![0.0; arms],
            total_plays: 0,
        })
    }

    #[inline]
    fn arm(&self, pair: OperatorPair) -> usize {
        pair.destroy * self.num_repair + pair.repair
    }

    #[inline]
    fn pair_of(&self, arm: usize) -> OperatorPair {
        OperatorPair::new(arm / self.num_repair, arm % self.num_repair)
    }

    /// Mean reward observed for `pair` so far.
    #[inline]
    pub fn mean_reward(&self, pair: OperatorPair) -> f64 {
        self.means[self.arm(pair)]
    }

    /// How often `pair` has been played.
    #[inline]
    pub fn plays(&self, pair: OperatorPair) -> u64 {
        self.plays[self.arm(pair)]
    }
}

impl OperatorSelector for AlphaUcb {
    fn name(&self) -> &str {
        "AlphaUcb"
    }

    fn num_destroy(&self) -> usize {
        self.num_destroy
    }

    fn num_repair(&self) -> usize {
        self.num_repair
    }

    fn choose(&mut self, _rng: &mut dyn RngCore, _search: &SelectionContext<'_>) -> OperatorPair {
        if let Some(arm) = self.plays.iter().position(|&n| n == 0) {
            return self.pair_of(arm);
        }

        let log_term = 1.0 + (1.0 + self.total_plays as f64).ln();
        let mut best_arm = 0usize;
        let mut best_score = f64::NEG_INFINITY;
        for (arm, (&plays, &mean)) in self.plays.iter().zip(&self.means).enumerate() {
            let bonus = self.alpha * (log_term / plays as f64).sqrt();
            let score = mean + bonus;
            if score > best_score {
                best_score = score;
                best_arm = arm;
            }
        }
        self.pair_of(best_arm)
    }

    fn update(
        &mut self,
        _candidate: f64,
        pair: OperatorPair,
        outcome: Outcome,
        _search: &SelectionContext<'_>,
    ) {
        let arm = self.arm(pair);
        let reward = self.scores.score(outcome);
        self.plays[arm] += 1;
        self.total_plays += 1;
        let n = self.plays[arm] as f64;
        self.means[arm] += (reward - self.means[arm]) / n;
    }
}

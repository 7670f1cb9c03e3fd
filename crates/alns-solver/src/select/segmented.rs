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

use super::roulette::spin;
use super::{OperatorSelector, ScoreVector, SelectionContext, validate_operator_counts};
use crate::err::ConfigurationError;
use alns_core::operator::OperatorPair;
use alns_core::outcome::Outcome;
use rand::RngCore;
use tracing::debug;

/// Roulette wheel with segmented learning: scores accumulate in per-segment
/// sums for `seg_length` iterations while the sampling weights stay frozen.
/// At each segment boundary the weights take one convex step toward the
/// accumulated sums and the accumulators reset.
#[derive(Clone, Debug)]
pub struct SegmentedRouletteWheel {
    scores: ScoreVector,
    decay: f64,
    seg_length: usize,
    seg_iteration: usize,
    destroy_weights: Vec<f64>,
    repair_weights: Vec<f64>,
    destroy_segment: Vec<f64>,
    repair_segment: Vec<f64>,
    destroy_usage: Vec<u64>,
    repair_usage: Vec<u64>,
}

impl SegmentedRouletteWheel {
    pub fn new(
        scores: ScoreVector,
        decay: f64,
        seg_length: usize,
        num_destroy: usize,
        num_repair: usize,
    ) -> Result<Self, ConfigurationError> {
        if !decay.is_finite() || !(0.0..=1.0).contains(&decay) {
            return Err(ConfigurationError::invalid_parameter(
                "decay",
                format!("0.0..=1.0 required, got {decay}"),
            ));
        }
        if seg_length == 0 {
            return Err(ConfigurationError::invalid_parameter(
                "seg_length",
                "segments must span at least one iteration",
            ));
        }
        validate_operator_counts(num_destroy, num_repair)?;

        Ok(Self {
            scores,
            decay,
            seg_length,
            seg_iteration: 0,
            destroy_weights: vec![1.0; num_destroy],
            repair_weights: vec![1.0; num_repair],
            destroy_segment: vec![0.0; num_destroy],
            repair_segment: vec![0.0; num_repair],
            destroy_usage: vec![0; num_destroy],
            repair_usage: vec![0; num_repair],
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

    /// How often each destroy operator ran in the segment under way.
    #[inline]
    pub fn destroy_segment_usage(&self) -> &[u64] {
        &self.destroy_usage
    }

    /// How often each repair operator ran in the segment under way.
    #[inline]
    pub fn repair_segment_usage(&self) -> &[u64] {
        &self.repair_usage
    }

    fn roll_segment(&mut self) {
        debug!(
            destroy_usage = ?self.destroy_usage,
            repair_usage = ?self.repair_usage,
            "segment boundary; refreshing roulette weights"
        );
        for (w, sigma) in self.destroy_weights.iter_mut().zip(&self.destroy_segment) {
            *w = self.decay * *w + (1.0 - self.decay) * sigma;
        }
        for (w, sigma) in self.repair_weights.iter_mut().zip(&self.repair_segment) {
            *w = self.decay * *w + (1.0 - self.decay) * sigma;
        }
        self.destroy_segment.fill(0.0);
        self.repair_segment.fill(0.0);
        self.destroy_usage.fill(0);
        self.repair_usage.fill(0);
        self.seg_iteration = 0;
    }
}

impl OperatorSelector for SegmentedRouletteWheel {
    fn name(&self) -> &str {
        "SegmentedRouletteWheel"
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
        // Segment sums accumulate raw scores; usage is tracked separately
        // so the boundary step works on sums, not per-use averages.
        let score = self.scores.score(outcome);
        self.destroy_segment[pair.destroy] += score;
        self.repair_segment[pair.repair] += score;
        self.destroy_usage[pair.destroy] += 1;
        self.repair_usage[pair.repair] += 1;

        self.seg_iteration += 1;
        if self.seg_iteration >= self.seg_length {
            self.roll_segment();
        }
    }
}

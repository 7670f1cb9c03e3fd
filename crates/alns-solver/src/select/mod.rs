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

mod alpha_ucb;
mod mab;
mod roulette;
mod segmented;

pub use alpha_ucb::AlphaUcb;
pub use mab::{BanditPolicy, MabSelector};
pub use roulette::RouletteWheel;
pub use segmented::SegmentedRouletteWheel;

use crate::err::ConfigurationError;
use alns_core::operator::OperatorPair;
use alns_core::outcome::Outcome;
use rand::RngCore;

/// Objective snapshot handed to a selector. `features` is the context
/// vector of the current solution, fetched by the engine right before
/// [`OperatorSelector::choose`] and reused for the matching
/// [`OperatorSelector::update`]; it is `None` for non-contextual schemes.
#[derive(Clone, Copy, Debug)]
pub struct SelectionContext<'a> {
    pub best: f64,
    pub current: f64,
    pub features: Option<&'a [f64]>,
}

/// Picks a (destroy, repair) operator pair each iteration and learns from
/// the observed outcomes.
pub trait OperatorSelector: Send + Sync {
    fn name(&self) -> &str;

    /// Number of destroy operators this scheme was sized for. Must match
    /// the operators registered on the engine.
    fn num_destroy(&self) -> usize;

    /// Number of repair operators this scheme was sized for.
    fn num_repair(&self) -> usize;

    /// Whether `choose`/`update` need [`SelectionContext::features`]. The
    /// engine fails early when this is set and the solution state provides
    /// no context vector.
    fn requires_context(&self) -> bool {
        false
    }

    /// Pick the operator pair for the next iteration. Returned indices must
    /// lie in `[0, num_destroy)` and `[0, num_repair)`.
    fn choose(&mut self, rng: &mut dyn RngCore, search: &SelectionContext<'_>) -> OperatorPair;

    /// Observe the outcome of an iteration that applied `pair` and produced
    /// a candidate with objective `candidate`.
    fn update(
        &mut self,
        candidate: f64,
        pair: OperatorPair,
        outcome: Outcome,
        search: &SelectionContext<'_>,
    );
}

/// Per-outcome rewards credited to the applied operator pair, ordered
/// best, better, accept, reject.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreVector([f64; 4]);

impl ScoreVector {
    pub fn new(scores: [f64; 4]) -> Result<Self, ConfigurationError> {
        for score in scores {
            if !score.is_finite() || score < 0.0 {
                return Err(ConfigurationError::invalid_parameter(
                    "scores",
                    format!("scores must be finite and non-negative, got {score}"),
                ));
            }
        }
        Ok(Self(scores))
    }

    #[inline]
    pub fn score(&self, outcome: Outcome) -> f64 {
        self.0[outcome.index()]
    }

    #[inline]
    pub fn as_array(&self) -> [f64; 4] {
        self.0
    }
}

pub(crate) fn validate_operator_counts(
    num_destroy: usize,
    num_repair: usize,
) -> Result<(), ConfigurationError> {
    if num_destroy == 0 {
        return Err(ConfigurationError::invalid_parameter(
            "num_destroy",
            "at least one destroy operator is required",
        ));
    }
    if num_repair == 0 {
        return Err(ConfigurationError::invalid_parameter(
            "num_repair",
            "at least one repair operator is required",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_obj_safe;

    assert_obj_safe!(OperatorSelector);

    #[test]
    fn score_vector_rejects_negative_and_non_finite() {
        assert!(ScoreVector::new([5.0, 2.0, 1.0, 0.5]).is_ok());
        assert!(ScoreVector::new([5.0, -0.1, 1.0, 0.5]).is_err());
        assert!(ScoreVector::new([f64::NAN, 0.0, 0.0, 0.0]).is_err());
        assert!(ScoreVector::new([f64::INFINITY, 0.0, 0.0, 0.0]).is_err());
    }

    #[test]
    fn score_vector_lookup_follows_outcome_order() {
        let scores = ScoreVector::new([5.0, 2.0, 1.0, 0.5]).unwrap();
        assert_eq!(scores.score(Outcome::Best), 5.0);
        assert_eq!(scores.score(Outcome::Better), 2.0);
        assert_eq!(scores.score(Outcome::Accept), 1.0);
        assert_eq!(scores.score(Outcome::Reject), 0.5);
        assert_eq!(scores.as_array(), [5.0, 2.0, 1.0, 0.5]);
    }

    #[test]
    fn zero_operator_counts_are_rejected() {
        assert!(validate_operator_counts(0, 1).is_err());
        assert!(validate_operator_counts(1, 0).is_err());
        assert!(validate_operator_counts(1, 1).is_ok());
    }
}

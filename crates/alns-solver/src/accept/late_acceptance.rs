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

use super::AcceptanceCriterion;
use crate::err::ConfigurationError;
use rand::RngCore;
use std::collections::VecDeque;

/// Late acceptance hill climbing: a candidate is compared against the
/// current objective from `lookback` iterations ago instead of today's.
/// The ring buffer starts out filled with the initial objective; every
/// iteration evicts the oldest slot and writes the current objective back
/// (or the better of the two under the `greedy` flag). `better_history`
/// additionally demands an improvement over the present current solution.
#[derive(Clone, Debug)]
pub struct LateAcceptance {
    lookback: usize,
    greedy: bool,
    better_history: bool,
    history: VecDeque<f64>,
}

impl LateAcceptance {
    pub fn new(
        lookback: usize,
        greedy: bool,
        better_history: bool,
    ) -> Result<Self, ConfigurationError> {
        if lookback == 0 {
            return Err(ConfigurationError::invalid_parameter(
                "lookback",
                "history must span at least one iteration",
            ));
        }
        Ok(Self {
            lookback,
            greedy,
            better_history,
            history: VecDeque::with_capacity(lookback),
        })
    }

    /// Objective the next candidate is compared against.
    #[inline]
    pub fn reference(&self) -> Option<f64> {
        self.history.front().copied()
    }
}

impl AcceptanceCriterion for LateAcceptance {
    fn name(&self) -> &str {
        "LateAcceptance"
    }

    fn start(&mut self, initial: f64) {
        self.history.clear();
        self.history.extend(std::iter::repeat_n(initial, self.lookback));
    }

    fn accept(&mut self, _rng: &mut dyn RngCore, _best: f64, current: f64, candidate: f64) -> bool {
        let reference = self.history.front().copied().unwrap_or(current);
        let mut verdict = candidate < reference;
        if self.better_history {
            verdict = verdict && candidate < current;
        }
        verdict
    }

    fn tick(&mut self, _best: f64, current: f64) {
        let Some(evicted) = self.history.pop_front() else {
            return;
        };
        let written = if self.greedy {
            current.min(evicted)
        } else {
            current
        };
        self.history.push_back(written);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alns_core::random::seeded;

    #[test]
    fn zero_lookback_is_rejected() {
        assert!(LateAcceptance::new(0, false, false).is_err());
        assert!(LateAcceptance::new(1, false, false).is_ok());
    }

    #[test]
    fn history_starts_at_the_initial_objective() {
        let mut lahc = LateAcceptance::new(3, false, false).unwrap();
        lahc.start(50.0);
        assert_eq!(lahc.reference(), Some(50.0));

        let mut rng = seeded(0);
        // Anything below the initial objective passes, even above current.
        assert!(lahc.accept(&mut rng, 0.0, 40.0, 49.0));
        assert!(!lahc.accept(&mut rng, 0.0, 40.0, 50.0));
    }

    #[test]
    fn reference_lags_by_lookback_iterations() {
        let mut lahc = LateAcceptance::new(2, false, false).unwrap();
        lahc.start(100.0);
        lahc.tick(0.0, 90.0);
        lahc.tick(0.0, 80.0);
        // Two iterations later the 90 written first comes up for comparison.
        assert_eq!(lahc.reference(), Some(90.0));
        lahc.tick(0.0, 70.0);
        assert_eq!(lahc.reference(), Some(80.0));
    }

    #[test]
    fn greedy_keeps_the_better_of_slot_and_current() {
        let mut lahc = LateAcceptance::new(1, true, false).unwrap();
        lahc.start(10.0);
        // Current got worse; the greedy update refuses to degrade the slot.
        lahc.tick(0.0, 30.0);
        assert_eq!(lahc.reference(), Some(10.0));
        // An improvement does get written.
        lahc.tick(0.0, 5.0);
        assert_eq!(lahc.reference(), Some(5.0));
    }

    #[test]
    fn better_history_also_requires_beating_current() {
        let mut lahc = LateAcceptance::new(1, false, true).unwrap();
        lahc.start(100.0);
        let mut rng = seeded(0);
        // Beats the history slot but not the current solution.
        assert!(!lahc.accept(&mut rng, 0.0, 20.0, 50.0));
        // Both gates pass... except candidates below current are taken by
        // the engine before the criterion runs; equality shows the gate.
        assert!(!lahc.accept(&mut rng, 0.0, 20.0, 20.0));
    }
}

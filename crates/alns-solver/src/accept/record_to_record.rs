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

use super::schedule::{DecayMethod, StepSchedule};
use super::AcceptanceCriterion;
use crate::err::ConfigurationError;
use rand::RngCore;

/// Record-to-record travel: a candidate passes while it stays within the
/// decaying threshold of the best (record) objective.
#[derive(Clone, Copy, Debug)]
pub struct RecordToRecordTravel {
    schedule: StepSchedule,
}

impl RecordToRecordTravel {
    pub fn new(
        start: f64,
        end: f64,
        step: f64,
        method: DecayMethod,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            schedule: StepSchedule::new(start, end, step, method)?,
        })
    }

    /// Fit a threshold that starts at `worse * |initial_objective|` and
    /// decays to zero over `num_iters` iterations. Only the linear method
    /// has a geometric-free path to a zero end; the exponential method is
    /// rejected by step derivation.
    pub fn autofit(
        initial_objective: f64,
        worse: f64,
        num_iters: usize,
        method: DecayMethod,
    ) -> Result<Self, ConfigurationError> {
        if !worse.is_finite() || worse < 0.0 || worse > 1.0 {
            return Err(ConfigurationError::invalid_parameter(
                "worse",
                format!("worsening fraction must lie in [0, 1], got {worse}"),
            ));
        }
        let start = worse * initial_objective.abs();
        let step = StepSchedule::derive_step(start, 0.0, num_iters, method)?;
        Self::new(start, 0.0, step, method)
    }

    /// Current threshold.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.schedule.value()
    }

    #[inline]
    pub fn schedule(&self) -> &StepSchedule {
        &self.schedule
    }
}

impl AcceptanceCriterion for RecordToRecordTravel {
    fn name(&self) -> &str {
        "RecordToRecordTravel"
    }

    fn accept(&mut self, _rng: &mut dyn RngCore, best: f64, _current: f64, candidate: f64) -> bool {
        candidate - best <= self.schedule.value()
    }

    fn tick(&mut self, _best: f64, _current: f64) {
        self.schedule.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alns_core::random::seeded;

    #[test]
    fn gates_on_distance_to_best_not_current() {
        let mut rrt = RecordToRecordTravel::new(5.0, 0.0, 1.0, DecayMethod::Linear).unwrap();
        let mut rng = seeded(0);
        assert!(rrt.accept(&mut rng, 10.0, 100.0, 15.0));
        assert!(!rrt.accept(&mut rng, 10.0, 100.0, 15.1));
    }

    #[test]
    fn constant_threshold_when_start_equals_end() {
        let mut rrt = RecordToRecordTravel::new(3.0, 3.0, 0.0, DecayMethod::Linear).unwrap();
        let mut rng = seeded(0);
        for _ in 0..200 {
            assert!(rrt.accept(&mut rng, 1.0, 50.0, 4.0));
            assert!(!rrt.accept(&mut rng, 1.0, 50.0, 4.0 + 1e-9));
            rrt.tick(1.0, 50.0);
        }
        assert_eq!(rrt.threshold(), 3.0);
    }

    #[test]
    fn threshold_decays_to_end_on_ticks() {
        let mut rrt = RecordToRecordTravel::new(4.0, 0.0, 1.0, DecayMethod::Linear).unwrap();
        for _ in 0..3 {
            rrt.tick(0.0, 0.0);
        }
        assert_eq!(rrt.threshold(), 1.0);
        for _ in 0..10 {
            rrt.tick(0.0, 0.0);
        }
        assert_eq!(rrt.threshold(), 0.0);
    }

    #[test]
    fn autofit_linear_spans_the_horizon() {
        let rrt =
            RecordToRecordTravel::autofit(-2000.0, 0.02, 4000, DecayMethod::Linear).unwrap();
        assert!((rrt.threshold() - 40.0).abs() < 1e-12);
        assert!((rrt.schedule().step() - 0.01).abs() < 1e-12);
        assert_eq!(rrt.schedule().end(), 0.0);
    }

    #[test]
    fn autofit_exponential_has_no_path_to_zero() {
        assert!(
            RecordToRecordTravel::autofit(1000.0, 0.05, 100, DecayMethod::Exponential).is_err()
        );
    }

    #[test]
    fn autofit_validates_worse() {
        assert!(RecordToRecordTravel::autofit(100.0, -0.1, 10, DecayMethod::Linear).is_err());
        assert!(RecordToRecordTravel::autofit(100.0, 1.1, 10, DecayMethod::Linear).is_err());
    }
}

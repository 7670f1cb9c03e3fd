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
use rand::{Rng, RngCore};

/// Metropolis acceptance: a candidate worse than the current solution by
/// `delta` is admitted with probability `exp(-delta / T)`, where the
/// temperature `T` decays along a [`StepSchedule`] that stays positive.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedAnnealing {
    schedule: StepSchedule,
}

impl SimulatedAnnealing {
    pub fn new(
        start: f64,
        end: f64,
        step: f64,
        method: DecayMethod,
    ) -> Result<Self, ConfigurationError> {
        if end <= 0.0 {
            return Err(ConfigurationError::invalid_parameter(
                "end",
                format!("temperature must stay positive, got {end}"),
            ));
        }
        Ok(Self {
            schedule: StepSchedule::new(start, end, step, method)?,
        })
    }

    /// Fit a schedule so that a candidate `worse * 100` percent worse than
    /// the initial solution is accepted with probability `accept_prob` on
    /// the first iteration, with the temperature reaching `1` after
    /// `num_iters` iterations.
    pub fn autofit(
        initial_objective: f64,
        worse: f64,
        accept_prob: f64,
        num_iters: usize,
        method: DecayMethod,
    ) -> Result<Self, ConfigurationError> {
        if !worse.is_finite() || worse <= 0.0 || worse > 1.0 {
            return Err(ConfigurationError::invalid_parameter(
                "worse",
                format!("worsening fraction must lie in (0, 1], got {worse}"),
            ));
        }
        if !accept_prob.is_finite() || accept_prob <= 0.0 || accept_prob >= 1.0 {
            return Err(ConfigurationError::invalid_parameter(
                "accept_prob",
                format!("acceptance probability must lie in (0, 1), got {accept_prob}"),
            ));
        }

        let start = -worse * initial_objective.abs() / accept_prob.ln();
        if start <= 0.0 {
            return Err(ConfigurationError::invalid_parameter(
                "start",
                format!("fitted start temperature {start} is not positive"),
            ));
        }
        let step = StepSchedule::derive_step(start, 1.0, num_iters, method)?;
        Self::new(start, 1.0, step, method)
    }

    /// Current temperature.
    #[inline]
    pub fn temperature(&self) -> f64 {
        self.schedule.value()
    }

    #[inline]
    pub fn schedule(&self) -> &StepSchedule {
        &self.schedule
    }
}

impl AcceptanceCriterion for SimulatedAnnealing {
    fn name(&self) -> &str {
        "SimulatedAnnealing"
    }

    fn accept(&mut self, rng: &mut dyn RngCore, _best: f64, current: f64, candidate: f64) -> bool {
        let probability = ((current - candidate) / self.schedule.value()).exp();
        probability >= rng.random::<f64>()
    }

    fn tick(&mut self, _best: f64, _current: f64) {
        self.schedule.advance();
    }
}

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

/// Threshold accepting: a candidate passes while its worsening over the
/// current solution stays within the decaying threshold.
#[derive(Clone, Copy, Debug)]
pub struct ThresholdAccepting {
    schedule: StepSchedule,
}

impl ThresholdAccepting {
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

    /// Current threshold.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.schedule.value()
    }
}

impl AcceptanceCriterion for ThresholdAccepting {
    fn name(&self) -> &str {
        "ThresholdAccepting"
    }

    fn accept(&mut self, _rng: &mut dyn RngCore, _best: f64, current: f64, candidate: f64) -> bool {
        candidate - current <= self.schedule.value()
    }

    fn tick(&mut self, _best: f64, _current: f64) {
        self.schedule.advance();
    }
}

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

use crate::err::ConfigurationError;
use std::fmt;

/// How a threshold or temperature walks from its start toward its end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecayMethod {
    /// Subtract `step` per iteration.
    Linear,
    /// Multiply by `step` per iteration, `step` in `(0, 1]`.
    Exponential,
}

impl fmt::Display for DecayMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecayMethod::Linear => write!(f, "linear"),
            DecayMethod::Exponential => write!(f, "exponential"),
        }
    }
}

/// A scalar that decays from `start` toward `end` once per iteration and
/// never drops below `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepSchedule {
    start: f64,
    end: f64,
    step: f64,
    method: DecayMethod,
    value: f64,
}

impl StepSchedule {
    pub fn new(
        start: f64,
        end: f64,
        step: f64,
        method: DecayMethod,
    ) -> Result<Self, ConfigurationError> {
        if !start.is_finite() || !end.is_finite() || !step.is_finite() {
            return Err(ConfigurationError::invalid_parameter(
                "schedule",
                format!("start {start}, end {end} and step {step} must all be finite"),
            ));
        }
        if end < 0.0 {
            return Err(ConfigurationError::invalid_parameter(
                "end",
                format!("must be non-negative, got {end}"),
            ));
        }
        if end > start {
            return Err(ConfigurationError::invalid_parameter(
                "end",
                format!("end {end} exceeds start {start}"),
            ));
        }
        match method {
            DecayMethod::Linear => {
                if step < 0.0 {
                    return Err(ConfigurationError::invalid_parameter(
                        "step",
                        format!("linear decay requires step >= 0, got {step}"),
                    ));
                }
            }
            DecayMethod::Exponential => {
                if step <= 0.0 || step > 1.0 {
                    return Err(ConfigurationError::invalid_parameter(
                        "step",
                        format!("exponential decay requires step in (0, 1], got {step}"),
                    ));
                }
            }
        }

        Ok(Self {
            start,
            end,
            step,
            method,
            value: start,
        })
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[inline]
    pub fn method(&self) -> DecayMethod {
        self.method
    }

    /// Take one decay step, clamped at `end`.
    #[inline]
    pub fn advance(&mut self) {
        self.value = match self.method {
            DecayMethod::Linear => (self.value - self.step).max(self.end),
            DecayMethod::Exponential => (self.value * self.step).max(self.end),
        };
    }

    /// Step size that walks from `start` to `end` over `num_iters`
    /// iterations under `method`. A derived exponential step outside
    /// `(0, 1]` (e.g. for `end == 0`) is rejected.
    pub fn derive_step(
        start: f64,
        end: f64,
        num_iters: usize,
        method: DecayMethod,
    ) -> Result<f64, ConfigurationError> {
        if num_iters == 0 {
            return Err(ConfigurationError::invalid_parameter(
                "num_iters",
                "at least one iteration is required",
            ));
        }
        match method {
            DecayMethod::Linear => Ok((start - end) / num_iters as f64),
            DecayMethod::Exponential => {
                let step = (end / start).powf(1.0 / num_iters as f64);
                if !step.is_finite() || step <= 0.0 || step > 1.0 {
                    return Err(ConfigurationError::invalid_parameter(
                        "step",
                        format!("derived exponential step {step} is outside (0, 1]"),
                    ));
                }
                Ok(step)
            }
        }
    }
}

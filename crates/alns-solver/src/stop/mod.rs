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
use rand::RngCore;
use std::time::{Duration, Instant};

/// Decides when a search ends. Checked at the top of every iteration;
/// criteria are stateful and single-use, the engine never resets them.
pub trait StoppingCriterion: Send + Sync {
    fn name(&self) -> &str;

    /// True once the search should terminate.
    fn should_stop(&mut self, rng: &mut dyn RngCore, best: f64, current: f64) -> bool;
}

/// Stops after exactly `limit` iterations have executed.
#[derive(Clone, Copy, Debug)]
pub struct MaxIterations {
    limit: usize,
    seen: usize,
}

impl MaxIterations {
    pub fn new(limit: usize) -> Self {
        Self { limit, seen: 0 }
    }
}

impl StoppingCriterion for MaxIterations {
    fn name(&self) -> &str {
        "MaxIterations"
    }

    fn should_stop(&mut self, _rng: &mut dyn RngCore, _best: f64, _current: f64) -> bool {
        if self.seen >= self.limit {
            true
        } else {
            self.seen += 1;
            false
        }
    }
}

/// Stops once the wall clock has run past the budget. The first check
/// establishes the start instant.
#[derive(Clone, Copy, Debug)]
pub struct MaxRuntime {
    budget: Duration,
    started: Option<Instant>,
}

impl MaxRuntime {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            started: None,
        }
    }
}

impl StoppingCriterion for MaxRuntime {
    fn name(&self) -> &str {
        "MaxRuntime"
    }

    fn should_stop(&mut self, _rng: &mut dyn RngCore, _best: f64, _current: f64) -> bool {
        let started = *self.started.get_or_insert_with(Instant::now);
        started.elapsed() > self.budget
    }
}

/// Stops once the best objective has not strictly decreased for
/// `max_iters` consecutive iterations.
#[derive(Clone, Copy, Debug)]
pub struct NoImprovement {
    max_iters: usize,
    target: Option<f64>,
    since: usize,
}

impl NoImprovement {
    pub fn new(max_iters: usize) -> Result<Self, ConfigurationError> {
        if max_iters == 0 {
            return Err(ConfigurationError::invalid_parameter(
                "max_iters",
                "the patience window must span at least one iteration",
            ));
        }
        Ok(Self {
            max_iters,
            target: None,
            since: 0,
        })
    }
}

impl StoppingCriterion for NoImprovement {
    fn name(&self) -> &str {
        "NoImprovement"
    }

    fn should_stop(&mut self, _rng: &mut dyn RngCore, best: f64, _current: f64) -> bool {
        match self.target {
            None => {
                self.target = Some(best);
                self.since = 0;
                false
            }
            Some(target) if best < target => {
                self.target = Some(best);
                self.since = 0;
                false
            }
            Some(_) => {
                self.since += 1;
                self.since >= self.max_iters
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alns_core::random::seeded;
    use static_assertions::assert_obj_safe;

    assert_obj_safe!(StoppingCriterion);

    #[test]
    fn max_iterations_counts_exactly() {
        let mut stop = MaxIterations::new(3);
        let mut rng = seeded(0);
        assert!(!stop.should_stop(&mut rng, 0.0, 0.0));
        assert!(!stop.should_stop(&mut rng, 0.0, 0.0));
        assert!(!stop.should_stop(&mut rng, 0.0, 0.0));
        assert!(stop.should_stop(&mut rng, 0.0, 0.0));
        assert!(stop.should_stop(&mut rng, 0.0, 0.0));
    }

    #[test]
    fn zero_iterations_stops_immediately() {
        let mut stop = MaxIterations::new(0);
        let mut rng = seeded(0);
        assert!(stop.should_stop(&mut rng, 0.0, 0.0));
    }

    #[test]
    fn max_runtime_pins_the_clock_on_first_check() {
        let mut stop = MaxRuntime::new(Duration::from_millis(5));
        let mut rng = seeded(0);
        assert!(!stop.should_stop(&mut rng, 0.0, 0.0));
        std::thread::sleep(Duration::from_millis(10));
        assert!(stop.should_stop(&mut rng, 0.0, 0.0));
    }

    #[test]
    fn no_improvement_requires_a_positive_window() {
        assert!(NoImprovement::new(0).is_err());
        assert!(NoImprovement::new(1).is_ok());
    }

    #[test]
    fn no_improvement_waits_out_the_window() {
        let mut stop = NoImprovement::new(3).unwrap();
        let mut rng = seeded(0);
        assert!(!stop.should_stop(&mut rng, 10.0, 10.0));
        assert!(!stop.should_stop(&mut rng, 10.0, 10.0));
        assert!(!stop.should_stop(&mut rng, 10.0, 10.0));
        assert!(stop.should_stop(&mut rng, 10.0, 10.0));
    }

    #[test]
    fn strict_improvement_resets_the_window() {
        let mut stop = NoImprovement::new(2).unwrap();
        let mut rng = seeded(0);
        assert!(!stop.should_stop(&mut rng, 10.0, 10.0));
        assert!(!stop.should_stop(&mut rng, 10.0, 10.0));
        // Strictly better best arrives just in time.
        assert!(!stop.should_stop(&mut rng, 9.0, 9.0));
        assert!(!stop.should_stop(&mut rng, 9.0, 9.0));
        assert!(stop.should_stop(&mut rng, 9.0, 9.0));
    }

    #[test]
    fn equal_best_is_not_an_improvement() {
        let mut stop = NoImprovement::new(1).unwrap();
        let mut rng = seeded(0);
        assert!(!stop.should_stop(&mut rng, 5.0, 5.0));
        assert!(stop.should_stop(&mut rng, 5.0, 5.0));
    }
}

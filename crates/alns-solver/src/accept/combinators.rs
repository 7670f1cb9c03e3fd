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
use rand::RngCore;

/// Accepts iff every child accepts. Every child is consulted on every call
/// (no short-circuiting), so stateful children advance and draw randomness
/// identically no matter how their siblings vote.
pub struct All {
    criteria: Vec<Box<dyn AcceptanceCriterion>>,
}

impl All {
    pub fn new(criteria: Vec<Box<dyn AcceptanceCriterion>>) -> Self {
        Self { criteria }
    }
}

impl AcceptanceCriterion for All {
    fn name(&self) -> &str {
        "All"
    }

    fn start(&mut self, initial: f64) {
        for criterion in &mut self.criteria {
            criterion.start(initial);
        }
    }

    fn accept(&mut self, rng: &mut dyn RngCore, best: f64, current: f64, candidate: f64) -> bool {
        let mut verdict = true;
        for criterion in &mut self.criteria {
            verdict &= criterion.accept(rng, best, current, candidate);
        }
        verdict
    }

    fn tick(&mut self, best: f64, current: f64) {
        for criterion in &mut self.criteria {
            criterion.tick(best, current);
        }
    }
}

/// Accepts iff any child accepts. Like [`All`], every child is consulted
/// on every call.
pub struct Any {
    criteria: Vec<Box<dyn AcceptanceCriterion>>,
}

impl Any {
    pub fn new(criteria: Vec<Box<dyn AcceptanceCriterion>>) -> Self {
        Self { criteria }
    }
}

impl AcceptanceCriterion for Any {
    fn name(&self) -> &str {
        "Any"
    }

    fn start(&mut self, initial: f64) {
        for criterion in &mut self.criteria {
            criterion.start(initial);
        }
    }

    fn accept(&mut self, rng: &mut dyn RngCore, best: f64, current: f64, candidate: f64) -> bool {
        let mut verdict = false;
        for criterion in &mut self.criteria {
            verdict |= criterion.accept(rng, best, current, candidate);
        }
        verdict
    }

    fn tick(&mut self, best: f64, current: f64) {
        for criterion in &mut self.criteria {
            criterion.tick(best, current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Always, HillClimbing, RecordToRecordTravel, ThresholdAccepting};
    use super::super::schedule::DecayMethod;
    use super::*;
    use alns_core::random::seeded;

    #[test]
    fn singleton_all_behaves_like_its_child() {
        let mut combined = All::new(vec![Box::new(HillClimbing)]);
        let mut child = HillClimbing;
        let mut rng_a = seeded(1);
        let mut rng_b = seeded(1);
        for candidate in [1.0, 2.0, 2.5, 3.0] {
            assert_eq!(
                combined.accept(&mut rng_a, 0.0, 2.0, candidate),
                child.accept(&mut rng_b, 0.0, 2.0, candidate)
            );
        }
    }

    #[test]
    fn any_with_always_accepts_everything() {
        let mut combined = Any::new(vec![Box::new(HillClimbing), Box::new(Always)]);
        let mut rng = seeded(2);
        assert!(combined.accept(&mut rng, 0.0, 1.0, 1e9));
        assert!(combined.accept(&mut rng, 0.0, 1.0, f64::MAX));
    }

    #[test]
    fn all_demands_every_gate() {
        let rrt = RecordToRecordTravel::new(5.0, 5.0, 0.0, DecayMethod::Linear).unwrap();
        let ta = ThresholdAccepting::new(1.0, 1.0, 0.0, DecayMethod::Linear).unwrap();
        let mut combined = All::new(vec![Box::new(rrt), Box::new(ta)]);
        let mut rng = seeded(3);

        // Within both the best-gap and the current-gap budgets.
        assert!(combined.accept(&mut rng, 10.0, 14.0, 15.0));
        // Within the best-gap but too far above current.
        assert!(!combined.accept(&mut rng, 10.0, 12.0, 15.0));
        // Within the current-gap but too far above best.
        assert!(!combined.accept(&mut rng, 10.0, 15.5, 16.0));
    }

    #[test]
    fn ticks_reach_every_child() {
        let rrt = RecordToRecordTravel::new(2.0, 0.0, 1.0, DecayMethod::Linear).unwrap();
        let ta = ThresholdAccepting::new(2.0, 0.0, 1.0, DecayMethod::Linear).unwrap();
        let mut combined = Any::new(vec![Box::new(rrt), Box::new(ta)]);
        let mut rng = seeded(4);

        assert!(combined.accept(&mut rng, 10.0, 10.0, 12.0));
        combined.tick(10.0, 10.0);
        combined.tick(10.0, 10.0);
        // Both thresholds are exhausted now.
        assert!(!combined.accept(&mut rng, 10.0, 10.0, 12.0));
        assert!(combined.accept(&mut rng, 10.0, 10.0, 10.0));
    }
}

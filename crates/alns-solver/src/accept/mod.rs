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

mod combinators;
mod great_deluge;
mod late_acceptance;
mod record_to_record;
mod schedule;
mod simulated_annealing;
mod threshold;

pub use combinators::{All, Any};
pub use great_deluge::{GreatDeluge, NonLinearGreatDeluge};
pub use late_acceptance::LateAcceptance;
pub use record_to_record::RecordToRecordTravel;
pub use schedule::{DecayMethod, StepSchedule};
pub use simulated_annealing::SimulatedAnnealing;
pub use threshold::ThresholdAccepting;

use rand::RngCore;

/// Decides whether a candidate replaces the current solution.
///
/// The engine only consults [`AcceptanceCriterion::accept`] for candidates
/// that improve neither the best nor the current solution and that have a
/// finite objective; improving candidates are taken unconditionally.
/// Stateful criteria advance through [`AcceptanceCriterion::tick`], which
/// runs exactly once at the end of every iteration regardless of whether
/// `accept` was consulted.
pub trait AcceptanceCriterion: Send + Sync {
    fn name(&self) -> &str;

    /// Called once when a search begins, with the objective of the initial
    /// solution.
    fn start(&mut self, initial: f64) {
        let _ = initial;
    }

    /// Whether `candidate` may replace `current`.
    fn accept(&mut self, rng: &mut dyn RngCore, best: f64, current: f64, candidate: f64) -> bool;

    /// Per-iteration bookkeeping, called once at the end of every iteration
    /// with the post-iteration incumbent objectives.
    fn tick(&mut self, best: f64, current: f64) {
        let _ = (best, current);
    }
}

/// Accepts every candidate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Always;

impl AcceptanceCriterion for Always {
    fn name(&self) -> &str {
        "Always"
    }

    fn accept(&mut self, _rng: &mut dyn RngCore, _best: f64, _current: f64, _candidate: f64) -> bool {
        true
    }
}

/// Accepts candidates that are at least as good as the current solution.
/// Since the engine pre-filters strict improvements, this boils down to
/// admitting plateau moves and nothing else.
#[derive(Clone, Copy, Debug, Default)]
pub struct HillClimbing;

impl AcceptanceCriterion for HillClimbing {
    fn name(&self) -> &str {
        "HillClimbing"
    }

    fn accept(&mut self, _rng: &mut dyn RngCore, _best: f64, current: f64, candidate: f64) -> bool {
        candidate <= current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alns_core::random::seeded;
    use static_assertions::assert_obj_safe;

    assert_obj_safe!(AcceptanceCriterion);

    #[test]
    fn always_accepts_anything() {
        let mut rng = seeded(0);
        let mut crit = Always;
        assert!(crit.accept(&mut rng, 1.0, 2.0, 1000.0));
        assert!(crit.accept(&mut rng, 1.0, 2.0, f64::MAX));
    }

    #[test]
    fn hill_climbing_admits_plateaus_but_not_worsening() {
        let mut rng = seeded(0);
        let mut crit = HillClimbing;
        assert!(crit.accept(&mut rng, 1.0, 2.0, 2.0));
        assert!(crit.accept(&mut rng, 1.0, 2.0, 1.5));
        assert!(!crit.accept(&mut rng, 1.0, 2.0, 2.0 + 1e-12));
    }
}

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

use alns_core::operator::OperatorPair;
use alns_core::outcome::Outcome;
use std::time::Duration;

/// Counts of iteration outcomes attributed to one operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutcomeCounts([u64; 4]);

impl OutcomeCounts {
    #[inline]
    pub(crate) fn record(&mut self, outcome: Outcome) {
        self.0[outcome.index()] += 1;
    }

    #[inline]
    pub fn count(&self, outcome: Outcome) -> u64 {
        self.0[outcome.index()]
    }

    /// Number of iterations in which this operator was selected.
    #[inline]
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }
}

/// Per-iteration objective traces and per-operator outcome counts for one
/// search, exposed read-only on the result.
#[derive(Clone, Debug, Default)]
pub struct Statistics {
    best_objectives: Vec<f64>,
    current_objectives: Vec<f64>,
    candidate_objectives: Vec<f64>,
    iteration_runtimes: Vec<Duration>,
    destroy_names: Vec<String>,
    repair_names: Vec<String>,
    destroy_counts: Vec<OutcomeCounts>,
    repair_counts: Vec<OutcomeCounts>,
}

impl Statistics {
    pub(crate) fn for_operators(destroy_names: Vec<String>, repair_names: Vec<String>) -> Self {
        let destroy_counts = vec![OutcomeCounts::default(); destroy_names.len()];
        let repair_counts = vec![OutcomeCounts::default(); repair_names.len()];
        Self {
            destroy_names,
            repair_names,
            destroy_counts,
            repair_counts,
            ..Self::default()
        }
    }

    pub(crate) fn record_iteration(
        &mut self,
        best: f64,
        current: f64,
        candidate: f64,
        runtime: Duration,
    ) {
        self.best_objectives.push(best);
        self.current_objectives.push(current);
        self.candidate_objectives.push(candidate);
        self.iteration_runtimes.push(runtime);
    }

    pub(crate) fn record_outcome(&mut self, pair: OperatorPair, outcome: Outcome) {
        self.destroy_counts[pair.destroy].record(outcome);
        self.repair_counts[pair.repair].record(outcome);
    }

    /// Number of recorded iterations.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.best_objectives.len()
    }

    /// Best objective after each iteration; non-increasing.
    #[inline]
    pub fn best_objectives(&self) -> &[f64] {
        &self.best_objectives
    }

    /// Current objective after each iteration.
    #[inline]
    pub fn current_objectives(&self) -> &[f64] {
        &self.current_objectives
    }

    /// Candidate objective of each iteration, accepted or not.
    #[inline]
    pub fn candidate_objectives(&self) -> &[f64] {
        &self.candidate_objectives
    }

    /// Wall time of each iteration.
    #[inline]
    pub fn iteration_runtimes(&self) -> &[Duration] {
        &self.iteration_runtimes
    }

    /// Total wall time across all recorded iterations.
    pub fn total_runtime(&self) -> Duration {
        self.iteration_runtimes.iter().sum()
    }

    #[inline]
    pub fn destroy_operator_names(&self) -> &[String] {
        &self.destroy_names
    }

    #[inline]
    pub fn repair_operator_names(&self) -> &[String] {
        &self.repair_names
    }

    /// Outcome counts per destroy operator, index-aligned with
    /// [`Statistics::destroy_operator_names`].
    #[inline]
    pub fn destroy_counts(&self) -> &[OutcomeCounts] {
        &self.destroy_counts
    }

    /// Outcome counts per repair operator, index-aligned with
    /// [`Statistics::repair_operator_names`].
    #[inline]
    pub fn repair_counts(&self) -> &[OutcomeCounts] {
        &self.repair_counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_counts_accumulate_per_category() {
        let mut counts = OutcomeCounts::default();
        counts.record(Outcome::Best);
        counts.record(Outcome::Reject);
        counts.record(Outcome::Reject);
        assert_eq!(counts.count(Outcome::Best), 1);
        assert_eq!(counts.count(Outcome::Better), 0);
        assert_eq!(counts.count(Outcome::Reject), 2);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn traces_grow_in_lockstep() {
        let mut stats = Statistics::for_operators(
            vec!["random_removal".into()],
            vec!["greedy_insert".into()],
        );
        stats.record_iteration(1.0, 2.0, 3.0, Duration::from_micros(5));
        stats.record_iteration(1.0, 1.5, 1.5, Duration::from_micros(7));

        assert_eq!(stats.iterations(), 2);
        assert_eq!(stats.best_objectives(), &[1.0, 1.0]);
        assert_eq!(stats.current_objectives(), &[2.0, 1.5]);
        assert_eq!(stats.candidate_objectives(), &[3.0, 1.5]);
        assert_eq!(stats.total_runtime(), Duration::from_micros(12));
    }

    #[test]
    fn operator_counts_follow_the_applied_pair() {
        let mut stats = Statistics::for_operators(
            vec!["a".into(), "b".into()],
            vec!["r".into()],
        );
        stats.record_outcome(OperatorPair::new(0, 0), Outcome::Best);
        stats.record_outcome(OperatorPair::new(1, 0), Outcome::Reject);
        stats.record_outcome(OperatorPair::new(1, 0), Outcome::Accept);

        assert_eq!(stats.destroy_counts()[0].total(), 1);
        assert_eq!(stats.destroy_counts()[1].total(), 2);
        assert_eq!(stats.repair_counts()[0].total(), 3);
        assert_eq!(stats.destroy_counts()[1].count(Outcome::Accept), 1);
    }
}

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

use std::fmt;

/// Category assigned to a candidate solution after evaluation. Exactly one
/// category applies per iteration; selection schemes credit the operator
/// pair with the score attached to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The candidate improves on the best solution found so far.
    Best,
    /// The candidate improves on the current solution, but not the best.
    Better,
    /// A non-improving candidate admitted by the acceptance criterion.
    Accept,
    /// A non-improving candidate turned down by the acceptance criterion.
    Reject,
}

impl Outcome {
    /// All categories, in score-vector order.
    pub const ALL: [Outcome; 4] = [
        Outcome::Best,
        Outcome::Better,
        Outcome::Accept,
        Outcome::Reject,
    ];

    /// Position of this category in score vectors and count tables.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Outcome::Best => 0,
            Outcome::Better => 1,
            Outcome::Accept => 2,
            Outcome::Reject => 3,
        }
    }

    /// Whether this category replaced the current solution.
    #[inline]
    pub const fn is_accepted(self) -> bool {
        !matches!(self, Outcome::Reject)
    }

    /// Classify a candidate against the incumbent objectives. Improvement is
    /// strict: equal objectives never count as better. `accepted` is the
    /// verdict of the acceptance criterion and is only consulted when the
    /// candidate improves neither the best nor the current solution.
    #[inline]
    pub fn classify(candidate: f64, current: f64, best: f64, accepted: bool) -> Self {
        if candidate < best {
            Outcome::Best
        } else if candidate < current {
            Outcome::Better
        } else if accepted {
            Outcome::Accept
        } else {
            Outcome::Reject
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Best => write!(f, "best"),
            Outcome::Better => write!(f, "better"),
            Outcome::Accept => write!(f, "accept"),
            Outcome::Reject => write!(f, "reject"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_stable_and_distinct() {
        for (i, o) in Outcome::ALL.iter().enumerate() {
            assert_eq!(o.index(), i);
        }
    }

    #[test]
    fn classify_prefers_best_over_better() {
        assert_eq!(Outcome::classify(1.0, 3.0, 2.0, false), Outcome::Best);
        assert_eq!(Outcome::classify(2.5, 3.0, 2.0, false), Outcome::Better);
    }

    #[test]
    fn equal_objectives_are_not_improvements() {
        // Ties fall through to the acceptance verdict.
        assert_eq!(Outcome::classify(2.0, 2.0, 2.0, false), Outcome::Reject);
        assert_eq!(Outcome::classify(2.0, 2.0, 2.0, true), Outcome::Accept);
        assert_eq!(Outcome::classify(3.0, 3.0, 2.0, true), Outcome::Accept);
    }

    #[test]
    fn acceptance_split() {
        assert!(Outcome::Best.is_accepted());
        assert!(Outcome::Better.is_accepted());
        assert!(Outcome::Accept.is_accepted());
        assert!(!Outcome::Reject.is_accepted());
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Outcome::Best.to_string(), "best");
        assert_eq!(Outcome::Reject.to_string(), "reject");
    }
}

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

fn validate_alpha(alpha: f64) -> Result<(), ConfigurationError> {
    if !alpha.is_finite() || alpha <= 1.0 {
        return Err(ConfigurationError::invalid_parameter(
            "alpha",
            format!("water level factor must exceed 1, got {alpha}"),
        ));
    }
    Ok(())
}

/// Great deluge: candidates must dive under a water level that starts at
/// `alpha * f(initial)` and relaxes toward the best objective by a factor
/// of `beta` every iteration.
#[derive(Clone, Copy, Debug)]
pub struct GreatDeluge {
    alpha: f64,
    beta: f64,
    level: f64,
}

impl GreatDeluge {
    pub fn new(alpha: f64, beta: f64) -> Result<Self, ConfigurationError> {
        validate_alpha(alpha)?;
        if !beta.is_finite() || beta <= 0.0 || beta >= 1.0 {
            return Err(ConfigurationError::invalid_parameter(
                "beta",
                format!("decay factor must lie in (0, 1), got {beta}"),
            ));
        }
        Ok(Self {
            alpha,
            beta,
            level: f64::INFINITY,
        })
    }

    /// Current water level.
    #[inline]
    pub fn level(&self) -> f64 {
        self.level
    }
}

impl AcceptanceCriterion for GreatDeluge {
    fn name(&self) -> &str {
        "GreatDeluge"
    }

    fn start(&mut self, initial: f64) {
        self.level = self.alpha * initial;
    }

    fn accept(&mut self, _rng: &mut dyn RngCore, _best: f64, _current: f64, candidate: f64) -> bool {
        candidate < self.level
    }

    fn tick(&mut self, best: f64, _current: f64) {
        self.level -= self.beta * (self.level - best);
    }
}

/// Great deluge with a non-linear level trajectory: an iteration that
/// lowers the best objective contracts the level toward it exponentially
/// in the relative gap, while a stalled iteration relaxes the level upward
/// by `gamma * |gap|` to keep the search exploring.
#[derive(Clone, Copy, Debug)]
pub struct NonLinearGreatDeluge {
    alpha: f64,
    gamma: f64,
    delta: f64,
    level: f64,
    prev_best: f64,
}

impl NonLinearGreatDeluge {
    pub fn new(alpha: f64, gamma: f64, delta: f64) -> Result<Self, ConfigurationError> {
        validate_alpha(alpha)?;
        if !gamma.is_finite() || gamma < 0.0 {
            return Err(ConfigurationError::invalid_parameter(
                "gamma",
                format!("relaxation factor must be non-negative, got {gamma}"),
            ));
        }
        if !delta.is_finite() || delta <= 0.0 {
            return Err(ConfigurationError::invalid_parameter(
                "delta",
                format!("contraction factor must be positive, got {delta}"),
            ));
        }
        Ok(Self {
            alpha,
            gamma,
            delta,
            level: f64::INFINITY,
            prev_best: f64::INFINITY,
        })
    }

    /// Current water level.
    #[inline]
    pub fn level(&self) -> f64 {
        self.level
    }
}

impl AcceptanceCriterion for NonLinearGreatDeluge {
    fn name(&self) -> &str {
        "NonLinearGreatDeluge"
    }

    fn start(&mut self, initial: f64) {
        self.level = self.alpha * initial;
        self.prev_best = initial;
    }

    fn accept(&mut self, _rng: &mut dyn RngCore, _best: f64, _current: f64, candidate: f64) -> bool {
        candidate < self.level
    }

    fn tick(&mut self, best: f64, _current: f64) {
        let gap = self.level - best;
        if best < self.prev_best {
            // Larger relative gaps contract harder.
            let relative = gap / best.abs().max(f64::EPSILON);
            self.level = best + gap * (-self.delta * relative).exp();
        } else {
            self.level += self.gamma * gap.abs();
        }
        self.prev_best = best;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alns_core::random::seeded;

    #[test]
    fn parameters_are_validated() {
        assert!(GreatDeluge::new(1.0, 0.1).is_err());
        assert!(GreatDeluge::new(1.2, 0.0).is_err());
        assert!(GreatDeluge::new(1.2, 1.0).is_err());
        assert!(GreatDeluge::new(1.2, 0.1).is_ok());

        assert!(NonLinearGreatDeluge::new(1.0, 0.1, 1.0).is_err());
        assert!(NonLinearGreatDeluge::new(1.2, -0.1, 1.0).is_err());
        assert!(NonLinearGreatDeluge::new(1.2, 0.1, 0.0).is_err());
        assert!(NonLinearGreatDeluge::new(1.2, 0.1, 1.0).is_ok());
    }

    #[test]
    fn level_starts_above_the_initial_objective() {
        let mut gd = GreatDeluge::new(1.5, 0.1).unwrap();
        gd.start(100.0);
        assert_eq!(gd.level(), 150.0);

        let mut rng = seeded(0);
        assert!(gd.accept(&mut rng, 100.0, 100.0, 149.0));
        assert!(!gd.accept(&mut rng, 100.0, 100.0, 150.0));
    }

    #[test]
    fn level_relaxes_toward_best_without_crossing_it() {
        let mut gd = GreatDeluge::new(2.0, 0.5).unwrap();
        gd.start(100.0);
        gd.tick(80.0, 90.0);
        // 200 - 0.5 * (200 - 80) = 140
        assert_eq!(gd.level(), 140.0);
        for _ in 0..200 {
            gd.tick(80.0, 90.0);
        }
        assert!(gd.level() >= 80.0);
        assert!(gd.level() - 80.0 < 1e-6);
    }

    #[test]
    fn nonlinear_contracts_on_improvement_and_relaxes_when_stuck() {
        let mut gd = NonLinearGreatDeluge::new(1.5, 0.02, 1.0).unwrap();
        gd.start(100.0);
        assert_eq!(gd.level(), 150.0);

        // Stalled tick: the level creeps upward.
        gd.tick(100.0, 100.0);
        let relaxed = gd.level();
        assert!(relaxed > 150.0);

        // An improvement pulls the level sharply toward the new best.
        gd.tick(90.0, 90.0);
        let contracted = gd.level();
        assert!(contracted < relaxed);
        assert!(contracted > 90.0);
    }

    #[test]
    fn nonlinear_gate_is_the_water_level() {
        let mut gd = NonLinearGreatDeluge::new(1.2, 0.0, 1.0).unwrap();
        gd.start(50.0);
        let mut rng = seeded(0);
        assert!(gd.accept(&mut rng, 50.0, 50.0, 59.0));
        assert!(!gd.accept(&mut rng, 50.0, 50.0, 60.0));
    }
}

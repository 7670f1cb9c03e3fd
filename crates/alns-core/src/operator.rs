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

use crate::params::Params;
use crate::state::SolutionState;
use rand::RngCore;
use std::fmt;

/// Boxed error returned by user operator code. Any such error is fatal for
/// the running search and propagates out of the engine.
pub type OperatorError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Destroy,
    Repair,
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorKind::Destroy => write!(f, "destroy"),
            OperatorKind::Repair => write!(f, "repair"),
        }
    }
}

/// Indices of the (destroy, repair) operators applied in one iteration.
/// Selection schemes score the pair as a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OperatorPair {
    pub destroy: usize,
    pub repair: usize,
}

impl OperatorPair {
    #[inline]
    pub fn new(destroy: usize, repair: usize) -> Self {
        Self { destroy, repair }
    }
}

impl fmt::Display for OperatorPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(destroy {}, repair {})", self.destroy, self.repair)
    }
}

/// A destroy operator partially un-makes a solution, leaving room for a
/// repair operator to rebuild it differently.
pub trait DestroyOperator<S: SolutionState>: Send + Sync {
    /// Human-readable operator name, unique among destroy operators.
    fn name(&self) -> &str;

    /// Produce a partially destroyed copy of `solution`. `params` is the
    /// configuration map forwarded verbatim by the engine; operators read
    /// the keys they recognize and ignore the rest.
    fn destroy(
        &self,
        solution: &S,
        rng: &mut dyn RngCore,
        params: &Params,
    ) -> Result<S, OperatorError>;
}

/// A repair operator completes a partially destroyed solution.
pub trait RepairOperator<S: SolutionState>: Send + Sync {
    /// Human-readable operator name, unique among repair operators.
    fn name(&self) -> &str;

    /// Rebuild `partial` into a complete solution.
    fn repair(
        &self,
        partial: &S,
        rng: &mut dyn RngCore,
        params: &Params,
    ) -> Result<S, OperatorError>;
}

/// Adapter turning a plain closure into a named destroy operator.
pub struct FnDestroy<F> {
    name: String,
    func: F,
}

impl<F> FnDestroy<F> {
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<S, F> DestroyOperator<S> for FnDestroy<F>
where
    S: SolutionState,
    F: Fn(&S, &mut dyn RngCore, &Params) -> Result<S, OperatorError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn destroy(
        &self,
        solution: &S,
        rng: &mut dyn RngCore,
        params: &Params,
    ) -> Result<S, OperatorError> {
        (self.func)(solution, rng, params)
    }
}

/// Adapter turning a plain closure into a named repair operator.
pub struct FnRepair<F> {
    name: String,
    func: F,
}

impl<F> FnRepair<F> {
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<S, F> RepairOperator<S> for FnRepair<F>
where
    S: SolutionState,
    F: Fn(&S, &mut dyn RngCore, &Params) -> Result<S, OperatorError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn repair(
        &self,
        partial: &S,
        rng: &mut dyn RngCore,
        params: &Params,
    ) -> Result<S, OperatorError> {
        (self.func)(partial, rng, params)
    }
}

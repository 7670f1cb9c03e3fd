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

/// A caller-supplied solution representation.
///
/// The engine never inspects the payload; it only evaluates the objective,
/// clones states when it needs an independent copy, and (for contextual
/// selection policies) asks for a feature vector. `Clone` must produce a
/// value fully independent of the source: the engine keeps the best and the
/// current solution alive simultaneously and mutating one through an
/// operator must never affect the other.
pub trait SolutionState: Clone {
    /// Objective value of this state. Lower is better; callers that want to
    /// maximize negate their objective. The value must be deterministic for
    /// a given state.
    fn objective(&self) -> f64;

    /// Feature vector describing this state, consumed by contextual
    /// selection policies. Implementations must keep the dimensionality
    /// fixed for the duration of a search. The default is `None`, which is
    /// fine for every non-contextual scheme.
    fn context(&self) -> Option<Vec<f64>> {
        None
    }
}

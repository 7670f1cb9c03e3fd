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

//! Capability contracts for adaptive large neighborhood search.
//!
//! This crate defines the vocabulary shared between the search engine and
//! its callers: the [`state::SolutionState`] contract, the destroy/repair
//! operator traits, the iteration outcome categories, and the pass-through
//! parameter map handed to every operator call. It contains no search logic.

pub mod operator;
pub mod outcome;
pub mod params;
pub mod random;
pub mod state;

pub mod prelude {
    pub use crate::operator::{
        DestroyOperator, FnDestroy, FnRepair, OperatorError, OperatorKind, OperatorPair,
        RepairOperator,
    };
    pub use crate::outcome::Outcome;
    pub use crate::params::{ParamValue, Params};
    pub use crate::state::SolutionState;
}

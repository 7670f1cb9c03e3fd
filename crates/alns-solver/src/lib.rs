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

//! Adaptive large neighborhood search.
//!
//! The engine in [`engine::Alns`] repeatedly destroys and repairs a
//! caller-supplied solution, learning which operator pairs pay off. The
//! three strategy families (operator selection in [`select`], acceptance in
//! [`accept`], stopping in [`stop`]) are plugged into each
//! [`engine::Alns::iterate`] call; the solution representation and the
//! operators themselves come from `alns-core` contracts.

pub mod accept;
pub mod engine;
pub mod err;
pub mod result;
pub mod select;
pub mod stats;
pub mod stop;

pub use engine::Alns;
pub use err::SearchError;
pub use result::SearchResult;

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

//! # Noisefloor Validate
//!
//! Precondition checks for the numeric parameters of differential-privacy
//! mechanisms: privacy budgets, noise bounds, sensitivities, and confidence
//! levels. Every public mechanism constructor is expected to route each
//! user-supplied parameter through these checks before trusting it; a value
//! that fails validation must never propagate into arithmetic.
//!
//! Checks are binary: success or a descriptive
//! [`ValidationError`](noisefloor_core::error::ValidationError) embedding the
//! caller-supplied parameter name and the violated bound. There are no
//! warning states and nothing is recovered internally.
//!
//! Comparisons are literal floating comparisons of the stored
//! representations. Values closer to a bound than the smallest representable
//! step can land on the wrong side of an interval check; this is a
//! documented property of the contract, deliberately not papered over with
//! epsilon-tolerant comparison.

pub mod checks;

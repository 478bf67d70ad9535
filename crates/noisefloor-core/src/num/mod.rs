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

//! # Numeric Foundations
//!
//! Overflow-safe arithmetic for privacy-budget and bound computation. This
//! module consolidates the by-value operation traits every mechanism
//! constructor and aggregation builder must use when combining sensitivities,
//! budgets, or clamping bounds.
//!
//! ## Submodules
//!
//! - `ops`: The `SafeAdd`/`SafeSub`/`SafeSquare` trait family and the
//!   `SafeCastFromF64` conversion, all returning a value paired with a
//!   success flag and saturating on failure.
//! - `clamp`: Bound-order-explicit clamping that tolerates unordered
//!   floating inputs instead of panicking.
//! - `constants`: Default privacy-parameter values.
//!
//! ## Motivation
//!
//! A silently wrapped sum can convince a caller that a tiny noise scale is
//! safe when it is not. These traits make overflow loud (a reported flag)
//! while still landing on a conservative saturated value, so even a caller
//! that neglects the flag never observes a wrapped result.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod clamp;
pub mod constants;
pub mod ops;

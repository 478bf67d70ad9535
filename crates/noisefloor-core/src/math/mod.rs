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

//! # Math Primitives
//!
//! Grid quantization and interval structures for privacy-safe numeric
//! release. This module holds the pieces that defeat floating-point
//! representation attacks: a value snapped onto a power-of-two grid carries
//! no sub-grid precision an attacker could mine for information.
//!
//! ## Submodules
//!
//! - `quantize`: Power-of-two discovery (`next_power_of_two`) and exact
//!   rounding onto a multiple grid (`round_to_nearest_multiple`), bit-exact
//!   whenever the granularity is a power of two.
//! - `interval`: A generic bounded interval with independently toggleable
//!   open/closed endpoints, plus the bracket-notation `Display` used in
//!   validation messages.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod interval;
pub mod quantize;

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

//! # Safe Operation Traits
//!
//! By-value arithmetic traits whose failure mode is "fail loud but land
//! safe": every operation returns its result paired with a success flag, and
//! a failed operation still yields the saturated bound of the type rather
//! than an undefined or wrapped value.
//!
//! ## Submodules
//!
//! - `safe_arithmetic`: `SafeAdd`, `SafeSub`, and `SafeSquare` for all
//!   primitive integer and floating types. Integer overflow saturates and
//!   clears the flag; floating overflow to infinity is accepted IEEE-754
//!   behavior and reports success.
//! - `safe_cast`: `SafeCastFromF64` for converting an `f64` into an integral
//!   or narrower floating target. Only NaN-to-integral is a hard failure;
//!   out-of-range values saturate and report success.
//!
//! Refer to each submodule for examples and the exact per-type semantics.

pub mod safe_arithmetic;
pub mod safe_cast;

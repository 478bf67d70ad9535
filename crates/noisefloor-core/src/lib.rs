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

//! # Noisefloor Core
//!
//! Numeric-safety primitives for differential-privacy mechanisms. This crate
//! consolidates the arithmetic, quantization, and calibration building blocks
//! that noise mechanisms and aggregation algorithms must go through so that
//! a privacy guarantee proven on paper survives contact with finite-precision
//! machine arithmetic.
//!
//! ## Modules
//!
//! - `num`: Overflow-safe by-value arithmetic traits (`SafeAdd`, `SafeSub`,
//!   `SafeSquare`), the saturating `f64`-to-target cast (`SafeCastFromF64`),
//!   a bound-order-explicit `clamp`, and privacy-parameter constants.
//! - `math`: Power-of-two discovery and exact rounding-to-multiple
//!   (`quantize`), and the `BoundedInterval` primitive with independently
//!   toggleable endpoints used by parameter validation.
//! - `dist`: Inverse error function and the standard-normal quantile
//!   function (`qnorm`) used to calibrate Gaussian noise from a target
//!   confidence level.
//! - `stats`: Descriptive statistics (mean, population variance, order
//!   statistics) and small vector utilities for calibration and test
//!   harnesses.
//! - `error`: The structured `ValidationError` surfaced by every numeric
//!   precondition check in this workspace.
//!
//! ## Purpose
//!
//! A wrapped sum or a sub-grid floating residual can silently void a
//! differential-privacy guarantee rather than merely corrupting a value.
//! Every operation here is a pure function with explicit failure semantics:
//! arithmetic failures saturate and report a flag, validation failures return
//! descriptive errors, and identical inputs always produce identical outputs.
//!
//! Refer to each module for detailed APIs and examples.

pub mod dist;
pub mod error;
pub mod math;
pub mod num;
pub mod stats;

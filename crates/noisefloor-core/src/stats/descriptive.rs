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

use crate::num::clamp::clamp;
use num_traits::ToPrimitive;

#[inline]
fn to_f64<T: ToPrimitive>(value: &T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Returns the arithmetic mean of `values` as an `f64`.
///
/// An empty slice yields NaN.
#[inline]
pub fn mean<T: ToPrimitive>(values: &[T]) -> f64 {
    values.iter().map(to_f64).sum::<f64>() / values.len() as f64
}

/// Returns the population variance of `values` (denominator is the count,
/// not `count - 1`).
///
/// An empty slice yields NaN.
pub fn variance<T: ToPrimitive>(values: &[T]) -> f64 {
    let mu = mean(values);
    values
        .iter()
        .map(|v| {
            let dev = to_f64(v) - mu;
            dev * dev
        })
        .sum::<f64>()
        / values.len() as f64
}

/// Returns the population standard deviation of `values`.
#[inline]
pub fn standard_dev<T: ToPrimitive>(values: &[T]) -> f64 {
    variance(values).sqrt()
}

/// Returns the value at fractional rank `q` of the sorted input.
///
/// The effective position is `q * n - 0.5`, clamped to the valid index
/// range, with linear interpolation between neighboring order statistics at
/// non-integral positions. `q = 0` returns the minimum and `q = 1` the
/// maximum. An empty slice yields NaN.
///
/// # Examples
///
/// ```rust
/// # use noisefloor_core::stats::descriptive::order_statistic;
/// let v = [1.0, 5.0, 7.0, 9.0, 13.0];
/// assert_eq!(order_statistic(0.60, &v), 8.0);
/// assert_eq!(order_statistic(0.0, &v), 1.0);
/// ```
pub fn order_statistic<T: ToPrimitive>(q: f64, values: &[T]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted: Vec<f64> = values.iter().map(to_f64).collect();
    sorted.sort_unstable_by(f64::total_cmp);

    let n = sorted.len();
    let position = clamp(0.0, (n - 1) as f64, q * n as f64 - 0.5);
    let left = position.floor() as usize;
    let right = position.ceil() as usize;
    let fraction = position - left as f64;
    sorted[left] + fraction * (sorted[right] - sorted[left])
}

/// Returns the elements of `values` whose parallel `keep` entry is true,
/// preserving order.
///
/// # Panics
///
/// Panics if the slices have different lengths.
///
/// # Examples
///
/// ```rust
/// # use noisefloor_core::stats::descriptive::vector_filter;
/// let filtered = vector_filter(&[1.0, 2.0, 2.0, 3.0], &[false, true, true, false]);
/// assert_eq!(filtered, vec![2.0, 2.0]);
/// ```
pub fn vector_filter<T: Copy>(values: &[T], keep: &[bool]) -> Vec<T> {
    assert_eq!(
        values.len(),
        keep.len(),
        "vector_filter: values and mask must have equal lengths"
    );
    values
        .iter()
        .zip(keep)
        .filter(|(_, &k)| k)
        .map(|(&v, _)| v)
        .collect()
}

/// Renders `values` as a bracketed, comma-separated list for diagnostics.
///
/// # Examples
///
/// ```rust
/// # use noisefloor_core::stats::descriptive::vector_to_string;
/// assert_eq!(vector_to_string(&[1.0, 2.0, 2.0, 3.0]), "[1, 2, 2, 3]");
/// ```
pub fn vector_to_string<T: std::fmt::Display>(values: &[T]) -> String {
    let joined = values
        .iter()
        .map(T::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

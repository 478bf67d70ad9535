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

//! # Power-of-Two Quantization
//!
//! Snapping a noisy value onto a power-of-two grid before release closes the
//! floating-point side channel: near zero, doubles are denser than anywhere
//! else on the line, and that uneven density leaks information about the
//! pre-noise value. The grid defense only works if the snap itself is exact,
//! so for power-of-two granularities every step below stays on exactly
//! representable values and the result carries no residual rounding error.
//!
//! Arbitrary granularities are supported as well, with ordinary floating
//! error; they do not carry the exactness guarantee.

/// Returns the smallest power of two greater than or equal to `x`.
///
/// The exponent may be negative, so fractional inputs resolve to fractional
/// powers (`0.2` gives `0.25`). Exact powers of two are fixed points, and
/// positive magnitudes below the smallest representable power resolve to the
/// smallest power itself rather than underflowing to zero.
///
/// The input must be positive; non-positive or NaN inputs yield NaN.
///
/// # Examples
///
/// ```rust
/// # use noisefloor_core::math::quantize::next_power_of_two;
/// assert_eq!(next_power_of_two(3.0), 4.0);
/// assert_eq!(next_power_of_two(0.2), 0.25);
/// assert_eq!(next_power_of_two(8.0), 8.0);
/// ```
#[inline]
pub fn next_power_of_two(x: f64) -> f64 {
    x.log2().ceil().exp2()
}

/// Rounds `x` to the nearest multiple of `granularity`.
///
/// Exact midpoints round toward positive infinity: `5.0` at granularity
/// `2.0` gives `6.0`, while `-5.0` gives `-4.0`. When the granularity is a
/// power of two (including negative exponents such as `1/2^10`), the result
/// is bit-exact; the remainder produced by `%` is exactly representable and
/// subtracting it never rounds.
///
/// # Examples
///
/// ```rust
/// # use noisefloor_core::math::quantize::round_to_nearest_multiple;
/// assert_eq!(round_to_nearest_multiple(4.9, 2.0), 4.0);
/// assert_eq!(round_to_nearest_multiple(5.0, 2.0), 6.0);
/// assert_eq!(round_to_nearest_multiple(-5.0, 2.0), -4.0);
/// ```
#[inline]
pub fn round_to_nearest_multiple(x: f64, granularity: f64) -> f64 {
    let remainder = x % granularity;
    let half = granularity / 2.0;
    if remainder.abs() > half {
        return x - remainder + granularity.copysign(remainder);
    }
    if remainder.abs() == half {
        // Ties round toward positive infinity.
        return x + half;
    }
    x - remainder
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-5;

    #[test]
    fn test_next_power_positive_powers() {
        assert!((next_power_of_two(3.0) - 4.0).abs() < TOLERANCE);
        assert!((next_power_of_two(5.0) - 8.0).abs() < TOLERANCE);
        assert!((next_power_of_two(7.9) - 8.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_next_power_exact_positive_powers() {
        assert_eq!(next_power_of_two(2.0), 2.0);
        assert_eq!(next_power_of_two(8.0), 8.0);
    }

    #[test]
    fn test_next_power_one() {
        assert_eq!(next_power_of_two(1.0), 1.0);
    }

    #[test]
    fn test_next_power_negative_powers() {
        assert!((next_power_of_two(0.4) - 0.5).abs() < TOLERANCE);
        assert!((next_power_of_two(0.2) - 0.25).abs() < TOLERANCE);
    }

    #[test]
    fn test_next_power_exact_negative_powers() {
        assert_eq!(next_power_of_two(0.5), 0.5);
        assert_eq!(next_power_of_two(0.125), 0.125);
    }

    #[test]
    fn test_next_power_subnormal_fixed_point() {
        // 2^-1024 is an exact (subnormal) power and must map to itself.
        let tiny = f64::MIN_POSITIVE / 4.0;
        assert_eq!(next_power_of_two(tiny), tiny);
    }

    #[test]
    fn test_next_power_subnormal_rounds_up() {
        // 3 * 2^-1025 lies between 2^-1024 and 2^-1023.
        let x = 3.0 * (f64::MIN_POSITIVE / 8.0);
        assert_eq!(next_power_of_two(x), f64::MIN_POSITIVE / 2.0);
    }

    #[test]
    fn test_next_power_invalid_input_is_nan() {
        assert!(next_power_of_two(-3.0).is_nan());
        assert!(next_power_of_two(f64::NAN).is_nan());
    }

    // Rounding to a multiple of a power of two must be exact, so the
    // assertions below compare bit-for-bit rather than within a tolerance.

    #[test]
    fn test_round_positive_no_ties() {
        assert_eq!(round_to_nearest_multiple(4.9, 2.0), 4.0);
        assert_eq!(round_to_nearest_multiple(5.1, 2.0), 6.0);
    }

    #[test]
    fn test_round_negative_no_ties() {
        assert_eq!(round_to_nearest_multiple(-4.9, 2.0), -4.0);
        assert_eq!(round_to_nearest_multiple(-5.1, 2.0), -6.0);
    }

    #[test]
    fn test_round_positive_ties() {
        assert_eq!(round_to_nearest_multiple(5.0, 2.0), 6.0);
    }

    #[test]
    fn test_round_negative_ties() {
        assert_eq!(round_to_nearest_multiple(-5.0, 2.0), -4.0);
    }

    #[test]
    fn test_round_negative_power_of_two_granularity() {
        assert_eq!(round_to_nearest_multiple(0.2078795763, 0.25), 0.25);
        assert_eq!(
            round_to_nearest_multiple(0.1, 1.0 / (1u64 << 10) as f64),
            0.099609375
        );
        assert_eq!(
            round_to_nearest_multiple(0.3, 1.0 / (1u64 << 30) as f64),
            322122547.0 / (1u64 << 30) as f64
        );
    }

    #[test]
    fn test_round_is_idempotent_on_exact_multiples() {
        let g = 0.25;
        for x in [-2.0, -0.75, 0.0, 0.5, 1.25, 100.25] {
            assert_eq!(round_to_nearest_multiple(x, g), x);
        }
        let once = round_to_nearest_multiple(0.3, g);
        assert_eq!(round_to_nearest_multiple(once, g), once);
    }
}

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

/// Restricts `value` to the closed range `[lower, upper]`.
///
/// Unlike `Ord::clamp`, this never panics: an out-of-order bound pair is a
/// caller bug caught by a debug assertion, and a NaN value is returned
/// unchanged (every comparison against it is false).
///
/// # Examples
///
/// ```rust
/// # use noisefloor_core::num::clamp::clamp;
/// assert_eq!(clamp(1, 3, 2), 2);
/// assert_eq!(clamp(1.0, 3.0, 4.0), 3.0);
/// assert_eq!(clamp(1.0, 3.0, -2.0), 1.0);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(lower: T, upper: T, value: T) -> T {
    debug_assert!(
        lower <= upper,
        "clamp: lower bound must not exceed upper bound"
    );
    if value > upper {
        upper
    } else if value < lower {
        lower
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_within_bounds() {
        assert_eq!(clamp(1, 3, 2), 2);
        assert_eq!(clamp(-5.0, 5.0, 0.0), 0.0);
    }

    #[test]
    fn test_clamp_above_upper() {
        assert_eq!(clamp(1.0, 3.0, 4.0), 3.0);
    }

    #[test]
    fn test_clamp_below_lower() {
        assert_eq!(clamp(1.0, 3.0, -2.0), 1.0);
    }

    #[test]
    fn test_clamp_at_bounds() {
        assert_eq!(clamp(1.0, 3.0, 1.0), 1.0);
        assert_eq!(clamp(1.0, 3.0, 3.0), 3.0);
    }

    #[test]
    fn test_clamp_nan_value_passes_through() {
        assert!(clamp(1.0, 3.0, f64::NAN).is_nan());
    }
}

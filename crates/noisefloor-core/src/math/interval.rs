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

/// An interval with independently toggleable open/closed endpoints.
///
/// Membership follows the rule used by privacy-parameter validation: a value
/// belongs to the interval if it equals an included endpoint, or if it lies
/// strictly between the bounds. A degenerate interval whose bounds coincide
/// therefore still contains its bound as long as at least one endpoint is
/// included.
///
/// Comparison is the literal floating comparison of the stored
/// representations. Values within one ulp of a bound can land on the wrong
/// side of a check; that behavior is part of the contract and must not be
/// repaired with epsilon-tolerant comparison.
///
/// # Examples
///
/// ```rust
/// # use noisefloor_core::math::interval::BoundedInterval;
/// let iv = BoundedInterval::new(0.0, 1.0, true, false);
/// assert!(iv.contains(0.0));
/// assert!(!iv.contains(1.0));
/// assert_eq!(format!("{}", iv), "[0,1)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedInterval<T> {
    lower: T,
    upper: T,
    include_lower: bool,
    include_upper: bool,
}

impl<T> BoundedInterval<T>
where
    T: Copy + PartialOrd,
{
    /// Creates a new interval.
    ///
    /// Bounds are stored as given; an interval whose lower bound exceeds its
    /// upper bound contains nothing.
    #[inline]
    pub fn new(lower: T, upper: T, include_lower: bool, include_upper: bool) -> Self {
        Self {
            lower,
            upper,
            include_lower,
            include_upper,
        }
    }

    /// Creates a closed interval `[lower, upper]`.
    #[inline]
    pub fn closed(lower: T, upper: T) -> Self {
        Self::new(lower, upper, true, true)
    }

    /// Creates an open interval `(lower, upper)`.
    #[inline]
    pub fn open(lower: T, upper: T) -> Self {
        Self::new(lower, upper, false, false)
    }

    /// Returns the lower bound.
    #[inline]
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Returns the upper bound.
    #[inline]
    pub fn upper(&self) -> T {
        self.upper
    }

    /// Returns `true` if the lower endpoint is included.
    #[inline]
    pub fn includes_lower(&self) -> bool {
        self.include_lower
    }

    /// Returns `true` if the upper endpoint is included.
    #[inline]
    pub fn includes_upper(&self) -> bool {
        self.include_upper
    }

    /// Returns `true` if `value` belongs to the interval.
    ///
    /// A value passes if it equals an included endpoint or lies strictly
    /// between the bounds. NaN belongs to no interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use noisefloor_core::math::interval::BoundedInterval;
    /// // A degenerate half-open interval still contains its included bound.
    /// let iv = BoundedInterval::new(0.0, 0.0, false, true);
    /// assert!(iv.contains(0.0));
    ///
    /// assert!(!BoundedInterval::open(0.0, 0.0).contains(0.0));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        (self.include_lower && value == self.lower)
            || (self.include_upper && value == self.upper)
            || (self.lower < value && value < self.upper)
    }
}

impl<T> std::fmt::Display for BoundedInterval<T>
where
    T: Copy + PartialOrd + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{},{}{}",
            if self.include_lower { '[' } else { '(' },
            self.lower,
            self.upper,
            if self.include_upper { ']' } else { ')' }
        )
    }
}

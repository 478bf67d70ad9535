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

//! Precondition checks on numeric parameters.
//!
//! Each check takes the value, any bounds, and the caller's name for the
//! parameter, and returns `Ok(())` or an
//! [`ErrorKind::InvalidArgument`](noisefloor_core::error::ErrorKind) error
//! whose message embeds that name. The checks are generic over anything
//! ordered and printable, so they apply equally to integer contribution
//! bounds and floating privacy budgets.
//!
//! NaN handling is split by design: [`validate_is_set`] is the only check
//! that rejects NaN, and the remaining checks treat it by literal comparison
//! (every comparison against NaN is false). Callers compose `validate_is_set`
//! first.

use noisefloor_core::error::ValidationError;
use noisefloor_core::math::interval::BoundedInterval;
use num_traits::{Bounded, Zero};
use std::fmt::Display;

/// Checks that an optional parameter carries a usable numeric value.
///
/// Fails if the value is absent or NaN.
///
/// # Examples
///
/// ```rust
/// # use noisefloor_validate::checks::validate_is_set;
/// assert!(validate_is_set(Some(0.5), "Epsilon").is_ok());
/// assert!(validate_is_set::<f64>(None, "Epsilon").is_err());
/// assert!(validate_is_set(Some(f64::NAN), "Epsilon").is_err());
/// ```
pub fn validate_is_set<T>(value: Option<T>, name: &str) -> Result<(), ValidationError>
where
    T: PartialOrd + Display,
{
    match value {
        None => Err(ValidationError::invalid_argument(format!(
            "{name} must be set."
        ))),
        // NaN is the only value with no ordering against itself.
        Some(v) if v.partial_cmp(&v).is_none() => Err(ValidationError::invalid_argument(format!(
            "{name} must be a valid numeric value, but is NaN."
        ))),
        Some(_) => Ok(()),
    }
}

/// Checks that `value > 0`. Positive infinity passes; zero does not.
pub fn validate_is_positive<T>(value: T, name: &str) -> Result<(), ValidationError>
where
    T: Zero + PartialOrd + Display,
{
    if value <= T::zero() {
        return Err(ValidationError::invalid_argument(format!(
            "{name} must be positive, but is {value}."
        )));
    }
    Ok(())
}

/// Checks that `value >= 0`. Positive infinity passes.
pub fn validate_is_non_negative<T>(value: T, name: &str) -> Result<(), ValidationError>
where
    T: Zero + PartialOrd + Display,
{
    if value < T::zero() {
        return Err(ValidationError::invalid_argument(format!(
            "{name} must be non-negative, but is {value}."
        )));
    }
    Ok(())
}

/// Checks that `value` is not an infinity.
///
/// NaN is out of this check's scope and passes; compose with
/// [`validate_is_set`] first. Infinity is detected by comparison against the
/// type's bounds, so every integer is trivially finite.
pub fn validate_is_finite<T>(value: T, name: &str) -> Result<(), ValidationError>
where
    T: Bounded + PartialOrd + Display,
{
    if value > T::max_value() || value < T::min_value() {
        return Err(ValidationError::invalid_argument(format!(
            "{name} must be finite, but is {value}."
        )));
    }
    Ok(())
}

/// Checks that `value` is finite and strictly positive.
///
/// Unlike [`validate_is_positive`], positive infinity fails here.
pub fn validate_is_finite_and_positive<T>(value: T, name: &str) -> Result<(), ValidationError>
where
    T: Bounded + Zero + PartialOrd + Display,
{
    if value <= T::zero() || value > T::max_value() {
        return Err(ValidationError::invalid_argument(format!(
            "{name} must be finite and positive, but is {value}."
        )));
    }
    Ok(())
}

/// Checks that `value` is finite and non-negative.
///
/// Unlike [`validate_is_non_negative`], positive infinity fails here.
pub fn validate_is_finite_and_non_negative<T>(value: T, name: &str) -> Result<(), ValidationError>
where
    T: Bounded + Zero + PartialOrd + Display,
{
    if value < T::zero() || value > T::max_value() {
        return Err(ValidationError::invalid_argument(format!(
            "{name} must be finite and non-negative, but is {value}."
        )));
    }
    Ok(())
}

/// Checks that `value < upper_bound`. Equal values fail.
pub fn validate_is_lesser_than<T>(
    value: T,
    upper_bound: T,
    name: &str,
) -> Result<(), ValidationError>
where
    T: PartialOrd + Display,
{
    if value < upper_bound {
        return Ok(());
    }
    Err(ValidationError::invalid_argument(format!(
        "{name} must be lesser than {upper_bound}, but is {value}."
    )))
}

/// Checks that `value <= upper_bound`. Equal values pass, including equal
/// infinities and equal lowest values.
pub fn validate_is_lesser_than_or_equal_to<T>(
    value: T,
    upper_bound: T,
    name: &str,
) -> Result<(), ValidationError>
where
    T: PartialOrd + Display,
{
    if value <= upper_bound {
        return Ok(());
    }
    Err(ValidationError::invalid_argument(format!(
        "{name} must be lesser than or equal to {upper_bound}, but is {value}."
    )))
}

/// Checks that `value > lower_bound`. Equal values fail.
pub fn validate_is_greater_than<T>(
    value: T,
    lower_bound: T,
    name: &str,
) -> Result<(), ValidationError>
where
    T: PartialOrd + Display,
{
    if value > lower_bound {
        return Ok(());
    }
    Err(ValidationError::invalid_argument(format!(
        "{name} must be greater than {lower_bound}, but is {value}."
    )))
}

/// Checks that `value >= lower_bound`. Equal values pass, including equal
/// infinities and equal lowest values.
pub fn validate_is_greater_than_or_equal_to<T>(
    value: T,
    lower_bound: T,
    name: &str,
) -> Result<(), ValidationError>
where
    T: PartialOrd + Display,
{
    if value >= lower_bound {
        return Ok(());
    }
    Err(ValidationError::invalid_argument(format!(
        "{name} must be greater than or equal to {lower_bound}, but is {value}."
    )))
}

/// Checks that `value` lies in the interval described by the bounds and the
/// two inclusion flags.
///
/// The error message renders the interval in bracket notation and names the
/// form: "the exclusive interval (a,b)", "the inclusive interval [a,b]", or
/// "the interval [a,b)" / "(a,b]" for the half-open cases.
///
/// Membership uses literal floating comparison; values within one ulp of a
/// bound can mis-classify, and that behavior is intentionally preserved.
///
/// # Examples
///
/// ```rust
/// # use noisefloor_validate::checks::validate_is_in_interval;
/// assert!(validate_is_in_interval(0.5, 0.0, 1.0, true, false, "Delta").is_ok());
///
/// let err = validate_is_in_interval(-1.0, 0.0, 1.0, true, false, "Delta").unwrap_err();
/// assert!(err.message().contains("must be in the interval [0,1)"));
/// ```
pub fn validate_is_in_interval<T>(
    value: T,
    lower_bound: T,
    upper_bound: T,
    include_lower: bool,
    include_upper: bool,
    name: &str,
) -> Result<(), ValidationError>
where
    T: Copy + PartialOrd + Display,
{
    let interval = BoundedInterval::new(lower_bound, upper_bound, include_lower, include_upper);
    if interval.contains(value) {
        return Ok(());
    }
    let form = match (include_lower, include_upper) {
        (false, false) => "the exclusive interval",
        (true, true) => "the inclusive interval",
        _ => "the interval",
    };
    Err(ValidationError::invalid_argument(format!(
        "{name} must be in {form} {interval}, but is {value}."
    )))
}

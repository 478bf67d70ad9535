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

//! # Validation Errors
//!
//! The structured error type returned by every numeric precondition check in
//! this workspace. A failed check never aborts and is never recovered
//! internally; it is a plain value the caller must act on, typically by
//! refusing to construct a noise mechanism from the offending parameter.
//!
//! The message embeds the caller-supplied parameter name and the violated
//! bound, so formatting the error is a pure function of the returned value.

/// The category of a failed precondition check.
///
/// Every check in this workspace reports the same kind; the enum exists so
/// that callers match on a stable tag instead of parsing message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A caller-supplied parameter violated a stated precondition.
    InvalidArgument,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "Invalid argument"),
        }
    }
}

/// A failed numeric precondition check.
///
/// Carries a single [`ErrorKind`] and a human-readable description that
/// embeds the parameter name supplied by the caller.
///
/// # Examples
///
/// ```rust
/// # use noisefloor_core::error::{ErrorKind, ValidationError};
/// let err = ValidationError::invalid_argument("Epsilon must be positive, but is 0.");
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// assert!(err.message().contains("Epsilon"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    kind: ErrorKind,
    message: String,
}

impl ValidationError {
    /// Creates an [`ErrorKind::InvalidArgument`] error with the given message.
    #[inline]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            message: message.into(),
        }
    }

    /// Returns the error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the descriptive message, including the parameter name the
    /// caller passed to the failing check.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

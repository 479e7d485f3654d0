//! Steps over string targets.
//!
//! Lengths are measured in characters (Unicode scalar values), not bytes.
//!
//! # Example
//!
//! ```rust
//! use stepwise::{optional, that};
//! use stepwise::steps::string;
//!
//! let code = "AB-1234";
//! let result = that(code, [
//!     optional().when(string::is_empty()),
//!     string::has_prefix("AB-"),
//!     string::pattern(r"^[A-Z]{2}-\d{4}$").unwrap(),
//! ]).run();
//! assert!(result.is_ok());
//! ```

use std::ops::Range;

use regex::Regex;

use crate::error::CheckError;
use crate::step::Step;

/// Passes when the target equals `expected`, or fails with
/// [`CheckError::StringIs`].
pub fn is(expected: impl Into<String>) -> Step<'static, str> {
    let expected = expected.into();
    Step::test(move |s: &str| s == expected, CheckError::StringIs)
}

/// Passes when the target is empty, or fails with [`CheckError::StringIsEmpty`].
pub fn is_empty() -> Step<'static, str> {
    Step::test(|s: &str| s.is_empty(), CheckError::StringIsEmpty)
}

/// Passes when the target is not empty, or fails with
/// [`CheckError::StringIsNotEmpty`].
pub fn is_not_empty() -> Step<'static, str> {
    Step::test(|s: &str| !s.is_empty(), CheckError::StringIsNotEmpty)
}

/// Passes when the target is one of `values`, or fails with
/// [`CheckError::StringIn`].
///
/// # Example
///
/// ```rust
/// use stepwise::{that, CheckError};
/// use stepwise::steps::string;
///
/// let colors = string::is_in(["red", "green", "blue"]);
/// assert!(that("green", [colors.clone()]).run().is_ok());
/// assert_eq!(that("pink", [colors]).run(), Err(CheckError::StringIn));
/// ```
pub fn is_in<I, S>(values: I) -> Step<'static, str>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let values: Vec<String> = values.into_iter().map(Into::into).collect();
    Step::test(move |s: &str| values.iter().any(|v| v == s), CheckError::StringIn)
}

/// Passes when the target has exactly `length` characters, or fails with
/// [`CheckError::StringHasLength`].
pub fn has_length(length: usize) -> Step<'static, str> {
    Step::test(
        move |s: &str| s.chars().count() == length,
        CheckError::StringHasLength,
    )
}

/// Passes when the character count lies in the half-open `range`, or fails
/// with [`CheckError::StringHasLengthInRange`].
///
/// # Example
///
/// ```rust
/// use stepwise::that;
/// use stepwise::steps::string;
///
/// // Between 3 and 8 characters, 8 excluded.
/// let step = string::has_length_in_range(3..8);
/// assert!(that("abc", [step.clone()]).run().is_ok());
/// assert!(that("abcdefgh", [step]).run().is_err());
/// ```
pub fn has_length_in_range(range: Range<usize>) -> Step<'static, str> {
    Step::test(
        move |s: &str| range.contains(&s.chars().count()),
        CheckError::StringHasLengthInRange,
    )
}

/// Passes when the target starts with `prefix`, or fails with
/// [`CheckError::StringHasPrefix`].
pub fn has_prefix(prefix: impl Into<String>) -> Step<'static, str> {
    let prefix = prefix.into();
    Step::test(
        move |s: &str| s.starts_with(prefix.as_str()),
        CheckError::StringHasPrefix,
    )
}

/// Passes when the target ends with `suffix`, or fails with
/// [`CheckError::StringHasSuffix`].
pub fn has_suffix(suffix: impl Into<String>) -> Step<'static, str> {
    let suffix = suffix.into();
    Step::test(
        move |s: &str| s.ends_with(suffix.as_str()),
        CheckError::StringHasSuffix,
    )
}

/// Passes when the target contains `substring`, or fails with
/// [`CheckError::StringContains`].
pub fn contains(substring: impl Into<String>) -> Step<'static, str> {
    let substring = substring.into();
    Step::test(
        move |s: &str| s.contains(substring.as_str()),
        CheckError::StringContains,
    )
}

/// Passes when `regex` matches the target, or fails with
/// [`CheckError::StringMatches`].
///
/// Matching is unanchored; use `^` and `$` to match the whole string.
pub fn matches(regex: Regex) -> Step<'static, str> {
    Step::test(move |s: &str| regex.is_match(s), CheckError::StringMatches)
}

/// Compiles `pattern` and returns a [`matches`] step for it.
///
/// Returns an error if the regex pattern is invalid.
///
/// # Example
///
/// ```rust
/// use stepwise::that;
/// use stepwise::steps::string;
///
/// let digits = string::pattern(r"^\d+$").unwrap();
/// assert!(that("12345", [digits.clone()]).run().is_ok());
/// assert!(that("abc", [digits]).run().is_err());
///
/// assert!(string::pattern(r"[invalid").is_err());
/// ```
pub fn pattern(pattern: &str) -> Result<Step<'static, str>, regex::Error> {
    let regex = Regex::new(pattern)?;
    Ok(matches(regex))
}

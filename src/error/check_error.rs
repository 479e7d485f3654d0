//! Check failure types.
//!
//! This module provides [`CheckError`] for single step failures and
//! [`CheckErrors`] for accumulating failures across several checks.

use std::fmt::{self, Display};

use stillwater::prelude::*;
use thiserror::Error;

/// A stable, documented failure reported by one of the built-in steps.
///
/// Every failure mode of every built-in step maps to exactly one variant, so
/// callers can match on the identity of a failure instead of its message.
/// Variants are grouped by the kind of target they apply to.
///
/// # Example
///
/// ```rust
/// use stepwise::{that, CheckError};
/// use stepwise::steps::string;
///
/// let result = that("foo", [string::has_length(4)]).run();
/// assert_eq!(result, Err(CheckError::StringHasLength));
/// assert_eq!(CheckError::StringHasLength.code(), "has_length");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CheckError {
    /// The string does not equal the expected value.
    #[error("unexpected string value")]
    StringIs,
    /// The string is not empty.
    #[error("string is not empty")]
    StringIsEmpty,
    /// The string is empty.
    #[error("string is empty")]
    StringIsNotEmpty,
    /// The string is not among the expected values.
    #[error("string value not among expected values")]
    StringIn,
    /// The string does not have the expected length.
    #[error("string does not have expected length")]
    StringHasLength,
    /// The string length is outside the expected range.
    #[error("string does not have length in expected range")]
    StringHasLengthInRange,
    /// The string does not start with the expected prefix.
    #[error("string does not have prefix")]
    StringHasPrefix,
    /// The string does not end with the expected suffix.
    #[error("string does not have suffix")]
    StringHasSuffix,
    /// The string does not contain the expected substring.
    #[error("string does not contain expected value")]
    StringContains,
    /// The string does not match the expected pattern.
    #[error("string does not match expected pattern")]
    StringMatches,

    /// The integer differs from the expected value.
    #[error("integer value does not equal expected value")]
    IntEquals,
    /// The integer equals a value it must differ from.
    #[error("integer value equals unexpected value")]
    IntNotEqual,
    /// The integer lies outside the expected half-open range.
    #[error("integer value is not in range")]
    IntInRange,
    /// The integer is not strictly greater than the bound.
    #[error("integer value is not greater than expected value")]
    IntGreaterThan,
    /// The integer is not strictly less than the bound.
    #[error("integer value is not less than expected value")]
    IntLessThan,
    /// The integer is below the bound.
    #[error("integer value is less than expected value")]
    IntGreaterThanOrEqualTo,
    /// The integer is above the bound.
    #[error("integer value is greater than expected value")]
    IntLessThanOrEqualTo,

    /// The slice is not empty.
    #[error("slice is not empty")]
    SliceIsEmpty,
    /// The slice is empty.
    #[error("slice is empty")]
    SliceIsNotEmpty,
    /// The slice does not have the expected number of elements.
    #[error("slice does not have expected length")]
    SliceHasLength,
    /// The slice element count is outside the expected range.
    #[error("slice does not have length in expected range")]
    SliceHasLengthInRange,
    /// No element equals the expected value.
    #[error("slice does not contain expected value")]
    SliceContains,
    /// Some element equals a value that must be absent.
    #[error("slice contains unexpected value")]
    SliceNotContains,
    /// No element satisfied the element step.
    #[error("none of the slice elements meets condition")]
    SliceAny,
    /// At least one element satisfied the element step.
    #[error("some of the slice elements meet condition")]
    SliceNone,

    /// The target has a different shape than the step expects.
    #[error("expected {expected}, got {got}")]
    Type {
        /// The shape the step needed.
        expected: &'static str,
        /// The shape the target had.
        got: &'static str,
    },
    /// An object target lacks a required member.
    #[error("missing field '{name}'")]
    MissingField {
        /// Name of the absent member.
        name: String,
    },
    /// An application-defined failure.
    #[error("{message}")]
    Custom {
        /// Machine-readable code returned by [`CheckError::code`].
        code: String,
        /// Human-readable message.
        message: String,
    },
}

impl CheckError {
    /// Creates an application-defined failure with a machine-readable code.
    pub fn custom(code: impl Into<String>, message: impl Into<String>) -> Self {
        CheckError::Custom {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Returns a machine-readable code for this failure.
    ///
    /// Codes are shared between string and slice variants of the same check
    /// (both length failures report `has_length`), so they describe what was
    /// checked rather than what was checked against.
    pub fn code(&self) -> &str {
        match self {
            CheckError::StringIs => "is",
            CheckError::StringIsEmpty | CheckError::SliceIsEmpty => "is_empty",
            CheckError::StringIsNotEmpty | CheckError::SliceIsNotEmpty => "is_not_empty",
            CheckError::StringIn => "in",
            CheckError::StringHasLength | CheckError::SliceHasLength => "has_length",
            CheckError::StringHasLengthInRange | CheckError::SliceHasLengthInRange => {
                "has_length_in_range"
            }
            CheckError::StringHasPrefix => "has_prefix",
            CheckError::StringHasSuffix => "has_suffix",
            CheckError::StringContains | CheckError::SliceContains => "contains",
            CheckError::StringMatches => "matches",
            CheckError::IntEquals => "equals",
            CheckError::IntNotEqual => "not_equal",
            CheckError::IntInRange => "in_range",
            CheckError::IntGreaterThan => "greater_than",
            CheckError::IntLessThan => "less_than",
            CheckError::IntGreaterThanOrEqualTo => "greater_than_or_equal_to",
            CheckError::IntLessThanOrEqualTo => "less_than_or_equal_to",
            CheckError::SliceNotContains => "not_contains",
            CheckError::SliceAny => "any",
            CheckError::SliceNone => "none",
            CheckError::Type { .. } => "invalid_type",
            CheckError::MissingField { .. } => "missing_field",
            CheckError::Custom { code, .. } => code.as_str(),
        }
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<CheckError>();
    assert_sync::<CheckError>();
};

/// A non-empty collection of check failures.
///
/// `CheckErrors` wraps a `NonEmptyVec<E>` so that a failed
/// `Validation<(), CheckErrors<E>>` always carries at least one failure.
///
/// # Combining Errors
///
/// `CheckErrors` implements `Semigroup`, allowing failures from independent
/// checks to be combined:
///
/// ```rust
/// use stepwise::{CheckError, CheckErrors};
/// use stillwater::prelude::*;
///
/// let first = CheckErrors::single(CheckError::StringIsNotEmpty);
/// let second = CheckErrors::single(CheckError::IntGreaterThan);
///
/// let combined = first.combine(second);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CheckErrors<E = CheckError>(NonEmptyVec<E>);

impl<E> CheckErrors<E> {
    /// Creates a `CheckErrors` containing a single failure.
    pub fn single(error: E) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `CheckErrors` from a `NonEmptyVec` of failures.
    pub fn from_non_empty(errors: NonEmptyVec<E>) -> Self {
        Self(errors)
    }

    /// Creates a `CheckErrors` from a `Vec`, or `None` if it is empty.
    pub fn from_vec(errors: Vec<E>) -> Option<Self> {
        NonEmptyVec::from_vec(errors).map(Self)
    }

    /// Returns the number of failures in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained failures.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.0.iter()
    }

    /// Returns the first failure, in check order.
    pub fn first(&self) -> &E {
        self.0.head()
    }

    /// Consumes the collection, returning the failures in check order.
    pub fn into_vec(self) -> Vec<E> {
        self.0.into_vec()
    }

    /// Borrows the underlying `NonEmptyVec`.
    pub fn as_non_empty_vec(&self) -> &NonEmptyVec<E> {
        &self.0
    }
}

impl CheckErrors<CheckError> {
    /// Returns all failures with the specified code.
    pub fn with_code(&self, code: &str) -> Vec<&CheckError> {
        self.0.iter().filter(|e| e.code() == code).collect()
    }
}

impl<E> Semigroup for CheckErrors<E> {
    fn combine(self, other: Self) -> Self {
        CheckErrors(self.0.combine(other.0))
    }
}

impl<E: Display> Display for CheckErrors<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl<E: fmt::Debug + Display> std::error::Error for CheckErrors<E> {}

impl<E> IntoIterator for CheckErrors<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a, E> IntoIterator for &'a CheckErrors<E> {
    type Item = &'a E;
    type IntoIter = Box<dyn Iterator<Item = &'a E> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

//! Steps over integer targets.
//!
//! # Example
//!
//! ```rust
//! use stepwise::{that, CheckError};
//! use stepwise::steps::numeric;
//!
//! let port = 80;
//! assert!(that(&port, [numeric::positive(), numeric::in_range(1..65536)]).run().is_ok());
//! assert_eq!(
//!     that(&0, [numeric::positive(), numeric::in_range(1..65536)]).run(),
//!     Err(CheckError::IntGreaterThan)
//! );
//! ```

use std::ops::Range;

use crate::error::CheckError;
use crate::step::Step;

/// Passes when the target equals `expected`, or fails with [`CheckError::IntEquals`].
pub fn equals(expected: i64) -> Step<'static, i64> {
    Step::test(move |n: &i64| *n == expected, CheckError::IntEquals)
}

/// Passes when the target differs from `unexpected`, or fails with
/// [`CheckError::IntNotEqual`].
pub fn not_equal(unexpected: i64) -> Step<'static, i64> {
    Step::test(move |n: &i64| *n != unexpected, CheckError::IntNotEqual)
}

/// Passes when the target lies in the half-open `range`, or fails with
/// [`CheckError::IntInRange`].
///
/// # Example
///
/// ```rust
/// use stepwise::{that, CheckError};
/// use stepwise::steps::numeric;
///
/// assert!(that(&1, [numeric::in_range(1..10)]).run().is_ok());
/// assert_eq!(that(&10, [numeric::in_range(1..10)]).run(), Err(CheckError::IntInRange));
/// ```
pub fn in_range(range: Range<i64>) -> Step<'static, i64> {
    Step::test(move |n: &i64| range.contains(n), CheckError::IntInRange)
}

/// Passes when the target is strictly greater than `bound`, or fails with
/// [`CheckError::IntGreaterThan`].
pub fn greater_than(bound: i64) -> Step<'static, i64> {
    Step::test(move |n: &i64| *n > bound, CheckError::IntGreaterThan)
}

/// Passes when the target is strictly less than `bound`, or fails with
/// [`CheckError::IntLessThan`].
pub fn less_than(bound: i64) -> Step<'static, i64> {
    Step::test(move |n: &i64| *n < bound, CheckError::IntLessThan)
}

/// Passes when the target is at least `bound`, or fails with
/// [`CheckError::IntGreaterThanOrEqualTo`].
pub fn greater_than_or_equal_to(bound: i64) -> Step<'static, i64> {
    Step::test(move |n: &i64| *n >= bound, CheckError::IntGreaterThanOrEqualTo)
}

/// Passes when the target is at most `bound`, or fails with
/// [`CheckError::IntLessThanOrEqualTo`].
pub fn less_than_or_equal_to(bound: i64) -> Step<'static, i64> {
    Step::test(move |n: &i64| *n <= bound, CheckError::IntLessThanOrEqualTo)
}

/// Same as `equals(0)`.
pub fn zero() -> Step<'static, i64> {
    equals(0)
}

/// Same as `greater_than(0)`.
pub fn positive() -> Step<'static, i64> {
    greater_than(0)
}

/// Same as `less_than(0)`.
pub fn negative() -> Step<'static, i64> {
    less_than(0)
}

/// Same as `less_than_or_equal_to(0)`.
pub fn non_positive() -> Step<'static, i64> {
    less_than_or_equal_to(0)
}

/// Same as `greater_than_or_equal_to(0)`.
pub fn non_negative() -> Step<'static, i64> {
    greater_than_or_equal_to(0)
}

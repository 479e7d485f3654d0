//! Steps over slice targets.
//!
//! The quantifiers [`all`], [`any`] and [`none`] apply an element step to each
//! element. Elements are borrowed through [`Borrow`], so a `Step<str>` can
//! check the elements of a `[String]`.
//!
//! If the element step skips, the quantifier stops and skips too, which in
//! turn bypasses the rest of the enclosing sequence.
//!
//! # Example
//!
//! ```rust
//! use stepwise::{that, CheckError};
//! use stepwise::steps::{slice, string};
//!
//! let tags = vec!["1".to_string(), "20".to_string()];
//!
//! assert!(that(tags.as_slice(), [slice::any(string::has_length(1))]).run().is_ok());
//! assert_eq!(
//!     that(tags.as_slice(), [slice::all(string::has_length(1))]).run(),
//!     Err(CheckError::StringHasLength)
//! );
//! ```

use std::borrow::Borrow;
use std::ops::Range;

use crate::error::CheckError;
use crate::outcome::Outcome;
use crate::step::Step;

/// Passes when the target has no elements, or fails with
/// [`CheckError::SliceIsEmpty`].
pub fn is_empty<'s, T: 's>() -> Step<'s, [T]> {
    Step::test(|items: &[T]| items.is_empty(), CheckError::SliceIsEmpty)
}

/// Passes when the target has at least one element, or fails with
/// [`CheckError::SliceIsNotEmpty`].
pub fn is_not_empty<'s, T: 's>() -> Step<'s, [T]> {
    Step::test(|items: &[T]| !items.is_empty(), CheckError::SliceIsNotEmpty)
}

/// Passes when the target has exactly `length` elements, or fails with
/// [`CheckError::SliceHasLength`].
pub fn has_length<'s, T: 's>(length: usize) -> Step<'s, [T]> {
    Step::test(
        move |items: &[T]| items.len() == length,
        CheckError::SliceHasLength,
    )
}

/// Passes when the element count lies in the half-open `range`, or fails
/// with [`CheckError::SliceHasLengthInRange`].
pub fn has_length_in_range<'s, T: 's>(range: Range<usize>) -> Step<'s, [T]> {
    Step::test(
        move |items: &[T]| range.contains(&items.len()),
        CheckError::SliceHasLengthInRange,
    )
}

/// Passes when some element equals `value`, or fails with
/// [`CheckError::SliceContains`].
///
/// # Example
///
/// ```rust
/// use stepwise::that;
/// use stepwise::steps::slice;
///
/// let roles = vec!["admin".to_string(), "editor".to_string()];
/// assert!(that(roles.as_slice(), [slice::contains("admin")]).run().is_ok());
/// assert!(that(roles.as_slice(), [slice::contains("owner")]).run().is_err());
/// ```
pub fn contains<'s, T, V>(value: V) -> Step<'s, [T]>
where
    T: PartialEq<V> + 's,
    V: Send + Sync + 's,
{
    any(Step::test(move |item: &T| *item == value, CheckError::SliceAny))
        .err(CheckError::SliceContains)
}

/// Passes when no element equals `value`, or fails with
/// [`CheckError::SliceNotContains`].
pub fn not_contains<'s, T, V>(value: V) -> Step<'s, [T]>
where
    T: PartialEq<V> + 's,
    V: Send + Sync + 's,
{
    none(Step::test(move |item: &T| *item == value, CheckError::SliceNone))
        .err(CheckError::SliceNotContains)
}

/// Passes when every element passes `elem`.
///
/// Fails with the first element failure, unchanged. Skips as soon as an
/// element skips.
pub fn all<'s, T, U, E>(elem: Step<'s, U, E>) -> Step<'s, [T], E>
where
    T: Borrow<U> + 's,
    U: ?Sized + 's,
    E: 's,
{
    Step::new(move |items: &[T]| {
        for item in items {
            match elem.check(Borrow::<U>::borrow(item)) {
                Outcome::Pass => continue,
                other => return other,
            }
        }
        Outcome::Pass
    })
}

/// Passes when at least one element passes `elem`.
///
/// Element failures are ignored; if no element passes the step fails with
/// [`CheckError::SliceAny`]. Skips as soon as an element skips.
pub fn any<'s, T, U, E>(elem: Step<'s, U, E>) -> Step<'s, [T], E>
where
    T: Borrow<U> + 's,
    U: ?Sized + 's,
    E: From<CheckError> + 's,
{
    Step::new(move |items: &[T]| {
        for item in items {
            match elem.check(Borrow::<U>::borrow(item)) {
                Outcome::Pass => return Outcome::Pass,
                Outcome::Skip => return Outcome::Skip,
                Outcome::Fail(_) => continue,
            }
        }
        Outcome::Fail(CheckError::SliceAny.into())
    })
}

/// Passes when no element passes `elem`.
///
/// Fails with [`CheckError::SliceNone`] at the first passing element. Skips as
/// soon as an element skips.
pub fn none<'s, T, U, E>(elem: Step<'s, U, E>) -> Step<'s, [T], E>
where
    T: Borrow<U> + 's,
    U: ?Sized + 's,
    E: From<CheckError> + 's,
{
    Step::new(move |items: &[T]| {
        for item in items {
            match elem.check(Borrow::<U>::borrow(item)) {
                Outcome::Pass => return Outcome::Fail(CheckError::SliceNone.into()),
                Outcome::Skip => return Outcome::Skip,
                Outcome::Fail(_) => continue,
            }
        }
        Outcome::Pass
    })
}

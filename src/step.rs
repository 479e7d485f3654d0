//! The step abstraction and its combinators.
//!
//! A [`Step`] inspects a borrowed target and returns an [`Outcome`]. Steps are
//! immutable and cheap to clone, so the same step can be shared between
//! unrelated validations and across threads.
//!
//! Combinators build new steps from existing ones:
//! - [`Step::err`]: report a fixed error instead of whatever the step failed with
//! - [`Step::if_`]: run the step only when a condition on another value passes
//! - [`Step::when`]: run the step only when a condition on the same target passes
//! - [`optional`]: a step that always skips, meant to be paired with `when`
//!
//! # Example
//!
//! ```rust
//! use stepwise::{optional, that};
//! use stepwise::steps::string;
//!
//! // Empty names are allowed; non-empty ones must be among the known values.
//! let name = "";
//! let result = that(name, [
//!     optional().when(string::is_empty()),
//!     string::is_in(["alice", "bob"]),
//! ]).run();
//! assert!(result.is_ok());
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use crate::error::CheckError;
use crate::outcome::Outcome;

/// Type alias for the function stored in a step.
pub(crate) type StepFn<'s, T, E> = Arc<dyn Fn(&T) -> Outcome<E> + Send + Sync + 's>;

/// A single validation step over targets of type `T`.
///
/// A step either passes, fails with an error of type `E`, or skips. A skip
/// asks [`that`](crate::that) to bypass the remaining steps of the sequence
/// and report success. Steps hold no mutable state: invoking one twice on the
/// same target yields the same outcome.
///
/// Built-in leaf steps live in [`steps`](crate::steps) and fail with
/// [`CheckError`], which is the default error type.
///
/// The lifetime `'s` bounds whatever the step captures. Leaf steps capture
/// only owned data and are `Step<'static, _>`; a step built with
/// [`Step::if_`] over a borrowed condition target lives as long as that
/// borrow.
///
/// # Example
///
/// ```rust
/// use stepwise::{Outcome, Step};
///
/// let even: Step<'_, i64, &str> = Step::test(|n: &i64| n % 2 == 0, "odd");
///
/// assert_eq!(even.check(&4), Outcome::Pass);
/// assert_eq!(even.check(&3), Outcome::Fail("odd"));
/// ```
pub struct Step<'s, T: ?Sized, E = CheckError> {
    f: StepFn<'s, T, E>,
}

impl<'s, T: ?Sized, E> Step<'s, T, E> {
    /// Invokes the step on a target.
    pub fn check(&self, target: &T) -> Outcome<E> {
        (self.f)(target)
    }

    /// Creates a step from a function returning an [`Outcome`].
    ///
    /// This is the only constructor able to produce [`Outcome::Skip`].
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> Outcome<E> + Send + Sync + 's,
    {
        Self { f: Arc::new(f) }
    }

    /// Creates a step from a function returning a `Result`.
    ///
    /// The resulting step never skips.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&T) -> Result<(), E> + Send + Sync + 's,
    {
        Self::new(move |target| f(target).into())
    }

    /// Creates a step that passes when `predicate` holds and otherwise fails
    /// with a clone of `error`.
    pub fn test<P>(predicate: P, error: E) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 's,
        E: Clone + Send + Sync + 's,
    {
        Self::new(move |target| {
            if predicate(target) {
                Outcome::Pass
            } else {
                Outcome::Fail(error.clone())
            }
        })
    }

    /// A step that always passes.
    pub fn pass() -> Self {
        Self::new(|_| Outcome::Pass)
    }

    /// Replaces any failure of this step with `replacement`.
    ///
    /// Passing and skipping are left unchanged, so a skip is never masked.
    /// The replacement may be of a different error type, which lets a call
    /// site report one stable error regardless of which inner step failed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stepwise::{that, CheckError};
    /// use stepwise::steps::string;
    ///
    /// let username = string::has_length_in_range(3..16)
    ///     .err(CheckError::custom("invalid_username", "username must be 3 to 15 characters"));
    ///
    /// let err = that("al", [username]).run().unwrap_err();
    /// assert_eq!(err.code(), "invalid_username");
    /// ```
    pub fn err<F>(self, replacement: F) -> Step<'s, T, F>
    where
        T: 's,
        E: 's,
        F: Clone + Send + Sync + 's,
    {
        Step::new(move |target| match self.check(target) {
            Outcome::Pass => Outcome::Pass,
            Outcome::Skip => Outcome::Skip,
            Outcome::Fail(_) => Outcome::Fail(replacement.clone()),
        })
    }

    /// Runs this step only when `condition` passes on `condition_target`.
    ///
    /// The condition is evaluated first. When it passes, this step runs
    /// against the invocation target. When it fails *or skips*, the result is
    /// a pass and this step is not invoked. The condition's error type is
    /// irrelevant since its failures are never reported.
    ///
    /// The condition target may be borrowed; the resulting step then lives
    /// no longer than the borrow.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stepwise::{that, CheckError};
    /// use stepwise::steps::{numeric, string};
    ///
    /// // The age only matters for members.
    /// let role = String::from("member");
    /// let age_check =
    ///     numeric::greater_than_or_equal_to(18).if_(role.as_str(), string::is("member"));
    ///
    /// assert_eq!(that(&16, [age_check.clone()]).run(), Err(CheckError::IntGreaterThanOrEqualTo));
    /// assert!(that(&16, [numeric::positive().if_("guest", string::is("member"))]).run().is_ok());
    /// ```
    pub fn if_<C, U, E2>(self, condition_target: C, condition: Step<'s, U, E2>) -> Self
    where
        T: 's,
        E: 's,
        C: Borrow<U> + Send + Sync + 's,
        U: ?Sized + 's,
        E2: 's,
    {
        Self::new(move |target| match condition.check(Borrow::<U>::borrow(&condition_target)) {
            Outcome::Pass => self.check(target),
            Outcome::Skip | Outcome::Fail(_) => Outcome::Pass,
        })
    }

    /// Runs this step only when `condition` passes on the same target.
    ///
    /// Equivalent to [`Step::if_`] with the invocation target as the
    /// condition target.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stepwise::that;
    /// use stepwise::steps::string;
    ///
    /// // Only validate the prefix of non-empty strings.
    /// let prefixed = string::has_prefix("id-").when(string::is_not_empty());
    ///
    /// assert!(that("", [prefixed.clone()]).run().is_ok());
    /// assert!(that("id-42", [prefixed.clone()]).run().is_ok());
    /// assert!(that("42", [prefixed]).run().is_err());
    /// ```
    pub fn when<E2>(self, condition: Step<'s, T, E2>) -> Self
    where
        T: 's,
        E: 's,
        E2: 's,
    {
        Self::new(move |target| match condition.check(target) {
            Outcome::Pass => self.check(target),
            Outcome::Skip | Outcome::Fail(_) => Outcome::Pass,
        })
    }
}

impl<T: ?Sized, E> Clone for Step<'_, T, E> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<T: ?Sized, E> fmt::Debug for Step<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step").finish_non_exhaustive()
    }
}

/// A step that skips regardless of the target.
///
/// On its own it bypasses everything after it. Paired with [`Step::when`] it
/// makes the rest of a sequence conditional: `optional().when(is_empty)`
/// accepts empty targets without running the stricter steps that follow.
///
/// # Example
///
/// ```rust
/// use stepwise::{optional, Outcome, Step};
/// use stepwise::steps::string;
///
/// let step: Step<'_, str> = optional().when(string::is_empty());
/// assert_eq!(step.check(""), Outcome::Skip);
/// assert_eq!(step.check("x"), Outcome::Pass);
/// ```
pub fn optional<'s, T: ?Sized, E>() -> Step<'s, T, E> {
    Step::new(|_| Outcome::Skip)
}

// Steps are shared between validations and threads.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Step<'static, str>>();
    assert_sync::<Step<'static, str>>();
    assert_send::<Step<'static, [String]>>();
    assert_sync::<Step<'static, [String]>>();
};

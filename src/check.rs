//! Sequencing steps into deferred checks and aggregating their results.
//!
//! [`that`] binds a target to an ordered list of steps and returns a
//! [`Check`], which runs the steps when asked. [`any_err`] runs several checks
//! and stops at the first failure; [`all_errs`] runs all of them and
//! accumulates every failure.
//!
//! # Example
//!
//! ```rust
//! use stepwise::{any_err, optional, that, CheckError};
//! use stepwise::steps::{numeric, string};
//!
//! let name = "alice";
//! let nickname = "";
//! let age = 17;
//!
//! let result = any_err([
//!     that(name, [string::is_not_empty(), string::has_length_in_range(1..32)]),
//!     that(nickname, [optional().when(string::is_empty()), string::has_length(3)]),
//!     that(&age, [numeric::greater_than_or_equal_to(18)]),
//! ]);
//! assert_eq!(result, Err(CheckError::IntGreaterThanOrEqualTo));
//! ```

use std::fmt;

use stillwater::Validation;

use crate::error::{CheckError, CheckErrors};
use crate::outcome::Outcome;
use crate::step::Step;
use crate::CheckResult;

/// A deferred validation.
///
/// A `Check` captures a target and the work needed to validate it; nothing
/// runs until [`Check::run`] is called. Running a check twice repeats the
/// work and yields the same result.
pub struct Check<'a, E = CheckError> {
    run: Box<dyn Fn() -> Result<(), E> + 'a>,
}

impl<'a, E: 'a> Check<'a, E> {
    /// Creates a check from an arbitrary function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Result<(), E> + 'a,
    {
        Self { run: Box::new(f) }
    }

    /// Runs the check.
    pub fn run(&self) -> Result<(), E> {
        (self.run)()
    }

    /// Runs the check and reports the result as a `Validation`.
    pub fn validate(&self) -> CheckResult<E> {
        match self.run() {
            Ok(()) => Validation::Success(()),
            Err(e) => Validation::Failure(CheckErrors::single(e)),
        }
    }

    /// Replaces any failure of the whole check with `replacement`.
    ///
    /// Unlike [`Step::err`], this applies to the final result of the sequence,
    /// giving a named validation a single reported identity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stepwise::that;
    /// use stepwise::steps::string;
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct InvalidCountryCode;
    ///
    /// let check = that("usa", [string::has_length(2), string::is_in(["us", "ca"])])
    ///     .err(InvalidCountryCode);
    /// assert_eq!(check.run(), Err(InvalidCountryCode));
    /// ```
    pub fn err<F>(self, replacement: F) -> Check<'a, F>
    where
        F: Clone + 'a,
    {
        Check::new(move || self.run().map_err(|_| replacement.clone()))
    }
}

impl<E> fmt::Debug for Check<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check").finish_non_exhaustive()
    }
}

/// Binds `target` to an ordered list of steps.
///
/// When the returned [`Check`] runs, the steps are invoked in order:
/// - a passing step moves on to the next one;
/// - a skipping step stops the sequence and the check succeeds;
/// - a failing step stops the sequence and the check fails with its error.
///
/// A sequence that runs out of steps succeeds.
///
/// # Example
///
/// ```rust
/// use stepwise::{that, CheckError};
/// use stepwise::steps::string;
///
/// assert!(that("foo", [string::has_length(3)]).run().is_ok());
/// assert_eq!(
///     that("foo", [string::has_length(4)]).run(),
///     Err(CheckError::StringHasLength)
/// );
/// ```
pub fn that<'a, 's, T, E, I>(target: &'a T, steps: I) -> Check<'a, E>
where
    's: 'a,
    T: ?Sized + 'a,
    E: 'a,
    I: IntoIterator<Item = Step<'s, T, E>>,
{
    let steps: Vec<Step<'s, T, E>> = steps.into_iter().collect();
    Check::new(move || run_steps(target, &steps))
}

fn run_steps<T: ?Sized, E>(target: &T, steps: &[Step<'_, T, E>]) -> Result<(), E> {
    for (index, step) in steps.iter().enumerate() {
        match step.check(target) {
            Outcome::Pass => continue,
            Outcome::Skip => {
                trace_skip(index, steps.len());
                return Ok(());
            }
            Outcome::Fail(e) => {
                trace_failure(index, steps.len());
                return Err(e);
            }
        }
    }
    Ok(())
}

#[cfg(feature = "tracing")]
fn trace_skip(index: usize, total: usize) {
    tracing::trace!(
        step = index,
        bypassed = total - index - 1,
        "step skipped remaining steps"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_skip(_index: usize, _total: usize) {}

#[cfg(feature = "tracing")]
fn trace_failure(index: usize, total: usize) {
    tracing::debug!(step = index, total, "step failed");
}

#[cfg(not(feature = "tracing"))]
fn trace_failure(_index: usize, _total: usize) {}

/// Runs each check in order and returns the first failure.
///
/// Checks after the first failing one are not run. Returns `Ok(())` when
/// every check succeeds.
///
/// # Example
///
/// ```rust
/// use stepwise::{any_err, that, CheckError};
/// use stepwise::steps::string;
///
/// let result = any_err([
///     that("foo", [string::is_not_empty()]),
///     that("", [string::is_not_empty()]),
/// ]);
/// assert_eq!(result, Err(CheckError::StringIsNotEmpty));
/// ```
pub fn any_err<'a, E, I>(checks: I) -> Result<(), E>
where
    E: 'a,
    I: IntoIterator<Item = Check<'a, E>>,
{
    for (index, check) in checks.into_iter().enumerate() {
        if let Err(e) = check.run() {
            trace_first_failure(index);
            return Err(e);
        }
    }
    Ok(())
}

/// Runs every check and accumulates all failures in order.
///
/// Each check still stops at its own first failing step; what differs from
/// [`any_err`] is that a failing check does not prevent later checks from
/// running.
///
/// # Example
///
/// ```rust
/// use stepwise::{all_errs, that, CheckError};
/// use stepwise::steps::{numeric, string};
/// use stillwater::Validation;
///
/// let result = all_errs([
///     that("", [string::is_not_empty()]),
///     that(&5, [numeric::positive()]),
///     that(&-5, [numeric::positive()]),
/// ]);
///
/// match result {
///     Validation::Failure(errors) => {
///         assert_eq!(
///             errors.into_vec(),
///             vec![CheckError::StringIsNotEmpty, CheckError::IntGreaterThan]
///         );
///     }
///     Validation::Success(()) => unreachable!(),
/// }
/// ```
pub fn all_errs<'a, E, I>(checks: I) -> CheckResult<E>
where
    E: 'a,
    I: IntoIterator<Item = Check<'a, E>>,
{
    let validations = checks.into_iter().map(|check| check.validate()).collect();
    let result = Validation::all_vec(validations).map(|_| ());

    #[cfg(feature = "tracing")]
    if let Validation::Failure(errors) = &result {
        tracing::debug!(failures = errors.len(), "checks failed");
    }

    result
}

#[cfg(feature = "tracing")]
fn trace_first_failure(index: usize) {
    tracing::debug!(check = index, "check failed; remaining checks not run");
}

#[cfg(not(feature = "tracing"))]
fn trace_first_failure(_index: usize) {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// A step that counts its invocations and then returns `outcome`.
    fn counted(
        counter: &Arc<AtomicUsize>,
        outcome: Outcome<&'static str>,
    ) -> Step<'static, str, &'static str> {
        let counter = Arc::clone(counter);
        Step::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            outcome
        })
    }

    #[test]
    fn test_that_empty_sequence_succeeds() {
        let steps: Vec<Step<'_, str, &str>> = vec![];
        assert_eq!(that("anything", steps).run(), Ok(()));
    }

    #[test]
    fn test_that_is_deferred() {
        let counter = Arc::new(AtomicUsize::new(0));
        let check = that("foo", [counted(&counter, Outcome::Pass)]);
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        check.run().unwrap();
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_that_runs_all_passing_steps() {
        let counter = Arc::new(AtomicUsize::new(0));
        let check = that(
            "foo",
            [
                counted(&counter, Outcome::Pass),
                counted(&counter, Outcome::Pass),
                counted(&counter, Outcome::Pass),
            ],
        );
        assert_eq!(check.run(), Ok(()));
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_that_skip_stops_and_succeeds() {
        let first = Arc::new(AtomicUsize::new(0));
        let rest = Arc::new(AtomicUsize::new(0));
        let check = that(
            "foo",
            [
                counted(&first, Outcome::Skip),
                counted(&rest, Outcome::Fail("unreachable")),
                counted(&rest, Outcome::Pass),
            ],
        );
        assert_eq!(check.run(), Ok(()));
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(rest.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_that_failure_stops_and_reports() {
        let first = Arc::new(AtomicUsize::new(0));
        let rest = Arc::new(AtomicUsize::new(0));
        let check = that(
            "foo",
            [
                counted(&first, Outcome::Fail("first")),
                counted(&rest, Outcome::Fail("second")),
                counted(&rest, Outcome::Pass),
            ],
        );
        assert_eq!(check.run(), Err("first"));
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(rest.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_that_rerun_is_identical() {
        let counter = Arc::new(AtomicUsize::new(0));
        let check = that(
            "foo",
            [
                counted(&counter, Outcome::Pass),
                counted(&counter, Outcome::Fail("bad")),
            ],
        );
        assert_eq!(check.run(), Err("bad"));
        assert_eq!(check.run(), Err("bad"));
        assert_eq!(counter.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_check_err_replaces_failure() {
        let counter = Arc::new(AtomicUsize::new(0));
        let check = that("foo", [counted(&counter, Outcome::Fail("bad"))]).err("custom");
        assert_eq!(check.run(), Err("custom"));
    }

    #[test]
    fn test_check_err_keeps_success() {
        let counter = Arc::new(AtomicUsize::new(0));
        let check = that("foo", [counted(&counter, Outcome::Skip)]).err("custom");
        assert_eq!(check.run(), Ok(()));
    }

    #[test]
    fn test_check_validate() {
        let ok: Check<'_, &str> = Check::new(|| Ok(()));
        assert!(ok.validate().is_success());

        let failed: Check<'_, &str> = Check::new(|| Err("bad"));
        match failed.validate() {
            Validation::Failure(errors) => assert_eq!(errors.first(), &"bad"),
            Validation::Success(()) => panic!("expected failure"),
        }
    }

    #[test]
    fn test_any_err_all_succeed() {
        let checks: Vec<Check<'_, &str>> = vec![Check::new(|| Ok(())), Check::new(|| Ok(()))];
        assert_eq!(any_err(checks), Ok(()));
    }

    #[test]
    fn test_any_err_short_circuits() {
        let second = Arc::new(AtomicUsize::new(0));
        let result = any_err([
            Check::new(|| Err("first")),
            that("foo", [counted(&second, Outcome::Fail("second"))]),
        ]);
        assert_eq!(result, Err("first"));
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_all_errs_accumulates_in_order() {
        let result = all_errs([
            Check::new(|| Err("first")),
            Check::new(|| Ok(())),
            Check::new(|| Err("third")),
        ]);
        match result {
            Validation::Failure(errors) => assert_eq!(errors.into_vec(), vec!["first", "third"]),
            Validation::Success(()) => panic!("expected failure"),
        }
    }

    #[test]
    fn test_all_errs_success() {
        let checks: Vec<Check<'_, &str>> = vec![Check::new(|| Ok(()))];
        assert!(all_errs(checks).is_success());
    }
}

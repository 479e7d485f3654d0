//! The three-way result of running a single step.

/// The result of invoking a [`Step`](crate::Step) on a target.
///
/// Besides passing and failing, a step may return [`Outcome::Skip`] to ask
/// that the rest of the enclosing sequence be bypassed. A skip is never a
/// failure: [`that`](crate::that) reports success when it sees one.
///
/// # Example
///
/// ```rust
/// use stepwise::Outcome;
///
/// let skipped: Outcome<&str> = Outcome::Skip;
/// assert!(skipped.is_skip());
/// assert_eq!(skipped.into_result(), Ok(()));
///
/// let failed = Outcome::Fail("too short");
/// assert_eq!(failed.into_result(), Err("too short"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Outcome<E> {
    /// The target satisfied the step.
    Pass,
    /// The rest of the sequence should be bypassed and treated as satisfied.
    Skip,
    /// The target violated the step.
    Fail(E),
}

impl<E> Outcome<E> {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Outcome::Skip)
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail(_))
    }

    /// Returns the failure, if any.
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Fail(e) => Some(e),
            Outcome::Pass | Outcome::Skip => None,
        }
    }

    /// Maps the failure, leaving `Pass` and `Skip` untouched.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<F> {
        match self {
            Outcome::Pass => Outcome::Pass,
            Outcome::Skip => Outcome::Skip,
            Outcome::Fail(e) => Outcome::Fail(f(e)),
        }
    }

    /// Collapses the outcome to a result, treating `Skip` as success.
    pub fn into_result(self) -> Result<(), E> {
        match self {
            Outcome::Pass | Outcome::Skip => Ok(()),
            Outcome::Fail(e) => Err(e),
        }
    }
}

impl<E> From<Result<(), E>> for Outcome<E> {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Outcome::Pass,
            Err(e) => Outcome::Fail(e),
        }
    }
}

//! # Stepwise
//!
//! Composable validation steps with explicit skip semantics.
//!
//! ## Overview
//!
//! A [`Step`] inspects a borrowed target and returns an [`Outcome`]: it
//! passes, fails with an error, or *skips*. A skip asks for the rest of the
//! enclosing sequence to be bypassed while still counting as success, which
//! is how optional values are expressed: put `optional().when(is_empty())`
//! ahead of the stricter steps.
//!
//! [`that`] binds a target to an ordered list of steps and returns a deferred
//! [`Check`]. Several checks can be combined with [`any_err`], which stops at
//! the first failure, or [`all_errs`], which accumulates every failure into
//! [`CheckErrors`].
//!
//! ## Core Types
//!
//! - [`Outcome`]: `Pass`, `Skip` or `Fail(E)`
//! - [`Step`]: a reusable validation unit with the `err`, `if_` and `when` combinators
//! - [`Check`]: a deferred validation produced by [`that`]
//! - [`CheckError`]: the stable failure identities of the built-in [`steps`]
//! - [`CheckErrors`]: a non-empty collection of failures
//!
//! ## Example
//!
//! ```rust
//! use stepwise::{any_err, optional, that, CheckError};
//! use stepwise::steps::{numeric, slice, string};
//!
//! let email = "";
//! let age = 42;
//! let roles = vec!["admin".to_string(), "ops".to_string()];
//!
//! let result = any_err([
//!     // An empty email is accepted; a present one must look like an email.
//!     that(email, [optional().when(string::is_empty()), string::contains("@")]),
//!     that(&age, [numeric::in_range(0..150)]),
//!     that(roles.as_slice(), [slice::is_not_empty(), slice::all(string::is_not_empty())]),
//! ]);
//! assert!(result.is_ok());
//!
//! let result = that("bob", [string::has_length_in_range(4..32)])
//!     .err(CheckError::custom("invalid_username", "username must be 4 to 31 characters"))
//!     .run();
//! assert_eq!(result.unwrap_err().code(), "invalid_username");
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when sequences skip or fail.

pub mod check;
pub mod error;
pub mod outcome;
pub mod step;
pub mod steps;

pub use check::{all_errs, any_err, that, Check};
pub use error::{CheckError, CheckErrors};
pub use outcome::Outcome;
pub use step::{optional, Step};

/// Type alias for accumulated check results.
pub type CheckResult<E = CheckError> = stillwater::Validation<(), CheckErrors<E>>;

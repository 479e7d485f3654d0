//! Error types for validation failures.
//!
//! This module provides [`CheckError`], the stable failure identities reported
//! by the built-in steps, and [`CheckErrors`] for accumulating several
//! failures from independent checks.

mod check_error;

pub use check_error::{CheckError, CheckErrors};

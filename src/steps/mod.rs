//! Built-in leaf steps.
//!
//! Each module groups stateless step factories for one kind of target:
//!
//! - [`string`]: steps over `str`
//! - [`numeric`]: steps over `i64`
//! - [`slice`]: steps over `[T]`, including element quantifiers
//! - [`value`]: type assertions and shape adapters over `serde_json::Value`
//!
//! Every failure mode of every step reports one documented
//! [`CheckError`](crate::CheckError) variant.

pub mod numeric;
pub mod slice;
pub mod string;
pub mod value;

//! Steps over dynamically shaped `serde_json::Value` targets.
//!
//! A `Value` may hold any JSON shape, so steps in this module first assert the
//! shape they need. A mismatch is reported as [`CheckError::Type`] rather than
//! a panic, which keeps mixed-shape pipelines reportable.
//!
//! The adapters ([`string`], [`integer`], [`boolean`], [`array`], [`field`])
//! lift typed steps from the sibling modules onto `Value` targets.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use stepwise::{any_err, that, CheckError};
//! use stepwise::steps::{numeric, slice, string, value};
//!
//! let user = json!({
//!     "name": "alice",
//!     "age": 30,
//!     "tags": ["admin", "ops"]
//! });
//!
//! let result = any_err([
//!     that(&user, [value::field("name", value::string(string::is_not_empty()))]),
//!     that(&user, [value::field("age", value::integer(numeric::in_range(0..150)))]),
//!     that(&user, [value::field("tags", value::array(slice::all(value::string(string::is_not_empty()))))]),
//! ]);
//! assert!(result.is_ok());
//!
//! // A number where a string is expected is a type failure.
//! assert_eq!(
//!     that(&json!(42), [value::string(string::is_not_empty())]).run(),
//!     Err(CheckError::Type { expected: "string", got: "number" })
//! );
//! ```

use serde_json::Value;

use crate::error::CheckError;
use crate::outcome::Outcome;
use crate::step::Step;

/// Returns the JSON type name for a value.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_error(expected: &'static str, value: &Value) -> CheckError {
    CheckError::Type {
        expected,
        got: kind(value),
    }
}

fn assert_kind<F>(expected: &'static str, is_kind: F) -> Step<'static, Value>
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Step::from_fn(move |value: &Value| {
        if is_kind(value) {
            Ok(())
        } else {
            Err(type_error(expected, value))
        }
    })
}

/// Passes when the target is a JSON string.
pub fn is_string() -> Step<'static, Value> {
    assert_kind("string", Value::is_string)
}

/// Passes when the target is an integer that fits in an `i64`.
///
/// Floats and integers above `i64::MAX` fail with [`CheckError::Type`].
pub fn is_integer() -> Step<'static, Value> {
    assert_kind("integer", Value::is_i64)
}

/// Passes when the target is a JSON boolean.
pub fn is_boolean() -> Step<'static, Value> {
    assert_kind("boolean", Value::is_boolean)
}

/// Passes when the target is a JSON array.
pub fn is_array() -> Step<'static, Value> {
    assert_kind("array", Value::is_array)
}

/// Passes when the target is a JSON object.
pub fn is_object() -> Step<'static, Value> {
    assert_kind("object", Value::is_object)
}

/// Passes when the target is JSON null.
pub fn is_null() -> Step<'static, Value> {
    assert_kind("null", Value::is_null)
}

/// Runs `step` on the target's string contents.
///
/// Fails with [`CheckError::Type`] if the target is not a string.
pub fn string<'s, E>(step: Step<'s, str, E>) -> Step<'s, Value, E>
where
    E: From<CheckError> + 's,
{
    Step::new(move |value: &Value| match value.as_str() {
        Some(s) => step.check(s),
        None => Outcome::Fail(type_error("string", value).into()),
    })
}

/// Runs `step` on the target's integer value.
///
/// Fails with [`CheckError::Type`] if the target is not an `i64` integer.
pub fn integer<'s, E>(step: Step<'s, i64, E>) -> Step<'s, Value, E>
where
    E: From<CheckError> + 's,
{
    Step::new(move |value: &Value| match value.as_i64() {
        Some(n) => step.check(&n),
        None => Outcome::Fail(type_error("integer", value).into()),
    })
}

/// Runs `step` on the target's boolean value.
///
/// Fails with [`CheckError::Type`] if the target is not a boolean.
pub fn boolean<'s, E>(step: Step<'s, bool, E>) -> Step<'s, Value, E>
where
    E: From<CheckError> + 's,
{
    Step::new(move |value: &Value| match value.as_bool() {
        Some(b) => step.check(&b),
        None => Outcome::Fail(type_error("boolean", value).into()),
    })
}

/// Runs `step` on the target's elements.
///
/// Fails with [`CheckError::Type`] if the target is not an array.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use stepwise::that;
/// use stepwise::steps::{slice, value};
///
/// let step = value::array(slice::has_length_in_range(1..4));
/// assert!(that(&json!([1, 2]), [step.clone()]).run().is_ok());
/// assert!(that(&json!([]), [step.clone()]).run().is_err());
/// assert!(that(&json!("[1, 2]"), [step]).run().is_err());
/// ```
pub fn array<'s, E>(step: Step<'s, [Value], E>) -> Step<'s, Value, E>
where
    E: From<CheckError> + 's,
{
    Step::new(move |value: &Value| match value.as_array() {
        Some(items) => step.check(items.as_slice()),
        None => Outcome::Fail(type_error("array", value).into()),
    })
}

/// Runs `step` on the object member called `name`.
///
/// Fails with [`CheckError::Type`] if the target is not an object, and with
/// [`CheckError::MissingField`] if the member is absent. Guard it with
/// `when(has_field(name))` to accept a missing member.
pub fn field<'s, E>(name: impl Into<String>, step: Step<'s, Value, E>) -> Step<'s, Value, E>
where
    E: From<CheckError> + 's,
{
    let name = name.into();
    Step::new(move |value: &Value| match value.as_object() {
        Some(map) => match map.get(&name) {
            Some(member) => step.check(member),
            None => Outcome::Fail(
                CheckError::MissingField {
                    name: name.clone(),
                }
                .into(),
            ),
        },
        None => Outcome::Fail(type_error("object", value).into()),
    })
}

/// Passes when the target is an object containing a member called `name`.
///
/// Fails with [`CheckError::Type`] for non-objects and
/// [`CheckError::MissingField`] when the member is absent.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use stepwise::that;
/// use stepwise::steps::{string, value};
///
/// // "nickname" may be absent, but must be non-empty when present.
/// let nickname = value::field("nickname", value::string(string::is_not_empty()))
///     .when(value::has_field("nickname"));
///
/// assert!(that(&json!({ "name": "alice" }), [nickname.clone()]).run().is_ok());
/// assert!(that(&json!({ "nickname": "al" }), [nickname.clone()]).run().is_ok());
/// assert!(that(&json!({ "nickname": "" }), [nickname]).run().is_err());
/// ```
pub fn has_field(name: impl Into<String>) -> Step<'static, Value> {
    let name = name.into();
    Step::from_fn(move |value: &Value| match value.as_object() {
        Some(map) if map.contains_key(&name) => Ok(()),
        Some(_) => Err(CheckError::MissingField { name: name.clone() }),
        None => Err(type_error("object", value)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::{numeric, slice, string as strings};
    use serde_json::json;

    #[test]
    fn test_kind() {
        assert_eq!(kind(&json!(null)), "null");
        assert_eq!(kind(&json!(true)), "boolean");
        assert_eq!(kind(&json!(1.5)), "number");
        assert_eq!(kind(&json!("x")), "string");
        assert_eq!(kind(&json!([])), "array");
        assert_eq!(kind(&json!({})), "object");
    }

    #[test]
    fn test_type_assertions() {
        assert!(is_string().check(&json!("x")).is_pass());
        assert!(is_integer().check(&json!(42)).is_pass());
        assert!(is_boolean().check(&json!(false)).is_pass());
        assert!(is_array().check(&json!([1])).is_pass());
        assert!(is_object().check(&json!({"a": 1})).is_pass());
        assert!(is_null().check(&json!(null)).is_pass());
    }

    #[test]
    fn test_type_assertion_failures() {
        assert_eq!(
            is_string().check(&json!(42)),
            Outcome::Fail(CheckError::Type {
                expected: "string",
                got: "number"
            })
        );
        assert_eq!(
            is_integer().check(&json!(1.5)),
            Outcome::Fail(CheckError::Type {
                expected: "integer",
                got: "number"
            })
        );
        assert_eq!(
            is_boolean().check(&json!("true")),
            Outcome::Fail(CheckError::Type {
                expected: "boolean",
                got: "string"
            })
        );
        assert!(is_array().check(&json!({})).is_fail());
        assert!(is_object().check(&json!([])).is_fail());
        assert!(is_null().check(&json!(0)).is_fail());
    }

    #[test]
    fn test_integer_out_of_range_is_type_error() {
        assert!(is_integer().check(&json!(u64::MAX)).is_fail());
    }

    #[test]
    fn test_string_adapter() {
        let step = string(strings::has_length(3));
        assert!(step.check(&json!("foo")).is_pass());
        assert_eq!(
            step.check(&json!("fooo")),
            Outcome::Fail(CheckError::StringHasLength)
        );
        assert_eq!(
            step.check(&json!(null)),
            Outcome::Fail(CheckError::Type {
                expected: "string",
                got: "null"
            })
        );
    }

    #[test]
    fn test_integer_adapter() {
        let step = integer(numeric::positive());
        assert!(step.check(&json!(1)).is_pass());
        assert_eq!(step.check(&json!(0)), Outcome::Fail(CheckError::IntGreaterThan));
        assert!(step.check(&json!("1")).is_fail());
    }

    #[test]
    fn test_boolean_adapter() {
        let accepted = CheckError::custom("accepted", "must accept");
        let step = boolean(Step::test(|b: &bool| *b, accepted));
        assert!(step.check(&json!(true)).is_pass());
        assert_eq!(step.check(&json!(false)).error().map(|e| e.code()), Some("accepted"));
        assert!(step.check(&json!(1)).is_fail());
    }

    #[test]
    fn test_array_adapter_with_quantifier() {
        let step = array(slice::all(integer(numeric::non_negative())));
        assert!(step.check(&json!([0, 1, 2])).is_pass());
        assert_eq!(
            step.check(&json!([0, -1])),
            Outcome::Fail(CheckError::IntGreaterThanOrEqualTo)
        );
        assert_eq!(
            step.check(&json!([0, "1"])),
            Outcome::Fail(CheckError::Type {
                expected: "integer",
                got: "string"
            })
        );
    }

    #[test]
    fn test_field_adapter() {
        let step = field("name", string(strings::is_not_empty()));
        assert!(step.check(&json!({"name": "alice"})).is_pass());
        assert_eq!(
            step.check(&json!({"name": ""})),
            Outcome::Fail(CheckError::StringIsNotEmpty)
        );
        assert_eq!(
            step.check(&json!({})),
            Outcome::Fail(CheckError::MissingField {
                name: "name".to_string()
            })
        );
        assert_eq!(
            step.check(&json!(["name"])),
            Outcome::Fail(CheckError::Type {
                expected: "object",
                got: "array"
            })
        );
    }

    #[test]
    fn test_has_field() {
        assert!(has_field("a").check(&json!({"a": null})).is_pass());
        assert!(has_field("a").check(&json!({"b": 1})).is_fail());
        assert!(has_field("a").check(&json!("a")).is_fail());
    }

    #[test]
    fn test_adapters_forward_skip() {
        let skip_empty: Step<'_, str> = crate::step::optional().when(strings::is_empty());
        assert_eq!(string(skip_empty).check(&json!("")), Outcome::Skip);
    }
}

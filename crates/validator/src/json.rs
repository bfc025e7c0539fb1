//! JSON helpers shared by the validators.
//!
//! Inputs arrive as `serde_json::Value`; the object validator also produces a
//! `serde_json::Value`, so every field output must convert back into JSON via
//! [`IntoJson`].

use serde_json::{Map, Number, Value};

/// Largest integer a double represents exactly (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Returns a human-readable type name for a JSON value.
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Converts a normalized number into JSON.
///
/// Integral values within the safe-integer range become JSON integers, so a
/// coerced `"30"` is emitted as `30` rather than `30.0`. Non-finite values
/// have no JSON representation and become `null`.
#[must_use]
pub fn number_to_json(n: f64) -> Value {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

/// Conversion of a validator output into JSON.
pub trait IntoJson {
    /// Consumes the value and returns its JSON form.
    fn into_json(self) -> Value;
}

impl IntoJson for Value {
    #[inline]
    fn into_json(self) -> Value {
        self
    }
}

impl IntoJson for String {
    #[inline]
    fn into_json(self) -> Value {
        Value::String(self)
    }
}

impl IntoJson for f64 {
    #[inline]
    fn into_json(self) -> Value {
        number_to_json(self)
    }
}

impl IntoJson for bool {
    #[inline]
    fn into_json(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoJson for Map<String, Value> {
    #[inline]
    fn into_json(self) -> Value {
        Value::Object(self)
    }
}

impl<T: IntoJson> IntoJson for Option<T> {
    #[inline]
    fn into_json(self) -> Value {
        self.map_or(Value::Null, IntoJson::into_json)
    }
}

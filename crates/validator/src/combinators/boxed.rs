//! Type-erased validators
//!
//! The object validator stores fields of different concrete types, so each
//! one is erased behind [`BoxedValidator`], which always produces JSON.

use std::fmt;

use serde_json::Value;

use crate::foundation::{Input, Outcome, Validate};
use crate::json::IntoJson;

/// A validator of any concrete type whose output has been converted to JSON.
pub type BoxedValidator = Box<dyn Validate<Output = Value>>;

/// Adapter converting a validator's output into JSON.
///
/// Usually created through [`ValidateExt::boxed`](crate::foundation::ValidateExt::boxed).
#[derive(Clone)]
pub struct Erased<V> {
    inner: V,
}

impl<V> Erased<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: fmt::Debug> fmt::Debug for Erased<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl<V> Validate for Erased<V>
where
    V: Validate,
    V::Output: IntoJson,
{
    type Output = Value;

    #[inline]
    fn validate(&self, input: Input<'_>) -> Outcome<Value> {
        self.inner.validate(input).map(IntoJson::into_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{NumberConstraints, StringConstraints, number_field, string_field};
    use serde_json::json;

    #[test]
    fn heterogeneous_validators_share_a_type() {
        let fields: Vec<BoxedValidator> = vec![
            string_field(StringConstraints::new()).unwrap().boxed(),
            number_field(NumberConstraints::new()).unwrap().boxed(),
        ];
        let outputs: Vec<Value> = fields
            .iter()
            .map(|v| v.validate_value(&json!("7")).unwrap())
            .collect();
        assert_eq!(outputs, vec![json!("7"), json!(7)]);
    }

    #[test]
    fn fractional_numbers_stay_floats() {
        let v = number_field(NumberConstraints::new()).unwrap().boxed();
        assert_eq!(v.validate_value(&json!("2.5")).unwrap(), json!(2.5));
    }

    #[test]
    fn issues_are_untouched() {
        let v = Erased::new(number_field(NumberConstraints::new().min(10.0)).unwrap());
        let issues = v.validate_value(&json!(1)).unwrap_err();
        assert_eq!(issues.first().unwrap().param("min"), Some("10"));
    }
}

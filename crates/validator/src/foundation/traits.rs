//! Core traits for the validation system
//!
//! Every field and object validator implements [`Validate`]. Composition
//! helpers live on [`ValidateExt`], which is implemented for all validators.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::combinators::{BoxedValidator, Erased, Optional, WithMessage};
use crate::foundation::{Issue, IssueKind, Outcome};
use crate::json::{IntoJson, json_type_name};

// ============================================================================
// INPUT
// ============================================================================

/// The untyped value handed to a validator.
///
/// `Absent` is the "property not present" sentinel. It is distinct from a
/// present JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    /// No value at all (missing object property).
    Absent,
    /// A JSON value, possibly `null`.
    Present(&'a Value),
}

impl<'a> Input<'a> {
    /// Returns the present value, if any.
    #[must_use]
    pub fn value(self) -> Option<&'a Value> {
        match self {
            Input::Absent => None,
            Input::Present(v) => Some(v),
        }
    }

    /// Returns true for the absent sentinel.
    #[must_use]
    pub fn is_absent(self) -> bool {
        matches!(self, Input::Absent)
    }

    /// Returns true for an absent value or a JSON `null`.
    #[must_use]
    pub fn is_nullish(self) -> bool {
        matches!(self, Input::Absent | Input::Present(Value::Null))
    }

    /// Returns the string, if the input is a JSON string.
    #[must_use]
    pub fn as_str(self) -> Option<&'a str> {
        self.value().and_then(Value::as_str)
    }

    /// Human-readable type name, `"undefined"` for the absent sentinel.
    #[must_use]
    pub fn type_name(self) -> &'static str {
        match self {
            Input::Absent => "undefined",
            Input::Present(v) => json_type_name(v),
        }
    }
}

impl<'a> From<&'a Value> for Input<'a> {
    fn from(value: &'a Value) -> Self {
        Input::Present(value)
    }
}

impl<'a> From<Option<&'a Value>> for Input<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Input::Absent, Input::Present)
    }
}

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The contract every validator implements.
///
/// A validator is a pure function from [`Input`] to [`Outcome`]. It holds
/// only immutable configuration, so one instance may be shared and invoked
/// concurrently.
///
/// # Examples
///
/// ```
/// use formschema_validator::foundation::{Input, Issue, IssueKind, Outcome, Validate};
///
/// struct NonNull;
///
/// impl Validate for NonNull {
///     type Output = serde_json::Value;
///
///     fn validate(&self, input: Input<'_>) -> Outcome<Self::Output> {
///         match input.value() {
///             Some(v) if !v.is_null() => Ok(v.clone()),
///             _ => Err(Issue::new(IssueKind::Required, "required").into()),
///         }
///     }
/// }
///
/// assert!(NonNull.validate_value(&serde_json::json!(1)).is_ok());
/// assert!(NonNull.validate(Input::Absent).is_err());
/// ```
pub trait Validate: Send + Sync {
    /// Normalized value produced on success.
    type Output;

    /// Validates one input value.
    fn validate(&self, input: Input<'_>) -> Outcome<Self::Output>;

    /// Validates a present JSON value.
    fn validate_value(&self, value: &Value) -> Outcome<Self::Output> {
        self.validate(Input::Present(value))
    }

    /// Validates any serializable value by converting it to JSON first.
    ///
    /// A value that cannot be represented as JSON fails with a single
    /// [`IssueKind::Type`] issue.
    fn validate_any<S>(&self, value: &S) -> Outcome<Self::Output>
    where
        Self: Sized,
        S: Serialize + ?Sized,
    {
        match serde_json::to_value(value) {
            Ok(json) => self.validate_value(&json),
            Err(err) => Err(Issue::new(IssueKind::Type, err.to_string()).into()),
        }
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Output = V::Output;

    #[inline]
    fn validate(&self, input: Input<'_>) -> Outcome<Self::Output> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Output = V::Output;

    #[inline]
    fn validate(&self, input: Input<'_>) -> Outcome<Self::Output> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Output = V::Output;

    #[inline]
    fn validate(&self, input: Input<'_>) -> Outcome<Self::Output> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
pub trait ValidateExt: Validate + Sized {
    /// Replaces the message of every issue this validator reports.
    ///
    /// Kind, path and params are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use formschema_validator::prelude::*;
    /// use serde_json::json;
    ///
    /// let v = email_field(EmailConstraints::new()).with_message("Enter your work email");
    /// let issues = v.validate_value(&json!("nope")).unwrap_err();
    /// assert_eq!(issues.first().unwrap().message, "Enter your work email");
    /// ```
    fn with_message(self, message: impl Into<std::borrow::Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Accepts an absent value or `null` as `None`; delegates otherwise.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Erases the validator so heterogeneous validators can be stored together.
    fn boxed(self) -> BoxedValidator
    where
        Self: 'static,
        Self::Output: IntoJson,
    {
        Box::new(Erased::new(self))
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Issues;
    use serde_json::json;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Output = ();

        fn validate(&self, _input: Input<'_>) -> Outcome<()> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Output = ();

        fn validate(&self, _input: Input<'_>) -> Outcome<()> {
            Err(Issues::single(Issue::new(IssueKind::Type, "always fails")))
        }
    }

    #[test]
    fn input_from_option() {
        let value = json!(1);
        assert_eq!(Input::from(Some(&value)), Input::Present(&value));
        assert!(Input::from(None::<&Value>).is_absent());
    }

    #[test]
    fn input_nullish() {
        assert!(Input::Absent.is_nullish());
        assert!(Input::Present(&Value::Null).is_nullish());
        assert!(!Input::Present(&json!(0)).is_nullish());
    }

    #[test]
    fn input_type_names() {
        assert_eq!(Input::Absent.type_name(), "undefined");
        assert_eq!(Input::Present(&json!("x")).type_name(), "string");
        assert_eq!(Input::Present(&json!({})).type_name(), "object");
    }

    #[test]
    fn smart_pointers_delegate() {
        let boxed: Box<dyn Validate<Output = ()>> = Box::new(AlwaysFails);
        assert!(boxed.validate(Input::Absent).is_err());

        let shared = Arc::new(AlwaysValid);
        assert!(shared.validate(Input::Absent).is_ok());
        assert!((&AlwaysValid).validate(Input::Absent).is_ok());
    }

    #[test]
    fn validate_any_serializes_first() {
        #[derive(Serialize)]
        struct Payload {
            name: &'static str,
        }

        assert!(AlwaysValid.validate_any(&Payload { name: "x" }).is_ok());
    }
}

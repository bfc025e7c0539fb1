//! MESSAGE combinator - custom issue messages

use std::borrow::Cow;

use crate::foundation::{Input, Outcome, Validate};

/// Replaces the message of every issue reported by the inner validator.
///
/// Kind, path and params are kept, so callers can still branch on
/// [`IssueKind`](crate::foundation::IssueKind) while showing their own text.
///
/// # Examples
///
/// ```
/// use formschema_validator::prelude::*;
/// use serde_json::json;
///
/// let password = string_field(StringConstraints::new().min_length(8))
///     .unwrap()
///     .with_message("Password must be at least 8 characters");
///
/// let issues = password.validate_value(&json!("short")).unwrap_err();
/// let issue = issues.first().unwrap();
/// assert_eq!(issue.message, "Password must be at least 8 characters");
/// assert_eq!(issue.param("min"), Some("8"));
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
}

impl<V> WithMessage<V> {
    /// Wraps a validator with a replacement message.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the replacement message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Validate for WithMessage<V> {
    type Output = V::Output;

    fn validate(&self, input: Input<'_>) -> Outcome<Self::Output> {
        self.inner.validate(input).map_err(|issues| {
            issues
                .into_iter()
                .map(|mut issue| {
                    issue.message = self.message.clone();
                    issue
                })
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::ObjectValidator;
    use crate::foundation::{IssueKind, ValidateExt};
    use crate::validators::{NumberConstraints, StringConstraints, number_field, string_field};
    use serde_json::json;

    #[test]
    fn replaces_message_and_keeps_kind() {
        let v = number_field(NumberConstraints::new().max(3.0))
            .unwrap()
            .with_message("too many");
        let issues = v.validate_value(&json!(9)).unwrap_err();
        let issue = issues.first().unwrap();
        assert_eq!(issue.message, "too many");
        assert_eq!(issue.kind, IssueKind::Range);
        assert_eq!(issue.param("max"), Some("3"));
    }

    #[test]
    fn success_passes_through() {
        let v = WithMessage::new(string_field(StringConstraints::new()).unwrap(), "nope");
        assert_eq!(v.validate_value(&json!("ok")).unwrap(), "ok");
        assert_eq!(v.message(), "nope");
    }

    #[test]
    fn rewrites_every_aggregated_issue() {
        let v = ObjectValidator::new()
            .field("a", string_field(StringConstraints::new()).unwrap())
            .field("b", string_field(StringConstraints::new()).unwrap())
            .with_message("Please fix the form");
        let issues = v.validate_value(&json!({"a": 1, "b": 2})).unwrap_err();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.message == "Please fix the form"));
        assert_eq!(issues.as_slice()[1].path_string(), "b");
    }
}

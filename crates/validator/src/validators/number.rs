//! Number field validator
//!
//! The input is coerced first (see [`coerce_number`]) and the *coerced*
//! value is what gets checked and returned. A field declared over `"42"`
//! succeeds with `42.0`, so callers receive a number, not the raw input.

use serde::{Deserialize, Serialize};

use crate::foundation::{Input, Issue, IssueKind, Outcome, SchemaError, Validate};
use crate::locale::{Locale, Message};
use crate::validators::coerce::coerce_number;

// ============================================================================
// CONSTRAINTS
// ============================================================================

/// Constraint set for [`NumberField`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberConstraints {
    /// Reject the absent sentinel. Zero and `null` are present values.
    pub required: bool,
    /// Minimum value (inclusive).
    pub min: Option<f64>,
    /// Maximum value (inclusive).
    pub max: Option<f64>,
    /// Reject values with a fractional part.
    pub integer: bool,
    /// Language of issue messages.
    pub locale: Locale,
}

impl NumberConstraints {
    /// Creates an empty constraint set (any number passes).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects the absent sentinel.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the minimum value.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the maximum value.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Requires an integral value.
    #[must_use = "builder methods must be chained or built"]
    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    /// Sets the message language.
    #[must_use = "builder methods must be chained or built"]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates that the input coerces to a number satisfying a
/// [`NumberConstraints`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberField {
    pub(crate) required: bool,
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
    pub(crate) integer: bool,
    pub(crate) locale: Locale,
}

impl NumberField {
    /// Builds a validator from a constraint set.
    ///
    /// Fails if a bound is NaN or `min > max`.
    pub fn new(constraints: NumberConstraints) -> Result<Self, SchemaError> {
        if constraints.min.is_some_and(f64::is_nan) {
            return Err(SchemaError::NonFiniteBound { constraint: "min" });
        }
        if constraints.max.is_some_and(f64::is_nan) {
            return Err(SchemaError::NonFiniteBound { constraint: "max" });
        }
        if let (Some(min), Some(max)) = (constraints.min, constraints.max) {
            if min > max {
                return Err(SchemaError::InvalidBounds {
                    constraint: "range",
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }

        Ok(Self {
            required: constraints.required,
            min: constraints.min,
            max: constraints.max,
            integer: constraints.integer,
            locale: constraints.locale,
        })
    }

    /// Message language of this validator.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn issue(&self, kind: IssueKind, message: Message<'_>) -> Issue {
        Issue::new(kind, message.render(self.locale))
    }
}

impl Validate for NumberField {
    type Output = f64;

    fn validate(&self, input: Input<'_>) -> Outcome<f64> {
        // Absence coerces to NaN, so the required check has to come first.
        if self.required && input.is_absent() {
            return Err(self.issue(IssueKind::Required, Message::Required).into());
        }

        let n = coerce_number(input);
        if n.is_nan() {
            return Err(self
                .issue(IssueKind::Type, Message::NotNumber)
                .with_param("expected", "number")
                .with_param("actual", input.type_name())
                .into());
        }

        if let Some(min) = self.min {
            if n < min {
                return Err(self
                    .issue(IssueKind::Range, Message::Min(&min))
                    .with_param("min", min.to_string())
                    .with_param("actual", n.to_string())
                    .into());
            }
        }

        if let Some(max) = self.max {
            if n > max {
                return Err(self
                    .issue(IssueKind::Range, Message::Max(&max))
                    .with_param("max", max.to_string())
                    .with_param("actual", n.to_string())
                    .into());
            }
        }

        if self.integer && !(n.is_finite() && n.fract() == 0.0) {
            return Err(self.issue(IssueKind::Integer, Message::NotInteger).into());
        }

        Ok(n)
    }
}

/// Creates a number field validator from a constraint set.
///
/// # Examples
///
/// ```
/// use formschema_validator::prelude::*;
/// use serde_json::json;
///
/// let age = number_field(NumberConstraints::new().min(0.0).integer()).unwrap();
/// assert_eq!(age.validate_value(&json!("42")).unwrap(), 42.0);
/// assert!(age.validate_value(&json!("4.2")).is_err());
/// ```
pub fn number_field(constraints: NumberConstraints) -> Result<NumberField, SchemaError> {
    NumberField::new(constraints)
}

// ============================================================================
// TESTS
// ============================================================================

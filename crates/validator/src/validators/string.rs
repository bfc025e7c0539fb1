//! String field validator
//!
//! Checks run in a fixed order and the first failure is returned:
//! type, required, minimum length, maximum length, pattern, hex colour.
//! A successful value is returned unchanged (no trimming).

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::foundation::{Input, Issue, IssueKind, Outcome, SchemaError, Validate};
use crate::locale::{Locale, Message};
use crate::validators::length::LengthMode;

static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{6})$").expect("hex color regex is valid"));

// ============================================================================
// CONSTRAINTS
// ============================================================================

/// Constraint set for [`StringField`].
///
/// Deserializes from the camelCase option names used by form configs:
///
/// ```
/// use formschema_validator::validators::StringConstraints;
///
/// let c: StringConstraints =
///     serde_json::from_str(r#"{"required": true, "minLength": 2, "locale": "ko"}"#).unwrap();
/// assert_eq!(c, StringConstraints::new().required().min_length(2).locale(formschema_validator::locale::Locale::Korean));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StringConstraints {
    /// Reject the empty string.
    pub required: bool,
    /// Minimum length (inclusive).
    pub min_length: Option<usize>,
    /// Maximum length (inclusive).
    pub max_length: Option<usize>,
    /// Regular expression the value must match somewhere (unanchored).
    pub pattern: Option<String>,
    /// Require a `#rrggbb` hex colour.
    pub hex_color: bool,
    /// How length is counted.
    pub length_mode: LengthMode,
    /// Language of issue messages.
    pub locale: Locale,
}

impl StringConstraints {
    /// Creates an empty constraint set (any string passes).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects the empty string.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the minimum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the maximum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Sets the pattern the value must match.
    #[must_use = "builder methods must be chained or built"]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Requires a `#rrggbb` hex colour.
    #[must_use = "builder methods must be chained or built"]
    pub fn hex_color(mut self) -> Self {
        self.hex_color = true;
        self
    }

    /// Sets how length is counted.
    #[must_use = "builder methods must be chained or built"]
    pub fn length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = mode;
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

/// Validates that the input is a string satisfying a [`StringConstraints`].
///
/// Built with [`string_field`].
#[derive(Debug, Clone)]
pub struct StringField {
    pub(crate) required: bool,
    pub(crate) min_length: Option<usize>,
    pub(crate) max_length: Option<usize>,
    pub(crate) pattern: Option<Regex>,
    pub(crate) hex_color: bool,
    pub(crate) length_mode: LengthMode,
    pub(crate) locale: Locale,
}

impl StringField {
    /// Compiles a constraint set into a validator.
    ///
    /// Fails if the pattern is not a valid regex or `min_length > max_length`.
    pub fn new(constraints: StringConstraints) -> Result<Self, SchemaError> {
        if let (Some(min), Some(max)) = (constraints.min_length, constraints.max_length) {
            if min > max {
                return Err(SchemaError::InvalidBounds {
                    constraint: "length",
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }

        let pattern = constraints
            .pattern
            .map(|source| {
                Regex::new(&source).map_err(|err| SchemaError::InvalidPattern {
                    pattern: source.clone(),
                    source: err,
                })
            })
            .transpose()?;

        Ok(Self {
            required: constraints.required,
            min_length: constraints.min_length,
            max_length: constraints.max_length,
            pattern,
            hex_color: constraints.hex_color,
            length_mode: constraints.length_mode,
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

impl Validate for StringField {
    type Output = String;

    fn validate(&self, input: Input<'_>) -> Outcome<String> {
        let Some(value) = input.as_str() else {
            return Err(self
                .issue(IssueKind::Type, Message::NotString)
                .with_param("expected", "string")
                .with_param("actual", input.type_name())
                .into());
        };

        if self.required && value.is_empty() {
            return Err(self.issue(IssueKind::Required, Message::Required).into());
        }

        if self.min_length.is_some() || self.max_length.is_some() {
            let len = self.length_mode.measure(value);

            match (self.min_length, self.max_length) {
                (Some(min), _) if len < min => {
                    return Err(self
                        .issue(IssueKind::Length, Message::MinLength(min))
                        .with_param("min", min.to_string())
                        .with_param("actual", len.to_string())
                        .into());
                }
                (_, Some(max)) if len > max => {
                    return Err(self
                        .issue(IssueKind::Length, Message::MaxLength(max))
                        .with_param("max", max.to_string())
                        .with_param("actual", len.to_string())
                        .into());
                }
                _ => {}
            }
        }

        if let Some(pattern) = self.pattern.as_ref().filter(|p| !p.is_match(value)) {
            return Err(self
                .issue(IssueKind::Pattern, Message::PatternMismatch)
                .with_param("pattern", pattern.as_str().to_owned())
                .into());
        }

        if self.hex_color && !HEX_COLOR_REGEX.is_match(value) {
            return Err(self
                .issue(IssueKind::Pattern, Message::HexColor)
                .with_param("expected", "hex_color")
                .into());
        }

        Ok(value.to_owned())
    }
}

/// Creates a string field validator from a constraint set.
///
/// # Examples
///
/// ```
/// use formschema_validator::prelude::*;
/// use serde_json::json;
///
/// let v = string_field(StringConstraints::new().min_length(3)).unwrap();
/// assert_eq!(v.validate_value(&json!("abc")).unwrap(), "abc");
/// assert!(v.validate_value(&json!("ab")).is_err());
/// ```
pub fn string_field(constraints: StringConstraints) -> Result<StringField, SchemaError> {
    StringField::new(constraints)
}

// ============================================================================
// TESTS
// ============================================================================

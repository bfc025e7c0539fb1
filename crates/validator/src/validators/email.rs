//! Email field validator
//!
//! Accepts `local@domain.tld` where each part is one or more characters that
//! are neither whitespace nor `@`. This is a simplification: it
//! is not RFC 5322 and accepts some addresses a mail server would not.
//!
//! Whitespace is the browser's set: it includes U+FEFF and excludes U+0085,
//! unlike the regex crate's `\s`.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::foundation::{Input, Issue, IssueKind, Outcome, Validate};
use crate::locale::{Locale, Message};

// Everything except `@` and browser whitespace.
const PART: &str = r"[^@\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{PART}@{PART}\.{PART}$")).expect("email regex is valid")
});

/// Constraint set for [`EmailField`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailConstraints {
    /// Reject the empty string.
    pub required: bool,
    /// Language of issue messages.
    pub locale: Locale,
}

impl EmailConstraints {
    /// Creates an empty constraint set (format check only).
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

    /// Sets the message language.
    #[must_use = "builder methods must be chained or built"]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// Validates email address shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailField {
    required: bool,
    locale: Locale,
}

impl EmailField {
    /// Builds the validator. Email constraints cannot be malformed.
    #[must_use]
    pub fn new(constraints: EmailConstraints) -> Self {
        Self {
            required: constraints.required,
            locale: constraints.locale,
        }
    }

    fn issue(&self, kind: IssueKind, message: Message<'_>) -> Issue {
        Issue::new(kind, message.render(self.locale))
    }
}

impl Validate for EmailField {
    type Output = String;

    fn validate(&self, input: Input<'_>) -> Outcome<String> {
        let Some(value) = input.as_str() else {
            return Err(self
                .issue(IssueKind::Type, Message::EmailNotString)
                .with_param("expected", "string")
                .with_param("actual", input.type_name())
                .into());
        };

        if self.required && value.is_empty() {
            return Err(self
                .issue(IssueKind::Required, Message::EmailRequired)
                .into());
        }

        if !EMAIL_REGEX.is_match(value) {
            return Err(self
                .issue(IssueKind::Format, Message::EmailFormat)
                .with_param("expected", "email")
                .into());
        }

        Ok(value.to_owned())
    }
}

/// Creates an email field validator.
///
/// # Examples
///
/// ```
/// use formschema_validator::prelude::*;
/// use serde_json::json;
///
/// let v = email_field(EmailConstraints::new().required());
/// assert!(v.validate_value(&json!("a@b.co")).is_ok());
/// assert!(v.validate_value(&json!("not-an-email")).is_err());
/// ```
#[must_use]
pub fn email_field(constraints: EmailConstraints) -> EmailField {
    EmailField::new(constraints)
}

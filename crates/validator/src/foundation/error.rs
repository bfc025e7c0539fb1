//! Issue types for validation failures
//!
//! An [`Issue`] is one reported failure: a kind, a localized message, a path
//! locating it inside nested input, and optional parameters (bounds).
//! [`Issues`] is the ordered collection a failed [`Outcome`](super::Outcome)
//! carries.
//!
//! Construction-time mistakes in a constraint set are not issues; they are
//! reported once as a [`SchemaError`] when the validator is built.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ============================================================================
// ISSUE KIND
// ============================================================================

/// Failure taxonomy shared by every validator.
///
/// Serializes as its [`code`](Self::code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Wrong primitive type or shape.
    #[serde(rename = "type_mismatch")]
    Type,
    /// Missing or empty required value.
    Required,
    /// String length bound violated.
    Length,
    /// Numeric bound violated.
    Range,
    /// Number is not an integer.
    Integer,
    /// String does not match the configured pattern.
    Pattern,
    /// Value does not have the expected format (email).
    #[serde(rename = "invalid_format")]
    Format,
}

impl IssueKind {
    /// Stable machine-readable code for this kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Type => "type_mismatch",
            Self::Required => "required",
            Self::Length => "length",
            Self::Range => "range",
            Self::Integer => "integer",
            Self::Pattern => "pattern",
            Self::Format => "invalid_format",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// PATH
// ============================================================================

/// One step of an issue path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Array position.
    Index(usize),
    /// Object property name.
    Key(Cow<'static, str>),
}

impl PathSegment {
    /// Creates a key segment.
    pub fn key(key: impl Into<Cow<'static, str>>) -> Self {
        Self::Key(key.into())
    }

    /// Returns the key, if this is a key segment.
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(k) => Some(k),
            Self::Index(_) => None,
        }
    }
}

impl From<&'static str> for PathSegment {
    fn from(key: &'static str) -> Self {
        Self::Key(Cow::Borrowed(key))
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(Cow::Owned(key))
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => f.write_str(k),
            Self::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// Issue path, outermost segment first. Empty at the point of origin.
pub type IssuePath = SmallVec<[PathSegment; 4]>;

// ============================================================================
// ISSUE
// ============================================================================

/// A single validation failure.
///
/// # Examples
///
/// ```
/// use formschema_validator::foundation::{Issue, IssueKind};
///
/// let issue = Issue::new(IssueKind::Length, "Must be at least 3 characters")
///     .with_param("min", "3")
///     .prefixed("name");
///
/// assert_eq!(issue.param("min"), Some("3"));
/// assert_eq!(issue.path_string(), "name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// What kind of check failed.
    pub kind: IssueKind,

    /// Human-readable, already localized message.
    pub message: Cow<'static, str>,

    /// Location of the failing value inside the validated input.
    #[serde(default)]
    pub path: IssuePath,

    /// Parameters of the failed check, e.g. `[("min", "3")]`.
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,
}

impl Issue {
    /// Creates an issue with an empty path.
    pub fn new(kind: IssueKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: SmallVec::new(),
            params: SmallVec::new(),
        }
    }

    /// Adds a parameter to the issue.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Prepends a segment to the path.
    #[must_use = "builder methods must be chained or built"]
    pub fn prefixed(mut self, segment: impl Into<PathSegment>) -> Self {
        self.path.insert(0, segment.into());
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Dotted rendering of the path, e.g. `address.zip` or `items[0].name`.
    #[must_use]
    pub fn path_string(&self) -> String {
        let mut out = String::new();
        for segment in &self.path {
            match segment {
                PathSegment::Key(k) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(k);
                }
                PathSegment::Index(i) => out.push_str(&format!("[{i}]")),
            }
        }
        out
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}: {}", self.kind, self.message)
        } else {
            write!(f, "[{}] {}: {}", self.path_string(), self.kind, self.message)
        }
    }
}

// ============================================================================
// ISSUE COLLECTION
// ============================================================================

/// Ordered collection of issues carried by a failed outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Issues {
    issues: Vec<Issue>,
}

impl Issues {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Creates a collection holding one issue.
    #[must_use]
    pub fn single(issue: Issue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    /// Adds an issue.
    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Appends every issue of `other`, each with `segment` prepended to its path.
    pub fn absorb_prefixed(&mut self, other: Issues, segment: &PathSegment) {
        self.issues.extend(
            other
                .issues
                .into_iter()
                .map(|issue| issue.prefixed(segment.clone())),
        );
    }

    /// Returns the number of issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if there are no issues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns all issues.
    #[must_use]
    pub fn as_slice(&self) -> &[Issue] {
        &self.issues
    }

    /// Iterates over the issues in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.issues.iter()
    }

    /// Returns the first issue, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Issue> {
        self.issues.first()
    }

    /// Consumes the collection.
    #[must_use]
    pub fn into_vec(self) -> Vec<Issue> {
        self.issues
    }

    /// `Ok(value)` when empty, `Err(self)` otherwise.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, Issues> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl From<Issue> for Issues {
    fn from(issue: Issue) -> Self {
        Self::single(issue)
    }
}

impl FromIterator<Issue> for Issues {
    fn from_iter<I: IntoIterator<Item = Issue>>(iter: I) -> Self {
        Self {
            issues: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Issues {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl<'a> IntoIterator for &'a Issues {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

impl fmt::Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} issue(s):", self.issues.len())?;
        for (i, issue) in self.issues.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for Issues {}

// ============================================================================
// SCHEMA ERROR
// ============================================================================

/// A malformed constraint set or object declaration.
///
/// Returned when a validator is constructed, never while validating.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The `pattern` constraint is not a valid regular expression.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending pattern source.
        pattern: String,
        /// Underlying regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// A lower bound exceeds its upper bound.
    #[error("invalid bounds for `{constraint}`: {min} > {max}")]
    InvalidBounds {
        /// Which pair of constraints is inverted.
        constraint: &'static str,
        /// Lower bound as rendered.
        min: String,
        /// Upper bound as rendered.
        max: String,
    },

    /// A numeric bound is NaN.
    #[error("bound `{constraint}` must be a number, got NaN")]
    NonFiniteBound {
        /// Which constraint holds the NaN.
        constraint: &'static str,
    },

    /// The same field name was declared twice on an object validator.
    #[error("field `{0}` is declared more than once")]
    DuplicateField(String),
}

// ============================================================================
// TESTS
// ============================================================================

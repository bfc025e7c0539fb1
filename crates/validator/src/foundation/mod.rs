//! Core validation types and traits
//!
//! This module contains the building blocks every validator shares:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Input**: [`Input`], the absent-or-present untyped value
//! - **Issues**: [`Issue`], [`IssueKind`], [`Issues`], [`PathSegment`]
//! - **Construction errors**: [`SchemaError`]
//!
//! # Architecture
//!
//! ## 1. One contract
//!
//! Field validators and the object validator implement the same
//! [`Validate`] trait, so an object validator can hold other object
//! validators and nesting needs no special casing.
//!
//! ## 2. Failure is a value
//!
//! [`Outcome<T>`] is `Result<T, Issues>`. Expected validation failures never
//! panic. Leaf validators return exactly one issue; the object validator
//! collects the issues of every field before deciding.
//!
//! ## 3. Paths grow outward
//!
//! An issue starts with an empty path. Each composite layer prepends the
//! segment under which it found the failing value:
//!
//! ```
//! use formschema_validator::prelude::*;
//! use serde_json::json;
//!
//! let address = ObjectValidator::new()
//!     .field("zip", string_field(StringConstraints::new().required()).unwrap());
//! let user = ObjectValidator::new().field("address", address);
//!
//! let issues = user.validate_value(&json!({"address": {"zip": ""}})).unwrap_err();
//! assert_eq!(issues.first().unwrap().path_string(), "address.zip");
//! ```

pub mod error;
pub mod traits;

pub use error::{Issue, IssueKind, IssuePath, Issues, PathSegment, SchemaError};
pub use traits::{Input, Validate, ValidateExt};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Result of invoking a validator: the normalized value or the issues found.
pub type Outcome<T> = Result<T, Issues>;

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a JSON value with a validator.
///
/// Convenience for one-off validations.
///
/// # Examples
///
/// ```
/// use formschema_validator::foundation::validate_value;
/// use formschema_validator::prelude::*;
/// use serde_json::json;
///
/// let name = string_field(StringConstraints::new().min_length(3)).unwrap();
/// assert_eq!(validate_value(&json!("abc"), &name).unwrap(), "abc");
/// ```
pub fn validate_value<V>(value: &serde_json::Value, validator: &V) -> Outcome<V::Output>
where
    V: Validate + ?Sized,
{
    validator.validate(Input::Present(value))
}

// ============================================================================
// TESTS
// ============================================================================

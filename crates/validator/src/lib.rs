//! # formschema-validator
//!
//! Declarative validation of untyped form input: field validators for
//! strings, numbers and email addresses, composed into object validators
//! that report every failing field at once.
//!
//! ## Quick Start
//!
//! ```
//! use formschema_validator::prelude::*;
//! use serde_json::json;
//!
//! let signup = ObjectValidator::new()
//!     .field("name", string_field(StringConstraints::new().required()).unwrap())
//!     .field("email", email_field(EmailConstraints::new().required()))
//!     .field("age", number_field(NumberConstraints::new().min(18.0)).unwrap());
//!
//! let issues = signup
//!     .validate_value(&json!({"name": "", "email": "nope", "age": "17"}))
//!     .unwrap_err();
//! let paths: Vec<_> = issues.iter().map(Issue::path_string).collect();
//! assert_eq!(paths, ["name", "email", "age"]);
//! ```
//!
//! ## Outcomes
//!
//! Every validator returns [`Outcome<T>`](foundation::Outcome), a
//! `Result<T, Issues>`. On success `T` is the normalized value: a number
//! field returns the coerced `f64` and an object validator returns a fresh
//! JSON object holding only its declared keys.
//!
//! ## Constraint sets
//!
//! [`StringConstraints`](validators::StringConstraints),
//! [`NumberConstraints`](validators::NumberConstraints) and
//! [`EmailConstraints`](validators::EmailConstraints) are plain data and
//! deserialize from camelCase JSON, so schemas can live in configuration.
//! Malformed constraints (a bad regex, inverted bounds) are rejected when
//! the validator is built, as a [`SchemaError`](foundation::SchemaError).
//!
//! ## Logging
//!
//! The object validator emits `tracing` events at `trace` and `debug`
//! level. The crate installs no subscriber.

pub mod combinators;
pub mod foundation;
pub mod json;
pub mod locale;
pub mod prelude;
pub mod validators;

//! Prelude module for convenient imports.
//!
//! Provides a single `use formschema_validator::prelude::*;` import that
//! brings in the traits, issue types, field validators and combinators.
//!
//! # Examples
//!
//! ```
//! use formschema_validator::prelude::*;
//!
//! let name = fields::text(true);
//! let age = number_field(NumberConstraints::new().integer()).unwrap();
//! let form = ObjectValidator::new().field("name", name).field("age", age);
//! assert_eq!(form.len(), 2);
//! ```

// ============================================================================
// FOUNDATION: Core traits, issues, construction errors
// ============================================================================

pub use crate::foundation::{
    Input, Issue, IssueKind, Issues, Outcome, PathSegment, SchemaError, Validate, ValidateExt,
};

pub use crate::locale::Locale;

// ============================================================================
// VALIDATORS: Built-in field validators
// ============================================================================

pub use crate::validators::{
    EmailConstraints, EmailField, LengthMode, NumberConstraints, NumberField, StringConstraints,
    StringField, email_field, fields, number_field, string_field,
};

// ============================================================================
// COMBINATORS: Composition types
// ============================================================================

pub use crate::combinators::{BoxedValidator, ObjectValidator, Optional, WithMessage};

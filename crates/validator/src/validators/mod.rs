//! Built-in field validators
//!
//! Each field validator is built from a serde-deserializable constraint set
//! and checks one value.
//!
//! # Fields
//!
//! - **String**: type, required, length bounds, pattern, hex colour
//! - **Number**: lenient coercion, required, inclusive range, integer
//! - **Email**: type, required, address shape
//!
//! A field validator reports at most one issue. Checks run in a fixed order
//! and the first failure wins.
//!
//! # Examples
//!
//! ```
//! use formschema_validator::prelude::*;
//! use serde_json::json;
//!
//! let username = string_field(
//!     StringConstraints::new().required().min_length(3).max_length(20),
//! )
//! .unwrap();
//! let age = number_field(NumberConstraints::new().min(18.0).integer()).unwrap();
//!
//! assert!(username.validate_value(&json!("ann")).is_ok());
//! assert_eq!(age.validate_value(&json!("30")).unwrap(), 30.0);
//! ```

pub mod coerce;
pub mod email;
pub mod fields;
pub mod length;
pub mod number;
pub mod string;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use coerce::{coerce_number, parse_numeric_str};
pub use email::{EmailConstraints, EmailField, email_field};
pub use length::LengthMode;
pub use number::{NumberConstraints, NumberField, number_field};
pub use string::{StringConstraints, StringField, string_field};

//! Validator combinators
//!
//! - [`ObjectValidator`]: named fields of a JSON object, all issues collected
//! - [`WithMessage`]: replaces issue messages
//! - [`Optional`]: accepts an absent value or `null`
//! - [`Erased`] / [`BoxedValidator`]: type erasure for heterogeneous storage
//!
//! The wrapping combinators are usually built through
//! [`ValidateExt`](crate::foundation::ValidateExt).

pub mod boxed;
pub mod message;
pub mod object;
pub mod optional;

pub use boxed::{BoxedValidator, Erased};
pub use message::WithMessage;
pub use object::ObjectValidator;
pub use optional::Optional;

//! Application services for the validation module.
//!
//! [`Validator`] detects which schema family it was handed, runs it, and
//! normalizes the family-specific failure into a [`ValidationResult`].
//!
//! [`ValidationResult`]: crate::validation::domain::ValidationResult

mod validator;

pub use self::validator::{SchemaKind, Validator};

//! Domain types for schema validation.
//!
//! Holds the normalized result shape, the violation tree and its
//! flattening, and the builder-registered class schemas.

pub mod class_schema;
pub mod constraint;
pub mod result;
pub mod violation;

pub use class_schema::{ClassInstance, ClassSchema, ClassSchemaBuilder, FieldSpec};
pub use constraint::{Constraint, CustomCheck};
pub use result::{ErrorDetail, INTERNAL_ERROR_KIND, UNKNOWN_KIND, ValidationResult};
pub use violation::{ViolationNode, flatten_violations};

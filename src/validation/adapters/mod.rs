//! Built-in implementations of the validation ports.
//!
//! - [`shape`]: safe-parse family ([`ShapeSchema`])
//! - [`typed`]: throwing-validate family over `validator` ([`TypedSchema`])
//! - [`class`]: class machinery for [`ClassSchema`](crate::validation::domain::ClassSchema)

pub mod class;
pub mod shape;
pub mod typed;

pub use class::{BuiltinConstraintValidator, BuiltinMachinery, BuiltinTransformer};
pub use shape::{Shape, ShapeSchema};
pub use typed::TypedSchema;

//! Schema-agnostic input validation.
//!
//! Three schema families are accepted and their failures normalized into a
//! single [`ValidationResult`](domain::ValidationResult) shape:
//!
//! - **Safe-parse** schemas report issues in-band ([`adapters::ShapeSchema`])
//! - **Throwing** schemas return the value or a failure ([`adapters::TypedSchema`])
//! - **Class** schemas declare per-field constraints ([`domain::ClassSchema`])
//!
//! # Architecture
//!
//! - **Domain**: results, error details, class descriptors, constraints
//! - **Ports**: capability traits for each family and the class machinery
//! - **Adapters**: built-in schema families and machinery
//! - **Services**: the [`Validator`](services::Validator) dispatcher
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use zyro_utils::validation::{
//!     self,
//!     adapters::{Shape, ShapeSchema},
//! };
//!
//! # tokio::runtime::Builder::new_current_thread().build().map(|rt| rt.block_on(async {
//! let schema = ShapeSchema::new(Shape::object([
//!     ("name", Shape::string()),
//!     ("age", Shape::number()),
//! ]));
//!
//! let result = validation::validate(&schema, &json!({"name": "Ana", "age": 30}))
//!     .await
//!     .expect("shape schemas are supported");
//! assert_eq!(result.data(), Some(&json!({"name": "Ana", "age": 30})));
//! # })).expect("runtime");
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

use domain::ValidationResult;
use error::ValidatorError;
use ports::SchemaProbe;
use serde_json::Value;
use services::Validator;
use std::sync::LazyLock;

static SHARED: LazyLock<Validator> = LazyLock::new(Validator::new);

/// Validates `input` with a process-wide [`Validator`].
///
/// The shared validator loads the class machinery at most once.
///
/// # Errors
///
/// Returns [`ValidatorError::UnsupportedSchema`] when the schema exposes no
/// supported capability.
pub async fn validate(
    schema: &dyn SchemaProbe,
    input: &Value,
) -> Result<ValidationResult<Value>, ValidatorError> {
    SHARED.validate(schema, input).await
}

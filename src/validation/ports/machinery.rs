//! Ports for the class-validation machinery.
//!
//! Building instances and evaluating constraints are pluggable services,
//! loaded lazily the first time a class schema is validated.

use crate::validation::{
    domain::{ClassInstance, ClassSchema, ViolationNode},
    error::MachineryError,
};
use async_trait::async_trait;
use serde_json::Value;
use std::{fmt, sync::Arc};

/// Builds typed instances from plain input.
pub trait InstanceTransformer: Send + Sync {
    /// Copies the declared fields of `input` into a new instance.
    ///
    /// # Errors
    ///
    /// Returns [`MachineryError`] when the transformer itself fails.
    fn to_instance(&self, schema: &ClassSchema, input: &Value) -> Result<ClassInstance, MachineryError>;
}

/// Evaluates field constraints over an instance.
pub trait ConstraintValidator: Send + Sync {
    /// Returns one node per field with violations. An empty list means valid.
    ///
    /// # Errors
    ///
    /// Returns [`MachineryError`] when evaluation cannot run.
    fn validate(
        &self,
        schema: &ClassSchema,
        instance: &ClassInstance,
    ) -> Result<Vec<ViolationNode>, MachineryError>;
}

/// Loaded pair of machinery services.
#[derive(Clone)]
pub struct ClassToolkit {
    transformer: Arc<dyn InstanceTransformer>,
    validator: Arc<dyn ConstraintValidator>,
}

impl ClassToolkit {
    /// Bundles a transformer and a validator.
    #[must_use]
    pub fn new(
        transformer: Arc<dyn InstanceTransformer>,
        validator: Arc<dyn ConstraintValidator>,
    ) -> Self {
        Self {
            transformer,
            validator,
        }
    }

    /// Returns the instance transformer.
    #[must_use]
    pub fn transformer(&self) -> &dyn InstanceTransformer {
        self.transformer.as_ref()
    }

    /// Returns the constraint validator.
    #[must_use]
    pub fn validator(&self) -> &dyn ConstraintValidator {
        self.validator.as_ref()
    }
}

impl fmt::Debug for ClassToolkit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassToolkit").finish_non_exhaustive()
    }
}

/// Loader for the class-validation machinery.
#[async_trait]
pub trait ClassMachinery: Send + Sync {
    /// Loads the machinery.
    ///
    /// # Errors
    ///
    /// Returns [`MachineryError::Unavailable`] when it cannot be provided.
    async fn load(&self) -> Result<ClassToolkit, MachineryError>;
}

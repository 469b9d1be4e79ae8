//! Shared fixtures and test doubles for validation tests.

use crate::validation::{
    adapters::{BuiltinConstraintValidator, BuiltinTransformer},
    domain::{ClassSchema, Constraint},
    error::MachineryError,
    ports::{
        ClassMachinery, ClassToolkit, SafeParse, SafeParseOutcome, SchemaProbe, ThrowingValidate,
        ThrownFailure, ValidateOptions,
    },
    services::Validator,
};
use async_trait::async_trait;
use rstest::fixture;
use serde_json::Value;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

#[fixture]
pub fn validator() -> Validator {
    Validator::new()
}

/// `{name: string, age: number}` as a class schema.
#[fixture]
pub fn person_schema() -> ClassSchema {
    ClassSchema::builder("Person")
        .field("name", [Constraint::IsString])
        .field("age", [Constraint::IsNumber])
        .build()
}

/// User with a nested address, used for dotted-path assertions.
#[fixture]
pub fn user_with_address() -> ClassSchema {
    let address = ClassSchema::builder("Address")
        .field("street", [Constraint::IsString])
        .field("zip", [Constraint::IsString, Constraint::MinLength(5)])
        .build();

    ClassSchema::builder("User")
        .field("name", [Constraint::IsString, Constraint::IsNotEmpty])
        .nested("address", address, [Constraint::IsDefined])
        .build()
}

/// Safe-parse schema returning a canned outcome.
pub struct StubSafeParse {
    pub outcome: SafeParseOutcome,
}

#[async_trait]
impl SafeParse for StubSafeParse {
    async fn safe_parse(&self, _input: &Value) -> SafeParseOutcome {
        self.outcome.clone()
    }
}

impl SchemaProbe for StubSafeParse {
    fn as_safe_parse(&self) -> Option<&dyn SafeParse> {
        Some(self)
    }
}

/// Throwing schema returning a canned outcome and recording its options.
pub struct StubThrowing {
    pub outcome: Result<Value, ThrownFailure>,
    pub seen_options: std::sync::Mutex<Option<ValidateOptions>>,
}

impl StubThrowing {
    pub fn new(outcome: Result<Value, ThrownFailure>) -> Self {
        Self {
            outcome,
            seen_options: std::sync::Mutex::new(None),
        }
    }
}

#[async_trait]
impl ThrowingValidate for StubThrowing {
    async fn validate(&self, _input: &Value, options: ValidateOptions) -> Result<Value, ThrownFailure> {
        *self.seen_options.lock().expect("options lock") = Some(options);
        self.outcome.clone()
    }
}

impl SchemaProbe for StubThrowing {
    fn as_throwing(&self) -> Option<&dyn ThrowingValidate> {
        Some(self)
    }
}

/// Exposes both safe-parse and throwing capabilities.
pub struct DualProbe {
    pub safe: StubSafeParse,
    pub throwing: StubThrowing,
}

impl SchemaProbe for DualProbe {
    fn as_safe_parse(&self) -> Option<&dyn SafeParse> {
        Some(&self.safe)
    }

    fn as_throwing(&self) -> Option<&dyn ThrowingValidate> {
        Some(&self.throwing)
    }
}

/// Machinery that fails its first `failures` loads and counts every call.
#[derive(Default)]
pub struct CountingMachinery {
    pub loads: AtomicUsize,
    pub failures: usize,
}

impl CountingMachinery {
    pub fn failing(failures: usize) -> Self {
        Self {
            loads: AtomicUsize::new(0),
            failures,
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClassMachinery for CountingMachinery {
    async fn load(&self) -> Result<ClassToolkit, MachineryError> {
        let attempt = self.loads.fetch_add(1, Ordering::SeqCst);
        if attempt < self.failures {
            return Err(MachineryError::unavailable("transformer module not found"));
        }
        Ok(ClassToolkit::new(
            Arc::new(BuiltinTransformer),
            Arc::new(BuiltinConstraintValidator),
        ))
    }
}

pub fn validator_with(machinery: Arc<CountingMachinery>) -> Validator {
    Validator::with_machinery(machinery)
}

//! Behavioural integration tests for schema-agnostic validation.
//!
//! These tests exercise the public `validate` entry point against each
//! built-in schema family and check the normalized result shape.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use ::validator::Validate;
use zyro_utils::validation::{
    self,
    adapters::{Shape, ShapeSchema, TypedSchema},
    domain::{ClassSchema, Constraint, ErrorDetail, ValidationResult},
    error::ValidatorError,
};

#[derive(Debug, Serialize, Deserialize, Validate)]
struct Person {
    #[validate(length(min = 1))]
    name: String,
    #[validate(range(min = 0, max = 150))]
    age: u8,
}

fn person_shape() -> ShapeSchema {
    ShapeSchema::new(Shape::object([
        ("name", Shape::string()),
        ("age", Shape::number()),
    ]))
}

fn person_class() -> ClassSchema {
    ClassSchema::builder("Person")
        .field("name", [Constraint::IsString])
        .field("age", [Constraint::IsNumber])
        .build()
}

// ============================================================================
// Scenario: A valid person passes every schema family
// ============================================================================

/// Given the same valid payload, each family reports success with the data.
#[tokio::test]
async fn valid_person_passes_every_family() {
    // Arrange
    let input = json!({"name": "Ana", "age": 30});

    // Act
    let shape = validation::validate(&person_shape(), &input).await;
    let typed = validation::validate(&TypedSchema::<Person>::new(), &input).await;
    let class = validation::validate(&person_class(), &input).await;

    // Assert
    for result in [shape, typed, class] {
        assert_eq!(result, Ok(ValidationResult::Success(input.clone())));
    }
}

// ============================================================================
// Scenario: A wrongly typed age is reported with the field path
// ============================================================================

/// A string age fails on the `age` path for the safe-parse family.
#[tokio::test]
async fn string_age_is_reported_on_age_path() {
    // Arrange
    let input = json!({"name": "Ana", "age": "thirty"});

    // Act
    let result = validation::validate(&person_shape(), &input)
        .await
        .expect("shape schemas are supported");

    // Assert
    assert_eq!(
        result,
        ValidationResult::Failure(vec![
            ErrorDetail::new("age", "Expected number, received string").with_kind("invalid_type")
        ])
    );
}

/// The class family reports the violated constraint as the error type.
#[tokio::test]
async fn class_schema_reports_constraint_name() {
    // Arrange
    let input = json!({"name": "Ana", "age": "thirty"});

    // Act
    let result = validation::validate(&person_class(), &input)
        .await
        .expect("class schemas are supported");

    // Assert
    let errors = result.errors().expect("failure expected");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().map(|e| e.path.as_str()), Some("age"));
    assert_eq!(errors.first().and_then(ErrorDetail::kind), Some("isNumber"));
}

// ============================================================================
// Scenario: Results serialize to the public wire shape
// ============================================================================

/// Failures serialize as `{success: false, errors: [{path, message, type}]}`.
#[tokio::test]
async fn failure_serializes_to_wire_shape() {
    // Arrange
    let input = json!({"name": 7, "age": 30});

    // Act
    let result = validation::validate(&person_class(), &input)
        .await
        .expect("class schemas are supported");
    let wire = serde_json::to_value(&result).expect("serializable");

    // Assert
    assert_eq!(
        wire,
        json!({
            "success": false,
            "errors": [{"path": "name", "message": "name must be a string", "type": "isString"}]
        })
    );
}

/// Successes serialize as `{success: true, data}`.
#[tokio::test]
async fn success_serializes_to_wire_shape() {
    // Arrange
    let input = json!({"name": "Ana", "age": 30, "ignored": true});

    // Act
    let result = validation::validate(&person_shape(), &input)
        .await
        .expect("shape schemas are supported");

    // Assert
    assert_eq!(
        serde_json::to_value(&result).expect("serializable"),
        json!({"success": true, "data": {"name": "Ana", "age": 30}})
    );
}

// ============================================================================
// Scenario: Unsupported schemas fail fast
// ============================================================================

/// Plain data is not a schema and is rejected before any validation.
#[tokio::test]
async fn plain_data_is_not_a_schema() {
    // Arrange
    let not_a_schema: Value = json!({"name": "string"});

    // Act
    let result = validation::validate(&not_a_schema, &json!({})).await;

    // Assert
    assert_eq!(result, Err(ValidatorError::UnsupportedSchema));
}

// ============================================================================
// Scenario: Repeated validation is stable
// ============================================================================

/// Validating the same input twice yields identical results.
#[tokio::test]
async fn repeated_validation_is_idempotent() {
    // Arrange
    let schema = TypedSchema::<Person>::new();
    let input = json!({"name": "", "age": 200});

    // Act
    let first = validation::validate(&schema, &input).await;
    let second = validation::validate(&schema, &input).await;

    // Assert
    assert_eq!(first, second);
    let errors = first.expect("supported").into_result().expect_err("two invalid fields");
    assert_eq!(errors.len(), 2);
}

// ============================================================================
// Scenario: Every mistyped field of a typed schema is reported
// ============================================================================

/// Two fields of the wrong JSON type yield two `typeError` details.
#[tokio::test]
async fn mistyped_fields_are_reported_individually() {
    // Arrange
    let input = json!({"name": 123, "age": "dez"});

    // Act
    let result = validation::validate(&TypedSchema::<Person>::new(), &input)
        .await
        .expect("typed schemas are supported");

    // Assert
    let errors = result.errors().expect("failure expected");
    let mut paths: Vec<&str> = errors.iter().map(|detail| detail.path.as_str()).collect();
    paths.sort_unstable();
    assert_eq!(paths, ["age", "name"]);
    assert!(errors.iter().all(|detail| detail.kind() == Some("typeError")));
}

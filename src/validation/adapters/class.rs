//! Built-in class-validation machinery.
//!
//! Walks the builder-registered [`ClassSchema`] descriptors directly; no
//! runtime reflection is involved.

use crate::{
    objects,
    validation::{
        domain::{ClassInstance, ClassSchema, FieldSpec, ViolationNode},
        error::MachineryError,
        ports::{ClassMachinery, ClassToolkit, ConstraintValidator, InstanceTransformer},
    },
};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

const NESTED_VALIDATION: &str = "nestedValidation";

/// Copies declared fields from plain input into a [`ClassInstance`].
///
/// Non-object input yields an instance without fields. Nested schema fields
/// are coerced recursively, element by element for arrays.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTransformer;

impl InstanceTransformer for BuiltinTransformer {
    fn to_instance(&self, schema: &ClassSchema, input: &Value) -> Result<ClassInstance, MachineryError> {
        Ok(build_instance(schema, input))
    }
}

fn build_instance(schema: &ClassSchema, input: &Value) -> ClassInstance {
    let mut fields = Map::new();
    if let Some(source) = input.as_object() {
        for spec in schema.fields() {
            if let Some(value) = source.get(spec.name()) {
                let coerced = spec
                    .nested()
                    .map_or_else(|| value.clone(), |nested| coerce_nested(nested, value));
                fields.insert(spec.name().to_owned(), coerced);
            }
        }
    }
    ClassInstance::new(schema.name(), fields)
}

fn coerce_nested(schema: &ClassSchema, value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(|item| coerce_nested(schema, item)).collect()),
        object if objects::is_object(object) => build_instance(schema, object).into_value(),
        other => other.clone(),
    }
}

/// Evaluates the declared constraints of every field.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinConstraintValidator;

impl ConstraintValidator for BuiltinConstraintValidator {
    fn validate(
        &self,
        schema: &ClassSchema,
        instance: &ClassInstance,
    ) -> Result<Vec<ViolationNode>, MachineryError> {
        Ok(validate_fields(schema, instance.fields()))
    }
}

fn validate_fields(schema: &ClassSchema, fields: &Map<String, Value>) -> Vec<ViolationNode> {
    schema
        .fields()
        .iter()
        .filter_map(|spec| validate_field(spec, fields.get(spec.name())))
        .collect()
}

fn validate_field(spec: &FieldSpec, value: Option<&Value>) -> Option<ViolationNode> {
    if spec.is_optional() && value.is_none_or(Value::is_null) {
        return None;
    }

    let mut node = ViolationNode::new(spec.name());
    for constraint in spec.constraints() {
        if !constraint.check(value) {
            node.push_constraint(constraint.name(), constraint.message(spec.name()));
        }
    }

    if let Some(nested) = spec.nested() {
        match value {
            Some(Value::Object(map)) => node.extend_children(validate_fields(nested, map)),
            Some(Value::Array(items)) => {
                node.extend_children(items.iter().enumerate().filter_map(|(index, item)| {
                    validate_element(nested, &index.to_string(), item)
                }));
            }
            _ => node.push_constraint(NESTED_VALIDATION, nested_message(spec.name())),
        }
    }

    (!node.is_empty()).then_some(node)
}

fn validate_element(schema: &ClassSchema, property: &str, item: &Value) -> Option<ViolationNode> {
    let mut node = ViolationNode::new(property);
    match item {
        Value::Object(map) => node.extend_children(validate_fields(schema, map)),
        _ => node.push_constraint(NESTED_VALIDATION, nested_message(property)),
    }
    (!node.is_empty()).then_some(node)
}

fn nested_message(property: &str) -> String {
    format!("nested property {property} must be either object or array")
}

/// Machinery backed by [`BuiltinTransformer`] and [`BuiltinConstraintValidator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMachinery;

#[async_trait]
impl ClassMachinery for BuiltinMachinery {
    async fn load(&self) -> Result<ClassToolkit, MachineryError> {
        Ok(ClassToolkit::new(
            Arc::new(BuiltinTransformer),
            Arc::new(BuiltinConstraintValidator),
        ))
    }
}

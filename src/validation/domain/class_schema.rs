//! Declarative class schemas registered through a builder.
//!
//! A [`ClassSchema`] plays the role of an annotated class: every field
//! carries an ordered constraint list and may point at a nested schema whose
//! values are validated recursively.

use super::constraint::Constraint;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Declared field of a class schema.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    constraints: Vec<Constraint>,
    nested: Option<Arc<ClassSchema>>,
}

impl FieldSpec {
    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the constraints in declaration order.
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Returns the nested schema validated for this field, if any.
    #[must_use]
    pub fn nested(&self) -> Option<&ClassSchema> {
        self.nested.as_deref()
    }

    /// Returns `true` when the field is marked [`Constraint::IsOptional`].
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.constraints
            .iter()
            .any(|constraint| matches!(constraint, Constraint::IsOptional))
    }
}

/// Type descriptor with per-field constraint metadata.
///
/// # Examples
///
/// ```
/// use zyro_utils::validation::domain::{ClassSchema, Constraint};
///
/// let address = ClassSchema::builder("Address")
///     .field("city", [Constraint::IsString])
///     .build();
///
/// let user = ClassSchema::builder("User")
///     .field("name", [Constraint::IsString, Constraint::MinLength(2)])
///     .field("age", [Constraint::IsInt, Constraint::Min(0.0)])
///     .nested("address", address, [])
///     .build();
///
/// assert_eq!(user.name(), "User");
/// assert_eq!(user.fields().len(), 3);
/// assert!(user.field("address").and_then(|f| f.nested()).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ClassSchema {
    name: String,
    fields: Vec<FieldSpec>,
}

impl ClassSchema {
    /// Starts registering a schema with the given type name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ClassSchemaBuilder {
        ClassSchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Returns the type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared fields in registration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a declared field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Builder for [`ClassSchema`].
#[derive(Debug, Clone)]
pub struct ClassSchemaBuilder {
    name: String,
    fields: Vec<FieldSpec>,
}

impl ClassSchemaBuilder {
    /// Declares a field with its constraints.
    ///
    /// Declaring the same field twice appends the new constraints to the
    /// existing ones.
    #[must_use]
    pub fn field(
        mut self,
        name: impl Into<String>,
        constraints: impl IntoIterator<Item = Constraint>,
    ) -> Self {
        self.upsert(name.into(), |field| field.constraints.extend(constraints));
        self
    }

    /// Declares a field whose value is validated against a nested schema.
    ///
    /// Object values are validated recursively; array values are validated
    /// element by element. Any other value is reported as a
    /// `nestedValidation` violation.
    #[must_use]
    pub fn nested(
        mut self,
        name: impl Into<String>,
        schema: ClassSchema,
        constraints: impl IntoIterator<Item = Constraint>,
    ) -> Self {
        self.upsert(name.into(), |field| {
            field.constraints.extend(constraints);
            field.nested = Some(Arc::new(schema));
        });
        self
    }

    /// Finishes registration.
    #[must_use]
    pub fn build(self) -> ClassSchema {
        ClassSchema {
            name: self.name,
            fields: self.fields,
        }
    }

    fn upsert(&mut self, name: String, update: impl FnOnce(&mut FieldSpec)) {
        if let Some(existing) = self.fields.iter_mut().find(|field| field.name == name) {
            update(existing);
            return;
        }
        let mut field = FieldSpec {
            name,
            constraints: Vec::new(),
            nested: None,
        };
        update(&mut field);
        self.fields.push(field);
    }
}

/// Instance of a class schema built from plain input.
///
/// Only declared fields are kept; nested schema fields hold their own
/// coerced objects.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassInstance {
    class_name: String,
    fields: Map<String, Value>,
}

impl ClassInstance {
    /// Creates an instance from already-coerced fields.
    #[must_use]
    pub fn new(class_name: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            class_name: class_name.into(),
            fields,
        }
    }

    /// Returns the schema type name this instance was built for.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the instance fields.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Returns the value of one field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Converts the instance into a JSON object.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

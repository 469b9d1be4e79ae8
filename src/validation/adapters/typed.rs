//! Throwing-validate schemas backed by serde and the `validator` crate.
//!
//! Deserializing into `T` is the coercion step; `Validate` rules run on the
//! typed value. Every field that fails to deserialize, and every failing
//! rule, becomes one inner failure.

use crate::validation::ports::{SchemaProbe, ThrowingValidate, ThrownFailure, ValidateOptions};
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use serde_path_to_error::{Path, Segment};
use std::{fmt, marker::PhantomData};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

const TYPE_ERROR: &str = "typeError";
const VALIDATION_ERROR: &str = "ValidationError";

/// Schema for any `T` that can be deserialized, re-serialized, and validated.
///
/// # Examples
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use validator::Validate;
/// use zyro_utils::validation::adapters::TypedSchema;
///
/// #[derive(Serialize, Deserialize, Validate)]
/// struct Signup {
///     #[validate(length(min = 1))]
///     name: String,
/// }
///
/// let schema = TypedSchema::<Signup>::new();
/// # let _ = schema;
/// ```
pub struct TypedSchema<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> TypedSchema<T> {
    /// Creates the schema.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> Default for TypedSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TypedSchema<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TypedSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedSchema")
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

#[async_trait]
impl<T> ThrowingValidate for TypedSchema<T>
where
    T: DeserializeOwned + Serialize + Validate + Send + Sync + 'static,
{
    async fn validate(&self, input: &Value, options: ValidateOptions) -> Result<Value, ThrownFailure> {
        let typed: T = deserialize_fields(input, options)?;

        if let Err(errors) = typed.validate() {
            let mut inner = Vec::new();
            collect_failures(&errors, "", &mut inner);
            if options.abort_early {
                inner.truncate(1);
            }
            return Err(summarize(inner, VALIDATION_ERROR));
        }

        let mut output = serde_json::to_value(&typed)
            .map_err(|err| ThrownFailure::new(err.to_string()).with_kind(TYPE_ERROR))?;

        if !options.strip_unknown {
            restore_unknown_keys(input, &mut output);
        }
        Ok(output)
    }
}

impl<T> SchemaProbe for TypedSchema<T>
where
    T: DeserializeOwned + Serialize + Validate + Send + Sync + 'static,
{
    fn as_throwing(&self) -> Option<&dyn ThrowingValidate> {
        Some(self)
    }
}

/// Deserializes `T`, reporting one type failure per offending top-level field.
///
/// A field that fails is dropped and deserialization retried, so later
/// fields are still checked. Retrying stops at the first error that no
/// remaining field accounts for, such as the dropped field now missing.
fn deserialize_fields<T: DeserializeOwned>(
    input: &Value,
    options: ValidateOptions,
) -> Result<T, ThrownFailure> {
    let mut remaining = input.clone();
    let mut inner = Vec::new();

    loop {
        let err = match serde_path_to_error::deserialize::<_, T>(&remaining) {
            Ok(typed) if inner.is_empty() => return Ok(typed),
            Ok(_) => break,
            Err(err) => err,
        };

        let failure = ThrownFailure::at(dotted(err.path()), err.inner().to_string(), TYPE_ERROR);
        let dropped = top_level_key(err.path()).and_then(|key| {
            remaining
                .as_object_mut()
                .and_then(|fields| fields.remove(&key))
        });

        if dropped.is_none() {
            if inner.is_empty() {
                inner.push(failure);
            }
            break;
        }
        inner.push(failure);
        if options.abort_early {
            break;
        }
    }

    Err(summarize(inner, TYPE_ERROR))
}

fn summarize(inner: Vec<ThrownFailure>, kind: &str) -> ThrownFailure {
    let summary = match inner.len() {
        1 => "1 error occurred".to_owned(),
        count => format!("{count} errors occurred"),
    };
    ThrownFailure::new(summary).with_kind(kind).with_inner(inner)
}

fn top_level_key(path: &Path) -> Option<String> {
    path.iter().next().and_then(|segment| match segment {
        Segment::Map { key } => Some(key.clone()),
        _ => None,
    })
}

fn dotted(path: &Path) -> String {
    path.iter()
        .map(|segment| match segment {
            Segment::Seq { index } => index.to_string(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Walks validator errors in field-name order, building dotted paths.
fn collect_failures(errors: &ValidationErrors, prefix: &str, out: &mut Vec<ThrownFailure>) {
    let mut fields: Vec<(String, &ValidationErrorsKind)> = errors
        .errors()
        .iter()
        .map(|(field, kind)| (field.to_string(), kind))
        .collect();
    fields.sort_by(|(left, _), (right, _)| left.cmp(right));

    for (field, kind) in fields {
        let path = join_path(prefix, &field);
        match kind {
            ValidationErrorsKind::Field(failures) => {
                out.extend(failures.iter().map(|failure| {
                    let message = failure.message.as_ref().map_or_else(
                        || format!("{path} failed `{}` validation", failure.code),
                        ToString::to_string,
                    );
                    ThrownFailure::at(path.clone(), message, failure.code.to_string())
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect_failures(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_failures(nested, &join_path(&path, &index.to_string()), out);
                }
            }
        }
    }
}

fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}.{segment}")
    }
}

fn restore_unknown_keys(input: &Value, output: &mut Value) {
    if let (Some(source), Some(target)) = (input.as_object(), output.as_object_mut()) {
        for (key, value) in source {
            if !target.contains_key(key) {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

//! The validation adapter: detect the schema family, run it, normalize.

use crate::validation::{
    adapters::BuiltinMachinery,
    domain::{
        ClassSchema, ErrorDetail, INTERNAL_ERROR_KIND, UNKNOWN_KIND, ValidationResult,
        flatten_violations,
    },
    error::{MachineryError, ValidatorError},
    ports::{
        ClassMachinery, ClassToolkit, IssueReport, SafeParse, SafeParseOutcome, SchemaProbe,
        ThrowingValidate, ThrownFailure, ValidateOptions,
    },
};
use serde_json::Value;
use std::{fmt, sync::Arc};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

const SAFE_PARSE_FALLBACK_MESSAGE: &str = "safe-parse validation error";
const THROWN_FALLBACK_MESSAGE: &str = "validation error";

/// Schema family detected by capability probing.
#[derive(Clone, Copy)]
pub enum SchemaKind<'a> {
    /// Returns issues in-band.
    SafeParse(&'a dyn SafeParse),
    /// Returns the value or a [`ThrownFailure`].
    Throwing(&'a dyn ThrowingValidate),
    /// Declarative class descriptor.
    Class(&'a ClassSchema),
}

impl<'a> SchemaKind<'a> {
    /// Probes the schema in fixed order: safe-parse, throwing, class.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::UnsupportedSchema`] when no capability matches.
    pub fn detect(schema: &'a dyn SchemaProbe) -> Result<Self, ValidatorError> {
        if let Some(safe_parse) = schema.as_safe_parse() {
            return Ok(Self::SafeParse(safe_parse));
        }
        if let Some(throwing) = schema.as_throwing() {
            return Ok(Self::Throwing(throwing));
        }
        if let Some(class) = schema.as_class() {
            return Ok(Self::Class(class));
        }
        Err(ValidatorError::UnsupportedSchema)
    }

    /// Short label for diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SafeParse(_) => "safe-parse",
            Self::Throwing(_) => "throwing",
            Self::Class(_) => "class",
        }
    }
}

impl fmt::Debug for SchemaKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(class) => write!(f, "Class({})", class.name()),
            other => f.write_str(other.label()),
        }
    }
}

/// Validates inputs against any supported schema family.
///
/// The class machinery is loaded on first use and cached once loaded; a
/// failed load is retried on the next class validation.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use zyro_utils::validation::{
///     domain::{ClassSchema, Constraint},
///     services::Validator,
/// };
///
/// # tokio::runtime::Builder::new_current_thread().build().map(|rt| rt.block_on(async {
/// let schema = ClassSchema::builder("User")
///     .field("name", [Constraint::IsString])
///     .build();
///
/// let result = Validator::new()
///     .validate(&schema, &json!({"name": 123}))
///     .await
///     .expect("class schemas are supported");
///
/// let errors = result.errors().expect("invalid input");
/// assert_eq!(errors[0].path, "name");
/// assert_eq!(errors[0].kind(), Some("isString"));
/// # })).expect("runtime");
/// ```
pub struct Validator {
    machinery: Arc<dyn ClassMachinery>,
    toolkit: OnceCell<ClassToolkit>,
}

impl Validator {
    /// Creates a validator using the built-in class machinery.
    #[must_use]
    pub fn new() -> Self {
        Self::with_machinery(Arc::new(BuiltinMachinery))
    }

    /// Creates a validator with custom class machinery.
    #[must_use]
    pub fn with_machinery(machinery: Arc<dyn ClassMachinery>) -> Self {
        Self {
            machinery,
            toolkit: OnceCell::new(),
        }
    }

    /// Validates `input` against `schema`.
    ///
    /// Invalid input is reported as [`ValidationResult::Failure`], never as
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::UnsupportedSchema`] when the schema exposes
    /// no supported capability.
    pub async fn validate(
        &self,
        schema: &dyn SchemaProbe,
        input: &Value,
    ) -> Result<ValidationResult<Value>, ValidatorError> {
        let kind = SchemaKind::detect(schema)?;
        debug!(kind = kind.label(), "dispatching validation");

        let result = match kind {
            SchemaKind::SafeParse(parser) => normalize_safe_parse(parser.safe_parse(input).await),
            SchemaKind::Throwing(thrower) => {
                normalize_thrown(thrower.validate(input, ValidateOptions::collect_all()).await)
            }
            SchemaKind::Class(class) => self.validate_class(class, input).await,
        };
        Ok(result)
    }

    async fn validate_class(&self, schema: &ClassSchema, input: &Value) -> ValidationResult<Value> {
        self.run_class(schema, input).await.unwrap_or_else(|err| {
            warn!(class = schema.name(), error = %err, "class validation machinery failed");
            ValidationResult::Failure(vec![
                ErrorDetail::new("", format!("error processing class schema: {err}"))
                    .with_kind(INTERNAL_ERROR_KIND),
            ])
        })
    }

    async fn run_class(
        &self,
        schema: &ClassSchema,
        input: &Value,
    ) -> Result<ValidationResult<Value>, MachineryError> {
        let toolkit = self
            .toolkit
            .get_or_try_init(|| self.machinery.load())
            .await?;

        let instance = toolkit.transformer().to_instance(schema, input)?;
        let violations = toolkit.validator().validate(schema, &instance)?;

        let errors = flatten_violations(&violations);
        if errors.is_empty() {
            return Ok(ValidationResult::Success(instance.into_value()));
        }
        Ok(ValidationResult::Failure(errors))
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("machinery_loaded", &self.toolkit.initialized())
            .finish_non_exhaustive()
    }
}

fn normalize_safe_parse(outcome: SafeParseOutcome) -> ValidationResult<Value> {
    let report = match outcome {
        SafeParseOutcome::Success(data) => return ValidationResult::Success(data),
        SafeParseOutcome::Failure(report) => report,
    };

    let mut errors: Vec<ErrorDetail> = report
        .as_ref()
        .map(IssueReport::issue_list)
        .unwrap_or_default()
        .iter()
        .map(|issue| {
            ErrorDetail::new(issue.dotted_path(), issue.message.clone()).with_kind(issue.code.clone())
        })
        .collect();

    if errors.is_empty() {
        let message = report
            .and_then(|error_object| error_object.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| SAFE_PARSE_FALLBACK_MESSAGE.to_owned());
        errors.push(ErrorDetail::new("", message).with_kind(UNKNOWN_KIND));
    }

    ValidationResult::Failure(errors)
}

fn normalize_thrown(outcome: Result<Value, ThrownFailure>) -> ValidationResult<Value> {
    let failure = match outcome {
        Ok(data) => return ValidationResult::Success(data),
        Err(failure) => failure,
    };

    if failure.inner.is_empty() {
        let detail = ErrorDetail::new(
            non_empty(failure.path).unwrap_or_default(),
            non_empty(failure.message).unwrap_or_else(|| THROWN_FALLBACK_MESSAGE.to_owned()),
        )
        .with_kind(non_empty(failure.kind).unwrap_or_else(|| UNKNOWN_KIND.to_owned()));
        return ValidationResult::Failure(vec![detail]);
    }

    let errors = failure
        .inner
        .into_iter()
        .map(|inner| {
            ErrorDetail::new(
                inner.path.unwrap_or_default(),
                inner.message.unwrap_or_else(|| THROWN_FALLBACK_MESSAGE.to_owned()),
            )
            .with_optional_kind(inner.kind)
        })
        .collect();
    ValidationResult::Failure(errors)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

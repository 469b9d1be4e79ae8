//! Ports for the schema families the adapter understands.
//!
//! Each family reports failures its own way. The adapter only needs the
//! capabilities below and discovers them through [`SchemaProbe`].

use crate::validation::domain::ClassSchema;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// One segment of an issue path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object key.
    Key(String),
    /// Array index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Structured issue reported by a safe-parse schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Location of the offending value.
    pub path: Vec<PathSegment>,
    /// Human-readable message.
    pub message: String,
    /// Classification code.
    pub code: String,
}

impl Issue {
    /// Creates an issue.
    #[must_use]
    pub fn new(
        path: impl IntoIterator<Item = PathSegment>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into_iter().collect(),
            message: message.into(),
            code: code.into(),
        }
    }

    /// Returns the path segments joined with `.`.
    #[must_use]
    pub fn dotted_path(&self) -> String {
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Error object attached to a failed safe-parse.
///
/// Older library releases name the list `errors`, newer ones `issues`;
/// either may be populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueReport {
    /// Issue list under its current name.
    pub issues: Option<Vec<Issue>>,
    /// Issue list under its legacy name.
    pub errors: Option<Vec<Issue>>,
    /// Top-level summary message.
    pub message: Option<String>,
}

impl IssueReport {
    /// Creates a report using the `issues` field.
    #[must_use]
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        Self {
            issues: Some(issues),
            ..Self::default()
        }
    }

    /// Creates a report using the legacy `errors` field.
    #[must_use]
    pub fn from_legacy_errors(errors: Vec<Issue>) -> Self {
        Self {
            errors: Some(errors),
            ..Self::default()
        }
    }

    /// Sets the summary message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns `issues` when present, otherwise `errors`, otherwise nothing.
    #[must_use]
    pub fn issue_list(&self) -> &[Issue] {
        self.issues
            .as_deref()
            .or(self.errors.as_deref())
            .unwrap_or_default()
    }
}

/// Outcome of a safe-parse call.
#[derive(Debug, Clone, PartialEq)]
pub enum SafeParseOutcome {
    /// Parsed data.
    Success(Value),
    /// Parsing failed; the error object may be missing.
    Failure(Option<IssueReport>),
}

/// Schema family that never fails its call and reports issues in-band.
#[async_trait]
pub trait SafeParse: Send + Sync {
    /// Parses the input.
    async fn safe_parse(&self, input: &Value) -> SafeParseOutcome;
}

/// Options forwarded to throwing-validate schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Stop at the first failing field.
    pub abort_early: bool,
    /// Drop keys the schema does not declare.
    pub strip_unknown: bool,
}

impl ValidateOptions {
    /// Options used by the adapter: report every field, strip unknown keys.
    #[must_use]
    pub const fn collect_all() -> Self {
        Self {
            abort_early: false,
            strip_unknown: true,
        }
    }
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self::collect_all()
    }
}

/// Failure raised by a throwing-validate schema.
///
/// Either describes a single problem through its own fields or carries one
/// inner failure per invalid field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThrownFailure {
    /// Path of the offending field.
    pub path: Option<String>,
    /// Human-readable message.
    pub message: Option<String>,
    /// Classification code.
    pub kind: Option<String>,
    /// Per-field failures.
    pub inner: Vec<ThrownFailure>,
}

impl ThrownFailure {
    /// Creates a failure with only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Creates a failure for one field.
    #[must_use]
    pub fn at(path: impl Into<String>, message: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            message: Some(message.into()),
            kind: Some(kind.into()),
            inner: Vec::new(),
        }
    }

    /// Sets the classification code.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Sets the inner failures.
    #[must_use]
    pub fn with_inner(mut self, inner: Vec<Self>) -> Self {
        self.inner = inner;
        self
    }
}

/// Schema family that returns the coerced value or fails.
#[async_trait]
pub trait ThrowingValidate: Send + Sync {
    /// Validates the input.
    ///
    /// # Errors
    ///
    /// Returns a [`ThrownFailure`] when the input is invalid.
    async fn validate(&self, input: &Value, options: ValidateOptions) -> Result<Value, ThrownFailure>;
}

/// Capability probe used to detect which family a schema belongs to.
///
/// Every method defaults to `None`; implementors override the ones they
/// support. A value exposing nothing is rejected as unsupported.
pub trait SchemaProbe: Send + Sync {
    /// Exposes the safe-parse capability.
    fn as_safe_parse(&self) -> Option<&dyn SafeParse> {
        None
    }

    /// Exposes the throwing-validate capability. Acts as the family marker.
    fn as_throwing(&self) -> Option<&dyn ThrowingValidate> {
        None
    }

    /// Exposes a declarative class descriptor.
    fn as_class(&self) -> Option<&ClassSchema> {
        None
    }
}

impl SchemaProbe for ClassSchema {
    fn as_class(&self) -> Option<&ClassSchema> {
        Some(self)
    }
}

/// Plain JSON data carries no validation capability.
impl SchemaProbe for Value {}

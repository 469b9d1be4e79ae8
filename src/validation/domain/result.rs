//! Normalized validation outcome shared by every schema family.

use serde::{
    Deserialize, Serialize,
    ser::{SerializeStruct, Serializer},
};

/// Classification used when a schema family reports no code of its own.
pub const UNKNOWN_KIND: &str = "unknown";

/// Classification used when the validation machinery itself failed.
pub const INTERNAL_ERROR_KIND: &str = "internal_error";

/// One field-level validation failure.
///
/// # Examples
///
/// ```
/// use zyro_utils::validation::domain::ErrorDetail;
///
/// let detail = ErrorDetail::new("address.city", "Required").with_kind("invalid_type");
/// assert_eq!(detail.path, "address.city");
/// assert_eq!(detail.kind(), Some("invalid_type"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Dot-joined field path. Empty when the failure is not tied to a field.
    pub path: String,
    /// Human-readable description of the failure.
    pub message: String,
    /// Classification code reported by the schema family.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ErrorDetail {
    /// Creates a detail without a classification.
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind: None,
        }
    }

    /// Sets the classification code.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Sets an optional classification code.
    #[must_use]
    pub fn with_optional_kind(mut self, kind: Option<String>) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the classification code, if any.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }
}

/// Outcome of validating one input against one schema.
///
/// A result is either a success carrying the validated (possibly coerced)
/// data or a failure carrying at least one [`ErrorDetail`]. Callers branch
/// on the variant before touching data or errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<T> {
    /// The input satisfied the schema.
    Success(T),
    /// The input violated the schema.
    Failure(Vec<ErrorDetail>),
}

impl<T> ValidationResult<T> {
    /// Returns `true` for the success variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the validated data on success.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Returns the error list on failure.
    #[must_use]
    pub fn errors(&self) -> Option<&[ErrorDetail]> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the error list when the result is a failure.
    pub fn into_result(self) -> Result<T, Vec<ErrorDetail>> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(errors) => Err(errors),
        }
    }

    /// Maps the success payload, leaving failures untouched.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ValidationResult<U> {
        match self {
            Self::Success(data) => ValidationResult::Success(f(data)),
            Self::Failure(errors) => ValidationResult::Failure(errors),
        }
    }
}

impl<T: Serialize> Serialize for ValidationResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        match self {
            Self::Success(data) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            Self::Failure(errors) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("errors", errors)?;
            }
        }
        state.end()
    }
}

//! Field constraints attached to class schemas.

use crate::objects;
use regex::Regex;
use serde_json::Value;
use std::{fmt, sync::Arc};
use validator::ValidateEmail;

/// Predicate signature for [`Constraint::Custom`]. `None` means the field is absent.
pub type CustomCheck = Arc<dyn Fn(Option<&Value>) -> bool + Send + Sync>;

/// A single declarative check on one field.
///
/// Names follow the usual decorator vocabulary (`isString`, `minLength`, ...)
/// and are reported verbatim as the error `type`.
#[derive(Clone)]
pub enum Constraint {
    /// Value must be present and not null.
    IsDefined,
    /// Skips every other check on the field when the value is absent or null.
    IsOptional,
    /// Value must be a string.
    IsString,
    /// Value must be a number.
    IsNumber,
    /// Value must be an integral number.
    IsInt,
    /// Value must be a boolean.
    IsBoolean,
    /// Value must be an array.
    IsArray,
    /// Value must not be absent, null, or the empty string.
    IsNotEmpty,
    /// Value must be a string shaped like an e-mail address.
    IsEmail,
    /// String value must have at least this many characters.
    MinLength(usize),
    /// String value must have at most this many characters.
    MaxLength(usize),
    /// Numeric value must not be below this bound.
    Min(f64),
    /// Numeric value must not be above this bound.
    Max(f64),
    /// Value must equal one of the listed values.
    IsIn(Vec<Value>),
    /// String value must match the pattern.
    Matches(Regex),
    /// User-defined check.
    Custom {
        /// Constraint name reported as the error type.
        name: String,
        /// Message template; `$property` is replaced with the field name.
        message: String,
        /// The check itself.
        check: CustomCheck,
    },
}

impl Constraint {
    /// Builds a custom constraint.
    #[must_use]
    pub fn custom(
        name: impl Into<String>,
        message: impl Into<String>,
        check: impl Fn(Option<&Value>) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::Custom {
            name: name.into(),
            message: message.into(),
            check: Arc::new(check),
        }
    }

    /// Returns the constraint name used as the error type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::IsDefined => "isDefined",
            Self::IsOptional => "isOptional",
            Self::IsString => "isString",
            Self::IsNumber => "isNumber",
            Self::IsInt => "isInt",
            Self::IsBoolean => "isBoolean",
            Self::IsArray => "isArray",
            Self::IsNotEmpty => "isNotEmpty",
            Self::IsEmail => "isEmail",
            Self::MinLength(_) => "minLength",
            Self::MaxLength(_) => "maxLength",
            Self::Min(_) => "min",
            Self::Max(_) => "max",
            Self::IsIn(_) => "isIn",
            Self::Matches(_) => "matches",
            Self::Custom { name, .. } => name.as_str(),
        }
    }

    /// Renders the violation message for the named property.
    #[must_use]
    pub fn message(&self, property: &str) -> String {
        match self {
            Self::IsDefined => format!("{property} should not be null or undefined"),
            Self::IsOptional => String::new(),
            Self::IsString => format!("{property} must be a string"),
            Self::IsNumber => {
                format!("{property} must be a number conforming to the specified constraints")
            }
            Self::IsInt => format!("{property} must be an integer number"),
            Self::IsBoolean => format!("{property} must be a boolean value"),
            Self::IsArray => format!("{property} must be an array"),
            Self::IsNotEmpty => format!("{property} should not be empty"),
            Self::IsEmail => format!("{property} must be an email"),
            Self::MinLength(min) => {
                format!("{property} must be longer than or equal to {min} characters")
            }
            Self::MaxLength(max) => {
                format!("{property} must be shorter than or equal to {max} characters")
            }
            Self::Min(min) => format!("{property} must not be less than {min}"),
            Self::Max(max) => format!("{property} must not be greater than {max}"),
            Self::IsIn(values) => format!(
                "{property} must be one of the following values: {}",
                values
                    .iter()
                    .map(display_value)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Self::Matches(pattern) => {
                format!("{property} must match /{}/ regular expression", pattern.as_str())
            }
            Self::Custom { message, .. } => message.replace("$property", property),
        }
    }

    /// Returns `true` when the value satisfies the constraint.
    #[must_use]
    pub fn check(&self, value: Option<&Value>) -> bool {
        match self {
            Self::IsDefined => value.is_some_and(|v| !v.is_null()),
            Self::IsOptional => true,
            Self::IsString => matches!(value, Some(Value::String(_))),
            Self::IsNumber => matches!(value, Some(Value::Number(_))),
            Self::IsInt => value.is_some_and(|v| v.is_i64() || v.is_u64()),
            Self::IsBoolean => matches!(value, Some(Value::Bool(_))),
            Self::IsArray => matches!(value, Some(Value::Array(_))),
            Self::IsNotEmpty => match value {
                None | Some(Value::Null) => false,
                Some(Value::String(text)) => !text.is_empty(),
                Some(_) => true,
            },
            Self::IsEmail => value.and_then(Value::as_str).is_some_and(|text| text.validate_email()),
            Self::MinLength(min) => char_count(value).is_some_and(|count| count >= *min),
            Self::MaxLength(max) => char_count(value).is_some_and(|count| count <= *max),
            Self::Min(min) => value.and_then(Value::as_f64).is_some_and(|n| n >= *min),
            Self::Max(max) => value.and_then(Value::as_f64).is_some_and(|n| n <= *max),
            Self::IsIn(allowed) => {
                value.is_some_and(|v| allowed.iter().any(|candidate| objects::is_equal(v, candidate)))
            }
            Self::Matches(pattern) => value
                .and_then(Value::as_str)
                .is_some_and(|text| pattern.is_match(text)),
            Self::Custom { check, .. } => check(value),
        }
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinLength(n) | Self::MaxLength(n) => write!(f, "{}({n})", self.name()),
            Self::Min(n) | Self::Max(n) => write!(f, "{}({n})", self.name()),
            Self::IsIn(values) => write!(f, "isIn({values:?})"),
            Self::Matches(pattern) => write!(f, "matches(/{}/)", pattern.as_str()),
            _ => f.write_str(self.name()),
        }
    }
}

fn char_count(value: Option<&Value>) -> Option<usize> {
    value.and_then(Value::as_str).map(|text| text.chars().count())
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

//! Structural safe-parse schemas.
//!
//! A [`ShapeSchema`] describes the expected JSON shape and reports every
//! mismatch as an [`Issue`] instead of failing the call. Unknown object keys
//! are stripped from the parsed output.

use crate::validation::ports::{
    Issue, IssueReport, PathSegment, SafeParse, SafeParseOutcome, SchemaProbe,
};
use async_trait::async_trait;
use serde_json::{Map, Value};

const INVALID_TYPE: &str = "invalid_type";
const TOO_SMALL: &str = "too_small";
const TOO_BIG: &str = "too_big";

/// Expected shape of a JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A string with optional length bounds.
    String {
        /// Minimum length in characters.
        min_len: Option<usize>,
        /// Maximum length in characters.
        max_len: Option<usize>,
    },
    /// A number with optional bounds.
    Number {
        /// Inclusive lower bound.
        min: Option<f64>,
        /// Inclusive upper bound.
        max: Option<f64>,
        /// Reject non-integral numbers.
        integer: bool,
    },
    /// A boolean.
    Boolean,
    /// An object with the listed keys.
    Object(Vec<(String, Shape)>),
    /// An array whose elements share one shape.
    Array(Box<Shape>),
    /// The inner shape, or absent.
    Optional(Box<Shape>),
    /// Anything.
    Any,
}

impl Shape {
    /// Any string.
    #[must_use]
    pub const fn string() -> Self {
        Self::String {
            min_len: None,
            max_len: None,
        }
    }

    /// Any number.
    #[must_use]
    pub const fn number() -> Self {
        Self::Number {
            min: None,
            max: None,
            integer: false,
        }
    }

    /// Any integral number.
    #[must_use]
    pub const fn integer() -> Self {
        Self::Number {
            min: None,
            max: None,
            integer: true,
        }
    }

    /// Any boolean.
    #[must_use]
    pub const fn boolean() -> Self {
        Self::Boolean
    }

    /// Object with the given keys.
    #[must_use]
    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, Self)>) -> Self {
        Self::Object(fields.into_iter().map(|(key, shape)| (key.into(), shape)).collect())
    }

    /// Array of the given element shape.
    #[must_use]
    pub fn array(item: Self) -> Self {
        Self::Array(Box::new(item))
    }

    /// Makes this shape optional.
    #[must_use]
    pub fn optional(self) -> Self {
        Self::Optional(Box::new(self))
    }

    /// Lower bound: string length or numeric value. Other shapes ignore it.
    #[must_use]
    pub fn min(self, bound: f64) -> Self {
        match self {
            Self::String { max_len, .. } => Self::String {
                min_len: Some(length_bound(bound)),
                max_len,
            },
            Self::Number { max, integer, .. } => Self::Number {
                min: Some(bound),
                max,
                integer,
            },
            other => other,
        }
    }

    /// Upper bound: string length or numeric value. Other shapes ignore it.
    #[must_use]
    pub fn max(self, bound: f64) -> Self {
        match self {
            Self::String { min_len, .. } => Self::String {
                min_len,
                max_len: Some(length_bound(bound)),
            },
            Self::Number { min, integer, .. } => Self::Number {
                min,
                max: Some(bound),
                integer,
            },
            other => other,
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "length bounds are small non-negative whole numbers"
)]
fn length_bound(bound: f64) -> usize {
    bound.max(0.0) as usize
}

/// Safe-parse schema over a [`Shape`].
///
/// # Examples
///
/// ```
/// use zyro_utils::validation::adapters::{Shape, ShapeSchema};
/// use zyro_utils::validation::ports::SafeParseOutcome;
/// use serde_json::json;
///
/// let schema = ShapeSchema::new(Shape::object([("name", Shape::string())]));
/// let outcome = schema.parse_value(&json!({"name": "Zyro", "extra": 1}));
/// assert_eq!(outcome, SafeParseOutcome::Success(json!({"name": "Zyro"})));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSchema {
    root: Shape,
}

impl ShapeSchema {
    /// Wraps a root shape.
    #[must_use]
    pub const fn new(root: Shape) -> Self {
        Self { root }
    }

    /// Returns the root shape.
    #[must_use]
    pub const fn root(&self) -> &Shape {
        &self.root
    }

    /// Parses synchronously.
    #[must_use]
    pub fn parse_value(&self, input: &Value) -> SafeParseOutcome {
        let mut issues = Vec::new();
        let mut path = Vec::new();
        let parsed = parse(&self.root, Some(input), &mut path, &mut issues);

        if issues.is_empty() {
            SafeParseOutcome::Success(parsed.unwrap_or(Value::Null))
        } else {
            let summary = format!("{} validation issue(s)", issues.len());
            SafeParseOutcome::Failure(Some(IssueReport::from_issues(issues).with_message(summary)))
        }
    }
}

#[async_trait]
impl SafeParse for ShapeSchema {
    async fn safe_parse(&self, input: &Value) -> SafeParseOutcome {
        self.parse_value(input)
    }
}

impl SchemaProbe for ShapeSchema {
    fn as_safe_parse(&self) -> Option<&dyn SafeParse> {
        Some(self)
    }
}

/// Returns the parsed value, or `None` when absent or invalid.
fn parse(
    shape: &Shape,
    candidate: Option<&Value>,
    path: &mut Vec<PathSegment>,
    issues: &mut Vec<Issue>,
) -> Option<Value> {
    if let Shape::Optional(inner) = shape {
        return candidate.and_then(|present| parse(inner, Some(present), path, issues));
    }
    if matches!(shape, Shape::Any) {
        return candidate.cloned();
    }

    let Some(value) = candidate else {
        issues.push(Issue::new(path.clone(), "Required", INVALID_TYPE));
        return None;
    };

    match (shape, value) {
        (Shape::String { min_len, max_len }, Value::String(text)) => {
            check_length(text, *min_len, *max_len, path, issues);
            Some(value.clone())
        }
        (Shape::Number { min, max, integer }, Value::Number(number)) => {
            if *integer && !(number.is_i64() || number.is_u64()) {
                issues.push(Issue::new(
                    path.clone(),
                    "Expected integer, received float",
                    INVALID_TYPE,
                ));
                return None;
            }
            check_bounds(number.as_f64().unwrap_or_default(), *min, *max, path, issues);
            Some(value.clone())
        }
        (Shape::Boolean, Value::Bool(_)) => Some(value.clone()),
        (Shape::Object(fields), Value::Object(source)) => {
            let mut output = Map::new();
            for (key, field_shape) in fields {
                path.push(PathSegment::Key(key.clone()));
                if let Some(parsed) = parse(field_shape, source.get(key), path, issues) {
                    output.insert(key.clone(), parsed);
                }
                path.pop();
            }
            Some(Value::Object(output))
        }
        (Shape::Array(item), Value::Array(items)) => {
            let mut output = Vec::with_capacity(items.len());
            for (index, element) in items.iter().enumerate() {
                path.push(PathSegment::Index(index));
                if let Some(parsed) = parse(item, Some(element), path, issues) {
                    output.push(parsed);
                }
                path.pop();
            }
            Some(Value::Array(output))
        }
        (expected, received) => {
            issues.push(Issue::new(
                path.clone(),
                format!(
                    "Expected {}, received {}",
                    expected_name(expected),
                    received_name(received)
                ),
                INVALID_TYPE,
            ));
            None
        }
    }
}

fn check_length(
    text: &str,
    min_len: Option<usize>,
    max_len: Option<usize>,
    path: &[PathSegment],
    issues: &mut Vec<Issue>,
) {
    let length = text.chars().count();
    if let Some(min) = min_len.filter(|bound| length < *bound) {
        issues.push(Issue::new(
            path.to_vec(),
            format!("String must contain at least {min} character(s)"),
            TOO_SMALL,
        ));
    }
    if let Some(max) = max_len.filter(|bound| length > *bound) {
        issues.push(Issue::new(
            path.to_vec(),
            format!("String must contain at most {max} character(s)"),
            TOO_BIG,
        ));
    }
}

fn check_bounds(
    number: f64,
    min: Option<f64>,
    max: Option<f64>,
    path: &[PathSegment],
    issues: &mut Vec<Issue>,
) {
    if let Some(lower) = min.filter(|bound| number < *bound) {
        issues.push(Issue::new(
            path.to_vec(),
            format!("Number must be greater than or equal to {lower}"),
            TOO_SMALL,
        ));
    }
    if let Some(upper) = max.filter(|bound| number > *bound) {
        issues.push(Issue::new(
            path.to_vec(),
            format!("Number must be less than or equal to {upper}"),
            TOO_BIG,
        ));
    }
}

const fn expected_name(shape: &Shape) -> &'static str {
    match shape {
        Shape::String { .. } => "string",
        Shape::Number { integer: true, .. } => "integer",
        Shape::Number { .. } => "number",
        Shape::Boolean => "boolean",
        Shape::Object(_) => "object",
        Shape::Array(_) => "array",
        Shape::Optional(_) | Shape::Any => "any",
    }
}

const fn received_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Structural helpers for JSON values.
//!
//! Deep copies need no helper: `serde_json::Value` is `Clone`.

use serde_json::{Number, Value};
use std::cmp::Ordering;

/// Deep structural equality.
///
/// Numbers compare by value, so `1` equals `1.0`. Object key order is
/// irrelevant; array order is not.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use zyro_utils::objects::is_equal;
///
/// assert!(is_equal(&json!({"a": 1, "b": [1, 2]}), &json!({"b": [1, 2], "a": 1.0})));
/// assert!(!is_equal(&json!([1, 2]), &json!([2, 1])));
/// ```
#[must_use]
pub fn is_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| is_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| is_equal(x, y)))
        }
        _ => false,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.total_cmp(&y) == Ordering::Equal,
        _ => false,
    }
}

/// Returns `true` only for JSON objects; arrays and null are not objects.
#[must_use]
pub const fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

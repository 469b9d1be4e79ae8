//! JSON file importer.

use crate::filesystem::{error::ImportError, ports::FileImporter};
use async_trait::async_trait;
use camino::Utf8Path;
use serde_json::Value;

const DEFAULT_KEY: &str = "default";

/// Parses files as JSON.
///
/// The default export is the top-level `"default"` member when it holds a
/// truthy value: not `null`, `false`, `0`, or `""`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonImporter;

#[async_trait]
impl FileImporter for JsonImporter {
    type Content = Value;

    async fn import(&self, path: &Utf8Path, bytes: Vec<u8>) -> Result<Value, ImportError> {
        serde_json::from_slice(&bytes).map_err(|err| ImportError::parse(path, err.to_string()))
    }

    fn default_export(&self, content: &Value) -> Option<Value> {
        content.get(DEFAULT_KEY).filter(|value| is_truthy(value)).cloned()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

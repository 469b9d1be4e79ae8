//! Plain-text file importer.

use crate::filesystem::{error::ImportError, ports::FileImporter};
use async_trait::async_trait;
use camino::Utf8Path;

/// Reads files as UTF-8 text. Text has no default export.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextImporter;

#[async_trait]
impl FileImporter for TextImporter {
    type Content = String;

    async fn import(&self, path: &Utf8Path, bytes: Vec<u8>) -> Result<String, ImportError> {
        String::from_utf8(bytes).map_err(|_| ImportError::encoding(path))
    }

    fn default_export(&self, _content: &String) -> Option<String> {
        None
    }
}

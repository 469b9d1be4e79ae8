//! Port for turning file bytes into content.

use crate::filesystem::error::ImportError;
use async_trait::async_trait;
use camino::Utf8Path;

/// Imports the bytes of one file.
#[async_trait]
pub trait FileImporter: Send + Sync {
    /// Imported content type.
    type Content: Send + Sync;

    /// Converts raw bytes read from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError`] when the bytes cannot be converted.
    async fn import(&self, path: &Utf8Path, bytes: Vec<u8>) -> Result<Self::Content, ImportError>;

    /// Returns the default export of `content`, if it has one.
    fn default_export(&self, content: &Self::Content) -> Option<Self::Content>;
}

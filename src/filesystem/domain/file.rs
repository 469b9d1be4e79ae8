//! Loaded file records.

use camino::Utf8PathBuf;

/// A file found while loading a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile<T> {
    /// Entry name without its folder.
    pub name: String,
    /// Absolute path.
    pub path: Utf8PathBuf,
    /// Imported content; `None` when import was disabled or failed.
    pub content: Option<T>,
}

//! Folder loading options.

use super::filter::{NameFilter, should_ignore, should_include};

/// Controls which entries [`FolderLoader`](crate::filesystem::services::FolderLoader)
/// visits and how file content is produced.
///
/// # Examples
///
/// ```
/// use zyro_utils::filesystem::domain::LoadOptions;
///
/// let options = LoadOptions::default()
///     .with_recursive(false)
///     .with_ignore_files(["secrets.json"]);
/// assert!(!options.recursive);
/// assert!(options.auto_import);
/// assert!(!options.admits_file("secrets.json"));
/// ```
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Descend into sub-folders.
    pub recursive: bool,
    /// Read and import each file.
    pub auto_import: bool,
    /// Replace imported content with its default export when present.
    pub auto_default: bool,
    /// Only files matching one of these are loaded; empty admits all.
    pub filter_files: Vec<NameFilter>,
    /// Files matching any of these are skipped.
    pub ignore_files: Vec<NameFilter>,
    /// Only folders matching one of these are entered; empty admits all.
    pub filter_folders: Vec<NameFilter>,
    /// Folders matching any of these are skipped.
    pub ignore_folders: Vec<NameFilter>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            auto_import: true,
            auto_default: true,
            filter_files: Vec::new(),
            ignore_files: Vec::new(),
            filter_folders: Vec::new(),
            ignore_folders: Vec::new(),
        }
    }
}

impl LoadOptions {
    /// Lists files without reading them.
    #[must_use]
    pub fn listing() -> Self {
        Self {
            auto_import: false,
            auto_default: false,
            ..Self::default()
        }
    }

    /// Sets recursion.
    #[must_use]
    pub const fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Sets automatic import.
    #[must_use]
    pub const fn with_auto_import(mut self, auto_import: bool) -> Self {
        self.auto_import = auto_import;
        self
    }

    /// Sets default-export unwrapping.
    #[must_use]
    pub const fn with_auto_default(mut self, auto_default: bool) -> Self {
        self.auto_default = auto_default;
        self
    }

    /// Replaces the file allow-list.
    #[must_use]
    pub fn with_filter_files<F: Into<NameFilter>>(mut self, filters: impl IntoIterator<Item = F>) -> Self {
        self.filter_files = filters.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the file deny-list.
    #[must_use]
    pub fn with_ignore_files<F: Into<NameFilter>>(mut self, filters: impl IntoIterator<Item = F>) -> Self {
        self.ignore_files = filters.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the folder allow-list.
    #[must_use]
    pub fn with_filter_folders<F: Into<NameFilter>>(
        mut self,
        filters: impl IntoIterator<Item = F>,
    ) -> Self {
        self.filter_folders = filters.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the folder deny-list.
    #[must_use]
    pub fn with_ignore_folders<F: Into<NameFilter>>(
        mut self,
        filters: impl IntoIterator<Item = F>,
    ) -> Self {
        self.ignore_folders = filters.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` when a file with this name should be loaded.
    #[must_use]
    pub fn admits_file(&self, name: &str) -> bool {
        !should_ignore(name, &self.ignore_files) && should_include(name, &self.filter_files)
    }

    /// Returns `true` when a folder with this name should be entered.
    #[must_use]
    pub fn admits_folder(&self, name: &str) -> bool {
        self.recursive
            && !should_ignore(name, &self.ignore_folders)
            && should_include(name, &self.filter_folders)
    }
}

//! Folder loading over a capability-scoped directory handle.

use crate::{
    filesystem::{
        domain::{LoadOptions, LoadedFile},
        error::ImportError,
        ports::FileImporter,
    },
    terminal::Terminal,
};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::FileType, fs_utf8::Dir};
use mockable::{Clock, DefaultClock};
use std::{io, sync::Arc};
use tracing::debug;

const LOG_FLAG: &str = "FileSystem";

/// File admitted by the walk, waiting to be imported.
struct PendingFile {
    name: String,
    relative: Utf8PathBuf,
}

/// Loads every admitted file under a folder, depth first, in name order.
///
/// Import failures are written to the terminal as `FileSystem` errors and
/// leave the file content empty; they never abort the load. The walk itself
/// is synchronous; file reads run on tokio's blocking pool.
///
/// # Examples
///
/// ```
/// use zyro_utils::filesystem::{adapters::JsonImporter, domain::LoadOptions, services::FolderLoader};
///
/// # tokio::runtime::Builder::new_current_thread().build().map(|rt| rt.block_on(async {
/// let loader = FolderLoader::new(JsonImporter);
/// let files = loader.load("does/not/exist", &LoadOptions::default()).await;
/// assert!(files.is_empty());
/// # })).expect("runtime");
/// ```
pub struct FolderLoader<I, C: Clock + Send + Sync = DefaultClock> {
    importer: I,
    terminal: Arc<Terminal<C>>,
}

impl<I: FileImporter> FolderLoader<I, DefaultClock> {
    /// Creates a loader that reports failures on standard output.
    #[must_use]
    pub fn new(importer: I) -> Self {
        Self::with_terminal(importer, Arc::new(Terminal::stdout()))
    }
}

impl<I: FileImporter, C: Clock + Send + Sync> FolderLoader<I, C> {
    /// Creates a loader that reports failures on `terminal`.
    #[must_use]
    pub const fn with_terminal(importer: I, terminal: Arc<Terminal<C>>) -> Self {
        Self { importer, terminal }
    }

    /// Loads the folder and returns the files in load order.
    ///
    /// A missing or unreadable folder yields an empty list.
    pub async fn load(
        &self,
        dir: impl AsRef<Utf8Path>,
        options: &LoadOptions,
    ) -> Vec<LoadedFile<I::Content>> {
        self.load_with(dir, options, |_| {}).await
    }

    /// Loads the folder, calling `on_file` for each file as it is loaded.
    pub async fn load_with<F>(
        &self,
        dir: impl AsRef<Utf8Path>,
        options: &LoadOptions,
        mut on_file: F,
    ) -> Vec<LoadedFile<I::Content>>
    where
        F: FnMut(&LoadedFile<I::Content>),
    {
        let root_path = absolutize(dir.as_ref());
        let root = match Dir::open_ambient_dir(&root_path, ambient_authority()) {
            Ok(root) => Arc::new(root),
            Err(err) => {
                debug!(path = %root_path, error = %err, "folder not loadable");
                return Vec::new();
            }
        };

        let mut pending = Vec::new();
        walk(&root, Utf8Path::new(""), options, &mut pending);
        debug!(path = %root_path, files = pending.len(), "folder walked");

        let mut loaded = Vec::with_capacity(pending.len());
        for file in pending {
            let path = root_path.join(&file.relative);
            let content = if options.auto_import {
                self.import(&root, &file.relative, &path, options.auto_default)
                    .await
            } else {
                None
            };
            let entry = LoadedFile {
                name: file.name,
                path,
                content,
            };
            on_file(&entry);
            loaded.push(entry);
        }
        loaded
    }

    async fn import(
        &self,
        root: &Arc<Dir>,
        relative: &Utf8Path,
        path: &Utf8Path,
        auto_default: bool,
    ) -> Option<I::Content> {
        match self.read_and_import(root, relative, path).await {
            Ok(content) if auto_default => Some(
                self.importer
                    .default_export(&content)
                    .unwrap_or(content),
            ),
            Ok(content) => Some(content),
            Err(err) => {
                let message = format!("Failed to import file: {path}\n{err}");
                self.terminal.error(LOG_FLAG, &[&message]);
                None
            }
        }
    }

    async fn read_and_import(
        &self,
        root: &Arc<Dir>,
        relative: &Utf8Path,
        path: &Utf8Path,
    ) -> Result<I::Content, ImportError> {
        let dir = Arc::clone(root);
        let file = relative.to_owned();
        let bytes = tokio::task::spawn_blocking(move || dir.read(&file))
            .await
            .map_err(|join_err| ImportError::read(path, io::Error::other(join_err)))?
            .map_err(|source| ImportError::read(path, source))?;
        self.importer.import(path, bytes).await
    }
}

impl<I, C: Clock + Send + Sync> std::fmt::Debug for FolderLoader<I, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FolderLoader")
            .field("importer", &std::any::type_name::<I>())
            .finish_non_exhaustive()
    }
}

fn absolutize(dir: &Utf8Path) -> Utf8PathBuf {
    std::path::absolute(dir)
        .ok()
        .and_then(|path| Utf8PathBuf::from_path_buf(path).ok())
        .unwrap_or_else(|| dir.to_owned())
}

fn walk(dir: &Dir, relative: &Utf8Path, options: &LoadOptions, out: &mut Vec<PendingFile>) {
    for (name, file_type) in sorted_entries(dir, relative) {
        let child = relative.join(&name);
        if file_type.is_dir() {
            if !options.admits_folder(&name) {
                continue;
            }
            match dir.open_dir(&name) {
                Ok(nested) => walk(&nested, &child, options, out),
                Err(err) => debug!(path = %child, error = %err, "skipping unreadable folder"),
            }
        } else if file_type.is_file() && options.admits_file(&name) {
            out.push(PendingFile {
                name,
                relative: child,
            });
        }
    }
}

/// Lists a folder's entries by name. Symlinks report their own type and
/// are therefore never followed.
fn sorted_entries(dir: &Dir, relative: &Utf8Path) -> Vec<(String, FileType)> {
    let read_dir = match dir.entries() {
        Ok(read_dir) => read_dir,
        Err(err) => {
            debug!(path = %relative, error = %err, "cannot list folder");
            return Vec::new();
        }
    };

    let mut entries: Vec<(String, FileType)> = read_dir
        .filter_map(|entry| {
            let listed = entry.and_then(|found| Ok((found.file_name()?, found.file_type()?)));
            listed
                .map_err(|err| debug!(path = %relative, error = %err, "skipping entry"))
                .ok()
        })
        .collect();
    entries.sort_by(|(left, _), (right, _)| left.cmp(right));
    entries
}

//! Application services for folder loading.

mod loader;

pub use loader::FolderLoader;

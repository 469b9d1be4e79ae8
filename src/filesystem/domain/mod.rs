//! Domain types for folder loading.

mod file;
mod filter;
mod options;

pub use file::LoadedFile;
pub use filter::{NameFilter, should_ignore, should_include};
pub use options::LoadOptions;

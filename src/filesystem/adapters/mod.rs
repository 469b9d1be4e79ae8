//! Built-in file importers.

pub mod json;
pub mod text;

pub use json::JsonImporter;
pub use text::TextImporter;

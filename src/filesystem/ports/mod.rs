//! Port definitions for folder loading.

pub mod importer;

pub use importer::FileImporter;

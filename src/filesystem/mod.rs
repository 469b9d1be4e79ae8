//! Folder loading with name filters and pluggable importers.
//!
//! # Architecture
//!
//! - **Domain**: [`domain::NameFilter`], [`domain::LoadOptions`], [`domain::LoadedFile`]
//! - **Ports**: [`ports::FileImporter`]
//! - **Adapters**: [`adapters::JsonImporter`], [`adapters::TextImporter`]
//! - **Services**: [`services::FolderLoader`]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

//! Zyro utilities: schema-agnostic validation and supporting helpers.
//!
//! # Architecture
//!
//! Larger modules follow hexagonal architecture principles:
//!
//! - **Domain**: Pure types with no infrastructure dependencies
//! - **Ports**: Trait interfaces for pluggable collaborators
//! - **Adapters**: Built-in implementations of the ports
//! - **Services**: Workflows that tie domain and ports together
//!
//! # Modules
//!
//! - [`validation`]: Normalized validation over safe-parse, throwing, and class schemas
//! - [`terminal`]: Coloured, timestamped log lines
//! - [`filesystem`]: Filtered folder loading with pluggable importers
//! - [`time`]: Duration formatting and async sleep
//! - [`objects`]: Deep equality and shape checks for JSON values

pub mod filesystem;
pub mod objects;
pub mod terminal;
pub mod time;
pub mod validation;

#[cfg(test)]
mod test_support;

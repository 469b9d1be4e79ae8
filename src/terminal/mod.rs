//! Coloured terminal output.
//!
//! - [`ansi`]: escape-code styling and colour detection
//! - [`config`]: colour policy and [`TerminalConfig`]
//! - [`logger`]: the [`Terminal`] line logger

pub mod ansi;
pub mod config;
pub mod logger;

#[cfg(test)]
mod tests;

pub use ansi::{Ansi, Style};
pub use config::{ColorPolicy, TerminalConfig, TimestampZone};
pub use logger::Terminal;

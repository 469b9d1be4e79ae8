//! Unit tests for the validation module.
//!
//! Tests are grouped by schema family, plus detection, violation flattening,
//! and the built-in constraint set.

mod fixtures;

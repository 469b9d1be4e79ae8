//! Unit tests for terminal output.

mod logger_tests;

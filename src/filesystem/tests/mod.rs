//! Unit tests for folder loading.

mod loader_tests;

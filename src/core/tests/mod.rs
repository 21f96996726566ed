//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Ordered key list tests
//! - Key generation and collision policy tests
//! - Store and selection invariant tests
//! - Snapshot tests

#[cfg(test)]
mod keygen_tests;
#[cfg(test)]
mod store_tests;

//! Config module tests
//!
//! Contains test suites for configuration loading:
//! - JSON parsing and defaults
//! - Validation
//! - File loading errors

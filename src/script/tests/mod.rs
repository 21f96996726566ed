//! Script module tests
//!
//! Contains test suites for command scripts:
//! - Line grammar and variable substitution
//! - Replaying scripts against a store

//! UI module tests

//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Engine policy tests (gatekeeper, trim, staleness, extension, precedence)
//! - Rules-file and script parser tests

#[cfg(test)]
mod parser_tests;

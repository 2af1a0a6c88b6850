//! Integration tests for Filterline
//!
//! This test suite validates:
//! - Filtered writers layered over in-memory and byte-oriented sinks
//! - Sink failures surfacing as located stream errors
//! - Logging initialization from configuration

pub mod test_utils;


#[cfg(test)]
mod logging_config_tests;

//! Core functionality for Filterline.
//!
//! This crate provides the shared types and the ambient infrastructure
//! (logging and configuration) used across the Filterline crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::{Config, LogFormat, LoggingConfig};
pub use error::{CoreError, CoreResult};
pub use types::{Location, UNKNOWN_POSITION};

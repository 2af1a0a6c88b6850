//! Filterline Stream
//!
//! Character sinks, the pass-through [`FilterWriter`] decorator, and the
//! [`StreamError`] type used to report processing failures with a location.

#![warn(missing_docs)]

pub mod error;
pub mod filter;
pub mod sink;

pub use error::{BoxError, SinkError, SinkResult, StreamError};
pub use filter::FilterWriter;
pub use filterline_core::Location;
pub use sink::{check_bounds, str_slice, CharSink, IoSink};

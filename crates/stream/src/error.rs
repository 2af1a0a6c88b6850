//! Error types for Filterline Stream operations.
//!
//! [`SinkError`] is what character sinks fail with. [`StreamError`] is the
//! error reported by stream processing code; it can carry a nested cause and
//! the [`Location`] in the input the failure refers to.

use filterline_core::Location;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Errors produced by character sinks.
#[derive(Debug, Error)]
pub enum SinkError {
    /// I/O errors from the underlying byte writer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Slice arguments outside the source buffer
    #[error("Slice out of bounds: offset {offset}, length {len}, size {size}")]
    OutOfBounds {
        /// Requested start of the slice
        offset: usize,
        /// Requested number of characters
        len: usize,
        /// Number of characters actually available
        size: usize,
    },

    /// Operation on a sink that has been closed
    #[error("Stream closed")]
    Closed,
}

/// Result type for sink operations.
pub type SinkResult<T> = Result<T, SinkError>;

/// Boxed cause carried by a [`StreamError`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Error for malformed input or unexpected processing conditions.
///
/// When built with a location, the message is rewritten to
/// `ParseError at [row,col]:[<line>,<column>]\nMessage: <msg>`.
#[derive(Debug, Default)]
pub struct StreamError {
    message: Option<String>,
    cause: Option<BoxError>,
    location: Option<Location>,
}

impl StreamError {
    /// Error with neither message, cause nor location.
    pub fn new() -> Self {
        Self::default()
    }

    /// Error with a message.
    pub fn with_message(msg: impl Into<String>) -> Self {
        Self {
            message: Some(msg.into()),
            ..Self::default()
        }
    }

    /// Error wrapping a cause. The message is taken from the cause.
    pub fn with_cause(cause: impl Into<BoxError>) -> Self {
        let cause = cause.into();
        Self {
            message: Some(cause.to_string()),
            cause: Some(cause),
            location: None,
        }
    }

    /// Error with a message and a cause.
    pub fn with_message_and_cause(msg: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self {
            message: Some(msg.into()),
            cause: Some(cause.into()),
            location: None,
        }
    }

    /// Error with a message, a location and a cause.
    pub fn at_location_with_cause(
        msg: impl AsRef<str>,
        location: Location,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self {
            message: Some(located_message(msg.as_ref(), &location)),
            cause: Some(cause.into()),
            location: Some(location),
        }
    }

    /// Error with a message and a location.
    pub fn at_location(msg: impl AsRef<str>, location: Location) -> Self {
        Self {
            message: Some(located_message(msg.as_ref(), &location)),
            cause: None,
            location: Some(location),
        }
    }

    /// The effective message, including the location prefix if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The nested cause, if any.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// The location of the error, if any.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Consume the error and return its cause.
    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }
}

fn located_message(msg: &str, location: &Location) -> String {
    format!(
        "ParseError at [row,col]:[{},{}]\nMessage: {}",
        location.line_number(),
        location.column_number(),
        msg
    )
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_deref().unwrap_or(""))
    }
}

impl StdError for StreamError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl From<SinkError> for StreamError {
    fn from(err: SinkError) -> Self {
        Self::with_cause(err)
    }
}

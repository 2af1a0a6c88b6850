//! Filtering character writer
//!
//! [`FilterWriter`] decorates another [`CharSink`] and passes every request
//! through unchanged. Wrappers that need to transform output build on it by
//! overriding the calls they care about and delegating the rest.

use crate::error::{SinkError, SinkResult};
use crate::sink::CharSink;
use std::fmt;
use tracing::{debug, trace};

/// Pass-through decorator over an owned character sink.
#[derive(Debug)]
pub struct FilterWriter<S> {
    inner: S,
}

impl<S: CharSink> FilterWriter<S> {
    /// Create a new filtered writer over `inner`.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Borrow the underlying sink
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Mutably borrow the underlying sink
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwrap the underlying sink
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: CharSink> CharSink for FilterWriter<S> {
    fn write_char(&mut self, c: char) -> SinkResult<()> {
        self.inner.write_char(c)
    }

    // Bounds are checked by the inner sink.
    fn write_chars(&mut self, buf: &[char], offset: usize, len: usize) -> SinkResult<()> {
        trace!(offset, len, size = buf.len(), "forwarding char slice");
        self.inner.write_chars(buf, offset, len)
    }

    fn write_str_slice(&mut self, s: &str, offset: usize, len: usize) -> SinkResult<()> {
        trace!(offset, len, "forwarding string slice");
        self.inner.write_str_slice(s, offset, len)
    }

    fn flush(&mut self) -> SinkResult<()> {
        debug!("flushing filtered writer");
        self.inner.flush()
    }

    fn close(&mut self) -> SinkResult<()> {
        debug!("closing filtered writer");
        self.inner.close()
    }
}

impl<S: CharSink> fmt::Write for FilterWriter<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        CharSink::write_str(self, s).map_err(|err: SinkError| {
            debug!(error = %err, "formatted write failed");
            fmt::Error
        })
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        CharSink::write_char(self, c).map_err(|_| fmt::Error)
    }
}

//! Character sinks
//!
//! [`CharSink`] is the capability every writable character destination
//! implements. Slice arguments are counted in characters, not bytes, and
//! are validated by the sink before anything is written.

use crate::error::{SinkError, SinkResult};
use std::io::Write;

/// A destination that accepts written character data.
pub trait CharSink {
    /// Write a single character.
    fn write_char(&mut self, c: char) -> SinkResult<()>;

    /// Write `len` characters of `buf` starting at `offset`.
    fn write_chars(&mut self, buf: &[char], offset: usize, len: usize) -> SinkResult<()>;

    /// Write `len` characters of `s` starting at character `offset`.
    fn write_str_slice(&mut self, s: &str, offset: usize, len: usize) -> SinkResult<()>;

    /// Flush any pending output to the destination.
    fn flush(&mut self) -> SinkResult<()>;

    /// Flush and release the destination.
    fn close(&mut self) -> SinkResult<()>;

    /// Write every character of `buf`.
    fn write_all_chars(&mut self, buf: &[char]) -> SinkResult<()> {
        self.write_chars(buf, 0, buf.len())
    }

    /// Write the whole string.
    fn write_str(&mut self, s: &str) -> SinkResult<()> {
        self.write_str_slice(s, 0, s.chars().count())
    }

    /// Write the whole string and return the sink for chaining.
    fn append(&mut self, s: &str) -> SinkResult<&mut Self>
    where
        Self: Sized,
    {
        self.write_str(s)?;
        Ok(self)
    }
}

/// Check that `offset..offset + len` lies within a buffer of `size` characters.
pub fn check_bounds(offset: usize, len: usize, size: usize) -> SinkResult<()> {
    match offset.checked_add(len) {
        Some(end) if end <= size => Ok(()),
        _ => Err(SinkError::OutOfBounds { offset, len, size }),
    }
}

/// Sub-slice of `s` by character positions.
pub fn str_slice(s: &str, offset: usize, len: usize) -> SinkResult<&str> {
    let mut boundaries = s
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()));

    let out_of_bounds = || SinkError::OutOfBounds {
        offset,
        len,
        size: s.chars().count(),
    };

    let start = boundaries.nth(offset).ok_or_else(out_of_bounds)?;
    let end = if len == 0 {
        start
    } else {
        boundaries.nth(len - 1).ok_or_else(out_of_bounds)?
    };
    Ok(&s[start..end])
}

/// In-memory sink. Flush and close have no effect.
impl CharSink for String {
    fn write_char(&mut self, c: char) -> SinkResult<()> {
        self.push(c);
        Ok(())
    }

    fn write_chars(&mut self, buf: &[char], offset: usize, len: usize) -> SinkResult<()> {
        check_bounds(offset, len, buf.len())?;
        self.extend(&buf[offset..offset + len]);
        Ok(())
    }

    fn write_str_slice(&mut self, s: &str, offset: usize, len: usize) -> SinkResult<()> {
        self.push_str(str_slice(s, offset, len)?);
        Ok(())
    }

    fn flush(&mut self) -> SinkResult<()> {
        Ok(())
    }

    fn close(&mut self) -> SinkResult<()> {
        Ok(())
    }
}

impl<S: CharSink + ?Sized> CharSink for &mut S {
    fn write_char(&mut self, c: char) -> SinkResult<()> {
        (**self).write_char(c)
    }

    fn write_chars(&mut self, buf: &[char], offset: usize, len: usize) -> SinkResult<()> {
        (**self).write_chars(buf, offset, len)
    }

    fn write_str_slice(&mut self, s: &str, offset: usize, len: usize) -> SinkResult<()> {
        (**self).write_str_slice(s, offset, len)
    }

    fn flush(&mut self) -> SinkResult<()> {
        (**self).flush()
    }

    fn close(&mut self) -> SinkResult<()> {
        (**self).close()
    }
}

impl<S: CharSink + ?Sized> CharSink for Box<S> {
    fn write_char(&mut self, c: char) -> SinkResult<()> {
        (**self).write_char(c)
    }

    fn write_chars(&mut self, buf: &[char], offset: usize, len: usize) -> SinkResult<()> {
        (**self).write_chars(buf, offset, len)
    }

    fn write_str_slice(&mut self, s: &str, offset: usize, len: usize) -> SinkResult<()> {
        (**self).write_str_slice(s, offset, len)
    }

    fn flush(&mut self) -> SinkResult<()> {
        (**self).flush()
    }

    fn close(&mut self) -> SinkResult<()> {
        (**self).close()
    }
}

/// Sink that encodes characters as UTF-8 into a byte writer.
///
/// Once closed, every write and flush fails with [`SinkError::Closed`];
/// closing again is a no-op.
#[derive(Debug)]
pub struct IoSink<W: Write> {
    inner: W,
    closed: bool,
}

impl<W: Write> IoSink<W> {
    /// Wrap a byte writer
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            closed: false,
        }
    }

    /// Whether [`CharSink::close`] has been called
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Borrow the byte writer
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap the byte writer
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn ensure_open(&self) -> SinkResult<()> {
        if self.closed {
            return Err(SinkError::Closed);
        }
        Ok(())
    }
}

impl<W: Write> CharSink for IoSink<W> {
    fn write_char(&mut self, c: char) -> SinkResult<()> {
        self.ensure_open()?;
        let mut utf8 = [0u8; 4];
        self.inner.write_all(c.encode_utf8(&mut utf8).as_bytes())?;
        Ok(())
    }

    fn write_chars(&mut self, buf: &[char], offset: usize, len: usize) -> SinkResult<()> {
        self.ensure_open()?;
        check_bounds(offset, len, buf.len())?;
        let encoded: String = buf[offset..offset + len].iter().collect();
        self.inner.write_all(encoded.as_bytes())?;
        Ok(())
    }

    fn write_str_slice(&mut self, s: &str, offset: usize, len: usize) -> SinkResult<()> {
        self.ensure_open()?;
        let slice = str_slice(s, offset, len)?;
        self.inner.write_all(slice.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> SinkResult<()> {
        self.ensure_open()?;
        self.inner.flush()?;
        Ok(())
    }

    fn close(&mut self) -> SinkResult<()> {
        if self.closed {
            return Ok(());
        }
        self.inner.flush()?;
        self.closed = true;
        tracing::debug!("IoSink closed");
        Ok(())
    }
}

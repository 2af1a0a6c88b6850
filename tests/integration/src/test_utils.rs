//! Test utilities for cross-crate integration tests

use filterline_stream::{CharSink, SinkError, SinkResult};

/// Install a test subscriber if none is active yet
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Sink that counts calls and can be told to fail after a number of writes
#[derive(Debug, Default)]
pub struct CountingSink {
    pub buffer: String,
    pub writes: usize,
    pub flushes: usize,
    pub closes: usize,
    pub fail_after: Option<usize>,
}

impl CountingSink {
    /// Sink whose writes start failing once `writes` calls succeeded
    pub fn failing_after(writes: usize) -> Self {
        Self {
            fail_after: Some(writes),
            ..Self::default()
        }
    }

    fn record_write(&mut self) -> SinkResult<()> {
        if self.fail_after.is_some_and(|limit| self.writes >= limit) {
            return Err(SinkError::Io(std::io::Error::new(
                std::io::ErrorKind::WriteZero,
                "sink full",
            )));
        }
        self.writes += 1;
        Ok(())
    }
}

impl CharSink for CountingSink {
    fn write_char(&mut self, c: char) -> SinkResult<()> {
        self.record_write()?;
        self.buffer.write_char(c)
    }

    fn write_chars(&mut self, buf: &[char], offset: usize, len: usize) -> SinkResult<()> {
        self.record_write()?;
        self.buffer.write_chars(buf, offset, len)
    }

    fn write_str_slice(&mut self, s: &str, offset: usize, len: usize) -> SinkResult<()> {
        self.record_write()?;
        self.buffer.write_str_slice(s, offset, len)
    }

    fn flush(&mut self) -> SinkResult<()> {
        self.flushes += 1;
        Ok(())
    }

    fn close(&mut self) -> SinkResult<()> {
        self.closes += 1;
        Ok(())
    }
}

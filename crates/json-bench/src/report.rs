//! Line-oriented report emission
//!
//! The reporter writes to an explicitly passed sink rather than an ambient
//! global stream, so tests capture lines in a buffer while the binary hands
//! it stderr. Every line is flushed before control returns, which leaves a
//! readable partial report when a run is interrupted.

use crate::Result;
use std::io::Write;
use std::time::Duration;

/// Writes the benchmark report, one line per call
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter over `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Section header for one document's parse trials
    ///
    /// Ordinals are 1-based and follow corpus order.
    pub fn parse_header(&mut self, ordinal: usize, name: &str, size: usize) -> Result<()> {
        self.header("Parse", ordinal, name, size)
    }

    /// Section header for one document's serialize trials
    pub fn serialize_header(&mut self, ordinal: usize, name: &str, size: usize) -> Result<()> {
        self.header("Serialize", ordinal, name, size)
    }

    fn header(&mut self, kind: &str, ordinal: usize, name: &str, size: usize) -> Result<()> {
        writeln!(self.out, "{kind} File {ordinal} {name} ({size} bytes)")?;
        self.out.flush()?;
        Ok(())
    }

    /// One measured trial, truncated to whole milliseconds
    pub fn timing(&mut self, adapter: &str, elapsed: Duration) -> Result<()> {
        writeln!(self.out, " {}: {}ms", adapter, elapsed.as_millis())?;
        self.out.flush()?;
        Ok(())
    }

    /// Explicit marker for an adapter that declines the serialize benchmark
    pub fn unsupported(&mut self, adapter: &str) -> Result<()> {
        writeln!(self.out, " {adapter}: serialize unsupported")?;
        self.out.flush()?;
        Ok(())
    }

    /// Consume the reporter and return the sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

//! Benchmark runner executing the timing protocol
//!
//! Trials run strictly sequentially on the calling thread: no trial for the
//! next adapter starts before the current adapter finishes, and no trial
//! for the next document starts before all adapters finish on the current
//! one. Results stream to the reporter as each trial completes, so nothing
//! is buffered across trial boundaries.

use crate::config::Protocol;
use crate::corpus::Document;
use crate::registry::AdapterRegistry;
use crate::report::Reporter;
use crate::{Error, Result};
use std::io::Write;
use std::time::Instant;

/// Drives the warm-up/measurement protocol over a corpus and registry
pub struct BenchRunner {
    protocol: Protocol,
    registry: AdapterRegistry,
    corpus: Vec<Document>,
}

impl BenchRunner {
    /// Create a runner
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the protocol is degenerate or the
    /// registry is empty. An empty corpus is fine; the run is then a no-op.
    pub fn new(protocol: Protocol, registry: AdapterRegistry, corpus: Vec<Document>) -> Result<Self> {
        protocol.validate()?;
        if registry.is_empty() {
            return Err(Error::Config("no adapters registered".to_string()));
        }
        Ok(Self {
            protocol,
            registry,
            corpus,
        })
    }

    /// Run the parse benchmark, then the serialize benchmark
    ///
    /// The first adapter or I/O error aborts the run; a partial trial set
    /// is never silently completed.
    pub fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> Result<()> {
        self.run_parse(reporter)?;
        self.run_serialize(reporter)
    }

    /// Parse protocol: each trial is one timed `parse` call
    ///
    /// Warm-up trials execute with measurement enabled but never reach the
    /// report.
    pub fn run_parse<W: Write>(&self, reporter: &mut Reporter<W>) -> Result<()> {
        let spec = self.protocol.parse;
        for (idx, doc) in self.corpus.iter().enumerate() {
            reporter.parse_header(idx + 1, doc.name(), doc.len())?;
            for adapter in self.registry.adapters() {
                for trial in 0..spec.trials {
                    let start = Instant::now();
                    adapter.parse(doc.bytes(), spec.repeat)?;
                    let elapsed = start.elapsed();
                    if trial >= spec.warmup {
                        reporter.timing(adapter.name(), elapsed)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Serialize protocol: each trial times re-serialization of a value
    /// parsed outside the timed region
    ///
    /// Adapters that decline serialization get an explicit report line and
    /// run no trials.
    pub fn run_serialize<W: Write>(&self, reporter: &mut Reporter<W>) -> Result<()> {
        let spec = self.protocol.serialize;
        for (idx, doc) in self.corpus.iter().enumerate() {
            reporter.serialize_header(idx + 1, doc.name(), doc.len())?;
            for adapter in self.registry.adapters() {
                if !adapter.supports_serialize() {
                    reporter.unsupported(adapter.name())?;
                    continue;
                }
                for trial in 0..spec.trials {
                    let prepared = adapter.prepare(doc.bytes())?;
                    let start = Instant::now();
                    prepared.serialize(spec.repeat)?;
                    let elapsed = start.elapsed();
                    if trial >= spec.warmup {
                        reporter.timing(adapter.name(), elapsed)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// The protocol this runner executes
    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }
}

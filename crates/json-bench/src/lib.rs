//! Microbenchmark harness comparing JSON parse and serialize throughput
//! across independent Rust JSON libraries
//!
//! Input documents are loaded fully into memory, then every
//! (document, adapter) pair runs a fixed warm-up/measurement trial protocol
//! on a single thread. Raw per-trial wall-clock timings stream to a
//! line-oriented textual report as they complete; there is no aggregation
//! and no persistence, so runs stay directly comparable across libraries
//! and reimplementations.

pub mod adapter;
pub mod adapters;
pub mod config;
pub mod corpus;
pub mod error;
pub mod registry;
pub mod report;
pub mod runner;

pub use adapter::{JsonAdapter, PreparedDocument};
pub use adapters::{SerdeJsonAdapter, SimdJsonAdapter, SonicRsAdapter, default_adapters};
pub use config::{Protocol, TrialSpec};
pub use corpus::{Document, load_corpus};
pub use error::{Error, Result};
pub use registry::AdapterRegistry;
pub use report::Reporter;
pub use runner::BenchRunner;

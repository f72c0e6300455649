//! Uniform operation surface over the measured JSON libraries
//!
//! Each library is wrapped in a [`JsonAdapter`] so the runner can drive
//! heterogeneous implementations through one contract. Adapters are
//! stateless: nothing is retained between calls and input bytes are never
//! mutated, so a single instance is reused across every document and trial.

use crate::Result;

/// A value parsed during serialize setup, outside any timed region
///
/// The runner times only [`PreparedDocument::serialize`], so serialize
/// trials measure serialization cost alone regardless of how expensive the
/// setup parse was.
pub trait PreparedDocument {
    /// Serialize the held value to text `repeat` times sequentially,
    /// dropping each result before the next iteration
    fn serialize(&self, repeat: u32) -> Result<()>;
}

/// The operation surface each measured JSON library exposes to the harness
pub trait JsonAdapter: Send + Sync {
    /// Stable identifier used in report lines
    ///
    /// Must not allocate per call; implementations return a static string.
    fn name(&self) -> &'static str;

    /// Parse `bytes` into the library's document model `repeat` times
    /// sequentially, dropping each result before the next iteration
    ///
    /// Well-formed input must succeed; a failure indicates a precondition
    /// violation and aborts the run.
    fn parse(&self, bytes: &[u8], repeat: u32) -> Result<()>;

    /// Parse `bytes` once into a value the serialize benchmark can
    /// re-serialize
    ///
    /// The runner invokes this outside the timed region of every serialize
    /// trial.
    fn prepare(&self, bytes: &[u8]) -> Result<Box<dyn PreparedDocument>>;

    /// Whether this adapter takes part in the serialize benchmark
    ///
    /// An adapter that returns false is reported as unsupported instead of
    /// being timed at zero.
    fn supports_serialize(&self) -> bool {
        true
    }
}

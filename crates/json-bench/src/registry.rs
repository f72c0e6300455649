//! Adapter registry
//!
//! Holds the closed set of adapters a run measures. Registration order is
//! trial order, so two runs over the same registry produce report lines in
//! the same sequence.

use crate::adapter::JsonAdapter;
use crate::{Error, Result};
use std::sync::Arc;

/// Insertion-ordered collection of measured adapters
pub struct AdapterRegistry {
    adapters: Vec<Arc<dyn JsonAdapter>>,
}

impl AdapterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { adapters: Vec::new() }
    }

    /// Register an adapter
    ///
    /// Names identify adapters in the report, so duplicates are rejected.
    pub fn register(&mut self, adapter: Arc<dyn JsonAdapter>) -> Result<()> {
        if self.adapters.iter().any(|a| a.name() == adapter.name()) {
            return Err(Error::Config(format!(
                "adapter '{}' is already registered",
                adapter.name()
            )));
        }
        self.adapters.push(adapter);
        Ok(())
    }

    /// Registered adapters, in registration order
    pub fn adapters(&self) -> &[Arc<dyn JsonAdapter>] {
        &self.adapters
    }

    /// Number of registered adapters
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Check if no adapters are registered
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//! Measurement protocol configuration
//!
//! The trial and repeat counts are comparability constants: numbers from
//! two runs are only comparable when both runs agree on them. They are
//! deliberately not exposed as CLI flags; [`Protocol::default`] is the
//! protocol.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Trial and repeat counts for one benchmark kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialSpec {
    /// Total trials executed per (document, adapter) pair
    pub trials: u32,

    /// Leading trials that execute but never reach the report
    pub warmup: u32,

    /// Operation repetitions inside one timed trial
    pub repeat: u32,
}

impl TrialSpec {
    fn validate(&self, kind: &str) -> Result<()> {
        if self.trials == 0 {
            return Err(Error::Config(format!("{kind}: trials must be > 0")));
        }
        if self.repeat == 0 {
            return Err(Error::Config(format!("{kind}: repeat must be > 0")));
        }
        if self.warmup >= self.trials {
            return Err(Error::Config(format!(
                "{kind}: warmup ({}) must leave at least one measured trial of {}",
                self.warmup, self.trials
            )));
        }
        Ok(())
    }
}

/// The measurement protocol for a full run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protocol {
    /// Parse benchmark trials
    pub parse: TrialSpec,

    /// Serialize benchmark trials
    pub serialize: TrialSpec,
}

impl Default for Protocol {
    fn default() -> Self {
        Self {
            parse: TrialSpec {
                trials: 6,
                warmup: 3,
                repeat: 250,
            },
            // Serialize trials amortize their setup parse outside the timed
            // region, so none are discarded as warm-up.
            serialize: TrialSpec {
                trials: 3,
                warmup: 0,
                repeat: 200,
            },
        }
    }
}

impl Protocol {
    /// Validate the protocol
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if any count is degenerate.
    pub fn validate(&self) -> Result<()> {
        self.parse.validate("parse")?;
        self.serialize.validate("serialize")
    }
}

//! serde_json adapter
//!
//! Parses into `serde_json::Value`, the ecosystem's baseline DOM.

use crate::adapter::{JsonAdapter, PreparedDocument};
use crate::{Error, Result};
use std::hint::black_box;

const NAME: &str = "serde_json";

/// Adapter over the serde_json DOM API
pub struct SerdeJsonAdapter;

impl JsonAdapter for SerdeJsonAdapter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn parse(&self, bytes: &[u8], repeat: u32) -> Result<()> {
        for _ in 0..repeat {
            let value: serde_json::Value =
                serde_json::from_slice(bytes).map_err(|e| Error::adapter(NAME, e))?;
            black_box(value);
        }
        Ok(())
    }

    fn prepare(&self, bytes: &[u8]) -> Result<Box<dyn PreparedDocument>> {
        let value: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|e| Error::adapter(NAME, e))?;
        Ok(Box::new(Prepared { value }))
    }
}

struct Prepared {
    value: serde_json::Value,
}

impl PreparedDocument for Prepared {
    fn serialize(&self, repeat: u32) -> Result<()> {
        for _ in 0..repeat {
            let text = serde_json::to_string(&self.value).map_err(|e| Error::adapter(NAME, e))?;
            black_box(text);
        }
        Ok(())
    }
}

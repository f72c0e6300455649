//! sonic-rs adapter

use crate::adapter::{JsonAdapter, PreparedDocument};
use crate::{Error, Result};
use std::hint::black_box;

const NAME: &str = "sonic-rs";

/// Adapter over the sonic-rs document API
pub struct SonicRsAdapter;

impl JsonAdapter for SonicRsAdapter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn parse(&self, bytes: &[u8], repeat: u32) -> Result<()> {
        for _ in 0..repeat {
            let value: sonic_rs::Value =
                sonic_rs::from_slice(bytes).map_err(|e| Error::adapter(NAME, e))?;
            black_box(value);
        }
        Ok(())
    }

    fn prepare(&self, bytes: &[u8]) -> Result<Box<dyn PreparedDocument>> {
        let value: sonic_rs::Value =
            sonic_rs::from_slice(bytes).map_err(|e| Error::adapter(NAME, e))?;
        Ok(Box::new(Prepared { value }))
    }
}

struct Prepared {
    value: sonic_rs::Value,
}

impl PreparedDocument for Prepared {
    fn serialize(&self, repeat: u32) -> Result<()> {
        for _ in 0..repeat {
            let text = sonic_rs::to_string(&self.value).map_err(|e| Error::adapter(NAME, e))?;
            black_box(text);
        }
        Ok(())
    }
}

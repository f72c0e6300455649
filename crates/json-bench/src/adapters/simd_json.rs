//! simd-json adapter
//!
//! simd-json parses in place and needs a mutable buffer, so every timed
//! iteration works on a fresh copy of the input; the shared document bytes
//! stay immutable.

use crate::adapter::{JsonAdapter, PreparedDocument};
use crate::{Error, Result};
use std::hint::black_box;

const NAME: &str = "simd-json";

/// Adapter over the simd-json owned-value DOM API
pub struct SimdJsonAdapter;

impl JsonAdapter for SimdJsonAdapter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn parse(&self, bytes: &[u8], repeat: u32) -> Result<()> {
        for _ in 0..repeat {
            let mut scratch = bytes.to_vec();
            let value =
                simd_json::to_owned_value(&mut scratch).map_err(|e| Error::adapter(NAME, e))?;
            black_box(value);
        }
        Ok(())
    }

    fn prepare(&self, bytes: &[u8]) -> Result<Box<dyn PreparedDocument>> {
        let mut scratch = bytes.to_vec();
        let value = simd_json::to_owned_value(&mut scratch).map_err(|e| Error::adapter(NAME, e))?;
        Ok(Box::new(Prepared { value }))
    }
}

struct Prepared {
    value: simd_json::OwnedValue,
}

impl PreparedDocument for Prepared {
    fn serialize(&self, repeat: u32) -> Result<()> {
        for _ in 0..repeat {
            let text = simd_json::to_string(&self.value).map_err(|e| Error::adapter(NAME, e))?;
            black_box(text);
        }
        Ok(())
    }
}

//! Adapters for the measured JSON libraries
//!
//! One thin submodule per library. The set is closed and known at build
//! time; [`default_adapters`] constructs it once, in report order.

pub mod serde_json;
pub mod simd_json;
pub mod sonic_rs;

pub use self::serde_json::SerdeJsonAdapter;
pub use self::simd_json::SimdJsonAdapter;
pub use self::sonic_rs::SonicRsAdapter;

use crate::adapter::JsonAdapter;
use std::sync::Arc;

/// Build the default adapter list, in the order trials run
pub fn default_adapters() -> Vec<Arc<dyn JsonAdapter>> {
    vec![
        Arc::new(SerdeJsonAdapter),
        Arc::new(SimdJsonAdapter),
        Arc::new(SonicRsAdapter),
    ]
}

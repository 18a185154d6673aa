//! Rein soft shadows
//!
//! Percentage-closer soft shadows (PCSS) and percentage-closer filtering (PCF)
//! over packed-depth shadow maps. Each lookup is a pure function of the shadow
//! map and one shaded point, so lookups can run in any order and in parallel.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **depth** - RGBA8 depth packing and decoding
//! 2. **sampling** - Seed hash and rotated Poisson-disk offsets
//! 3. **texture** - Shadow map sampling trait and a CPU shadow map
//! 4. **shadow** - Blocker search, penumbra estimation, PCF and the PCF/PCSS queries
//!
//! # Example
//!
//! ```
//! use rein_shadow::{PackedDepthMap, SoftShadow};
//! use glam::Vec4;
//!
//! let map = PackedDepthMap::uniform(256, 256, 0.2).unwrap();
//! let shadow = SoftShadow::default();
//!
//! // Receiver at depth 0.8 behind an occluder at 0.2: fully shadowed.
//! assert_eq!(shadow.pcss(&map, Vec4::new(0.5, 0.5, 0.8, 1.0)), 0.0);
//! ```

pub mod depth;
pub mod error;
pub mod sampling;
pub mod shadow;
pub mod texture;

// Re-export commonly used types
pub use depth::{pack_depth, unpack_depth};
pub use error::{Result, ShadowError};
pub use sampling::{seed_hash, OffsetSet, NUM_RINGS, NUM_SAMPLES};
pub use shadow::{
    filter_radius, find_blocker, pcf_filter, penumbra_size, search_radius, BlockerSearch,
    PcssTrace, ShadowConfig, ShadowTechnique, SoftShadow, SoftShadowUniform, LIGHT_FRUSTUM_WIDTH,
    LIGHT_SIZE_UV, LIGHT_WORLD_SIZE, NEAR_PLANE, NO_BLOCKER, PCF_FILTER_RADIUS,
};
pub use texture::{AddressMode, PackedDepthMap, ShadowMapSampler};

// Re-export glam for convenience
pub use glam;

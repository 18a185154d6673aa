//! Sample pattern generation
//!
//! Per-point sampling is driven by two pieces: a stateless [`seed_hash`] and
//! the rotated spiral [`OffsetSet`] it seeds.

mod hash;
mod poisson;

pub use hash::seed_hash;
pub use poisson::OffsetSet;

/// Number of offsets in a generated pattern.
pub const NUM_SAMPLES: usize = 10;

/// Number of turns the spiral makes across the unit disk.
pub const NUM_RINGS: usize = 10;

/// Offsets consumed by the blocker search.
pub const BLOCKER_SEARCH_NUM_SAMPLES: usize = NUM_SAMPLES;

/// Offsets consumed by each of the two PCF passes.
pub const PCF_NUM_SAMPLES: usize = NUM_SAMPLES;

const _: () = assert!(BLOCKER_SEARCH_NUM_SAMPLES <= NUM_SAMPLES);
const _: () = assert!(PCF_NUM_SAMPLES <= NUM_SAMPLES);

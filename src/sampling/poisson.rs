//! Biased Poisson-disk spiral
//!
//! Offsets walk outward along a spiral inside the unit disk. Radii grow
//! linearly and are raised to `0.75`, which pulls samples toward the centre
//! and evens out their density per unit area.

use std::f32::consts::TAU;

use glam::Vec2;

use super::{seed_hash, NUM_RINGS, NUM_SAMPLES};

const RADIUS_EXPONENT: f32 = 0.75;

/// A fixed set of sample offsets inside the unit disk.
///
/// Generated per query from that query's seed and owned by it. Never cache
/// one across points: the rotation is what decorrelates neighbouring pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetSet {
    offsets: [Vec2; NUM_SAMPLES],
}

impl OffsetSet {
    /// Build the spiral pattern rotated by `seed_hash(seed)`.
    pub fn poisson_disk(seed: Vec2) -> Self {
        let angle_step = TAU * NUM_RINGS as f32 / NUM_SAMPLES as f32;
        let radius_step = 1.0 / NUM_SAMPLES as f32;

        let mut angle = seed_hash(seed) * TAU;
        let mut offsets = [Vec2::ZERO; NUM_SAMPLES];

        for (i, offset) in offsets.iter_mut().enumerate() {
            // last radius is exactly 1.0
            let radius = radius_step * (i + 1) as f32;
            *offset = Vec2::from_angle(angle) * radius.powf(RADIUS_EXPONENT);
            angle += angle_step;
        }

        Self { offsets }
    }

    /// Wrap an explicit set of offsets.
    pub fn from_offsets(offsets: [Vec2; NUM_SAMPLES]) -> Self {
        Self { offsets }
    }

    /// The offsets in generation order.
    pub fn as_array(&self) -> &[Vec2; NUM_SAMPLES] {
        &self.offsets
    }

    /// Iterate over the offsets in generation order.
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.offsets.iter().copied()
    }

    /// The second PCF ring: each offset axis-swapped and negated, `-offset.yx`.
    pub fn swizzled(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.iter().map(|o| Vec2::new(-o.y, -o.x))
    }

    /// Number of offsets.
    pub fn len(&self) -> usize {
        NUM_SAMPLES
    }

    /// Whether the set holds no offsets.
    pub fn is_empty(&self) -> bool {
        NUM_SAMPLES == 0
    }
}

impl<'a> IntoIterator for &'a OffsetSet {
    type Item = &'a Vec2;
    type IntoIter = std::slice::Iter<'a, Vec2>;

    fn into_iter(self) -> Self::IntoIter {
        self.offsets.iter()
    }
}

//! Seed hash
//!
//! A stateless scalar hash of a 2D seed, used to rotate the sample pattern per
//! shaded point so that neighbouring pixels do not share the same pattern.

use std::f32::consts::PI;

use glam::Vec2;

const WEIGHTS: Vec2 = Vec2::new(12.9898, 78.233);
const SCALE: f32 = 43758.5453;

/// Hash a 2D seed into `[0, 1)`.
///
/// `fract(sin(dot(seed, weights) mod π) * 43758.5453)`. Precision degrades for
/// very large seeds, which only affects decorrelation quality.
pub fn seed_hash(seed: Vec2) -> f32 {
    let dt = seed.dot(WEIGHTS);
    let sn = mod_gl(dt, PI);
    fract_gl(sn.sin() * SCALE)
}

/// GLSL `mod`: `x - y * floor(x / y)`, keeps the sign of `y`.
#[inline]
pub(crate) fn mod_gl(x: f32, y: f32) -> f32 {
    x - y * (x / y).floor()
}

/// GLSL `fract`: `x - floor(x)`, always in `[0, 1)`.
#[inline]
pub(crate) fn fract_gl(x: f32) -> f32 {
    let f = x - x.floor();
    // x - floor(x) rounds up to 1.0 for tiny negative x
    if f < 1.0 {
        f
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_hash_deterministic() {
        let seed = Vec2::new(0.372, 0.918);
        assert_eq!(seed_hash(seed).to_bits(), seed_hash(seed).to_bits());
    }

    #[test]
    fn test_seed_hash_range() {
        for y in -50..50 {
            for x in -50..50 {
                let h = seed_hash(Vec2::new(x as f32 * 0.0137, y as f32 * 0.0211));
                assert!((0.0..1.0).contains(&h), "hash {h} out of range");
            }
        }
    }

    #[test]
    fn test_seed_hash_decorrelates_neighbours() {
        // Adjacent texels of a 1024 shadow map should land on different rotations.
        let texel = 1.0 / 1024.0;
        let base = Vec2::new(0.5, 0.5);
        let mut distinct = 0;
        for i in 1..=16 {
            let a = seed_hash(base);
            let b = seed_hash(base + Vec2::new(i as f32 * texel, 0.0));
            if (a - b).abs() > 0.01 {
                distinct += 1;
            }
        }
        assert!(distinct >= 14);
    }

    #[test]
    fn test_mod_gl_negative() {
        let m = mod_gl(-1.0, PI);
        assert!((m - (PI - 1.0)).abs() < 1e-6);
        assert!(mod_gl(7.0, PI) < PI);
    }

    #[test]
    fn test_fract_gl() {
        assert_eq!(fract_gl(2.25), 0.25);
        assert_eq!(fract_gl(-0.25), 0.75);
        assert_eq!(fract_gl(-1e-12), 0.0);
    }
}

//! Percentage-closer filtering

use glam::Vec2;

use crate::depth::unpack_depth;
use crate::sampling::{OffsetSet, PCF_NUM_SAMPLES};
use crate::texture::ShadowMapSampler;

/// Fraction of the filter footprint that sees the light.
///
/// Two passes share the same pattern: the offsets themselves, then the
/// axis-swapped and negated ring `-offset.yx`. A sample counts as lit when
/// `z_receiver <= depth`. The result is `lit / (2 * PCF_NUM_SAMPLES)`.
pub fn pcf_filter<M>(
    shadow_map: &M,
    offsets: &OffsetSet,
    uv: Vec2,
    z_receiver: f32,
    filter_radius: f32,
) -> f32
where
    M: ShadowMapSampler + ?Sized,
{
    let lit = offsets
        .iter()
        .take(PCF_NUM_SAMPLES)
        .chain(offsets.swizzled().take(PCF_NUM_SAMPLES))
        .filter(|offset| {
            let depth = unpack_depth(shadow_map.sample(uv + *offset * filter_radius));
            z_receiver <= depth
        })
        .count();

    lit as f32 / (2 * PCF_NUM_SAMPLES) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth::pack_depth;
    use glam::Vec4;

    #[test]
    fn test_fully_lit() {
        let offsets = OffsetSet::poisson_disk(Vec2::new(0.1, 0.9));
        let map = |_: Vec2| pack_depth(1.0);
        assert_eq!(pcf_filter(&map, &offsets, Vec2::new(0.1, 0.9), 0.5, 0.01), 1.0);
    }

    #[test]
    fn test_fully_occluded() {
        let offsets = OffsetSet::poisson_disk(Vec2::new(0.1, 0.9));
        let map = |_: Vec2| pack_depth(0.2);
        assert_eq!(pcf_filter(&map, &offsets, Vec2::new(0.1, 0.9), 0.8, 0.01), 0.0);
    }

    #[test]
    fn test_equal_depth_counts_as_lit() {
        let offsets = OffsetSet::poisson_disk(Vec2::ZERO);
        let map = |_: Vec2| Vec4::new(0.5, 0.0, 0.0, 0.0);
        assert_eq!(pcf_filter(&map, &offsets, Vec2::ZERO, 0.5, 0.01), 1.0);
    }

    #[test]
    fn test_second_ring_is_swizzled() {
        // Every offset points along +x, so the first ring lands right of uv
        // and the swizzled ring lands below it.
        let offsets = OffsetSet::from_offsets([Vec2::new(0.5, 0.0); 10]);
        let lit = pack_depth(1.0);
        let dark = pack_depth(0.0);
        let map = move |uv: Vec2| if uv.x > 0.5 { lit } else { dark };

        let visibility = pcf_filter(&map, &offsets, Vec2::splat(0.5), 0.5, 0.1);
        assert_eq!(visibility, 0.5);

        let below = move |uv: Vec2| if uv.y < 0.5 { lit } else { dark };
        assert_eq!(pcf_filter(&below, &offsets, Vec2::splat(0.5), 0.5, 0.1), 0.5);
    }

    #[test]
    fn test_visibility_bounded() {
        let map = |uv: Vec2| pack_depth((uv.x * 37.0).sin().abs());
        for i in 0..50 {
            let uv = Vec2::new(i as f32 * 0.019, 0.4);
            let offsets = OffsetSet::poisson_disk(uv);
            let v = pcf_filter(&map, &offsets, uv, 0.5, 0.05);
            assert!((0.0..=1.0).contains(&v));
        }
    }
}

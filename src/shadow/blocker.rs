//! Blocker search
//!
//! Estimates the average depth of occluders between the receiver and the
//! light by scanning the shadow map around the receiver's UV.

use glam::Vec2;

use super::ShadowConfig;
use crate::depth::unpack_depth;
use crate::sampling::{OffsetSet, BLOCKER_SEARCH_NUM_SAMPLES};
use crate::texture::ShadowMapSampler;

/// Value a shader-side search returns when no blocker is found.
pub const NO_BLOCKER: f32 = -1.0;

/// Accumulated blocker samples from one search.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlockerSearch {
    /// Sum of decoded depths of the samples that occlude the receiver.
    pub depth_sum: f32,
    /// Number of occluding samples.
    pub count: u32,
}

impl BlockerSearch {
    /// Scan the shadow map at `uv + offset * search_radius` for each offset.
    ///
    /// A sample is a blocker when its decoded depth is strictly closer to the
    /// light than `z_receiver`.
    pub fn run<M>(
        shadow_map: &M,
        offsets: &OffsetSet,
        uv: Vec2,
        z_receiver: f32,
        search_radius: f32,
    ) -> Self
    where
        M: ShadowMapSampler + ?Sized,
    {
        let mut search = Self::default();
        for offset in offsets.iter().take(BLOCKER_SEARCH_NUM_SAMPLES) {
            let depth = unpack_depth(shadow_map.sample(uv + offset * search_radius));
            if depth < z_receiver {
                search.depth_sum += depth;
                search.count += 1;
            }
        }
        search
    }

    /// Mean blocker depth, or `None` when nothing occludes the receiver.
    pub fn average_depth(&self) -> Option<f32> {
        (self.count > 0).then(|| self.depth_sum / self.count as f32)
    }

    /// Mean blocker depth, or [`NO_BLOCKER`].
    pub fn depth_or_sentinel(&self) -> f32 {
        self.average_depth().unwrap_or(NO_BLOCKER)
    }
}

/// Radius of the blocker search region at the receiver's depth.
///
/// Similar triangles: the light's UV size projected from the near plane onto
/// the receiver, `light_size_uv * (z_receiver - near) / z_receiver`.
/// Not guarded against `z_receiver == 0`.
pub fn search_radius(config: &ShadowConfig, z_receiver: f32) -> f32 {
    config.light_size_uv() * (z_receiver - config.near_plane) / z_receiver
}

/// Average occluder depth around `uv`, or `None` when the receiver is unoccluded.
pub fn find_blocker<M>(
    shadow_map: &M,
    offsets: &OffsetSet,
    uv: Vec2,
    z_receiver: f32,
    search_radius: f32,
) -> Option<f32>
where
    M: ShadowMapSampler + ?Sized,
{
    BlockerSearch::run(shadow_map, offsets, uv, z_receiver, search_radius).average_depth()
}

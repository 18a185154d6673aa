//! Shadow queries
//!
//! Entry points a lighting pass calls once per shaded point.

use glam::{Vec2, Vec4};

use super::blocker::{search_radius, BlockerSearch, NO_BLOCKER};
use super::pcf::pcf_filter;
use super::penumbra::{filter_radius, penumbra_size};
use super::ShadowConfig;
use crate::error::Result;
use crate::sampling::OffsetSet;
use crate::texture::ShadowMapSampler;

/// Shadow filtering technique.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowTechnique {
    /// Fixed-radius percentage-closer filtering.
    Pcf = 0,
    /// Percentage-closer soft shadows with a blocker-driven radius.
    #[default]
    Pcss = 1,
}

impl ShadowTechnique {
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShadowTechnique::Pcf => "pcf",
            ShadowTechnique::Pcss => "pcss",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "pcf" => Some(ShadowTechnique::Pcf),
            "pcss" => Some(ShadowTechnique::Pcss),
            _ => None,
        }
    }
}

/// Every intermediate value of one PCSS query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PcssTrace {
    /// Blocker search radius in UV units.
    pub search_radius: f32,
    /// Blocker samples gathered by the search.
    pub blockers: BlockerSearch,
    /// Penumbra ratio, `None` when the query exited early.
    pub penumbra_ratio: Option<f32>,
    /// Adaptive PCF radius, `None` when the query exited early.
    pub filter_radius: Option<f32>,
    /// Final visibility.
    pub visibility: f32,
}

impl PcssTrace {
    /// Average blocker depth, if any blocker was found.
    pub fn blocker_depth(&self) -> Option<f32> {
        self.blockers.average_depth()
    }

    /// Average blocker depth, or [`NO_BLOCKER`]. Useful as a debug view.
    pub fn blocker_depth_or_sentinel(&self) -> f32 {
        self.blocker_depth().unwrap_or(NO_BLOCKER)
    }

    /// Whether filtering was skipped because nothing occluded the receiver.
    pub fn early_exit(&self) -> bool {
        self.filter_radius.is_none()
    }
}

/// Soft shadow lookups against a packed-depth shadow map.
///
/// `coords.xy` is the shadow-map UV and `coords.z` the receiver depth in the
/// same space as decoded shadow-map depths. Divisions by a zero receiver or
/// blocker depth are not guarded: they propagate infinities or NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SoftShadow {
    config: ShadowConfig,
}

impl SoftShadow {
    /// Create a filter from a validated config.
    pub fn new(config: ShadowConfig) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            light_size_uv = config.light_size_uv(),
            near_plane = config.near_plane,
            pcf_filter_radius = config.pcf_filter_radius,
            "soft shadow filter configured"
        );
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &ShadowConfig {
        &self.config
    }

    /// Fixed-radius PCF lookup.
    pub fn pcf<M>(&self, shadow_map: &M, coords: Vec4) -> f32
    where
        M: ShadowMapSampler + ?Sized,
    {
        let uv = Vec2::new(coords.x, coords.y);
        let z_receiver = coords.z;

        let offsets = OffsetSet::poisson_disk(uv);
        pcf_filter(
            shadow_map,
            &offsets,
            uv,
            z_receiver,
            self.config.pcf_filter_radius,
        )
    }

    /// Percentage-closer soft shadow lookup.
    ///
    /// Returns exactly `1.0` without filtering when the blocker search finds
    /// no occluder.
    pub fn pcss<M>(&self, shadow_map: &M, coords: Vec4) -> f32
    where
        M: ShadowMapSampler + ?Sized,
    {
        self.pcss_traced(shadow_map, coords).visibility
    }

    /// [`pcss`](Self::pcss), keeping every intermediate value.
    pub fn pcss_traced<M>(&self, shadow_map: &M, coords: Vec4) -> PcssTrace
    where
        M: ShadowMapSampler + ?Sized,
    {
        let uv = Vec2::new(coords.x, coords.y);
        let z_receiver = coords.z;

        // Step 1: blocker search
        let offsets = OffsetSet::poisson_disk(uv);
        let search_radius = search_radius(&self.config, z_receiver);
        let blockers = BlockerSearch::run(shadow_map, &offsets, uv, z_receiver, search_radius);

        let Some(avg_blocker_depth) = blockers.average_depth() else {
            return PcssTrace {
                search_radius,
                blockers,
                penumbra_ratio: None,
                filter_radius: None,
                visibility: 1.0,
            };
        };

        // Step 2: penumbra size
        let penumbra_ratio = penumbra_size(z_receiver, avg_blocker_depth);
        let filter_radius = filter_radius(&self.config, penumbra_ratio, z_receiver);

        // Step 3: filtering
        let visibility = pcf_filter(shadow_map, &offsets, uv, z_receiver, filter_radius);

        PcssTrace {
            search_radius,
            blockers,
            penumbra_ratio: Some(penumbra_ratio),
            filter_radius: Some(filter_radius),
            visibility,
        }
    }

    /// Run the lookup for `technique`.
    pub fn evaluate<M>(&self, technique: ShadowTechnique, shadow_map: &M, coords: Vec4) -> f32
    where
        M: ShadowMapSampler + ?Sized,
    {
        match technique {
            ShadowTechnique::Pcf => self.pcf(shadow_map, coords),
            ShadowTechnique::Pcss => self.pcss(shadow_map, coords),
        }
    }

    /// Evaluate many independent points, in parallel when the `parallel`
    /// feature is enabled. Results keep the input order.
    pub fn evaluate_batch<M>(
        &self,
        technique: ShadowTechnique,
        shadow_map: &M,
        coords: &[Vec4],
    ) -> Vec<f32>
    where
        M: ShadowMapSampler + ?Sized,
    {
        tracing::debug!(
            technique = technique.name(),
            points = coords.len(),
            "evaluating shadow batch"
        );

        #[cfg(feature = "parallel")]
        let visibility: Vec<f32> = {
            use rayon::prelude::*;
            coords
                .par_iter()
                .map(|&c| self.evaluate(technique, shadow_map, c))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let visibility: Vec<f32> = coords
            .iter()
            .map(|&c| self.evaluate(technique, shadow_map, c))
            .collect();

        visibility
    }
}

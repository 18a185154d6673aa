//! Soft shadow filtering
//!
//! Percentage-closer filtering (PCF) and percentage-closer soft shadows (PCSS)
//! over a packed-depth shadow map.
//!
//! # Pipeline
//!
//! Every query runs independently per shaded point:
//!
//! 1. Build an [`OffsetSet`](crate::sampling::OffsetSet) seeded by the point's UV
//! 2. Blocker search: average depth of occluders around the point (PCSS only)
//! 3. Penumbra estimate from receiver/blocker separation (PCSS only)
//! 4. Percentage-closer filter over two rings of offsets

mod blocker;
mod pcf;
mod penumbra;
mod query;

pub use blocker::{find_blocker, search_radius, BlockerSearch, NO_BLOCKER};
pub use pcf::pcf_filter;
pub use penumbra::{filter_radius, penumbra_size};
pub use query::{PcssTrace, ShadowTechnique, SoftShadow};

use crate::error::{Result, ShadowError};
use crate::sampling::{NUM_RINGS, NUM_SAMPLES};

/// Light source size in world units.
pub const LIGHT_WORLD_SIZE: f32 = 0.05;

/// Width of the light's orthographic frustum in world units.
pub const LIGHT_FRUSTUM_WIDTH: f32 = 10.0;

/// Light size expressed in shadow-map UV units.
pub const LIGHT_SIZE_UV: f32 = LIGHT_WORLD_SIZE / LIGHT_FRUSTUM_WIDTH;

/// Light near plane distance.
pub const NEAR_PLANE: f32 = 1.0;

/// Fixed filter radius used by plain PCF lookups.
pub const PCF_FILTER_RADIUS: f32 = 0.002;

/// Soft shadow configuration.
///
/// Sample and ring counts are compile-time constants in [`crate::sampling`]
/// because they size the offset array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowConfig {
    /// Area light size in world units. Default: 0.05.
    pub light_world_size: f32,
    /// Light frustum width in world units. Default: 10.0.
    pub light_frustum_width: f32,
    /// Light near plane distance. Default: 1.0.
    pub near_plane: f32,
    /// Filter radius for fixed-size PCF, in UV units. Default: 0.002.
    pub pcf_filter_radius: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            light_world_size: LIGHT_WORLD_SIZE,
            light_frustum_width: LIGHT_FRUSTUM_WIDTH,
            near_plane: NEAR_PLANE,
            pcf_filter_radius: PCF_FILTER_RADIUS,
        }
    }
}

impl ShadowConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the light size in world units.
    pub fn light_world_size(mut self, light_world_size: f32) -> Self {
        self.light_world_size = light_world_size;
        self
    }

    /// Set the light frustum width.
    pub fn light_frustum_width(mut self, light_frustum_width: f32) -> Self {
        self.light_frustum_width = light_frustum_width;
        self
    }

    /// Set the near plane distance.
    pub fn near_plane(mut self, near_plane: f32) -> Self {
        self.near_plane = near_plane;
        self
    }

    /// Set the fixed PCF filter radius.
    pub fn pcf_filter_radius(mut self, pcf_filter_radius: f32) -> Self {
        self.pcf_filter_radius = pcf_filter_radius;
        self
    }

    /// Light size projected into shadow-map UV space.
    pub fn light_size_uv(&self) -> f32 {
        self.light_world_size / self.light_frustum_width
    }

    /// Check that every field is finite and in range.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("light_world_size", self.light_world_size),
            ("light_frustum_width", self.light_frustum_width),
            ("near_plane", self.near_plane),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, value, "must be finite and positive"));
            }
        }

        if !self.pcf_filter_radius.is_finite() || self.pcf_filter_radius < 0.0 {
            return Err(invalid(
                "pcf_filter_radius",
                self.pcf_filter_radius,
                "must be finite and non-negative",
            ));
        }

        Ok(())
    }

    /// Get the uniform data for a shader-side filter.
    pub fn uniform(&self, technique: ShadowTechnique) -> SoftShadowUniform {
        SoftShadowUniform {
            light_size_uv: self.light_size_uv(),
            near_plane: self.near_plane,
            pcf_filter_radius: self.pcf_filter_radius,
            technique: technique.as_u32(),
            num_samples: NUM_SAMPLES as u32,
            num_rings: NUM_RINGS as u32,
            _padding: [0; 2],
        }
    }
}

fn invalid(field: &'static str, value: f32, reason: &'static str) -> ShadowError {
    tracing::warn!(field, value, reason, "rejected shadow config");
    ShadowError::InvalidConfig {
        field,
        value,
        reason,
    }
}

/// Soft shadow uniform data for GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SoftShadowUniform {
    /// Light size in shadow-map UV units.
    pub light_size_uv: f32,
    /// Light near plane distance.
    pub near_plane: f32,
    /// Fixed PCF filter radius.
    pub pcf_filter_radius: f32,
    /// [`ShadowTechnique`] discriminant.
    pub technique: u32,
    /// Offsets per generated pattern.
    pub num_samples: u32,
    /// Spiral turns per pattern.
    pub num_rings: u32,
    /// Padding to a 16-byte multiple.
    pub _padding: [u32; 2],
}

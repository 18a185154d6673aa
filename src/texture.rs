//! Shadow map textures
//!
//! The filters only need point reads of packed depth at normalized UVs, so the
//! shadow map is expressed as the [`ShadowMapSampler`] trait. Out-of-range UVs
//! are the sampler's business: the filters never clamp coordinates themselves.
//!
//! [`PackedDepthMap`] is a CPU-side RGBA8 texture with nearest filtering and
//! wgpu-style address modes.

use glam::{Vec2, Vec4};

use crate::depth::{from_rgba8, pack_depth, to_rgba8, unpack_depth};
use crate::error::{Result, ShadowError};

/// Read-only access to a packed-depth shadow map.
///
/// Implementations are shared between concurrent queries, hence `Sync`.
pub trait ShadowMapSampler: Sync {
    /// Fetch the packed texel covering `uv`.
    fn sample(&self, uv: Vec2) -> Vec4;
}

impl<F> ShadowMapSampler for F
where
    F: Fn(Vec2) -> Vec4 + Sync,
{
    fn sample(&self, uv: Vec2) -> Vec4 {
        self(uv)
    }
}

/// How texel coordinates outside `[0, 1)` are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AddressMode {
    /// Clamp to the nearest edge texel.
    #[default]
    ClampToEdge,
    /// Wrap around.
    Repeat,
    /// Wrap around, flipping every other tile.
    MirrorRepeat,
    /// Return a constant packed value outside the texture.
    ClampToBorder(Vec4),
}

impl AddressMode {
    /// Resolve a normalized coordinate to a texel index, or to the border value.
    fn resolve(self, coord: f32, size: u32) -> std::result::Result<u32, Vec4> {
        let coord = match self {
            AddressMode::ClampToEdge => coord,
            AddressMode::Repeat => coord - coord.floor(),
            AddressMode::MirrorRepeat => {
                let t = coord - 2.0 * (coord * 0.5).floor();
                if t > 1.0 {
                    2.0 - t
                } else {
                    t
                }
            }
            AddressMode::ClampToBorder(border) => {
                if !(0.0..1.0).contains(&coord) {
                    return Err(border);
                }
                coord
            }
        };

        // `as` saturates, so NaN and infinities land on an edge texel.
        let index = (coord * size as f32).floor() as i64;
        Ok(index.clamp(0, size as i64 - 1) as u32)
    }
}

/// An RGBA8 shadow map held in CPU memory.
#[derive(Debug, Clone)]
pub struct PackedDepthMap {
    width: u32,
    height: u32,
    texels: Vec<[u8; 4]>,
    address_mode: AddressMode,
}

impl PackedDepthMap {
    /// Create a map from tightly packed RGBA8 rows.
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let texel_count = Self::texel_count(width, height)?;
        let expected = texel_count * 4;
        if data.len() != expected {
            return Err(ShadowError::TexelDataMismatch {
                expected,
                actual: data.len(),
            });
        }

        let texels: &[[u8; 4]] = bytemuck::cast_slice(data);
        Ok(Self {
            width,
            height,
            texels: texels.to_vec(),
            address_mode: AddressMode::default(),
        })
    }

    /// Create a map from linear depths, packing each one.
    pub fn from_depths(width: u32, height: u32, depths: &[f32]) -> Result<Self> {
        let expected = Self::texel_count(width, height)?;
        if depths.len() != expected {
            return Err(ShadowError::DepthMismatch {
                expected,
                actual: depths.len(),
            });
        }

        Ok(Self {
            width,
            height,
            texels: depths.iter().map(|&d| to_rgba8(pack_depth(d))).collect(),
            address_mode: AddressMode::default(),
        })
    }

    /// Create a map filled with a single depth.
    pub fn uniform(width: u32, height: u32, depth: f32) -> Result<Self> {
        let count = Self::texel_count(width, height)?;
        Ok(Self {
            width,
            height,
            texels: vec![to_rgba8(pack_depth(depth)); count],
            address_mode: AddressMode::default(),
        })
    }

    /// Set the address mode used for out-of-range coordinates.
    pub fn address_mode(mut self, address_mode: AddressMode) -> Self {
        self.address_mode = address_mode;
        self
    }

    /// Get the texture size.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the raw RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texels)
    }

    /// Packed texel at integer coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is outside the texture.
    pub fn texel(&self, x: u32, y: u32) -> Vec4 {
        assert!(x < self.width && y < self.height, "texel ({x}, {y}) out of bounds");
        from_rgba8(self.texels[y as usize * self.width as usize + x as usize])
    }

    /// Decoded depth at integer coordinates.
    pub fn depth_at(&self, x: u32, y: u32) -> f32 {
        unpack_depth(self.texel(x, y))
    }

    fn texel_count(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(ShadowError::EmptyShadowMap);
        }
        Ok(width as usize * height as usize)
    }
}

impl ShadowMapSampler for PackedDepthMap {
    fn sample(&self, uv: Vec2) -> Vec4 {
        let x = self.address_mode.resolve(uv.x, self.width);
        let y = self.address_mode.resolve(uv.y, self.height);
        match (x, y) {
            (Ok(x), Ok(y)) => self.texel(x, y),
            (Err(border), _) | (_, Err(border)) => border,
        }
    }
}

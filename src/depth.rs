//! Packed depth encoding
//!
//! Shadow maps store depth across the four 8-bit channels of an RGBA texel,
//! most significant channel first. Decoding is a weighted sum with weights
//! `1, 1/256, 1/256², 1/256³`.

use glam::Vec4;

/// Channel weights applied when decoding a packed texel.
pub const BIT_SHIFT: Vec4 = Vec4::new(
    1.0,
    1.0 / 256.0,
    1.0 / (256.0 * 256.0),
    1.0 / (256.0 * 256.0 * 256.0),
);

/// Decode a packed RGBA texel into a single depth value.
#[inline]
pub fn unpack_depth(rgba_depth: Vec4) -> f32 {
    rgba_depth.dot(BIT_SHIFT)
}

/// Encode a depth in `[0, 1]` into four 8-bit channels.
///
/// This is the encoding the depth pass is expected to write. Every channel is
/// a multiple of `1/255`, so the result survives a round trip through an
/// RGBA8 texture. Inputs outside `[0, 1]` are clamped.
pub fn pack_depth(depth: f32) -> Vec4 {
    let mut remainder = depth.clamp(0.0, 1.0);
    let mut packed = [0.0f32; 4];

    for (i, channel) in packed.iter_mut().enumerate() {
        let weight = BIT_SHIFT[i];
        let value = ((remainder / weight * 255.0).floor() / 255.0).min(1.0);
        *channel = value;
        remainder = (remainder - value * weight).max(0.0);
    }

    Vec4::from_array(packed)
}

/// Convert a packed texel into RGBA8 bytes.
pub fn to_rgba8(packed: Vec4) -> [u8; 4] {
    let bytes = (packed.clamp(Vec4::ZERO, Vec4::ONE) * 255.0).round();
    [bytes.x as u8, bytes.y as u8, bytes.z as u8, bytes.w as u8]
}

/// Convert RGBA8 bytes into a normalized packed texel.
pub fn from_rgba8(bytes: [u8; 4]) -> Vec4 {
    Vec4::new(
        bytes[0] as f32,
        bytes[1] as f32,
        bytes[2] as f32,
        bytes[3] as f32,
    ) / 255.0
}

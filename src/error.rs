//! Error types
//!
//! The filtering pipeline itself never fails. Errors only arise at the edges:
//! rejecting a light configuration or building a CPU shadow map from raw data.

use thiserror::Error;

/// Errors reported by configuration and shadow map construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShadowError {
    /// A [`ShadowConfig`](crate::ShadowConfig) field is out of range.
    #[error("invalid shadow config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },

    /// Shadow maps need at least one texel.
    #[error("shadow map must have a non-zero width and height")]
    EmptyShadowMap,

    /// RGBA8 data does not cover `width * height` texels.
    #[error("texel data length mismatch: expected {expected} bytes, got {actual}")]
    TexelDataMismatch { expected: usize, actual: usize },

    /// Depth data does not cover `width * height` texels.
    #[error("depth data length mismatch: expected {expected} values, got {actual}")]
    DepthMismatch { expected: usize, actual: usize },
}

/// Result alias for fallible shadow operations.
pub type Result<T> = std::result::Result<T, ShadowError>;

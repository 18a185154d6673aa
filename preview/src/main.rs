//! Renders PCF and PCSS visibility for a synthetic scene.
//!
//! A square occluder floats above a floor. Every pixel of the output is a
//! floor point; its visibility is written as a grayscale PNG per technique.
//!
//! Run: `cargo run --manifest-path preview/Cargo.toml -- [output dir]`

use std::path::PathBuf;

use anyhow::Context;
use glam::Vec4;
use rein_shadow::{PackedDepthMap, ShadowConfig, ShadowTechnique, SoftShadow};

const SHADOW_MAP_SIZE: u32 = 512;
const IMAGE_SIZE: u32 = 256;

const FLOOR_DEPTH: f32 = 0.9;
const OCCLUDER_DEPTH: f32 = 0.3;
const OCCLUDER_MIN: f32 = 0.35;
const OCCLUDER_MAX: f32 = 0.65;

/// Shadow map of the floor with the occluder square in front of it.
fn build_shadow_map(size: u32) -> anyhow::Result<PackedDepthMap> {
    let depths: Vec<f32> = (0..size * size)
        .map(|i| {
            let u = ((i % size) as f32 + 0.5) / size as f32;
            let v = ((i / size) as f32 + 0.5) / size as f32;
            let inside = (OCCLUDER_MIN..OCCLUDER_MAX).contains(&u)
                && (OCCLUDER_MIN..OCCLUDER_MAX).contains(&v);
            if inside {
                OCCLUDER_DEPTH
            } else {
                FLOOR_DEPTH
            }
        })
        .collect();

    Ok(PackedDepthMap::from_depths(size, size, &depths)?)
}

/// One floor receiver per output pixel.
fn floor_receivers(size: u32) -> Vec<Vec4> {
    (0..size * size)
        .map(|i| {
            let u = ((i % size) as f32 + 0.5) / size as f32;
            let v = ((i / size) as f32 + 0.5) / size as f32;
            Vec4::new(u, v, FLOOR_DEPTH, 1.0)
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let config = ShadowConfig::default()
        .light_world_size(0.5)
        .near_plane(0.1)
        .pcf_filter_radius(0.004);
    let shadow = SoftShadow::new(config)?;

    let map = build_shadow_map(SHADOW_MAP_SIZE)?;
    let receivers = floor_receivers(IMAGE_SIZE);

    for technique in [ShadowTechnique::Pcf, ShadowTechnique::Pcss] {
        let visibility = shadow.evaluate_batch(technique, &map, &receivers);
        let mean = visibility.iter().sum::<f32>() / visibility.len() as f32;
        log::info!("{}: mean visibility {:.4}", technique.name(), mean);

        let frame = image::GrayImage::from_fn(IMAGE_SIZE, IMAGE_SIZE, |x, y| {
            let v = visibility[(y * IMAGE_SIZE + x) as usize];
            image::Luma([(v.clamp(0.0, 1.0) * 255.0).round() as u8])
        });

        let path = out_dir.join(format!("{}.png", technique.name()));
        frame
            .save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}

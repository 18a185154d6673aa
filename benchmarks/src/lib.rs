//! Shared setup helpers for rein-shadow benchmarks.
//!
//! ## Running
//!
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench shadow
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench shadow -- pcss

use glam::Vec4;
use rein_shadow::PackedDepthMap;

/// Depth of the floor receiving the shadow.
pub const FLOOR_DEPTH: f32 = 0.9;

/// Shadow map with a floor at [`FLOOR_DEPTH`] and an occluder square at 0.3
/// covering the middle third.
pub fn occluder_scene(size: u32) -> PackedDepthMap {
    let depths: Vec<f32> = (0..size * size)
        .map(|i| {
            let u = (i % size) as f32 / size as f32;
            let v = (i / size) as f32 / size as f32;
            let inside = (1.0 / 3.0..2.0 / 3.0).contains(&u) && (1.0 / 3.0..2.0 / 3.0).contains(&v);
            if inside {
                0.3
            } else {
                FLOOR_DEPTH
            }
        })
        .collect();
    PackedDepthMap::from_depths(size, size, &depths).expect("scene dimensions match")
}

/// `n × n` floor receivers spread over the whole map.
pub fn receiver_grid(n: u32) -> Vec<Vec4> {
    (0..n * n)
        .map(|i| {
            let u = ((i % n) as f32 + 0.5) / n as f32;
            let v = ((i / n) as f32 + 0.5) / n as f32;
            Vec4::new(u, v, FLOOR_DEPTH, 1.0)
        })
        .collect()
}

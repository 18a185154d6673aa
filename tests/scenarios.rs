//! End-to-end shadow lookups through the public API.

use rein_shadow::glam::{Vec2, Vec4};
use rein_shadow::{
    find_blocker, pcf_filter, search_radius, AddressMode, OffsetSet, PackedDepthMap, ShadowConfig,
    ShadowTechnique, SoftShadow, NO_BLOCKER,
};

#[test]
fn test_uniform_far_map_is_fully_lit() {
    let map = PackedDepthMap::uniform(128, 128, 1.0).unwrap();
    let shadow = SoftShadow::default();
    let coords = Vec4::new(0.5, 0.5, 0.5, 1.0);

    let offsets = OffsetSet::poisson_disk(Vec2::new(0.5, 0.5));
    let radius = search_radius(shadow.config(), 0.5);
    assert_eq!(find_blocker(&map, &offsets, Vec2::splat(0.5), 0.5, radius), None);

    let trace = shadow.pcss_traced(&map, coords);
    assert_eq!(trace.blocker_depth_or_sentinel(), NO_BLOCKER);
    assert_eq!(shadow.pcss(&map, coords), 1.0);
    assert_eq!(shadow.pcf(&map, coords), 1.0);
}

#[test]
fn test_uniform_near_map_is_fully_shadowed() {
    let map = PackedDepthMap::uniform(128, 128, 0.2).unwrap();
    let shadow = SoftShadow::default();
    let trace = shadow.pcss_traced(&map, Vec4::new(0.5, 0.5, 0.8, 1.0));

    assert_eq!(trace.blockers.count, 10);
    assert!((trace.penumbra_ratio.unwrap() - 3.0).abs() < 1e-4);
    assert_eq!(trace.visibility, 0.0);
}

#[test]
fn test_zero_depth_blockers_propagate_infinity() {
    let map = PackedDepthMap::uniform(16, 16, 0.0).unwrap();
    let trace = SoftShadow::default().pcss_traced(&map, Vec4::new(0.5, 0.5, 0.5, 1.0));
    assert!(trace.penumbra_ratio.unwrap().is_infinite());
    assert!(trace.filter_radius.unwrap().is_infinite());
}

#[test]
fn test_penumbra_widens_with_receiver_distance() {
    // Occluder edge at u = 0.5. A receiver further behind the occluder gets a
    // larger filter radius.
    let size = 256;
    let depths: Vec<f32> = (0..size * size)
        .map(|i| if (i % size) < size / 2 { 0.2 } else { 1.0 })
        .collect();
    let map = PackedDepthMap::from_depths(size, size, &depths).unwrap();
    let shadow = SoftShadow::new(ShadowConfig::default().near_plane(0.1)).unwrap();

    let near = shadow.pcss_traced(&map, Vec4::new(0.45, 0.5, 0.4, 1.0));
    let far = shadow.pcss_traced(&map, Vec4::new(0.45, 0.5, 0.9, 1.0));
    assert!(far.filter_radius.unwrap() > near.filter_radius.unwrap());
}

#[test]
fn test_visibility_stays_in_unit_range() {
    let size = 64;
    let depths: Vec<f32> = (0..size * size)
        .map(|i| ((i * 7919) % 1000) as f32 / 1000.0)
        .collect();
    let map = PackedDepthMap::from_depths(size, size, &depths)
        .unwrap()
        .address_mode(AddressMode::Repeat);
    let shadow = SoftShadow::new(ShadowConfig::default().near_plane(0.1)).unwrap();

    let coords: Vec<Vec4> = (0..400)
        .map(|i| {
            let u = (i % 20) as f32 / 20.0;
            let v = (i / 20) as f32 / 20.0;
            Vec4::new(u, v, 0.3 + 0.6 * u, 1.0)
        })
        .collect();

    for technique in [ShadowTechnique::Pcf, ShadowTechnique::Pcss] {
        for v in shadow.evaluate_batch(technique, &map, &coords) {
            assert!((0.0..=1.0).contains(&v), "{technique:?} produced {v}");
        }
    }
}

#[test]
fn test_pcf_filter_counts_both_rings() {
    let map = PackedDepthMap::uniform(8, 8, 0.5).unwrap();
    let offsets = OffsetSet::poisson_disk(Vec2::new(0.25, 0.75));
    // Receiver slightly in front of the map: every one of the 20 samples is lit.
    let v = pcf_filter(&map, &offsets, Vec2::new(0.25, 0.75), 0.4, 0.05);
    assert_eq!(v, 1.0);
}

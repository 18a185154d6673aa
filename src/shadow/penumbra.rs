//! Penumbra estimation

use super::ShadowConfig;

/// Ratio of the receiver/blocker gap to the blocker's distance from the light.
///
/// Parallel plane estimation: `(z_receiver - z_blocker) / z_blocker`.
/// A zero blocker depth yields infinity or NaN.
#[inline]
pub fn penumbra_size(z_receiver: f32, z_blocker: f32) -> f32 {
    (z_receiver - z_blocker) / z_blocker
}

/// PCF radius for a penumbra ratio, projected back onto the near plane.
pub fn filter_radius(config: &ShadowConfig, penumbra_ratio: f32, z_receiver: f32) -> f32 {
    penumbra_ratio * config.light_size_uv() * config.near_plane / z_receiver
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_penumbra_size() {
        assert!((penumbra_size(0.8, 0.2) - 3.0).abs() < 1e-6);
        assert_eq!(penumbra_size(0.5, 0.5), 0.0);
    }

    #[test]
    fn test_penumbra_monotonic_in_receiver() {
        let blocker = 0.3;
        let mut previous = penumbra_size(0.3, blocker);
        for i in 1..100 {
            let current = penumbra_size(0.3 + i as f32 * 0.01, blocker);
            assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn test_penumbra_zero_blocker() {
        assert_eq!(penumbra_size(0.5, 0.0), f32::INFINITY);
        assert!(penumbra_size(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_filter_radius() {
        let config = ShadowConfig::default();
        // ratio 3, light 0.005 uv, near 1, receiver 0.8
        let radius = filter_radius(&config, 3.0, 0.8);
        assert!((radius - 0.01875).abs() < 1e-7);
    }
}

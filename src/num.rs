//! Utilities for numerics.

use std::ops::RangeInclusive;

/// Linearly maps `value` from one range onto another, clamping at the edges.
///
/// Values at the boundaries of `from` map *exactly* onto the boundaries of
/// `to`; values outside `from` are clamped to the nearest boundary first. `to`
/// may be inverted (`to.start() > to.end()`), in which case the mapping is
/// order-reversing.
///
/// # Panics
///
/// Panics if `from` is empty or degenerate (`from.start() >= from.end()`).
pub fn map_range(value: f32, from: RangeInclusive<f32>, to: RangeInclusive<f32>) -> f32 {
    let (a, b) = from.into_inner();
    let (c, d) = to.into_inner();
    assert!(a < b, "invalid source range {a}..={b}");

    let t = ((value - a) / (b - a)).clamp(0.0, 1.0);
    c * (1.0 - t) + d * t
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn maps_boundaries_exactly() {
        assert_eq!(map_range(50.0, 50.0..=300.0, 0.0..=100.0), 0.0);
        assert_eq!(map_range(300.0, 50.0..=300.0, 0.0..=100.0), 100.0);
        assert_eq!(map_range(0.1, 0.1..=0.9, 0.3..=0.7), 0.3);
        assert_eq!(map_range(0.9, 0.1..=0.9, 0.3..=0.7), 0.7);
    }

    #[test]
    fn maps_midpoint() {
        assert_eq!(map_range(175.0, 50.0..=300.0, 0.0..=100.0), 50.0);
    }

    #[test]
    fn clamps_outside_source_range() {
        assert_eq!(map_range(-50.0, 50.0..=300.0, 0.0..=100.0), 0.0);
        assert_eq!(map_range(400.0, 50.0..=300.0, 0.0..=100.0), 100.0);
    }

    #[test]
    fn inverted_target_range() {
        // Volume-bar style mapping: a growing pinch gap shrinks the bar height.
        assert_eq!(map_range(50.0, 50.0..=300.0, 400.0..=150.0), 400.0);
        assert_eq!(map_range(300.0, 50.0..=300.0, 400.0..=150.0), 150.0);
        assert_eq!(map_range(175.0, 50.0..=300.0, 400.0..=150.0), 275.0);
    }

    #[test]
    fn monotonic() {
        let samples = (0..=100).map(|i| i as f32 * 4.0);

        let mut last = f32::MIN;
        for v in samples.clone() {
            let mapped = map_range(v, 50.0..=300.0, -65.25..=0.0);
            assert!(mapped >= last, "not monotonic at {v}: {mapped} < {last}");
            last = mapped;
        }

        // Anti-monotonic when the target range is inverted.
        let mut last = f32::MAX;
        for v in samples {
            let mapped = map_range(v, 50.0..=300.0, 400.0..=150.0);
            assert!(mapped <= last, "not anti-monotonic at {v}: {mapped} > {last}");
            last = mapped;
        }
    }

    #[test]
    fn volume_mapping() {
        // Pinch gap halfway open maps to half of the device's dB span.
        assert_relative_eq!(
            map_range(175.0, 50.0..=300.0, -65.25..=0.0),
            -32.625,
            epsilon = 1e-4,
        );
    }

    #[test]
    #[should_panic]
    fn rejects_empty_source_range() {
        map_range(1.0, 3.0..=3.0, 0.0..=1.0);
    }
}

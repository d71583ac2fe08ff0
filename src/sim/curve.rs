//! Track centerline as a function of longitudinal position
//!
//! The trail sways along a sine wave: lateral offset `A·sin(f·z)`. The
//! heading is the negated arctangent of the slope so a forward-facing entity
//! banks into the turn. Both are smooth everywhere, which keeps camera
//! look-ahead and pickup tests stable between neighbouring samples.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{CURVE_AMPLITUDE, CURVE_FREQUENCY};
use crate::rotate_y;

/// Centerline sample at one longitudinal position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSample {
    /// Lateral offset of the centerline
    pub lateral_x: f32,
    /// Yaw of the local tangent (radians)
    pub heading: f32,
}

/// Sinusoidal trail shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackCurve {
    pub amplitude: f32,
    pub frequency: f32,
}

impl Default for TrackCurve {
    fn default() -> Self {
        Self {
            amplitude: CURVE_AMPLITUDE,
            frequency: CURVE_FREQUENCY,
        }
    }
}

impl TrackCurve {
    pub fn new(amplitude: f32, frequency: f32) -> Self {
        Self { amplitude, frequency }
    }

    /// Sample the centerline at world z
    #[inline]
    pub fn offset(&self, z: f32) -> CurveSample {
        let phase = self.frequency * z;
        let slope = self.amplitude * self.frequency * phase.cos();
        CurveSample {
            lateral_x: self.amplitude * phase.sin(),
            heading: -slope.atan(),
        }
    }

    /// Place a point given in a frame anchored on the centerline at `z`
    ///
    /// The local frame is yawed against the heading, so its -z axis runs
    /// along the tangent in the direction of travel, then translated to
    /// `(lateral_x, 0, z)`. Segments use this for their item layout.
    pub fn to_world(&self, z: f32, local: Vec3) -> Vec3 {
        let sample = self.offset(z);
        Vec3::new(sample.lateral_x, 0.0, z) + rotate_y(local, -sample.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_origin_sample() {
        let curve = TrackCurve::default();
        let s = curve.offset(0.0);
        assert_eq!(s.lateral_x, 0.0);
        // slope at 0 is A·f = 0.2
        assert!((s.heading + 0.2_f32.atan()).abs() < 1e-6);
    }

    #[test]
    fn test_heading_flat_at_peak() {
        let curve = TrackCurve::default();
        // sin peaks at f·z = π/2, slope is zero there
        let z = std::f32::consts::FRAC_PI_2 / curve.frequency;
        let s = curve.offset(z);
        assert!((s.lateral_x - curve.amplitude).abs() < 1e-4);
        assert!(s.heading.abs() < 1e-4);
    }

    #[test]
    fn test_to_world_without_local_offset_is_centerline() {
        let curve = TrackCurve::default();
        let p = curve.to_world(-40.0, Vec3::ZERO);
        assert!((p.x - curve.offset(-40.0).lateral_x).abs() < 1e-6);
        assert_eq!(p.z, -40.0);
    }

    #[test]
    fn test_local_forward_follows_centerline() {
        let curve = TrackCurve::default();
        // A point 5 units ahead in the anchor frame lands close to the
        // centerline 5 units further along
        let p = curve.to_world(0.0, Vec3::new(0.0, 0.0, -5.0));
        let ahead = curve.offset(p.z);
        assert!((p.x - ahead.lateral_x).abs() < 0.05);
    }

    proptest! {
        #[test]
        fn prop_lateral_bounded_by_amplitude(z in -1.0e5f32..1.0e5) {
            let curve = TrackCurve::default();
            prop_assert!(curve.offset(z).lateral_x.abs() <= curve.amplitude + 1e-4);
        }

        #[test]
        fn prop_offset_is_continuous(z in -1.0e4f32..1.0e4) {
            let curve = TrackCurve::default();
            let eps = 1e-2;
            let a = curve.offset(z);
            let b = curve.offset(z + eps);
            // |d/dz| ≤ A·f for lateral, heading changes even slower
            prop_assert!((a.lateral_x - b.lateral_x).abs() <= curve.amplitude * curve.frequency * eps + 1e-3);
            prop_assert!((a.heading - b.heading).abs() < 1e-3);
        }
    }
}

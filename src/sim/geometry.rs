//! Ackermann steering geometry
//!
//! The inner wheel traces a tighter arc than the outer wheel, so it has to
//! steer harder. Both angles use the single-track approximation: the inner
//! wheel's arc radius is the turn radius minus the track width.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::cartesian_to_polar;
use crate::consts::{TRACK_WIDTH, WHEELBASE};

/// Fixed vehicle dimensions (meters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleGeometry {
    /// Front-to-rear axle distance
    pub wheelbase: f32,
    /// Left-to-right wheel separation
    pub track_width: f32,
}

impl Default for VehicleGeometry {
    fn default() -> Self {
        Self {
            wheelbase: WHEELBASE,
            track_width: TRACK_WIDTH,
        }
    }
}

/// Steering angles of the front wheels (degrees)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelAngles {
    pub inner: f32,
    pub outer: f32,
}

impl WheelAngles {
    /// Both wheels pointing straight ahead
    pub const STRAIGHT: Self = Self {
        inner: 0.0,
        outer: 0.0,
    };
}

/// Inner/outer wheel angles for a turn of `turn_radius` meters
pub fn ackermann_angles(geometry: &VehicleGeometry, turn_radius: f32) -> WheelAngles {
    let outer = geometry.wheelbase.atan2(turn_radius);
    let inner = geometry.wheelbase.atan2(turn_radius - geometry.track_width);
    WheelAngles {
        inner: inner.to_degrees(),
        outer: outer.to_degrees(),
    }
}

/// Body tilt (degrees) for a vehicle at `position` orbiting `pivot`.
///
/// Screen y grows downward, so the angle is negated to get the
/// counter-clockwise on-screen rotation.
pub fn tilt_angle(position: Vec2, pivot: Vec2) -> f32 {
    let (_, theta) = cartesian_to_polar(position - pivot);
    -theta.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_wheel_angles() {
        let angles = ackermann_angles(&VehicleGeometry::default(), 5.0);
        assert!((angles.outer - 21.80).abs() < 0.01, "outer = {}", angles.outer);
        assert!((angles.inner - 27.76).abs() < 0.01, "inner = {}", angles.inner);
    }

    #[test]
    fn test_tight_turn_inner_past_ninety() {
        // Turn radius inside the track width puts the inner wheel's arc
        // center on the other side of the vehicle.
        let angles = ackermann_angles(&VehicleGeometry::default(), 1.0);
        assert!(angles.inner > 90.0);
        assert!(angles.outer < 90.0);
    }

    #[test]
    fn test_tilt_angle_quadrants() {
        let pivot = Vec2::new(400.0, 300.0);
        assert!(tilt_angle(Vec2::new(900.0, 300.0), pivot).abs() < 1e-4);
        // Below the pivot on screen (y down) reads as a clockwise tilt
        assert!((tilt_angle(Vec2::new(400.0, 800.0), pivot) + 90.0).abs() < 1e-4);
        assert!((tilt_angle(Vec2::new(400.0, 0.0), pivot) - 90.0).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_inner_steers_harder(radius in 1.21f32..1000.0) {
            let angles = ackermann_angles(&VehicleGeometry::default(), radius);
            prop_assert!(angles.inner >= angles.outer);
        }
    }
}

//! Clamping rules that keep the steering model in its valid domain
//!
//! Every mutator runs its result through one of these, and `advance()`
//! runs the position through `clamp_to_canvas`. All of them are idempotent.

use glam::Vec2;

use crate::consts::*;

/// Turn radius floor. Keeps the circular branch away from a zero divisor.
#[inline]
pub fn clamp_turn_radius(radius: f32) -> f32 {
    radius.max(MIN_TURN_RADIUS)
}

/// Zoom level limited to [MIN_ZOOM, MAX_ZOOM]
#[inline]
pub fn clamp_zoom(zoom: f32) -> f32 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Speed limited to [MIN_SPEED, MAX_SPEED] (same for keyboard and pointer input)
#[inline]
pub fn clamp_speed(speed: f32) -> f32 {
    speed.clamp(MIN_SPEED, MAX_SPEED)
}

/// Keep a point inside [0, width] x [0, height]. NaN lands on the origin edge.
#[inline]
pub fn clamp_to_canvas(pos: Vec2, width: f32, height: f32) -> Vec2 {
    let axis = |v: f32, max: f32| if v.is_nan() { 0.0 } else { v.clamp(0.0, max.max(0.0)) };
    Vec2::new(axis(pos.x, width), axis(pos.y, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_turn_radius_floor() {
        assert_eq!(clamp_turn_radius(-3.0), MIN_TURN_RADIUS);
        assert_eq!(clamp_turn_radius(0.0), MIN_TURN_RADIUS);
        assert_eq!(clamp_turn_radius(5.0), 5.0);
    }

    #[test]
    fn test_zoom_range() {
        assert_eq!(clamp_zoom(0.01), MIN_ZOOM);
        assert_eq!(clamp_zoom(12.0), MAX_ZOOM);
        assert_eq!(clamp_zoom(1.0), 1.0);
    }

    #[test]
    fn test_speed_floor() {
        assert_eq!(clamp_speed(0.0), MIN_SPEED);
        assert_eq!(clamp_speed(-1.0), MIN_SPEED);
        assert_eq!(clamp_speed(2.0), 2.0);
        assert_eq!(clamp_speed(3.0e38), MAX_SPEED);
    }

    #[test]
    fn test_canvas_clamp() {
        let p = clamp_to_canvas(Vec2::new(-10.0, 900.0), 800.0, 600.0);
        assert_eq!(p, Vec2::new(0.0, 600.0));
        let inside = Vec2::new(400.0, 300.0);
        assert_eq!(clamp_to_canvas(inside, 800.0, 600.0), inside);
        let wild = clamp_to_canvas(Vec2::new(f32::NAN, f32::INFINITY), 800.0, 600.0);
        assert_eq!(wild, Vec2::new(0.0, 600.0));
    }

    proptest! {
        #[test]
        fn prop_clamps_are_idempotent(v in -1e6f32..1e6) {
            let r = clamp_turn_radius(v);
            prop_assert_eq!(clamp_turn_radius(r), r);
            let z = clamp_zoom(v);
            prop_assert_eq!(clamp_zoom(z), z);
            let s = clamp_speed(v);
            prop_assert_eq!(clamp_speed(s), s);
        }

        #[test]
        fn prop_canvas_clamp_stays_inside(x in -1e6f32..1e6, y in -1e6f32..1e6) {
            let p = clamp_to_canvas(Vec2::new(x, y), 800.0, 600.0);
            prop_assert!(p.x >= 0.0 && p.x <= 800.0);
            prop_assert!(p.y >= 0.0 && p.y <= 600.0);
            prop_assert_eq!(clamp_to_canvas(p, 800.0, 600.0), p);
        }
    }
}

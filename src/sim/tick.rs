//! Per-tick motion update
//!
//! One call to `advance()` moves the vehicle one tick along its orbit and
//! refreshes every derived quantity (position, tilt, wheel angles).

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{WheelAngles, ackermann_angles, tilt_angle};
use super::limits::clamp_to_canvas;
use super::state::SteeringModel;
use crate::consts::PIXELS_PER_METER;
use crate::polar_to_cartesian;

/// Which branch a tick took
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionMode {
    /// Orbiting the pivot at the current turn radius
    Circular,
    /// Turn radius reached the update at or below zero; drive straight
    Straight,
}

impl SteeringModel {
    /// Advance the model by one simulation tick
    pub fn advance(&mut self) -> MotionMode {
        // The mutators already floor the radius; this guards direct writes.
        if self.turn_radius > 0.0 {
            self.advance_circular();
            MotionMode::Circular
        } else {
            log::warn!(
                "Turn radius {} reached the motion update, moving straight",
                self.turn_radius
            );
            self.advance_straight();
            MotionMode::Straight
        }
    }

    fn advance_circular(&mut self) {
        // Arc length (pixels) over orbit radius (pixels) gives radians
        let step = self.speed as f64 / self.turn_radius as f64 / PIXELS_PER_METER as f64;
        let heading = self.heading + step;
        if !heading.is_finite() {
            log::warn!("Heading overflowed after a step of {step}, holding position");
            return;
        }
        self.heading = heading;

        let orbit = self.turn_radius as f64 * PIXELS_PER_METER as f64 * self.zoom_level as f64;
        let offset = DVec2::new(orbit * heading.cos(), orbit * heading.sin());
        let position = (self.pivot.as_dvec2() + offset).as_vec2();
        self.position = clamp_to_canvas(position, self.canvas.width, self.canvas.height);

        self.wheel_angles = ackermann_angles(&self.geometry, self.turn_radius);
        self.tilt_angle = tilt_angle(self.position, self.pivot);
    }

    fn advance_straight(&mut self) {
        let position = self.position + polar_to_cartesian(self.speed, self.heading as f32);
        self.position = clamp_to_canvas(position, self.canvas.width, self.canvas.height);

        self.wheel_angles = WheelAngles::STRAIGHT;
        self.tilt_angle = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::state::Canvas;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_first_tick_from_rest() {
        let mut model = SteeringModel::new(5.0, 2.0);
        assert_eq!(model.pivot(), Vec2::new(400.0, 300.0));

        assert_eq!(model.advance(), MotionMode::Circular);
        assert!((model.heading() - 0.004).abs() < 1e-9);

        let expected = Vec2::new(400.0 + 500.0 * 0.004f32.cos(), 300.0 + 500.0 * 0.004f32.sin());
        // Orbit of 500 px on an 800 px canvas runs past the right edge
        assert_eq!(model.position().x, 800.0);
        assert!((model.position().y - expected.y).abs() < 1e-3);
    }

    #[test]
    fn test_first_tick_on_roomy_canvas() {
        let mut model = SteeringModel::with_canvas(5.0, 2.0, Canvas::new(2000.0, 2000.0));
        model.set_canvas_center(400.0, 300.0);
        model.advance();

        let expected = Vec2::new(400.0 + 500.0 * 0.004f32.cos(), 300.0 + 500.0 * 0.004f32.sin());
        assert!((model.position() - expected).length() < 1e-3);
    }

    #[test]
    fn test_wheel_angles_after_tick() {
        let mut model = SteeringModel::new(5.0, 2.0);
        model.advance();
        let angles = model.wheel_angles();
        assert!((angles.outer - 21.80).abs() < 0.01);
        assert!((angles.inner - 27.76).abs() < 0.01);
    }

    #[test]
    fn test_tilt_follows_orbit() {
        let mut model = SteeringModel::with_canvas(2.0, 2.0, Canvas::new(800.0, 600.0));
        // Quarter orbit: heading pi/2 puts the vehicle below the pivot on screen
        model.heading = std::f64::consts::FRAC_PI_2 - 2.0 / 2.0 / PIXELS_PER_METER as f64;
        model.advance();
        assert!((model.position() - Vec2::new(400.0, 500.0)).length() < 1e-2);
        assert!((model.tilt_angle() + 90.0).abs() < 1e-2);
    }

    #[test]
    fn test_zero_radius_falls_back_to_straight() {
        let mut model = SteeringModel::new(5.0, 2.0);
        model.advance();
        assert!(model.wheel_angles().inner > 0.0);

        model.turn_radius = 0.0;
        model.heading = 0.0;
        model.position = Vec2::new(100.0, 100.0);

        assert_eq!(model.advance(), MotionMode::Straight);
        assert_eq!(model.wheel_angles(), WheelAngles::STRAIGHT);
        assert_eq!(model.tilt_angle(), 0.0);
        assert_eq!(model.position(), Vec2::new(102.0, 100.0));
        // Heading is left alone in straight mode
        assert_eq!(model.heading(), 0.0);
    }

    #[test]
    fn test_straight_line_stops_at_edge() {
        let mut model = SteeringModel::new(5.0, 2.0);
        model.turn_radius = -1.0;
        model.heading = std::f64::consts::PI;
        model.position = Vec2::new(1.0, 300.0);
        model.advance();
        assert_eq!(model.position().x, 0.0);
    }

    #[test]
    fn test_mutators_keep_circular_mode() {
        let mut model = SteeringModel::new(0.1, 2.0);
        model.adjust_turn_radius(-10.0);
        assert_eq!(model.advance(), MotionMode::Circular);
    }

    #[test]
    fn test_heading_accumulates_unbounded() {
        let mut model = SteeringModel::new(0.1, 10.0);
        // 1 rad per tick
        for _ in 0..10 {
            model.advance();
        }
        assert!((model.heading() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_heading_keeps_moving_after_hours() {
        // Roughly five hours of ticks at a slow, wide orbit
        let mut model = SteeringModel::new(8.0, 0.1);
        model.heading = 4100.0;
        for _ in 0..600 {
            model.advance();
        }
        let expected = 4100.0 + 600.0 * (0.1f32 as f64 / 8.0 / 100.0);
        assert!((model.heading() - expected).abs() < 1e-6, "heading = {}", model.heading());
    }

    #[test]
    fn test_huge_speed_stays_finite() {
        let settings =
            Settings::from_json(r#"{ "initial_speed": 3.0e38, "initial_turn_radius": 0.1 }"#)
                .unwrap();
        let mut model = SteeringModel::from_settings(&settings);
        assert_eq!(model.speed(), MAX_SPEED);
        model.advance();
        assert!(model.heading().is_finite());
        assert!(model.position().is_finite());
        assert!(model.tilt_angle().is_finite());
    }

    #[test]
    fn test_non_finite_heading_holds_position() {
        let mut model = SteeringModel::new(5.0, 2.0);
        model.advance();
        let before = model.position();
        model.heading = f64::INFINITY;
        model.advance();
        assert_eq!(model.position(), before);
        assert!(model.tilt_angle().is_finite());
    }

    proptest! {
        #[test]
        fn prop_position_stays_on_canvas(
            radius in 0.1f32..f32::MAX,
            zoom in 0.1f32..5.0,
            speed in 0.1f32..f32::MAX,
            width in 1.0f32..4000.0,
            height in 1.0f32..4000.0,
            ticks in 1usize..50,
        ) {
            let mut model = SteeringModel::with_canvas(radius, speed, Canvas::new(width, height));
            model.set_zoom_level(zoom);
            for _ in 0..ticks {
                model.advance();
                let p = model.position();
                prop_assert!(p.is_finite());
                prop_assert!(model.tilt_angle().is_finite());
                prop_assert!(p.x >= 0.0 && p.x <= width);
                prop_assert!(p.y >= 0.0 && p.y <= height);
            }
        }

        #[test]
        fn prop_same_inputs_same_outputs(radius in 0.1f32..20.0, speed in 0.1f32..20.0) {
            let mut a = SteeringModel::new(radius, speed);
            let mut b = SteeringModel::new(radius, speed);
            for _ in 0..30 {
                a.advance();
                b.advance();
            }
            prop_assert_eq!(a.snapshot(), b.snapshot());
        }
    }
}

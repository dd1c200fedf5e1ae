//! Steering model state and parameter mutators
//!
//! The model is always valid: every mutator clamps its result before
//! returning, so the renderer never observes an out-of-range value.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{VehicleGeometry, WheelAngles};
use super::limits::{clamp_speed, clamp_to_canvas, clamp_turn_radius, clamp_zoom};
use crate::consts::*;
use crate::settings::Settings;

/// Drawable surface size (pixels). The pivot sits at its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the canvas
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Read-only view of the model handed to the renderer each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteeringSnapshot {
    pub position: Vec2,
    pub pivot: Vec2,
    /// Heading (radians, unbounded)
    pub heading: f64,
    /// Body tilt (degrees)
    pub tilt_angle: f32,
    pub inner_wheel_angle: f32,
    pub outer_wheel_angle: f32,
    /// Turn radius (meters)
    pub turn_radius: f32,
    /// Speed (pixels per tick)
    pub speed: f32,
    pub zoom_level: f32,
    pub canvas: Canvas,
    pub geometry: VehicleGeometry,
}

/// Steering model: parameters plus the state derived from them each tick
#[derive(Debug, Clone)]
pub struct SteeringModel {
    /// Turn radius (meters, >= MIN_TURN_RADIUS through the mutators)
    pub(crate) turn_radius: f32,
    /// Speed (pixels per tick, in [MIN_SPEED, MAX_SPEED])
    pub(crate) speed: f32,
    /// Heading (radians). Accumulates without wrapping, so it is kept in
    /// f64 to keep per-tick increments representable over long runs.
    pub(crate) heading: f64,
    /// Zoom multiplier in [MIN_ZOOM, MAX_ZOOM]
    pub(crate) zoom_level: f32,
    /// Vehicle center (pixels)
    pub(crate) position: Vec2,
    /// Body tilt (degrees)
    pub(crate) tilt_angle: f32,
    pub(crate) wheel_angles: WheelAngles,
    pub(crate) geometry: VehicleGeometry,
    pub(crate) canvas: Canvas,
    /// Orbit center (pixels)
    pub(crate) pivot: Vec2,
}

impl Default for SteeringModel {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl SteeringModel {
    /// Create a model with the given turn radius (meters) and speed (pixels per tick)
    pub fn new(turn_radius: f32, speed: f32) -> Self {
        Self::with_canvas(turn_radius, speed, Canvas::default())
    }

    pub fn with_canvas(turn_radius: f32, speed: f32, canvas: Canvas) -> Self {
        let pivot = canvas.center();
        let turn_radius = clamp_turn_radius(turn_radius);
        Self {
            turn_radius,
            speed: clamp_speed(speed),
            heading: 0.0,
            zoom_level: 1.0,
            // Start on the orbit, due "east" of the pivot
            position: clamp_to_canvas(
                pivot + Vec2::new(turn_radius * PIXELS_PER_METER, 0.0),
                canvas.width,
                canvas.height,
            ),
            tilt_angle: 0.0,
            wheel_angles: WheelAngles::STRAIGHT,
            geometry: VehicleGeometry::default(),
            canvas,
            pivot,
        }
    }

    /// Build the startup model from settings
    pub fn from_settings(settings: &Settings) -> Self {
        let settings = settings.sanitized();
        let canvas = Canvas::new(settings.canvas_width, settings.canvas_height);
        let mut model =
            Self::with_canvas(settings.initial_turn_radius, settings.initial_speed, canvas);
        model.set_zoom_level(settings.initial_zoom);
        model
    }

    // === Accessors ===

    pub fn turn_radius(&self) -> f32 {
        self.turn_radius
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn zoom_level(&self) -> f32 {
        self.zoom_level
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn tilt_angle(&self) -> f32 {
        self.tilt_angle
    }

    pub fn wheel_angles(&self) -> WheelAngles {
        self.wheel_angles
    }

    pub fn geometry(&self) -> &VehicleGeometry {
        &self.geometry
    }

    /// Copy of everything the renderer needs for one frame
    pub fn snapshot(&self) -> SteeringSnapshot {
        SteeringSnapshot {
            position: self.position,
            pivot: self.pivot,
            heading: self.heading,
            tilt_angle: self.tilt_angle,
            inner_wheel_angle: self.wheel_angles.inner,
            outer_wheel_angle: self.wheel_angles.outer,
            turn_radius: self.turn_radius,
            speed: self.speed,
            zoom_level: self.zoom_level,
            canvas: self.canvas,
            geometry: self.geometry,
        }
    }

    // === Mutators ===

    /// Set the turn radius (meters), floored at MIN_TURN_RADIUS
    pub fn set_turn_radius(&mut self, radius: f32) {
        if !radius.is_finite() {
            log::debug!("Ignoring non-finite turn radius {radius}");
            return;
        }
        self.turn_radius = clamp_turn_radius(radius);
        if self.turn_radius != radius {
            log::debug!("Turn radius {radius} clamped to {}", self.turn_radius);
        }
    }

    /// Change the turn radius by `delta` meters
    pub fn adjust_turn_radius(&mut self, delta: f32) {
        self.set_turn_radius(self.turn_radius + delta);
    }

    /// Set the zoom level, limited to [MIN_ZOOM, MAX_ZOOM]
    pub fn set_zoom_level(&mut self, zoom: f32) {
        if !zoom.is_finite() {
            log::debug!("Ignoring non-finite zoom level {zoom}");
            return;
        }
        self.zoom_level = clamp_zoom(zoom);
        if self.zoom_level != zoom {
            log::debug!("Zoom level {zoom} clamped to {}", self.zoom_level);
        }
    }

    /// Multiply the zoom level by `factor`
    pub fn scale_zoom_level(&mut self, factor: f32) {
        self.set_zoom_level(self.zoom_level * factor);
    }

    /// Set the speed (pixels per tick), limited to [MIN_SPEED, MAX_SPEED]
    pub fn set_speed(&mut self, speed: f32) {
        if !speed.is_finite() {
            log::debug!("Ignoring non-finite speed {speed}");
            return;
        }
        self.speed = clamp_speed(speed);
        if self.speed != speed {
            log::debug!("Speed {speed} clamped to {}", self.speed);
        }
    }

    /// Change the speed by `delta` pixels per tick
    pub fn adjust_speed(&mut self, delta: f32) {
        self.set_speed(self.speed + delta);
    }

    /// Move the orbit center (called when the canvas resizes)
    pub fn set_canvas_center(&mut self, x: f32, y: f32) {
        self.pivot = Vec2::new(x, y);
    }

    /// Update the drawable size and recenter the pivot on it
    pub fn set_canvas(&mut self, canvas: Canvas) {
        if canvas != self.canvas {
            log::debug!("Canvas resized to {}x{}", canvas.width, canvas.height);
        }
        self.canvas = canvas;
        let center = canvas.center();
        self.set_canvas_center(center.x, center.y);
    }
}

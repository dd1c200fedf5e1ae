//! Steer Viz - An interactive Ackermann steering geometry visualizer
//!
//! Core modules:
//! - `sim`: Steering model (geometry, clamping rules, per-tick motion update)
//! - `ui`: Input controller and the shared UI region table
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Startup configuration

pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;
pub use sim::{SteeringModel, SteeringSnapshot};
pub use ui::{InputController, InputEvent, UiLayout};

use glam::Vec2;

/// Model configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one `advance()` per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Pixels per meter at zoom 1.0
    pub const PIXELS_PER_METER: f32 = 100.0;

    /// Vehicle geometry (meters)
    pub const WHEELBASE: f32 = 2.0;
    pub const TRACK_WIDTH: f32 = 1.2;

    /// Turn radius floor (meters)
    pub const MIN_TURN_RADIUS: f32 = 0.1;
    /// Zoom range
    pub const MIN_ZOOM: f32 = 0.1;
    pub const MAX_ZOOM: f32 = 5.0;
    /// Speed range (pixels per tick), shared by every input channel
    pub const MIN_SPEED: f32 = 0.1;
    pub const MAX_SPEED: f32 = 1000.0;

    /// Keyboard turn radius step (meters)
    pub const TURN_RADIUS_STEP: f32 = 0.1;
    /// Zoom multipliers for zoom in / zoom out
    pub const ZOOM_IN_FACTOR: f32 = 1.1;
    pub const ZOOM_OUT_FACTOR: f32 = 0.9;
    /// Speed button step (pixels per tick)
    pub const SPEED_STEP: f32 = 1.0;

    /// Default canvas size before the first resize
    pub const DEFAULT_CANVAS_WIDTH: f32 = 800.0;
    pub const DEFAULT_CANVAS_HEIGHT: f32 = 600.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}

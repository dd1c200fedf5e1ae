//! Steering simulation module
//!
//! The geometric core lives here. This module must be pure:
//! - One `advance()` per tick, no wall-clock time
//! - Every parameter change clamped at the mutator
//! - No rendering or platform dependencies

pub mod geometry;
pub mod limits;
pub mod state;
pub mod tick;

pub use geometry::{VehicleGeometry, WheelAngles, ackermann_angles, tilt_angle};
pub use limits::{clamp_speed, clamp_to_canvas, clamp_turn_radius, clamp_zoom};
pub use state::{Canvas, SteeringModel, SteeringSnapshot};
pub use tick::MotionMode;

//! Frame assembly: steering snapshot + UI layout to a triangle list

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::PIXELS_PER_METER;
use crate::sim::SteeringSnapshot;
use crate::ui::{UiAction, UiLayout};

/// Pivot marker radius (pixels, unaffected by zoom)
const PIVOT_RADIUS: f32 = 5.0;
/// Radius line thickness at zoom 1.0
const RADIUS_LINE_WIDTH: f32 = 2.0;
/// Wheel-angle indicator: pixels per degree, and inset from the bottom-right corner
const INDICATOR_SCALE: f32 = 2.0;
const INDICATOR_INSET: f32 = 50.0;
const INDICATOR_WIDTH: f32 = 2.0;

/// Color for a control region
fn region_color(action: UiAction) -> [f32; 4] {
    match action {
        UiAction::TurnRadiusSlider => colors::SLIDER_TRACK,
        UiAction::ZoomIn | UiAction::SpeedUp => colors::BUTTON_UP,
        UiAction::ZoomOut | UiAction::SpeedDown => colors::BUTTON_DOWN,
    }
}

/// Vehicle body size on screen: track width across, wheelbase long
pub fn vehicle_size(snapshot: &SteeringSnapshot) -> Vec2 {
    let scale = PIXELS_PER_METER * snapshot.zoom_level;
    Vec2::new(
        snapshot.geometry.track_width * scale,
        snapshot.geometry.wheelbase * scale,
    )
}

/// Build every vertex for one frame, back to front
pub fn build(snapshot: &SteeringSnapshot, layout: &UiLayout) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(256);

    // Vehicle body, turned to face along the orbit
    vertices.extend(shapes::rotated_rect(
        snapshot.position,
        vehicle_size(snapshot),
        snapshot.tilt_angle,
        colors::VEHICLE,
    ));

    vertices.extend(shapes::circle(snapshot.pivot, PIVOT_RADIUS, colors::PIVOT, 16));

    // Rigid link from pivot to vehicle, thicker when zoomed in
    let thickness = (RADIUS_LINE_WIDTH * snapshot.zoom_level).floor().max(1.0);
    vertices.extend(shapes::line(
        snapshot.pivot,
        snapshot.position,
        thickness,
        colors::RADIUS_LINE,
    ));

    for region in &layout.regions {
        vertices.extend(shapes::rect(&region.rect, region_color(region.action)));
    }
    if let Some(knob) = layout.slider_knob(snapshot.turn_radius) {
        vertices.extend(shapes::rect(&knob, colors::SLIDER_KNOB));
    }

    // Outer angle rises from the anchor, inner angle drops below it
    let anchor = Vec2::new(layout.width - INDICATOR_INSET, layout.height - INDICATOR_INSET);
    let outer_tip = anchor - Vec2::new(0.0, snapshot.outer_wheel_angle * INDICATOR_SCALE);
    let inner_tip = anchor + Vec2::new(0.0, snapshot.inner_wheel_angle * INDICATOR_SCALE);
    vertices.extend(shapes::line(anchor, outer_tip, INDICATOR_WIDTH, colors::WHEEL_INDICATOR));
    vertices.extend(shapes::line(anchor, inner_tip, INDICATOR_WIDTH, colors::WHEEL_INDICATOR));

    vertices
}

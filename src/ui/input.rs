//! Input controller
//!
//! Turns discrete platform events into steering model mutations. Each
//! event is applied on its own; there are no multi-event gestures.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::{UiAction, UiLayout, slider_value};
use crate::consts::*;
use crate::sim::{SteeringModel, clamp_turn_radius, clamp_zoom};

/// Arrow key directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// A discrete input event, delivered in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyPress(Direction),
    /// Pointer press at screen position (pixels)
    PointerPress { x: f32, y: f32 },
}

/// Applies input events to a steering model
#[derive(Debug, Clone)]
pub struct InputController {
    layout: UiLayout,
}

impl InputController {
    pub fn new(layout: UiLayout) -> Self {
        Self { layout }
    }

    /// Controller for a canvas of the given size
    pub fn for_canvas(width: f32, height: f32) -> Self {
        Self::new(UiLayout::for_canvas(width, height))
    }

    /// Layout the controller hit-tests against (share it with the renderer)
    pub fn layout(&self) -> &UiLayout {
        &self.layout
    }

    /// Rebuild the region table after a resize
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.layout.width != width || self.layout.height != height {
            self.layout = UiLayout::for_canvas(width, height);
        }
    }

    /// Apply every queued event in order
    pub fn apply_all<I>(&self, model: &mut SteeringModel, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.apply(model, event);
        }
    }

    /// Apply a single event. Returns the pointer action hit, if any.
    pub fn apply(&self, model: &mut SteeringModel, event: InputEvent) -> Option<UiAction> {
        match event {
            InputEvent::KeyPress(direction) => {
                self.apply_key(model, direction);
                None
            }
            InputEvent::PointerPress { x, y } => self.apply_pointer(model, Vec2::new(x, y)),
        }
    }

    fn apply_key(&self, model: &mut SteeringModel, direction: Direction) {
        match direction {
            Direction::Left => model.adjust_turn_radius(-TURN_RADIUS_STEP),
            Direction::Right => model.adjust_turn_radius(TURN_RADIUS_STEP),
            Direction::Up => model.scale_zoom_level(ZOOM_IN_FACTOR),
            Direction::Down => model.scale_zoom_level(ZOOM_OUT_FACTOR),
        }

        // Mutators already clamp; re-applying is a no-op on valid state
        model.set_turn_radius(clamp_turn_radius(model.turn_radius()));
        model.set_zoom_level(clamp_zoom(model.zoom_level()));
    }

    fn apply_pointer(&self, model: &mut SteeringModel, point: Vec2) -> Option<UiAction> {
        let action = self.layout.hit_test(point)?.action;
        log::debug!("Pointer press at ({}, {}) hit {:?}", point.x, point.y, action);

        match action {
            UiAction::TurnRadiusSlider => model.set_turn_radius(slider_value(point.x)),
            UiAction::ZoomIn => model.scale_zoom_level(ZOOM_IN_FACTOR),
            UiAction::ZoomOut => model.scale_zoom_level(ZOOM_OUT_FACTOR),
            UiAction::SpeedUp => model.adjust_speed(SPEED_STEP),
            UiAction::SpeedDown => model.adjust_speed(-SPEED_STEP),
        }

        Some(action)
    }
}

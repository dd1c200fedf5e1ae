//! On-screen control regions
//!
//! One table describes every interactive rectangle. The renderer draws from
//! it and the input controller hit-tests against it, so what is clickable is
//! always what is drawn.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::PIXELS_PER_METER;

/// Height of the turn radius slider track
pub const SLIDER_HEIGHT: f32 = 20.0;
/// Slider track top edge, measured up from the canvas bottom
pub const SLIDER_OFFSET: f32 = 60.0;
/// Slider knob side length
pub const KNOB_SIZE: f32 = 20.0;

/// Button column left edge
pub const BUTTON_X: f32 = 50.0;
pub const BUTTON_WIDTH: f32 = 100.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Axis-aligned rectangle in screen pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive on all four edges
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// What pressing a region does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiAction {
    /// Set the turn radius from the pointer's x position
    TurnRadiusSlider,
    ZoomIn,
    ZoomOut,
    SpeedUp,
    SpeedDown,
}

impl UiAction {
    /// Button caption (the slider has none)
    pub fn label(&self) -> Option<&'static str> {
        match self {
            UiAction::TurnRadiusSlider => None,
            UiAction::ZoomIn => Some("Zoom In"),
            UiAction::ZoomOut => Some("Zoom Out"),
            UiAction::SpeedUp => Some("Speed +"),
            UiAction::SpeedDown => Some("Speed -"),
        }
    }
}

/// An interactive rectangle and its action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UiRegion {
    pub rect: Rect,
    pub action: UiAction,
}

/// All interactive regions for one canvas size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiLayout {
    pub width: f32,
    pub height: f32,
    pub regions: Vec<UiRegion>,
}

impl UiLayout {
    /// Lay out the slider along the bottom and the buttons in a column on the left
    pub fn for_canvas(width: f32, height: f32) -> Self {
        let button = |bottom_offset: f32, action| UiRegion {
            rect: Rect::new(BUTTON_X, height - bottom_offset, BUTTON_WIDTH, BUTTON_HEIGHT),
            action,
        };

        let regions = vec![
            UiRegion {
                rect: Rect::new(0.0, height - SLIDER_OFFSET, width, SLIDER_HEIGHT),
                action: UiAction::TurnRadiusSlider,
            },
            button(300.0, UiAction::ZoomIn),
            button(360.0, UiAction::ZoomOut),
            button(420.0, UiAction::SpeedUp),
            button(480.0, UiAction::SpeedDown),
        ];

        Self {
            width,
            height,
            regions,
        }
    }

    /// First region under `point`, if any
    pub fn hit_test(&self, point: Vec2) -> Option<&UiRegion> {
        self.regions.iter().find(|r| r.rect.contains(point))
    }

    /// Region for an action
    pub fn region(&self, action: UiAction) -> Option<&UiRegion> {
        self.regions.iter().find(|r| r.action == action)
    }

    /// Slider knob rectangle for the given turn radius
    pub fn slider_knob(&self, turn_radius: f32) -> Option<Rect> {
        let track = self.region(UiAction::TurnRadiusSlider)?.rect;
        let max_x = (track.width - KNOB_SIZE).max(0.0);
        let x = (turn_radius * PIXELS_PER_METER).clamp(0.0, max_x);
        Some(Rect::new(track.x + x, track.y, KNOB_SIZE, track.height))
    }
}

/// Turn radius (meters) selected by a slider press at screen x
#[inline]
pub fn slider_value(pointer_x: f32) -> f32 {
    pointer_x / PIXELS_PER_METER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_match_screen_edges() {
        let layout = UiLayout::for_canvas(800.0, 600.0);
        let slider = layout.region(UiAction::TurnRadiusSlider).unwrap();
        assert_eq!(slider.rect, Rect::new(0.0, 540.0, 800.0, 20.0));
        let zoom_in = layout.region(UiAction::ZoomIn).unwrap();
        assert_eq!(zoom_in.rect, Rect::new(50.0, 300.0, 100.0, 40.0));
        let speed_down = layout.region(UiAction::SpeedDown).unwrap();
        assert_eq!(speed_down.rect, Rect::new(50.0, 120.0, 100.0, 40.0));
    }

    #[test]
    fn test_hit_test() {
        let layout = UiLayout::for_canvas(800.0, 600.0);
        let hit = |x, y| layout.hit_test(Vec2::new(x, y)).map(|r| r.action);

        assert_eq!(hit(100.0, 320.0), Some(UiAction::ZoomIn));
        assert_eq!(hit(100.0, 260.0), Some(UiAction::ZoomOut));
        assert_eq!(hit(150.0, 180.0), Some(UiAction::SpeedUp));
        assert_eq!(hit(50.0, 120.0), Some(UiAction::SpeedDown));
        assert_eq!(hit(700.0, 550.0), Some(UiAction::TurnRadiusSlider));
        assert_eq!(hit(400.0, 300.0), None);
        assert_eq!(hit(100.0, 350.0), None);
    }

    #[test]
    fn test_regions_do_not_overlap() {
        let layout = UiLayout::for_canvas(800.0, 600.0);
        for (i, a) in layout.regions.iter().enumerate() {
            for b in &layout.regions[i + 1..] {
                let overlap_x = a.rect.x < b.rect.x + b.rect.width && b.rect.x < a.rect.x + a.rect.width;
                let overlap_y =
                    a.rect.y < b.rect.y + b.rect.height && b.rect.y < a.rect.y + a.rect.height;
                assert!(!(overlap_x && overlap_y), "{:?} overlaps {:?}", a.action, b.action);
            }
        }
    }

    #[test]
    fn test_slider_knob_tracks_radius() {
        let layout = UiLayout::for_canvas(800.0, 600.0);
        let knob = layout.slider_knob(5.0).unwrap();
        assert_eq!(knob.x, 500.0);
        assert_eq!(knob.y, 540.0);
        // Pinned to the right end of the track
        assert_eq!(layout.slider_knob(50.0).unwrap().x, 780.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(UiAction::ZoomIn.label(), Some("Zoom In"));
        assert_eq!(UiAction::TurnRadiusSlider.label(), None);
    }
}

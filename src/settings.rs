//! Startup settings
//!
//! Read from LocalStorage on web and from `steer-viz.json` on native.
//! Only configuration lives here; the simulation itself is never saved.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{clamp_speed, clamp_turn_radius, clamp_zoom};

/// Visualizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Initial model parameters ===
    /// Turn radius at startup (meters)
    pub initial_turn_radius: f32,
    /// Speed at startup (pixels per tick)
    pub initial_speed: f32,
    /// Zoom level at startup
    pub initial_zoom: f32,

    // === Canvas ===
    /// Canvas size used until the platform reports a real one
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === HUD ===
    /// Show the "Radius: r" tag next to the vehicle
    pub show_radius_label: bool,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_turn_radius: 5.0,
            initial_speed: 2.0,
            initial_zoom: 1.0,

            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,

            show_radius_label: true,
            show_fps: true,
        }
    }
}

impl Settings {
    /// Copy with every numeric field pulled into its valid range
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let finite_or = |v: f32, fallback: f32| if v.is_finite() { v } else { fallback };
        let canvas_dim = |v: f32, fallback: f32| {
            let v = finite_or(v, fallback);
            if v > 0.0 { v } else { fallback }
        };

        Self {
            initial_turn_radius: clamp_turn_radius(finite_or(
                self.initial_turn_radius,
                defaults.initial_turn_radius,
            )),
            initial_speed: clamp_speed(finite_or(self.initial_speed, defaults.initial_speed)),
            initial_zoom: clamp_zoom(finite_or(self.initial_zoom, defaults.initial_zoom)),
            canvas_width: canvas_dim(self.canvas_width, defaults.canvas_width),
            canvas_height: canvas_dim(self.canvas_height, defaults.canvas_height),
            ..self.clone()
        }
    }

    /// Parse settings JSON, falling back to defaults for missing fields
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(|s| s.sanitized())
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "steer_viz_settings";

    /// Settings file name (native)
    #[cfg(not(target_arch = "wasm32"))]
    const FILE_NAME: &'static str = "steer-viz.json";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the working directory (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE_NAME) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::FILE_NAME);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", Self::FILE_NAME, e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_setup() {
        let s = Settings::default();
        assert_eq!(s.initial_turn_radius, 5.0);
        assert_eq!(s.initial_speed, 2.0);
        assert_eq!(s.initial_zoom, 1.0);
        assert_eq!(s.sanitized(), s);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "initial_speed": 4.5 }"#).unwrap();
        assert_eq!(s.initial_speed, 4.5);
        assert_eq!(s.initial_turn_radius, 5.0);
        assert!(s.show_fps);
    }

    #[test]
    fn test_json_values_are_clamped() {
        let s = Settings::from_json(
            r#"{ "initial_turn_radius": -2, "initial_zoom": 9, "canvas_width": 0 }"#,
        )
        .unwrap();
        assert_eq!(s.initial_turn_radius, MIN_TURN_RADIUS);
        assert_eq!(s.initial_zoom, MAX_ZOOM);
        assert_eq!(s.canvas_width, DEFAULT_CANVAS_WIDTH);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings {
            initial_turn_radius: 3.0,
            show_radius_label: false,
            ..Settings::default()
        };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_without_file_uses_defaults() {
        // No steer-viz.json ships with the crate
        assert_eq!(Settings::load(), Settings::default());
    }
}

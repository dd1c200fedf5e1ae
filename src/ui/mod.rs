//! User interface plumbing shared by input handling and rendering
//!
//! - `layout`: the single table of interactive regions
//! - `input`: keyboard/pointer events to model mutations

pub mod input;
pub mod layout;

pub use input::{Direction, InputController, InputEvent};
pub use layout::{Rect, UiAction, UiLayout, UiRegion};

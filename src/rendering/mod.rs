//! # Rendering Module
//!
//! Macroquad drawing for the loading screen, the map menu, and both maps.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;

//! # Game Module
//!
//! Window-free core of the hide-and-seek game.
//!
//! This module contains everything that decides what happens in a frame:
//! - Round phases and timers
//! - Actor movement and playfield clamping
//! - Bounding-box collision between seeker and hider
//! - Ambient day/night and snowfall simulation
//! - The per-map sequencer plus the loading and map-selection screens
//!
//! Nothing in here talks to macroquad's window, input, or audio state, so all
//! of it can be unit tested.

pub mod actor;
pub mod ambient;
pub mod collision;
pub mod loading;
pub mod menu;
pub mod round;
pub mod session;
pub mod transition;
pub mod view;

pub use actor::*;
pub use ambient::*;
pub use collision::*;
pub use loading::*;
pub use menu::*;
pub use round::*;
pub use session::*;
pub use transition::*;
pub use view::*;

use macroquad::math::{vec2, Vec2};
use serde::{Deserialize, Serialize};

/// The two playable maps.
///
/// # Examples
///
/// ```
/// use hideseek::MapKind;
///
/// assert_eq!(MapKind::from_str("forest"), Some(MapKind::Forest));
/// assert_eq!(MapKind::Soldotna.as_str(), "Soldotna");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapKind {
    /// Plain forest clearing
    Forest,
    /// Snowy Alaskan town with weather and a day/night cycle
    Soldotna,
}

impl MapKind {
    /// Display name, also used as the menu button label.
    pub fn as_str(&self) -> &'static str {
        match self {
            MapKind::Forest => "Forest",
            MapKind::Soldotna => "Soldotna",
        }
    }

    /// Parses a map name, ignoring case.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "forest" => Some(MapKind::Forest),
            "soldotna" | "snow" => Some(MapKind::Soldotna),
            _ => None,
        }
    }

    /// Whether this map runs the day/night and snowfall simulation.
    pub fn has_weather(&self) -> bool {
        matches!(self, MapKind::Soldotna)
    }

    /// Draw scale applied to actor sprites. Collision always uses the unscaled size.
    pub fn sprite_scale(&self) -> f32 {
        match self {
            MapKind::Forest => 1.0,
            MapKind::Soldotna => 1.5,
        }
    }
}

/// Which actor a piece of input or a draw call belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Hider,
    Seeker,
}

/// Converts a screen-space point (origin top-left, y down) into playfield
/// coordinates (origin bottom-left, y up).
///
/// # Examples
///
/// ```
/// use hideseek::screen_to_world;
/// use macroquad::math::vec2;
///
/// let world = screen_to_world(vec2(10.0, 0.0), vec2(800.0, 600.0));
/// assert_eq!(world, vec2(10.0, 600.0));
/// ```
pub fn screen_to_world(point: Vec2, playfield: Vec2) -> Vec2 {
    vec2(point.x, playfield.y - point.y)
}

/// Converts the bottom-left corner of a playfield box into the top-left
/// corner macroquad draws from.
pub fn world_to_screen(corner: Vec2, size: Vec2, playfield: Vec2) -> Vec2 {
    vec2(corner.x, playfield.y - corner.y - size.y)
}

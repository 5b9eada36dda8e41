//! # Frame Descriptions
//!
//! What a map screen wants drawn this frame, expressed in playfield
//! coordinates. The rendering layer turns these into macroquad calls.

use super::{MapKind, Role};
use macroquad::math::{Rect, Vec2};

/// Which image a draw call refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    /// Full-screen map background
    Background(MapKind),
    /// One of the two actors
    Actor(Role),
}

/// One textured quad.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub sprite: SpriteId,
    /// Bottom-left corner in playfield coordinates
    pub position: Vec2,
    pub size: Vec2,
    /// Uniform brightness multiplier, 1.0 = unchanged
    pub brightness: f32,
}

/// A clickable end-of-round button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub label: &'static str,
    /// Bottom-left anchored rectangle in playfield coordinates
    pub bounds: Rect,
}

/// A snowflake to draw as a filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleView {
    pub center: Vec2,
    pub radius: f32,
}

/// Text drawn on top of the map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    /// Countdown line, absent once the round is over
    pub timer: Option<String>,
    /// Extra status line under the timer (temperature on the snowy map)
    pub status: Option<String>,
    /// Winner banner, present once the round is over
    pub outcome: Option<String>,
}

/// Everything a map screen draws in one frame, back to front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapFrame {
    pub draw_calls: Vec<DrawCall>,
    pub particles: Vec<ParticleView>,
    pub overlay: Overlay,
    pub buttons: Vec<ButtonView>,
}

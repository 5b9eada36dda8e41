//! # Actors
//!
//! The hider and the seeker, and how input moves them around the playfield.

use macroquad::math::{vec2, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Which direction keys are held this frame.
///
/// Each axis is handled independently, so holding two keys at once moves the
/// actor diagonally at `sqrt(2)` times its nominal speed. Opposing keys cancel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl DirectionKeys {
    /// No keys held.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true if at least one direction key is held.
    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

/// How an actor should move this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Steering {
    /// Move with the held direction keys at the actor's speed
    Keys(DirectionKeys),
    /// Jump straight to a playfield point (touch / mouse drag)
    Pointer(Vec2),
}

/// A player-controlled character.
///
/// `position` is the bottom-left corner of the actor's box in playfield
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Bottom-left corner of the actor
    pub position: Vec2,
    /// Collision and clamping size
    pub size: Vec2,
    /// Base speed in pixels per second
    pub speed: f32,
    /// Extra speed added on top of `speed`
    pub speed_bonus: f32,
}

impl Actor {
    /// Creates an actor at `position`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hideseek::Actor;
    /// use macroquad::math::vec2;
    ///
    /// let hider = Actor::new(vec2(960.0, 540.0), vec2(64.0, 64.0), 200.0);
    /// assert_eq!(hider.effective_speed(), 200.0);
    /// ```
    pub fn new(position: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            position,
            size,
            speed,
            speed_bonus: 0.0,
        }
    }

    /// Sets the bonus added to the base speed.
    pub fn set_speed_bonus(&mut self, bonus: f32) {
        self.speed_bonus = bonus;
    }

    /// Base speed plus bonus.
    pub fn effective_speed(&self) -> f32 {
        self.speed + self.speed_bonus
    }

    /// Collision box in playfield coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    /// Moves the actor for one frame and clamps it into the playfield.
    ///
    /// Key steering moves by `effective_speed * dt` along every held axis.
    /// Pointer steering teleports the actor's corner onto the target. Either
    /// way the result is clamped to `[0, playfield - size]` per component.
    pub fn update_position(&mut self, steering: Steering, dt: f32, playfield: Vec2) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        match steering {
            Steering::Keys(keys) => {
                let step = self.effective_speed() * dt;
                if keys.left {
                    self.position.x -= step;
                }
                if keys.right {
                    self.position.x += step;
                }
                if keys.up {
                    self.position.y += step;
                }
                if keys.down {
                    self.position.y -= step;
                }
            }
            Steering::Pointer(target) => {
                self.position = target;
            }
        }

        self.clamp_to(playfield);
    }

    /// Clamps the actor so its whole box stays inside the playfield.
    pub fn clamp_to(&mut self, playfield: Vec2) {
        let max = vec2(
            (playfield.x - self.size.x).max(0.0),
            (playfield.y - self.size.y).max(0.0),
        );
        let x = if self.position.x.is_finite() { self.position.x } else { 0.0 };
        let y = if self.position.y.is_finite() { self.position.y } else { 0.0 };
        self.position = vec2(x.clamp(0.0, max.x), y.clamp(0.0, max.y));
    }
}

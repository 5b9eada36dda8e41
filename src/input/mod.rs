//! # Input Module
//!
//! Reads macroquad's keyboard, mouse, and touch state once per frame and
//! packs it into a [`FrameInput`] the game modules can consume without a
//! window.

use crate::game::DirectionKeys;
use macroquad::prelude::*;

/// Everything the screens need to know about input for one frame.
///
/// Points are in screen space (origin top-left, y down).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Direction keys currently held
    pub keys: DirectionKeys,
    /// Where a finger or the held mouse button currently is
    pub pointer: Option<Vec2>,
    /// Where a touch or click started this frame
    pub click: Option<Vec2>,
    /// Escape / back was pressed this frame
    pub back: bool,
}

impl FrameInput {
    /// A frame with a single click at `point`.
    pub fn click_at(point: Vec2) -> Self {
        Self {
            pointer: Some(point),
            click: Some(point),
            ..Self::default()
        }
    }
}

/// Input handler for collecting per-frame player input.
pub struct InputHandler {
    /// Whether WASD also steers, in addition to the arrow keys
    pub wasd_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use hideseek::InputHandler;
    ///
    /// let input_handler = InputHandler::new();
    /// assert!(input_handler.wasd_enabled);
    /// ```
    pub fn new() -> Self {
        Self { wasd_enabled: true }
    }

    /// Samples the current macroquad input state.
    pub fn poll(&self) -> FrameInput {
        let held = |arrow: KeyCode, letter: KeyCode| {
            is_key_down(arrow) || (self.wasd_enabled && is_key_down(letter))
        };
        let keys = DirectionKeys {
            left: held(KeyCode::Left, KeyCode::A),
            right: held(KeyCode::Right, KeyCode::D),
            up: held(KeyCode::Up, KeyCode::W),
            down: held(KeyCode::Down, KeyCode::S),
        };

        let (pointer, click) = Self::pointer_state();

        FrameInput {
            keys,
            pointer,
            click,
            back: is_key_pressed(KeyCode::Escape),
        }
    }

    /// Touch wins over the mouse when both are present.
    fn pointer_state() -> (Option<Vec2>, Option<Vec2>) {
        let touches = touches();
        if let Some(touch) = touches.first() {
            return match touch.phase {
                TouchPhase::Started => (Some(touch.position), Some(touch.position)),
                TouchPhase::Moved | TouchPhase::Stationary => (Some(touch.position), None),
                TouchPhase::Ended | TouchPhase::Cancelled => (None, None),
            };
        }

        let mouse = Vec2::from(mouse_position());
        let pointer = is_mouse_button_down(MouseButton::Left).then_some(mouse);
        let click = is_mouse_button_pressed(MouseButton::Left).then_some(mouse);
        (pointer, click)
    }
}

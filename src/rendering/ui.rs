//! # User Interface Elements
//!
//! Buttons and text helpers shared by every screen.

use crate::config;
use macroquad::prelude::*;

/// Button fill.
pub const BUTTON_FILL: Color = Color::new(0.2, 0.2, 0.3, 0.8);
/// Button border.
pub const BUTTON_BORDER: Color = Color::new(0.5, 0.7, 1.0, 0.5);
/// Button border while the mouse is over it.
pub const BUTTON_BORDER_HOVER: Color = Color::new(0.5, 0.7, 1.0, 1.0);
/// Winner banner text.
pub const BANNER_COLOR: Color = Color::new(0.2, 0.6, 1.0, 1.0);
/// Drop shadow behind the winner banner.
pub const SHADOW_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.5);

const BORDER_THICKNESS: f32 = 2.0;

/// Scales a font size authored for 1080p to the current screen height.
///
/// # Examples
///
/// ```
/// use hideseek::scaled_font_size;
///
/// assert_eq!(scaled_font_size(40.0, 1080.0), 40);
/// assert_eq!(scaled_font_size(40.0, 540.0), 20);
/// ```
pub fn scaled_font_size(base: f32, screen_height: f32) -> u16 {
    let size = base * screen_height / config::REFERENCE_RESOLUTION.1;
    size.round().clamp(8.0, 512.0) as u16
}

/// Text and button drawing with an optional custom font.
#[derive(Default)]
pub struct Ui {
    font: Option<Font>,
}

impl Ui {
    pub fn new(font: Option<Font>) -> Self {
        Self { font }
    }

    pub fn has_custom_font(&self) -> bool {
        self.font.is_some()
    }

    fn params(&self, font_size: u16, color: Color) -> TextParams<'_> {
        TextParams {
            font: self.font.as_ref(),
            font_size,
            color,
            ..Default::default()
        }
    }

    /// Draws text with its top-left corner at `(x, y)`.
    pub fn draw_text_at(&self, text: &str, x: f32, y: f32, font_size: u16, color: Color) {
        let dims = measure_text(text, self.font.as_ref(), font_size, 1.0);
        draw_text_ex(text, x, y + dims.offset_y, self.params(font_size, color));
    }

    /// Draws one line centred on `center`.
    pub fn draw_centered_text(&self, text: &str, center: Vec2, font_size: u16, color: Color) {
        let dims = measure_text(text, self.font.as_ref(), font_size, 1.0);
        draw_text_ex(
            text,
            center.x - dims.width / 2.0,
            center.y - dims.height / 2.0 + dims.offset_y,
            self.params(font_size, color),
        );
    }

    /// Draws several lines, each centred horizontally, starting at `top`.
    pub fn draw_centered_lines(&self, text: &str, center_x: f32, top: f32, font_size: u16, color: Color) {
        let line_height = font_size as f32 * 1.3;
        for (i, line) in text.lines().enumerate() {
            let center = vec2(center_x, top + line_height * (i as f32 + 0.5));
            self.draw_centered_text(line, center, font_size, color);
        }
    }

    /// Draws a filled, bordered button with a centred label. `rect` is in
    /// screen space.
    pub fn draw_button(&self, rect: Rect, label: &str, font_size: u16, hovered: bool) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, BUTTON_FILL);
        let border = if hovered {
            BUTTON_BORDER_HOVER
        } else {
            BUTTON_BORDER
        };
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, BORDER_THICKNESS, border);
        self.draw_centered_text(label, rect.center(), font_size, WHITE);
    }

    /// Large banner with a drop shadow, centred on `center`.
    pub fn draw_banner(&self, text: &str, center: Vec2, font_size: u16) {
        let offset = (font_size as f32 / 20.0).max(2.0);
        self.draw_centered_text(text, center + vec2(offset, offset), font_size, SHADOW_COLOR);
        self.draw_centered_text(text, center, font_size, BANNER_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_is_clamped() {
        assert_eq!(scaled_font_size(40.0, 10.0), 8);
        assert_eq!(scaled_font_size(40.0, 2160.0), 80);
    }
}

//! # Display Management
//!
//! Asset loading and drawing of every screen using macroquad.
//!
//! Game modules describe a frame in playfield coordinates (origin bottom-left);
//! this module flips them into macroquad's screen space when drawing.

use crate::game::{
    contains, world_to_screen, LoadingScreen, MapFrame, MapKind, MapSelection, MenuAction, Role,
    SpriteId,
};
use crate::rendering::{scaled_font_size, Ui};
use crate::scenes::Scene;
use crate::HideSeekResult;
use macroquad::prelude::*;
use std::collections::HashMap;

/// Menu background image.
pub const MENU_BACKGROUND: &str = "images/background.png";

/// Font used for every screen when present.
pub const FONT_PATH: &str = "ui/font.ttf";

const LOADING_BACKGROUND: Color = Color::new(0.2, 0.2, 0.3, 1.0);
const PROGRESS_TRACK: Color = Color::new(0.3, 0.3, 0.3, 1.0);
const PROGRESS_FILL: Color = Color::new(1.0, 0.5, 0.0, 1.0);
const SNOW_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.7);

/// Asset path for a sprite.
pub fn sprite_path(sprite: SpriteId) -> &'static str {
    match sprite {
        SpriteId::Background(MapKind::Forest) => "images/forest_background.png",
        SpriteId::Background(MapKind::Soldotna) => "images/alaska_background.png",
        SpriteId::Actor(Role::Hider) => "images/hider.png",
        SpriteId::Actor(Role::Seeker) => "images/seeker.png",
    }
}

/// Flat colour drawn when a sprite's texture is missing.
pub fn fallback_color(sprite: SpriteId) -> Color {
    match sprite {
        SpriteId::Background(MapKind::Forest) => DARKGREEN,
        SpriteId::Background(MapKind::Soldotna) => Color::new(0.55, 0.6, 0.7, 1.0),
        SpriteId::Actor(Role::Hider) => ORANGE,
        SpriteId::Actor(Role::Seeker) => RED,
    }
}

/// Multiplies the colour channels by `brightness`, leaving alpha alone.
pub fn tint(color: Color, brightness: f32) -> Color {
    Color::new(
        color.r * brightness,
        color.g * brightness,
        color.b * brightness,
        color.a,
    )
}

/// Macroquad display manager for the game.
///
/// Owns every texture and the font. Assets that fail to load are logged once
/// and replaced by flat colours (textures) or macroquad's built-in font.
pub struct MacroquadDisplay {
    /// Loaded textures keyed by asset path
    pub textures: HashMap<&'static str, Texture2D>,
    /// Text and button helpers
    pub ui: Ui,
}

impl MacroquadDisplay {
    /// Loads every texture and the font.
    pub async fn new() -> HideSeekResult<Self> {
        let mut paths: Vec<&'static str> = vec![MENU_BACKGROUND];
        for kind in [MapKind::Forest, MapKind::Soldotna] {
            paths.push(sprite_path(SpriteId::Background(kind)));
        }
        for role in [Role::Hider, Role::Seeker] {
            paths.push(sprite_path(SpriteId::Actor(role)));
        }
        paths.extend(MenuAction::all().into_iter().map(thumbnail_path));

        let mut textures = HashMap::new();
        for path in paths {
            match load_texture(path).await {
                Ok(texture) => {
                    texture.set_filter(FilterMode::Linear);
                    textures.insert(path, texture);
                }
                Err(e) => log::warn!("Error loading texture {}: {:?}", path, e),
            }
        }
        log::info!("Textures loaded: {}", textures.len());

        let font = match load_ttf_font(FONT_PATH).await {
            Ok(font) => Some(font),
            Err(e) => {
                log::warn!("Error loading font {}, using default: {:?}", FONT_PATH, e);
                None
            }
        };

        Ok(Self {
            textures,
            ui: Ui::new(font),
        })
    }

    /// Draws whichever screen is active.
    pub fn render(&self, scene: &Scene) {
        match scene {
            Scene::Loading(loading) => self.render_loading(loading),
            Scene::MapSelection(menu) => self.render_menu(menu),
            Scene::Map(session) => self.render_map(&session.frame(), session.playfield()),
        }
    }

    /// Quote in the upper half, progress bar near the bottom.
    pub fn render_loading(&self, loading: &LoadingScreen) {
        let (w, h) = (screen_width(), screen_height());
        clear_background(LOADING_BACKGROUND);

        let font_size = scaled_font_size(44.0, h);
        self.ui
            .draw_centered_lines(loading.quote(), w / 2.0, h * 0.4, font_size, WHITE);

        let bar_width = w * 0.7;
        let bar_height = 20.0;
        let bar_x = (w - bar_width) / 2.0;
        let bar_y = h * 0.9 - bar_height;
        draw_rectangle(bar_x, bar_y, bar_width, bar_height, PROGRESS_TRACK);
        draw_rectangle(bar_x, bar_y, bar_width * loading.progress(), bar_height, PROGRESS_FILL);

        self.ui.draw_centered_text(
            &loading.progress_text(),
            vec2(w / 2.0, bar_y - 30.0),
            font_size,
            WHITE,
        );
    }

    pub fn render_menu(&self, menu: &MapSelection) {
        let viewport = menu.viewport();
        clear_background(BLACK);
        self.draw_texture_or(
            MENU_BACKGROUND,
            Rect::new(0.0, 0.0, viewport.x, viewport.y),
            DARKBLUE,
            1.0,
        );

        let mouse = Vec2::from(mouse_position());
        let font_size = scaled_font_size(40.0, viewport.y);
        for column in menu.layout() {
            self.draw_texture_or(
                thumbnail_path(column.action),
                column.thumbnail,
                DARKGRAY,
                1.0,
            );
            let hovered = contains(&column.button, mouse);
            self.ui
                .draw_button(column.button, column.action.label(), font_size, hovered);
        }
    }

    /// Draws a map frame. Everything in `frame` is in playfield
    /// coordinates.
    pub fn render_map(&self, frame: &MapFrame, playfield: Vec2) {
        clear_background(BLACK);

        for call in &frame.draw_calls {
            let corner = world_to_screen(call.position, call.size, playfield);
            self.draw_texture_or(
                sprite_path(call.sprite),
                Rect::new(corner.x, corner.y, call.size.x, call.size.y),
                fallback_color(call.sprite),
                call.brightness,
            );
        }

        for flake in &frame.particles {
            draw_circle(flake.center.x, playfield.y - flake.center.y, flake.radius, SNOW_COLOR);
        }

        let font_size = scaled_font_size(36.0, playfield.y);
        let line_height = font_size as f32 * 1.2;
        let mut y = 10.0;
        for line in [&frame.overlay.timer, &frame.overlay.status].into_iter().flatten() {
            self.ui.draw_text_at(line, 10.0, y, font_size, WHITE);
            y += line_height;
        }

        if let Some(outcome) = &frame.overlay.outcome {
            let center = vec2(playfield.x / 2.0, playfield.y * 0.3);
            self.ui
                .draw_banner(outcome, center, scaled_font_size(90.0, playfield.y));
        }

        let mouse = Vec2::from(mouse_position());
        for button in &frame.buttons {
            let corner = world_to_screen(
                vec2(button.bounds.x, button.bounds.y),
                button.bounds.size(),
                playfield,
            );
            let rect = Rect::new(corner.x, corner.y, button.bounds.w, button.bounds.h);
            let hovered = contains(&rect, mouse);
            self.ui
                .draw_button(rect, button.label, scaled_font_size(32.0, playfield.y), hovered);
        }
    }

    /// Draws the texture at `path` stretched over `rect`, or a flat
    /// `fallback` rectangle when it did not load.
    fn draw_texture_or(&self, path: &str, rect: Rect, fallback: Color, brightness: f32) {
        match self.textures.get(path) {
            Some(texture) => draw_texture_ex(
                texture,
                rect.x,
                rect.y,
                tint(WHITE, brightness),
                DrawTextureParams {
                    dest_size: Some(rect.size()),
                    ..Default::default()
                },
            ),
            None => draw_rectangle(rect.x, rect.y, rect.w, rect.h, tint(fallback, brightness)),
        }
    }
}

/// Asset path for a menu column's thumbnail.
pub fn thumbnail_path(action: MenuAction) -> &'static str {
    match action {
        MenuAction::Play(MapKind::Soldotna) => "thumbnails/map1.png",
        MenuAction::Play(MapKind::Forest) => "thumbnails/map2.png",
        MenuAction::DoNotPress => "thumbnails/do_not_press.png",
    }
}

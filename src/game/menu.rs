//! # Map Selection
//!
//! Three columns, each a thumbnail above a button. Layout is proportional
//! to the viewport and computed in screen space (origin top-left, y down),
//! the same space clicks arrive in.

use super::{contains, MapKind};
use crate::audio::{SoundId, SoundPlayer};
use crate::input::FrameInput;
use crate::scenes::{ScreenHost, ScreenRequest};
use macroquad::math::{Rect, Vec2};

const THUMBNAIL_SCALE: (f32, f32) = (0.3, 0.2);
const BUTTON_SCALE: (f32, f32) = (0.25, 0.1);
/// Cell padding as a fraction of viewport width.
const PADDING_SCALE: f32 = 0.02;

/// What a menu button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Start a round on a map
    Play(MapKind),
    /// The joke button
    DoNotPress,
}

impl MenuAction {
    /// Buttons left to right.
    pub fn all() -> [MenuAction; 3] {
        [
            MenuAction::Play(MapKind::Soldotna),
            MenuAction::Play(MapKind::Forest),
            MenuAction::DoNotPress,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Play(kind) => kind.as_str(),
            MenuAction::DoNotPress => "Do not press",
        }
    }
}

/// One column of the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuColumn {
    pub action: MenuAction,
    pub thumbnail: Rect,
    pub button: Rect,
}

/// Map-selection screen state.
#[derive(Debug, Clone)]
pub struct MapSelection {
    viewport: Vec2,
}

impl MapSelection {
    pub fn new(viewport: Vec2) -> Self {
        log::info!("Map selection opened");
        Self { viewport }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Thumbnail and button rectangles, one column per [`MenuAction`].
    ///
    /// Every cell is padded on all sides and the whole grid is centred. A
    /// column is as wide as its widest cell, and narrower cells are centred
    /// inside it.
    pub fn layout(&self) -> Vec<MenuColumn> {
        let (w, h) = (self.viewport.x, self.viewport.y);
        let thumb = (w * THUMBNAIL_SCALE.0, h * THUMBNAIL_SCALE.1);
        let button = (w * BUTTON_SCALE.0, h * BUTTON_SCALE.1);
        let pad = w * PADDING_SCALE;

        let column_width = thumb.0.max(button.0) + 2.0 * pad;
        let grid_width = column_width * MenuAction::all().len() as f32;
        let grid_height = thumb.1 + button.1 + 4.0 * pad;
        let left = (w - grid_width) / 2.0;
        let top = (h - grid_height) / 2.0;

        MenuAction::all()
            .into_iter()
            .enumerate()
            .map(|(i, action)| {
                let column_x = left + i as f32 * column_width;
                MenuColumn {
                    action,
                    thumbnail: Rect::new(
                        column_x + (column_width - thumb.0) / 2.0,
                        top + pad,
                        thumb.0,
                        thumb.1,
                    ),
                    button: Rect::new(
                        column_x + (column_width - button.0) / 2.0,
                        top + thumb.1 + 3.0 * pad,
                        button.0,
                        button.1,
                    ),
                }
            })
            .collect()
    }

    /// The button under a screen-space point. Thumbnails are not clickable.
    pub fn hit(&self, point: Vec2) -> Option<MenuAction> {
        self.layout()
            .into_iter()
            .find(|column| contains(&column.button, point))
            .map(|column| column.action)
    }

    /// Handles this frame's click, if any.
    pub fn update(&mut self, input: &FrameInput, audio: &dyn SoundPlayer, host: &mut dyn ScreenHost) {
        if let Some(action) = input.click.and_then(|point| self.hit(point)) {
            self.handle_action(action, audio, host);
        }
    }

    pub fn handle_action(
        &self,
        action: MenuAction,
        audio: &dyn SoundPlayer,
        host: &mut dyn ScreenHost,
    ) {
        audio.play_sound(SoundId::Click);
        match action {
            MenuAction::Play(kind) => {
                log::info!("Selected {} map", kind.as_str());
                host.set_screen(ScreenRequest::Map(kind));
            }
            MenuAction::DoNotPress => {
                log::info!("Someone pressed the button they were told not to press");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingAudio {
        played: RefCell<Vec<SoundId>>,
    }

    impl SoundPlayer for RecordingAudio {
        fn play_sound(&self, sound: SoundId) {
            self.played.borrow_mut().push(sound);
        }
    }

    #[derive(Default)]
    struct RecordingHost {
        requests: Vec<ScreenRequest>,
    }

    impl ScreenHost for RecordingHost {
        fn set_screen(&mut self, next: ScreenRequest) {
            self.requests.push(next);
        }
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn menu() -> MapSelection {
        MapSelection::new(vec2(1920.0, 1080.0))
    }

    #[test]
    fn test_layout_is_proportional_and_centred() {
        let columns = menu().layout();
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].action, MenuAction::Play(MapKind::Soldotna));
        assert_eq!(columns[1].action, MenuAction::Play(MapKind::Forest));
        assert_eq!(columns[2].action, MenuAction::DoNotPress);

        let first = &columns[0];
        assert!(approx(first.thumbnail.w, 576.0));
        assert!(approx(first.thumbnail.h, 216.0));
        assert!(approx(first.button.w, 480.0));
        assert!(approx(first.button.h, 108.0));
        assert!(approx(first.thumbnail.x, 19.2));
        assert!(approx(first.thumbnail.y, 339.6));
        assert!(approx(first.button.x, 67.2));
        assert!(approx(first.button.y, 632.4));

        // Middle column sits on the vertical centre line
        let middle = &columns[1];
        assert!(approx(middle.button.center().x, 960.0));
        assert!(approx(middle.thumbnail.center().x, 960.0));
    }

    #[test]
    fn test_hit_finds_buttons_only() {
        let menu = menu();
        let columns = menu.layout();
        for column in &columns {
            assert_eq!(menu.hit(column.button.center()), Some(column.action));
            assert_eq!(menu.hit(column.thumbnail.center()), None);
        }
        assert_eq!(menu.hit(vec2(5.0, 5.0)), None);
    }

    #[test]
    fn test_play_requests_map_screen() {
        let mut menu = menu();
        let audio = RecordingAudio::default();
        let mut host = RecordingHost::default();
        let forest = menu.layout()[1].button.center();
        menu.update(&FrameInput::click_at(forest), &audio, &mut host);
        assert_eq!(host.requests, vec![ScreenRequest::Map(MapKind::Forest)]);
        assert_eq!(*audio.played.borrow(), vec![SoundId::Click]);
    }

    #[test]
    fn test_do_not_press_only_clicks() {
        let menu = menu();
        let audio = RecordingAudio::default();
        let mut host = RecordingHost::default();
        menu.handle_action(MenuAction::DoNotPress, &audio, &mut host);
        assert!(host.requests.is_empty());
        assert_eq!(*audio.played.borrow(), vec![SoundId::Click]);
    }

    #[test]
    fn test_pointer_without_click_does_nothing() {
        let mut menu = menu();
        let audio = RecordingAudio::default();
        let mut host = RecordingHost::default();
        let input = FrameInput {
            pointer: Some(menu.layout()[0].button.center()),
            ..FrameInput::default()
        };
        menu.update(&input, &audio, &mut host);
        assert!(host.requests.is_empty());
        assert!(audio.played.borrow().is_empty());
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = MenuAction::all().iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["Soldotna", "Forest", "Do not press"]);
    }
}

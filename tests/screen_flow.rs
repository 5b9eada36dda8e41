//! Screen-to-screen flow without a window: loading, menu, map, and back.

use hideseek::{
    FrameInput, GameSettings, HideSeekResult, MapKind, MenuAction, Scene, ScreenFlow,
    ScreenRequest, SoundId, SoundPlayer,
};
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

fn menu_button(flow: &ScreenFlow, action: MenuAction) -> macroquad::math::Vec2 {
    match flow.current() {
        Scene::MapSelection(menu) => menu
            .layout()
            .into_iter()
            .find(|column| column.action == action)
            .map(|column| column.button.center())
            .expect("menu has a column for every action"),
        other => panic!("expected map selection, got {:?}", other.request()),
    }
}

#[test]
fn test_full_screen_flow() -> HideSeekResult<()> {
    let audio = RecordingAudio::default();
    let mut flow = ScreenFlow::new(
        ScreenRequest::Loading,
        vec2(1920.0, 1080.0),
        GameSettings::default(),
        &audio,
    )?;
    assert_eq!(flow.current().request(), ScreenRequest::Loading);

    // Loading hands over after 7 seconds
    for _ in 0..(6 * 60) {
        assert!(!flow.step(&FrameInput::default(), 1.0 / 60.0, &audio));
    }
    let mut swapped = false;
    for _ in 0..(2 * 60) {
        swapped |= flow.step(&FrameInput::default(), 1.0 / 60.0, &audio);
    }
    assert!(swapped);
    assert_eq!(flow.current().request(), ScreenRequest::MapSelection);

    // Picking Soldotna enters the map and starts its ambience
    let soldotna = menu_button(&flow, MenuAction::Play(MapKind::Soldotna));
    assert!(flow.step(&FrameInput::click_at(soldotna), 1.0 / 60.0, &audio));
    assert_eq!(flow.current().request(), ScreenRequest::Map(MapKind::Soldotna));
    assert_eq!(
        *audio.played.borrow(),
        vec![SoundId::Click, SoundId::Wind]
    );

    // Play a full round out, then go back to the menu
    for _ in 0..41 {
        flow.step(&FrameInput::default(), 1.0, &audio);
    }
    let back = match flow.current() {
        Scene::Map(session) => {
            assert_eq!(session.round().phase(), hideseek::Phase::Finished);
            session.buttons()[1].bounds.center()
        }
        other => panic!("expected a map, got {:?}", other.request()),
    };
    let back_on_screen = vec2(back.x, 1080.0 - back.y);
    assert!(!flow.step(&FrameInput::click_at(back_on_screen), 0.016, &audio));
    assert!(!flow.step(&FrameInput::default(), 0.016, &audio));

    let mut swapped = false;
    for _ in 0..10 {
        swapped |= flow.step(&FrameInput::default(), 0.016, &audio);
    }
    assert!(swapped);
    assert_eq!(flow.current().request(), ScreenRequest::MapSelection);
    Ok(())
}

#[test]
fn test_do_not_press_stays_on_menu() -> HideSeekResult<()> {
    let audio = RecordingAudio::default();
    let mut flow = ScreenFlow::new(
        ScreenRequest::MapSelection,
        vec2(1280.0, 720.0),
        GameSettings::default(),
        &audio,
    )?;
    let button = menu_button(&flow, MenuAction::DoNotPress);
    assert!(!flow.step(&FrameInput::click_at(button), 0.016, &audio));
    assert_eq!(flow.current().request(), ScreenRequest::MapSelection);
    assert_eq!(*audio.played.borrow(), vec![SoundId::Click]);
    Ok(())
}

#[test]
fn test_starting_on_a_map_plays_its_ambience() -> HideSeekResult<()> {
    let audio = RecordingAudio::default();
    let flow = ScreenFlow::new(
        ScreenRequest::Map(MapKind::Forest),
        vec2(1280.0, 720.0),
        GameSettings::default(),
        &audio,
    )?;
    assert_eq!(flow.current().request(), ScreenRequest::Map(MapKind::Forest));
    assert_eq!(*audio.played.borrow(), vec![SoundId::ForestAmbience]);
    Ok(())
}

#[test]
fn test_minimised_window_delays_menu_until_restored() -> HideSeekResult<()> {
    let audio = RecordingAudio::default();
    let mut flow = ScreenFlow::new(
        ScreenRequest::Loading,
        vec2(1280.0, 720.0),
        GameSettings::default(),
        &audio,
    )?;

    flow.set_viewport(vec2(0.0, 0.0));
    for _ in 0..(8 * 60) {
        assert!(!flow.step(&FrameInput::default(), 1.0 / 60.0, &audio));
    }
    assert_eq!(flow.current().request(), ScreenRequest::Loading);
    assert_eq!(flow.pending(), Some(ScreenRequest::MapSelection));

    flow.set_viewport(vec2(1280.0, 720.0));
    assert!(flow.step(&FrameInput::default(), 1.0 / 60.0, &audio));
    assert_eq!(flow.current().request(), ScreenRequest::MapSelection);
    Ok(())
}

#[test]
fn test_minimising_leaves_actors_in_place() -> HideSeekResult<()> {
    let audio = RecordingAudio::default();
    let mut flow = ScreenFlow::new(
        ScreenRequest::Map(MapKind::Forest),
        vec2(1280.0, 720.0),
        GameSettings::default(),
        &audio,
    )?;

    flow.set_viewport(vec2(0.0, 0.0));
    flow.step(&FrameInput::default(), 1.0 / 60.0, &audio);
    flow.set_viewport(vec2(1280.0, 720.0));

    match flow.current() {
        Scene::Map(session) => {
            assert_eq!(session.playfield(), vec2(1280.0, 720.0));
            assert_eq!(session.hider().position, vec2(640.0, 360.0));
            assert_eq!(session.seeker().position, vec2(100.0, 100.0));
        }
        other => panic!("expected a map, got {:?}", other.request()),
    }
    Ok(())
}

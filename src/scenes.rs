//! # Scene Management System
//!
//! Owns the active screen and swaps screens only between frames.
//!
//! Screens never replace themselves. They ask a [`ScreenHost`] for the next
//! screen, the request is parked in a [`ScreenSwitch`], and [`ScreenFlow`]
//! applies it once the frame has been drawn.

use crate::{
    AudioManager, FrameInput, GameSettings, HideSeekError, HideSeekResult, InputHandler,
    LoadingScreen, MacroquadDisplay, MapKind, MapSelection, MapSession, SoundPlayer,
};
use macroquad::prelude::*;

/// Which screen to show next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenRequest {
    Loading,
    MapSelection,
    Map(MapKind),
}

/// Capability for asking the shell to change screens.
pub trait ScreenHost {
    /// Requests a swap to `next` at the end of the current frame.
    fn set_screen(&mut self, next: ScreenRequest);
}

/// Parks the screen request made during a frame. The last request wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenSwitch {
    pending: Option<ScreenRequest>,
}

impl ScreenSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<ScreenRequest> {
        self.pending
    }

    pub fn take(&mut self) -> Option<ScreenRequest> {
        self.pending.take()
    }

    /// Parks `request` again unless a newer one has arrived since it was
    /// taken.
    pub fn retry(&mut self, request: ScreenRequest) {
        if self.pending.is_none() {
            self.pending = Some(request);
        }
    }
}

/// True when a viewport has some area to lay a screen out in.
///
/// Minimised windows report zero size on some platforms.
pub fn usable_viewport(viewport: Vec2) -> bool {
    viewport.x.is_finite() && viewport.y.is_finite() && viewport.x > 0.0 && viewport.y > 0.0
}

impl ScreenHost for ScreenSwitch {
    fn set_screen(&mut self, next: ScreenRequest) {
        if let Some(previous) = self.pending.replace(next) {
            log::debug!("Screen request {:?} replaced by {:?}", previous, next);
        }
    }
}

/// The screen currently running.
#[derive(Debug, Clone)]
pub enum Scene {
    Loading(LoadingScreen),
    MapSelection(MapSelection),
    Map(MapSession),
}

impl Scene {
    /// Builds a fresh screen for `request`.
    ///
    /// Fails when the viewport has no usable area, which happens while the
    /// window is minimised.
    pub fn build(
        request: ScreenRequest,
        viewport: Vec2,
        settings: &GameSettings,
        seed: u64,
    ) -> HideSeekResult<Self> {
        if !usable_viewport(viewport) {
            return Err(HideSeekError::InvalidState(format!(
                "cannot build {:?} for a {}x{} viewport",
                request, viewport.x, viewport.y
            )));
        }

        let scene = match request {
            ScreenRequest::Loading => Scene::Loading(LoadingScreen::new(seed)),
            ScreenRequest::MapSelection => Scene::MapSelection(MapSelection::new(viewport)),
            ScreenRequest::Map(kind) => {
                let settings = GameSettings {
                    seed,
                    ..settings.clone()
                };
                Scene::Map(MapSession::new(kind, viewport, &settings))
            }
        };
        Ok(scene)
    }

    /// The request that would rebuild this kind of screen.
    pub fn request(&self) -> ScreenRequest {
        match self {
            Scene::Loading(_) => ScreenRequest::Loading,
            Scene::MapSelection(_) => ScreenRequest::MapSelection,
            Scene::Map(session) => ScreenRequest::Map(session.kind()),
        }
    }

    /// Called once when the screen becomes active.
    pub fn enter(&self, audio: &dyn SoundPlayer) {
        if let Scene::Map(session) = self {
            session.enter(audio);
        }
    }

    pub fn update(
        &mut self,
        input: &FrameInput,
        dt: f32,
        audio: &dyn SoundPlayer,
        host: &mut dyn ScreenHost,
    ) {
        match self {
            Scene::Loading(loading) => loading.update(dt, host),
            Scene::MapSelection(menu) => menu.update(input, audio, host),
            Scene::Map(session) => session.update(input, dt, audio, host),
        }
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        match self {
            Scene::Loading(_) => {}
            Scene::MapSelection(menu) => menu.set_viewport(viewport),
            Scene::Map(session) => session.set_playfield(viewport),
        }
    }
}

/// Window-free screen bookkeeping: the active scene plus any swap requested
/// during the current frame.
#[derive(Debug, Clone)]
pub struct ScreenFlow {
    current: Scene,
    switch: ScreenSwitch,
    settings: GameSettings,
    viewport: Vec2,
    screens_built: u64,
    failed_builds: u32,
}

impl ScreenFlow {
    /// Builds and enters the first screen.
    pub fn new(
        start: ScreenRequest,
        viewport: Vec2,
        settings: GameSettings,
        audio: &dyn SoundPlayer,
    ) -> HideSeekResult<Self> {
        let current = Scene::build(start, viewport, &settings, settings.seed)?;
        current.enter(audio);
        log::info!("Starting on {:?}", start);
        Ok(Self {
            current,
            switch: ScreenSwitch::new(),
            settings,
            viewport,
            screens_built: 1,
            failed_builds: 0,
        })
    }

    pub fn current(&self) -> &Scene {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Scene {
        &mut self.current
    }

    /// Swap requested this frame, not yet applied.
    pub fn pending(&self) -> Option<ScreenRequest> {
        self.switch.pending()
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Records the window size. Screens only see sizes with some area, so
    /// a minimised window leaves the active screen laid out as it was.
    pub fn set_viewport(&mut self, viewport: Vec2) {
        if viewport == self.viewport {
            return;
        }
        log::debug!("Viewport resized to {}x{}", viewport.x, viewport.y);
        self.viewport = viewport;
        if usable_viewport(viewport) {
            self.current.set_viewport(viewport);
        }
    }

    /// Runs the current screen for one frame. Any swap it requests waits
    /// for [`ScreenFlow::finish_frame`].
    pub fn update(&mut self, input: &FrameInput, dt: f32, audio: &dyn SoundPlayer) {
        self.current.update(input, dt, audio, &mut self.switch);
    }

    /// Applies the pending swap, if any. Returns true when the screen
    /// changed.
    ///
    /// If the next screen cannot be built the current one stays active and
    /// the request stays parked, so the swap is retried every frame until
    /// it succeeds or a newer request replaces it.
    pub fn finish_frame(&mut self, audio: &dyn SoundPlayer) -> bool {
        let Some(request) = self.switch.take() else {
            return false;
        };

        // Each screen gets its own seed so revisiting a map does not replay
        // the same weather.
        let seed = self.settings.seed.wrapping_add(self.screens_built);
        match Scene::build(request, self.viewport, &self.settings, seed) {
            Ok(next) => {
                log::info!("Switching from {:?} to {:?}", self.current.request(), request);
                next.enter(audio);
                self.current = next;
                self.screens_built += 1;
                self.failed_builds = 0;
                true
            }
            Err(e) => {
                if self.failed_builds == 0 {
                    log::error!("Error during transition to {:?}: {}", request, e);
                } else {
                    log::debug!("Transition to {:?} still failing: {}", request, e);
                }
                self.failed_builds = self.failed_builds.saturating_add(1);
                self.switch.retry(request);
                false
            }
        }
    }

    /// [`update`](Self::update) followed by [`finish_frame`](Self::finish_frame).
    pub fn step(&mut self, input: &FrameInput, dt: f32, audio: &dyn SoundPlayer) -> bool {
        self.update(input, dt, audio);
        self.finish_frame(audio)
    }
}

/// The main scene manager: polls input, runs the flow, draws, and yields
/// to macroquad once per frame.
pub struct SceneManager {
    flow: ScreenFlow,
    display: MacroquadDisplay,
    input_handler: InputHandler,
    audio: AudioManager,
}

impl SceneManager {
    /// Creates a new scene manager starting on `start`.
    pub async fn new(
        settings: GameSettings,
        start: ScreenRequest,
        input_handler: InputHandler,
        audio: AudioManager,
    ) -> HideSeekResult<Self> {
        let display = MacroquadDisplay::new().await?;
        let viewport = vec2(screen_width(), screen_height());
        let flow = ScreenFlow::new(start, viewport, settings, &audio)?;

        Ok(Self {
            flow,
            display,
            input_handler,
            audio,
        })
    }

    /// Runs the main scene loop until the player presses Escape.
    pub async fn run(&mut self) -> HideSeekResult<()> {
        loop {
            let input = self.input_handler.poll();
            if input.back {
                log::info!("Exit requested");
                break;
            }

            self.flow
                .set_viewport(vec2(screen_width(), screen_height()));
            self.flow.update(&input, get_frame_time(), &self.audio);
            self.display.render(self.flow.current());

            // Only swap once this frame's draws are submitted
            self.flow.finish_frame(&self.audio);

            next_frame().await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow(start: ScreenRequest) -> ScreenFlow {
        ScreenFlow::new(
            start,
            vec2(1920.0, 1080.0),
            GameSettings::default(),
            &crate::SilentAudio,
        )
        .unwrap()
    }

    #[test]
    fn test_switch_keeps_last_request() {
        let mut switch = ScreenSwitch::new();
        switch.set_screen(ScreenRequest::MapSelection);
        switch.set_screen(ScreenRequest::Map(MapKind::Forest));
        assert_eq!(switch.take(), Some(ScreenRequest::Map(MapKind::Forest)));
        assert_eq!(switch.take(), None);
    }

    #[test]
    fn test_swap_waits_for_end_of_frame() {
        let mut flow = flow(ScreenRequest::Loading);
        flow.update(&FrameInput::default(), 8.0, &crate::SilentAudio);
        assert_eq!(flow.pending(), Some(ScreenRequest::MapSelection));
        assert_eq!(flow.current().request(), ScreenRequest::Loading);

        assert!(flow.finish_frame(&crate::SilentAudio));
        assert_eq!(flow.current().request(), ScreenRequest::MapSelection);
        assert_eq!(flow.pending(), None);
        assert!(!flow.finish_frame(&crate::SilentAudio));
    }

    #[test]
    fn test_failed_build_keeps_current_screen_and_request() {
        let mut flow = flow(ScreenRequest::MapSelection);
        flow.set_viewport(vec2(0.0, 0.0));
        flow.switch.set_screen(ScreenRequest::Map(MapKind::Forest));
        assert!(!flow.finish_frame(&crate::SilentAudio));
        assert_eq!(flow.current().request(), ScreenRequest::MapSelection);
        assert_eq!(flow.pending(), Some(ScreenRequest::Map(MapKind::Forest)));

        flow.set_viewport(vec2(1280.0, 720.0));
        assert!(flow.finish_frame(&crate::SilentAudio));
        assert_eq!(flow.current().request(), ScreenRequest::Map(MapKind::Forest));
        assert_eq!(flow.pending(), None);
    }

    #[test]
    fn test_retry_does_not_override_newer_request() {
        let mut switch = ScreenSwitch::new();
        switch.set_screen(ScreenRequest::Loading);
        switch.retry(ScreenRequest::Map(MapKind::Forest));
        assert_eq!(switch.take(), Some(ScreenRequest::Loading));

        switch.retry(ScreenRequest::Map(MapKind::Forest));
        assert_eq!(switch.take(), Some(ScreenRequest::Map(MapKind::Forest)));
    }

    #[test]
    fn test_empty_viewport_does_not_reach_screens() {
        let mut flow = flow(ScreenRequest::MapSelection);
        flow.set_viewport(vec2(0.0, 0.0));
        flow.set_viewport(vec2(f32::NAN, 720.0));
        assert!(flow.viewport().x.is_nan());
        match flow.current() {
            Scene::MapSelection(menu) => assert_eq!(menu.viewport(), vec2(1920.0, 1080.0)),
            other => panic!("expected the menu, got {:?}", other.request()),
        }
    }

    #[test]
    fn test_build_rejects_empty_viewport() {
        let err = Scene::build(
            ScreenRequest::Loading,
            vec2(0.0, 720.0),
            &GameSettings::default(),
            1,
        )
        .unwrap_err();
        assert!(matches!(err, HideSeekError::InvalidState(_)));
    }

    #[test]
    fn test_resize_reaches_map_session() {
        let mut flow = flow(ScreenRequest::Map(MapKind::Soldotna));
        flow.set_viewport(vec2(800.0, 600.0));
        match flow.current() {
            Scene::Map(session) => assert_eq!(session.playfield(), vec2(800.0, 600.0)),
            other => panic!("expected a map, got {:?}", other.request()),
        }
    }
}

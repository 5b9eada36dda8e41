//! # Map Sessions
//!
//! The per-map sequencer: owns the round, both actors, the ambient
//! simulation, and the pending hand-off back to the menu.
//!
//! Each frame [`MapSession::update`] moves the active actor, checks contact,
//! advances the round, runs the weather, handles end-of-round buttons, and
//! finally asks the [`ScreenHost`] for a screen swap once the grace delay
//! after "Back to Menu" has passed.

use super::{
    overlap, screen_to_world, Actor, Ambient, ButtonView, DrawCall, MapFrame, MapKind, Outcome,
    Overlay, ParticleView, PendingTransition, Phase, Role, Round, RoundEvent, SpriteId, Steering,
};
use crate::audio::{SoundId, SoundPlayer};
use crate::input::FrameInput;
use crate::scenes::{usable_viewport, ScreenHost, ScreenRequest};
use crate::settings::GameSettings;
use macroquad::math::{vec2, Rect, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Width and height of the end-of-round buttons.
const BUTTON_SIZE: (f32, f32) = (200.0, 60.0);

/// Vertical gap between the two end-of-round buttons.
const BUTTON_SPACING: f32 = 100.0;

/// Inclusive temperature range on the snowy map, in °F.
const TEMPERATURE_RANGE: (i32, i32) = (-20, 0);

/// Actions offered once a round is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndAction {
    /// Reset the round on the same map
    PlayAgain,
    /// Return to map selection after the grace delay
    BackToMenu,
}

impl EndAction {
    pub fn label(&self) -> &'static str {
        match self {
            EndAction::PlayAgain => "Play Again",
            EndAction::BackToMenu => "Back to Menu",
        }
    }

    pub fn all() -> [EndAction; 2] {
        [EndAction::PlayAgain, EndAction::BackToMenu]
    }
}

/// One map's worth of game state.
#[derive(Debug, Clone)]
pub struct MapSession {
    kind: MapKind,
    playfield: Vec2,
    round: Round,
    hider: Actor,
    seeker: Actor,
    seeker_start: Vec2,
    ambient: Option<Ambient>,
    temperature: Option<i32>,
    transition: PendingTransition,
    rng: StdRng,
}

impl MapSession {
    /// Sets up a fresh round on `kind` for a `playfield`-sized viewport.
    ///
    /// # Examples
    ///
    /// ```
    /// use hideseek::{GameSettings, MapKind, MapSession, Phase};
    /// use macroquad::math::vec2;
    ///
    /// let session = MapSession::new(MapKind::Forest, vec2(1920.0, 1080.0), &GameSettings::default());
    /// assert_eq!(session.round().phase(), Phase::Hiding);
    /// assert_eq!(session.hider().position, vec2(960.0, 540.0));
    /// ```
    pub fn new(kind: MapKind, playfield: Vec2, settings: &GameSettings) -> Self {
        let mut rng = StdRng::seed_from_u64(settings.seed);
        let size = settings.actor_size();

        let mut hider = Actor::new(hider_start(playfield), size, settings.hider_speed);
        hider.set_speed_bonus(settings.hider_speed_bonus);
        hider.clamp_to(playfield);

        let seeker_start = settings.seeker_start();
        let mut seeker = Actor::new(seeker_start, size, settings.seeker_speed);
        seeker.set_speed_bonus(settings.seeker_speed_bonus);
        seeker.clamp_to(playfield);

        let ambient = kind
            .has_weather()
            .then(|| Ambient::new(playfield, rng.gen()));
        let temperature = kind
            .has_weather()
            .then(|| rng.gen_range(TEMPERATURE_RANGE.0..=TEMPERATURE_RANGE.1));

        log::info!("Starting {} map", kind.as_str());

        Self {
            kind,
            playfield,
            round: Round::new(settings.round_timings()),
            hider,
            seeker,
            seeker_start,
            ambient,
            temperature,
            transition: PendingTransition::new(settings.transition_delay),
            rng,
        }
    }

    pub fn kind(&self) -> MapKind {
        self.kind
    }

    pub fn playfield(&self) -> Vec2 {
        self.playfield
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn hider(&self) -> &Actor {
        &self.hider
    }

    pub fn seeker(&self) -> &Actor {
        &self.seeker
    }

    pub fn hider_mut(&mut self) -> &mut Actor {
        &mut self.hider
    }

    pub fn seeker_mut(&mut self) -> &mut Actor {
        &mut self.seeker
    }

    pub fn ambient(&self) -> Option<&Ambient> {
        self.ambient.as_ref()
    }

    pub fn temperature(&self) -> Option<i32> {
        self.temperature
    }

    /// True between "Back to Menu" and the screen swap.
    pub fn transition_pending(&self) -> bool {
        self.transition.is_active()
    }

    /// Plays the map's ambience. Called once when the screen becomes active.
    pub fn enter(&self, audio: &dyn SoundPlayer) {
        let ambience = match self.kind {
            MapKind::Forest => SoundId::ForestAmbience,
            MapKind::Soldotna => SoundId::Wind,
        };
        audio.play_sound(ambience);
    }

    /// Runs one frame.
    ///
    /// Contact is evaluated after the seeker moves and before the seek
    /// countdown, so a catch on the last frame still counts as a seeker win.
    pub fn update(
        &mut self,
        input: &FrameInput,
        dt: f32,
        audio: &dyn SoundPlayer,
        host: &mut dyn ScreenHost,
    ) {
        let steering = match input.pointer {
            Some(point) => Steering::Pointer(screen_to_world(point, self.playfield)),
            None => Steering::Keys(input.keys),
        };
        match self.round.active_role() {
            Some(Role::Hider) => self.hider.update_position(steering, dt, self.playfield),
            Some(Role::Seeker) => self.seeker.update_position(steering, dt, self.playfield),
            None => {}
        }

        let contact =
            self.round.contact_checked() && overlap(&self.seeker.bounds(), &self.hider.bounds());

        if let Some(event) = self.round.step(dt, contact) {
            match event {
                RoundEvent::SeekStarted => audio.play_sound(SoundId::Seek),
                RoundEvent::Finished(Outcome::SeekerWins) => audio.play_sound(SoundId::Win),
                RoundEvent::Finished(Outcome::HiderWins) => audio.play_sound(SoundId::Lose),
            }
        }

        if let Some(ambient) = self.ambient.as_mut() {
            ambient.update(dt);
        }

        if let Some(click) = input.click {
            if let Some(action) = self.button_at(screen_to_world(click, self.playfield)) {
                self.handle_action(action, audio);
            }
        }

        if self.transition.tick(dt) {
            log::info!("Leaving {} map for map selection", self.kind.as_str());
            host.set_screen(ScreenRequest::MapSelection);
        }
    }

    /// Applies an end-of-round action. Ignored while a round is in progress
    /// and once the session is leaving for the menu.
    pub fn handle_action(&mut self, action: EndAction, audio: &dyn SoundPlayer) {
        if self.round.phase() != Phase::Finished || self.transition.is_active() {
            return;
        }
        audio.play_sound(SoundId::Click);
        match action {
            EndAction::PlayAgain => self.reset(audio),
            EndAction::BackToMenu => self.transition.arm(),
        }
    }

    /// Starts a new round on the same map with both actors back at their
    /// starting spots.
    pub fn reset(&mut self, audio: &dyn SoundPlayer) {
        self.round.reset();
        self.hider.position = hider_start(self.playfield);
        self.hider.clamp_to(self.playfield);
        self.seeker.position = self.seeker_start;
        self.seeker.clamp_to(self.playfield);
        if self.temperature.is_some() {
            self.temperature = Some(
                self.rng
                    .gen_range(TEMPERATURE_RANGE.0..=TEMPERATURE_RANGE.1),
            );
        }
        log::info!("Round reset on {} map", self.kind.as_str());
        audio.play_sound(SoundId::Hide);
    }

    /// Adapts to a new viewport size, keeping both actors on screen. Sizes
    /// without area are ignored.
    pub fn set_playfield(&mut self, playfield: Vec2) {
        if playfield == self.playfield || !usable_viewport(playfield) {
            return;
        }
        self.playfield = playfield;
        self.hider.clamp_to(playfield);
        self.seeker.clamp_to(playfield);
        if let Some(ambient) = self.ambient.as_mut() {
            ambient.snowfall.set_bounds(playfield);
        }
    }

    /// End-of-round buttons, empty while the round is running.
    pub fn buttons(&self) -> Vec<ButtonView> {
        if self.round.phase() != Phase::Finished {
            return Vec::new();
        }
        let x = self.playfield.x / 2.0 - BUTTON_SIZE.0 / 2.0;
        let top = self.playfield.y / 2.0;
        EndAction::all()
            .iter()
            .enumerate()
            .map(|(i, action)| ButtonView {
                label: action.label(),
                bounds: Rect::new(
                    x,
                    top - i as f32 * BUTTON_SPACING,
                    BUTTON_SIZE.0,
                    BUTTON_SIZE.1,
                ),
            })
            .collect()
    }

    /// The end-of-round action under a playfield point, if any.
    pub fn button_at(&self, point: Vec2) -> Option<EndAction> {
        self.buttons()
            .iter()
            .zip(EndAction::all())
            .find(|(button, _)| super::contains(&button.bounds, point))
            .map(|(_, action)| action)
    }

    /// Describes this frame for the renderer.
    pub fn frame(&self) -> MapFrame {
        let brightness = self.ambient.as_ref().map_or(1.0, Ambient::light_level);
        let mut draw_calls = vec![DrawCall {
            sprite: SpriteId::Background(self.kind),
            position: Vec2::ZERO,
            size: self.playfield,
            brightness,
        }];

        // The phases never show both actors at once
        let scale = self.kind.sprite_scale();
        if self.round.hider_visible() {
            draw_calls.push(self.actor_call(Role::Hider, &self.hider, scale));
        }
        if self.round.seeker_active() {
            draw_calls.push(self.actor_call(Role::Seeker, &self.seeker, scale));
        }

        let particles = self
            .ambient
            .as_ref()
            .map(|ambient| {
                ambient
                    .snowfall
                    .flakes()
                    .iter()
                    .map(|flake| ParticleView {
                        center: flake.position,
                        radius: flake.size,
                    })
                    .collect()
            })
            .unwrap_or_default();

        MapFrame {
            draw_calls,
            particles,
            overlay: Overlay {
                timer: self.round.timer_text(),
                status: self.temperature.map(|t| format!("Temperature: {}°F", t)),
                outcome: self.round.outcome().map(|o| o.banner().to_string()),
            },
            buttons: self.buttons(),
        }
    }

    fn actor_call(&self, role: Role, actor: &Actor, scale: f32) -> DrawCall {
        DrawCall {
            sprite: SpriteId::Actor(role),
            position: actor.position,
            size: actor.size * scale,
            brightness: 1.0,
        }
    }
}

/// Default hider spot for a playfield: its corner at the centre.
pub fn hider_start(playfield: Vec2) -> Vec2 {
    vec2(playfield.x / 2.0, playfield.y / 2.0)
}

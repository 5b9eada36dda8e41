//! # Hideseek
//!
//! A two-player hide-and-seek casual game: a loading screen with rotating quotes,
//! a map-selection menu, and two playable maps (a forest and the snowy town of
//! Soldotna).
//!
//! ## Architecture Overview
//!
//! The crate is split so that everything that decides *what happens* can run
//! without a window:
//!
//! - **Game**: round phases, actor motion, collision, ambient weather and the
//!   per-map sequencer. Pure data, driven by `update(dt)` calls.
//! - **Input**: turns macroquad key/mouse/touch state into a plain [`FrameInput`].
//! - **Rendering**: draws whatever the game modules describe, using macroquad.
//! - **Audio**: a [`SoundPlayer`] capability handed to each screen.
//! - **Scenes**: the frame loop that owns the active screen and swaps screens
//!   only between frames.

pub mod audio;
pub mod game;
pub mod input;
pub mod rendering;
pub mod scenes;
pub mod settings;
pub mod utils;

pub use audio::*;
pub use game::*;
pub use input::*;
pub use rendering::*;
pub use scenes::*;
pub use settings::*;
pub use utils::*;

/// Core error type for the hide-and-seek game.
#[derive(thiserror::Error, Debug)]
pub enum HideSeekError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Settings contain a value the game cannot run with
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An asset could not be loaded
    #[error("Asset error: {0}")]
    Asset(String),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the hideseek codebase.
pub type HideSeekResult<T> = Result<T, HideSeekError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Seconds the hider gets before the seeker is released
    pub const HIDE_TIME: f32 = 20.0;

    /// Seconds the seeker gets to find the hider
    pub const SEEK_TIME: f32 = 20.0;

    /// Hider base speed in pixels per second
    pub const HIDER_SPEED: f32 = 200.0;

    /// Seeker base speed in pixels per second
    pub const SEEKER_SPEED: f32 = 180.0;

    /// Collision and clamping size of both actors, in pixels
    pub const ACTOR_SIZE: (f32, f32) = (64.0, 64.0);

    /// Where the seeker starts each round (bottom-left origin)
    pub const SEEKER_START: (f32, f32) = (100.0, 100.0);

    /// Grace period between "Back to Menu" and the actual screen swap
    pub const TRANSITION_DELAY: f32 = 0.1;

    /// Length of one day or one night on the snowy map
    pub const DAY_NIGHT_CYCLE: f32 = 60.0;

    /// Seconds between weather intensity changes
    pub const WEATHER_CHANGE_INTERVAL: f32 = 15.0;

    /// Snowflakes spawned when the snowy map opens
    pub const INITIAL_SNOWFLAKE_COUNT: usize = 300;

    /// Weather intensity before the first weather change
    pub const INITIAL_WEATHER_INTENSITY: f32 = 0.5;

    /// Inclusive range for random weather intensity
    pub const WEATHER_INTENSITY_RANGE: (f32, f32) = (0.2, 1.0);

    /// Seconds between loading-screen quote changes
    pub const QUOTE_INTERVAL: f32 = 6.0;

    /// Seconds before the loading screen hands over to the map menu
    pub const LOADING_ADVANCE: f32 = 7.0;

    /// Seconds between loading-dot animation steps
    pub const DOT_INTERVAL: f32 = 0.5;

    /// Resolution the layout constants were authored for
    pub const REFERENCE_RESOLUTION: (f32, f32) = (1920.0, 1080.0);

    /// Default window size on desktop
    pub const WINDOW_SIZE: (f32, f32) = (1280.0, 720.0);
}

//! # Hide and Seek Main Entry Point
//!
//! Parses the command line, sets up logging and the window, loads settings
//! and sounds, then hands control to the scene manager.

use clap::Parser;
use hideseek::{
    config, AudioManager, GameSettings, HideSeekError, HideSeekResult, InputHandler, MapKind,
    SceneManager, ScreenRequest,
};
use macroquad::prelude::*;
use std::path::PathBuf;

/// Command line arguments for the hide-and-seek game.
#[derive(Parser, Debug)]
#[command(name = "hideseek")]
#[command(about = "A two-player hide-and-seek game with a forest and a snowy town map")]
#[command(version)]
struct Args {
    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed for weather and temperature
    #[arg(short, long)]
    seed: Option<u64>,

    /// Skip the loading screen and menu and start on this map (forest, soldotna)
    #[arg(short, long)]
    map: Option<String>,

    /// Disable all sound effects
    #[arg(long)]
    muted: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[macroquad::main("Hide and Seek")]
async fn main() -> HideSeekResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;

    log::info!("Starting Hide and Seek v{}", hideseek::VERSION);

    let settings = load_settings(&args)?;
    let start = match &args.map {
        Some(name) => MapKind::from_str(name).map(ScreenRequest::Map).ok_or_else(|| {
            HideSeekError::InvalidConfig(format!(
                "unknown map '{}', expected forest or soldotna",
                name
            ))
        })?,
        None => ScreenRequest::Loading,
    };

    run_game(settings, start).await
}

/// Initializes the logging system based on the specified log level.
///
/// `RUST_LOG` takes precedence over `--log-level` when set.
fn initialize_logging(log_level: &str) -> HideSeekResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .map_err(|e| HideSeekError::InvalidState(format!("logging already set up: {}", e)))?;
        tracing::debug!(filter = log_level, "tracing subscriber installed");
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init()
            .map_err(|e| HideSeekError::InvalidState(format!("logging already set up: {}", e)))?;
    }

    Ok(())
}

/// Reads the settings file if one was given, then applies CLI overrides.
fn load_settings(args: &Args) -> HideSeekResult<GameSettings> {
    let mut settings = match &args.config {
        Some(path) => GameSettings::load(path)?,
        None => GameSettings::default(),
    };

    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if args.muted {
        settings.muted = true;
    }
    settings.validate()?;

    log::debug!("Effective settings: {:?}", settings);
    Ok(settings)
}

/// Sets up the window and assets, then runs the scene loop.
async fn run_game(settings: GameSettings, start: ScreenRequest) -> HideSeekResult<()> {
    // On mobile the platform decides the size
    request_new_screen_size(config::WINDOW_SIZE.0, config::WINDOW_SIZE.1);
    set_pc_assets_folder("assets");
    next_frame().await;

    let mut audio = AudioManager::load("sounds").await;
    audio.set_volume(settings.effective_volume());
    audio.set_sound_enabled(!settings.muted);

    let mut scenes = SceneManager::new(settings, start, InputHandler::new(), audio).await?;
    scenes.run().await?;

    log::info!("Game loop ended");
    Ok(())
}

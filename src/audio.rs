//! # Audio
//!
//! Sound effects, played fire-and-forget.
//!
//! Screens never reach for a global audio object. They receive a
//! [`SoundPlayer`] from the scene manager each frame, which owns the one
//! [`AudioManager`] for the whole run.

use macroquad::audio::{load_sound, play_sound, PlaySoundParams, Sound};
use std::collections::HashMap;

/// Sound effects the game knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    /// Any button press
    Click,
    /// Seeker caught the hider
    Win,
    /// Seek countdown ran out
    Lose,
    /// New round started
    Hide,
    /// Seeker released
    Seek,
    /// Snowy map ambience
    Wind,
    /// Forest map ambience
    ForestAmbience,
}

impl SoundId {
    /// File stem under the sounds directory.
    pub fn name(&self) -> &'static str {
        match self {
            SoundId::Click => "click",
            SoundId::Win => "win",
            SoundId::Lose => "lose",
            SoundId::Hide => "hide",
            SoundId::Seek => "seek",
            SoundId::Wind => "wind",
            SoundId::ForestAmbience => "forest_ambience",
        }
    }

    /// Every sound, in load order.
    pub fn all() -> [SoundId; 7] {
        [
            SoundId::Click,
            SoundId::Win,
            SoundId::Lose,
            SoundId::Hide,
            SoundId::Seek,
            SoundId::Wind,
            SoundId::ForestAmbience,
        ]
    }
}

/// Something that can play a sound effect.
///
/// Playing is fire-and-forget: there is no completion signal and a sound that
/// failed to load is silently skipped.
pub trait SoundPlayer {
    fn play_sound(&self, sound: SoundId);
}

/// A player that never makes a sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl SoundPlayer for SilentAudio {
    fn play_sound(&self, _sound: SoundId) {}
}

/// Macroquad-backed sound effect player.
pub struct AudioManager {
    sounds: HashMap<SoundId, Sound>,
    volume: f32,
    sound_enabled: bool,
}

impl AudioManager {
    /// Creates a manager with nothing loaded.
    pub fn empty() -> Self {
        Self {
            sounds: HashMap::new(),
            volume: 1.0,
            sound_enabled: true,
        }
    }

    /// Loads every [`SoundId`] from `<dir>/<name>.wav`.
    ///
    /// Missing or broken files are logged and left out; playing them later is
    /// a no-op.
    pub async fn load(dir: &str) -> Self {
        let mut manager = Self::empty();
        for id in SoundId::all() {
            let path = format!("{}/{}.wav", dir, id.name());
            match load_sound(&path).await {
                Ok(sound) => {
                    manager.sounds.insert(id, sound);
                }
                Err(e) => {
                    log::warn!("Error loading sound {}: {:?}", path, e);
                }
            }
        }
        log::info!("Sounds loaded: {}", manager.sounds.len());
        manager
    }

    /// Sets playback volume, clamped to `[0, 1]`.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    pub fn is_sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Number of sounds that loaded successfully.
    pub fn loaded_count(&self) -> usize {
        self.sounds.len()
    }
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::empty()
    }
}

impl SoundPlayer for AudioManager {
    fn play_sound(&self, sound: SoundId) {
        if !self.sound_enabled || self.volume <= 0.0 {
            return;
        }
        match self.sounds.get(&sound) {
            Some(handle) => play_sound(
                handle,
                PlaySoundParams {
                    looped: false,
                    volume: self.volume,
                },
            ),
            None => log::trace!("Sound {} not loaded, skipping", sound.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_names_are_unique() {
        let mut names: Vec<&str> = SoundId::all().iter().map(|s| s.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), SoundId::all().len());
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut audio = AudioManager::empty();
        audio.set_volume(2.5);
        assert_eq!(audio.volume(), 1.0);
        audio.set_volume(-1.0);
        assert_eq!(audio.volume(), 0.0);
    }

    #[test]
    fn test_empty_manager_plays_nothing_without_panicking() {
        let audio = AudioManager::empty();
        assert_eq!(audio.loaded_count(), 0);
        audio.play_sound(SoundId::Click);
    }
}

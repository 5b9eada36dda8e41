//! Game settings and preferences
//!
//! Loaded from an optional JSON file, then overridden by command-line flags.

use crate::config;
use crate::game::RoundTimings;
use crate::{HideSeekError, HideSeekResult};
use macroquad::math::{vec2, Vec2};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable gameplay and audio settings.
///
/// Every field falls back to its default when missing from the file, so a
/// settings file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    // === Round ===
    /// Seconds of hiding before the seeker is released
    pub hide_time: f32,
    /// Seconds the seeker has to find the hider
    pub seek_time: f32,

    // === Actors ===
    /// Hider base speed (px/s)
    pub hider_speed: f32,
    /// Seeker base speed (px/s)
    pub seeker_speed: f32,
    /// Extra hider speed (px/s)
    pub hider_speed_bonus: f32,
    /// Extra seeker speed (px/s)
    pub seeker_speed_bonus: f32,
    /// Width and height of both actors (px)
    pub actor_size: (f32, f32),
    /// Seeker starting corner, bottom-left origin (px)
    pub seeker_start: (f32, f32),

    // === Screens ===
    /// Grace period before leaving a map (s)
    pub transition_delay: f32,
    /// Seed for weather, snow, and temperature
    pub seed: u64,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub volume: f32,
    /// Disable all sound effects
    pub muted: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            hide_time: config::HIDE_TIME,
            seek_time: config::SEEK_TIME,

            hider_speed: config::HIDER_SPEED,
            seeker_speed: config::SEEKER_SPEED,
            hider_speed_bonus: 0.0,
            seeker_speed_bonus: 0.0,
            actor_size: config::ACTOR_SIZE,
            seeker_start: config::SEEKER_START,

            transition_delay: config::TRANSITION_DELAY,
            seed: 12345,

            volume: 1.0,
            muted: false,
        }
    }
}

impl GameSettings {
    /// Reads settings from a JSON file and validates them.
    pub fn load(path: impl AsRef<Path>) -> HideSeekResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Writes settings to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> HideSeekResult<()> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        Ok(())
    }

    /// Parses and validates settings from JSON.
    pub fn from_json(json: &str) -> HideSeekResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serializes settings to pretty JSON.
    pub fn to_json(&self) -> HideSeekResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects values the game cannot run with.
    pub fn validate(&self) -> HideSeekResult<()> {
        let positive = [
            ("hide_time", self.hide_time),
            ("seek_time", self.seek_time),
            ("actor_size.0", self.actor_size.0),
            ("actor_size.1", self.actor_size.1),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(HideSeekError::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("hider_speed", self.hider_speed),
            ("seeker_speed", self.seeker_speed),
            ("hider_speed + hider_speed_bonus", self.hider_speed + self.hider_speed_bonus),
            ("seeker_speed + seeker_speed_bonus", self.seeker_speed + self.seeker_speed_bonus),
            ("seeker_start.0", self.seeker_start.0),
            ("seeker_start.1", self.seeker_start.1),
            ("transition_delay", self.transition_delay),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(HideSeekError::InvalidConfig(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.volume) {
            return Err(HideSeekError::InvalidConfig(format!(
                "volume must be between 0 and 1, got {}",
                self.volume
            )));
        }

        Ok(())
    }

    pub fn round_timings(&self) -> RoundTimings {
        RoundTimings {
            hide_time: self.hide_time,
            seek_time: self.seek_time,
        }
    }

    pub fn actor_size(&self) -> Vec2 {
        vec2(self.actor_size.0, self.actor_size.1)
    }

    pub fn seeker_start(&self) -> Vec2 {
        vec2(self.seeker_start.0, self.seeker_start.1)
    }

    /// Volume actually used for playback (0 when muted).
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = GameSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.round_timings(), RoundTimings::default());
        assert_eq!(settings.actor_size(), vec2(64.0, 64.0));
        assert_eq!(settings.seeker_start(), vec2(100.0, 100.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = GameSettings::from_json(r#"{ "hide_time": 5.0, "muted": true }"#).unwrap();
        assert_eq!(settings.hide_time, 5.0);
        assert!(settings.muted);
        assert_eq!(settings.seek_time, config::SEEK_TIME);
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = GameSettings::default();
        settings.seed = 7;
        settings.seeker_speed_bonus = 25.0;
        let json = settings.to_json().unwrap();
        assert_eq!(GameSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let cases = [
            r#"{ "hide_time": 0.0 }"#,
            r#"{ "seek_time": -3.0 }"#,
            r#"{ "seeker_speed": -1.0 }"#,
            r#"{ "hider_speed_bonus": -500.0 }"#,
            r#"{ "actor_size": [0.0, 64.0] }"#,
            r#"{ "volume": 1.5 }"#,
            r#"{ "transition_delay": -0.1 }"#,
        ];
        for json in cases {
            let err = GameSettings::from_json(json).unwrap_err();
            assert!(
                matches!(err, HideSeekError::InvalidConfig(_)),
                "{} gave {:?}",
                json,
                err
            );
        }
    }

    #[test]
    fn test_malformed_json_is_serde_error() {
        let err = GameSettings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, HideSeekError::Serde(_)));
    }
}

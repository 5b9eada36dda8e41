//! # Ambient Simulation
//!
//! Cosmetic day/night lighting and snowfall for the snowy map. Nothing here
//! affects gameplay; it only changes what the background and particles look
//! like.

use crate::config;
use macroquad::math::{vec2, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::PI;

/// Alternating day and night, each lasting one cycle period.
#[derive(Debug, Clone, PartialEq)]
pub struct DayNightCycle {
    period: f32,
    elapsed: f32,
    is_day: bool,
}

impl DayNightCycle {
    /// Starts at the beginning of a day.
    pub fn new(period: f32) -> Self {
        Self {
            period: period.max(f32::EPSILON),
            elapsed: 0.0,
            is_day: true,
        }
    }

    pub fn is_day(&self) -> bool {
        self.is_day
    }

    /// Fraction of the current day or night already elapsed, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.period).clamp(0.0, 1.0)
    }

    /// Advances the clock, flipping between day and night whenever a period ends.
    pub fn update(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.elapsed += dt;
        if self.elapsed > self.period {
            self.elapsed = 0.0;
            self.is_day = !self.is_day;
        }
    }

    /// Background brightness multiplier in `[0.3, 1.0]`.
    ///
    /// Days brighten from 0.7 towards 1.0 at midday; nights darken from 0.7
    /// towards 0.3 at midnight.
    pub fn light_level(&self) -> f32 {
        let wave = (self.progress() * PI).sin();
        let level = if self.is_day {
            0.7 + 0.3 * wave
        } else {
            0.7 - 0.4 * wave
        };
        level.clamp(0.3, 1.0)
    }
}

impl Default for DayNightCycle {
    fn default() -> Self {
        Self::new(config::DAY_NIGHT_CYCLE)
    }
}

/// A single falling snowflake.
#[derive(Debug, Clone, PartialEq)]
pub struct Snowflake {
    pub position: Vec2,
    /// Radius in pixels, between 1 and 3
    pub size: f32,
    /// Fall speed in pixels per second
    pub fall_speed: f32,
    /// Sway phase, grows a little every frame
    pub drift_angle: f32,
}

impl Snowflake {
    fn spawn(position: Vec2, rng: &mut StdRng) -> Self {
        let size = rng.gen_range(1.0..=3.0);
        Self {
            position,
            size,
            fall_speed: 30.0 + size * 10.0,
            drift_angle: rng.gen_range(0.0..360.0),
        }
    }
}

/// Target flake count for a weather intensity.
///
/// # Examples
///
/// ```
/// use hideseek::target_snowflake_count;
///
/// assert_eq!(target_snowflake_count(0.2), 260);
/// assert_eq!(target_snowflake_count(1.0), 500);
/// ```
pub fn target_snowflake_count(intensity: f32) -> usize {
    let (lo, hi) = config::WEATHER_INTENSITY_RANGE;
    (200.0 + 300.0 * intensity.clamp(lo, hi)).round() as usize
}

/// Snow particles plus the weather that decides how many of them there are.
#[derive(Debug, Clone)]
pub struct Snowfall {
    flakes: Vec<Snowflake>,
    bounds: Vec2,
    intensity: f32,
    weather_timer: f32,
    weather_interval: f32,
    rng: StdRng,
}

impl Snowfall {
    /// Scatters `count` flakes over a `bounds`-sized area.
    pub fn new(bounds: Vec2, count: usize, weather_interval: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let flakes = (0..count)
            .map(|_| {
                let position = vec2(
                    rng.gen_range(0.0..=bounds.x.max(0.0)),
                    rng.gen_range(0.0..=bounds.y.max(0.0)),
                );
                Snowflake::spawn(position, &mut rng)
            })
            .collect();

        Self {
            flakes,
            bounds,
            intensity: config::INITIAL_WEATHER_INTENSITY,
            weather_timer: 0.0,
            weather_interval: weather_interval.max(f32::EPSILON),
            rng,
        }
    }

    pub fn flakes(&self) -> &[Snowflake] {
        &self.flakes
    }

    pub fn len(&self) -> usize {
        self.flakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flakes.is_empty()
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Updates the area flakes fall through, e.g. after a window resize.
    pub fn set_bounds(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    /// Runs the weather clock and moves every flake.
    pub fn update(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }

        self.weather_timer += dt;
        if self.weather_timer > self.weather_interval {
            self.weather_timer = 0.0;
            let (lo, hi) = config::WEATHER_INTENSITY_RANGE;
            let intensity = self.rng.gen_range(lo..=hi);
            self.set_intensity(intensity);
        }

        for flake in &mut self.flakes {
            flake.position.y -= flake.fall_speed * dt;
            flake.drift_angle += self.rng.gen_range(0.1..=0.5);
            flake.position.x += flake.drift_angle.sin() * self.rng.gen_range(0.5..=1.5);

            if flake.position.y < 0.0 {
                flake.position.y = self.bounds.y + self.rng.gen_range(0.0..=50.0);
                flake.position.x = self.rng.gen_range(0.0..=self.bounds.x.max(0.0));
            }
        }
    }

    /// Applies a new weather intensity and resizes the flake collection to
    /// match it. New flakes enter just above the top edge; surplus flakes are
    /// dropped from the end.
    pub fn set_intensity(&mut self, intensity: f32) {
        let (lo, hi) = config::WEATHER_INTENSITY_RANGE;
        self.intensity = intensity.clamp(lo, hi);
        let target = target_snowflake_count(self.intensity);
        log::debug!(
            "Weather changed: intensity {:.2}, {} -> {} flakes",
            self.intensity,
            self.flakes.len(),
            target
        );

        while self.flakes.len() < target {
            let position = vec2(
                self.rng.gen_range(0.0..=self.bounds.x.max(0.0)),
                self.bounds.y + self.rng.gen_range(0.0..=50.0),
            );
            let flake = Snowflake::spawn(position, &mut self.rng);
            self.flakes.push(flake);
        }
        self.flakes.truncate(target);
    }
}

/// Everything the snowy map simulates besides the round itself.
#[derive(Debug, Clone)]
pub struct Ambient {
    pub day_night: DayNightCycle,
    pub snowfall: Snowfall,
}

impl Ambient {
    pub fn new(bounds: Vec2, seed: u64) -> Self {
        Self {
            day_night: DayNightCycle::default(),
            snowfall: Snowfall::new(
                bounds,
                config::INITIAL_SNOWFLAKE_COUNT,
                config::WEATHER_CHANGE_INTERVAL,
                seed,
            ),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.day_night.update(dt);
        self.snowfall.update(dt);
    }

    pub fn light_level(&self) -> f32 {
        self.day_night.light_level()
    }
}

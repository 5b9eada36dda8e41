//! # Round Phases
//!
//! The HIDING → SEEKING → FINISHED state machine and its two countdowns.
//!
//! A round starts in [`Phase::Hiding`]. When the hide countdown runs out the
//! hider disappears and the seeker is released. The seek phase ends either when
//! the seeker touches the hider or when the seek countdown runs out. A finished
//! round stays finished until [`Round::reset`] is called.

use crate::config;
use serde::{Deserialize, Serialize};

/// Current phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Hider is visible and moving, seeker waits
    Hiding,
    /// Hider is invisible, seeker hunts
    Seeking,
    /// Round is over, waiting for "Play Again" or "Back to Menu"
    Finished,
}

/// Who won a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Seeker touched the hider before time ran out
    SeekerWins,
    /// Seek countdown ran out first
    HiderWins,
}

impl Outcome {
    /// Banner text shown when the round ends.
    pub fn banner(&self) -> &'static str {
        match self {
            Outcome::SeekerWins => "Seeker Wins!",
            Outcome::HiderWins => "Hider Wins!",
        }
    }
}

/// Phase transitions reported by [`Round::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// HIDING → SEEKING
    SeekStarted,
    /// SEEKING → FINISHED
    Finished(Outcome),
}

/// Durations a round is played with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundTimings {
    pub hide_time: f32,
    pub seek_time: f32,
}

impl Default for RoundTimings {
    fn default() -> Self {
        Self {
            hide_time: config::HIDE_TIME,
            seek_time: config::SEEK_TIME,
        }
    }
}

/// Phase and timer state for one round on one map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    phase: Phase,
    hide_time_remaining: f32,
    seek_time_remaining: f32,
    hider_visible: bool,
    seeker_active: bool,
    outcome: Option<Outcome>,
    timings: RoundTimings,
}

impl Round {
    /// Starts a round in the hiding phase.
    ///
    /// # Examples
    ///
    /// ```
    /// use hideseek::{Phase, Round, RoundTimings};
    ///
    /// let round = Round::new(RoundTimings::default());
    /// assert_eq!(round.phase(), Phase::Hiding);
    /// assert!(round.hider_visible());
    /// assert!(!round.seeker_active());
    /// ```
    pub fn new(timings: RoundTimings) -> Self {
        Self {
            phase: Phase::Hiding,
            hide_time_remaining: timings.hide_time,
            seek_time_remaining: timings.seek_time,
            hider_visible: true,
            seeker_active: false,
            outcome: None,
            timings,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn hide_time_remaining(&self) -> f32 {
        self.hide_time_remaining
    }

    pub fn seek_time_remaining(&self) -> f32 {
        self.seek_time_remaining
    }

    pub fn hider_visible(&self) -> bool {
        self.hider_visible
    }

    pub fn seeker_active(&self) -> bool {
        self.seeker_active
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// True once the seeker has caught the hider.
    pub fn seeker_won(&self) -> bool {
        self.outcome == Some(Outcome::SeekerWins)
    }

    pub fn timings(&self) -> RoundTimings {
        self.timings
    }

    /// The actor that takes input this frame, if any.
    pub fn active_role(&self) -> Option<super::Role> {
        match self.phase {
            Phase::Hiding if self.hider_visible => Some(super::Role::Hider),
            Phase::Seeking if self.seeker_active => Some(super::Role::Seeker),
            _ => None,
        }
    }

    /// Whether seeker/hider contact is evaluated this frame.
    pub fn contact_checked(&self) -> bool {
        self.phase == Phase::Seeking && self.seeker_active
    }

    /// Advances the active countdown with no contact this frame.
    pub fn advance(&mut self, dt: f32) -> Option<RoundEvent> {
        self.step(dt, false)
    }

    /// Advances the active countdown by `dt` seconds and applies transitions.
    ///
    /// `contact` reports whether the seeker touched the hider this frame. It is
    /// only honoured while seeking with an active seeker, and it is resolved
    /// before the seek countdown: a catch on the same frame the timer expires
    /// is a seeker win. Negative or non-finite deltas count as zero.
    pub fn step(&mut self, dt: f32, contact: bool) -> Option<RoundEvent> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        match self.phase {
            Phase::Hiding => {
                self.hide_time_remaining = (self.hide_time_remaining - dt).max(0.0);
                if self.hide_time_remaining <= 0.0 {
                    self.hide_time_remaining = 0.0;
                    self.hider_visible = false;
                    self.seeker_active = true;
                    self.phase = Phase::Seeking;
                    log::info!("Hiding over, seeker released");
                    return Some(RoundEvent::SeekStarted);
                }
                None
            }
            Phase::Seeking => {
                self.seek_time_remaining = (self.seek_time_remaining - dt).max(0.0);
                if contact && self.seeker_active {
                    self.seeker_active = false;
                    return Some(self.finish(Outcome::SeekerWins));
                }
                if self.seek_time_remaining <= 0.0 {
                    self.seek_time_remaining = 0.0;
                    return Some(self.finish(Outcome::HiderWins));
                }
                None
            }
            Phase::Finished => None,
        }
    }

    fn finish(&mut self, outcome: Outcome) -> RoundEvent {
        self.phase = Phase::Finished;
        self.outcome = Some(outcome);
        log::info!("Round finished: {}", outcome.banner());
        RoundEvent::Finished(outcome)
    }

    /// Restores the round to its starting state.
    pub fn reset(&mut self) {
        *self = Self::new(self.timings);
    }

    /// Whole seconds shown in the overlay for the active countdown.
    pub fn timer_text(&self) -> Option<String> {
        match self.phase {
            Phase::Hiding => Some(format!("Hide time left: {}", self.hide_time_remaining as u32)),
            Phase::Seeking => Some(format!("Seek time left: {}", self.seek_time_remaining as u32)),
            Phase::Finished => None,
        }
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new(RoundTimings::default())
    }
}

//! # Pending Screen Transitions
//!
//! A short countdown between "leave this screen" and the actual swap, so the
//! frame that pressed the button finishes drawing with the old screen intact.

use crate::config;

/// Armed-or-idle countdown towards a screen swap.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTransition {
    active: bool,
    elapsed: f32,
    delay: f32,
}

impl PendingTransition {
    /// Creates an idle transition that fires `delay` seconds after arming.
    pub fn new(delay: f32) -> Self {
        Self {
            active: false,
            elapsed: 0.0,
            delay: delay.max(0.0),
        }
    }

    /// Starts (or restarts) the countdown.
    pub fn arm(&mut self) {
        self.active = true;
        self.elapsed = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Accumulates `dt` and returns true exactly once, on the frame the delay
    /// is reached. The transition is idle again afterwards.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.active {
            return false;
        }
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        if self.elapsed >= self.delay {
            self.active = false;
            self.elapsed = 0.0;
            return true;
        }
        false
    }
}

impl Default for PendingTransition {
    fn default() -> Self {
        Self::new(config::TRANSITION_DELAY)
    }
}

//! # Loading Screen
//!
//! Quotes, a fake progress bar, and a timed hand-off to map selection.
//!
//! All timers are countdown fields advanced by [`LoadingScreen::update`].
//! Dropping the screen drops them with it, so nothing can fire after the
//! player has moved on.

use crate::config;
use crate::scenes::{ScreenHost, ScreenRequest};
use crate::utils::wrap_text;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Quotes shown while loading.
pub const QUOTES: [&str; 10] = [
    "I don't hate San Antonio. I just don't like it.",
    "The only thing good in San Antonio is the River Walk.",
    "I was a fat guy. I didn't get offended when people said I was fat.",
    "The NBA is a big family, but we don't all like each other.",
    "If you go to a game and don't have fun, that's your fault!",
    "Some of these guys think because they can shoot threes, they're good. No.",
    "I may be wrong, but I doubt it.",
    "San Antonio got them big ol' women!",
    "Just because you watch YouTube doesn't make you an expert.",
    "I'm not a role model. Just because I dunk a basketball doesn't mean I should raise your kids.",
];

/// Attribution appended under every quote.
pub const QUOTE_ATTRIBUTION: &str = "-- Charles Barkley";

/// Characters per line when wrapping a quote.
const QUOTE_WRAP: usize = 40;

/// Simulated loading speed, in fraction per second.
const PROGRESS_RATE: f32 = 0.5;

/// Most dots shown after "Loading".
const MAX_DOTS: usize = 3;

/// State of the loading screen.
#[derive(Debug, Clone)]
pub struct LoadingScreen {
    quote: String,
    quote_countdown: f32,
    advance_countdown: Option<f32>,
    dots: usize,
    dot_timer: f32,
    progress: f32,
    idle_time: f32,
    rng: StdRng,
}

impl LoadingScreen {
    /// Creates the screen with a random first quote.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let quote = format_quote(QUOTES[rng.gen_range(0..QUOTES.len())]);
        log::info!("Loading screen initialized");
        Self {
            quote,
            quote_countdown: config::QUOTE_INTERVAL,
            advance_countdown: Some(config::LOADING_ADVANCE),
            dots: 0,
            dot_timer: 0.0,
            progress: 0.0,
            idle_time: 0.0,
            rng,
        }
    }

    /// Advances every timer by `dt` seconds.
    ///
    /// Requests [`ScreenRequest::MapSelection`] exactly once, on the frame
    /// the auto-advance countdown runs out.
    pub fn update(&mut self, dt: f32, host: &mut dyn ScreenHost) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.dot_timer += dt;
        if self.dot_timer >= config::DOT_INTERVAL {
            self.dot_timer = 0.0;
            self.dots = (self.dots + 1) % (MAX_DOTS + 1);
        }

        if self.is_loaded() {
            self.idle_time += dt;
        } else {
            self.progress = (self.progress + dt * PROGRESS_RATE).min(1.0);
        }

        // A long stall shows one new quote, not every quote it skipped
        self.quote_countdown -= dt;
        if self.quote_countdown <= 0.0 {
            self.quote_countdown = self.quote_countdown.rem_euclid(config::QUOTE_INTERVAL);
            if self.quote_countdown <= 0.0 {
                self.quote_countdown = config::QUOTE_INTERVAL;
            }
            self.next_quote();
        }

        if let Some(remaining) = self.advance_countdown.as_mut() {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.advance_countdown = None;
                log::info!("Transitioning to map selection");
                host.set_screen(ScreenRequest::MapSelection);
            }
        }
    }

    fn next_quote(&mut self) {
        let index = self.rng.gen_range(0..QUOTES.len());
        self.quote = format_quote(QUOTES[index]);
        log::debug!("Quote updated: {}", QUOTES[index]);
    }

    /// Wrapped quote text, attribution included.
    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// Simulated progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_loaded(&self) -> bool {
        self.progress >= 1.0
    }

    /// Seconds spent at 100%.
    pub fn idle_time(&self) -> f32 {
        self.idle_time
    }

    pub fn time_until_next_quote(&self) -> f32 {
        self.quote_countdown
    }

    /// Whether the hand-off to map selection is still pending.
    pub fn advance_pending(&self) -> bool {
        self.advance_countdown.is_some()
    }

    /// "Loading" followed by zero to three dots.
    pub fn loading_text(&self) -> String {
        format!("Loading{}", ".".repeat(self.dots))
    }

    /// The line under the progress bar, e.g. `Loading.. 50%`.
    pub fn progress_text(&self) -> String {
        format!(
            "{} {}%",
            self.loading_text(),
            (self.progress * 100.0) as u32
        )
    }
}

/// Wraps a quote and adds the attribution line.
pub fn format_quote(quote: &str) -> String {
    format!("{}\n{}", wrap_text(quote, QUOTE_WRAP), QUOTE_ATTRIBUTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingHost {
        requests: Vec<ScreenRequest>,
    }

    impl ScreenHost for RecordingHost {
        fn set_screen(&mut self, next: ScreenRequest) {
            self.requests.push(next);
        }
    }

    #[test]
    fn test_quote_is_wrapped_and_attributed() {
        let screen = LoadingScreen::new(1);
        let quote = screen.quote();
        assert!(quote.ends_with("\n-- Charles Barkley"));
        for line in quote.lines() {
            assert!(line.chars().count() <= 40);
        }
        let body = quote.trim_end_matches("\n-- Charles Barkley").replace('\n', " ");
        assert!(QUOTES.contains(&body.as_str()));
    }

    #[test]
    fn test_progress_is_clamped_and_reported_as_percent() {
        let mut screen = LoadingScreen::new(1);
        let mut host = RecordingHost::default();
        assert_eq!(screen.progress_text(), "Loading 0%");

        screen.update(0.25, &mut host);
        assert_eq!(screen.progress(), 0.125);
        assert_eq!(screen.progress_text(), "Loading 12%");

        screen.update(1.0, &mut host);
        screen.update(1.0, &mut host);
        assert_eq!(screen.progress(), 1.0);
        assert!(screen.is_loaded());

        screen.update(0.5, &mut host);
        assert_eq!(screen.progress(), 1.0);
        assert_eq!(screen.idle_time(), 0.5);
    }

    #[test]
    fn test_dots_cycle_every_half_second() {
        let mut screen = LoadingScreen::new(1);
        let mut host = RecordingHost::default();
        let mut seen = Vec::new();
        for _ in 0..5 {
            screen.update(0.5, &mut host);
            seen.push(screen.loading_text());
        }
        assert_eq!(
            seen,
            vec!["Loading.", "Loading..", "Loading...", "Loading", "Loading."]
        );
    }

    #[test]
    fn test_advances_to_map_selection_once() {
        let mut screen = LoadingScreen::new(1);
        let mut host = RecordingHost::default();
        for _ in 0..69 {
            screen.update(0.1, &mut host);
        }
        assert!(host.requests.is_empty());
        assert!(screen.advance_pending());

        for _ in 0..30 {
            screen.update(0.1, &mut host);
        }
        assert_eq!(host.requests, vec![ScreenRequest::MapSelection]);
        assert!(!screen.advance_pending());
    }

    #[test]
    fn test_quote_timer_is_periodic() {
        let mut screen = LoadingScreen::new(1);
        let mut host = RecordingHost::default();
        screen.update(5.0, &mut host);
        assert_eq!(screen.time_until_next_quote(), 1.0);
        screen.update(1.5, &mut host);
        assert_eq!(screen.time_until_next_quote(), 5.5);
        assert!(screen.quote().ends_with(QUOTE_ATTRIBUTION));
    }

    #[test]
    fn test_non_finite_frame_time_is_ignored() {
        let mut screen = LoadingScreen::new(1);
        let mut host = RecordingHost::default();
        screen.update(f32::INFINITY, &mut host);
        screen.update(f32::NAN, &mut host);
        assert_eq!(screen.progress(), 0.0);
        assert_eq!(screen.time_until_next_quote(), config::QUOTE_INTERVAL);
        assert!(screen.advance_pending());
        assert!(host.requests.is_empty());
    }

    #[test]
    fn test_huge_frame_time_advances_once() {
        let mut screen = LoadingScreen::new(1);
        let mut host = RecordingHost::default();
        screen.update(1.0e30, &mut host);
        assert!(screen.is_loaded());
        let left = screen.time_until_next_quote();
        assert!(left > 0.0 && left <= config::QUOTE_INTERVAL);
        assert_eq!(host.requests, vec![ScreenRequest::MapSelection]);
    }

    #[test]
    fn test_same_seed_same_first_quote() {
        assert_eq!(LoadingScreen::new(9).quote(), LoadingScreen::new(9).quote());
    }
}

//! Property tests for the round, actor, and snowfall invariants.

use hideseek::{
    target_snowflake_count, Actor, DirectionKeys, Phase, Round, RoundTimings, Snowfall, Steering,
};
use macroquad::math::vec2;
use proptest::prelude::*;

fn steering() -> impl Strategy<Value = Steering> {
    prop_oneof![
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(left, right, up, down)| Steering::Keys(DirectionKeys {
                left,
                right,
                up,
                down
            })
        ),
        (-5000.0f32..5000.0, -5000.0f32..5000.0).prop_map(|(x, y)| Steering::Pointer(vec2(x, y))),
    ]
}

proptest! {
    #[test]
    fn timers_never_go_negative(
        deltas in prop::collection::vec(0.0f32..30.0, 0..64),
        contacts in prop::collection::vec(any::<bool>(), 64),
    ) {
        let mut round = Round::new(RoundTimings::default());
        for (dt, contact) in deltas.iter().zip(contacts) {
            round.step(*dt, contact);
            prop_assert!(round.hide_time_remaining() >= 0.0);
            prop_assert!(round.seek_time_remaining() >= 0.0);
            match round.phase() {
                Phase::Hiding => prop_assert!(round.hide_time_remaining() > 0.0),
                Phase::Seeking => prop_assert!(round.seek_time_remaining() > 0.0),
                Phase::Finished => prop_assert!(round.outcome().is_some()),
            }
        }
    }

    #[test]
    fn hiding_ends_once_hide_time_is_spent(
        deltas in prop::collection::vec((1u32..10).prop_map(|n| n as f32 * 0.5), 1..40),
    ) {
        let mut round = Round::new(RoundTimings::default());
        let mut elapsed = 0.0;
        for dt in deltas {
            round.advance(dt);
            elapsed += dt;
            if elapsed >= 20.0 {
                break;
            }
        }
        if elapsed >= 20.0 {
            prop_assert_eq!(round.phase(), Phase::Seeking);
            prop_assert!(!round.hider_visible());
            prop_assert!(round.seeker_active());
        } else {
            prop_assert_eq!(round.phase(), Phase::Hiding);
        }
    }

    #[test]
    fn actor_stays_inside_playfield(
        start in (-100.0f32..3000.0, -100.0f32..3000.0),
        moves in prop::collection::vec((steering(), 0.0f32..2.0), 1..50),
        bonus in 0.0f32..400.0,
    ) {
        let playfield = vec2(1920.0, 1080.0);
        let mut actor = Actor::new(vec2(start.0, start.1), vec2(64.0, 64.0), 200.0);
        actor.set_speed_bonus(bonus);
        for (steering, dt) in moves {
            actor.update_position(steering, dt, playfield);
            prop_assert!(actor.position.x >= 0.0 && actor.position.x <= playfield.x - actor.size.x);
            prop_assert!(actor.position.y >= 0.0 && actor.position.y <= playfield.y - actor.size.y);
        }
    }

    #[test]
    fn snowfall_converges_to_target_count(intensity in 0.2f32..=1.0, seed in any::<u64>()) {
        let mut snow = Snowfall::new(vec2(1920.0, 1080.0), 300, 15.0, seed);
        snow.set_intensity(intensity);
        prop_assert_eq!(snow.len(), target_snowflake_count(intensity));
        prop_assert_eq!(
            snow.len(),
            (200.0 + 300.0 * intensity).round() as usize
        );
    }
}

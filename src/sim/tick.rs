//! Per-frame vitals decay and progress
//!
//! Low energy slows the runner (speed multiplier 0.5-1.5), which in turn
//! stretches the time between pickups.

use super::state::{GameState, GameStatus};
use crate::tuning::Tuning;

/// Advance a playing run by `dt` seconds
///
/// Does nothing unless the run is Playing. When hydration or energy reaches
/// zero the run ends on this same call with the clamped vitals kept, so the
/// end screen can tell dehydration from exhaustion. Distance does not advance
/// on the ending tick.
pub fn tick(state: &mut GameState, tuning: &Tuning, dt: f32) {
    if state.status != GameStatus::Playing || !(dt > 0.0) || !dt.is_finite() {
        return;
    }

    state.vitals.decay(
        tuning.hydration_decay,
        tuning.energy_decay,
        tuning.calorie_burn,
        dt,
    );

    if state.vitals.depleted() {
        state.status = GameStatus::Ended;
        log::info!(
            "Run ended: hydration {:.1}, energy {:.1}, score {}, distance {:.1}",
            state.vitals.hydration,
            state.vitals.energy,
            state.score,
            state.distance
        );
        return;
    }

    state.distance += tuning.base_speed * dt * state.vitals.speed_multiplier();
    state.refresh_score();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::catalog::find_item;

    fn playing() -> GameState {
        let mut state = GameState::default();
        state.start();
        state
    }

    #[test]
    fn test_one_second_scenario() {
        let mut state = playing();
        tick(&mut state, &Tuning::default(), 1.0);

        assert!((state.vitals.hydration - 98.0).abs() < 1e-5);
        assert!((state.vitals.energy - 98.5).abs() < 1e-5);
        assert!((state.vitals.calories - 5.0).abs() < 1e-5);
        assert!((state.distance - 14.85).abs() < 1e-4);
        assert_eq!(state.score, 14);
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn test_no_tick_unless_playing() {
        let tuning = Tuning::default();
        let mut state = GameState::default();
        tick(&mut state, &tuning, 1.0);
        assert_eq!(state.distance, 0.0);
        assert_eq!(state.vitals.hydration, 100.0);

        state.start();
        state.pause();
        tick(&mut state, &tuning, 1.0);
        assert_eq!(state.distance, 0.0);
        assert_eq!(state.vitals.energy, 100.0);
    }

    #[test]
    fn test_non_finite_dt_is_ignored() {
        let tuning = Tuning::default();
        let mut state = playing();
        for dt in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -1.0] {
            tick(&mut state, &tuning, dt);
        }
        assert_eq!(state.vitals.hydration, 100.0);
        assert_eq!(state.vitals.energy, 100.0);
        assert_eq!(state.distance, 0.0);
        assert_eq!(state.status, GameStatus::Playing);

        // The run still progresses and ends normally afterwards
        for _ in 0..50 {
            tick(&mut state, &tuning, 1.0);
        }
        assert_eq!(state.status, GameStatus::Ended);
        assert_eq!(state.vitals.hydration, 0.0);
    }

    #[test]
    fn test_dehydration_ends_on_exact_zero() {
        let tuning = Tuning::default();
        let mut state = playing();
        // 2/s hydration decay: 50 one-second ticks empty it exactly
        for _ in 0..49 {
            tick(&mut state, &tuning, 1.0);
            assert_eq!(state.status, GameStatus::Playing);
        }
        let distance_before = state.distance;
        tick(&mut state, &tuning, 1.0);

        assert_eq!(state.status, GameStatus::Ended);
        assert_eq!(state.vitals.hydration, 0.0);
        assert!(state.vitals.energy > 0.0);
        assert_eq!(state.distance, distance_before);

        // Further ticks are ignored
        tick(&mut state, &tuning, 1.0);
        assert_eq!(state.vitals.hydration, 0.0);
    }

    #[test]
    fn test_overshoot_clamps_to_zero() {
        let tuning = Tuning::default();
        let mut state = playing();
        state.vitals.energy = 1.0;
        tick(&mut state, &tuning, 10.0);
        assert_eq!(state.status, GameStatus::Ended);
        assert_eq!(state.vitals.energy, 0.0);
        assert!(state.vitals.hydration > 0.0);
    }

    #[test]
    fn test_low_energy_slows_progress() {
        let tuning = Tuning::default();
        let mut fresh = playing();
        let mut tired = playing();
        tired.vitals.energy = 20.0;
        tick(&mut fresh, &tuning, 0.5);
        tick(&mut tired, &tuning, 0.5);
        assert!(tired.distance < fresh.distance);
    }

    #[test]
    fn test_score_keeps_pickup_bonus() {
        let tuning = Tuning::default();
        let mut state = playing();
        state.collect_item(find_item("water").unwrap());
        assert_eq!(state.score, 100);
        tick(&mut state, &tuning, 1.0);
        assert_eq!(state.score, 100 + state.distance.floor() as u64);
    }

    #[test]
    fn test_score_monotonic() {
        let tuning = Tuning::default();
        let mut state = playing();
        let mut last = state.score;
        for _ in 0..200 {
            tick(&mut state, &tuning, 1.0 / 60.0);
            assert!(state.score >= last);
            last = state.score;
        }
    }
}

//! Difficulty ramp
//!
//! Obstacle speed creeps up with elapsed time. Below the late-regime score it
//! grows slowly toward a low cap; from there on it grows faster toward a
//! higher one. The regime is re-evaluated every frame.

use crate::tuning::Tuning;

/// Rate (per ms) and cap for the given score
pub fn regime(score: u32, tuning: &Tuning) -> (f32, f32) {
    if score < tuning.late_regime_score {
        (tuning.early_speed_rate, tuning.early_max_speed)
    } else {
        (tuning.late_speed_rate, tuning.late_max_speed)
    }
}

/// Speed after `dt_ms` of ramping at `score`
pub fn ramp(speed: f32, score: u32, dt_ms: f64, tuning: &Tuning) -> f32 {
    let (rate, cap) = regime(score, tuning);
    if speed >= cap {
        return speed;
    }
    (speed + rate * dt_ms as f32).min(cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_early_regime() {
        let tuning = Tuning::default();
        let speed = ramp(3.0, 0, 1000.0, &tuning);
        assert!((speed - 3.3).abs() < 1e-5);
    }

    #[test]
    fn test_early_cap() {
        let tuning = Tuning::default();
        assert_eq!(ramp(4.99, 5, 1000.0, &tuning), 5.0);
        assert_eq!(ramp(5.0, 19, 1000.0, &tuning), 5.0);
    }

    #[test]
    fn test_switches_regime_at_threshold() {
        let tuning = Tuning::default();
        // Capped in the early regime, free to grow in the late one
        assert_eq!(ramp(5.0, 19, 100.0, &tuning), 5.0);
        let speed = ramp(5.0, 20, 100.0, &tuning);
        assert!((speed - 5.1).abs() < 1e-5);
        assert_eq!(ramp(6.99, 40, 1000.0, &tuning), 7.0);
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let tuning = Tuning::default();
        assert_eq!(ramp(3.0, 0, 0.0, &tuning), 3.0);
    }

    proptest! {
        #[test]
        fn prop_never_decreases_and_respects_cap(
            steps in proptest::collection::vec((0u32..60, 0.0f64..100.0), 1..500),
        ) {
            let tuning = Tuning::default();
            let mut speed = tuning.base_speed;
            let mut score = 0;
            for (gain, dt) in steps {
                // Score only moves up
                score += gain % 3;
                let next = ramp(speed, score, dt, &tuning);
                prop_assert!(next >= speed);
                prop_assert!(next <= tuning.late_max_speed);
                speed = next;
            }
        }
    }
}

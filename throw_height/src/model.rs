//! Shannon's juggling theorem for a cascade, `(F + D) / (V + D) = B / H`,
//! rewritten in terms of the delay ratio `R = D / (D + V)` and the number of
//! balls per arc `Y = F / (D + V)` so that `R + Y = B / H`.
//!
//! Throws and catches happen at the same height, hence `F = sqrt(8h / g)`.

use num::Integer;
use thiserror::Error;

use crate::constants::{GRAVITY, NUMBER_OF_ARCHES, NUMBER_OF_HANDS};

#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("delay ratio {rmin} for {balls} balls is outside (0, {limit})")]
    DelayRatioOutOfRange { balls: u32, rmin: f64, limit: f64 },
}

pub fn balls_per_hand(balls: u32) -> f64 {
    balls as f64 / NUMBER_OF_HANDS
}

/// Smallest delay ratio that still gives a uniform pattern, assuming an ideal
/// juggler who never holds more than one ball at a time.
pub fn min_delay_ratio(balls: u32) -> f64 {
    balls_per_hand(balls) - (balls as f64 - 1.0) / NUMBER_OF_ARCHES
}

pub fn check_delay_ratio(balls: u32) -> Result<f64, ModelError> {
    let rmin = min_delay_ratio(balls);
    let limit = balls_per_hand(balls);
    if rmin > 0.0 && rmin < limit {
        Ok(rmin)
    } else {
        Err(ModelError::DelayRatioOutOfRange { balls, rmin, limit })
    }
}

pub fn flight_time(height: f64) -> f64 {
    (8.0 * height / GRAVITY).sqrt()
}

pub fn launch_speed(height: f64) -> f64 {
    (2.0 * GRAVITY * height).sqrt()
}

pub fn dwell_time(balls: u32, height: f64) -> f64 {
    let rmin = min_delay_ratio(balls);
    flight_time(height) * rmin / (balls_per_hand(balls) - rmin)
}

/// Inverse of [`dwell_time`]: the height at which the hold time is exactly `dwell`.
pub fn height_for_dwell(balls: u32, dwell: f64) -> f64 {
    let rmin = min_delay_ratio(balls);
    let flight = dwell * (balls_per_hand(balls) - rmin) / rmin;
    GRAVITY * flight * flight / 8.0
}

pub fn is_uniquely_uniform(balls: u32, hands: u32) -> bool {
    balls.gcd(&hands) == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HANDS;
    use itertools::Itertools;
    use rstest::rstest;

    #[rstest]
    #[case(3)]
    #[case(5)]
    #[case(7)]
    #[case(15)]
    fn min_delay_ratio_of_odd_counts(#[case] balls: u32) {
        assert_eq!(min_delay_ratio(balls), 0.5);
        assert_eq!(check_delay_ratio(balls), Ok(0.5));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn no_pattern_below_two_balls(#[case] balls: u32) {
        assert!(matches!(
            check_delay_ratio(balls),
            Err(ModelError::DelayRatioOutOfRange { balls: b, .. }) if b == balls
        ));
    }

    #[rstest]
    #[case(3)]
    #[case(9)]
    #[case(15)]
    fn dwell_time_grows_with_height(#[case] balls: u32) {
        let dwells = (1..=2500)
            .map(|i| dwell_time(balls, i as f64 * 0.01))
            .collect::<Vec<_>>();
        assert!(dwells.iter().tuple_windows().all(|(a, b)| a < b));
    }

    #[rstest]
    #[case(3, 0.15)]
    #[case(7, 0.2)]
    #[case(15, 0.3)]
    fn height_for_dwell_inverts_dwell_time(#[case] balls: u32, #[case] dwell: f64) {
        let height = height_for_dwell(balls, dwell);
        assert!((dwell_time(balls, height) - dwell).abs() < 1e-12);
    }

    #[test]
    fn three_ball_cascade_numbers() {
        // 0.3 s of flight for a 0.15 s hold, i.e. h = g * 0.09 / 8.
        assert!((height_for_dwell(3, 0.15) - 0.1103625).abs() < 1e-12);
        assert!((flight_time(0.1103625) - 0.3).abs() < 1e-12);
        assert!((launch_speed(0.1103625) - GRAVITY * 0.3 / 2.0).abs() < 1e-12);
    }

    #[rstest]
    #[case(3, HANDS, true)]
    #[case(5, HANDS, true)]
    #[case(4, HANDS, false)]
    #[case(6, 3, false)]
    fn uniqueness(#[case] balls: u32, #[case] hands: u32, #[case] expected: bool) {
        assert_eq!(is_uniquely_uniform(balls, hands), expected);
    }
}

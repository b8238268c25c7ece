//! Shared contract and helpers for the workout variants.
//!
//! Every variant shares the same raw readings ([`Session`]) and exposes the
//! three metrics through [`Training`]. Default formulas are free functions the
//! variants call explicitly.

use crate::core::message::InfoMessage;
use crate::error::{Result, TrainingError};

/// Default stride length for step-based workouts, metres.
pub const LEN_STEP_M: f64 = 0.65;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Readings common to every workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    /// Steps or strokes.
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
}

impl Session {
    /// Build a session, rejecting a zero duration that would divide by zero.
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self> {
        non_zero("duration_h", duration_h)?;
        Ok(Self {
            action,
            duration_h,
            weight_kg,
        })
    }

    /// Session duration in minutes.
    pub fn duration_min(&self) -> f64 {
        self.duration_h * MIN_IN_H
    }
}

/// Metrics every workout variant computes.
pub trait Training {
    /// Name printed in the report line.
    fn label(&self) -> &'static str;

    fn session(&self) -> &Session;

    /// Distance in kilometres.
    fn distance(&self) -> f64;

    /// Average speed over the whole session, km/h.
    fn mean_speed(&self) -> f64;

    /// Energy spent, kcal.
    fn spent_calories(&self) -> f64;

    /// Summarize the workout into a report record.
    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            self.label(),
            self.session().duration_h,
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        )
    }
}

/// Distance covered by `action` strides of `step_len_m` metres, in km.
pub fn distance_km(action: u32, step_len_m: f64) -> f64 {
    f64::from(action) * step_len_m / M_IN_KM
}

/// Distance over duration, km/h.
pub fn mean_speed(distance_km: f64, duration_h: f64) -> f64 {
    distance_km / duration_h
}

/// Floating-point floor division.
///
/// Derives the quotient from the remainder instead of flooring `a / b`, so
/// results whose true quotient sits just below an integer are not rounded up
/// (`floor_div(1.0, 0.1) == 9.0`).
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

/// Convert a raw reading into a count, rejecting negative, fractional and
/// oversized values.
pub fn whole_count(field: &'static str, value: f64) -> Result<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(TrainingError::InvalidArgument { field, value });
    }
    if value > f64::from(u32::MAX) {
        return Err(TrainingError::OutOfRange {
            field,
            value,
            max: u32::MAX,
        });
    }
    Ok(value as u32)
}

/// Reject a zero divisor.
pub fn non_zero(field: &'static str, value: f64) -> Result<f64> {
    if value == 0.0 {
        return Err(TrainingError::ZeroDivisor { field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_uses_stride_length() {
        assert!((distance_km(15_000, LEN_STEP_M) - 9.75).abs() < 1e-9);
        assert_eq!(distance_km(0, LEN_STEP_M), 0.0);
    }

    #[test]
    fn mean_speed_divides_by_hours() {
        assert!((mean_speed(9.0, 1.5) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn floor_div_truncates_toward_negative_infinity() {
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
        assert_eq!(floor_div(400.0, 180.0), 2.0);
        assert_eq!(floor_div(-1.0, 180.0), -1.0);
        assert_eq!(floor_div(7.0, -2.0), -4.0);
    }

    #[test]
    fn floor_div_uses_remainder_not_rounded_quotient() {
        // 1.0 / 0.1 rounds to 10.0, but 0.1 does not divide 1.0 exactly.
        assert_eq!(floor_div(1.0, 0.1), 9.0);
    }

    #[test]
    fn whole_count_rejects_fractions_and_negatives() {
        assert_eq!(whole_count("action", 720.0), Ok(720));
        assert!(matches!(
            whole_count("action", 1.5),
            Err(TrainingError::InvalidArgument { field: "action", .. })
        ));
        assert!(whole_count("action", -1.0).is_err());
        assert!(whole_count("action", f64::NAN).is_err());
    }

    #[test]
    fn whole_count_reports_oversized_counts_as_out_of_range() {
        assert_eq!(whole_count("action", f64::from(u32::MAX)), Ok(u32::MAX));
        assert_eq!(
            whole_count("action", 5_000_000_000.0),
            Err(TrainingError::OutOfRange {
                field: "action",
                value: 5_000_000_000.0,
                max: u32::MAX,
            })
        );
    }

    #[test]
    fn session_rejects_zero_duration() {
        assert_eq!(
            Session::new(1, 0.0, 70.0),
            Err(TrainingError::ZeroDivisor { field: "duration_h" })
        );
        let session = Session::new(1, 1.5, 70.0).expect("session");
        assert_eq!(session.duration_min(), 90.0);
    }
}

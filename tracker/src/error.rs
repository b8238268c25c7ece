//! Typed failures raised while turning raw sensor packages into workouts.

use thiserror::Error;

/// Errors produced by the dispatcher and the workout constructors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainingError {
    #[error("unknown workout type '{code}'; expected one of: {expected}")]
    UnknownWorkoutType { code: String, expected: String },

    #[error("{code} expects {expected} arguments ({order}), got {got}")]
    ArgumentCount {
        code: &'static str,
        order: String,
        expected: usize,
        got: usize,
    },

    #[error("{field} must be a non-negative whole number (got {value})")]
    InvalidArgument { field: &'static str, value: f64 },

    #[error("{field} is out of range (got {value}, max {max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        max: u32,
    },

    #[error("{field} must be non-zero")]
    ZeroDivisor { field: &'static str },
}

pub type Result<T> = std::result::Result<T, TrainingError>;

impl TrainingError {
    /// Build an `UnknownWorkoutType` listing every recognised code.
    pub fn unknown(code: impl Into<String>) -> Self {
        let expected = crate::core::workout::WorkoutType::ALL
            .iter()
            .map(|kind| kind.code())
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnknownWorkoutType {
            code: code.into(),
            expected,
        }
    }

    pub fn is_unknown_workout(&self) -> bool {
        matches!(self, Self::UnknownWorkoutType { .. })
    }
}

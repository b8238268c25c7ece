//! Workout codes and the tagged union over the concrete variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::running::Running;
use crate::core::swimming::Swimming;
use crate::core::training::{Session, Training};
use crate::core::walking::SportsWalking;
use crate::error::TrainingError;

/// Three-letter code selecting a workout variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "SWM")]
    Swimming,
    #[serde(rename = "WLK")]
    Walking,
}

impl WorkoutType {
    /// All codes, in listing order.
    pub const ALL: [WorkoutType; 3] = [Self::Running, Self::Swimming, Self::Walking];

    pub fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::Swimming => "SWM",
            Self::Walking => "WLK",
        }
    }

    /// Positional argument names expected for this code.
    pub fn argument_names(self) -> &'static [&'static str] {
        match self {
            Self::Running => &["action", "duration_h", "weight_kg"],
            Self::Walking => &["action", "duration_h", "weight_kg", "height_cm"],
            Self::Swimming => &[
                "action",
                "duration_h",
                "weight_kg",
                "pool_length_m",
                "pool_count",
            ],
        }
    }

    pub fn arity(self) -> usize {
        self.argument_names().len()
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WorkoutType {
    type Err = TrainingError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| TrainingError::unknown(code))
    }
}

/// A constructed workout of any supported kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn kind(&self) -> WorkoutType {
        match self {
            Self::Running(_) => WorkoutType::Running,
            Self::Walking(_) => WorkoutType::Walking,
            Self::Swimming(_) => WorkoutType::Swimming,
        }
    }

    fn as_training(&self) -> &dyn Training {
        match self {
            Self::Running(inner) => inner,
            Self::Walking(inner) => inner,
            Self::Swimming(inner) => inner,
        }
    }
}

impl Training for Workout {
    fn label(&self) -> &'static str {
        self.as_training().label()
    }

    fn session(&self) -> &Session {
        self.as_training().session()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}

//! Turn a workout code and its flat argument list into a [`Workout`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::running::Running;
use crate::core::swimming::Swimming;
use crate::core::training::{Session, whole_count};
use crate::core::walking::SportsWalking;
use crate::core::workout::{Workout, WorkoutType};
use crate::error::{Result, TrainingError};

/// One raw sensor package: a workout code plus positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    pub fn read(&self) -> Result<Workout> {
        read_package(&self.workout_type, &self.data)
    }
}

/// Construct the workout selected by `code` from positional `data`.
///
/// Fails with [`TrainingError::UnknownWorkoutType`] for unrecognised codes and
/// with a typed construction error when `data` has the wrong arity or values
/// the formulas cannot use.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout> {
    let kind: WorkoutType = code.parse()?;
    if data.len() != kind.arity() {
        return Err(TrainingError::ArgumentCount {
            code: kind.code(),
            order: kind.argument_names().join(", "),
            expected: kind.arity(),
            got: data.len(),
        });
    }
    debug!(code = kind.code(), ?data, "dispatching package");

    let session = Session::new(whole_count("action", data[0])?, data[1], data[2])?;
    let workout = match kind {
        WorkoutType::Running => Workout::Running(Running::new(session)),
        WorkoutType::Walking => Workout::Walking(SportsWalking::new(session, data[3])?),
        WorkoutType::Swimming => Workout::Swimming(Swimming::new(
            session,
            data[3],
            whole_count("pool_count", data[4])?,
        )),
    };
    Ok(workout)
}

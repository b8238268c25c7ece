//! Rendered summary of one finished workout.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Computed metrics for a single workout.
///
/// Built once per report by [`Training::show_training_info`] and only read
/// afterwards.
///
/// [`Training::show_training_info`]: crate::core::training::Training::show_training_info
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours.
    pub duration: f64,
    /// Kilometres.
    pub distance: f64,
    /// Kilometres per hour.
    pub speed: f64,
    /// Kilocalories.
    pub calories: f64,
}

impl InfoMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Render the fixed one-line report template.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type of training: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Average speed: {:.3} km/h; Calories spent: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

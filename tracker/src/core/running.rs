//! Running: stride-based distance, speed-driven calories.

use crate::core::training::{
    LEN_STEP_M, M_IN_KM, MIN_IN_H, Session, Training, distance_km, mean_speed,
};

const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_SPEED_SHIFT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    session: Session,
}

impl Running {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Training for Running {
    fn label(&self) -> &'static str {
        "Running"
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn distance(&self) -> f64 {
        distance_km(self.session.action, LEN_STEP_M)
    }

    fn mean_speed(&self) -> f64 {
        mean_speed(self.distance(), self.session.duration_h)
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_SPEED_MULTIPLIER * self.mean_speed() - CALORIES_SPEED_SHIFT)
            * self.session.weight_kg
            / M_IN_KM
            * self.session.duration_h
            * MIN_IN_H
    }
}

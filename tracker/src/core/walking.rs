//! Sports walking: stride-based distance, height-adjusted calories.

use crate::core::training::{
    LEN_STEP_M, Session, Training, distance_km, floor_div, mean_speed, non_zero,
};
use crate::error::Result;

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    session: Session,
    height_cm: f64,
}

impl SportsWalking {
    pub fn new(session: Session, height_cm: f64) -> Result<Self> {
        non_zero("height_cm", height_cm)?;
        Ok(Self { session, height_cm })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn label(&self) -> &'static str {
        "SportsWalking"
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

    /// The squared-speed term is floor-divided by height, so it only
    /// contributes once speed² reaches the height in centimetres.
    fn spent_calories(&self) -> f64 {
        let weight = self.session.weight_kg;
        let speed_term = floor_div(self.mean_speed().powi(2), self.height_cm);
        (CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_term * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.session.duration_min()
    }
}

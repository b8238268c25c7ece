//! Swimming: stroke-based distance, pool-geometry speed.

use crate::core::training::{M_IN_KM, Session, Training, distance_km};

/// Distance covered by one stroke, metres.
pub const LEN_STROKE_M: f64 = 1.38;
const CALORIES_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    session: Session,
    pool_length_m: f64,
    pool_count: u32,
}

impl Swimming {
    pub fn new(session: Session, pool_length_m: f64, pool_count: u32) -> Self {
        Self {
            session,
            pool_length_m,
            pool_count,
        }
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_count(&self) -> u32 {
        self.pool_count
    }
}

impl Training for Swimming {
    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn session(&self) -> &Session {
        &self.session
    }

    /// Stroke-based; independent of the pool geometry.
    fn distance(&self) -> f64 {
        distance_km(self.session.action, LEN_STROKE_M)
    }

    fn mean_speed(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_count) / M_IN_KM / self.session.duration_h
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.session.weight_kg
    }
}

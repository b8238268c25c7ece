//! Fitness training statistics from raw sensor packages.
//!
//! A package is a workout code (`RUN`, `WLK`, `SWM`) plus positional readings.
//! The crate turns packages into workouts, computes distance, mean speed and
//! spent calories, and renders one report line per workout.
//!
//! - **[`core`]**: Pure, deterministic formulas and workout types. No I/O.
//! - **[`io`]**: Config and package files.
//!
//! Orchestration modules ([`dispatch`], [`report`], [`samples`]) connect core
//! logic with I/O to implement CLI commands.

pub mod core;
pub mod dispatch;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
pub mod samples;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::{Result, TrainingError};

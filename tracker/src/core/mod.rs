//! Deterministic, pure workout formulas.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! sensor readings and return deterministic metrics suitable for tests.

pub mod message;
pub mod running;
pub mod swimming;
pub mod training;
pub mod walking;
pub mod workout;

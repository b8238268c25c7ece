//! Stable exit codes for tracker CLI commands.

/// Every package was reported.
pub const OK: i32 = 0;
/// Invalid arguments, config, package file, or other errors.
pub const INVALID: i32 = 1;
/// A package carried an unknown workout code and stopped the run.
pub const UNKNOWN_WORKOUT: i32 = 2;

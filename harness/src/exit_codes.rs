//! Stable exit codes for harness runs.

/// Result printed, or the challenge body exposes no `solution`.
pub const OK: i32 = 0;
/// Argument mismatch, invocation failure, or an invalid case/config.
pub const FAILURE: i32 = 1;

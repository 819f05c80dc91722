//! Stable exit codes for the `aoc` binary.

/// Solved, and every self-test answer matched.
pub const OK: i32 = 0;
/// Bad command line, or input that could not be acquired, parsed or solved.
pub const INVALID: i32 = 1;
/// Self-test answer differed from the expected value.
pub const MISMATCH: i32 = 2;

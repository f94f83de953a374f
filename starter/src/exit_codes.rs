//! Stable exit codes for the starter binary.

/// The program ran to completion. This is the only code it exits with.
pub const OK: i32 = 0;
